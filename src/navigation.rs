//! Date selection for the hourly chart
//!
//! "Today" is evaluated in the viewer's timezone. No control may move the
//! selection past today, whether the next-day button or a typed date.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("date {0} is later than today ({1})")]
    FutureDate(NaiveDate, NaiveDate),
    #[error("unknown timezone '{0}'")]
    InvalidTimezone(String),
}

pub fn parse_timezone(name: &str) -> Result<Tz, NavigationError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| NavigationError::InvalidTimezone(name.to_string()))
}

/// Neighbouring dates offered by the prev/next controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub selected: NaiveDate,
    pub today: NaiveDate,
    pub previous: Option<NaiveDate>,
    pub next: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNavigator {
    today: NaiveDate,
}

impl DateNavigator {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn for_timezone(tz: Tz) -> Self {
        Self::at(Utc::now(), tz)
    }

    pub fn at(now: DateTime<Utc>, tz: Tz) -> Self {
        Self::new(now.with_timezone(&tz).date_naive())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Accept `date` unless it lies after today
    pub fn select(&self, date: NaiveDate) -> Result<NaiveDate, NavigationError> {
        if date > self.today {
            Err(NavigationError::FutureDate(date, self.today))
        } else {
            Ok(date)
        }
    }

    /// Validate a manually entered `YYYY-MM-DD` date
    pub fn parse_input(&self, input: &str) -> Result<NaiveDate, NavigationError> {
        let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map_err(|_| NavigationError::InvalidDate(input.to_string()))?;
        self.select(date)
    }

    pub fn previous(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.pred_opt()
    }

    /// Day after `date`, or `None` when that would be later than today
    pub fn next(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.succ_opt().filter(|next| *next <= self.today)
    }

    pub fn can_go_next(&self, date: NaiveDate) -> bool {
        self.next(date).is_some()
    }

    pub fn navigation(&self, selected: NaiveDate) -> Navigation {
        let selected = selected.min(self.today);
        Navigation {
            selected,
            today: self.today,
            previous: self.previous(selected),
            next: self.next(selected),
        }
    }

    /// Step `days` from `date`, clamped so the result is never after today
    pub fn shift(&self, date: NaiveDate, days: i64) -> NaiveDate {
        TimeDelta::try_days(days)
            .and_then(|delta| date.checked_add_signed(delta))
            .unwrap_or(date)
            .min(self.today)
    }
}
