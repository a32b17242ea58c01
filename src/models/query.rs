use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upstream aggregate table every chart reads from
pub const DEFAULT_MODEL: &str = "hourly";

/// Which aggregate a chart displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Hourly,
    Monthly,
    Country,
    Category,
    Archive,
}

/// Dimension the grouped-totals endpoint aggregates by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Archive,
    Category,
    Country,
}

impl GroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Archive => "archive",
            GroupBy::Category => "category",
            GroupBy::Country => "country",
        }
    }

    fn metric(&self) -> Metric {
        match self {
            GroupBy::Archive => Metric::Archive,
            GroupBy::Category => Metric::Category,
            GroupBy::Country => Metric::Country,
        }
    }
}

/// Parameters identifying one upstream aggregate.
///
/// A query is immutable once built; changing the date or timezone means
/// building a new query and issuing a new load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartQuery {
    pub metric: Metric,
    pub group_by: Option<GroupBy>,
    pub date: Option<NaiveDate>,
    pub timezone: Option<String>,
    pub model: String,
}

/// Upstream path plus its query string pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl ChartQuery {
    /// Hourly totals for `date`, or for today when `date` is `None`
    pub fn hourly(timezone: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            metric: Metric::Hourly,
            group_by: None,
            date,
            timezone: Some(timezone.into()),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn monthly() -> Self {
        Self {
            metric: Metric::Monthly,
            group_by: None,
            date: None,
            timezone: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn grouped(group_by: GroupBy) -> Self {
        Self {
            metric: group_by.metric(),
            group_by: Some(group_by),
            date: None,
            timezone: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// True for the hourly view of a single day, the only view that
    /// reports an empty upstream answer as "no data yet"
    pub fn is_day_level(&self) -> bool {
        self.metric == Metric::Hourly
    }

    /// Response field holding the record label
    pub fn label_field(&self) -> &'static str {
        match self.metric {
            Metric::Hourly => "hour",
            Metric::Monthly => "time_group",
            Metric::Country => "country",
            Metric::Category => "category",
            Metric::Archive => "archive",
        }
    }

    /// Response field holding the record total
    pub fn total_field(&self) -> &'static str {
        match self.metric {
            Metric::Hourly => "total_primary",
            Metric::Monthly => "total_sum",
            Metric::Country | Metric::Category | Metric::Archive => "data",
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        let timezone = self.timezone.clone().unwrap_or_else(|| "UTC".to_string());

        match self.metric {
            Metric::Hourly => match self.date {
                Some(date) => Endpoint {
                    path: "/get_daily_downloads",
                    params: vec![
                        ("timezone", timezone),
                        ("date", date.format("%Y-%m-%d").to_string()),
                    ],
                },
                None => Endpoint {
                    path: "/get_todays_downloads",
                    params: vec![("model", self.model.clone()), ("timezone", timezone)],
                },
            },
            Metric::Monthly => Endpoint {
                path: "/get_global_sum",
                params: vec![
                    ("model", self.model.clone()),
                    ("time_group", "month".to_string()),
                ],
            },
            Metric::Country | Metric::Category | Metric::Archive => {
                let group_by = self.group_by.unwrap_or(match self.metric {
                    Metric::Country => GroupBy::Country,
                    Metric::Category => GroupBy::Category,
                    _ => GroupBy::Archive,
                });
                Endpoint {
                    path: "/get_data",
                    params: vec![
                        ("model", self.model.clone()),
                        ("group_by", group_by.as_str().to_string()),
                    ],
                }
            }
        }
    }
}
