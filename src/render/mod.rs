//! Chart renderers: pure mappings from records to Plotly specs
//!
//! Every chart type supplies one [`ChartRenderer`]. Renderers hold no
//! state, so rendering the same records in the same context always
//! yields the same spec.

pub mod archive;
pub mod category;
pub mod country;
pub mod hourly;
pub mod monthly;
pub mod palette;
pub mod spec;

use chrono::NaiveDate;

use crate::models::ChartRecord;

pub use archive::ArchiveRenderer;
pub use category::CategoryRenderer;
pub use country::CountryRenderer;
pub use hourly::HourlyRenderer;
pub use monthly::MonthlyRenderer;
pub use spec::ChartSpec;

/// Viewer context a renderer may fold into titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub timezone: String,
    /// Selected day for date-navigable charts; `None` means today
    pub date: Option<NaiveDate>,
}

impl RenderContext {
    pub fn new(timezone: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            timezone: timezone.into(),
            date,
        }
    }
}

pub trait ChartRenderer: Send + Sync {
    fn render(&self, records: &[ChartRecord], ctx: &RenderContext) -> ChartSpec;
}

pub(crate) fn labels(records: &[ChartRecord]) -> Vec<String> {
    records.iter().map(|r| r.label.clone()).collect()
}

pub(crate) fn totals(records: &[ChartRecord]) -> Vec<u64> {
    records.iter().map(|r| r.total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartKind;

    #[test]
    fn test_every_renderer_is_idempotent() {
        let records = vec![
            ChartRecord::new("cs.AI", 120),
            ChartRecord::new("math.CO", 80),
        ];
        let ctx = RenderContext::new(
            "Europe/Berlin",
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        );

        for kind in ChartKind::ALL {
            let renderer = kind.renderer();
            let first = renderer.render(&records, &ctx);
            let second = renderer.render(&records, &ctx);
            assert_eq!(first, second, "{}", kind.id());
            assert_eq!(
                serde_json::to_value(&first).unwrap(),
                serde_json::to_value(&second).unwrap()
            );
        }
    }
}
