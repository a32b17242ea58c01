use chrono::NaiveDate;

use crate::models::ChartRecord;

use super::palette::gold_scale;
use super::spec::{
    Axis, BarTrace, ChartSpec, Layout, Marker, MarkerColor, PlotConfig, RangeSlider, Series,
    Title, Trace,
};
use super::{totals, ChartRenderer, RenderContext};

/// Total downloads per calendar month
pub struct MonthlyRenderer;

/// `2023-03-01` -> `March 2023`; labels that are not ISO dates pass through
pub fn month_label(iso: &str) -> String {
    let date_part = iso.get(..10).unwrap_or(iso);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%B %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

impl ChartRenderer for MonthlyRenderer {
    fn render(&self, records: &[ChartRecord], _ctx: &RenderContext) -> ChartSpec {
        let months: Vec<String> = records.iter().map(|r| month_label(&r.label)).collect();
        let totals = totals(records);

        let trace = BarTrace {
            x: Series::Labels(months.clone()),
            y: Series::Totals(totals.clone()),
            orientation: None,
            text: None,
            hoverinfo: None,
            hovertemplate: Some(
                "<b>Month: %{x}</b><br>Total Downloads: %{y:,}<extra></extra>".to_string(),
            ),
            marker: Marker {
                color: MarkerColor::Scaled(totals),
                colorscale: Some(gold_scale()),
                showscale: Some(true),
            },
        };

        let mut layout = Layout::titled("Monthly Downloads");
        layout.xaxis = Some(Axis {
            title: Some(Title::new("Month")),
            axis_type: Some("category".to_string()),
            tickmode: Some("auto".to_string()),
            nticks: Some(8),
            tickvals: Some(Series::Labels(months)),
            rangeslider: Some(RangeSlider { visible: true }),
            ..Axis::default()
        });
        layout.yaxis = Some(Axis {
            title: Some(Title::with_automargin("Total Downloads")),
            ticks: Some("outside".to_string()),
            tickformat: Some(",".to_string()),
            automargin: Some(true),
            ..Axis::default()
        });
        layout.showlegend = Some(false);

        ChartSpec {
            data: vec![Trace::Bar(trace)],
            layout,
            config: PlotConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label_formats_iso_dates() {
        assert_eq!(month_label("2023-03-01"), "March 2023");
        assert_eq!(month_label("1991-08-01T00:00:00"), "August 1991");
        assert_eq!(month_label("Q3"), "Q3");
    }

    #[test]
    fn test_monthly_bars_use_month_names() {
        let records = vec![
            ChartRecord::new("2023-11-01", 1_200_000),
            ChartRecord::new("2023-12-01", 1_100_000),
        ];
        let spec = MonthlyRenderer.render(&records, &RenderContext::new("UTC", None));

        let Trace::Bar(bar) = &spec.data[0] else {
            panic!("expected a bar trace");
        };
        assert_eq!(
            bar.x,
            Series::Labels(vec!["November 2023".to_string(), "December 2023".to_string()])
        );
        assert_eq!(bar.marker.showscale, Some(true));
        let xaxis = spec.layout.xaxis.as_ref().unwrap();
        assert_eq!(xaxis.axis_type.as_deref(), Some("category"));
        assert_eq!(xaxis.rangeslider, Some(RangeSlider { visible: true }));
    }
}
