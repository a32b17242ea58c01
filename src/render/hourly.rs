use crate::models::ChartRecord;

use super::palette::gold_scale;
use super::spec::{
    Axis, BarTrace, ChartSpec, Layout, Marker, MarkerColor, PlotConfig, Series, Title, Trace,
};
use super::{labels, totals, ChartRenderer, RenderContext};

/// Downloads per hour of one day in the viewer's timezone
pub struct HourlyRenderer;

impl HourlyRenderer {
    pub fn title(ctx: &RenderContext) -> String {
        match ctx.date {
            Some(date) => format!(
                "Downloads by the Hour for {} ({})",
                date.format("%Y-%m-%d"),
                ctx.timezone
            ),
            None => format!("Today's Downloads by the Hour ({})", ctx.timezone),
        }
    }
}

impl ChartRenderer for HourlyRenderer {
    fn render(&self, records: &[ChartRecord], ctx: &RenderContext) -> ChartSpec {
        let hours = labels(records);
        let totals = totals(records);

        let trace = BarTrace {
            x: Series::Labels(hours.clone()),
            y: Series::Totals(totals.clone()),
            orientation: None,
            text: None,
            hoverinfo: None,
            hovertemplate: Some(
                "<b>Hour: %{x}</b><br>Usage/Downloads: %{y}<extra></extra>".to_string(),
            ),
            marker: Marker {
                color: MarkerColor::Scaled(totals),
                colorscale: Some(gold_scale()),
                showscale: Some(false),
            },
        };

        let mut layout = Layout::titled(Self::title(ctx));
        layout.xaxis = Some(Axis {
            title: Some(Title::new("Hour")),
            tickmode: Some("array".to_string()),
            tickvals: Some(Series::Labels(hours)),
            nticks: Some(12),
            ..Axis::default()
        });
        layout.yaxis = Some(Axis {
            title: Some(Title::with_automargin("Usage")),
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
    use chrono::NaiveDate;

    fn day_records() -> Vec<ChartRecord> {
        (0..3).map(|h| ChartRecord::new(h.to_string(), 100 + h)).collect()
    }

    #[test]
    fn test_title_names_today_and_timezone() {
        let ctx = RenderContext::new("Asia/Tokyo", None);
        let spec = HourlyRenderer.render(&day_records(), &ctx);
        assert_eq!(
            spec.layout.title.text,
            "Today's Downloads by the Hour (Asia/Tokyo)"
        );
    }

    #[test]
    fn test_title_names_selected_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let ctx = RenderContext::new("UTC", Some(date));
        assert_eq!(
            HourlyRenderer::title(&ctx),
            "Downloads by the Hour for 2024-01-31 (UTC)"
        );
    }

    #[test]
    fn test_bars_scaled_by_total() {
        let spec = HourlyRenderer.render(&day_records(), &RenderContext::new("UTC", None));
        let Trace::Bar(bar) = &spec.data[0] else {
            panic!("expected a bar trace");
        };
        assert_eq!(bar.marker.color, MarkerColor::Scaled(vec![100, 101, 102]));
        assert_eq!(bar.marker.showscale, Some(false));
        assert_eq!(
            spec.layout.xaxis.as_ref().unwrap().tickvals,
            Some(Series::Labels(vec![
                "0".to_string(),
                "1".to_string(),
                "2".to_string()
            ]))
        );
    }
}
