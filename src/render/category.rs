use crate::models::ChartRecord;

use super::palette::archive_color;
use super::spec::{
    Axis, BarTrace, ChartSpec, Layout, Marker, MarkerColor, PlotConfig, Series, Title, Trace,
};
use super::{labels, totals, ChartRenderer, RenderContext};

/// Vertical bars per subject category, coloured by parent archive
pub struct CategoryRenderer;

/// Archive a category belongs to: `cs.AI` -> `cs`, `hep-th` -> `hep-th`
pub fn archive_of(category: &str) -> &str {
    category.split('.').next().unwrap_or(category)
}

impl ChartRenderer for CategoryRenderer {
    fn render(&self, records: &[ChartRecord], _ctx: &RenderContext) -> ChartSpec {
        let colors = records
            .iter()
            .map(|r| archive_color(archive_of(&r.label)).to_string())
            .collect();
        let text = records
            .iter()
            .map(|r| {
                format!(
                    "Archive: {}<br>Category: {}<br>{} Downloads",
                    archive_of(&r.label),
                    r.label,
                    r.total
                )
            })
            .collect();

        let trace = BarTrace {
            x: Series::Labels(labels(records)),
            y: Series::Totals(totals(records)),
            orientation: None,
            text: Some(text),
            hoverinfo: Some("text".to_string()),
            hovertemplate: None,
            marker: Marker {
                color: MarkerColor::PerBar(colors),
                colorscale: None,
                showscale: None,
            },
        };

        let mut layout = Layout::titled("Total Downloads by Category since March 2023");
        layout.xaxis = Some(Axis {
            title: Some(Title::new("Category")),
            tickangle: Some(-45),
            automargin: Some(true),
            ..Axis::default()
        });
        layout.yaxis = Some(Axis {
            title: Some(Title::new("Downloads")),
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
