use crate::models::ChartRecord;

use super::palette::first_appearance_colors;
use super::spec::{
    Axis, BarTrace, ChartSpec, Layout, Marker, MarkerColor, Orientation, PlotConfig, Series,
    Title, Trace,
};
use super::{labels, totals, ChartRenderer, RenderContext};

/// Horizontal bars, one per archive
pub struct ArchiveRenderer;

impl ChartRenderer for ArchiveRenderer {
    fn render(&self, records: &[ChartRecord], _ctx: &RenderContext) -> ChartSpec {
        let archives = labels(records);
        let text = records
            .iter()
            .map(|r| format!("{}: {} Downloads", r.label, r.total))
            .collect();
        let colors = first_appearance_colors(archives.iter().map(String::as_str));

        let trace = BarTrace {
            x: Series::Totals(totals(records)),
            y: Series::Labels(archives),
            orientation: Some(Orientation::Horizontal),
            text: Some(text),
            hoverinfo: Some("text".to_string()),
            hovertemplate: None,
            marker: Marker {
                color: MarkerColor::PerBar(colors),
                colorscale: None,
                showscale: None,
            },
        };

        let mut layout = Layout::titled("Total Downloads by Archive since March 2023");
        layout.xaxis = Some(Axis {
            title: Some(Title::new("Downloads")),
            ..Axis::default()
        });
        layout.yaxis = Some(Axis {
            title: Some(Title::new("Archive")),
            automargin: Some(true),
            ..Axis::default()
        });

        ChartSpec {
            data: vec![Trace::Bar(trace)],
            layout,
            config: PlotConfig::default(),
        }
    }
}
