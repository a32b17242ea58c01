use crate::models::ChartRecord;

use super::palette::gold_scale;
use super::spec::{
    ChartSpec, ChoroplethTrace, ColorBar, Geo, Layout, PlotConfig, Projection, Title, Trace,
};
use super::{labels, totals, ChartRenderer, RenderContext};

/// World map shaded by downloads per country
pub struct CountryRenderer;

impl ChartRenderer for CountryRenderer {
    fn render(&self, records: &[ChartRecord], _ctx: &RenderContext) -> ChartSpec {
        let text = records
            .iter()
            .map(|r| format!("{}: {} Downloads", r.label, r.total))
            .collect();

        let trace = ChoroplethTrace {
            locations: labels(records),
            locationmode: "country names".to_string(),
            z: totals(records),
            text,
            hoverinfo: "text".to_string(),
            colorscale: gold_scale(),
            colorbar: ColorBar {
                title: Title::new("Downloads"),
            },
        };

        let mut layout = Layout::titled("Total Downloads by Country Since March 2023");
        layout.geo = Some(Geo {
            showocean: true,
            oceancolor: "rgb(6,100,115)".to_string(),
            showframe: false,
            projection: Projection {
                projection_type: "robinson".to_string(),
            },
        });

        ChartSpec {
            data: vec![Trace::Choropleth(trace)],
            layout,
            config: PlotConfig {
                responsive: true,
                show_link: Some(false),
            },
        }
    }
}
