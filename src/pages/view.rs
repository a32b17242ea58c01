use crate::charts::{Category, ChartKind};

/// Page selected by a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Category(Category),
    Chart(ChartKind),
    UnknownCategory(String),
    UnknownChart { category: String, chart: String },
    Redirect(&'static str),
}

pub const HOME_PATH: &str = "/stats";

/// Map a URL path to a view: `/stats`, `/stats/{category}`,
/// `/stats/{category}/{chart}`; anything else goes back home.
pub fn resolve(path: &str) -> View {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["stats"] => View::Home,
        ["stats", category] => match Category::from_slug(category) {
            Some(category) => View::Category(category),
            None => View::UnknownCategory(category.to_string()),
        },
        ["stats", category, chart] => match ChartKind::from_id(chart) {
            Some(kind) => View::Chart(kind),
            None => View::UnknownChart {
                category: category.to_string(),
                chart: chart.to_string(),
            },
        },
        _ => View::Redirect(HOME_PATH),
    }
}
