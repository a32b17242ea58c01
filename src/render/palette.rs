use super::spec::ColorScale;

/// Gold-to-orange ramp used by the hourly, monthly and country charts
pub const GOLD_STOPS: [(f64, &str); 9] = [
    (0.0, "#FFD700"),
    (0.125, "#FFC300"),
    (0.25, "#FFB700"),
    (0.375, "#FFAD00"),
    (0.5, "#FFA000"),
    (0.625, "#FF9900"),
    (0.75, "#FF8C00"),
    (0.875, "#FF8400"),
    (1.0, "#FF7900"),
];

/// Ten-colour categorical cycle
pub const CATEGORICAL: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

pub const ARCHIVE_COLORS: [(&str, &str); 15] = [
    ("astro-ph", "#1f77b4"),
    ("cond-mat", "#ff7f0e"),
    ("cs", "#2ca02c"),
    ("econ", "#d62728"),
    ("eess", "#9467bd"),
    ("gr-qc", "#8c564b"),
    ("hep", "#e377c2"),
    ("math", "#7f7f7f"),
    ("nlin", "#bcbd22"),
    ("nucl", "#17becf"),
    ("physics", "#ff6699"),
    ("q-bio", "#33cc33"),
    ("q-fin", "#ffcc00"),
    ("quant-ph", "#0099cc"),
    ("stat", "#9933ff"),
];

pub const UNKNOWN_ARCHIVE_COLOR: &str = "#cccccc";

pub fn gold_scale() -> ColorScale {
    GOLD_STOPS
        .iter()
        .map(|(stop, color)| (*stop, color.to_string()))
        .collect()
}

pub fn archive_color(archive: &str) -> &'static str {
    ARCHIVE_COLORS
        .iter()
        .find(|(name, _)| *name == archive)
        .map(|(_, color)| *color)
        .unwrap_or(UNKNOWN_ARCHIVE_COLOR)
}

/// Assigns categorical colours to labels in order of first appearance
pub fn first_appearance_colors<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    labels
        .into_iter()
        .map(|label| {
            let slot = match seen.iter().position(|s| *s == label) {
                Some(slot) => slot,
                None => {
                    seen.push(label);
                    seen.len() - 1
                }
            };
            CATEGORICAL[slot % CATEGORICAL.len()].to_string()
        })
        .collect()
}
