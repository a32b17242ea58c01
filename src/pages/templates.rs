//! Server-rendered HTML for the dashboard pages
//!
//! Pages are small enough that string assembly stays readable; every value
//! that originates from a request is passed through [`escape_html`].

use chrono::NaiveDate;
use std::fmt::Write;

use crate::charts::{Category, ChartKind};

const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str, scripts: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | arXiv</title>
<link rel="stylesheet" href="/assets/style.css">
</head>
<body>
{body}
{scripts}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn home_page() -> String {
    let mut cards = String::new();
    for category in Category::ALL {
        let _ = write!(
            cards,
            r#"<a class="card" href="{href}"><h2 class="card-title">{title}</h2><p>{summary}</p></a>"#,
            href = escape_html(&category.href()),
            title = category.title(),
            summary = category.summary(),
        );
    }

    let body = format!(
        r#"<main class="container narrow">
<h1 class="page-title">arXiv Usage Statistics</h1>
<p class="intro">arXiv tracks and publishes the following statistical breakdowns: arXiv's hourly usage for any given day, monthly submissions or downloads going back to the beginning of arXiv, a breakdown of submissions by subject area over time, and institutional download rankings.</p>
<div class="category-selection">{cards}</div>
<div class="disclaimer">
<p>While we have taken considerable effort to extract reliable data for all charts there are many factors which affect results. These may include our counting methodology, excluding legitimate robot activity, and excluding data from the arXiv mirrors, among other factors.</p>
<p>For best viewing results view charts on a tablet size or larger screen.</p>
</div>
</main>"#
    );

    layout("arXiv Usage Statistics", &body, "")
}

pub fn category_page(category: Category) -> String {
    let charts = category.charts();
    let mut grid = String::new();
    for chart in &charts {
        let _ = write!(
            grid,
            r#"<a class="card" href="/stats/{slug}/{id}"><h2 class="card-title">{title}</h2><p>{description}</p></a>"#,
            slug = category.slug(),
            id = chart.id(),
            title = chart.title(),
            description = chart.description(),
        );
    }
    if charts.is_empty() {
        let _ = write!(
            grid,
            r#"<p>These statistics are published in the <a href="{href}">arXiv reports</a>.</p>"#,
            href = escape_html(&category.href()),
        );
    }

    let body = format!(
        r#"<main class="container">
<a class="back" href="/stats">&larr; Back to Statistics Home</a>
<h1 class="page-title">{title}</h1>
<div class="grid">{grid}</div>
</main>"#,
        title = category.title(),
    );

    layout(category.title(), &body, "")
}

/// Chart page shell; the plot itself is drawn by `app.js` from the JSON API
pub fn chart_page(kind: ChartKind, view_id: &str, default_timezone: &str, today: NaiveDate) -> String {
    let controls = if kind.is_date_navigable() {
        format!(
            r#"<div class="date-nav">
<button type="button" id="prev-day">&larr; Previous day</button>
<input type="date" id="date-input" max="{today}">
<button type="button" id="next-day" disabled>Next day &rarr;</button>
</div>"#,
            today = today.format("%Y-%m-%d"),
        )
    } else {
        String::new()
    };

    let body = format!(
        r#"<main class="container">
<a class="back" href="/stats/{slug}">&larr; Back to {category}</a>
<div id="chart-root" data-chart="{id}" data-view="{view}" data-timezone="{timezone}" data-navigable="{navigable}">
<div class="chart-heading"><strong>{heading}</strong></div>
{controls}
<div id="chart-status" class="status">Fetching data...</div>
<div id="chart-timezone" class="timezone" hidden></div>
<div id="chart"></div>
</div>
</main>"#,
        slug = kind.category().slug(),
        category = kind.category().title(),
        id = kind.id(),
        view = escape_html(view_id),
        timezone = escape_html(default_timezone),
        navigable = kind.is_date_navigable(),
        heading = kind.heading(),
    );

    let scripts = format!(
        r#"<script src="{PLOTLY_SRC}" charset="utf-8"></script>
<script src="/assets/app.js"></script>"#
    );

    layout(kind.title(), &body, &scripts)
}

pub fn not_found_page(message: &str) -> String {
    let body = format!(
        r#"<main class="container">
<a class="back" href="/stats">&larr; Back to Statistics Home</a>
<div class="not-found">{message}</div>
</main>"#,
        message = escape_html(message),
    );
    layout(message, &body, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>&'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;&amp;&#x27;"
        );
    }

    #[test]
    fn test_home_page_links_categories() {
        let html = home_page();
        assert!(html.contains("arXiv Usage Statistics"));
        assert!(html.contains(r#"href="/stats/downloads""#));
        assert!(html.contains("submission_category_by_year.html"));
    }

    #[test]
    fn test_category_page_lists_charts() {
        let html = category_page(Category::Downloads);
        for chart in ChartKind::ALL {
            assert!(html.contains(&format!("/stats/downloads/{}", chart.id())));
        }
    }

    #[test]
    fn test_chart_page_carries_view_and_bounds_date_input() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let html = chart_page(ChartKind::Hourly, "abc123", "UTC", today);
        assert!(html.contains(r#"data-view="abc123""#));
        assert!(html.contains(r#"data-navigable="true""#));
        assert!(html.contains(r#"max="2024-06-10""#));

        let html = chart_page(ChartKind::Monthly, "abc123", "UTC", today);
        assert!(!html.contains("date-input"));
    }

    #[test]
    fn test_not_found_page_escapes_message() {
        let html = not_found_page("<b>Chart not found</b>");
        assert!(html.contains("&lt;b&gt;Chart not found&lt;/b&gt;"));
    }
}
