//! Catalog of dashboard categories and the charts each one lists

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{ChartQuery, GroupBy};
use crate::render::{
    ArchiveRenderer, CategoryRenderer, ChartRenderer, CountryRenderer, HourlyRenderer,
    MonthlyRenderer,
};

pub const SUBMISSIONS_REPORT_URL: &str =
    "https://info.arxiv.org/about/reports/submission_category_by_year.html";

pub const NEW_DAY_MESSAGE: &str = "Looks like it's a new day! Come back in an hour when we've picked up the data for its first hour.";
pub const NO_DATA_MESSAGE: &str = "No data available yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Downloads,
    Submissions,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Downloads, Category::Submissions];

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Downloads => "downloads",
            Category::Submissions => "submissions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Downloads => "Download Statistics",
            Category::Submissions => "Submission Statistics",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Category::Downloads => "View data about paper downloads including hourly rates, monthly totals, and institutional rankings.",
            Category::Submissions => "View data about paper submissions including monthly totals and breakdowns by subject area.",
        }
    }

    /// Where the home page card points; submissions live on an external report
    pub fn href(&self) -> String {
        match self {
            Category::Downloads => format!("/stats/{}", self.slug()),
            Category::Submissions => SUBMISSIONS_REPORT_URL.to_string(),
        }
    }

    pub fn charts(&self) -> Vec<ChartKind> {
        ChartKind::ALL
            .into_iter()
            .filter(|chart| chart.category() == *self)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Hourly,
    Monthly,
    DownloadsByCountry,
    DownloadsByCategory,
    DownloadsByArchive,
}

static HOURLY: HourlyRenderer = HourlyRenderer;
static MONTHLY: MonthlyRenderer = MonthlyRenderer;
static COUNTRY: CountryRenderer = CountryRenderer;
static CATEGORY: CategoryRenderer = CategoryRenderer;
static ARCHIVE: ArchiveRenderer = ArchiveRenderer;

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Hourly,
        ChartKind::Monthly,
        ChartKind::DownloadsByCountry,
        ChartKind::DownloadsByCategory,
        ChartKind::DownloadsByArchive,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn id(&self) -> &'static str {
        match self {
            ChartKind::Hourly => "hourly",
            ChartKind::Monthly => "monthly",
            ChartKind::DownloadsByCountry => "downloads-by-country",
            ChartKind::DownloadsByCategory => "downloads-by-category",
            ChartKind::DownloadsByArchive => "downloads-by-archive",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Hourly => "Hourly Usage Rates",
            ChartKind::Monthly => "Monthly Downloads",
            ChartKind::DownloadsByCountry => "Downloads by Country",
            ChartKind::DownloadsByCategory => "Downloads by Category",
            ChartKind::DownloadsByArchive => "Downloads by Archive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChartKind::Hourly => "View download rates by hour for any given day",
            ChartKind::Monthly => "View total downloads by month over time",
            ChartKind::DownloadsByCountry => "See download statistics by country",
            ChartKind::DownloadsByCategory => "Breakdown of downloads by subject category",
            ChartKind::DownloadsByArchive => "Breakdown of downloads by archive",
        }
    }

    /// Heading shown above the plot on the chart page
    pub fn heading(&self) -> &'static str {
        match self {
            ChartKind::Hourly => "Downloads by the Hour",
            ChartKind::Monthly => "Downloads By Month",
            ChartKind::DownloadsByCountry => "Downloads By Country",
            ChartKind::DownloadsByCategory => "Downloads By Category",
            ChartKind::DownloadsByArchive => "Downloads By Archive",
        }
    }

    pub fn category(&self) -> Category {
        Category::Downloads
    }

    pub fn is_date_navigable(&self) -> bool {
        matches!(self, ChartKind::Hourly)
    }

    pub fn query(&self, timezone: &str, date: Option<NaiveDate>) -> ChartQuery {
        match self {
            ChartKind::Hourly => ChartQuery::hourly(timezone, date),
            ChartKind::Monthly => ChartQuery::monthly(),
            ChartKind::DownloadsByCountry => ChartQuery::grouped(GroupBy::Country),
            ChartKind::DownloadsByCategory => ChartQuery::grouped(GroupBy::Category),
            ChartKind::DownloadsByArchive => ChartQuery::grouped(GroupBy::Archive),
        }
    }

    pub fn renderer(&self) -> &'static dyn ChartRenderer {
        match self {
            ChartKind::Hourly => &HOURLY,
            ChartKind::Monthly => &MONTHLY,
            ChartKind::DownloadsByCountry => &COUNTRY,
            ChartKind::DownloadsByCategory => &CATEGORY,
            ChartKind::DownloadsByArchive => &ARCHIVE,
        }
    }

    pub fn empty_message(&self) -> &'static str {
        if self.is_date_navigable() {
            NEW_DAY_MESSAGE
        } else {
            NO_DATA_MESSAGE
        }
    }
}
