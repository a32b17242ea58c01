pub mod query;
pub mod record;

pub use query::{ChartQuery, Endpoint, GroupBy, Metric, DEFAULT_MODEL};
pub use record::{ChartRecord, ChartResult};
