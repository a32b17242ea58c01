use crate::error::FetchError;
use crate::models::{ChartQuery, ChartResult};
use async_trait::async_trait;

pub type FetchResult<T> = Result<T, FetchError>;

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Issue exactly one request for `query` and decode its records
    async fn fetch(&self, query: &ChartQuery) -> FetchResult<ChartResult>;
}
