use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::error::FetchError;
use crate::models::{ChartQuery, ChartResult};

use super::decode::decode_records;
use super::trait_def::{DataSource, FetchResult};

/// Data source backed by the upstream statistics REST API
pub struct HttpDataSource {
    client: Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, query: &ChartQuery) -> FetchResult<Url> {
        let endpoint = query.endpoint();
        let raw = format!("{}{}", self.base_url, endpoint.path);

        Url::parse_with_params(&raw, endpoint.params.iter().map(|(k, v)| (*k, v.as_str())))
            .map_err(|e| FetchError::Transport(format!("invalid upstream URL '{raw}': {e}")))
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self, query: &ChartQuery) -> FetchResult<ChartResult> {
        let url = self.url_for(query)?;
        debug!(%url, "fetching chart data");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        decode_records(query, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupBy;

    fn source(base_url: &str) -> HttpDataSource {
        HttpDataSource::new(&UpstreamConfig {
            base_url: base_url.to_string(),
            timeout_secs: None,
        })
        .unwrap()
    }

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let source = source("http://localhost:8080/api/");
        let url = source.url_for(&ChartQuery::grouped(GroupBy::Country)).unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/get_data?model=hourly&group_by=country"
        );
    }

    #[test]
    fn test_url_encodes_timezone() {
        let source = source("http://localhost:8080/api");
        let url = source
            .url_for(&ChartQuery::hourly("America/New_York", None))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/get_todays_downloads?model=hourly&timezone=America%2FNew_York"
        );
    }

    #[test]
    fn test_invalid_base_url_is_a_transport_error() {
        let source = source("not a url");
        assert!(matches!(
            source.url_for(&ChartQuery::monthly()),
            Err(FetchError::Transport(_))
        ));
    }
}
