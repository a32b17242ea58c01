//! Load lifecycle shared by every chart view
//!
//! Each load draws a ticket from a monotonically increasing sequence.
//! A finished request is committed only while its ticket is still the
//! newest one issued, so a slow response for an old query can never
//! overwrite the state produced by a newer query.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::models::{ChartQuery, ChartResult};
use crate::source::DataSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(ChartResult),
    Failed(String),
    Empty,
}

impl LoadState {
    fn from_fetch(result: Result<ChartResult, FetchError>) -> Self {
        match result {
            Ok(records) if records.is_empty() => LoadState::Empty,
            Ok(records) => LoadState::Loaded(records),
            Err(err) => LoadState::Failed(err.user_message().to_string()),
        }
    }
}

/// Result of handing a finished request to the loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The request was the newest one; its state is now the view's state
    Committed(LoadState),
    /// A newer request was issued meanwhile; the result was dropped
    Superseded,
}

struct LoaderInner {
    state: LoadState,
    query: Option<ChartQuery>,
}

pub struct ChartLoader {
    source: Arc<dyn DataSource>,
    sequence: AtomicU64,
    inner: Mutex<LoaderInner>,
}

impl ChartLoader {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            sequence: AtomicU64::new(0),
            inner: Mutex::new(LoaderInner {
                state: LoadState::Idle,
                query: None,
            }),
        }
    }

    /// Run one request for `query` and commit its result if still current
    pub async fn load(&self, query: ChartQuery) -> LoadOutcome {
        let ticket = self.begin(&query).await;
        let result = self.source.fetch(&query).await;
        self.commit(ticket, &query, result).await
    }

    /// Issue a new ticket and move to `Loading`.
    ///
    /// Any request still in flight under an older ticket becomes stale.
    pub async fn begin(&self, query: &ChartQuery) -> u64 {
        let mut inner = self.inner.lock().await;
        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        inner.state = LoadState::Loading;
        inner.query = Some(query.clone());
        ticket
    }

    pub async fn commit(
        &self,
        ticket: u64,
        query: &ChartQuery,
        result: Result<ChartResult, FetchError>,
    ) -> LoadOutcome {
        let mut inner = self.inner.lock().await;

        let latest = self.sequence.load(Ordering::SeqCst);
        if ticket != latest {
            debug!(ticket, latest, metric = ?query.metric, "dropping superseded result");
            return LoadOutcome::Superseded;
        }

        if let Err(err) = &result {
            warn!(metric = ?query.metric, error = %err, "chart data load failed");
        }

        let state = LoadState::from_fetch(result);
        inner.state = state.clone();
        LoadOutcome::Committed(state)
    }

    pub async fn state(&self) -> LoadState {
        self.inner.lock().await.state.clone()
    }

    /// Query behind the current state, if any load was started
    pub async fn current_query(&self) -> Option<ChartQuery> {
        self.inner.lock().await.query.clone()
    }
}
