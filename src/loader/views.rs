use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ViewConfig;
use crate::source::DataSource;

use super::state::ChartLoader;

/// Open chart views and the loader each one owns.
///
/// A view lives from page render until the page closes it or it sits idle
/// past the configured timeout; its load state goes with it.
pub struct ViewRegistry {
    source: Arc<dyn DataSource>,
    views: Cache<String, Arc<ChartLoader>>,
}

impl ViewRegistry {
    pub fn new(source: Arc<dyn DataSource>, config: &ViewConfig) -> Self {
        let views = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_idle(Duration::from_secs(config.idle_secs))
            .build();

        Self { source, views }
    }

    /// Register a fresh view and return its identifier
    pub async fn open(&self) -> String {
        let view_id = format!("{:016x}", rand::random::<u64>());
        self.views
            .insert(view_id.clone(), Arc::new(ChartLoader::new(Arc::clone(&self.source))))
            .await;
        view_id
    }

    /// Loader for `view_id`, created on first use.
    ///
    /// Unknown ids are accepted so a page that outlived its view (server
    /// restart, idle expiry) keeps working with a fresh state.
    pub async fn loader(&self, view_id: &str) -> Arc<ChartLoader> {
        let source = Arc::clone(&self.source);
        self.views
            .get_with(view_id.to_string(), async move {
                Arc::new(ChartLoader::new(source))
            })
            .await
    }

    /// Loader not tracked by any view, for one-off loads
    pub fn detached(&self) -> ChartLoader {
        ChartLoader::new(Arc::clone(&self.source))
    }

    /// Discard a view's state; returns whether the view existed
    pub async fn close(&self, view_id: &str) -> bool {
        self.views.remove(view_id).await.is_some()
    }

    pub async fn contains(&self, view_id: &str) -> bool {
        self.views.get(view_id).await.is_some()
    }
}
