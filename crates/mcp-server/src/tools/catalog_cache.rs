use crate::upstream::{with_deadline, UpstreamError, UpstreamSource};
use rmcp::model::Tool;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Process-lifetime snapshot of the upstream tool catalog.
///
/// The first caller fetches; concurrent callers wait for that fetch instead of issuing their own.
/// A failed fetch leaves the cache empty so a later request can retry. There is no invalidation:
/// upstream catalog changes become visible only after a restart.
#[derive(Debug, Default)]
pub(crate) struct CatalogCache {
    snapshot: OnceCell<Arc<[Tool]>>,
}

impl CatalogCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return the snapshot, fetching it on first use. `on_fetch` runs once, right after the
    /// successful fetch that populates the cache.
    pub(crate) async fn get_or_fetch<F>(
        &self,
        upstream: &dyn UpstreamSource,
        limit: Option<Duration>,
        on_fetch: F,
    ) -> Result<Arc<[Tool]>, UpstreamError>
    where
        F: FnOnce(&[Tool]),
    {
        let snapshot = self
            .snapshot
            .get_or_try_init(|| async move {
                let tools = with_deadline(limit, upstream.list_operations()).await?;
                log::info!("Fetched upstream catalog ({} tools)", tools.len());
                on_fetch(&tools);
                Ok::<_, UpstreamError>(Arc::from(tools))
            })
            .await?;
        Ok(Arc::clone(snapshot))
    }

    #[cfg(test)]
    pub(crate) fn is_populated(&self) -> bool {
        self.snapshot.initialized()
    }
}
