// Once-only store initialization guard
use crate::error::DispatchResult;
use message_store::MessageSource;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

/// Guards store initialization behind a shared future.
///
/// Every operation that needs the store awaits `ready()` first; the
/// underlying `initialize` runs at most once per success, and concurrent
/// waiters all observe the same in-flight attempt. A failed attempt is not
/// cached, so the next waiter initializes again.
pub struct Bootstrap {
    source: Arc<dyn MessageSource>,
    ready: OnceCell<()>,
}

impl Bootstrap {
    pub fn new(source: Arc<dyn MessageSource>) -> Self {
        Self {
            source,
            ready: OnceCell::new(),
        }
    }

    /// Resolve once the store is initialized, initializing it if needed.
    pub async fn ready(&self) -> DispatchResult<()> {
        self.ready
            .get_or_try_init(|| async {
                info!("initializing message store");
                self.source.initialize().await?;
                info!("message store ready");
                Ok(())
            })
            .await
            .copied()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.initialized()
    }
}
