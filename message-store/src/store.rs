// MessageStore facade and the MessageSource seam
use crate::engine::StoreEngine;
use crate::error::{StoreError, StoreResult};
use crate::pool::{DEFAULT_POOL_SIZE, EnginePool};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

const MESSAGE_BODY: &str = "this is a msg";
const SEED_BODY: &str = "message store online";

/// The capability surface the dispatch layer drives.
///
/// `initialize` must complete once before either fetch entry point is
/// called; both fetches are single units of work whose results are
/// discarded by the caller.
#[async_trait]
pub trait MessageSource: Send + Sync {
    async fn initialize(&self) -> StoreResult<()>;

    /// One unit of work against the per-call ("new") backend.
    async fn fetch_new(&self) -> StoreResult<()>;

    /// One unit of work against the shared ("reference") backend.
    async fn fetch_reference(&self) -> StoreResult<()>;
}

#[derive(Clone)]
struct StoreState {
    reference: Arc<StoreEngine>,
    pool: Arc<EnginePool>,
}

/// Embedded message store with two interchangeable fetch paths.
///
/// The "new" path runs create-then-select on a pooled engine taken for the
/// duration of one call; the "reference" path runs select-then-create on the
/// shared engine established at initialization. Both tolerate concurrent
/// callers.
pub struct MessageStore {
    pool_size: usize,
    state: RwLock<Option<StoreState>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            state: RwLock::new(None),
        }
    }

    /// Set the engine pool size used by the per-call fetch path.
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Number of rows currently in the shared reference engine.
    pub async fn reference_count(&self) -> StoreResult<usize> {
        let state = self.state().await?;
        Ok(state.reference.len().await)
    }

    /// Number of pooled engines currently available to the per-call path.
    pub async fn pool_available(&self) -> StoreResult<usize> {
        let state = self.state().await?;
        Ok(state.pool.available().await)
    }

    async fn state(&self) -> StoreResult<StoreState> {
        self.state
            .read()
            .await
            .clone()
            .ok_or(StoreError::NotInitialized)
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageSource for MessageStore {
    async fn initialize(&self) -> StoreResult<()> {
        let reference = StoreEngine::new();
        reference.create(SEED_BODY).await;

        let pool = EnginePool::new(self.pool_size);

        let mut state = self.state.write().await;
        *state = Some(StoreState {
            reference: Arc::new(reference),
            pool: Arc::new(pool),
        });
        info!(pool_size = self.pool_size, "message store initialized");
        Ok(())
    }

    async fn fetch_new(&self) -> StoreResult<()> {
        let state = self.state().await?;
        let engine = state.pool.take().await?;
        engine.create(MESSAGE_BODY).await;
        let _rows = engine.select_all().await;
        state.pool.give_back(engine).await;
        Ok(())
    }

    async fn fetch_reference(&self) -> StoreResult<()> {
        let state = self.state().await?;
        let _rows = state.reference.select_all().await;
        state.reference.create(MESSAGE_BODY).await;
        Ok(())
    }
}
