// Engine pool for the per-call fetch path
use crate::engine::StoreEngine;
use crate::error::{StoreError, StoreResult};
use std::collections::VecDeque;
use tokio::sync::Mutex;
use tracing::debug;

pub const DEFAULT_POOL_SIZE: usize = 10;

/// Fixed-size pool of engine instances.
///
/// Callers `take` an engine, run their commands against it, and `give_back`
/// when done. Taking from an empty pool is an error, not a wait; the pool
/// must be sized for the expected caller count up front.
#[derive(Debug)]
pub struct EnginePool {
    engines: Mutex<VecDeque<StoreEngine>>,
    capacity: usize,
}

impl EnginePool {
    pub fn new(capacity: usize) -> Self {
        let mut engines = VecDeque::with_capacity(capacity);
        for _ in 0..capacity {
            engines.push_back(StoreEngine::new());
        }
        Self {
            engines: Mutex::new(engines),
            capacity,
        }
    }

    pub async fn take(&self) -> StoreResult<StoreEngine> {
        let mut engines = self.engines.lock().await;
        let engine = engines.pop_front().ok_or(StoreError::PoolExhausted {
            capacity: self.capacity,
        })?;
        debug!(available = engines.len(), "took engine from pool");
        Ok(engine)
    }

    pub async fn give_back(&self, engine: StoreEngine) {
        let mut engines = self.engines.lock().await;
        engines.push_back(engine);
        debug!(available = engines.len(), "returned engine to pool");
    }

    pub async fn available(&self) -> usize {
        self.engines.lock().await.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
