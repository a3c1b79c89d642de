use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A fetch entry point was called before `initialize` completed
    #[error("message store is not initialized")]
    NotInitialized,

    /// The engine pool had no engine available for a per-call fetch
    #[error("engine pool exhausted ({capacity} engines, none available)")]
    PoolExhausted { capacity: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;
