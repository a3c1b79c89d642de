use message_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    /// A store call failed; the failing sub-task aborted and the join
    /// surfaced the error unchanged
    #[error("message store error: {0}")]
    Store(#[from] StoreError),

    /// A trigger id with no registered handler
    #[error("unknown trigger: {0}")]
    UnknownTrigger(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
