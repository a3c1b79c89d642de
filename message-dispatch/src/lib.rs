//! Concurrent retrieval dispatch core for MsgBench Engine
//!
//! This crate drives the message store through its two fetch paths:
//! - `Bootstrap` guards store initialization behind a once-only shared
//!   future that every dispatch awaits
//! - `Dispatcher` fans each dispatch out to five labeled sub-tasks and
//!   joins on all of them, propagating the first failure
//! - Each sub-task performs 51 strictly sequential rounds of
//!   diagnostic-then-fetch against the selected backend
//! - `TriggerRegistry` maps the two fixed trigger ids onto dispatches
//!
//! There is no retry, no timeout, and no cancellation surface; errors
//! propagate unchanged to the caller.

pub mod bootstrap;
pub mod dispatch;
pub mod error;
pub mod task;
pub mod trigger;

pub use bootstrap::*;
pub use dispatch::*;
pub use error::*;
pub use task::*;
pub use trigger::*;
