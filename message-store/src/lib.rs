//! Embedded in-memory message store for MsgBench Engine
//!
//! This crate is the collaborator the dispatch layer drives. It provides:
//! - An in-memory record engine holding the `msg` table
//! - A fixed-size engine pool backing the per-call fetch path
//! - A `MessageStore` facade exposing the three entry points
//!   (`initialize`, `fetch_new`, `fetch_reference`) behind the
//!   `MessageSource` trait
//!
//! Nothing is written to disk; every engine's lifetime ends with the
//! process. The store is internally synchronized and tolerates concurrent
//! callers on both fetch paths.

pub mod engine;
pub mod error;
pub mod models;
pub mod pool;
pub mod store;

pub use engine::*;
pub use error::*;
pub use models::*;
pub use pool::*;
pub use store::*;
