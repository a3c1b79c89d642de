// Labeled sequential retrieval task
use crate::error::DispatchResult;
use message_store::MessageSource;
use std::fmt;
use tracing::info;

/// Labels for the five sub-tasks of one dispatch, used only for
/// diagnostics and correlation.
pub const TASK_LABELS: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];

/// Rounds each sub-task performs per invocation.
pub const TASK_ROUNDS: u32 = 51;

/// Which of the two interchangeable store paths a dispatch drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    New,
    Reference,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::New => f.write_str("new"),
            BackendKind::Reference => f.write_str("reference"),
        }
    }
}

/// Run one labeled sub-task: `TASK_ROUNDS` strictly sequential rounds, each
/// emitting a diagnostic and then awaiting exactly one store call against
/// the selected backend.
///
/// The first failing call aborts the task; remaining rounds never run.
pub async fn run_task(
    source: &dyn MessageSource,
    label: &'static str,
    backend: BackendKind,
) -> DispatchResult<()> {
    for round in 0..TASK_ROUNDS {
        info!(task = label, round, "fetching message");
        match backend {
            BackendKind::New => source.fetch_new().await?,
            BackendKind::Reference => source.fetch_reference().await?,
        }
    }
    Ok(())
}
