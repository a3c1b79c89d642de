// Five-way fan-out/fan-in over the retrieval task
use crate::bootstrap::Bootstrap;
use crate::error::DispatchResult;
use crate::task::{BackendKind, TASK_LABELS, run_task};
use message_store::MessageSource;
use std::sync::Arc;
use tracing::info;

/// Fans one dispatch out to the five labeled sub-tasks and joins on all of
/// them.
pub struct Dispatcher {
    source: Arc<dyn MessageSource>,
    bootstrap: Bootstrap,
}

impl Dispatcher {
    pub fn new(source: Arc<dyn MessageSource>) -> Self {
        let bootstrap = Bootstrap::new(Arc::clone(&source));
        Self { source, bootstrap }
    }

    pub fn bootstrap(&self) -> &Bootstrap {
        &self.bootstrap
    }

    /// Launch the five sub-tasks concurrently against `backend` and resolve
    /// once all five resolve.
    ///
    /// The store is initialized first if this is the earliest dispatch. The
    /// join propagates the first sub-task error and drops in-flight
    /// siblings.
    pub async fn dispatch_all(&self, backend: BackendKind) -> DispatchResult<()> {
        self.bootstrap.ready().await?;

        info!(%backend, "dispatching retrieval tasks");
        let [first, second, third, fourth, fifth] = TASK_LABELS;
        tokio::try_join!(
            run_task(self.source.as_ref(), first, backend),
            run_task(self.source.as_ref(), second, backend),
            run_task(self.source.as_ref(), third, backend),
            run_task(self.source.as_ref(), fourth, backend),
            run_task(self.source.as_ref(), fifth, backend),
        )?;
        info!(%backend, "all retrieval tasks complete");
        Ok(())
    }
}
