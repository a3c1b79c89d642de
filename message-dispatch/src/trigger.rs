// Named triggers for the two dispatch entry points
use crate::dispatch::Dispatcher;
use crate::error::{DispatchError, DispatchResult};
use crate::task::BackendKind;
use tracing::info;

pub const TRIGGER_GET_MSG_NEW: &str = "get-msg-new";
pub const TRIGGER_GET_MSG_REF: &str = "get-msg-ref";

/// Maps the two fixed trigger ids onto dispatch invocations.
///
/// Firing a trigger runs exactly one dispatch; there is no debouncing and
/// no tracking of in-flight dispatches.
pub struct TriggerRegistry {
    dispatcher: Dispatcher,
}

impl TriggerRegistry {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// The backend a trigger id selects, if the id is registered.
    pub fn backend_for(id: &str) -> Option<BackendKind> {
        match id {
            TRIGGER_GET_MSG_NEW => Some(BackendKind::New),
            TRIGGER_GET_MSG_REF => Some(BackendKind::Reference),
            _ => None,
        }
    }

    pub async fn fire(&self, id: &str) -> DispatchResult<()> {
        let backend = Self::backend_for(id)
            .ok_or_else(|| DispatchError::UnknownTrigger(id.to_string()))?;
        info!(trigger = id, %backend, "trigger fired");
        self.dispatcher.dispatch_all(backend).await
    }
}
