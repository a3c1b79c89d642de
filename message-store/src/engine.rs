// In-memory record engine backing the message store
use crate::models::Message;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// A single embedded engine instance holding the `msg` table.
///
/// All rows live in memory; the row lock is the engine's entire
/// synchronization story, so one engine safely serves concurrent callers.
#[derive(Debug, Default)]
pub struct StoreEngine {
    rows: RwLock<Vec<Message>>,
}

impl StoreEngine {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Insert one message and return the stored record.
    pub async fn create(&self, body: &str) -> Message {
        let message = Message::new(body);
        let mut rows = self.rows.write().await;
        rows.push(message.clone());
        debug!(id = %message.id, rows = rows.len(), "created message");
        message
    }

    /// Return every row in the `msg` table.
    pub async fn select_all(&self) -> Vec<Message> {
        self.rows.read().await.clone()
    }

    /// Return a single row by id, if present.
    pub async fn select_one(&self, id: Uuid) -> Option<Message> {
        self.rows.read().await.iter().find(|m| m.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}
