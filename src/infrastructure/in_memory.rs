use crate::domain::decision::Decision;
use crate::domain::ports::ResultPublisher;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory result queue.
///
/// Clones share the same underlying buffer, so a caller can hand one clone
/// to the processor and inspect what was published through another.
#[derive(Default, Clone)]
pub struct InMemoryResultQueue {
    messages: Arc<RwLock<Vec<Decision>>>,
}

impl InMemoryResultQueue {
    /// Creates a new, empty in-memory result queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every decision published so far, in publish order.
    pub async fn published(&self) -> Vec<Decision> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl ResultPublisher for InMemoryResultQueue {
    async fn publish(&self, decision: &Decision) -> Result<()> {
        let mut messages = self.messages.write().await;
        messages.push(decision.clone());
        Ok(())
    }
}
