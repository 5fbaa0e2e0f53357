use super::decision::Decision;
use crate::error::Result;
use async_trait::async_trait;

/// Outbound port towards the result queue.
///
/// Implementations must only return `Ok` once the broker (or sink) has
/// accepted the message.
#[async_trait]
pub trait ResultPublisher: Send + Sync {
    async fn publish(&self, decision: &Decision) -> Result<()>;
}

pub type ResultPublisherBox = Box<dyn ResultPublisher>;
