use super::loan::LoanApplicationRequest;
use crate::error::Result;
use serde::Deserialize;

/// A batch of messages as delivered by the queue consumer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MessageBatch {
    #[serde(rename = "Records", default)]
    pub records: Vec<InboundMessage>,
}

/// A single queue message. The body is kept raw so a malformed body only
/// fails its own message, not the whole batch envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessage {
    pub message_id: String,
    pub body: String,
}

impl InboundMessage {
    pub fn new(message_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            body: body.into(),
        }
    }

    /// Parses the body into a loan application.
    pub fn request(&self) -> Result<LoanApplicationRequest> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
