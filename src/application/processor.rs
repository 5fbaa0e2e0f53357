use crate::application::evaluator::decide;
use crate::domain::decision::Decision;
use crate::domain::message::{InboundMessage, MessageBatch};
use crate::domain::ports::ResultPublisherBox;
use crate::error::{EvaluatorError, Result};
use serde::Serialize;
use tracing::{debug, error, info};

/// Processes queue batches one message at a time.
///
/// The processor owns the result publisher for its whole lifetime; the host
/// builds it once at startup and reuses it for every batch.
pub struct BatchProcessor {
    publisher: ResultPublisherBox,
}

impl BatchProcessor {
    pub fn new(publisher: ResultPublisherBox) -> Self {
        Self { publisher }
    }

    /// Evaluates one message and publishes its decision.
    ///
    /// The message counts as processed only once the publish has completed.
    pub async fn process_message(&self, message: &InboundMessage) -> Result<Decision> {
        debug!(message_id = %message.message_id, body = %message.body, "Processing message");

        let request = message.request()?;
        let (decision, evaluation) = decide(&request)?;

        info!(
            message_id = %message.message_id,
            applicant = %decision.applicant_email,
            loan_id = %decision.loan_id,
            max_capacity = %evaluation.max_capacity,
            current_debt = %evaluation.current_debt,
            available = %evaluation.available,
            new_payment = %evaluation.new_payment,
            status = ?decision.status,
            "Loan decision reached"
        );

        self.publisher.publish(&decision).await?;
        Ok(decision)
    }

    /// Processes every message of the batch and reports each outcome.
    ///
    /// A failing message does not stop the rest of the batch.
    pub async fn process_batch(&self, batch: MessageBatch) -> BatchReport {
        info!(messages = batch.records.len(), "Received message batch");

        let mut outcomes = Vec::with_capacity(batch.records.len());
        for message in batch.records {
            let result = self.process_message(&message).await;
            if let Err(e) = &result {
                error!(message_id = %message.message_id, error = %e, "Failed to process message");
            }
            outcomes.push(MessageOutcome {
                message_id: message.message_id,
                result,
            });
        }

        let report = BatchReport { outcomes };
        if report.is_success() {
            info!(messages = report.outcomes.len(), "Batch processed successfully");
        }
        report
    }
}

/// Result of processing a single message.
#[derive(Debug)]
pub struct MessageOutcome {
    pub message_id: String,
    pub result: Result<Decision>,
}

/// Per-message outcomes of one batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<MessageOutcome>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }

    pub fn decisions(&self) -> impl Iterator<Item = &Decision> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
    }

    pub fn failed_message_ids(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_err())
            .map(|outcome| outcome.message_id.clone())
            .collect()
    }

    /// Partial-failure response for brokers that redeliver only the listed
    /// messages.
    pub fn item_failures(&self) -> BatchItemFailures {
        BatchItemFailures {
            batch_item_failures: self
                .failed_message_ids()
                .into_iter()
                .map(|item_identifier| BatchItemFailure { item_identifier })
                .collect(),
        }
    }

    /// Whole-batch policy: any failed message fails the batch, so the broker
    /// redelivers all of it.
    pub fn into_result(self) -> Result<Vec<Decision>> {
        let failed = self.failed_message_ids();
        if !failed.is_empty() {
            return Err(EvaluatorError::BatchFailed {
                failed,
                total: self.outcomes.len(),
            });
        }

        self.outcomes
            .into_iter()
            .map(|outcome| outcome.result)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemFailures {
    pub batch_item_failures: Vec<BatchItemFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemFailure {
    pub item_identifier: String,
}
