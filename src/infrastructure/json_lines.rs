use crate::config::ResultDestination;
use crate::domain::decision::Decision;
use crate::domain::ports::ResultPublisher;
use crate::error::{EvaluatorError, Result};
use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::info;

type Sink = Box<dyn AsyncWrite + Send + Unpin>;

/// Publishes each decision as one JSON line to the configured destination.
///
/// The sink is opened once and shared by every publish; writes are
/// serialized through a mutex so lines never interleave.
pub struct JsonLinesPublisher {
    destination: ResultDestination,
    sink: Mutex<Sink>,
}

impl JsonLinesPublisher {
    /// Opens the destination. Files are created if missing and appended to.
    pub async fn open(destination: &ResultDestination) -> Result<Self> {
        let sink: Sink = match destination {
            ResultDestination::Stdout => Box::new(tokio::io::stdout()),
            ResultDestination::File(path) => Box::new(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .await?,
            ),
        };

        Ok(Self {
            destination: destination.clone(),
            sink: Mutex::new(sink),
        })
    }

    fn publish_error(&self, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> EvaluatorError {
        EvaluatorError::PublishError {
            destination: self.destination.to_string(),
            source: source.into(),
        }
    }
}

#[async_trait]
impl ResultPublisher for JsonLinesPublisher {
    async fn publish(&self, decision: &Decision) -> Result<()> {
        let mut line = serde_json::to_vec(decision).map_err(|e| self.publish_error(e))?;
        line.push(b'\n');

        let mut sink = self.sink.lock().await;
        sink.write_all(&line).await.map_err(|e| self.publish_error(e))?;
        sink.flush().await.map_err(|e| self.publish_error(e))?;

        info!(
            applicant = %decision.applicant_email,
            destination = %self.destination,
            "Result published"
        );
        Ok(())
    }
}
