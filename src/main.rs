use loan_evaluator::application::processor::BatchProcessor;
use loan_evaluator::config::AppConfig;
use loan_evaluator::domain::ports::ResultPublisherBox;
use loan_evaluator::infrastructure::json_lines::JsonLinesPublisher;
use loan_evaluator::interfaces::queue::batch_reader::BatchReader;
use loan_evaluator::telemetry;
use miette::{IntoDiagnostic, Result};
use std::io;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().into_diagnostic()?;
    telemetry::init(&config.log_level).into_diagnostic()?;

    // The result queue handle lives for the whole process and is reused by
    // every batch.
    let publisher: ResultPublisherBox =
        Box::new(JsonLinesPublisher::open(&config.result_queue).await.into_diagnostic()?);
    let processor = BatchProcessor::new(publisher);
    info!(destination = %config.result_queue, "Loan evaluator ready");

    let stdin = io::stdin();
    let reader = BatchReader::new(stdin.lock());

    let mut failed_batches = 0usize;
    for batch_result in reader.batches() {
        match batch_result {
            Ok(batch) => {
                let report = processor.process_batch(batch).await;
                if let Err(e) = report.into_result() {
                    error!(error = %e, "Batch failed, the whole batch will be retried");
                    failed_batches += 1;
                }
            }
            Err(e) => {
                error!(error = %e, "Error reading batch");
                failed_batches += 1;
            }
        }
    }

    if failed_batches > 0 {
        miette::bail!("{failed_batches} batch(es) failed and must be redelivered");
    }

    Ok(())
}
