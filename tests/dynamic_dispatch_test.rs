use loan_evaluator::application::processor::BatchProcessor;
use loan_evaluator::domain::decision::{Decision, DecisionStatus};
use loan_evaluator::domain::loan::LoanId;
use loan_evaluator::domain::message::{InboundMessage, MessageBatch};
use loan_evaluator::domain::ports::ResultPublisherBox;
use loan_evaluator::infrastructure::in_memory::InMemoryResultQueue;
use std::sync::Arc;

#[tokio::test]
async fn test_publisher_as_trait_object() {
    let queue = InMemoryResultQueue::new();
    let publisher: ResultPublisherBox = Box::new(queue.clone());

    // Verify Send + Sync by spawning a task
    let handle = tokio::spawn(async move {
        let decision = Decision::new(
            "a@example.com",
            DecisionStatus::Approved,
            LoanId::Number(1.into()),
        );
        publisher.publish(&decision).await.unwrap();
    });
    handle.await.unwrap();

    assert_eq!(queue.published().await.len(), 1);
}

#[tokio::test]
async fn test_processor_shared_across_tasks() {
    let queue = InMemoryResultQueue::new();
    let processor = Arc::new(BatchProcessor::new(Box::new(queue.clone())));

    let body = r#"{"applicantEmail":"a@example.com","applicantBaseSalary":3000,
        "newLoan":{"loanId":7,"requestedAmount":5000,"monthlyInterestRate":0.01,"requestedTermMonths":12}}"#;

    let mut handles = Vec::new();
    for i in 0..8 {
        let processor = Arc::clone(&processor);
        let batch = MessageBatch {
            records: vec![InboundMessage::new(format!("m-{i}"), body)],
        };
        handles.push(tokio::spawn(async move {
            processor.process_batch(batch).await.into_result()
        }));
    }

    for handle in handles {
        let decisions = handle.await.unwrap().unwrap();
        assert_eq!(decisions[0].status, DecisionStatus::Approved);
    }

    // Independent messages reach identical decisions regardless of scheduling.
    let published = queue.published().await;
    assert_eq!(published.len(), 8);
    assert!(published.windows(2).all(|w| w[0] == w[1]));
}
