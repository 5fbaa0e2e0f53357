use loan_evaluator::application::processor::BatchProcessor;
use loan_evaluator::domain::decision::DecisionStatus;
use loan_evaluator::domain::loan::LoanId;
use loan_evaluator::domain::message::{InboundMessage, MessageBatch};
use loan_evaluator::infrastructure::in_memory::InMemoryResultQueue;
use std::fs;

fn fixture_batch() -> MessageBatch {
    let line = fs::read_to_string("tests/fixtures/batch.jsonl").expect("fixture exists");
    serde_json::from_str(line.trim()).expect("fixture is a batch envelope")
}

#[tokio::test]
async fn test_fixture_scenarios() {
    let queue = InMemoryResultQueue::new();
    let processor = BatchProcessor::new(Box::new(queue.clone()));

    let decisions = processor
        .process_batch(fixture_batch())
        .await
        .into_result()
        .unwrap();

    let summary: Vec<(DecisionStatus, u8)> = decisions
        .iter()
        .map(|d| (d.status, d.status_id))
        .collect();
    assert_eq!(
        summary,
        vec![
            // A: 444.24 installment against 1050 capacity
            (DecisionStatus::Approved, 2),
            // B: 200 installment against 50 left after 300 of debt
            (DecisionStatus::Rejected, 3),
            // C: 6000 > 5x salary but 282.44 fits in 350
            (DecisionStatus::ManualReview, 5),
            // D: 6000 > 5x salary and 533.09 does not fit in 350
            (DecisionStatus::Rejected, 3),
        ]
    );

    assert_eq!(decisions[2].loan_id, LoanId::Text("L-103".into()));
    assert_eq!(queue.published().await, decisions);
}

#[tokio::test]
async fn test_message_order_does_not_change_decisions() {
    let forward = fixture_batch();
    let mut reversed = forward.clone();
    reversed.records.reverse();

    let processor = BatchProcessor::new(Box::new(InMemoryResultQueue::new()));
    let mut a = processor.process_batch(forward).await.into_result().unwrap();
    let mut b = processor.process_batch(reversed).await.into_result().unwrap();

    a.sort_by(|x, y| x.applicant_email.cmp(&y.applicant_email));
    b.sort_by(|x, y| x.applicant_email.cmp(&y.applicant_email));
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_exactly_one_decision_per_message() {
    let queue = InMemoryResultQueue::new();
    let processor = BatchProcessor::new(Box::new(queue.clone()));

    let mut batch = fixture_batch();
    batch.records.push(InboundMessage::new("bad", "[]"));
    let total = batch.records.len();

    let report = processor.process_batch(batch).await;
    assert_eq!(report.outcomes.len(), total);
    assert_eq!(queue.published().await.len(), total - 1);
}
