#![allow(dead_code)]

use serde_json::{Value, json};
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

pub fn request_body(salary: u64, active_loans: Value, new_loan: Value) -> String {
    json!({
        "applicantEmail": format!("applicant-{salary}@example.com"),
        "applicantBaseSalary": salary,
        "activeLoans": active_loans,
        "newLoan": new_loan,
    })
    .to_string()
}

pub fn batch_line(records: &[(&str, String)]) -> String {
    let records: Vec<Value> = records
        .iter()
        .map(|(id, body)| json!({"messageId": id, "body": body}))
        .collect();
    json!({ "Records": records }).to_string()
}

/// Writes `batches` batch lines of `per_batch` affordable applications each.
pub fn generate_batches(path: &Path, batches: usize, per_batch: usize) -> Result<(), Error> {
    let mut file = File::create(path)?;
    let mut message_id = 1;

    for _ in 0..batches {
        let mut records = Vec::with_capacity(per_batch);
        for _ in 0..per_batch {
            let body = request_body(
                3000,
                json!([]),
                json!({"loanId": message_id, "requestedAmount": 5000, "monthlyInterestRate": 0.01, "requestedTermMonths": 12}),
            );
            records.push((message_id.to_string(), body));
            message_id += 1;
        }
        let records: Vec<(&str, String)> = records
            .iter()
            .map(|(id, body)| (id.as_str(), body.clone()))
            .collect();
        writeln!(file, "{}", batch_line(&records))?;
    }

    file.flush()?;
    Ok(())
}

pub fn read_results(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(|line| serde_json::from_str(line).expect("result line is JSON"))
        .collect()
}
