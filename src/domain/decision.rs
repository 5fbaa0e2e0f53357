use super::calculator::MANUAL_REVIEW_SALARY_MULTIPLIER;
use super::loan::LoanId;
use serde::{Deserialize, Serialize};

/// Outcome of a loan evaluation, serialized with the labels the result
/// queue consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionStatus {
    #[serde(rename = "APROBADO")]
    Approved,
    #[serde(rename = "RECHAZADO")]
    Rejected,
    #[serde(rename = "REVISION MANUAL")]
    ManualReview,
}

impl DecisionStatus {
    /// Numeric status code shared with downstream systems.
    pub fn status_id(self) -> u8 {
        match self {
            DecisionStatus::Approved => 2,
            DecisionStatus::Rejected => 3,
            DecisionStatus::ManualReview => 5,
        }
    }

    pub fn reason(self) -> String {
        match self {
            DecisionStatus::Approved => {
                "installment is affordable within available debt capacity.".to_string()
            }
            DecisionStatus::Rejected => "installment exceeds available debt capacity.".to_string(),
            DecisionStatus::ManualReview => {
                format!("amount exceeds {MANUAL_REVIEW_SALARY_MULTIPLIER}× applicant base salary.")
            }
        }
    }
}

/// The record published to the result queue, one per processed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub applicant_email: String,
    pub status: DecisionStatus,
    pub reason: String,
    pub status_id: u8,
    pub loan_id: LoanId,
}

impl Decision {
    pub fn new(applicant_email: impl Into<String>, status: DecisionStatus, loan_id: LoanId) -> Self {
        Self {
            applicant_email: applicant_email.into(),
            status,
            reason: status.reason(),
            status_id: status.status_id(),
            loan_id,
        }
    }
}
