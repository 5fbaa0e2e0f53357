use crate::domain::calculator::{
    current_monthly_debt, manual_review_threshold, max_debt_capacity, monthly_payment,
};
use crate::domain::decision::{Decision, DecisionStatus};
use crate::domain::loan::{Loan, LoanApplicationRequest};
use crate::domain::money::{Amount, Money};
use crate::error::{EvaluatorError, Result};

/// The figures behind a single decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub max_capacity: Money,
    pub current_debt: Money,
    pub available: Money,
    pub new_payment: Money,
    pub status: DecisionStatus,
}

/// Evaluates a new loan against the applicant's salary and active loans.
///
/// Affordability is checked first: an installment above the available
/// capacity is always rejected, even when the amount would also require
/// manual review.
pub fn evaluate(salary: Amount, active_loans: &[Loan], new_loan: &Loan) -> Evaluation {
    let max_capacity = max_debt_capacity(salary);
    let current_debt = current_monthly_debt(active_loans);
    let available = max_capacity - current_debt;
    let new_payment = monthly_payment(new_loan.principal(), new_loan.rate(), new_loan.term_months());

    let status = if new_payment > available {
        DecisionStatus::Rejected
    } else if Money::from(new_loan.principal()) > manual_review_threshold(salary) {
        DecisionStatus::ManualReview
    } else {
        DecisionStatus::Approved
    };

    Evaluation {
        max_capacity,
        current_debt,
        available,
        new_payment,
        status,
    }
}

/// Evaluates a request and builds the decision to publish for it.
pub fn decide(request: &LoanApplicationRequest) -> Result<(Decision, Evaluation)> {
    let loan_id = request.new_loan.loan_id.clone().ok_or_else(|| {
        EvaluatorError::ValidationError("newLoan.loanId is required".to_string())
    })?;

    let evaluation = evaluate(
        request.applicant_base_salary,
        &request.active_loans,
        &request.new_loan,
    );

    let decision = Decision::new(request.applicant_email.clone(), evaluation.status, loan_id);
    Ok((decision, evaluation))
}
