//! Debt capacity and installment arithmetic.
//!
//! Every function here is pure and total: degenerate inputs produce a zero
//! installment and arithmetic overflow saturates instead of panicking.

use super::loan::Loan;
use super::money::{Amount, Money, Rate};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Share of the base salary that may go to monthly debt service.
pub const MAX_DEBT_RATIO: Decimal = dec!(0.35);

/// Loans above this multiple of the base salary need a human decision.
pub const MANUAL_REVIEW_SALARY_MULTIPLIER: Decimal = dec!(5);

/// Maximum monthly obligation the applicant may carry.
pub fn max_debt_capacity(salary: Amount) -> Money {
    Money::new(salary.value() * MAX_DEBT_RATIO)
}

/// Largest principal that can be approved without manual review.
pub fn manual_review_threshold(salary: Amount) -> Money {
    Money::new(
        salary
            .value()
            .checked_mul(MANUAL_REVIEW_SALARY_MULTIPLIER)
            .unwrap_or(Decimal::MAX),
    )
}

/// Fixed monthly installment of an amortizing loan, rounded to cents.
///
/// `P·i·(1+i)^n / ((1+i)^n − 1)`. A zero principal, rate or term means no
/// payment obligation and yields zero.
pub fn monthly_payment(principal: Amount, rate: Rate, term_months: u32) -> Money {
    if principal.is_zero() || rate.is_zero() || term_months == 0 {
        return Money::ZERO;
    }

    let factor = Decimal::ONE
        .checked_add(rate.value())
        .and_then(|base| base.checked_powu(u64::from(term_months)));

    match factor {
        Some(factor) => amortize(principal.value(), rate.value(), factor, term_months),
        // (1+i)^n beyond the decimal range; the installment has converged to P·i.
        None => Money::new(
            principal
                .value()
                .checked_mul(rate.value())
                .unwrap_or(Decimal::MAX),
        )
        .round_cents(),
    }
}

fn amortize(principal: Decimal, rate: Decimal, factor: Decimal, term_months: u32) -> Money {
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Money::new(principal / Decimal::from(term_months)).round_cents();
    }

    // factor / denominator stays close to 1, so dividing first keeps the
    // intermediate products inside the decimal range.
    let installment = factor
        .checked_div(denominator)
        .and_then(|ratio| principal.checked_mul(rate)?.checked_mul(ratio))
        .unwrap_or(Decimal::MAX);

    Money::new(installment).round_cents()
}

/// Sum of the monthly installments of every active loan.
pub fn current_monthly_debt(loans: &[Loan]) -> Money {
    loans
        .iter()
        .map(|loan| monthly_payment(loan.principal(), loan.rate(), loan.term_months()))
        .sum()
}
