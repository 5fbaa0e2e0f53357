use super::money::{Amount, Rate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a loan as it arrived on the wire.
///
/// Upstream systems send either numeric or textual ids; any JSON number or
/// string is accepted and echoed back unchanged in the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoanId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanId::Number(id) => write!(f, "{id}"),
            LoanId::Text(id) => f.write_str(id),
        }
    }
}

/// Terms of a loan, either already active or newly requested.
///
/// Absent terms deserialize to `None` and count as zero when the
/// installment is computed.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(default)]
    pub loan_id: Option<LoanId>,
    #[serde(default)]
    pub requested_amount: Option<Amount>,
    #[serde(default)]
    pub monthly_interest_rate: Option<Rate>,
    #[serde(default, deserialize_with = "deserialize_term_months")]
    pub requested_term_months: Option<u32>,
}

/// JSON has no separate integer type, so `12.0` is a valid term. Fractional,
/// negative or out-of-range values are rejected.
fn deserialize_term_months<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Decimal>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if !value.fract().is_zero() {
        return Err(D::Error::custom(format!(
            "requestedTermMonths must be a whole number of months, got {value}"
        )));
    }

    value.to_u32().map(Some).ok_or_else(|| {
        D::Error::custom(format!(
            "requestedTermMonths must be between 0 and {}, got {value}",
            u32::MAX
        ))
    })
}

impl Loan {
    pub fn principal(&self) -> Amount {
        self.requested_amount.unwrap_or(Amount::ZERO)
    }

    pub fn rate(&self) -> Rate {
        self.monthly_interest_rate.unwrap_or(Rate::ZERO)
    }

    pub fn term_months(&self) -> u32 {
        self.requested_term_months.unwrap_or(0)
    }
}

/// A loan application as carried in the body of an inbound message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationRequest {
    pub applicant_email: String,
    pub applicant_base_salary: Amount,
    #[serde(default, deserialize_with = "deserialize_nullable_loans")]
    pub active_loans: Vec<Loan>,
    pub new_loan: Loan,
}

fn deserialize_nullable_loans<'de, D>(deserializer: D) -> Result<Vec<Loan>, D::Error>
where
    D: Deserializer<'de>,
{
    let loans = Option::<Vec<Loan>>::deserialize(deserializer)?;
    Ok(loans.unwrap_or_default())
}
