use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::floored_period;
use crate::format::format_grouped_inr;
use crate::time_value::{compound, pct_to_rate, scale};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::PlannerResult;

fn default_emergency_months() -> i32 {
    6
}

// ---------------------------------------------------------------------------
// Emergency fund
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundInput {
    pub monthly_expenses: Money,
    /// Months of expenses to hold (default 6).
    #[serde(default = "default_emergency_months")]
    pub months: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundOutput {
    pub monthly_expenses: Money,
    pub months_coverage: u32,
    pub emergency_fund_needed: Money,
    pub recommendation: String,
}

/// Liquid reserve covering `months` of expenses.
pub fn calculate_emergency_fund(
    input: &EmergencyFundInput,
) -> PlannerResult<ComputationOutput<EmergencyFundOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let months = floored_period(input.months, "months", &mut warnings);
    let emergency_fund_needed =
        scale(input.monthly_expenses, Decimal::from(months), "emergency_fund_needed")?;
    let recommendation = format!(
        "Keep ₹{} as emergency fund to cover {} months of expenses",
        format_grouped_inr(emergency_fund_needed),
        months
    );

    let output = EmergencyFundOutput {
        monthly_expenses: input.monthly_expenses,
        months_coverage: months,
        emergency_fund_needed,
        recommendation,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Emergency fund: monthly expenses x months of coverage",
        &serde_json::json!({ "months": months }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

/// Share of income left after expenses, as a percentage. 0 when income <= 0.
pub fn savings_rate(income: Money, expenses: Money) -> Percent {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (income - expenses) / income * dec!(100)
}

/// What `amount` costs after `years` of inflation at `inflation_rate` percent.
pub fn inflation_adjusted_amount(
    amount: Money,
    years: u32,
    inflation_rate: Percent,
) -> PlannerResult<Money> {
    scale(
        amount,
        compound(pct_to_rate(inflation_rate), years)?,
        "inflation_adjusted_amount",
    )
}
