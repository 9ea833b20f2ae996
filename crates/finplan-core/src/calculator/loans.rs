use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::floored_period;
use crate::time_value::{amortized_payment, monthly_rate, period_product, scale};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::PlannerResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: Money,
    pub annual_rate: Percent,
    pub years: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiOutput {
    pub principal: Money,
    pub annual_rate: Percent,
    pub years: u32,
    pub total_months: u32,
    pub emi: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

/// Equated monthly instalment for a fully amortizing loan.
pub fn calculate_emi(input: &EmiInput) -> PlannerResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let years = floored_period(input.years, "years", &mut warnings);
    let total_months = period_product(years, 12, "total_months")?;
    let rate = monthly_rate(input.annual_rate);

    let emi = amortized_payment(input.principal, rate, total_months)?;
    let total_payment = scale(emi, Decimal::from(total_months), "total_payment")?;
    let total_interest = total_payment - input.principal;

    let output = EmiOutput {
        principal: input.principal,
        annual_rate: input.annual_rate,
        years,
        total_months,
        emi,
        total_payment,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "EMI: P * r * (1 + r)^n / ((1 + r)^n - 1), monthly rate",
        &serde_json::json!({ "monthly_rate": rate.to_string() }),
        warnings,
        elapsed,
        output,
    ))
}
