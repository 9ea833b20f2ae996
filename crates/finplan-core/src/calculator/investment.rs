//! Recurring-investment and lump-sum growth calculators.
//!
//! Covers:
//! 1. **SIP projection** -- annuity-due future value of a monthly contribution.
//! 2. **Compound interest** -- lump sum compounded `frequency` times a year.
//! 3. **Goal-based investment** -- monthly contribution that reaches a target.
//!
//! Rates are entered as annual percentages (12 = 12% p.a.).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::floored_period;
use crate::time_value::{
    compound, future_value_of_recurring_contribution, monthly_rate, period_product,
    required_recurring_contribution, scale,
};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::PlannerResult;

fn default_compounding_frequency() -> i32 {
    1
}

// ---------------------------------------------------------------------------
// SIP projection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_amount: Money,
    pub annual_return: Percent,
    pub years: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipOutput {
    pub monthly_amount: Money,
    pub annual_return: Percent,
    pub years: u32,
    pub total_months: u32,
    pub total_investment: Money,
    /// Projected corpus at the end of the horizon.
    pub total_returns: Money,
    pub wealth_gained: Money,
}

/// Project a monthly SIP with contributions at the start of each month.
pub fn calculate_sip(input: &SipInput) -> PlannerResult<ComputationOutput<SipOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let years = floored_period(input.years, "years", &mut warnings);
    let total_months = period_product(years, 12, "total_months")?;
    let rate = monthly_rate(input.annual_return);

    let total_investment = scale(
        input.monthly_amount,
        Decimal::from(total_months),
        "total_investment",
    )?;
    let total_returns =
        future_value_of_recurring_contribution(input.monthly_amount, rate, total_months)?;
    let wealth_gained = total_returns - total_investment;

    let output = SipOutput {
        monthly_amount: input.monthly_amount,
        annual_return: input.annual_return,
        years,
        total_months,
        total_investment,
        total_returns,
        wealth_gained,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "SIP future value (annuity-due, monthly compounding)",
        &serde_json::json!({
            "monthly_rate": rate.to_string(),
            "contribution_timing": "start of period",
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Compound interest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: Money,
    pub annual_rate: Percent,
    pub years: i32,
    /// Compounding events per year (1 = annual, 12 = monthly).
    #[serde(default = "default_compounding_frequency")]
    pub compounding_frequency: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestOutput {
    pub principal: Money,
    pub annual_rate: Percent,
    pub years: u32,
    pub compounding_frequency: u32,
    pub final_amount: Money,
    pub interest_earned: Money,
}

/// Grow a lump sum at a fixed annual rate compounded `frequency` times a year.
pub fn calculate_compound_interest(
    input: &CompoundInterestInput,
) -> PlannerResult<ComputationOutput<CompoundInterestOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let years = floored_period(input.years, "years", &mut warnings);
    let frequency = floored_period(
        input.compounding_frequency,
        "compounding_frequency",
        &mut warnings,
    );

    let periodic_rate = input.annual_rate / (Decimal::ONE_HUNDRED * Decimal::from(frequency));
    let periods = period_product(frequency, years, "compounding periods")?;
    let final_amount = scale(
        input.principal,
        compound(periodic_rate, periods)?,
        "final_amount",
    )?;
    let interest_earned = final_amount - input.principal;

    let output = CompoundInterestOutput {
        principal: input.principal,
        annual_rate: input.annual_rate,
        years,
        compounding_frequency: frequency,
        final_amount,
        interest_earned,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Compound interest: P * (1 + r / (100 * f))^(f * t)",
        &serde_json::json!({ "periodic_rate": periodic_rate.to_string() }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Goal-based investment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInvestmentInput {
    pub target_amount: Money,
    pub years: i32,
    pub expected_return: Percent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInvestmentOutput {
    pub target_amount: Money,
    pub years: u32,
    pub expected_return: Percent,
    pub required_monthly: Money,
    pub total_investment: Money,
    /// Portion of the target supplied by returns rather than contributions.
    pub expected_gains: Money,
}

/// Monthly SIP needed to reach `target_amount` in `years`.
pub fn calculate_goal_based_investment(
    input: &GoalInvestmentInput,
) -> PlannerResult<ComputationOutput<GoalInvestmentOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let years = floored_period(input.years, "years", &mut warnings);
    let total_months = period_product(years, 12, "total_months")?;
    let rate = monthly_rate(input.expected_return);

    let required_monthly =
        required_recurring_contribution(input.target_amount, rate, total_months)?;
    let total_investment = required_monthly * Decimal::from(total_months);

    let output = GoalInvestmentOutput {
        target_amount: input.target_amount,
        years,
        expected_return: input.expected_return,
        required_monthly,
        total_investment,
        expected_gains: input.target_amount - total_investment,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Required SIP (inverse annuity-due future value)",
        &serde_json::json!({
            "monthly_rate": rate.to_string(),
            "total_months": total_months,
        }),
        warnings,
        elapsed,
        output,
    ))
}
