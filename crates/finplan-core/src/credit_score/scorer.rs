//! Heuristic credit score.
//!
//! Points accumulate from a 650 base:
//! 1. **Age** -- +30 at 25 and over, +15 from 21 to 24.
//! 2. **Income** -- +50 / +30 / +20 at 50k / 25k / 15k a month.
//! 3. **Spending ratio** -- +40 below 0.6, +20 below 0.8, otherwise -20.
//!    Only applied when transaction history exists.
//!
//! The result is clamped to [300, 850] and mapped to a grade band. The
//! factor breakdown is informational and never feeds back into the score.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::grade::CreditGrade;
use crate::error::PlannerError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, TransactionSummary};
use crate::PlannerResult;

pub const BASE_SCORE: i32 = 650;
pub const MIN_SCORE: i32 = 300;
pub const MAX_SCORE: i32 = 850;

fn default_assumed_spending_ratio() -> Rate {
    dec!(0.7)
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditScoreInput {
    /// Expected in 1..=120.
    pub age: u32,
    pub monthly_income: Money,
    /// Aggregated transaction history. `None` (or an empty summary) means no history.
    #[serde(default)]
    pub transactions: Option<TransactionSummary>,
    /// Spending ratio shown in the breakdown when there is no history (default 0.7).
    #[serde(default = "default_assumed_spending_ratio")]
    pub assumed_spending_ratio: Rate,
}

/// Four informational sub-scores in [0, 100].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactors {
    pub payment_history: u32,
    pub income_stability: u32,
    pub spending_behavior: u32,
    pub age_factor: u32,
}

/// Point contributions that produced the score, before clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreContributions {
    pub base: i32,
    pub age: i32,
    pub income: i32,
    pub spending: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditScoreOutput {
    pub score: i32,
    pub grade: CreditGrade,
    pub range: String,
    pub factors: ScoreFactors,
    pub contributions: ScoreContributions,
    pub spending_ratio: Rate,
    pub has_transaction_history: bool,
}

// ---------------------------------------------------------------------------
// Point tables
// ---------------------------------------------------------------------------

fn age_points(age: u32) -> i32 {
    if age >= 25 {
        30
    } else if age >= 21 {
        15
    } else {
        0
    }
}

fn income_points(monthly_income: Money) -> i32 {
    if monthly_income >= dec!(50000) {
        50
    } else if monthly_income >= dec!(25000) {
        30
    } else if monthly_income >= dec!(15000) {
        20
    } else {
        0
    }
}

fn spending_points(ratio: Rate) -> i32 {
    if ratio < dec!(0.6) {
        40
    } else if ratio < dec!(0.8) {
        20
    } else {
        -20
    }
}

/// Clamp a [0, 100] sub-score computed in Decimal and drop any fraction.
fn sub_score(value: Decimal) -> u32 {
    value
        .floor()
        .max(Decimal::ZERO)
        .min(dec!(100))
        .to_u32()
        .unwrap_or(0)
}

fn score_factors(score: i32, monthly_income: Money, spending_ratio: Rate, age: u32) -> ScoreFactors {
    let payment_history = ((score - MIN_SCORE).max(0) / 5).min(100) as u32;
    let income_stability = sub_score(monthly_income / dec!(1000));
    let spending_behavior =
        sub_score(dec!(100) - (spending_ratio * dec!(100)).trunc());
    let age_factor = age.saturating_mul(2).min(100);

    ScoreFactors {
        payment_history,
        income_stability,
        spending_behavior,
        age_factor,
    }
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Score a profile and optional transaction history.
pub fn calculate_credit_score(
    input: &CreditScoreInput,
) -> PlannerResult<ComputationOutput<CreditScoreOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if !(1..=120).contains(&input.age) {
        return Err(PlannerError::InvalidInput {
            field: "age".into(),
            reason: format!("age must be between 1 and 120, got {}", input.age),
        });
    }

    let history = input.transactions.as_ref().filter(|t| !t.is_empty());

    let (spending_ratio, spending) = match history {
        Some(summary) => {
            let ratio = if input.monthly_income > Decimal::ZERO {
                summary.total_expenses / input.monthly_income
            } else {
                log::debug!("credit score: zero income, spending ratio forced to 1.0");
                warnings.push("Monthly income is zero; spending ratio taken as 1.0".into());
                Decimal::ONE
            };
            (ratio, spending_points(ratio))
        }
        None => {
            warnings.push(format!(
                "No transaction history; spending ratio {} assumed for the breakdown only",
                input.assumed_spending_ratio
            ));
            (input.assumed_spending_ratio, 0)
        }
    };

    let contributions = ScoreContributions {
        base: BASE_SCORE,
        age: age_points(input.age),
        income: income_points(input.monthly_income),
        spending,
    };
    let raw = contributions.base + contributions.age + contributions.income + contributions.spending;
    let score = raw.clamp(MIN_SCORE, MAX_SCORE);
    let grade = CreditGrade::from_score(score);

    log::trace!("credit score: raw={} clamped={} ratio={}", raw, score, spending_ratio);

    let output = CreditScoreOutput {
        score,
        grade,
        range: grade.range().to_string(),
        factors: score_factors(score, input.monthly_income, spending_ratio, input.age),
        contributions,
        spending_ratio,
        has_transaction_history: history.is_some(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Heuristic point score: base 650 + age + income + spending ratio, clamped 300-850",
        &serde_json::json!({
            "base_score": BASE_SCORE,
            "assumed_spending_ratio": input.assumed_spending_ratio.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
