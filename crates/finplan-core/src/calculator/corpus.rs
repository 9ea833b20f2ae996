//! Lump-sum targets: retirement corpus, life cover, and education corpus.
//!
//! Policy constants (25-year retirement horizon, 4% discount rate, 60-year
//! working life, per-dependent allowance, 20% education buffer) are fixed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{compound, compound_signed, npv, pct_to_rate, scale};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::PlannerResult;

/// Years of post-retirement expenses the corpus must fund.
pub const RETIREMENT_YEARS: u32 = 25;
/// Return earned on the corpus during retirement, used to discount expenses.
pub const RETIREMENT_DISCOUNT_RATE: Rate = dec!(0.04);
/// Age at which income replacement stops.
pub const WORKING_AGE_LIMIT: i64 = 60;
pub const INCOME_REPLACEMENT_RATIO: Rate = dec!(0.8);
pub const PER_DEPENDENT_ALLOWANCE: Money = dec!(500000);
/// Cover is never recommended below this multiple of annual income.
pub const MIN_COVER_MULTIPLE: Decimal = dec!(10);
pub const EDUCATION_BUFFER: Decimal = dec!(1.2);

fn default_retirement_inflation() -> Percent {
    dec!(6)
}

fn default_education_inflation() -> Percent {
    dec!(8)
}

// ---------------------------------------------------------------------------
// Retirement corpus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementCorpusInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_monthly_expenses: Money,
    /// Annual inflation applied before and during retirement (default 6%).
    #[serde(default = "default_retirement_inflation")]
    pub inflation_rate: Percent,
}

/// One year of post-retirement spending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementYearNeed {
    pub year: u32,
    pub annual_expenses: Money,
    /// Value at the retirement date.
    pub present_value: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementCorpusOutput {
    pub current_age: u32,
    pub retirement_age: u32,
    /// Negative when retirement age is already behind the current age.
    pub years_to_save: i64,
    pub current_monthly_expenses: Money,
    pub future_monthly_expenses: Money,
    pub total_corpus_needed: Money,
    pub yearly_needs: Vec<RetirementYearNeed>,
}

/// Corpus required at retirement to fund 25 years of inflating expenses.
pub fn calculate_retirement_corpus(
    input: &RetirementCorpusInput,
) -> PlannerResult<ComputationOutput<RetirementCorpusOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let years_to_save = i64::from(input.retirement_age) - i64::from(input.current_age);
    if years_to_save < 0 {
        warnings.push(format!(
            "retirement_age {} is below current_age {}; expenses deflated over {} years",
            input.retirement_age, input.current_age, -years_to_save
        ));
    }
    let inflation = pct_to_rate(input.inflation_rate);

    let future_monthly_expenses = scale(
        input.current_monthly_expenses,
        compound_signed(inflation, years_to_save)?,
        "future_monthly_expenses",
    )?;
    let first_year = scale(future_monthly_expenses, dec!(12), "first_year_expenses")?;

    let annual_flows = (0..RETIREMENT_YEARS)
        .map(|year| scale(first_year, compound(inflation, year)?, "annual_expenses"))
        .collect::<PlannerResult<Vec<Money>>>()?;
    let total_corpus_needed = npv(RETIREMENT_DISCOUNT_RATE, &annual_flows)?;

    let yearly_needs = annual_flows
        .iter()
        .zip(0..RETIREMENT_YEARS)
        .map(|(flow, year)| {
            Ok(RetirementYearNeed {
                year: year + 1,
                annual_expenses: *flow,
                present_value: flow / compound(RETIREMENT_DISCOUNT_RATE, year)?,
            })
        })
        .collect::<PlannerResult<Vec<_>>>()?;

    let output = RetirementCorpusOutput {
        current_age: input.current_age,
        retirement_age: input.retirement_age,
        years_to_save,
        current_monthly_expenses: input.current_monthly_expenses,
        future_monthly_expenses,
        total_corpus_needed,
        yearly_needs,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Retirement corpus: inflated expenses discounted at a fixed rate over a fixed horizon",
        &serde_json::json!({
            "inflation_rate": input.inflation_rate.to_string(),
            "retirement_years": RETIREMENT_YEARS,
            "discount_rate": RETIREMENT_DISCOUNT_RATE.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Insurance need
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceNeedInput {
    pub age: u32,
    pub annual_income: Money,
    pub dependents: u32,
    #[serde(default)]
    pub existing_savings: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceNeedOutput {
    pub age: u32,
    pub annual_income: Money,
    pub dependents: u32,
    pub income_replacement: Money,
    pub dependent_expenses: Money,
    pub emergency_component: Money,
    pub minimum_cover: Money,
    pub total_insurance_need: Money,
    /// True when the 10x income floor set the recommendation.
    pub minimum_applied: bool,
}

/// Life cover estimate (human-life-value style) with a 10x income floor.
pub fn calculate_insurance_need(
    input: &InsuranceNeedInput,
) -> PlannerResult<ComputationOutput<InsuranceNeedOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let working_years_left = WORKING_AGE_LIMIT - i64::from(input.age);
    if working_years_left <= 0 {
        warnings.push(format!(
            "Age {} is at or past {}; income replacement does not add cover",
            input.age, WORKING_AGE_LIMIT
        ));
    }

    let income_replacement =
        input.annual_income * Decimal::from(working_years_left) * INCOME_REPLACEMENT_RATIO;
    let dependent_expenses = Decimal::from(input.dependents) * PER_DEPENDENT_ALLOWANCE;
    let emergency_component = input.annual_income;
    let minimum_cover = input.annual_income * MIN_COVER_MULTIPLE;

    let computed =
        income_replacement + dependent_expenses + emergency_component - input.existing_savings;
    let minimum_applied = computed < minimum_cover;
    let total_insurance_need = computed.max(minimum_cover);

    let output = InsuranceNeedOutput {
        age: input.age,
        annual_income: input.annual_income,
        dependents: input.dependents,
        income_replacement,
        dependent_expenses,
        emergency_component,
        minimum_cover,
        total_insurance_need,
        minimum_applied,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Life cover: income replacement + dependent allowance + 1y emergency - savings, min 10x income",
        &serde_json::json!({
            "working_age_limit": WORKING_AGE_LIMIT,
            "income_replacement_ratio": INCOME_REPLACEMENT_RATIO.to_string(),
            "per_dependent_allowance": PER_DEPENDENT_ALLOWANCE.to_string(),
            "min_cover_multiple": MIN_COVER_MULTIPLE.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Education corpus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationCorpusInput {
    pub child_current_age: u32,
    pub target_age: u32,
    pub current_education_cost: Money,
    /// Education cost inflation (default 8%).
    #[serde(default = "default_education_inflation")]
    pub inflation_rate: Percent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationCorpusOutput {
    pub child_current_age: u32,
    pub target_age: u32,
    /// Negative when the target age is already behind the child's age.
    pub years_to_save: i64,
    pub current_cost: Money,
    pub future_cost: Money,
    pub buffer_amount: Money,
    pub total_corpus_needed: Money,
    pub inflation_rate: Percent,
}

/// Future education cost plus a 20% buffer.
pub fn calculate_education_corpus(
    input: &EducationCorpusInput,
) -> PlannerResult<ComputationOutput<EducationCorpusOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let years_to_save = i64::from(input.target_age) - i64::from(input.child_current_age);
    if years_to_save < 0 {
        warnings.push(format!(
            "target_age {} is below child_current_age {}; cost deflated over {} years",
            input.target_age, input.child_current_age, -years_to_save
        ));
    }

    let future_cost = scale(
        input.current_education_cost,
        compound_signed(pct_to_rate(input.inflation_rate), years_to_save)?,
        "future_cost",
    )?;
    let total_corpus_needed = scale(future_cost, EDUCATION_BUFFER, "total_corpus_needed")?;

    let output = EducationCorpusOutput {
        child_current_age: input.child_current_age,
        target_age: input.target_age,
        years_to_save,
        current_cost: input.current_education_cost,
        future_cost,
        buffer_amount: total_corpus_needed - future_cost,
        total_corpus_needed,
        inflation_rate: input.inflation_rate,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Education corpus: inflated current cost with a 20% buffer",
        &serde_json::json!({
            "inflation_rate": input.inflation_rate.to_string(),
            "buffer_multiplier": EDUCATION_BUFFER.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retirement_input() -> RetirementCorpusInput {
        RetirementCorpusInput {
            current_age: 30,
            retirement_age: 60,
            current_monthly_expenses: dec!(30_000),
            inflation_rate: dec!(6),
        }
    }

    // ---------------------------------------------------------------
    // Retirement
    // ---------------------------------------------------------------

    #[test]
    fn test_retirement_future_expenses() {
        let result = calculate_retirement_corpus(&retirement_input()).unwrap();
        let out = &result.result;

        assert_eq!(out.years_to_save, 30);
        // 30k * 1.06^30 ≈ 172,305
        assert!(
            (out.future_monthly_expenses - dec!(172_305)).abs() < dec!(5),
            "got {}",
            out.future_monthly_expenses
        );
    }

    #[test]
    fn test_retirement_corpus_matches_year_sum() {
        let result = calculate_retirement_corpus(&retirement_input()).unwrap();
        let out = &result.result;

        assert_eq!(out.yearly_needs.len(), 25);
        let summed: Decimal = out.yearly_needs.iter().map(|y| y.present_value).sum();
        assert!((summed - out.total_corpus_needed).abs() < dec!(0.0001));

        // First year is undiscounted
        let first = &out.yearly_needs[0];
        assert_eq!(first.annual_expenses, out.future_monthly_expenses * dec!(12));
        assert_eq!(first.present_value, first.annual_expenses);
    }

    #[test]
    fn test_retirement_zero_inflation_discounts_flat_stream() {
        let mut input = retirement_input();
        input.inflation_rate = Decimal::ZERO;
        input.current_monthly_expenses = dec!(10_000);
        let result = calculate_retirement_corpus(&input).unwrap();
        let out = &result.result;

        assert_eq!(out.future_monthly_expenses, dec!(10_000));
        // 120k * annuity-due factor at 4% for 25 years (≈ 16.247)
        assert!(
            (out.total_corpus_needed - dec!(1_949_640)).abs() < dec!(50),
            "got {}",
            out.total_corpus_needed
        );
    }

    #[test]
    fn test_retirement_age_already_passed() {
        let mut input = retirement_input();
        input.current_age = 65;
        let result = calculate_retirement_corpus(&input).unwrap();

        // 30k * 1.06^-5
        assert_eq!(result.result.years_to_save, -5);
        assert!(
            (result.result.future_monthly_expenses - dec!(22_417.75)).abs() < dec!(0.01),
            "got {}",
            result.result.future_monthly_expenses
        );
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_retirement_extreme_inflation_is_an_error() {
        let mut input = retirement_input();
        input.current_age = 20;
        input.retirement_age = 120;
        input.inflation_rate = dec!(100);
        assert!(matches!(
            calculate_retirement_corpus(&input),
            Err(crate::PlannerError::Overflow(_))
        ));
    }

    #[test]
    fn test_retirement_default_inflation() {
        let input: RetirementCorpusInput = serde_json::from_str(
            r#"{"current_age":30,"retirement_age":60,"current_monthly_expenses":"30000"}"#,
        )
        .unwrap();
        assert_eq!(input.inflation_rate, dec!(6));
    }

    // ---------------------------------------------------------------
    // Insurance
    // ---------------------------------------------------------------

    #[test]
    fn test_insurance_components() {
        let result = calculate_insurance_need(&InsuranceNeedInput {
            age: 30,
            annual_income: dec!(600_000),
            dependents: 2,
            existing_savings: dec!(200_000),
        })
        .unwrap();
        let out = &result.result;

        // 600k * 30 * 0.8
        assert_eq!(out.income_replacement, dec!(14_400_000));
        assert_eq!(out.dependent_expenses, dec!(1_000_000));
        assert_eq!(out.emergency_component, dec!(600_000));
        assert_eq!(out.total_insurance_need, dec!(15_800_000));
        assert!(!out.minimum_applied);
    }

    #[test]
    fn test_insurance_ten_times_income_floor() {
        let result = calculate_insurance_need(&InsuranceNeedInput {
            age: 55,
            annual_income: dec!(1_000_000),
            dependents: 0,
            existing_savings: dec!(2_000_000),
        })
        .unwrap();
        let out = &result.result;

        // 4M + 0 + 1M - 2M = 3M < 10M floor
        assert_eq!(out.total_insurance_need, dec!(10_000_000));
        assert!(out.minimum_applied);
    }

    #[test]
    fn test_insurance_past_working_age() {
        let result = calculate_insurance_need(&InsuranceNeedInput {
            age: 65,
            annual_income: dec!(100_000),
            dependents: 1,
            existing_savings: Decimal::ZERO,
        })
        .unwrap();
        assert!(result.result.income_replacement < Decimal::ZERO);
        assert_eq!(result.result.total_insurance_need, dec!(1_000_000));
        assert_eq!(result.warnings.len(), 1);
    }

    // ---------------------------------------------------------------
    // Education
    // ---------------------------------------------------------------

    #[test]
    fn test_education_corpus() {
        let result = calculate_education_corpus(&EducationCorpusInput {
            child_current_age: 8,
            target_age: 10,
            current_education_cost: dec!(1_000_000),
            inflation_rate: dec!(10),
        })
        .unwrap();
        let out = &result.result;

        assert_eq!(out.years_to_save, 2);
        assert_eq!(out.future_cost, dec!(1_210_000));
        assert_eq!(out.total_corpus_needed, dec!(1_452_000));
        assert_eq!(out.buffer_amount, dec!(242_000));
    }

    #[test]
    fn test_education_target_age_behind_child() {
        let result = calculate_education_corpus(&EducationCorpusInput {
            child_current_age: 20,
            target_age: 18,
            current_education_cost: dec!(100_000),
            inflation_rate: dec!(8),
        })
        .unwrap();
        let out = &result.result;

        // 100k * 1.08^-2
        assert_eq!(out.years_to_save, -2);
        assert!((out.future_cost - dec!(85_733.88)).abs() < dec!(0.01), "got {}", out.future_cost);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_education_target_already_reached() {
        let result = calculate_education_corpus(&EducationCorpusInput {
            child_current_age: 18,
            target_age: 18,
            current_education_cost: dec!(500_000),
            inflation_rate: dec!(8),
        })
        .unwrap();
        assert_eq!(result.result.future_cost, dec!(500_000));
        assert_eq!(result.result.total_corpus_needed, dec!(600_000));
        assert!(result.warnings.is_empty());
    }
}
