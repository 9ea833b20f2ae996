//! Savings action plan for a dated goal.
//!
//! Required monthly savings (target spread evenly over the months left) is
//! compared with the monthly surplus to pick one of three feasibility tiers;
//! each tier carries a fixed set of next steps.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::recommendations::Goal;
use crate::format::format_compact_inr;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, TransactionSummary, UserProfile};
use crate::PlannerResult;

/// Days counted as one month when converting a date gap.
pub const DAYS_PER_MONTH: i64 = 30;
/// Surplus multiple up to which a goal is still "challenging".
pub const CHALLENGING_MULTIPLE: Decimal = dec!(1.5);
/// Extra months proposed for a very challenging goal.
pub const TIMELINE_EXTENSION_MONTHS: u32 = 12;

fn default_assumed_expense_ratio() -> Rate {
    dec!(0.7)
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feasibility {
    #[serde(rename = "achievable")]
    Achievable,
    #[serde(rename = "challenging")]
    Challenging,
    #[serde(rename = "very challenging")]
    VeryChallenging,
}

impl Feasibility {
    /// First matching tier wins; the achievable boundary is inclusive.
    pub fn classify(required: Money, available: Money) -> Self {
        if required <= available {
            Feasibility::Achievable
        } else if required <= available * CHALLENGING_MULTIPLE {
            Feasibility::Challenging
        } else {
            Feasibility::VeryChallenging
        }
    }
}

impl std::fmt::Display for Feasibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feasibility::Achievable => write!(f, "achievable"),
            Feasibility::Challenging => write!(f, "challenging"),
            Feasibility::VeryChallenging => write!(f, "very challenging"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPlanInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_name: Option<String>,
    pub target_amount: Money,
    pub target_date: NaiveDate,
    pub monthly_income: Money,
    /// Monthly expenses from transaction history; `None` when there is none.
    #[serde(default)]
    pub current_expenses: Option<Money>,
    /// Share of income assumed spent when `current_expenses` is absent (default 0.7).
    #[serde(default = "default_assumed_expense_ratio")]
    pub assumed_expense_ratio: Rate,
    /// The day the plan is made.
    pub as_of: NaiveDate,
}

impl ActionPlanInput {
    /// Assemble a plan request from a stored goal, the profile, and its history.
    pub fn from_goal(
        goal: &Goal,
        profile: &UserProfile,
        history: Option<&TransactionSummary>,
        as_of: NaiveDate,
    ) -> Self {
        ActionPlanInput {
            goal_name: goal.name.clone(),
            target_amount: goal.target_amount,
            target_date: goal.target_date,
            monthly_income: profile.monthly_income,
            current_expenses: history.filter(|h| !h.is_empty()).map(|h| h.total_expenses),
            assumed_expense_ratio: default_assumed_expense_ratio(),
            as_of,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPlanOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_name: Option<String>,
    pub target_amount: Money,
    pub target_date: NaiveDate,
    pub months_to_goal: u32,
    pub monthly_savings_required: Money,
    pub current_expenses: Money,
    /// True when expenses came from `assumed_expense_ratio`.
    pub expenses_assumed: bool,
    pub available_for_savings: Money,
    pub feasibility: Feasibility,
    pub headline: String,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_reduction_needed: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_timeline_months: Option<u32>,
    /// Rendered plan, one line per entry.
    pub summary: Vec<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whole 30-day months between two dates, never less than one.
pub fn months_between(as_of: NaiveDate, target: NaiveDate) -> u32 {
    let days = (target - as_of).num_days();
    days.div_euclid(DAYS_PER_MONTH).max(1) as u32
}

fn tier_template(
    feasibility: Feasibility,
    required: Money,
    available: Money,
    months: u32,
) -> (String, Vec<String>, Option<Money>, Option<u32>) {
    match feasibility {
        Feasibility::Achievable => (
            "Great! This goal is achievable with your current income.".into(),
            vec![
                format!(
                    "Set up automatic transfer of ₹{} monthly",
                    format_compact_inr(required)
                ),
                "Consider SIP in mutual funds for better returns".into(),
                "Track progress monthly".into(),
            ],
            None,
            None,
        ),
        Feasibility::Challenging => {
            let shortfall = required - available;
            (
                "This goal requires some effort but is doable.".into(),
                vec![
                    format!("Reduce expenses by ₹{}", format_compact_inr(shortfall)),
                    "Look for additional income sources".into(),
                    "Consider extending timeline by 6 months".into(),
                ],
                Some(shortfall),
                None,
            )
        }
        Feasibility::VeryChallenging => {
            let extended = months + TIMELINE_EXTENSION_MONTHS;
            (
                "This goal needs significant changes to achieve.".into(),
                vec![
                    format!("Consider extending timeline to {} months", extended),
                    "Explore side income opportunities".into(),
                    "Review and reduce major expenses".into(),
                    "Start with smaller, achievable milestones".into(),
                ],
                None,
                Some(extended),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Build a savings action plan for a goal due on `target_date`.
pub fn create_action_plan(
    input: &ActionPlanInput,
) -> PlannerResult<ComputationOutput<ActionPlanOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.target_date <= input.as_of {
        warnings.push(format!(
            "Target date {} is not after {}; planned over a single month",
            input.target_date, input.as_of
        ));
    }
    let months_to_goal = months_between(input.as_of, input.target_date);
    let monthly_savings_required = input.target_amount / Decimal::from(months_to_goal);

    let (current_expenses, expenses_assumed) = match input.current_expenses {
        Some(expenses) => (expenses, false),
        None => {
            log::debug!(
                "action plan: no expense history, assuming {} of income",
                input.assumed_expense_ratio
            );
            warnings.push(format!(
                "No expense history; assuming {} of income is spent",
                input.assumed_expense_ratio
            ));
            (input.monthly_income * input.assumed_expense_ratio, true)
        }
    };
    let available_for_savings = input.monthly_income - current_expenses;

    let feasibility = Feasibility::classify(monthly_savings_required, available_for_savings);
    let (headline, steps, expense_reduction_needed, extended_timeline_months) = tier_template(
        feasibility,
        monthly_savings_required,
        available_for_savings,
        months_to_goal,
    );

    let mut summary = Vec::new();
    if let Some(name) = &input.goal_name {
        summary.push(format!("Goal: {}", name));
    }
    summary.push(format!(
        "Target: ₹{} by {}",
        format_compact_inr(input.target_amount),
        input.target_date
    ));
    summary.push(format!(
        "Monthly savings needed: ₹{}",
        format_compact_inr(monthly_savings_required)
    ));
    summary.push(format!("Goal difficulty: {}", feasibility));
    summary.push(format!("Timeline: {} months", months_to_goal));

    let output = ActionPlanOutput {
        goal_name: input.goal_name.clone(),
        target_amount: input.target_amount,
        target_date: input.target_date,
        months_to_goal,
        monthly_savings_required,
        current_expenses,
        expenses_assumed,
        available_for_savings,
        feasibility,
        headline,
        steps,
        expense_reduction_needed,
        extended_timeline_months,
        summary,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Goal feasibility: even monthly savings vs. income surplus (1.5x challenging band)",
        &serde_json::json!({
            "as_of": input.as_of.to_string(),
            "days_per_month": DAYS_PER_MONTH,
            "assumed_expense_ratio": input.assumed_expense_ratio.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn plan_input(target: Money, days: i64, income: Money, expenses: Option<Money>) -> ActionPlanInput {
        ActionPlanInput {
            goal_name: Some("Laptop".into()),
            target_amount: target,
            target_date: as_of() + Duration::days(days),
            monthly_income: income,
            current_expenses: expenses,
            assumed_expense_ratio: dec!(0.7),
            as_of: as_of(),
        }
    }

    #[test]
    fn test_achievable_twelve_months() {
        let input = plan_input(dec!(120_000), 360, dec!(40_000), Some(dec!(28_000)));
        let out = create_action_plan(&input).unwrap().result;

        assert_eq!(out.months_to_goal, 12);
        assert_eq!(out.monthly_savings_required, dec!(10_000));
        assert_eq!(out.available_for_savings, dec!(12_000));
        assert_eq!(out.feasibility, Feasibility::Achievable);
        assert_eq!(out.steps[0], "Set up automatic transfer of ₹10.0K monthly");
        assert_eq!(out.summary[0], "Goal: Laptop");
    }

    #[test]
    fn test_boundary_is_achievable() {
        assert_eq!(
            Feasibility::classify(dec!(12_000), dec!(12_000)),
            Feasibility::Achievable
        );
        assert_eq!(
            Feasibility::classify(dec!(18_000), dec!(12_000)),
            Feasibility::Challenging
        );
        assert_eq!(
            Feasibility::classify(dec!(18_001), dec!(12_000)),
            Feasibility::VeryChallenging
        );
    }

    #[test]
    fn test_challenging_names_shortfall() {
        let input = plan_input(dec!(150_000), 360, dec!(40_000), Some(dec!(28_000)));
        let out = create_action_plan(&input).unwrap().result;

        assert_eq!(out.feasibility, Feasibility::Challenging);
        assert_eq!(out.expense_reduction_needed, Some(dec!(500)));
        assert_eq!(out.steps[0], "Reduce expenses by ₹500");
    }

    #[test]
    fn test_very_challenging_extends_timeline() {
        let input = plan_input(dec!(600_000), 180, dec!(40_000), Some(dec!(35_000)));
        let out = create_action_plan(&input).unwrap().result;

        assert_eq!(out.months_to_goal, 6);
        assert_eq!(out.feasibility, Feasibility::VeryChallenging);
        assert_eq!(out.extended_timeline_months, Some(18));
        assert_eq!(out.steps.len(), 4);
    }

    #[test]
    fn test_missing_expenses_assume_seventy_percent() {
        let input = plan_input(dec!(60_000), 365, dec!(50_000), None);
        let result = create_action_plan(&input).unwrap();
        let out = &result.result;

        assert!(out.expenses_assumed);
        assert_eq!(out.current_expenses, dec!(35_000));
        assert_eq!(out.available_for_savings, dec!(15_000));
        assert_eq!(out.feasibility, Feasibility::Achievable);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_past_target_date_floors_to_one_month() {
        let input = plan_input(dec!(10_000), -40, dec!(20_000), Some(dec!(5_000)));
        let result = create_action_plan(&input).unwrap();
        assert_eq!(result.result.months_to_goal, 1);
        assert_eq!(result.result.monthly_savings_required, dec!(10_000));
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_feasibility_serialises_lowercase() {
        let json = serde_json::to_string(&Feasibility::VeryChallenging).unwrap();
        assert_eq!(json, r#""very challenging""#);
    }

    #[test]
    fn test_from_goal_uses_history_expenses() {
        let goal: Goal = serde_json::from_str(
            r#"{"name":"Car","target_amount":"240000","target_date":"2027-01-01","category":"General"}"#,
        )
        .unwrap();
        let profile = UserProfile {
            age: 32,
            monthly_income: dec!(45_000),
        };
        let history = TransactionSummary {
            total_income: dec!(45_000),
            total_expenses: dec!(30_000),
            ..Default::default()
        };

        let input = ActionPlanInput::from_goal(&goal, &profile, Some(&history), as_of());
        assert_eq!(input.current_expenses, Some(dec!(30_000)));
        assert_eq!(input.goal_name.as_deref(), Some("Car"));

        let no_history = ActionPlanInput::from_goal(&goal, &profile, None, as_of());
        assert_eq!(no_history.current_expenses, None);
    }
}
