use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finplan_core::goals::planner::{self, ActionPlanInput};
use finplan_core::goals::recommendations::{
    get_goal_recommendations, GoalCategory, GoalRecommendationInput, GoalRecommendationOutput,
};

use crate::input;

/// Arguments for a goal action plan
#[derive(Args)]
pub struct ActionPlanArgs {
    /// Goal name shown in the plan
    #[arg(long)]
    pub goal_name: Option<String>,

    #[arg(long)]
    pub target_amount: Option<Decimal>,

    /// Due date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub target_date: Option<NaiveDate>,

    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Observed monthly expenses; omitted means a share of income is assumed
    #[arg(long)]
    pub current_expenses: Option<Decimal>,

    /// Share of income assumed spent when expenses are unknown
    #[arg(long, default_value = "0.7")]
    pub assumed_expense_ratio: Decimal,

    /// Plan date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date_arg)]
    pub as_of: Option<NaiveDate>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for category guidance
#[derive(Args)]
pub struct GoalRecommendationArgs {
    /// Exact goal category label, e.g. "House Purchase" (anything else falls back to General)
    #[arg(long)]
    pub category: Option<String>,

    /// Target amount quoted in the guidance text
    #[arg(long)]
    pub target_amount: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

fn parse_date_arg(text: &str) -> Result<NaiveDate, String> {
    finplan_core::parse_date(text).map_err(|e| e.to_string())
}

pub fn run_action_plan(args: ActionPlanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let plan_input: ActionPlanInput = input::resolve(args.input.as_deref(), || {
        Ok(ActionPlanInput {
            goal_name: args.goal_name.clone(),
            target_amount: args
                .target_amount
                .ok_or("--target-amount is required (or provide --input)")?,
            target_date: args
                .target_date
                .ok_or("--target-date is required (or provide --input)")?,
            monthly_income: args
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
            current_expenses: args.current_expenses,
            assumed_expense_ratio: args.assumed_expense_ratio,
            as_of: args
                .as_of
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
        })
    })?;
    let result = planner::create_action_plan(&plan_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_goal_recommendation(
    args: GoalRecommendationArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let rec_input: GoalRecommendationInput = input::resolve(args.input.as_deref(), || {
        Ok(GoalRecommendationInput {
            category: GoalCategory::from_label(
                args.category
                    .as_deref()
                    .ok_or("--category is required (or provide --input)")?,
            ),
            target_amount: args.target_amount.unwrap_or(Decimal::ZERO),
        })
    })?;
    let output = GoalRecommendationOutput {
        category: rec_input.category,
        recommendation: get_goal_recommendations(rec_input.category, rec_input.target_amount),
    };
    Ok(serde_json::to_value(output)?)
}
