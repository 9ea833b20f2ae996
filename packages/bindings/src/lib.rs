use napi::Result as NapiResult;
use napi_derive::napi;
use serde::{de::DeserializeOwned, Serialize};

use finplan_core::calculator::{corpus, household, investment, loans};
use finplan_core::credit_score::{grade, scorer};
use finplan_core::goals::{planner, recommendations};
use finplan_core::tax::savings;
use finplan_core::{parse_input, PlannerResult, Transaction, TransactionSummary};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse `input_json`, run `op`, and serialise its envelope.
fn call<I, O>(input_json: &str, op: impl FnOnce(&I) -> PlannerResult<O>) -> NapiResult<String>
where
    I: DeserializeOwned,
    O: Serialize,
{
    let input: I = parse_input(input_json).map_err(to_napi_error)?;
    let output = op(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_sip(input_json: String) -> NapiResult<String> {
    call(&input_json, investment::calculate_sip)
}

#[napi]
pub fn calculate_compound_interest(input_json: String) -> NapiResult<String> {
    call(&input_json, investment::calculate_compound_interest)
}

#[napi]
pub fn calculate_goal_based_investment(input_json: String) -> NapiResult<String> {
    call(&input_json, investment::calculate_goal_based_investment)
}

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    call(&input_json, loans::calculate_emi)
}

#[napi]
pub fn calculate_retirement_corpus(input_json: String) -> NapiResult<String> {
    call(&input_json, corpus::calculate_retirement_corpus)
}

#[napi]
pub fn calculate_insurance_need(input_json: String) -> NapiResult<String> {
    call(&input_json, corpus::calculate_insurance_need)
}

#[napi]
pub fn calculate_education_corpus(input_json: String) -> NapiResult<String> {
    call(&input_json, corpus::calculate_education_corpus)
}

#[napi]
pub fn calculate_emergency_fund(input_json: String) -> NapiResult<String> {
    call(&input_json, household::calculate_emergency_fund)
}

// ---------------------------------------------------------------------------
// Tax
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_tax_savings(input_json: String) -> NapiResult<String> {
    call(&input_json, savings::calculate_tax_savings)
}

// ---------------------------------------------------------------------------
// Credit score
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_credit_score(input_json: String) -> NapiResult<String> {
    call(&input_json, scorer::calculate_credit_score)
}

#[napi]
pub fn get_improvement_tips(score: i32) -> NapiResult<String> {
    serde_json::to_string(&grade::get_improvement_tips(score)).map_err(to_napi_error)
}

/// Fold a JSON array of transactions into the summary the scorer accepts.
#[napi]
pub fn summarize_transactions(transactions_json: String) -> NapiResult<String> {
    let transactions: Vec<Transaction> = parse_input(&transactions_json).map_err(to_napi_error)?;
    serde_json::to_string(&TransactionSummary::from_transactions(&transactions))
        .map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

#[napi]
pub fn create_action_plan(input_json: String) -> NapiResult<String> {
    call(&input_json, planner::create_action_plan)
}

#[napi]
pub fn get_goal_recommendations(input_json: String) -> NapiResult<String> {
    let input: recommendations::GoalRecommendationInput =
        parse_input(&input_json).map_err(to_napi_error)?;
    let output = recommendations::GoalRecommendationOutput {
        category: input.category,
        recommendation: recommendations::get_goal_recommendations(
            input.category,
            input.target_amount,
        ),
    };
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn format_compact_inr(amount: String) -> NapiResult<String> {
    let value: rust_decimal::Decimal = amount.trim().parse().map_err(to_napi_error)?;
    Ok(finplan_core::format::format_compact_inr(value))
}
