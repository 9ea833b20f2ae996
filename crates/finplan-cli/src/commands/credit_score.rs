use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use finplan_core::credit_score::grade::{get_improvement_tips, CreditGrade};
use finplan_core::credit_score::scorer::{self, CreditScoreInput};
use finplan_core::{Transaction, TransactionSummary};

use crate::input;

/// Arguments for the heuristic credit score
#[derive(Args)]
pub struct CreditScoreArgs {
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Path to a JSON file of transactions ({"type", "amount", "category", "date"} each)
    #[arg(long)]
    pub transactions: Option<String>,

    /// Spending ratio reported when there is no transaction history
    #[arg(long, default_value = "0.7")]
    pub assumed_spending_ratio: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for credit improvement tips
#[derive(Args)]
pub struct CreditTipsArgs {
    /// Score to look up (300-850)
    #[arg(long, allow_hyphen_values = true)]
    pub score: i32,
}

pub fn run_credit_score(args: CreditScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let score_input: CreditScoreInput = input::resolve(args.input.as_deref(), || {
        let transactions = match args.transactions.as_deref() {
            Some(path) => {
                let raw: Vec<Transaction> = input::file::read_json(path)?;
                log::debug!("folded {} transactions from {}", raw.len(), path);
                Some(TransactionSummary::from_transactions(&raw))
            }
            None => None,
        };
        Ok(CreditScoreInput {
            age: args.age.ok_or("--age is required (or provide --input)")?,
            monthly_income: args
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
            transactions,
            assumed_spending_ratio: args.assumed_spending_ratio,
        })
    })?;
    if score_input.assumed_spending_ratio < Decimal::ZERO
        || score_input.assumed_spending_ratio > dec!(1)
    {
        return Err("--assumed-spending-ratio must be between 0 and 1".into());
    }
    let result = scorer::calculate_credit_score(&score_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_credit_tips(args: CreditTipsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let grade = CreditGrade::from_score(args.score);
    Ok(json!({
        "score": args.score,
        "grade": grade,
        "range": grade.range(),
        "tips": get_improvement_tips(args.score),
    }))
}
