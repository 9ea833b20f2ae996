use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::PlannerResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages as entered by users (12 = 12% p.a.). Annual unless a field says otherwise.
pub type Percent = Decimal;

/// Plain ratios and periodic rates (0.7 = 70%, 0.01 = 1% per month).
pub type Rate = Decimal;

/// Whether a ledger entry adds to or draws from the household budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single ledger entry as handed over by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Aggregated totals over a list of transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Summed expense amount per category name.
    #[serde(default)]
    pub expenses_by_category: BTreeMap<String, Money>,
}

impl TransactionSummary {
    /// Fold a transaction list into income/expense totals and a category breakdown.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = TransactionSummary::default();
        for tx in transactions {
            match tx.kind {
                TransactionKind::Income => summary.total_income += tx.amount,
                TransactionKind::Expense => {
                    summary.total_expenses += tx.amount;
                    *summary
                        .expenses_by_category
                        .entry(tx.category.clone())
                        .or_insert(Decimal::ZERO) += tx.amount;
                }
            }
        }
        summary
    }

    /// True when no income or expense has been recorded.
    pub fn is_empty(&self) -> bool {
        self.total_income.is_zero()
            && self.total_expenses.is_zero()
            && self.expenses_by_category.is_empty()
    }
}

/// The subset of a user's profile the engine reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub monthly_income: Money,
}

// ---------------------------------------------------------------------------
// Boundary parsing
// ---------------------------------------------------------------------------

/// Deserialize an operation input from JSON text.
pub fn parse_input<T: DeserializeOwned>(json: &str) -> PlannerResult<T> {
    Ok(serde_json::from_str(json)?)
}

/// Deserialize an operation input from an already-parsed JSON value.
pub fn parse_input_value<T: DeserializeOwned>(value: serde_json::Value) -> PlannerResult<T> {
    Ok(serde_json::from_value(value)?)
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> PlannerResult<NaiveDate> {
    Ok(NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")?)
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tx(kind: TransactionKind, amount: Decimal, category: &str) -> Transaction {
        Transaction {
            kind,
            amount,
            category: category.into(),
            date: None,
        }
    }

    #[test]
    fn test_summary_totals_and_categories() {
        let txs = vec![
            tx(TransactionKind::Income, dec!(40_000), "Salary"),
            tx(TransactionKind::Expense, dec!(8_000), "Food"),
            tx(TransactionKind::Expense, dec!(2_000), "Food"),
            tx(TransactionKind::Expense, dec!(5_000), "Utilities"),
        ];
        let summary = TransactionSummary::from_transactions(&txs);

        assert_eq!(summary.total_income, dec!(40_000));
        assert_eq!(summary.total_expenses, dec!(15_000));
        assert_eq!(summary.expenses_by_category.len(), 2);
        assert_eq!(summary.expenses_by_category["Food"], dec!(10_000));
        assert!(!summary.expenses_by_category.contains_key("Salary"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = TransactionSummary::from_transactions(&[]);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_transaction_type_field_name() {
        let json = r#"{"type":"expense","amount":"250","category":"Food","date":"2026-01-05"}"#;
        let parsed: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, TransactionKind::Expense);
        assert_eq!(parsed.amount, dec!(250));
    }

    #[test]
    fn test_parse_errors_map_to_kinds() {
        use crate::PlannerError;

        match parse_input::<Transaction>(r#"{"type":"gift","amount":"1"}"#) {
            Err(PlannerError::SerializationError(_)) => {}
            other => panic!("expected SerializationError, got {:?}", other),
        }
        match parse_date("2026-13-40") {
            Err(PlannerError::DateError(_)) => {}
            other => panic!("expected DateError, got {:?}", other),
        }
        assert_eq!(
            parse_date(" 2027-04-16 ").unwrap(),
            NaiveDate::from_ymd_opt(2027, 4, 16).unwrap()
        );
        let summary: TransactionSummary =
            parse_input_value(serde_json::json!({"total_income": "10", "total_expenses": "4"}))
                .unwrap();
        assert_eq!(summary.total_expenses, dec!(4));
    }
}
