use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finplan_core::tax::savings::{self, TaxSavingsInput};

use crate::input;

/// Arguments for tax savings under the slab regime
#[derive(Args)]
pub struct TaxSavingsArgs {
    /// Gross annual income
    #[arg(long)]
    pub annual_income: Option<Decimal>,

    /// Section 80C investments (capped at 1,50,000)
    #[arg(long)]
    pub investments_80c: Option<Decimal>,

    /// Health insurance premium (capped at 25,000)
    #[arg(long)]
    pub health_insurance: Option<Decimal>,

    /// Home loan interest paid in the year
    #[arg(long)]
    pub home_loan_interest: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_tax_savings(args: TaxSavingsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tax_input: TaxSavingsInput = input::resolve(args.input.as_deref(), || {
        Ok(TaxSavingsInput {
            annual_income: args
                .annual_income
                .ok_or("--annual-income is required (or provide --input)")?,
            investments_80c: args.investments_80c.unwrap_or(Decimal::ZERO),
            health_insurance: args.health_insurance.unwrap_or(Decimal::ZERO),
            home_loan_interest: args.home_loan_interest.unwrap_or(Decimal::ZERO),
        })
    })?;
    let result = savings::calculate_tax_savings(&tax_input)?;
    Ok(serde_json::to_value(result)?)
}
