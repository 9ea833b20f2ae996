use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finplan_core::calculator::corpus::{
    self, EducationCorpusInput, InsuranceNeedInput, RetirementCorpusInput,
};
use finplan_core::calculator::household::{self, EmergencyFundInput};
use finplan_core::calculator::investment::{
    self, CompoundInterestInput, GoalInvestmentInput, SipInput,
};
use finplan_core::calculator::loans::{self, EmiInput};

use crate::input;

/// Arguments for a SIP projection
#[derive(Args)]
pub struct SipArgs {
    /// Monthly contribution
    #[arg(long)]
    pub monthly_amount: Option<Decimal>,

    /// Expected annual return in percent (e.g. 12 for 12%)
    #[arg(long)]
    pub annual_return: Option<Decimal>,

    /// Investment horizon in years
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<i32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for compound interest
#[derive(Args)]
pub struct CompoundInterestArgs {
    /// Lump sum invested today
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual rate in percent
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Years invested
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<i32>,

    /// Compounding events per year
    #[arg(long, default_value = "1")]
    pub frequency: i32,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the SIP required to reach a goal
#[derive(Args)]
pub struct GoalInvestmentArgs {
    /// Amount needed at the end of the horizon
    #[arg(long)]
    pub target_amount: Option<Decimal>,

    /// Years until the goal
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<i32>,

    /// Expected annual return in percent
    #[arg(long)]
    pub expected_return: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for an EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Loan amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Loan tenure in years
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<i32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for retirement corpus sizing
#[derive(Args)]
pub struct RetirementCorpusArgs {
    #[arg(long)]
    pub current_age: Option<u32>,

    #[arg(long)]
    pub retirement_age: Option<u32>,

    /// Current monthly household expenses
    #[arg(long)]
    pub monthly_expenses: Option<Decimal>,

    /// Annual inflation in percent
    #[arg(long, default_value = "6")]
    pub inflation_rate: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for life insurance need
#[derive(Args)]
pub struct InsuranceNeedArgs {
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub annual_income: Option<Decimal>,

    /// Number of financial dependents
    #[arg(long, default_value = "0")]
    pub dependents: u32,

    /// Savings already available to dependents
    #[arg(long)]
    pub existing_savings: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for education corpus sizing
#[derive(Args)]
pub struct EducationCorpusArgs {
    /// Child's age today
    #[arg(long)]
    pub child_age: Option<u32>,

    /// Age at which the money is needed
    #[arg(long)]
    pub target_age: Option<u32>,

    /// Cost of the education at today's prices
    #[arg(long)]
    pub current_cost: Option<Decimal>,

    /// Education inflation in percent
    #[arg(long, default_value = "8")]
    pub inflation_rate: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for an emergency fund
#[derive(Args)]
pub struct EmergencyFundArgs {
    #[arg(long)]
    pub monthly_expenses: Option<Decimal>,

    /// Months of expenses to keep liquid
    #[arg(long, default_value = "6", allow_hyphen_values = true)]
    pub months: i32,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = input::resolve(args.input.as_deref(), || {
        Ok(SipInput {
            monthly_amount: args
                .monthly_amount
                .ok_or("--monthly-amount is required (or provide --input)")?,
            annual_return: args
                .annual_return
                .ok_or("--annual-return is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        })
    })?;
    let result = investment::calculate_sip(&sip_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_compound_interest(
    args: CompoundInterestArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let ci_input: CompoundInterestInput = input::resolve(args.input.as_deref(), || {
        Ok(CompoundInterestInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            compounding_frequency: args.frequency,
        })
    })?;
    let result = investment::calculate_compound_interest(&ci_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_goal_investment(args: GoalInvestmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let goal_input: GoalInvestmentInput = input::resolve(args.input.as_deref(), || {
        Ok(GoalInvestmentInput {
            target_amount: args
                .target_amount
                .ok_or("--target-amount is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            expected_return: args
                .expected_return
                .ok_or("--expected-return is required (or provide --input)")?,
        })
    })?;
    let result = investment::calculate_goal_based_investment(&goal_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input: EmiInput = input::resolve(args.input.as_deref(), || {
        Ok(EmiInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        })
    })?;
    let result = loans::calculate_emi(&emi_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_retirement_corpus(
    args: RetirementCorpusArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let rc_input: RetirementCorpusInput = input::resolve(args.input.as_deref(), || {
        Ok(RetirementCorpusInput {
            current_age: args
                .current_age
                .ok_or("--current-age is required (or provide --input)")?,
            retirement_age: args
                .retirement_age
                .ok_or("--retirement-age is required (or provide --input)")?,
            current_monthly_expenses: args
                .monthly_expenses
                .ok_or("--monthly-expenses is required (or provide --input)")?,
            inflation_rate: args.inflation_rate,
        })
    })?;
    let result = corpus::calculate_retirement_corpus(&rc_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_insurance_need(args: InsuranceNeedArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ins_input: InsuranceNeedInput = input::resolve(args.input.as_deref(), || {
        Ok(InsuranceNeedInput {
            age: args.age.ok_or("--age is required (or provide --input)")?,
            annual_income: args
                .annual_income
                .ok_or("--annual-income is required (or provide --input)")?,
            dependents: args.dependents,
            existing_savings: args.existing_savings.unwrap_or(Decimal::ZERO),
        })
    })?;
    let result = corpus::calculate_insurance_need(&ins_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_education_corpus(
    args: EducationCorpusArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let edu_input: EducationCorpusInput = input::resolve(args.input.as_deref(), || {
        Ok(EducationCorpusInput {
            child_current_age: args
                .child_age
                .ok_or("--child-age is required (or provide --input)")?,
            target_age: args
                .target_age
                .ok_or("--target-age is required (or provide --input)")?,
            current_education_cost: args
                .current_cost
                .ok_or("--current-cost is required (or provide --input)")?,
            inflation_rate: args.inflation_rate,
        })
    })?;
    let result = corpus::calculate_education_corpus(&edu_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_emergency_fund(args: EmergencyFundArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ef_input: EmergencyFundInput = input::resolve(args.input.as_deref(), || {
        Ok(EmergencyFundInput {
            monthly_expenses: args
                .monthly_expenses
                .ok_or("--monthly-expenses is required (or provide --input)")?,
            months: args.months,
        })
    })?;
    let result = household::calculate_emergency_fund(&ef_input)?;
    Ok(serde_json::to_value(result)?)
}
