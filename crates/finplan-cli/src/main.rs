mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::calculator::{
    CompoundInterestArgs, EducationCorpusArgs, EmergencyFundArgs, EmiArgs, GoalInvestmentArgs,
    InsuranceNeedArgs, RetirementCorpusArgs, SipArgs,
};
use commands::credit_score::{CreditScoreArgs, CreditTipsArgs};
use commands::goals::{ActionPlanArgs, GoalRecommendationArgs};
use commands::tax::TaxSavingsArgs;

/// Personal financial planning calculations
#[derive(Parser)]
#[command(
    name = "finplan",
    version,
    about = "Personal financial planning calculations",
    long_about = "A CLI for personal financial planning with decimal precision. \
                  Supports SIP projections, compound interest, EMI, retirement, \
                  insurance and education corpus sizing, slab tax savings, a \
                  heuristic credit score, and goal action plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log guarded-arithmetic fallbacks to stderr (RUST_LOG also honoured)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a monthly SIP (annuity-due)
    Sip(SipArgs),
    /// Grow a lump sum with compound interest
    CompoundInterest(CompoundInterestArgs),
    /// Monthly SIP required to reach a target amount
    GoalInvestment(GoalInvestmentArgs),
    /// Equated monthly instalment for a loan
    Emi(EmiArgs),
    /// Corpus needed at retirement for 25 years of expenses
    RetirementCorpus(RetirementCorpusArgs),
    /// Life cover estimate with a 10x income floor
    InsuranceNeed(InsuranceNeedArgs),
    /// Corpus needed for a child's education
    EducationCorpus(EducationCorpusArgs),
    /// Emergency fund covering N months of expenses
    EmergencyFund(EmergencyFundArgs),
    /// Tax with and without 80C / health / home-loan deductions
    TaxSavings(TaxSavingsArgs),
    /// Heuristic credit score from profile and transactions
    CreditScore(CreditScoreArgs),
    /// Improvement tips for a credit score
    CreditTips(CreditTipsArgs),
    /// Savings action plan for a dated goal
    ActionPlan(ActionPlanArgs),
    /// Guidance text for a goal category
    GoalRecommendation(GoalRecommendationArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Sip(args) => commands::calculator::run_sip(args),
        Commands::CompoundInterest(args) => commands::calculator::run_compound_interest(args),
        Commands::GoalInvestment(args) => commands::calculator::run_goal_investment(args),
        Commands::Emi(args) => commands::calculator::run_emi(args),
        Commands::RetirementCorpus(args) => commands::calculator::run_retirement_corpus(args),
        Commands::InsuranceNeed(args) => commands::calculator::run_insurance_need(args),
        Commands::EducationCorpus(args) => commands::calculator::run_education_corpus(args),
        Commands::EmergencyFund(args) => commands::calculator::run_emergency_fund(args),
        Commands::TaxSavings(args) => commands::tax::run_tax_savings(args),
        Commands::CreditScore(args) => commands::credit_score::run_credit_score(args),
        Commands::CreditTips(args) => commands::credit_score::run_credit_tips(args),
        Commands::ActionPlan(args) => commands::goals::run_action_plan(args),
        Commands::GoalRecommendation(args) => commands::goals::run_goal_recommendation(args),
        Commands::Version => {
            println!("finplan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
