use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::slabs::{compute_tax, compute_tax_breakdown, marginal_rate, SlabTax};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::PlannerResult;

/// Cap on investments eligible under section 80C.
pub const SECTION_80C_CAP: Money = dec!(150000);
/// Cap on health insurance premiums eligible under section 80D.
pub const HEALTH_INSURANCE_CAP: Money = dec!(25000);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSavingsInput {
    pub annual_income: Money,
    #[serde(default)]
    pub investments_80c: Money,
    #[serde(default)]
    pub health_insurance: Money,
    /// Deducted in full, without a cap.
    #[serde(default)]
    pub home_loan_interest: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSavingsOutput {
    pub annual_income: Money,
    pub total_deductions: Money,
    pub taxable_income: Money,
    pub tax_without_deductions: Money,
    pub tax_with_deductions: Money,
    pub tax_saved: Money,
    /// Tax after deductions as a percentage of gross income.
    pub effective_tax_rate: Percent,
    pub marginal_rate: Percent,
    pub slab_breakdown: Vec<SlabTax>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Compare tax on gross income against tax after capped deductions.
pub fn calculate_tax_savings(
    input: &TaxSavingsInput,
) -> PlannerResult<ComputationOutput<TaxSavingsOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.investments_80c > SECTION_80C_CAP {
        warnings.push(format!(
            "80C investments capped at {} (entered {})",
            SECTION_80C_CAP, input.investments_80c
        ));
    }
    if input.health_insurance > HEALTH_INSURANCE_CAP {
        warnings.push(format!(
            "Health insurance deduction capped at {} (entered {})",
            HEALTH_INSURANCE_CAP, input.health_insurance
        ));
    }

    let total_deductions = input.investments_80c.min(SECTION_80C_CAP)
        + input.health_insurance.min(HEALTH_INSURANCE_CAP);
    let taxable_income =
        (input.annual_income - total_deductions - input.home_loan_interest).max(Decimal::ZERO);

    let tax_without_deductions = compute_tax(input.annual_income);
    let tax_with_deductions = compute_tax(taxable_income);
    let tax_saved = tax_without_deductions - tax_with_deductions;

    let effective_tax_rate = if input.annual_income > Decimal::ZERO {
        tax_with_deductions / input.annual_income * dec!(100)
    } else {
        log::debug!("effective tax rate fallback: non-positive income");
        warnings.push("Annual income is zero; effective rate reported as 0".into());
        Decimal::ZERO
    };

    log::trace!(
        "tax: gross={} taxable={} without={} with={}",
        input.annual_income,
        taxable_income,
        tax_without_deductions,
        tax_with_deductions
    );

    let output = TaxSavingsOutput {
        annual_income: input.annual_income,
        total_deductions,
        taxable_income,
        tax_without_deductions,
        tax_with_deductions,
        tax_saved,
        effective_tax_rate,
        marginal_rate: marginal_rate(taxable_income),
        slab_breakdown: compute_tax_breakdown(taxable_income),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Progressive slab tax with capped 80C / health deductions",
        &serde_json::json!({
            "section_80c_cap": SECTION_80C_CAP.to_string(),
            "health_insurance_cap": HEALTH_INSURANCE_CAP.to_string(),
            "home_loan_interest": "deducted in full",
        }),
        warnings,
        elapsed,
        output,
    ))
}
