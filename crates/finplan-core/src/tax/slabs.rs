//! Progressive income-tax slabs.
//!
//! A single fixed schedule: each rate applies only to the slice of income
//! that falls inside its bracket.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Percent};

/// One bracket of the schedule. `upper == None` is the open-ended top slab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub upper: Option<Money>,
    pub rate_pct: Percent,
}

pub const TAX_SLABS: [TaxSlab; 6] = [
    TaxSlab { upper: Some(dec!(300000)), rate_pct: dec!(0) },
    TaxSlab { upper: Some(dec!(600000)), rate_pct: dec!(5) },
    TaxSlab { upper: Some(dec!(900000)), rate_pct: dec!(10) },
    TaxSlab { upper: Some(dec!(1200000)), rate_pct: dec!(15) },
    TaxSlab { upper: Some(dec!(1500000)), rate_pct: dec!(20) },
    TaxSlab { upper: None, rate_pct: dec!(30) },
];

/// Tax raised by a single bracket for a given income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabTax {
    pub lower: Money,
    pub upper: Option<Money>,
    pub rate_pct: Percent,
    pub taxable_amount: Money,
    pub tax: Money,
}

/// Per-bracket breakdown for every slab the income reaches.
pub fn compute_tax_breakdown(income: Money) -> Vec<SlabTax> {
    let mut rows = Vec::new();
    let mut prev_limit = Decimal::ZERO;

    for slab in TAX_SLABS.iter() {
        if income <= prev_limit {
            break;
        }
        let top = match slab.upper {
            Some(limit) => income.min(limit),
            None => income,
        };
        let taxable_amount = top - prev_limit;
        rows.push(SlabTax {
            lower: prev_limit,
            upper: slab.upper,
            rate_pct: slab.rate_pct,
            taxable_amount,
            tax: taxable_amount * slab.rate_pct / dec!(100),
        });
        match slab.upper {
            Some(limit) => prev_limit = limit,
            None => break,
        }
    }

    rows
}

/// Total tax on `income` under the fixed schedule.
pub fn compute_tax(income: Money) -> Money {
    compute_tax_breakdown(income).iter().map(|r| r.tax).sum()
}

/// Rate applied to the next unit of income above `income`.
pub fn marginal_rate(income: Money) -> Percent {
    TAX_SLABS
        .iter()
        .find(|slab| match slab.upper {
            Some(limit) => income < limit,
            None => true,
        })
        .map(|slab| slab.rate_pct)
        .unwrap_or(dec!(30))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_lakh_income() {
        // 0 + 5% of 3L + 10% of 3L + 15% of 1L
        assert_eq!(compute_tax(dec!(1_000_000)), dec!(60_000));
    }

    #[test]
    fn test_exempt_band() {
        assert_eq!(compute_tax(dec!(300_000)), Decimal::ZERO);
        assert_eq!(compute_tax(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(compute_tax(dec!(-50_000)), Decimal::ZERO);
    }

    #[test]
    fn test_top_bracket() {
        // 15k + 30k + 45k + 60k + 30% of 500k
        assert_eq!(compute_tax(dec!(2_000_000)), dec!(300_000));
    }

    #[test]
    fn test_breakdown_rows() {
        let rows = compute_tax_breakdown(dec!(700_000));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].lower, dec!(600_000));
        assert_eq!(rows[2].taxable_amount, dec!(100_000));
        assert_eq!(rows[2].tax, dec!(10_000));
    }

    #[test]
    fn test_non_decreasing_and_bounded_marginal() {
        let mut prev = Decimal::ZERO;
        let mut income = Decimal::ZERO;
        while income <= dec!(2_500_000) {
            let tax = compute_tax(income);
            assert!(tax >= prev, "tax fell at {}", income);
            let extra = compute_tax(income + Decimal::ONE) - tax;
            assert!(extra <= dec!(0.30), "marginal {} at {}", extra, income);
            prev = tax;
            income += dec!(25_000);
        }
    }

    #[test]
    fn test_marginal_rate_boundaries() {
        assert_eq!(marginal_rate(dec!(299_999)), dec!(0));
        assert_eq!(marginal_rate(dec!(300_000)), dec!(5));
        assert_eq!(marginal_rate(dec!(1_500_000)), dec!(30));
    }
}
