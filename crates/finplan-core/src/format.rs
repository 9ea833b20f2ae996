//! Rupee amounts for recommendation text: compact (1.5L, 2.3Cr, 12.0K) or
//! fully grouped (150,000).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const CRORE: Decimal = dec!(10000000);
const LAKH: Decimal = dec!(100000);
const THOUSAND: Decimal = dec!(1000);

/// Abbreviate an amount to one decimal in crore/lakh/thousand units,
/// or group an amount below one thousand as a whole number.
pub fn format_compact_inr(amount: Decimal) -> String {
    if amount >= CRORE {
        format!("{}Cr", one_decimal(amount / CRORE))
    } else if amount >= LAKH {
        format!("{}L", one_decimal(amount / LAKH))
    } else if amount >= THOUSAND {
        format!("{}K", one_decimal(amount / THOUSAND))
    } else {
        group_thousands(amount.round_dp(0))
    }
}

/// Whole-rupee amount with comma grouping every three digits (150,000).
pub fn format_grouped_inr(amount: Decimal) -> String {
    group_thousands(amount.round_dp(0))
}

fn one_decimal(value: Decimal) -> String {
    let mut rounded = value.round_dp(1);
    rounded.rescale(1);
    rounded.to_string()
}

fn group_thousands(value: Decimal) -> String {
    let digits = value.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value.is_sign_negative() && !value.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
