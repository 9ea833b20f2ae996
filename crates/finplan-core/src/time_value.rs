//! Time-value-of-money primitives shared by every calculator.
//!
//! The zero-rate and zero-period guards live here and nowhere else: callers
//! floor their period counts with [`floor_period`] and pass periodic rates
//! straight through; a zero rate is routed to the linear formula.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::PlannerError;
use crate::types::{Money, Percent, Rate};
use crate::PlannerResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const HUNDRED: Decimal = dec!(100);

/// Monthly periodic rate for an annual percentage: `annual / (12 * 100)`.
pub fn monthly_rate(annual_pct: Percent) -> Rate {
    annual_pct / (MONTHS_PER_YEAR * HUNDRED)
}

/// Convert a percentage into a plain rate (8 -> 0.08).
pub fn pct_to_rate(pct: Percent) -> Rate {
    pct / HUNDRED
}

/// Clamp a period count to at least one unit.
pub fn floor_period(periods: i32) -> u32 {
    periods.max(1) as u32
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
///
/// Fails with [`PlannerError::Overflow`] once the factor leaves the range of
/// a 96-bit decimal.
pub fn compound(rate: Rate, n: u32) -> PlannerResult<Decimal> {
    let factor = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result = result
            .checked_mul(factor)
            .ok_or_else(|| overflow(format!("(1 + {})^{}", rate, n)))?;
    }
    Ok(result)
}

/// (1 + r)^n for a signed exponent; negative exponents divide instead.
pub fn compound_signed(rate: Rate, n: i64) -> PlannerResult<Decimal> {
    let magnitude = u32::try_from(n.unsigned_abs())
        .map_err(|_| overflow(format!("(1 + {})^{}", rate, n)))?;
    let growth = compound(rate, magnitude)?;
    if n >= 0 {
        return Ok(growth);
    }
    Decimal::ONE
        .checked_div(growth)
        .ok_or_else(|| overflow(format!("(1 + {})^{}", rate, n)))
}

/// Multiply two periods, e.g. years by months per year.
pub fn period_product(a: u32, b: u32, what: &str) -> PlannerResult<u32> {
    a.checked_mul(b)
        .ok_or_else(|| overflow(format!("{}: {} x {} periods", what, a, b)))
}

/// `amount * factor`, failing instead of panicking when the product overflows.
pub fn scale(amount: Money, factor: Decimal, what: &str) -> PlannerResult<Money> {
    amount
        .checked_mul(factor)
        .ok_or_else(|| overflow(format!("{}: {} x {}", what, amount, factor)))
}

fn overflow(context: String) -> PlannerError {
    log::debug!("overflow in {}", context);
    PlannerError::Overflow(context)
}

/// Future value of a contribution paid at the start of each period (annuity-due).
pub fn future_value_of_recurring_contribution(
    contribution: Money,
    periodic_rate: Rate,
    periods: u32,
) -> PlannerResult<Money> {
    if periodic_rate.is_zero() {
        return contribution
            .checked_mul(Decimal::from(periods))
            .ok_or_else(|| overflow(format!("{} x {} contributions", contribution, periods)));
    }
    let growth = compound(periodic_rate, periods)?;
    ((growth - Decimal::ONE) / periodic_rate)
        .checked_mul(Decimal::ONE + periodic_rate)
        .and_then(|factor| contribution.checked_mul(factor))
        .ok_or_else(|| overflow(format!("annuity-due value over {} periods", periods)))
}

/// Contribution per period that grows to `target` under
/// [`future_value_of_recurring_contribution`].
pub fn required_recurring_contribution(
    target: Money,
    periodic_rate: Rate,
    periods: u32,
) -> PlannerResult<Money> {
    let n = Decimal::from(periods.max(1));
    if periodic_rate.is_zero() {
        return Ok(target / n);
    }
    let growth = compound(periodic_rate, periods)?;
    let denominator = (growth - Decimal::ONE)
        .checked_mul(Decimal::ONE + periodic_rate)
        .ok_or_else(|| overflow(format!("annuity-due factor over {} periods", periods)))?;
    match (target * periodic_rate).checked_div(denominator) {
        Some(c) => Ok(c),
        None => Ok(target / n),
    }
}

/// Level payment that fully amortizes `principal` over `periods`.
pub fn amortized_payment(
    principal: Money,
    periodic_rate: Rate,
    periods: u32,
) -> PlannerResult<Money> {
    let n = Decimal::from(periods.max(1));
    if periodic_rate.is_zero() {
        return Ok(principal / n);
    }
    let growth = compound(periodic_rate, periods)?;
    let numerator = (principal * periodic_rate)
        .checked_mul(growth)
        .ok_or_else(|| overflow(format!("amortized payment over {} periods", periods)))?;
    match numerator.checked_div(growth - Decimal::ONE) {
        Some(p) => Ok(p),
        None => Ok(principal / n),
    }
}

/// Net Present Value of a series of cash flows; the first flow is undiscounted.
pub fn npv(rate: Rate, cash_flows: &[Money]) -> PlannerResult<Money> {
    if rate <= dec!(-1) {
        return Err(PlannerError::InvalidInput {
            field: "rate".into(),
            reason: "Discount rate must be greater than -100%".into(),
        });
    }

    let mut result = Decimal::ZERO;
    let one_plus_r = Decimal::ONE + rate;
    let mut discount = Decimal::ONE;

    for (t, cf) in cash_flows.iter().enumerate() {
        if t > 0 {
            discount = discount
                .checked_mul(one_plus_r)
                .ok_or_else(|| overflow(format!("discount factor at period {}", t)))?;
        }
        result = (cf / discount)
            .checked_add(result)
            .ok_or_else(|| overflow(format!("present value sum at period {}", t)))?;
    }

    Ok(result)
}
