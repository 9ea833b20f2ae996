pub mod corpus;
pub mod household;
pub mod investment;
pub mod loans;

pub use crate::tax::savings::{calculate_tax_savings, TaxSavingsInput, TaxSavingsOutput};

use crate::time_value::floor_period;

/// Floor a period to one unit, recording a warning when the floor applies.
pub(crate) fn floored_period(value: i32, field: &str, warnings: &mut Vec<String>) -> u32 {
    if value < 1 {
        log::debug!("{} = {} floored to 1", field, value);
        warnings.push(format!("{} must be at least 1; {} treated as 1", field, value));
    }
    floor_period(value)
}
