pub mod error;
pub mod format;
pub mod time_value;
pub mod types;

#[cfg(feature = "calculator")]
pub mod calculator;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "credit_score")]
pub mod credit_score;

#[cfg(feature = "goals")]
pub mod goals;

pub use error::PlannerError;
pub use types::*;

/// Standard result type for all finplan operations
pub type PlannerResult<T> = Result<T, PlannerError>;
