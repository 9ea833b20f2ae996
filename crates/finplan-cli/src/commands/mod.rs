pub mod calculator;
pub mod credit_score;
pub mod goals;
pub mod tax;
