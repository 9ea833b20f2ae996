pub mod planner;
pub mod recommendations;
