pub mod grade;
pub mod scorer;
