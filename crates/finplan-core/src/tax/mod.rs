pub mod savings;
pub mod slabs;
