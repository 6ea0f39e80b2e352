pub mod applications;
pub mod careers;
pub mod contact;
pub mod records;
