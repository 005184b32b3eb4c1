pub mod field;
pub mod fixed_deposit;

pub use field::{FdField, FieldValue};
pub use fixed_deposit::FixedDeposit;
