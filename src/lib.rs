pub mod database;
pub mod error;

pub use database::db::FdStore;
pub use database::models::{FdField, FieldValue, FixedDeposit};
pub use error::StoreError;
