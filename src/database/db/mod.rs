pub mod connection;
pub mod queries;

pub use connection::FdStore;
