//! Infrastructure layer - database connection and transaction management.

mod db;
pub mod unit_of_work;

pub use db::Database;
pub use unit_of_work::{TransactionContext, TxFuture, TxUserRepository, UnitOfWork};
