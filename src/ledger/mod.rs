pub mod budget;
pub mod filter;
pub mod transaction;

pub use budget::BudgetGoals;
pub use filter::{by_month, by_year, months_back};
pub use transaction::{Transaction, TransactionKind};
