//! Budget domain model: the aggregate root, category tree, accounts,
//! transactions, and the month-indexed carry-forward series.

pub mod account;
pub mod budget;
pub mod category;
pub mod series;
pub mod summary;
pub mod transaction;
pub mod upgrade;

pub use account::Account;
pub use budget::{AssignedLookup, Budget, BudgetDocument, SCHEMA_VERSION};
pub use category::{Category, CategoryGroup, Target};
pub use series::Series;
pub use transaction::{Direction, Flow, TransactOptions, Transaction};
pub use upgrade::LegacyDocument;
