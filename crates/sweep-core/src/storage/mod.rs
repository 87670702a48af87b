pub mod models;
mod queries;
mod sqlite;

pub use models::{Action, OperationRecord, Outcome};
pub use sqlite::Ledger;
