pub mod config;
pub mod engine;
pub mod entry;
pub mod error;
pub mod executor;
pub mod pathnorm;
pub mod storage;

pub use config::AppConfig;
pub use engine::{CleanupEngine, CleanupMode, CleanupOutcome, CleanupRequest};
pub use error::Error;
pub use executor::{ParallelExecutor, SerialExecutor, TaskExecutor};
pub use storage::Ledger;
