use rusqlite::{Connection, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle to the operation ledger.
///
/// Holds only the database path: every logical write opens its own
/// short-lived connection, so worker threads can append concurrently and
/// SQLite serializes the writes itself (WAL mode plus a busy timeout).
/// No connection is held across a cleanup run.
#[derive(Debug, Clone)]
pub struct Ledger {
    db_path: PathBuf,
}

impl Ledger {
    /// Open the ledger at `path`, creating the schema if it is absent.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let ledger = Ledger {
            db_path: path.as_ref().to_path_buf(),
        };
        let conn = ledger.connect()?;
        conn.execute_batch(include_str!("schema.sql"))?;
        debug!("Ledger schema initialized at {}", ledger.db_path.display());
        Ok(ledger)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    pub(crate) fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(conn)
    }
}
