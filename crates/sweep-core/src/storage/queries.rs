use super::models::{Action, OperationRecord, Outcome};
use super::sqlite::Ledger;
use rusqlite::{params, Result};
use tracing::debug;

impl Ledger {
    /// Append one operation attempt. The row id and timestamp are assigned
    /// by SQLite; rows are never updated or deleted afterwards.
    pub fn append(&self, file_path: &str, action: Action, outcome: Outcome) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO operations (file_path, operation, status) VALUES (?1, ?2, ?3)",
            params![file_path, action.as_str(), outcome.as_str()],
        )?;
        let id = conn.last_insert_rowid();
        debug!(
            "Ledger row {}: {} {} {}",
            id,
            action.as_str(),
            outcome.as_str(),
            file_path
        );
        Ok(id)
    }

    /// All recorded operations, oldest first.
    pub fn list_all(&self) -> Result<Vec<OperationRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, file_path, operation, status, timestamp \
             FROM operations ORDER BY id ASC",
        )?;
        let records = stmt
            .query_map([], |row| {
                Ok(OperationRecord {
                    id: row.get(0)?,
                    file_path: row.get(1)?,
                    operation: row.get(2)?,
                    status: row.get(3)?,
                    timestamp: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;
        Ok(records)
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self.connect()?;
        conn.query_row("SELECT COUNT(*) FROM operations", [], |row| row.get(0))
    }
}
