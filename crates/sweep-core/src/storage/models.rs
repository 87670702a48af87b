/// The filesystem action a ledger row records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Delete,
    Move,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Delete => "delete",
            Action::Move => "move",
        }
    }
}

/// Whether the recorded attempt succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Fail,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Fail => "fail",
        }
    }
}

/// One attempted delete/move operation. Rows are immutable once written;
/// `timestamp` is assigned by SQLite at insert time.
#[derive(Debug, Clone)]
pub struct OperationRecord {
    pub id: i64,
    pub file_path: String,
    pub operation: String,
    pub status: String,
    pub timestamp: String,
}
