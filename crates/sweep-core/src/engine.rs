use crate::entry::process_entry;
use crate::error::Error;
use crate::executor::{EntryJob, TaskExecutor};
use crate::pathnorm;
use crate::storage::Ledger;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How a cleanup run treats each child of the target folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupMode {
    Normal,
    DryRun,
    Backup,
}

/// One cleanup invocation. `backup_path` is present exactly when the mode
/// is `Backup`; the constructors are the only way to build a request, so
/// the invariant holds by construction.
#[derive(Debug, Clone)]
pub struct CleanupRequest {
    folder_path: String,
    mode: CleanupMode,
    backup_path: Option<String>,
}

impl CleanupRequest {
    pub fn normal(folder_path: impl Into<String>) -> Self {
        CleanupRequest {
            folder_path: folder_path.into(),
            mode: CleanupMode::Normal,
            backup_path: None,
        }
    }

    pub fn dry_run(folder_path: impl Into<String>) -> Self {
        CleanupRequest {
            folder_path: folder_path.into(),
            mode: CleanupMode::DryRun,
            backup_path: None,
        }
    }

    pub fn backup(folder_path: impl Into<String>, backup_path: impl Into<String>) -> Self {
        CleanupRequest {
            folder_path: folder_path.into(),
            mode: CleanupMode::Backup,
            backup_path: Some(backup_path.into()),
        }
    }

    pub fn mode(&self) -> CleanupMode {
        self.mode
    }
}

/// Terminal result of a run. Per-entry failures do not surface here; they
/// are recorded in the ledger and the diagnostic log only.
#[derive(Debug)]
pub enum CleanupOutcome {
    /// All dispatched work finished. `entries` is the number of children
    /// that were submitted for processing.
    Completed { folder: String, entries: usize },
    /// Preview lines, one per child, in completion order.
    DryRun(Vec<String>),
}

pub struct CleanupEngine<E: TaskExecutor> {
    ledger: Ledger,
    executor: E,
}

impl<E: TaskExecutor> CleanupEngine<E> {
    pub fn new(ledger: Ledger, executor: E) -> Self {
        CleanupEngine { ledger, executor }
    }

    /// Empty the requested folder.
    ///
    /// Fatal errors (`FolderNotFound`, `BackupUnavailable`) abort before any
    /// entry is dispatched and leave the ledger untouched. Once dispatch
    /// starts, the run always proceeds to completion of all submitted work.
    pub fn run(&self, request: &CleanupRequest) -> Result<CleanupOutcome, Error> {
        let folder = PathBuf::from(pathnorm::normalize(&request.folder_path));
        if !folder.is_dir() {
            return Err(Error::FolderNotFound(folder.display().to_string()));
        }

        let backup_dir = match &request.backup_path {
            Some(raw) => Some(self.prepare_backup_dir(raw)?),
            None => None,
        };

        let dry_run = request.mode == CleanupMode::DryRun;
        let jobs = self.build_jobs(&folder, backup_dir.as_deref(), dry_run)?;
        let submitted = jobs.len();
        info!(
            "Dispatching {} entries from {} ({:?} mode)",
            submitted,
            folder.display(),
            request.mode
        );

        let results = self.executor.run_all(jobs);

        if dry_run {
            Ok(CleanupOutcome::DryRun(results))
        } else {
            info!("Folder {} emptied ({} entries)", folder.display(), submitted);
            Ok(CleanupOutcome::Completed {
                folder: folder.display().to_string(),
                entries: submitted,
            })
        }
    }

    fn prepare_backup_dir(&self, raw: &str) -> Result<PathBuf, Error> {
        let backup_dir = PathBuf::from(pathnorm::normalize(raw));
        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir).map_err(|source| Error::BackupUnavailable {
                path: backup_dir.clone(),
                source,
            })?;
            debug!("Created backup directory {}", backup_dir.display());
        }
        Ok(backup_dir)
    }

    /// One job per immediate child. Submission order is enumeration order;
    /// nothing downstream relies on it.
    fn build_jobs(
        &self,
        folder: &Path,
        backup_dir: Option<&Path>,
        dry_run: bool,
    ) -> Result<Vec<EntryJob>, Error> {
        let mut jobs: Vec<EntryJob> = Vec::new();
        for dir_entry in fs::read_dir(folder)? {
            let dir_entry = dir_entry?;
            let entry_path = dir_entry.path();
            let backup_path = backup_dir.map(|dir| dir.join(dir_entry.file_name()));
            let ledger = self.ledger.clone();
            jobs.push(Box::new(move || {
                process_entry(&entry_path, backup_path.as_deref(), dry_run, &ledger)
            }));
        }
        Ok(jobs)
    }
}
