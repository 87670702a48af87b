use crate::storage::{Action, Ledger, Outcome};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error, info};

/// Process one immediate child of the target folder.
///
/// Dry run returns a preview string and touches neither the filesystem nor
/// the ledger. Otherwise the entry is moved to `backup_path` when one is
/// given, or deleted in place, and exactly one ledger row records the
/// attempt. Failures are contained here: they are logged, recorded as a
/// `fail` row, and never propagate to sibling entries.
pub fn process_entry(
    entry_path: &Path,
    backup_path: Option<&Path>,
    dry_run: bool,
    ledger: &Ledger,
) -> Option<String> {
    if dry_run {
        return Some(format!("Would delete: {}", entry_path.display()));
    }

    let kind = match classify(entry_path) {
        Some(kind) => kind,
        None => {
            // Vanished between enumeration and processing, or unstattable.
            debug!("Skipping unreachable entry {}", entry_path.display());
            return None;
        }
    };

    let action = match backup_path {
        Some(_) => Action::Move,
        None => Action::Delete,
    };

    let result = match (backup_path, kind) {
        (Some(dest), _) => fs::rename(entry_path, dest),
        (None, EntryKind::File) => fs::remove_file(entry_path),
        (None, EntryKind::Dir) => fs::remove_dir_all(entry_path),
    };

    match result {
        Ok(()) => {
            match action {
                Action::Move => info!("Moved to backup: {}", entry_path.display()),
                Action::Delete => info!("Deleted: {}", entry_path.display()),
            }
            record(ledger, entry_path, action, Outcome::Success);
        }
        Err(err) => {
            error!(
                "Failed to {} {}. Reason: {}",
                action.as_str(),
                entry_path.display(),
                err
            );
            record(ledger, entry_path, action, Outcome::Fail);
        }
    }

    None
}

#[derive(Clone, Copy)]
enum EntryKind {
    /// Regular file or symlink; removed with a plain unlink.
    File,
    Dir,
}

fn classify(path: &Path) -> Option<EntryKind> {
    let metadata: fs::Metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            error!("Error reading metadata for {}: {}", path.display(), err);
            return None;
        }
    };

    if metadata.is_dir() {
        Some(EntryKind::Dir)
    } else {
        Some(EntryKind::File)
    }
}

fn record(ledger: &Ledger, path: &Path, action: Action, outcome: Outcome) {
    // The filesystem action already happened; a ledger write failure must
    // not abort sibling entries.
    if let Err(err) = ledger.append(&path.to_string_lossy(), action, outcome) {
        error!("Failed to record operation for {}: {}", path.display(), err);
    }
}
