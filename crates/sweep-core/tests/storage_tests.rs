use rayon::prelude::*;
use sweep_core::storage::{Action, Ledger, Outcome};
use tempfile::tempdir;

#[test]
fn test_open_creates_schema_idempotently() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("ops.db");

    let ledger = Ledger::open(&db_path).unwrap();
    assert_eq!(ledger.count().unwrap(), 0);

    // Reopening an existing store keeps the rows.
    ledger
        .append("/data/a.txt", Action::Delete, Outcome::Success)
        .unwrap();
    let reopened = Ledger::open(&db_path).unwrap();
    assert_eq!(reopened.count().unwrap(), 1);
}

#[test]
fn test_append_assigns_increasing_ids_and_timestamps() {
    let tmp = tempdir().unwrap();
    let ledger = Ledger::open(tmp.path().join("ops.db")).unwrap();

    let first = ledger
        .append("/data/a", Action::Delete, Outcome::Success)
        .unwrap();
    let second = ledger
        .append("/data/b", Action::Move, Outcome::Fail)
        .unwrap();
    assert!(second > first);

    let records = ledger.list_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, first);
    assert_eq!(records[0].file_path, "/data/a");
    assert_eq!(records[0].operation, "delete");
    assert_eq!(records[0].status, "success");
    assert!(!records[0].timestamp.is_empty());
    assert_eq!(records[1].operation, "move");
    assert_eq!(records[1].status, "fail");
}

#[test]
fn test_list_all_is_ordered_by_id_ascending() {
    let tmp = tempdir().unwrap();
    let ledger = Ledger::open(tmp.path().join("ops.db")).unwrap();

    for i in 0..10 {
        ledger
            .append(&format!("/data/{}", i), Action::Delete, Outcome::Success)
            .unwrap();
    }

    let records = ledger.list_all().unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn test_concurrent_appends_all_land() {
    let tmp = tempdir().unwrap();
    let ledger = Ledger::open(tmp.path().join("ops.db")).unwrap();

    (0..64).into_par_iter().for_each(|i| {
        let outcome = if i % 2 == 0 {
            Outcome::Success
        } else {
            Outcome::Fail
        };
        ledger
            .append(&format!("/data/file_{}", i), Action::Delete, outcome)
            .unwrap();
    });

    assert_eq!(ledger.count().unwrap(), 64);
    let records = ledger.list_all().unwrap();
    let failures = records.iter().filter(|r| r.status == "fail").count();
    assert_eq!(failures, 32);
}
