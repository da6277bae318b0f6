use craftlab_core::db::open_db_in_memory;
use craftlab_core::{
    MemoryRecordRepository, RecordKey, RecordRepository, RepoError, SqliteRecordRepository,
};
use rusqlite::Connection;

#[test]
fn write_then_read_round_trips() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    repo.write_record(RecordKey::Elements, r#"[{"id":"water"}]"#)
        .unwrap();

    let payload = repo.read_record(RecordKey::Elements).unwrap().unwrap();
    assert_eq!(payload, r#"[{"id":"water"}]"#);
}

#[test]
fn absent_record_reads_as_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    assert!(repo.read_record(RecordKey::Tiles).unwrap().is_none());
}

#[test]
fn write_replaces_the_whole_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    repo.write_record(RecordKey::Combinations, r#"{"a|b":"c"}"#)
        .unwrap();
    repo.write_record(RecordKey::Combinations, r#"{"d|e":"f"}"#)
        .unwrap();

    let payload = repo.read_record(RecordKey::Combinations).unwrap().unwrap();
    assert_eq!(payload, r#"{"d|e":"f"}"#);
}

#[test]
fn records_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    repo.write_record(RecordKey::Elements, "[]").unwrap();
    repo.write_record(RecordKey::Tiles, "[1]").unwrap();

    assert_eq!(repo.read_record(RecordKey::Elements).unwrap().unwrap(), "[]");
    assert_eq!(repo.read_record(RecordKey::Tiles).unwrap().unwrap(), "[1]");
    assert!(repo
        .read_record(RecordKey::Combinations)
        .unwrap()
        .is_none());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteRecordRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_records_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        craftlab_core::db::migrations::latest_version()
    ))
    .unwrap();

    let result = SqliteRecordRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("game_records"))
    ));
}

#[test]
fn memory_repository_mirrors_sqlite_contract() {
    let repo = MemoryRecordRepository::new();

    assert!(repo.read_record(RecordKey::Elements).unwrap().is_none());
    repo.write_record(RecordKey::Elements, "[]").unwrap();
    repo.write_record(RecordKey::Elements, "[1]").unwrap();
    assert_eq!(repo.read_record(RecordKey::Elements).unwrap().unwrap(), "[1]");
}

#[test]
fn memory_repository_failure_switch_rejects_writes() {
    let repo = MemoryRecordRepository::new();
    repo.write_record(RecordKey::Tiles, "[]").unwrap();

    repo.set_fail_writes(true);
    let err = repo.write_record(RecordKey::Tiles, "[1]").unwrap_err();
    assert!(matches!(err, RepoError::Backend(_)));
    // The previous payload is untouched by the failed write.
    assert_eq!(repo.read_record(RecordKey::Tiles).unwrap().unwrap(), "[]");

    repo.set_fail_writes(false);
    repo.write_record(RecordKey::Tiles, "[2]").unwrap();
    assert_eq!(repo.read_record(RecordKey::Tiles).unwrap().unwrap(), "[2]");
}
