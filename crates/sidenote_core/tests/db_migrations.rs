use rusqlite::Connection;
use sidenote_core::db::migrations::{latest_version, schema_version, upgrade, SchemaUpgrade};
use sidenote_core::db::{open_db, open_db_in_memory, DbError};
use sidenote_core::{KvStore, SqliteKvStore};

#[test]
fn fresh_connection_upgrades_from_zero_once() {
    let mut conn = Connection::open_in_memory().unwrap();

    let first = upgrade(&mut conn).unwrap();
    assert_eq!(
        first,
        Some(SchemaUpgrade {
            from: 0,
            to: latest_version(),
        })
    );
    assert_eq!(upgrade(&mut conn).unwrap(), None);
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
}

#[test]
fn kv_table_has_expected_columns() {
    let conn = open_db_in_memory().unwrap();
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('kv');").unwrap();
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(columns, ["key", "value", "updated_at"]);
}

#[test]
fn stored_values_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sidenote.sqlite3");

    let mut kv = SqliteKvStore::try_new(open_db(&path).unwrap()).unwrap();
    kv.put("greeting", "hello").unwrap();
    drop(kv);

    let reopened = SqliteKvStore::try_new(open_db(&path).unwrap()).unwrap();
    assert_eq!(reopened.get("greeting").unwrap().as_deref(), Some("hello"));
    assert_eq!(
        schema_version(&reopened.into_inner()).unwrap(),
        latest_version()
    );
}

#[test]
fn file_from_newer_binary_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    Connection::open(&path)
        .unwrap()
        .pragma_update(None, "user_version", latest_version() + 1)
        .unwrap();

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion { db_version, latest_supported }
            if db_version == latest_version() + 1 && latest_supported == latest_version()
    ));
}

#[test]
fn opened_connections_wait_on_locked_files() {
    let conn = open_db_in_memory().unwrap();
    let timeout_ms: i64 = conn
        .query_row("PRAGMA busy_timeout;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(timeout_ms, 5_000);
}
