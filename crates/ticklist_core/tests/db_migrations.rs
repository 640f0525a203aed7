use rusqlite::Connection;
use ticklist_core::db::migrations::{apply_migrations, latest_version};
use ticklist_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_in_memory_applies_latest_schema() {
    let conn = open_db_in_memory().unwrap();

    let version = conn
        .query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let blob_count = conn
        .query_row("SELECT COUNT(*) FROM blobs;", [], |row| {
            row.get::<_, i64>(0)
        })
        .unwrap();
    assert_eq!(blob_count, 0);
}

#[test]
fn apply_migrations_is_idempotent() {
    let mut conn = open_db_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    let version = conn
        .query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_database_version_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        latest_version() + 10
    ))
    .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion { db_version, .. } if db_version == latest_version() + 10
    ));
}

#[test]
fn open_db_bootstraps_a_file_database_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ticklist.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO blobs (name, payload) VALUES ('probe', '{}');",
            [],
        )
        .unwrap();
    }

    // Reopening must keep existing data and not re-run migrations.
    let conn = open_db(&path).unwrap();
    let payload = conn
        .query_row(
            "SELECT payload FROM blobs WHERE name = 'probe';",
            [],
            |row| row.get::<_, String>(0),
        )
        .unwrap();
    assert_eq!(payload, "{}");
}
