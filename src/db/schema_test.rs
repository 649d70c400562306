use super::*;
use tempfile::TempDir;

async fn open_client() -> (DbClient, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let client = DbClient::open(&temp_dir.path().join("test.db"))
        .await
        .expect("Failed to open client");
    (client, temp_dir)
}

async fn stored_version(client: &DbClient) -> i32 {
    let mut rows = client
        .query(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            (),
        )
        .await
        .expect("version query should succeed");
    let row = rows.next().await.unwrap().expect("version row should exist");
    row.get(0).unwrap()
}

#[tokio::test]
async fn test_fresh_database_initialized_at_current_version() {
    let (client, _temp) = open_client().await;

    initialize_schema(&client)
        .await
        .expect("Failed to initialize schema");

    assert_eq!(stored_version(&client).await, SCHEMA_VERSION);

    // memo table exists with the full column set
    client
        .query(
            "SELECT id, title, duration_secs, created_at, mime_type, inline_audio, legacy_audio FROM memo",
            (),
        )
        .await
        .expect("memo table should have all columns");
}

#[tokio::test]
async fn test_initialize_is_idempotent() {
    let (client, _temp) = open_client().await;

    initialize_schema(&client).await.expect("first init");
    initialize_schema(&client).await.expect("second init");

    assert_eq!(stored_version(&client).await, SCHEMA_VERSION);
}

#[tokio::test]
async fn test_v1_database_migrates_to_v2() {
    let (client, _temp) = open_client().await;

    // Build a v1 database by hand: no inline_audio column yet
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await
        .unwrap();
    client
        .execute(
            r#"CREATE TABLE memo (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                duration_secs REAL NOT NULL,
                created_at INTEGER NOT NULL,
                mime_type TEXT NOT NULL,
                legacy_audio BLOB
            )"#,
            (),
        )
        .await
        .unwrap();
    client
        .execute(
            "INSERT INTO memo (id, title, duration_secs, created_at, mime_type, legacy_audio) VALUES ('old', 'Old', 1.0, 100, 'audio/webm', ?1)",
            libsql::params![vec![7u8, 8, 9]],
        )
        .await
        .unwrap();
    client
        .execute("INSERT INTO schema_version (version) VALUES (1)", ())
        .await
        .unwrap();

    initialize_schema(&client)
        .await
        .expect("migration should succeed");

    assert_eq!(stored_version(&client).await, SCHEMA_VERSION);

    // Existing row survives and the new column reads as NULL
    let record = client
        .get_memo_record("old")
        .await
        .expect("Failed to read migrated row")
        .expect("row should survive migration");
    assert_eq!(record.title, "Old");
    assert_eq!(record.inline_audio, None);
    assert_eq!(record.legacy_audio, Some(vec![7u8, 8, 9]));
}
