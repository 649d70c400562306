use super::*;
use tempfile::TempDir;

async fn open_client() -> (DbClient, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let client = DbClient::open(&temp_dir.path().join("test.db"))
        .await
        .expect("Failed to open client");
    (client, temp_dir)
}

#[tokio::test]
async fn test_open_creates_database_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("dir").join("test.db");

    let _client = DbClient::open(&db_path).await.expect("Failed to open");

    assert!(db_path.exists(), "database file should be created");
}

#[tokio::test]
async fn test_execute_and_query() {
    let (client, _temp) = open_client().await;

    client
        .execute("CREATE TABLE t (k TEXT PRIMARY KEY, v INTEGER)", ())
        .await
        .expect("create should succeed");
    let affected = client
        .execute(
            "INSERT INTO t (k, v) VALUES (?1, ?2)",
            libsql::params!["a", 42],
        )
        .await
        .expect("insert should succeed");
    assert_eq!(affected, 1);

    let mut rows = client
        .query("SELECT v FROM t WHERE k = ?1", libsql::params!["a"])
        .await
        .expect("query should succeed");
    let row = rows.next().await.unwrap().expect("row should exist");
    let v: i64 = row.get(0).unwrap();
    assert_eq!(v, 42);
}

#[tokio::test]
async fn test_execute_on_missing_table_is_write_error() {
    let (client, _temp) = open_client().await;

    let result = client.execute("INSERT INTO missing (x) VALUES (1)", ()).await;

    match result.err().expect("should fail") {
        DbError::Write(_) => {}
        other => panic!("Expected Write error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_query_on_missing_table_is_query_error() {
    let (client, _temp) = open_client().await;

    let result = client.query("SELECT * FROM missing", ()).await;

    match result.err().expect("should fail") {
        DbError::Query(_) => {}
        other => panic!("Expected Query error, got {:?}", other),
    }
}
