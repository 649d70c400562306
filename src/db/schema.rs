// Database schema definitions and migration system
//
// This module defines the SQLite schema for the memo metadata store
// and provides a migration system for schema changes.

use super::client::{DbClient, DbError};

/// Current schema version
pub const SCHEMA_VERSION: i32 = 2;

/// SQL statements to create all tables (each as a separate string)
const CREATE_TABLES: &[&str] = &[
    // One row per memo. inline_audio carries the fallback-tier payload when
    // the blob store was unavailable at save time; legacy_audio is the
    // historical v1 direct-object column, read-supported but never written.
    r#"CREATE TABLE IF NOT EXISTS memo (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        duration_secs REAL NOT NULL,
        created_at INTEGER NOT NULL,
        mime_type TEXT NOT NULL,
        inline_audio BLOB,
        legacy_audio BLOB
    )"#,
];

/// Initialize the database schema.
///
/// Creates all tables if they don't exist and runs any pending migrations.
/// This should be called once per database before memo operations.
pub async fn initialize_schema(client: &DbClient) -> Result<(), DbError> {
    // First, ensure schema_version table exists (needed for version checking)
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await?;

    // Check current schema version
    let current_version = get_schema_version(client).await?;

    if current_version == 0 {
        // Fresh database - create all tables
        crate::info!("Initializing memo database schema (version {})", SCHEMA_VERSION);

        for statement in CREATE_TABLES {
            client.execute(statement, ()).await?;
        }

        set_schema_version(client, SCHEMA_VERSION).await?;

        crate::info!("Memo database schema initialized successfully");
    } else if current_version < SCHEMA_VERSION {
        crate::info!(
            "Migrating memo database from version {} to {}",
            current_version,
            SCHEMA_VERSION
        );
        run_migrations(client, current_version, SCHEMA_VERSION).await?;
        crate::info!("Memo database migration complete");
    } else {
        crate::debug!("Memo database schema is up to date (version {})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database.
/// Returns 0 if no version has been recorded yet.
async fn get_schema_version(client: &DbClient) -> Result<i32, DbError> {
    let mut rows = client
        .query(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            (),
        )
        .await?;

    match rows.next().await.map_err(|e| DbError::Query(e.to_string()))? {
        Some(row) => {
            let version: i32 = row.get(0).map_err(|e| DbError::Query(e.to_string()))?;
            Ok(version)
        }
        None => Ok(0),
    }
}

/// Set the schema version in the database.
async fn set_schema_version(client: &DbClient, version: i32) -> Result<(), DbError> {
    client
        .execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            libsql::params![version],
        )
        .await?;
    Ok(())
}

/// Run migrations from one version to another.
async fn run_migrations(
    client: &DbClient,
    from_version: i32,
    to_version: i32,
) -> Result<(), DbError> {
    for version in (from_version + 1)..=to_version {
        match version {
            2 => migrate_v1_to_v2(client).await?,
            _ => {
                crate::debug!("No migration needed for version {}", version);
            }
        }
        set_schema_version(client, version).await?;
    }
    Ok(())
}

/// Migrate from schema version 1 to 2.
/// Adds the inline_audio fallback column; v1 stored audio either in the
/// blob store or directly in legacy_audio.
async fn migrate_v1_to_v2(client: &DbClient) -> Result<(), DbError> {
    crate::info!("Running migration v1 -> v2: adding inline_audio column to memo");
    client
        .execute("ALTER TABLE memo ADD COLUMN inline_audio BLOB", ())
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
