// Scoped libsql connection wrapper.
//
// A DbClient wraps one local database connection for the duration of a
// single logical operation. It exists to centralize error mapping and to
// keep the libsql surface out of the rest of the crate.

use std::path::Path;

use libsql::{Builder, Connection, Database, Rows};

/// Errors from the metadata database layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The database could not be opened at all. Private-browsing-like
    /// contexts, denied directories, and quota exhaustion land here.
    #[error("Database unavailable: {0}")]
    Unavailable(String),
    /// A mutating statement failed (transaction abort, quota, lock).
    #[error("Database write failed: {0}")]
    Write(String),
    /// A read statement or row decode failed.
    #[error("Database query failed: {0}")]
    Query(String),
}

/// A connection to the local memo database, scoped to one operation.
pub struct DbClient {
    // The Database must stay alive as long as its connections.
    _db: Database,
    conn: Connection,
}

impl DbClient {
    /// Open (creating on first use) the database at the given path.
    pub async fn open(db_path: &Path) -> Result<Self, DbError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DbError::Unavailable(e.to_string()))?;
        }

        let db = Builder::new_local(db_path)
            .build()
            .await
            .map_err(|e| DbError::Unavailable(e.to_string()))?;
        let conn = db
            .connect()
            .map_err(|e| DbError::Unavailable(e.to_string()))?;

        Ok(Self { _db: db, conn })
    }

    /// Execute a mutating statement, returning the affected row count.
    pub async fn execute(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<u64, DbError> {
        self.conn
            .execute(sql, params)
            .await
            .map_err(|e| DbError::Write(e.to_string()))
    }

    /// Run a read statement and return its rows.
    pub async fn query(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Rows, DbError> {
        self.conn
            .query(sql, params)
            .await
            .map_err(|e| DbError::Query(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
