// Memo record CRUD operations using libsql
//
// Provides database operations for persisted memo rows using SQL queries.

use libsql::params;

use super::client::{DbClient, DbError};

/// Persisted metadata row for one memo.
///
/// At most one of `inline_audio` / `legacy_audio` carries bytes, and only
/// when the blob store did not take them at save time. Rows written by any
/// historical save policy decode into this one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoRecord {
    pub id: String,
    pub title: String,
    pub duration_secs: f64,
    pub created_at: i64,
    pub mime_type: String,
    /// Fallback-tier payload written when the blob store was unavailable.
    pub inline_audio: Option<Vec<u8>>,
    /// Historical v1 direct-object payload. Never written by this crate.
    pub legacy_audio: Option<Vec<u8>>,
}

const SELECT_COLUMNS: &str =
    "id, title, duration_secs, created_at, mime_type, inline_audio, legacy_audio";

impl DbClient {
    /// Insert or fully replace the record with this id.
    ///
    /// Replacing clears any column the record does not carry, so a record
    /// re-saved under the blob-store policy sheds stale inline bytes.
    pub async fn upsert_memo(&self, record: &MemoRecord) -> Result<(), DbError> {
        self.execute(
            r#"INSERT OR REPLACE INTO memo
               (id, title, duration_secs, created_at, mime_type, inline_audio, legacy_audio)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL)"#,
            params![
                record.id.clone(),
                record.title.clone(),
                record.duration_secs,
                record.created_at,
                record.mime_type.clone(),
                record.inline_audio.clone()
            ],
        )
        .await?;
        Ok(())
    }

    /// Full scan of all memo records. No ordering is guaranteed here;
    /// callers impose their own order.
    pub async fn list_memo_records(&self) -> Result<Vec<MemoRecord>, DbError> {
        let sql = format!("SELECT {} FROM memo", SELECT_COLUMNS);
        let mut rows = self.query(&sql, ()).await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await.map_err(|e| DbError::Query(e.to_string()))? {
            records.push(record_from_row(&row)?);
        }

        Ok(records)
    }

    /// Get a single memo record by id.
    pub async fn get_memo_record(&self, id: &str) -> Result<Option<MemoRecord>, DbError> {
        let sql = format!("SELECT {} FROM memo WHERE id = ?1", SELECT_COLUMNS);
        let mut rows = self.query(&sql, params![id.to_string()]).await?;

        match rows.next().await.map_err(|e| DbError::Query(e.to_string()))? {
            Some(row) => Ok(Some(record_from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Delete the record with this id. Deleting an absent id is a no-op.
    pub async fn delete_memo(&self, id: &str) -> Result<(), DbError> {
        self.execute("DELETE FROM memo WHERE id = ?1", params![id.to_string()])
            .await?;
        Ok(())
    }

    /// Update only the title of an existing record.
    ///
    /// Returns true when a row was updated, false when no such id exists.
    pub async fn rename_memo(&self, id: &str, title: &str) -> Result<bool, DbError> {
        let affected = self
            .execute(
                "UPDATE memo SET title = ?1 WHERE id = ?2",
                params![title.to_string(), id.to_string()],
            )
            .await?;
        Ok(affected > 0)
    }

    /// Count persisted memo records.
    pub async fn count_memos(&self) -> Result<u64, DbError> {
        let mut rows = self.query("SELECT COUNT(*) FROM memo", ()).await?;

        match rows.next().await.map_err(|e| DbError::Query(e.to_string()))? {
            Some(row) => {
                let count: i64 = row.get(0).map_err(|e| DbError::Query(e.to_string()))?;
                Ok(count as u64)
            }
            None => Ok(0),
        }
    }
}

fn record_from_row(row: &libsql::Row) -> Result<MemoRecord, DbError> {
    let id: String = row.get(0).map_err(|e| DbError::Query(e.to_string()))?;
    let title: String = row.get(1).map_err(|e| DbError::Query(e.to_string()))?;
    let duration_secs: f64 = row.get(2).map_err(|e| DbError::Query(e.to_string()))?;
    let created_at: i64 = row.get(3).map_err(|e| DbError::Query(e.to_string()))?;
    let mime_type: String = row.get(4).map_err(|e| DbError::Query(e.to_string()))?;
    let inline_audio: Option<Vec<u8>> = row.get(5).map_err(|e| DbError::Query(e.to_string()))?;
    let legacy_audio: Option<Vec<u8>> = row.get(6).map_err(|e| DbError::Query(e.to_string()))?;

    Ok(MemoRecord {
        id,
        title,
        duration_secs,
        created_at,
        mime_type,
        inline_audio,
        legacy_audio,
    })
}

#[cfg(test)]
#[path = "memos_test.rs"]
mod tests;
