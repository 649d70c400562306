// Metadata database module backed by libsql/SQLite.
//
// One versioned key-value-style table holds a row per memo, keyed by id.
// Connections are scoped: callers open a client per operation and drop it
// when the operation completes, so no connection state is shared across
// concurrent UI-triggered calls.

mod client;
mod memos;
mod schema;

pub use client::{DbClient, DbError};
pub use memos::MemoRecord;
pub use schema::{initialize_schema, SCHEMA_VERSION};
