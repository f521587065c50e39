use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A single row returned by the catalog queries (information_schema.tables
/// and pg_indexes): just the object name.
#[derive(Debug, Clone, FromRow)]
pub struct SchemaObject {
    pub name: String,
}

/// Outcome of a catalog check against the expected schema.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaReport {
    pub present_tables: Vec<String>,
    pub missing_tables: Vec<String>,
    pub present_indexes: Vec<String>,
    pub missing_indexes: Vec<String>,
    pub checked_at: DateTime<Utc>,
}

impl SchemaReport {
    pub fn is_complete(&self) -> bool {
        self.missing_tables.is_empty() && self.missing_indexes.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.missing_tables.len() + self.missing_indexes.len()
    }
}
