use crate::config::DatabaseConfig;
use crate::database::models::{SchemaObject, SchemaReport};
use crate::database::schema;
use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, info};

/// Any error surfaced while executing a DDL statement. All kinds (connectivity,
/// permissions, syntax) are treated identically: abort the push.
#[derive(Debug, Error)]
#[error("failed to execute '{group}' schema statement")]
pub struct SchemaPushError {
    pub group: &'static str,
    #[source]
    pub source: sqlx::Error,
}

pub struct PostgresManager {
    pool: PgPool,
}

impl PostgresManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.connection_string())
            .await
            .context("Failed to create database connection pool")?;

        Ok(Self { pool })
    }

    /// Push the full schema: execute every group's statements strictly in
    /// declaration order, printing one confirmation line per completed group.
    /// The first failing statement aborts the push; nothing is rolled back,
    /// since every statement is independently idempotent and a re-run picks
    /// up whatever is still missing.
    pub async fn push_schema(&self) -> Result<()> {
        println!("Pushing schema to database...");

        for group in schema::schema_groups() {
            for sql in group.statements {
                debug!(group = group.name, "executing schema statement");
                sqlx::query(sql)
                    .execute(&self.pool)
                    .await
                    .map_err(|source| SchemaPushError {
                        group: group.name,
                        source,
                    })?;
            }
            println!("{}", group.confirmation);
        }

        println!("Schema push completed successfully");
        info!("Schema push completed successfully");
        Ok(())
    }

    /// Check the database catalog for the expected tables and indexes and
    /// report which are missing. Performs no writes.
    pub async fn verify_schema(&self) -> Result<SchemaReport> {
        let tables = sqlx::query_as::<_, SchemaObject>(
            "SELECT table_name AS name
            FROM information_schema.tables
            WHERE table_schema = 'public' AND table_type = 'BASE TABLE'",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to query table catalog")?;

        let indexes = sqlx::query_as::<_, SchemaObject>(
            "SELECT indexname AS name
            FROM pg_indexes
            WHERE schemaname = 'public' AND tablename = 'auto_signals'",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to query index catalog")?;

        let (present_tables, missing_tables) = split_expected(&schema::TABLE_NAMES, &tables);
        let (present_indexes, missing_indexes) = split_expected(&schema::INDEX_NAMES, &indexes);

        Ok(SchemaReport {
            present_tables,
            missing_tables,
            present_indexes,
            missing_indexes,
            checked_at: Utc::now(),
        })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Partition the expected names into present/missing, preserving declaration
/// order regardless of catalog ordering.
fn split_expected(expected: &[&str], found: &[SchemaObject]) -> (Vec<String>, Vec<String>) {
    let mut present = Vec::new();
    let mut missing = Vec::new();

    for name in expected {
        if found.iter().any(|object| object.name == *name) {
            present.push(name.to_string());
        } else {
            missing.push(name.to_string());
        }
    }

    (present, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objects(names: &[&str]) -> Vec<SchemaObject> {
        names
            .iter()
            .map(|name| SchemaObject {
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn split_reports_missing_in_declaration_order() {
        let found = objects(&["auto_signals", "users"]);
        let (present, missing) = split_expected(&schema::TABLE_NAMES, &found);

        assert_eq!(present, vec!["users", "auto_signals"]);
        assert_eq!(
            missing,
            vec!["trading_signals", "technical_indicators", "predictions"]
        );
    }

    #[test]
    fn split_ignores_unexpected_catalog_entries() {
        let found = objects(&["auto_signals_pkey", "idx_auto_signals_status"]);
        let (present, missing) = split_expected(&schema::INDEX_NAMES, &found);

        assert_eq!(present, vec!["idx_auto_signals_status"]);
        assert_eq!(missing.len(), 4);
    }
}
