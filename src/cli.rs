// src/cli.rs
use crate::config::DatabaseConfig;
use crate::database::postgres::PostgresManager;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "signal-schema-push")]
#[command(about = "Push the trading-signals schema to PostgreSQL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Create the tables and indexes if they don't exist (the default)
    Push,

    /// Check the catalog for the expected tables and indexes without writing
    Verify {
        /// Print the report as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

/// Execute a command from the CLI. The connection pool is closed on every
/// exit path before the result is surfaced.
pub async fn execute_command(command: Commands) -> Result<()> {
    let config = DatabaseConfig::from_env()?;
    let pg = PostgresManager::new(&config).await?;

    let result = match command {
        Commands::Push => pg.push_schema().await,
        Commands::Verify { json } => verify_command(&pg, json).await,
    };

    pg.close().await;
    result
}

async fn verify_command(pg: &PostgresManager, json: bool) -> Result<()> {
    let report = pg.verify_schema().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return if report.is_complete() {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "schema incomplete: {} expected objects missing",
                report.missing_count()
            ))
        };
    }

    println!(
        "Tables present: {}/{}",
        report.present_tables.len(),
        report.present_tables.len() + report.missing_tables.len()
    );
    for table in &report.missing_tables {
        println!("  missing table: {}", table);
    }

    println!(
        "Indexes present: {}/{}",
        report.present_indexes.len(),
        report.present_indexes.len() + report.missing_indexes.len()
    );
    for index in &report.missing_indexes {
        println!("  missing index: {}", index);
    }

    if report.is_complete() {
        println!("Schema is complete");
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "schema incomplete: {} expected objects missing",
            report.missing_count()
        ))
    }
}
