// src/main.rs
use clap::Parser;
use signal_schema_push::cli::{execute_command, Cli, Commands};
use tracing::error;

#[tokio::main]
async fn main() {
    // Initialize environment
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // A bare invocation pushes the schema
    let command = cli.command.unwrap_or(Commands::Push);

    if let Err(err) = execute_command(command).await {
        error!("command failed: {:#}", err);
        match command {
            Commands::Push => eprintln!("Error pushing schema: {:#}", err),
            Commands::Verify { .. } => eprintln!("Error verifying schema: {:#}", err),
        }
        std::process::exit(1);
    }
}
