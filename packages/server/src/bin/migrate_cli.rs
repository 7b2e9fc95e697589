//! CLI for applying schema migrations
//!
//! Outputs JSON so deploy scripts can parse the result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sqlx::PgPool;

use job_board_core::config::Config;
use job_board_core::kernel::{applied_versions, MIGRATOR};

#[derive(Parser)]
#[command(name = "migrate_cli")]
#[command(about = "Schema migration CLI for the job board database")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply all pending migrations
    Run,

    /// List migrations and whether each has been applied
    Status,
}

// ============================================================================
// JSON Response Types
// ============================================================================

#[derive(Serialize)]
struct Response {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    migrations: Option<Vec<MigrationInfo>>,
}

#[derive(Serialize)]
struct MigrationInfo {
    version: i64,
    description: String,
    applied: bool,
}

fn output(resp: &Response) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string(resp).context("Failed to encode response")?
    );
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the JSON result; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,sqlx=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => cmd_run().await,
        Commands::Status => cmd_status().await,
    }
}

async fn get_pool() -> Result<PgPool> {
    let config = Config::from_env()?;
    tracing::debug!("Connecting to database");
    PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

// ============================================================================
// Commands
// ============================================================================

async fn cmd_run() -> Result<()> {
    let pool = get_pool().await?;

    match MIGRATOR.run(&pool).await {
        Ok(()) => output(&Response {
            success: true,
            message: Some("Migrations applied successfully".to_string()),
            migrations: None,
        }),
        Err(e) => output(&Response {
            success: false,
            message: Some(format!("Migration failed: {}", e)),
            migrations: None,
        }),
    }
}

async fn cmd_status() -> Result<()> {
    let pool = get_pool().await?;

    let applied = match applied_versions(&pool).await {
        Ok(applied) => applied,
        Err(e) => {
            return output(&Response {
                success: false,
                message: Some(format!("Failed to read migration status: {}", e)),
                migrations: None,
            })
        }
    };

    let migrations = MIGRATOR
        .iter()
        .map(|m| MigrationInfo {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect();

    output(&Response {
        success: true,
        message: None,
        migrations: Some(migrations),
    })
}
