//! Taskboard API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use taskboard::api::{self, ApiError, Config};
use taskboard::db::{Database, DbError, sqlite::SqliteDatabase};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(taskboard::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(taskboard::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(taskboard::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "taskboard-api")]
#[command(author, version, about = "Taskboard API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on (falls back to the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file path (defaults to ~/.local/share/taskboard/taskboard.db)
    #[arg(long, env = "TASKBOARD_DB")]
    db: Option<PathBuf>,

    /// Serve only the JSON API, without the embedded frontend
    #[arg(long)]
    api_only: bool,
}

/// Default database location under the XDG data directory.
fn default_db_path() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME").map(PathBuf::from).unwrap_or_else(|_| {
        let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".local").join("share")
    });
    data_home.join("taskboard").join("taskboard.db")
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    let port = cli
        .port
        .or_else(|| env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(3001);

    let db_path = cli.db.unwrap_or_else(default_db_path);
    println!("Opening database at {:?}", db_path);

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    println!("Database migrations complete");

    // Pass the abstract Database to the API layer
    api::run(
        Config {
            host: cli.host,
            port,
            serve_frontend: !cli.api_only,
        },
        db,
    )
    .await?;

    Ok(())
}
