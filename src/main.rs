use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use macmahome::{api, config::ServerConfig, db, models::ServiceStatus};

#[derive(Parser)]
#[command(name = "macmahome")]
#[command(about = "Backend API for managing projects, tasks and notes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port for HTTP API
        #[arg(short, long)]
        port: Option<u16>,

        /// SQLite database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
    /// Create the database tables and exit
    Migrate {
        /// SQLite database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
    /// Check whether a server is answering
    Status {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "macmahome=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn open_database(path: Option<PathBuf>) -> anyhow::Result<db::Database> {
    let db = match path {
        Some(path) => db::Database::open(path)?,
        None => db::Database::open_default()?,
    };
    db.migrate().context("Failed to migrate database")?;
    Ok(db)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let db = open_database(config.database_path.clone())?;
    let app = api::create_router_with_config(db.clone(), &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("macmahome server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    db.close()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn check_status(config: ServerConfig) -> anyhow::Result<()> {
    let url = format!("http://{}{}/service-status", config.bind_addr(), api::API_PREFIX);
    let status: ServiceStatus = reqwest::get(&url)
        .await
        .with_context(|| format!("No server answering at {}", url))?
        .error_for_status()?
        .json()
        .await?;

    println!("{}: {}", url, status.message);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = ServerConfig::from_env();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            database,
        }) => {
            config.host = host.unwrap_or(config.host);
            config.port = port.unwrap_or(config.port);
            config.database_path = database.or(config.database_path);
            serve(config).await?;
        }
        Some(Commands::Migrate { database }) => {
            let db = open_database(database.or(config.database_path))?;
            tracing::info!("Database is up to date");
            db.close()?;
        }
        Some(Commands::Status { host, port }) => {
            config.host = host.unwrap_or(config.host);
            config.port = port.unwrap_or(config.port);
            check_status(config).await?;
        }
        None => serve(config).await?,
    }

    Ok(())
}
