use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::{self, AppState};
use crate::config::AppConfig;
use crate::database::{DatabaseManager, MemoryStore, PgStore, Store};

#[derive(Parser)]
#[command(name = "swapi-favorites-api")]
#[command(about = "REST API for Star Wars people, planets, vehicles and user favorites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Interface to bind, overrides HOST")]
        host: Option<String>,

        #[arg(long, help = "Port to bind, overrides PORT")]
        port: Option<u16>,

        #[arg(long, help = "Use the in-memory store even if DATABASE_URL is set")]
        memory: bool,
    },

    #[command(about = "Check that the configured database is reachable")]
    Health,
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the defaults.
pub fn init_tracing(config: &AppConfig) {
    let default_filter = if config.api.enable_request_logging {
        "swapi_favorites_api=info,tower_http=debug"
    } else {
        "swapi_favorites_api=info,tower_http=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        memory: false,
    }) {
        Commands::Serve { host, port, memory } => {
            let mut config = config.clone();
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(&config, memory).await
        }
        Commands::Health => health(config).await,
    }
}

async fn serve(config: &AppConfig, memory: bool) -> anyhow::Result<()> {
    info!("Starting API in {:?} mode", config.environment);

    let store = open_store(config, memory).await?;
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    info!("Listening on http://{}", bind_addr);
    app::serve(listener, AppState::new(store), &config.api).await?;
    Ok(())
}

async fn health(config: &AppConfig) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database).await?;
    DatabaseManager::health_check(&pool).await?;
    println!("database: ok");
    Ok(())
}

/// PostgreSQL when `DATABASE_URL` is set, otherwise a throwaway in-memory store
pub async fn open_store(config: &AppConfig, memory: bool) -> anyhow::Result<Arc<dyn Store>> {
    if memory || config.database.url.is_none() {
        warn!("DATABASE_URL not set or --memory given; data is kept in memory and lost on exit");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let pool = DatabaseManager::connect(&config.database).await?;
    DatabaseManager::ensure_schema(&pool).await?;
    Ok(Arc::new(PgStore::new(pool)))
}
