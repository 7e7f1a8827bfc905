//! # jotterd — jotter daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize tracing
//! - Open the database selected by driver (`SQLite` or `MySQL`) + connection URL
//!   and run migrations
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via its port trait
//! - Build the axum router, injecting the application service
//! - Bind to a loopback TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::error::Error;

use jotter_adapter_http_axum::router;
use jotter_adapter_http_axum::state::AppState;
use jotter_adapter_storage_mysql_sqlx::MySqlEntryRepository;
use jotter_adapter_storage_sqlite_sqlx::SqliteEntryRepository;
use jotter_app::ports::EntryRepository;
use jotter_app::services::entry_service::EntryService;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, Driver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    init_tracing(&config.logging.filter)?;

    // Database
    let driver = config.database_driver()?;
    tracing::info!(%driver, "opening database");

    // Repositories
    match driver {
        Driver::Sqlite => {
            let repo = SqliteEntryRepository::connect(config.database_url()).await?;
            serve(repo, &config).await
        }
        Driver::MySql => {
            let repo = MySqlEntryRepository::connect(config.database_url()).await?;
            serve(repo, &config).await
        }
    }
}

fn init_tracing(filter: &str) -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(filter)?)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

/// Wire `repo` into the service and router, then serve until shutdown.
async fn serve<R>(repo: R, config: &Config) -> Result<(), Box<dyn Error>>
where
    R: EntryRepository + Send + Sync + 'static,
{
    // Services
    let entry_service = EntryService::new(repo);

    // HTTP
    let state = AppState::new(entry_service);
    let app = router::build(state, config.request_timeout());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "jotterd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("jotterd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
