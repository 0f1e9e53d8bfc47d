mod app;
mod config;
mod graphql;
mod handlers;
mod resolvers;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use departures_core::storage::ItemRepository;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// Departures - GraphQL gateway for departure schedules and passenger bookings
#[derive(Parser, Debug)]
#[command(name = "departures")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Print the GraphQL schema (SDL) and exit
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_schema {
        print!("{}", graphql::sdl());
        return Ok(());
    }

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "departures=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let repository = create_repository(&config).await?;
    let state = AppState::new(repository, &config);

    tracing::info!(
        backend = state.backend,
        graphiql = state.graphiql_enabled,
        "Schema ready"
    );

    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Build the DynamoDB repository. Missing credentials abort startup.
#[cfg(feature = "dynamodb")]
async fn create_repository(config: &Config) -> Result<Arc<dyn ItemRepository>> {
    use crate::storage::dynamodb::AwsConfig;
    use crate::storage::DynamoDbRepository;

    let aws_config = AwsConfig::from_env()?;
    let repository = DynamoDbRepository::connect(&aws_config, config.table_name.clone()).await;
    Ok(Arc::new(repository))
}

#[cfg(all(feature = "inmemory", not(feature = "dynamodb")))]
async fn create_repository(_config: &Config) -> Result<Arc<dyn ItemRepository>> {
    tracing::warn!("Using in-memory store; data is lost on shutdown");
    Ok(Arc::new(crate::storage::InMemoryRepository::new()))
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
