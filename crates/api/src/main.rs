//! API server entry point.

use std::error::Error;

use api::config::{Config, LogFormat};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::postgres::PgPoolOptions;
use store::{InMemoryStore, PostgresStore, Store};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type BoxError = Box<dyn Error + Send + Sync>;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Seeds if asked to, then serves the API until a shutdown signal arrives.
async fn serve<S: Store>(
    store: S,
    config: &Config,
    metrics_handle: PrometheusHandle,
) -> Result<(), BoxError> {
    if config.seed_demo_data {
        api::seed::seed_demo_data(&store).await?;
    }

    let state = api::create_default_state(store);
    let app = api::create_app(state, metrics_handle, config.auth.as_ref());

    let addr = config.addr();
    tracing::info!(%addr, auth = config.auth.is_some(), "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = Config::from_env();
    init_tracing(&config);

    if config.auth.is_none() {
        tracing::warn!("AUTH_USERNAME/AUTH_PASSWORD not set, /api routes are unauthenticated");
    }

    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(url)
                .await?;
            let store = PostgresStore::new(pool);
            store.run_migrations().await?;
            tracing::info!(
                max_connections = config.database_max_connections,
                "using PostgreSQL store"
            );
            serve(store, &config, metrics_handle).await
        }
        None => {
            tracing::warn!("DATABASE_URL not set, records are kept in memory only");
            serve(InMemoryStore::new(), &config, metrics_handle).await
        }
    }
}
