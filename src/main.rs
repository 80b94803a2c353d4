//! Kanban Planning API server.

use std::error::Error;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use kanban_planning::adapters::auth::JwtValidator;
use kanban_planning::adapters::http::{api_router, LabelAppState, RequestGuards, SprintAppState};
use kanban_planning::adapters::postgres::{
    PostgresLabelReader, PostgresLabelRepository, PostgresSprintReader, PostgresSprintRepository,
    MIGRATOR,
};
use kanban_planning::adapters::rate_limiter::FixedWindowRateLimiter;
use kanban_planning::config::{AppConfig, ServerConfig};

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            exit(1);
        }
    };

    init_tracing(&config.server);

    if let Err(e) = run(config).await {
        tracing::error!("Server stopped: {}", e);
        exit(1);
    }
}

/// JSON logs in production, human-readable text elsewhere. `RUST_LOG`
/// overrides the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(server.log_level.as_str()));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn run(config: AppConfig) -> Result<(), BoxError> {
    config.validate()?;

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    if config.database.run_migrations {
        MIGRATOR.run(&pool).await?;
        tracing::info!("Migrations applied");
    }

    let labels = LabelAppState::new(
        Arc::new(PostgresLabelRepository::new(pool.clone())),
        Arc::new(PostgresLabelReader::new(pool.clone())),
    );
    let sprints = SprintAppState::new(
        Arc::new(PostgresSprintRepository::new(pool.clone())),
        Arc::new(PostgresSprintReader::new(pool)),
    );

    let guards = RequestGuards {
        tokens: Arc::new(JwtValidator::from_config(&config.auth)),
        limiter: Arc::new(FixedWindowRateLimiter::from_config(&config.throttle)),
    };
    tracing::info!(
        requests_per_window = config.throttle.requests_per_window,
        window_secs = config.throttle.window_secs,
        "Request throttle configured"
    );

    let app = api_router(labels, sprints, guards, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
