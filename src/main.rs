use neer_manthan::{
    AppState,
    config::{AppConfig, DEFAULT_LOG_FILTER, Env},
    create_router, navigation,
    repository::{FixtureRepository, RepositoryState},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Loads the configuration, sets up logging, checks the role table, builds the state and
/// serves the router until the process is stopped.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let config = AppConfig::load()?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    // Pretty output for humans locally, JSON for log aggregators in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // Landing routes and menus must agree before anyone can sign in.
    navigation::check_consistency()?;

    let repo = Arc::new(FixtureRepository::new()) as RepositoryState;
    let bind_addr = config.bind_addr;
    let app_state = AppState::new(repo, config);

    let _session_log = app_state.session.subscribe(|session| match session.identity() {
        Some(identity) => tracing::debug!(
            role = %identity.role,
            session_id = %identity.session_id,
            "session changed: signed in"
        ),
        None => tracing::debug!("session changed: signed out"),
    });

    let app = create_router(app_state);
    let listener = TcpListener::bind(bind_addr).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);
    tracing::info!("API Documentation (Swagger UI) available at /swagger-ui");

    axum::serve(listener, app).await?;
    Ok(())
}
