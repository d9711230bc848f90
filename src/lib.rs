use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Viewer session and the rules built on top of it.
pub mod auth;
pub mod guard;
pub mod navigation;
pub mod session;

// Data and presentation.
pub mod fixtures;
pub mod models;
pub mod repository;
pub mod views;

// HTTP plumbing.
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use auth::ActiveSession;
use routes::{dashboard, entry};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use repository::{FixtureRepository, RepositoryState};
pub use session::{SessionState, SessionStore};

/// ApiDoc
///
/// OpenAPI document of every route and view model, served at `/api-docs/openapi.json`
/// and browsable through Swagger UI at `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::entry, handlers::login, handlers::logout, handlers::get_session,
        handlers::get_navigation, handlers::get_public_dashboard,
        handlers::get_government_dashboard, handlers::get_dealer_dashboard,
        handlers::get_water_levels, handlers::get_drought_prediction,
        handlers::get_tanker_orders, handlers::submit_tanker_order
    ),
    components(
        schemas(
            session::Role, models::LoginRequest, models::LoginScreen, models::SessionView,
            models::NavigationMenu, navigation::MenuItem, navigation::NavigationEntry,
            navigation::Icon, models::ShellView, models::PublicDashboard,
            models::GovernmentDashboard, models::DealerDashboard, models::WaterLevelsPage,
            models::DroughtPredictionPage, models::TankerOrderPage,
            models::TankerOrderRequest, models::TankerOrderReceipt, error::ErrorBody,
        )
    ),
    tags(
        (name = "neer-manthan", description = "Neer Manthan water dashboard API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single container of everything a request may need: the viewer session, the data
/// layer and the configuration. Cloning is cheap; all parts are shared.
#[derive(Clone)]
pub struct AppState {
    /// The one in-memory viewer session of this process.
    pub session: SessionState,
    /// Read-only water-resource data.
    pub repo: RepositoryState,
    pub config: AppConfig,
}

impl AppState {
    /// A fresh, logged-out state over the given data layer.
    pub fn new(repo: RepositoryState, config: AppConfig) -> Self {
        Self {
            session: SessionState::default(),
            repo,
            config,
        }
    }
}

// --- Axum FromRef Extractor Implementations ---

impl FromRef<AppState> for SessionState {
    fn from_ref(app_state: &AppState) -> SessionState {
        app_state.session.clone()
    }
}

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// protected_guard
///
/// Middleware in front of every registered `/dashboard/*` route (unregistered paths below
/// `/dashboard` are guarded by `handlers::fallback`). Extracting `ActiveSession`
/// runs the protected-area guard; an anonymous request is answered with the guard's
/// redirect and never reaches a handler.
async fn protected_guard(_session: ActiveSession, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the routing table, the guard layer and the observability stack, and binds
/// the application state.
pub fn create_router(state: AppState) -> Router {
    let cors = match state.config.cors_allowed_origin.clone() {
        Some(origin) => CorsLayer::new().allow_origin(origin),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods(Any)
    .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(entry::entry_routes())
        // `layer` rather than `route_layer`: a wrong method on a dashboard route is guarded too.
        .merge(
            dashboard::dashboard_routes().layer(middleware::from_fn_with_state(
                state.clone(),
                protected_guard,
            )),
        )
        .fallback(handlers::fallback)
        .with_state(state);

    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Span for every request, carrying method, uri and the `x-request-id` so that all log
/// lines of one request correlate.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
