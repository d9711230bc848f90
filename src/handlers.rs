use crate::{
    AppState,
    auth::ActiveSession,
    error::{AppError, ErrorBody},
    guard::{self, GuardDecision, GuardKind},
    models::{
        DealerDashboard, DroughtPredictionPage, GovernmentDashboard, LoginRequest, LoginScreen,
        NavigationMenu, PublicDashboard, SessionView, TankerOrderPage, TankerOrderReceipt,
        TankerOrderRequest, WaterLevelsPage,
    },
    navigation::{DASHBOARD_PREFIX, ENTRY_ROUTE},
    session::SessionState,
    views,
};
use axum::{
    Json,
    extract::{OriginalUri, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

// --- Filter Structs ---

/// WaterLevelFilter
///
/// Query parameters of the water levels page (GET /dashboard/water-levels).
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct WaterLevelFilter {
    /// Restrict the page to one state. Absent or `all` shows every district.
    pub state: Option<String>,
}

// --- Entry Handlers ---

/// entry
///
/// [Entry Route] The login screen. A viewer who already has a session never sees the form:
/// the entry guard sends them on to the landing route of their role.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Login screen", body = LoginScreen),
        (status = 303, description = "Already signed in; redirect to the role's landing route")
    )
)]
pub async fn entry(State(session): State<SessionState>) -> Response {
    match guard::decide(GuardKind::Entry, &session.current()) {
        GuardDecision::Redirect(to) => Redirect::to(&to).into_response(),
        GuardDecision::Render => Json(views::login_screen()).into_response(),
    }
}

/// login
///
/// [Entry Route] Signs a viewer in with a role and a display name. The password field is
/// accepted and ignored. A blank name is rejected with a validation message and leaves the
/// session untouched; otherwise the viewer is redirected to their landing route.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 303, description = "Signed in; redirect to the role's landing route"),
        (status = 422, description = "Blank name", body = ErrorBody)
    )
)]
pub async fn login(
    State(session): State<SessionState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Redirect, AppError> {
    let signed_in = session.login(payload.role, &payload.name)?;

    match guard::decide(GuardKind::Entry, &signed_in) {
        GuardDecision::Redirect(to) => Ok(Redirect::to(&to)),
        // A successful login always carries a role; render the entry screen otherwise.
        GuardDecision::Render => Ok(Redirect::to(ENTRY_ROUTE)),
    }
}

/// logout
///
/// [Entry Route] Ends the session and returns to the entry screen. Safe to repeat.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 303, description = "Signed out; redirect to the entry screen"))
)]
pub async fn logout(State(session): State<SessionState>) -> Redirect {
    session.logout();
    Redirect::to(ENTRY_ROUTE)
}

/// get_session
///
/// [Entry Route] The current session as the client should display it.
#[utoipa::path(
    get,
    path = "/session",
    responses((status = 200, description = "Current session", body = SessionView))
)]
pub async fn get_session(State(session): State<SessionState>) -> Json<SessionView> {
    let current = session.current();
    Json(SessionView {
        authenticated: current.is_authenticated(),
        role: current.role(),
        display_name: current.display_name().to_string(),
    })
}

// --- Dashboard Handlers ---

/// get_navigation
///
/// [Dashboard Route] The sidebar menu of the signed-in role.
#[utoipa::path(
    get,
    path = "/dashboard/navigation",
    responses(
        (status = 200, description = "Navigation menu", body = NavigationMenu),
        (status = 303, description = "Not signed in; redirect to the entry screen")
    )
)]
pub async fn get_navigation(
    ActiveSession(identity): ActiveSession,
    OriginalUri(uri): OriginalUri,
) -> Json<NavigationMenu> {
    Json(views::navigation_menu(identity.role, uri.path()))
}

/// get_public_dashboard
///
/// [Dashboard Route] Water status overview for the public.
#[utoipa::path(
    get,
    path = "/dashboard/public",
    responses(
        (status = 200, description = "Public dashboard", body = PublicDashboard),
        (status = 303, description = "Not signed in; redirect to the entry screen")
    )
)]
pub async fn get_public_dashboard(
    ActiveSession(identity): ActiveSession,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Json<PublicDashboard> {
    Json(views::public_dashboard(state.repo.as_ref(), &identity, uri.path()).await)
}

/// get_government_dashboard
///
/// [Dashboard Route] National command center: risk, rainfall, reservoirs, predictions,
/// tankers and alerts.
#[utoipa::path(
    get,
    path = "/dashboard/government",
    responses(
        (status = 200, description = "Government dashboard", body = GovernmentDashboard),
        (status = 303, description = "Not signed in; redirect to the entry screen")
    )
)]
pub async fn get_government_dashboard(
    ActiveSession(identity): ActiveSession,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Json<GovernmentDashboard> {
    Json(views::government_dashboard(state.repo.as_ref(), &identity, uri.path()).await)
}

/// get_dealer_dashboard
///
/// [Dashboard Route] Order queue, route allocations and dispatch status for dealers.
#[utoipa::path(
    get,
    path = "/dashboard/dealer",
    responses(
        (status = 200, description = "Dealer dashboard", body = DealerDashboard),
        (status = 303, description = "Not signed in; redirect to the entry screen")
    )
)]
pub async fn get_dealer_dashboard(
    ActiveSession(identity): ActiveSession,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Json<DealerDashboard> {
    Json(views::dealer_dashboard(state.repo.as_ref(), &identity, uri.path()).await)
}

/// get_water_levels
///
/// [Dashboard Route] District water levels, optionally for a single state, with sensor
/// readings and the latest critical and warning alerts.
#[utoipa::path(
    get,
    path = "/dashboard/water-levels",
    params(WaterLevelFilter),
    responses(
        (status = 200, description = "Water levels", body = WaterLevelsPage),
        (status = 303, description = "Not signed in; redirect to the entry screen")
    )
)]
pub async fn get_water_levels(
    ActiveSession(identity): ActiveSession,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(filter): Query<WaterLevelFilter>,
) -> Json<WaterLevelsPage> {
    Json(
        views::water_levels_page(
            state.repo.as_ref(),
            &identity,
            uri.path(),
            filter.state.as_deref(),
        )
        .await,
    )
}

/// get_drought_prediction
///
/// [Dashboard Route] The precomputed drought forecasts.
#[utoipa::path(
    get,
    path = "/dashboard/drought-prediction",
    responses(
        (status = 200, description = "Drought predictions", body = DroughtPredictionPage),
        (status = 303, description = "Not signed in; redirect to the entry screen")
    )
)]
pub async fn get_drought_prediction(
    ActiveSession(identity): ActiveSession,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Json<DroughtPredictionPage> {
    Json(views::drought_prediction_page(state.repo.as_ref(), &identity, uri.path()).await)
}

/// get_tanker_orders
///
/// [Dashboard Route] The order form and the order history.
#[utoipa::path(
    get,
    path = "/dashboard/tanker-order",
    responses(
        (status = 200, description = "Tanker orders", body = TankerOrderPage),
        (status = 303, description = "Not signed in; redirect to the entry screen")
    )
)]
pub async fn get_tanker_orders(
    ActiveSession(identity): ActiveSession,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Json<TankerOrderPage> {
    Json(views::tanker_order_page(state.repo.as_ref(), &identity, uri.path()).await)
}

/// submit_tanker_order
///
/// [Dashboard Route] Acknowledges an order form. Nothing is stored or dispatched.
#[utoipa::path(
    post,
    path = "/dashboard/tanker-order",
    request_body = TankerOrderRequest,
    responses(
        (status = 201, description = "Order acknowledged", body = TankerOrderReceipt),
        (status = 422, description = "Invalid order form", body = ErrorBody),
        (status = 303, description = "Not signed in; redirect to the entry screen")
    )
)]
pub async fn submit_tanker_order(
    ActiveSession(identity): ActiveSession,
    Json(payload): Json<TankerOrderRequest>,
) -> Result<(StatusCode, Json<TankerOrderReceipt>), AppError> {
    let receipt = views::tanker_order_receipt(&payload)?;
    tracing::info!(
        role = %identity.role,
        session_id = %identity.session_id,
        order_id = %receipt.order_id,
        district = %receipt.district,
        quantity = receipt.quantity,
        "tanker order acknowledged"
    );
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// fallback
///
/// Answers every request no route matched. Paths inside the dashboard subtree are still
/// guarded, so an anonymous viewer is redirected to `/` whether or not the page exists and
/// cannot tell which dashboard routes are registered. Everything else is a plain `404`.
pub async fn fallback(
    State(session): State<SessionState>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let path = uri.path();
    let in_dashboard = path == DASHBOARD_PREFIX.trim_end_matches('/')
        || path.starts_with(DASHBOARD_PREFIX);

    if in_dashboard {
        if let GuardDecision::Redirect(to) =
            guard::decide(GuardKind::Protected, &session.current())
        {
            tracing::debug!(%path, %to, "anonymous viewer redirected from unknown page");
            return Redirect::to(&to).into_response();
        }
    }

    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: format!("No page at `{path}`."),
        }),
    )
        .into_response()
}
