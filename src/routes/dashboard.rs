use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Dashboard Router Module
///
/// The protected area. `create_router` wraps this router in the guard middleware, and each
/// handler additionally takes the `ActiveSession` extractor, so an anonymous request is
/// redirected to `/` before any view is composed.
///
/// Role dashboards are reachable by any signed-in role; the role only decides the menu and
/// the landing route.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        // GET /dashboard/navigation
        // Sidebar menu of the signed-in role.
        .route("/dashboard/navigation", get(handlers::get_navigation))
        // --- Role landing pages ---
        .route("/dashboard/public", get(handlers::get_public_dashboard))
        .route("/dashboard/government", get(handlers::get_government_dashboard))
        .route("/dashboard/dealer", get(handlers::get_dealer_dashboard))
        // --- Shared pages ---
        // GET /dashboard/water-levels?state=...
        .route("/dashboard/water-levels", get(handlers::get_water_levels))
        .route(
            "/dashboard/drought-prediction",
            get(handlers::get_drought_prediction),
        )
        // GET/POST /dashboard/tanker-order
        // The order form and history; POST acknowledges a submitted form.
        .route(
            "/dashboard/tanker-order",
            get(handlers::get_tanker_orders).post(handlers::submit_tanker_order),
        )
}
