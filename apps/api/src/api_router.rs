use axum::Router;
use axum::routing::get;
use memberlens_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = cors::build_cors_layer(frontend_url)?;

    let directory_routes = Router::new()
        .route(
            "/api/users/{id}",
            get(handlers::users::user_info_handler),
        )
        .route(
            "/api/users/{id}/memberships",
            get(handlers::memberships::user_memberships_handler),
        )
        .route(
            "/api/site-users",
            get(handlers::site_users::list_site_users_handler),
        )
        .route(
            "/api/site-users/resolve",
            get(handlers::site_users::resolve_login_name_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(directory_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
