/// HTTP route table
use crate::{api, state::AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
pub fn create_router(app_state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/user", get(api::users::list_users))
        .route("/user", post(api::users::create_user))
        .route("/user/:id", get(api::users::get_user))
        .route("/user/:id", put(api::users::update_user))
        .route("/user/:id", delete(api::users::delete_user));

    let public_routes = Router::new().route("/health", get(api::health::health));

    Router::new()
        .nest("/api", public_routes.merge(user_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
