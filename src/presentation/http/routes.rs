// src/presentation/http/routes.rs
use crate::presentation::http::controllers::users;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState, security_disabled: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let mut router = Router::new()
        .route("/health", get(health))
        .route(
            "/api/rest/users",
            get(users::list_users).post(users::create_user),
        )
        .route("/api/rest/users/login", post(users::login))
        .route(
            "/api/rest/users/{user_id}",
            get(users::get_user).delete(users::remove_user),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state));

    // Hardening headers stay on unless the development-only toggle is set.
    if !security_disabled {
        router = router
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            ));
    }

    router
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
