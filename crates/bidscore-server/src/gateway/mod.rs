//! HTTP gateway (Axum) for bid scoring.
//!
//! Two routes: `GET /health` (unauthenticated) and `POST /score`, which
//! authenticates the bearer credential, applies the route's role gate, and
//! hands the decoded request to [`bidscore::score_bid`].

#![allow(missing_docs)]

pub mod auth;
pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderMap, Method, StatusCode, header, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use bidscore::{ROLE_ADMIN, ROLE_USER};

pub use auth::AuthenticatedCaller;
pub use handler::{ScoreRequest, score_handler};
pub use state::HandlerState;

pub const BIDSCORE_STATUS_HEADER: &str = "X-Bidscore-Status";
pub const BIDSCORE_STATUS_HEALTHY: &str = "healthy";
pub const BIDSCORE_STATUS_SCORED: &str = "scored";

pub const SERVICE_NAME: &str = "bid-scoring";

/// Roles admitted to `POST /score` by the transport gate.
pub const SCORE_ROUTE_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

pub fn create_router_with_state(state: HandlerState) -> Router {
    let cors = cors_layer(&state);

    Router::new()
        .route("/health", get(health_handler))
        .route("/score", post(score_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(state: &HandlerState) -> CorsLayer {
    let origin = match &state.allowed_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub role_access: &'static [&'static str],
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        BIDSCORE_STATUS_HEADER,
        HeaderValue::from_static(BIDSCORE_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: BIDSCORE_STATUS_HEALTHY,
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            role_access: SCORE_ROUTE_ROLES,
        }),
    )
        .into_response()
}
