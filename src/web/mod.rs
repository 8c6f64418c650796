use axum::{http::StatusCode, response::{IntoResponse, Response}};
use sqlx::AnyPool;

use crate::utils::config::IdentifierCheck;

pub mod routes;
pub mod handlers;
pub mod session;
pub mod views;
pub mod extract;

#[derive(Debug, thiserror::Error)]
pub enum WebLayerError {
    #[error("{0}")]
    AskamaError(#[from] askama::Error),

    #[error("Session secret is unusable, it needs at least 64 bytes: {0}")]
    InvalidSessionSecret(String)
}

impl IntoResponse for WebLayerError {
    fn into_response(self) -> Response {
        log::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render the page").into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    pub identifier_check: IdentifierCheck
}
