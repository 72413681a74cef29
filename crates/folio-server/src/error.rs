// Page errors
// Decision: Collaborator failures are logged and surfaced as a generic 500
// page; nothing is retried

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::render;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The referenced record does not exist
    #[error("not found")]
    NotFound,
    /// Storage or identity provider failure
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, render::not_found_page()).into_response(),
            AppError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, render::server_error_page()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_status() {
        let response = AppError::from(anyhow::anyhow!("database unavailable")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
