//! Gateway Error Types
//!
//! The two ways a gateway call can be rejected, plus the HTTP-level
//! failures around them, all rendered through `kernel::error::AppError`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::presentation::form::FormError;

/// Gateway result type alias
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Rejections of the session gateway.
///
/// Both are terminal. `InvalidCredentials` does not say whether the email or
/// the password was at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Unknown email or empty password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Empty email or empty password on registration
    #[error("Invalid registration data")]
    InvalidRegistrationData,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            GatewayError::InvalidRegistrationData => StatusCode::BAD_REQUEST,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::InvalidCredentials => ErrorKind::Unauthorized,
            GatewayError::InvalidRegistrationData => ErrorKind::BadRequest,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            GatewayError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            GatewayError::InvalidRegistrationData => {
                tracing::debug!(error = %self, "Registration rejected");
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Everything an HTTP handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Unknown dashboard: {0}")]
    UnknownDashboard(String),

    #[error(transparent)]
    Body(#[from] JsonRejection),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Gateway(err) => err.into_response(),
            ApiError::Form(err) => {
                tracing::debug!(error = %err, "Registration form rejected");
                AppError::bad_request(err.to_string())
                    .with_action("Type the same password in both fields")
                    .into_response()
            }
            ApiError::UnknownDashboard(role) => {
                tracing::debug!(role = %role, "Unknown dashboard requested");
                AppError::not_found(format!("Unknown dashboard: {role}")).into_response()
            }
            ApiError::Body(rejection) => AppError::from(rejection).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(GatewayError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            GatewayError::InvalidRegistrationData.to_string(),
            "Invalid registration data"
        );
    }

    #[test]
    fn test_status_matches_kind() {
        for err in [
            GatewayError::InvalidCredentials,
            GatewayError::InvalidRegistrationData,
        ] {
            assert_eq!(err.status_code().as_u16(), err.kind().status_code());
        }
    }

    #[test]
    fn test_app_error_carries_message_only() {
        let app = GatewayError::InvalidCredentials.to_app_error();
        assert_eq!(app.status_code(), 401);
        assert_eq!(app.message(), "Invalid credentials");
        assert!(app.action().is_none());
    }

    #[test]
    fn test_api_error_statuses() {
        let status = |err: ApiError| err.into_response().status();
        assert_eq!(
            status(GatewayError::InvalidCredentials.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status(FormError::PasswordMismatch.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(ApiError::UnknownDashboard("nurse".to_string())),
            StatusCode::NOT_FOUND
        );
    }
}
