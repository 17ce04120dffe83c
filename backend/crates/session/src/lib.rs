//! Session (Vida hospital front end) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Roles, routes, view models, data-access traits
//! - `application/` - Use cases, the session gateway, configuration
//! - `infra/` - Static demo directory and seeded dashboard data
//! - `presentation/` - HTTP handlers, DTOs, registration form, router
//!
//! ## Features
//! - Login resolves a known email to its role's landing route
//! - Patient registration accepted without being stored
//! - Caller-owned [`CallScope`] to discard results of abandoned calls
//! - Per-role dashboard view models and the client route table
//!
//! ## Security Model
//! None to speak of: the directory is three hardcoded demo accounts and
//! passwords are only checked for being non-empty. Put a real identity
//! provider behind [`RoleDirectory`] before exposing this anywhere.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{CallScope, GatewayConfig, SessionGateway};
pub use domain::{DashboardSource, RegistrationPayload, Role, RoleDirectory, Route};
pub use error::{ApiError, GatewayError, GatewayResult};
pub use presentation::router::{session_router, session_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
