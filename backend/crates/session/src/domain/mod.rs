//! Domain Layer
//!
//! Value objects, view-model entities and the data-access traits the
//! application layer depends on.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{dashboard::DashboardView, registration::RegistrationPayload};
pub use repository::{DashboardSource, RoleDirectory};
pub use value_object::{role::Role, route::Route};
