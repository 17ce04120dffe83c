//! Presentation Layer
//!
//! HTTP handlers, DTOs, the registration form and the router.

pub mod dto;
pub mod form;
pub mod handlers;
pub mod router;

pub use handlers::SessionAppState;
pub use router::{session_router, session_router_generic};
