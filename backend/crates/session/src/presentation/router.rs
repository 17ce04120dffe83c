//! Session Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::{GatewayConfig, SessionGateway};
use crate::domain::repository::{DashboardSource, RoleDirectory};
use crate::infra::SeededDashboardSource;
use crate::presentation::handlers::{self, SessionAppState};

/// Router over the demo accounts and seeded dashboards.
///
/// Paths are relative; the binary nests this under `/api`.
pub fn session_router(config: GatewayConfig) -> Router {
    session_router_generic(SessionGateway::demo(config), SeededDashboardSource::new())
}

/// Router for any directory and dashboard source
pub fn session_router_generic<D, S>(gateway: SessionGateway<D>, dashboards: S) -> Router
where
    D: RoleDirectory + Send + Sync + 'static,
    S: DashboardSource + Send + Sync + 'static,
{
    let state = SessionAppState {
        gateway,
        dashboards: Arc::new(dashboards),
    };

    Router::new()
        .route("/session/login", post(handlers::login::<D, S>))
        .route("/session/register", post(handlers::register::<D, S>))
        .route("/session/routes", get(handlers::route_table))
        .route("/session/resolve", get(handlers::resolve_route))
        .route("/dashboard/{role}", get(handlers::dashboard::<D, S>))
        .with_state(state)
}
