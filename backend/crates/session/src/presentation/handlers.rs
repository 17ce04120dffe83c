//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{LoadDashboardUseCase, SessionGateway};
use crate::domain::entity::dashboard::DashboardView;
use crate::domain::repository::{DashboardSource, RoleDirectory};
use crate::domain::value_object::role::Role;
use crate::domain::value_object::route::resolve;
use crate::error::{ApiError, ApiResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, RegistrationResponse, ResolveQuery, ResolveResponse,
    RouteTableResponse,
};
use crate::presentation::form::RegistrationForm;

/// Shared state for session handlers
pub struct SessionAppState<D, S>
where
    D: RoleDirectory + Send + Sync + 'static,
    S: DashboardSource + Send + Sync + 'static,
{
    pub gateway: SessionGateway<D>,
    pub dashboards: Arc<S>,
}

impl<D, S> Clone for SessionAppState<D, S>
where
    D: RoleDirectory + Send + Sync + 'static,
    S: DashboardSource + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            dashboards: self.dashboards.clone(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/session/login
pub async fn login<D, S>(
    State(state): State<SessionAppState<D, S>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>>
where
    D: RoleDirectory + Send + Sync + 'static,
    S: DashboardSource + Send + Sync + 'static,
{
    let Json(req) = body?;

    let output = state.gateway.sign_in(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        route: output.route.into_string(),
        role: output.role,
    }))
}

// ============================================================================
// Registration
// ============================================================================

/// POST /api/session/register
pub async fn register<D, S>(
    State(state): State<SessionAppState<D, S>>,
    body: Result<Json<RegistrationForm>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegistrationResponse>)>
where
    D: RoleDirectory + Send + Sync + 'static,
    S: DashboardSource + Send + Sync + 'static,
{
    let Json(form) = body?;
    let payload = form.into_payload()?;

    state.gateway.register_patient(payload).await?;

    Ok((StatusCode::CREATED, Json(RegistrationResponse::default())))
}

// ============================================================================
// Routes
// ============================================================================

/// GET /api/session/routes
pub async fn route_table() -> Json<RouteTableResponse> {
    Json(RouteTableResponse::build())
}

/// GET /api/session/resolve?path=...
pub async fn resolve_route(Query(query): Query<ResolveQuery>) -> Json<ResolveResponse> {
    let matched = resolve(&query.path);
    Json(ResolveResponse::new(query.path, matched))
}

// ============================================================================
// Dashboards
// ============================================================================

/// GET /api/dashboard/{role}
pub async fn dashboard<D, S>(
    State(state): State<SessionAppState<D, S>>,
    Path(role): Path<String>,
) -> ApiResult<Json<DashboardView>>
where
    D: RoleDirectory + Send + Sync + 'static,
    S: DashboardSource + Send + Sync + 'static,
{
    let role = Role::from_code(&role).ok_or(ApiError::UnknownDashboard(role))?;

    let use_case = LoadDashboardUseCase::new(state.dashboards.clone());
    let view = use_case.execute(role).await;

    Ok(Json(view))
}
