//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::value_object::role::Role;
use crate::domain::value_object::route::{
    LOGIN_PATH, REGISTRATION_PATH, Route, RouteMatch, sections_of,
};

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Where the client navigates next
    pub route: String,
    pub role: Role,
}

// ============================================================================
// Registration
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    /// Registration does not sign in; the client goes back to the login page
    pub login_route: String,
}

impl Default for RegistrationResponse {
    fn default() -> Self {
        Self {
            login_route: LOGIN_PATH.to_string(),
        }
    }
}

// ============================================================================
// Route table
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRoutes {
    pub role: Role,
    pub landing: String,
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableResponse {
    pub login: String,
    pub registration: String,
    pub dashboards: Vec<DashboardRoutes>,
}

impl RouteTableResponse {
    pub fn build() -> Self {
        let dashboards = Role::ALL
            .into_iter()
            .map(|role| DashboardRoutes {
                role,
                landing: Route::landing(role).into_string(),
                sections: sections_of(role).map(|s| s.pattern()).collect(),
            })
            .collect();

        Self {
            login: LOGIN_PATH.to_string(),
            registration: REGISTRATION_PATH.to_string(),
            dashboards,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub path: String,
    #[serde(rename = "match")]
    pub matched: RouteMatch,
    /// Dashboard owning the page, if any
    pub role: Option<Role>,
    /// Set when the client must navigate elsewhere
    pub redirect: Option<String>,
}

impl ResolveResponse {
    pub fn new(path: String, matched: RouteMatch) -> Self {
        let redirect = matched.redirect().map(|r| r.into_string());
        Self {
            path,
            role: matched.role(),
            matched,
            redirect,
        }
    }
}
