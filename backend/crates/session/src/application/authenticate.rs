//! Authenticate Use Case
//!
//! Resolves an email/password pair to the landing route of the email's role.

use std::sync::Arc;

use crate::application::config::{GatewayConfig, simulate_latency};
use crate::application::scope::CallScope;
use crate::domain::repository::RoleDirectory;
use crate::domain::value_object::{email::LookupEmail, role::Role, route::Route};
use crate::error::{GatewayError, GatewayResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub email: String,
    /// Opaque; only checked for being non-empty
    pub password: String,
}

/// Authenticate output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticateOutput {
    pub role: Role,
    /// `/dashboard/<role>`
    pub route: Route,
}

/// Authenticate use case
pub struct AuthenticateUseCase<D>
where
    D: RoleDirectory,
{
    directory: Arc<D>,
    config: Arc<GatewayConfig>,
}

impl<D> AuthenticateUseCase<D>
where
    D: RoleDirectory + Send + Sync,
{
    pub fn new(directory: Arc<D>, config: Arc<GatewayConfig>) -> Self {
        Self { directory, config }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> GatewayResult<AuthenticateOutput> {
        simulate_latency(self.config.login_latency).await;

        let email = LookupEmail::new(&input.email);
        let role = self.directory.role_for(&email).await;

        match role {
            Some(role) if !input.password.is_empty() => {
                let route = Route::landing(role);
                tracing::info!(role = %role, route = %route, "Login resolved");
                Ok(AuthenticateOutput { role, route })
            }
            _ => {
                tracing::debug!(email_domain = %email.domain(), "Login rejected");
                Err(GatewayError::InvalidCredentials)
            }
        }
    }

    /// Like [`execute`](Self::execute), but gives up with `None` once `scope`
    /// is disposed. A result that lands after disposal is dropped too.
    pub async fn execute_within(
        &self,
        scope: &CallScope,
        input: AuthenticateInput,
    ) -> Option<GatewayResult<AuthenticateOutput>> {
        if scope.is_disposed() {
            return None;
        }

        tokio::select! {
            biased;
            _ = scope.disposed() => {
                tracing::debug!("Login discarded, caller scope disposed");
                None
            }
            result = self.execute(input) => (!scope.is_disposed()).then_some(result),
        }
    }
}
