//! Session Gateway
//!
//! The in-process contract the front end calls at login and registration
//! submit. Each call is independent: the gateway only reads the directory and
//! its config, so any number of calls may be in flight at once.

use std::sync::Arc;

use crate::application::authenticate::{AuthenticateInput, AuthenticateOutput, AuthenticateUseCase};
use crate::application::config::GatewayConfig;
use crate::application::register_patient::RegisterPatientUseCase;
use crate::application::scope::CallScope;
use crate::domain::entity::registration::RegistrationPayload;
use crate::domain::repository::RoleDirectory;
use crate::domain::value_object::route::Route;
use crate::error::GatewayResult;
use crate::infra::StaticRoleDirectory;

pub struct SessionGateway<D = StaticRoleDirectory>
where
    D: RoleDirectory,
{
    directory: Arc<D>,
    config: Arc<GatewayConfig>,
}

impl<D> Clone for SessionGateway<D>
where
    D: RoleDirectory,
{
    fn clone(&self) -> Self {
        Self {
            directory: self.directory.clone(),
            config: self.config.clone(),
        }
    }
}

impl SessionGateway<StaticRoleDirectory> {
    /// Gateway over the compiled-in demo accounts.
    pub fn demo(config: GatewayConfig) -> Self {
        Self::new(Arc::new(StaticRoleDirectory::new()), Arc::new(config))
    }
}

impl<D> SessionGateway<D>
where
    D: RoleDirectory + Send + Sync,
{
    pub fn new(directory: Arc<D>, config: Arc<GatewayConfig>) -> Self {
        Self { directory, config }
    }

    /// Landing route for the email's role, or `InvalidCredentials`.
    pub async fn authenticate(&self, email: &str, password: &str) -> GatewayResult<Route> {
        self.sign_in(email, password).await.map(|out| out.route)
    }

    /// Same as [`authenticate`](Self::authenticate), keeping the resolved role.
    pub async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<AuthenticateOutput> {
        self.authenticate_use_case()
            .execute(credentials(email, password))
            .await
    }

    pub async fn register_patient(&self, payload: RegistrationPayload) -> GatewayResult<()> {
        self.register_use_case().execute(payload).await
    }

    /// `None` when `scope` was disposed before the call settled.
    pub async fn authenticate_within(
        &self,
        scope: &CallScope,
        email: &str,
        password: &str,
    ) -> Option<GatewayResult<Route>> {
        self.authenticate_use_case()
            .execute_within(scope, credentials(email, password))
            .await
            .map(|result| result.map(|out| out.route))
    }

    /// `None` when `scope` was disposed before the call settled.
    pub async fn register_patient_within(
        &self,
        scope: &CallScope,
        payload: RegistrationPayload,
    ) -> Option<GatewayResult<()>> {
        self.register_use_case()
            .execute_within(scope, payload)
            .await
    }

    fn authenticate_use_case(&self) -> AuthenticateUseCase<D> {
        AuthenticateUseCase::new(self.directory.clone(), self.config.clone())
    }

    fn register_use_case(&self) -> RegisterPatientUseCase {
        RegisterPatientUseCase::new(self.config.clone())
    }
}

fn credentials(email: &str, password: &str) -> AuthenticateInput {
    AuthenticateInput {
        email: email.to_string(),
        password: password.to_string(),
    }
}
