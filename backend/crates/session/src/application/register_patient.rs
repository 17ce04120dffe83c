//! Register Patient Use Case
//!
//! Accepts a patient registration. Nothing is stored: the directory is
//! unchanged afterwards.

use std::sync::Arc;

use crate::application::config::{GatewayConfig, simulate_latency};
use crate::application::scope::CallScope;
use crate::domain::entity::registration::RegistrationPayload;
use crate::error::{GatewayError, GatewayResult};

/// Register patient use case
pub struct RegisterPatientUseCase {
    config: Arc<GatewayConfig>,
}

impl RegisterPatientUseCase {
    pub fn new(config: Arc<GatewayConfig>) -> Self {
        Self { config }
    }

    pub async fn execute(&self, payload: RegistrationPayload) -> GatewayResult<()> {
        simulate_latency(self.config.registration_latency).await;

        if !payload.has_credentials() {
            tracing::debug!(
                email_present = !payload.email.is_empty(),
                password_present = !payload.password.is_empty(),
                "Registration rejected"
            );
            return Err(GatewayError::InvalidRegistrationData);
        }

        tracing::info!(
            insurance = payload.insurance.is_some(),
            "Patient registration accepted"
        );

        Ok(())
    }

    /// Scoped variant; `None` once `scope` is disposed.
    pub async fn execute_within(
        &self,
        scope: &CallScope,
        payload: RegistrationPayload,
    ) -> Option<GatewayResult<()>> {
        if scope.is_disposed() {
            return None;
        }

        tokio::select! {
            biased;
            _ = scope.disposed() => {
                tracing::debug!("Registration discarded, caller scope disposed");
                None
            }
            result = self.execute(payload) => (!scope.is_disposed()).then_some(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(email: &str, password: &str) -> RegistrationPayload {
        RegistrationPayload {
            name: "Daniel Silva".to_string(),
            tax_id: "123.456.789-00".to_string(),
            birth_date: "1990-01-01".to_string(),
            phone: "(11) 99999-9999".to_string(),
            insurance: Some("Plano Saúde XYZ".to_string()),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn use_case() -> RegisterPatientUseCase {
        RegisterPatientUseCase::new(Arc::new(GatewayConfig::instant()))
    }

    #[tokio::test]
    async fn test_accepts_credentials() {
        assert_eq!(use_case().execute(payload("john@example.com", "pw")).await, Ok(()));
    }

    #[tokio::test]
    async fn test_rejects_missing_email_or_password() {
        let uc = use_case();
        assert_eq!(
            uc.execute(payload("", "pw")).await,
            Err(GatewayError::InvalidRegistrationData)
        );
        assert_eq!(
            uc.execute(payload("sss@seila.com", "")).await,
            Err(GatewayError::InvalidRegistrationData)
        );
    }

    #[tokio::test]
    async fn test_disposed_scope_returns_none() {
        let scope = CallScope::new();
        scope.dispose();
        assert_eq!(use_case().execute_within(&scope, payload("a@b.com", "p")).await, None);
    }
}
