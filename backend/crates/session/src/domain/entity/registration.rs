//! Registration Payload Entity
//!
//! What the registration page submits. Only the email and password are
//! checked; the remaining fields travel as given.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub name: String,
    /// Brazilian CPF, usually masked as `000.000.000-00`
    pub tax_id: String,
    pub birth_date: String,
    pub phone: String,
    #[serde(default)]
    pub insurance: Option<String>,
    pub email: String,
    pub password: String,
}

impl RegistrationPayload {
    /// Both email and password are non-empty.
    pub fn has_credentials(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}
