//! Static Role Directory
//!
//! The three demo accounts, compiled in. A stand-in for a real identity
//! provider.

use crate::domain::repository::RoleDirectory;
use crate::domain::value_object::{email::LookupEmail, role::Role};

/// Fixed email to role mapping. Keys are lower case.
pub const DEMO_ACCOUNTS: [(&str, Role); 3] = [
    ("paciente@vida.com", Role::Patient),
    ("medico@vida.com", Role::Professional),
    ("admin@vida.com", Role::Admin),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRoleDirectory;

impl StaticRoleDirectory {
    pub fn new() -> Self {
        Self
    }

    pub fn lookup(&self, email: &LookupEmail) -> Option<Role> {
        DEMO_ACCOUNTS
            .iter()
            .find(|(known, _)| *known == email.as_str())
            .map(|(_, role)| *role)
    }
}

impl RoleDirectory for StaticRoleDirectory {
    async fn role_for(&self, email: &LookupEmail) -> Option<Role> {
        self.lookup(email)
    }
}
