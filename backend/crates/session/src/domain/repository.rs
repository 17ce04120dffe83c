//! Data-Access Traits
//!
//! Interfaces the use cases read through. Implementations live in `infra`.

use crate::domain::entity::dashboard::DashboardView;
use crate::domain::value_object::{email::LookupEmail, role::Role};

/// Email to role lookup.
///
/// Read-only: a registration never adds an entry.
#[trait_variant::make(RoleDirectory: Send)]
pub trait LocalRoleDirectory {
    /// Role registered for an already lower-cased email
    async fn role_for(&self, email: &LookupEmail) -> Option<Role>;
}

/// Source of per-role dashboard data.
#[trait_variant::make(DashboardSource: Send)]
pub trait LocalDashboardSource {
    /// A freshly built, caller-owned view for the role
    async fn load(&self, role: Role) -> DashboardView;
}
