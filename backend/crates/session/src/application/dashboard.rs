//! Load Dashboard Use Case
//!
//! Builds the view model for one role's dashboard.

use std::sync::Arc;

use crate::domain::entity::dashboard::DashboardView;
use crate::domain::repository::DashboardSource;
use crate::domain::value_object::role::Role;

pub struct LoadDashboardUseCase<S>
where
    S: DashboardSource,
{
    source: Arc<S>,
}

impl<S> LoadDashboardUseCase<S>
where
    S: DashboardSource + Send + Sync,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, role: Role) -> DashboardView {
        let view = self.source.load(role).await;
        tracing::debug!(role = %role, "Dashboard loaded");
        view
    }
}
