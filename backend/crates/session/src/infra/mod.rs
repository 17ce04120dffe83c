//! Infrastructure Layer
//!
//! In-memory implementations of the domain data-access traits.

pub mod seeded_dashboards;
pub mod static_directory;

pub use seeded_dashboards::SeededDashboardSource;
pub use static_directory::StaticRoleDirectory;
