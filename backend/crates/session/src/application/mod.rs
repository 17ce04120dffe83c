//! Application Layer
//!
//! Use cases, the gateway facade and configuration.

pub mod authenticate;
pub mod config;
pub mod dashboard;
pub mod gateway;
pub mod register_patient;
pub mod scope;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateOutput, AuthenticateUseCase};
pub use config::GatewayConfig;
pub use dashboard::LoadDashboardUseCase;
pub use gateway::SessionGateway;
pub use register_patient::RegisterPatientUseCase;
pub use scope::CallScope;
