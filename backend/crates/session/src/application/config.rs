//! Application Configuration
//!
//! Configuration for the session gateway.

use std::time::Duration;

/// Gateway configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Simulated latency before a login resolves (1 second)
    pub login_latency: Duration,
    /// Simulated latency before a registration resolves (1.5 seconds)
    pub registration_latency: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            login_latency: Duration::from_millis(1000),
            registration_latency: Duration::from_millis(1500),
        }
    }
}

impl GatewayConfig {
    /// No simulated latency (tests, local scripting)
    pub fn instant() -> Self {
        Self {
            login_latency: Duration::ZERO,
            registration_latency: Duration::ZERO,
        }
    }

    pub fn with_latencies_ms(login_ms: u64, registration_ms: u64) -> Self {
        Self {
            login_latency: Duration::from_millis(login_ms),
            registration_latency: Duration::from_millis(registration_ms),
        }
    }

    pub fn login_latency_ms(&self) -> u64 {
        u64::try_from(self.login_latency.as_millis()).unwrap_or(u64::MAX)
    }

    pub fn registration_latency_ms(&self) -> u64 {
        u64::try_from(self.registration_latency.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Wait out a simulated latency. Zero returns immediately.
pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
