//! Server configuration read from the environment (and `.env`).

use anyhow::Context;
use session::GatewayConfig;
use std::env;

const DEFAULT_PORT: u16 = 31113;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub gateway: GatewayConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("API_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("API_PORT is not a port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        let defaults = GatewayConfig::default();
        let login_ms = read_ms("SESSION_LOGIN_LATENCY_MS", defaults.login_latency_ms())?;
        let registration_ms = read_ms(
            "SESSION_REGISTRATION_LATENCY_MS",
            defaults.registration_latency_ms(),
        )?;

        Ok(Self {
            port,
            frontend_origins,
            gateway: GatewayConfig::with_latencies_ms(login_ms, registration_ms),
        })
    }
}

fn read_ms(name: &str, default: u64) -> anyhow::Result<u64> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number of milliseconds, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
