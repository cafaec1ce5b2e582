pub mod preconfigured;

pub use preconfigured::{ConfigError, PreconfiguredRegistry};

use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub preconfigured_path: String,
    pub upstream_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let upstream_timeout_ms = std::env::var("UPSTREAM_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3020),
            preconfigured_path: std::env::var("PRECONFIGURED_CONNECTORS_PATH")
                .unwrap_or_else(|_| "preconfigured-connectors.yaml".to_string()),
            upstream_timeout: Duration::from_millis(upstream_timeout_ms),
        }
    }
}
