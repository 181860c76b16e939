//! Action server configuration.

use serde::Deserialize;

/// Listen configuration for the webhook server.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (`HOST`, default "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port (`PORT`, default 5055 — the action-server port the
    /// dialogue engine expects).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5055
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| default_host()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5055);
    }
}
