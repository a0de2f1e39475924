//! Gateway configuration, populated from environment variables.

use std::net::SocketAddr;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid socket address (e.g. 0.0.0.0:3000), got {value:?}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Runtime configuration for the gateway.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `DREAMDB_BIND` | `0.0.0.0:3000` | TCP socket address to listen on |
/// | `DREAMDB_MAX_BODY_BYTES` | `1048576` | Largest accepted request body |
/// | `DREAMDB_NAME` | `dreamdb-gateway` | Name reported by the status endpoint |
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,

    /// Request bodies larger than this are rejected with 413.
    pub max_body_bytes: usize,

    /// Human-readable gateway name, shown in the status document.
    pub name: String,
}

impl GatewayConfig {
    pub const DEFAULT_BIND: &'static str = "0.0.0.0:3000";
    pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
    pub const DEFAULT_NAME: &'static str = "dreamdb-gateway";

    /// Populate config from the process environment, applying defaults where absent.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("DREAMDB_BIND").unwrap_or_else(|| Self::DEFAULT_BIND.into());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: "DREAMDB_BIND",
                value: bind_raw.clone(),
            })?;

        let max_body_bytes = match lookup("DREAMDB_MAX_BODY_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidNumber {
                    var: "DREAMDB_MAX_BODY_BYTES",
                    value: v,
                })?,
            None => Self::DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            bind_addr,
            max_body_bytes,
            name: lookup("DREAMDB_NAME").unwrap_or_else(|| Self::DEFAULT_NAME.into()),
        })
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_body_bytes: Self::DEFAULT_MAX_BODY_BYTES,
            name: Self::DEFAULT_NAME.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = GatewayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert_eq!(config.name, "dreamdb-gateway");
    }

    #[test]
    fn reads_overrides() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("DREAMDB_BIND", "127.0.0.1:8080"),
            ("DREAMDB_MAX_BODY_BYTES", "2048"),
            ("DREAMDB_NAME", "staging"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.max_body_bytes, 2048);
        assert_eq!(config.name, "staging");
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = GatewayConfig::from_lookup(lookup(&[("DREAMDB_BIND", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn rejects_zero_body_limit() {
        let err =
            GatewayConfig::from_lookup(lookup(&[("DREAMDB_MAX_BODY_BYTES", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }

    #[test]
    fn default_matches_unset_environment() {
        let from_env = GatewayConfig::from_lookup(lookup(&[])).unwrap();
        let default = GatewayConfig::default();
        assert_eq!(from_env.bind_addr, default.bind_addr);
        assert_eq!(from_env.max_body_bytes, default.max_body_bytes);
    }
}
