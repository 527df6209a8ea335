//! Server configuration.

use taskboard_core::ApiKey;

/// Configuration for the taskboard HTTP server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host to bind (default `"127.0.0.1"`).
    pub host: String,
    /// Port to bind (default `3000`; `0` picks a free port).
    pub port: u16,
    /// Secret expected in the `api-key` header. `None` makes every request
    /// fail with 500 rather than skipping the check.
    pub api_key: Option<ApiKey>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            api_key: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let cfg = ServerConfig {
            host: "0.0.0.0".into(),
            port: 8080,
            ..ServerConfig::default()
        };
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn debug_hides_api_key() {
        let cfg = ServerConfig {
            api_key: Some(ApiKey::new("hunter2")),
            ..ServerConfig::default()
        };
        assert!(!format!("{cfg:?}").contains("hunter2"));
    }
}
