//! Server configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime settings for the HTTP server and its database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (from MACMAHOME_HOST)
    pub host: String,
    /// Port to bind (from MACMAHOME_PORT)
    pub port: u16,
    /// SQLite file (from MACMAHOME_DATABASE). `None` uses the platform data directory.
    pub database_path: Option<PathBuf>,
    /// Allowed CORS origins (from MACMAHOME_CORS_ORIGINS, comma-separated)
    pub cors_origins: Option<Vec<String>>,
    /// Per-request deadline (from MACMAHOME_REQUEST_TIMEOUT_SECS)
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("MACMAHOME_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = lookup("MACMAHOME_PORT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_path = lookup("MACMAHOME_DATABASE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let cors_origins = lookup("MACMAHOME_CORS_ORIGINS").map(|s| {
            s.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        let request_timeout = lookup("MACMAHOME_REQUEST_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Self {
            host,
            port,
            database_path,
            cors_origins,
            request_timeout,
        }
    }

    /// Defaults for local development and tests, ignoring the environment.
    pub fn local() -> Self {
        Self::from_lookup(|_| None)
    }

    /// Create a local config with specific CORS origins.
    pub fn with_cors_origins(origins: Vec<String>) -> Self {
        Self {
            cors_origins: Some(origins),
            ..Self::local()
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn local_config_uses_defaults() {
        let config = ServerConfig::local();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.database_path.is_none());
        assert!(config.cors_origins.is_none());
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn reads_every_setting_from_lookup() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("MACMAHOME_HOST", "0.0.0.0"),
            ("MACMAHOME_PORT", "9000"),
            ("MACMAHOME_DATABASE", "/tmp/macmahome.db"),
            ("MACMAHOME_CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("MACMAHOME_REQUEST_TIMEOUT_SECS", "5"),
        ]));

        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/macmahome.db")));
        assert_eq!(
            config.cors_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn unparseable_numbers_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("MACMAHOME_PORT", "eighty"),
            ("MACMAHOME_REQUEST_TIMEOUT_SECS", "-1"),
        ]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn with_cors_origins_sets_only_origins() {
        let config = ServerConfig::with_cors_origins(vec!["http://a.test".to_string()]);
        assert_eq!(config.cors_origins, Some(vec!["http://a.test".to_string()]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
