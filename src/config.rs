use std::net::SocketAddr;
use std::path::PathBuf;

use derive_builder::Builder;

use crate::error::SiteError;

#[derive(Builder, Debug, Clone)]
pub struct SiteConfig {
    #[builder(default = "SocketAddr::from(([127, 0, 0, 1], 8080))")]
    pub bind_addr: SocketAddr,
    #[builder(setter(into), default = "\"http://localhost:3000\".to_string()")]
    pub allowed_origin: String,
    /// replaces the builtin content when set
    #[builder(setter(into, strip_option), default)]
    pub content_path: Option<PathBuf>,
    #[builder(default = "tracing::Level::INFO")]
    pub log_level: tracing::Level,
}

impl SiteConfig {
    /// Read `SITE_*` variables from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, SiteError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SiteError> {
        let mut builder = SiteConfigBuilder::default();

        if let Some(addr) = lookup("SITE_BIND_ADDR") {
            let addr = addr.parse().map_err(|e: std::net::AddrParseError| SiteError::InvalidConfig {
                key: "SITE_BIND_ADDR",
                reason: e.to_string(),
            })?;
            builder.bind_addr(addr);
        }
        if let Some(origin) = lookup("SITE_ALLOWED_ORIGIN") {
            builder.allowed_origin(origin);
        }
        if let Some(path) = lookup("SITE_CONTENT_PATH").filter(|p| !p.is_empty()) {
            builder.content_path(path);
        }
        if let Some(level) = lookup("SITE_LOG_LEVEL") {
            let level = level.parse().map_err(|_| SiteError::InvalidConfig {
                key: "SITE_LOG_LEVEL",
                reason: format!("`{level}` is not one of trace, debug, info, warn, error"),
            })?;
            builder.log_level(level);
        }

        builder.build().map_err(|e| SiteError::InvalidConfig {
            key: "SITE_*",
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert!(config.content_path.is_none());
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("SITE_BIND_ADDR", "0.0.0.0:9000"),
            ("SITE_ALLOWED_ORIGIN", "https://belgianwaffle.com"),
            ("SITE_CONTENT_PATH", "/srv/site.json"),
            ("SITE_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.allowed_origin, "https://belgianwaffle.com");
        assert_eq!(config.content_path, Some(PathBuf::from("/srv/site.json")));
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_invalid_values() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig { key: "SITE_BIND_ADDR", .. }));

        let err = SiteConfig::from_lookup(lookup(&[("SITE_LOG_LEVEL", "loud")])).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig { key: "SITE_LOG_LEVEL", .. }));
    }
}
