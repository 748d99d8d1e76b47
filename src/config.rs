use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

/// Runtime settings read from the environment (and `.env`, if present).
///
/// | Variable | Default |
/// |---|---|
/// | `APP_HOST` | `0.0.0.0` |
/// | `APP_PORT` | `8080` |
/// | `MONGODB_URI` | unset: in-memory storage |
/// | `DB_NAME` | `catalog` |
/// | `DB_PRODUCTS_COLLECTION` | `products` |
/// | `RUST_LOG` | `info` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: Option<String>,
    pub db_name: String,
    pub products_collection: String,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            mongodb_uri: None,
            db_name: "catalog".to_string(),
            products_collection: "products".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        Ok(Self {
            host: get("APP_HOST").unwrap_or(defaults.host),
            port,
            mongodb_uri: get("MONGODB_URI"),
            db_name: get("DB_NAME").unwrap_or(defaults.db_name),
            products_collection: get("DB_PRODUCTS_COLLECTION")
                .unwrap_or(defaults.products_collection),
            log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "8081"),
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("DB_NAME", "shop"),
            ("DB_PRODUCTS_COLLECTION", "items"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);
        assert_eq!(config.mongodb_uri.as_deref(), Some("mongodb://localhost:27017"));
        assert_eq!(config.db_name, "shop");
        assert_eq!(config.products_collection, "items");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config =
            AppConfig::from_lookup(lookup(&[("MONGODB_URI", "  "), ("APP_PORT", "")])).unwrap();
        assert!(config.mongodb_uri.is_none());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_port() {
        let err = AppConfig::from_lookup(lookup(&[("APP_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
    }
}
