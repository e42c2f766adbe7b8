// web_app/config.rs - Server configuration
//
// Values come from the process environment (after `.env` is loaded by the
// server binary). Parsing takes a lookup function so tests do not have to
// touch the real environment.

use std::time::Duration;

use crate::web_app::error::ConfigError;

pub const BACKEND_URL_VAR: &str = "CINE_BACKEND_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "CINE_REQUEST_TIMEOUT_SECS";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the recommendation service, without trailing slash
    pub backend_url: String,
    /// Outbound request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = match lookup(BACKEND_URL_VAR) {
            Some(raw) if !raw.trim().is_empty() => parse_backend_url(&raw)?,
            _ => DEFAULT_BACKEND_URL.to_string(),
        };

        let request_timeout = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(parse_timeout(&raw)?),
            _ => None,
        };

        Ok(Self {
            backend_url,
            request_timeout,
        })
    }

    /// Full URL for a backend path such as `/recommend`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}

fn parse_backend_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(ConfigError::InvalidUrl {
            var: BACKEND_URL_VAR,
            value: raw.to_string(),
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidNumber {
            var: REQUEST_TIMEOUT_VAR,
            value: raw.to_string(),
        }),
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
        assert_eq!(config.backend_url, "http://127.0.0.1:8000");
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_backend_url_trailing_slash_trimmed() {
        let config = AppConfig::from_lookup(lookup(&[(
            BACKEND_URL_VAR,
            "https://movies.example.org/api/",
        )]))
        .unwrap();
        assert_eq!(config.backend_url, "https://movies.example.org/api");
        assert_eq!(
            config.endpoint("/recommend"),
            "https://movies.example.org/api/recommend"
        );
        assert_eq!(config.endpoint("trending"), "https://movies.example.org/api/trending");
    }

    #[test]
    fn test_backend_url_requires_scheme() {
        let err = AppConfig::from_lookup(lookup(&[(BACKEND_URL_VAR, "localhost:8000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (BACKEND_URL_VAR, "  "),
            (REQUEST_TIMEOUT_VAR, ""),
        ]))
        .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_timeout_parsing() {
        let config = AppConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_VAR, "30")])).unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));

        for bad in ["0", "-5", "ten", "1.5"] {
            let err = AppConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_VAR, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidNumber { .. }), "value {:?}", bad);
        }
    }
}
