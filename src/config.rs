//! Client configuration
//!
//! A `ClientConfig` can be built in code, parsed from YAML, or read from the
//! environment:
//!
//! ```yaml
//! access_key: "ak-..."
//! secret_key: "sk-..."
//! base_url: "https://data.usabilla.com"
//! http:
//!   timeout_secs: 10
//!   headers:
//!     X-Request-Source: "reporting"
//! page_limit: 100
//! ```

use crate::auth::Credentials;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Environment variable holding the access key
pub const ENV_ACCESS_KEY: &str = "USABILLA_ACCESS_KEY";
/// Environment variable holding the secret key
pub const ENV_SECRET_KEY: &str = "USABILLA_SECRET_KEY";
/// Environment variable overriding the API root
pub const ENV_BASE_URL: &str = "USABILLA_BASE_URL";
/// Environment variable overriding the request timeout
pub const ENV_TIMEOUT_SECS: &str = "USABILLA_TIMEOUT_SECS";

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Public access key
    pub access_key: String,

    /// Secret key, never written back out
    #[serde(skip_serializing)]
    pub secret_key: String,

    /// API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP settings
    #[serde(default)]
    pub http: HttpConfig,

    /// `limit` sent with list requests that do not set one
    #[serde(default)]
    pub page_limit: Option<u32>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Override for the user agent
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

impl ClientConfig {
    /// Create a config for the production API
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            base_url: default_base_url(),
            http: HttpConfig::default(),
            page_limit: None,
        }
    }

    /// Point the client at another API root
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout, rounded up to whole seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout_secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self
    }

    /// Set the default page size
    #[must_use]
    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the configuration from `USABILLA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup (the environment, a map, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key = lookup(ENV_ACCESS_KEY).ok_or_else(|| Error::missing_field(ENV_ACCESS_KEY))?;
        let secret_key = lookup(ENV_SECRET_KEY).ok_or_else(|| Error::missing_field(ENV_SECRET_KEY))?;

        let mut config = Self::new(access_key, secret_key);
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.http.timeout_secs = raw
                .trim()
                .parse()
                .map_err(|e| Error::invalid_value(ENV_TIMEOUT_SECS, format!("{e}")))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check required fields and value ranges
    pub fn validate(&self) -> Result<()> {
        if self.access_key.trim().is_empty() {
            return Err(Error::missing_field("access_key"));
        }
        if self.secret_key.trim().is_empty() {
            return Err(Error::missing_field("secret_key"));
        }
        url::Url::parse(&self.base_url).context("base_url")?;
        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_value("http.timeout_secs", "must be positive"));
        }
        if self.page_limit == Some(0) {
            return Err(Error::invalid_value("page_limit", "must be positive"));
        }
        Ok(())
    }

    /// Credentials carried by this config
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.access_key, &self.secret_key)
    }

    /// Transport settings
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.http.timeout_secs));
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &self.http.headers {
            builder = builder.header(key, value);
        }
        builder.build()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .field("page_limit", &self.page_limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = ClientConfig::from_yaml_str(
            r#"
access_key: "ak"
secret_key: "sk"
"#,
        )
        .unwrap();

        assert_eq!(config.access_key, "ak");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.http.timeout_secs, 30);
        assert!(config.page_limit.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config = ClientConfig::from_yaml_str(
            r#"
access_key: "ak"
secret_key: "sk"
base_url: "http://localhost:8080"
http:
  timeout_secs: 5
  user_agent: "reporting-job/2.1"
  headers:
    X-Request-Source: "reporting"
page_limit: 100
"#,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.page_limit, Some(100));

        let http = config.http_client_config();
        assert_eq!(http.timeout, Duration::from_secs(5));
        assert_eq!(http.user_agent, "reporting-job/2.1");
        assert_eq!(http.base_url, "http://localhost:8080");
        assert_eq!(
            http.default_headers.get("X-Request-Source").map(String::as_str),
            Some("reporting")
        );
    }

    #[test]
    fn test_parse_missing_secret() {
        let err = ClientConfig::from_yaml_str("access_key: ak").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test_case("", "sk", "access_key" ; "empty access key")]
    #[test_case("ak", "  ", "secret_key" ; "blank secret key")]
    fn test_validate_missing_keys(access: &str, secret: &str, field: &str) {
        let err = ClientConfig::new(access, secret).validate().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { field: ref f } if f == field));
    }

    #[test]
    fn test_validate_ranges() {
        let config = ClientConfig::new("ak", "sk").with_page_limit(0);
        assert!(config.validate().is_err());

        let mut config = ClientConfig::new("ak", "sk");
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());

        let config = ClientConfig::new("ak", "sk").with_base_url("::nope::");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("base_url:"));
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_ACCESS_KEY, "ak"),
            (ENV_SECRET_KEY, "sk"),
            (ENV_BASE_URL, "http://127.0.0.1:3000"),
            (ENV_TIMEOUT_SECS, " 12 "),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.http.timeout_secs, 12);
        assert_eq!(config.credentials(), Credentials::new("ak", "sk"));
    }

    #[test]
    fn test_from_lookup_missing_key() {
        let err = ClientConfig::from_lookup(lookup_from(&[(ENV_ACCESS_KEY, "ak")])).unwrap_err();
        assert!(err.to_string().contains(ENV_SECRET_KEY));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            (ENV_ACCESS_KEY, "ak"),
            (ENV_SECRET_KEY, "sk"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test_case(Duration::from_millis(500), 1 ; "sub-second rounds up")]
    #[test_case(Duration::from_millis(1_500), 2 ; "fraction rounds up")]
    #[test_case(Duration::from_secs(7), 7 ; "whole seconds kept")]
    fn test_with_timeout_rounds_up(timeout: Duration, expected: u64) {
        let config = ClientConfig::new("ak", "sk").with_timeout(timeout);
        assert_eq!(config.http.timeout_secs, expected);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialize_omits_secret() {
        let config = ClientConfig::new("ak", "super-secret").with_page_limit(10);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("access_key: ak"));
        assert!(!yaml.contains("secret_key"));
        assert!(!yaml.contains("super-secret"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", ClientConfig::new("ak", "super-secret"));
        assert!(!debug.contains("super-secret"));
    }
}
