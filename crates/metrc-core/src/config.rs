//! Configuration structures for Metrc clients.
//!
//! Credentials are always supplied by the caller, either explicitly or through the
//! process environment. Nothing secret is compiled into the crate.

use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Origin of the Metrc California sandbox.
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api-ca.metrc.com";

/// Environment variable holding the vendor API key.
pub const ENV_VENDOR_KEY: &str = "METRC_VENDOR_KEY";

/// Environment variable holding the user API key.
pub const ENV_USER_KEY: &str = "METRC_USER_KEY";

/// Environment variable overriding the base origin.
pub const ENV_BASE_URL: &str = "METRC_BASE_URL";

/// Environment variable overriding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "METRC_TIMEOUT_SECS";

/// Configuration for a Metrc client instance.
///
/// Holds the base origin every endpoint is resolved against and the two credentials
/// attached to every request via HTTP Basic Authentication: the vendor key is sent as
/// the username and the user key as the password.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MetrcConfig {
    /// Base origin, e.g. `https://sandbox-api-ca.metrc.com`
    #[validate(url)]
    pub base_url: String,

    /// Vendor (software integrator) API key
    pub vendor_key: SecretString,

    /// User (licensee) API key
    pub user_key: SecretString,

    /// Whether to verify TLS certificates
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Connect timeout in seconds
    #[validate(range(min = 1, max = 120))]
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

const fn default_tls_verify() -> bool {
    true
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

impl MetrcConfig {
    /// Create a new client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, a credential is empty, or validation fails.
    pub fn new(
        base_url: impl Into<String>,
        vendor_key: impl Into<String>,
        user_key: impl Into<String>,
    ) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            vendor_key: SecretString::from(vendor_key.into()),
            user_key: SecretString::from(user_key.into()),
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        };

        config.check()?;
        Ok(config)
    }

    /// Create a configuration targeting the Metrc sandbox.
    ///
    /// # Errors
    ///
    /// Returns an error if a credential is empty.
    pub fn sandbox(
        vendor_key: impl Into<String>,
        user_key: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::new(SANDBOX_BASE_URL, vendor_key, user_key)
    }

    /// Load the configuration from the process environment.
    ///
    /// Reads [`ENV_VENDOR_KEY`] and [`ENV_USER_KEY`] (required), and optionally
    /// [`ENV_BASE_URL`] (defaults to the sandbox) and [`ENV_TIMEOUT_SECS`].
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value is invalid.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`MetrcConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| Error::ConfigError(format!("{key} is not set")))
        };

        let vendor_key = required(ENV_VENDOR_KEY)?;
        let user_key = required(ENV_USER_KEY)?;
        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(|| SANDBOX_BASE_URL.to_string());

        let mut config = Self::new(base_url, vendor_key, user_key)?;

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|err| {
                Error::ConfigError(format!("{ENV_TIMEOUT_SECS} is not a number: {err}"))
            })?;
            config = config.with_timeout(secs);
            config.check()?;
        }

        Ok(config)
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set connect timeout in seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout_secs = seconds;
        self
    }

    /// Get request timeout as Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get connect timeout as Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Parse the base origin, dropping a trailing slash so endpoints join cleanly.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        Url::parse(self.base_url.trim_end_matches('/'))
            .map_err(|e| Error::ConfigError(format!("Invalid base URL: {e}")))
    }

    /// Validate field ranges and require non-empty credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] for an unparseable URL or out-of-range timeout,
    /// and [`Error::ConfigError`] for an empty credential.
    pub fn check(&self) -> Result<(), Error> {
        self.validate()?;

        if self.vendor_key.expose_secret().is_empty() {
            return Err(Error::ConfigError("vendor key must not be empty".to_string()));
        }
        if self.user_key.expose_secret().is_empty() {
            return Err(Error::ConfigError("user key must not be empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_new() {
        let config = MetrcConfig::new("https://api-ca.metrc.com", "vendor", "user").unwrap();
        assert_eq!(config.base_url, "https://api-ca.metrc.com");
        assert_eq!(config.vendor_key.expose_secret(), "vendor");
        assert_eq!(config.user_key.expose_secret(), "user");
        assert!(config.tls_verify);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_sandbox_origin() {
        let config = MetrcConfig::sandbox("v", "u").unwrap();
        assert_eq!(config.base_url, SANDBOX_BASE_URL);
    }

    #[test]
    fn test_config_invalid_url() {
        let result = MetrcConfig::new("not a url", "v", "u");
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }

    #[test]
    fn test_config_rejects_empty_credentials() {
        assert!(matches!(
            MetrcConfig::new(SANDBOX_BASE_URL, "", "u"),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            MetrcConfig::new(SANDBOX_BASE_URL, "v", ""),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_timeout_range_is_checked() {
        let config = MetrcConfig::sandbox("v", "u").unwrap().with_timeout(0);
        assert!(matches!(config.check(), Err(Error::ValidationError(_))));

        let config = MetrcConfig::sandbox("v", "u").unwrap().with_timeout(301);
        let err = config.check().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = MetrcConfig::sandbox("vendor-secret", "user-secret").unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("vendor-secret"));
        assert!(!rendered.contains("user-secret"));
    }

    #[test]
    fn test_parse_base_url_trims_trailing_slash() {
        let config = MetrcConfig::new("https://api-ca.metrc.com/", "v", "u").unwrap();
        let url = config.parse_base_url().unwrap();
        assert_eq!(url.as_str(), "https://api-ca.metrc.com/");
        assert_eq!(url.host_str(), Some("api-ca.metrc.com"));
    }

    #[test]
    fn test_from_lookup_defaults_to_sandbox() {
        let config = MetrcConfig::from_lookup(lookup_from(&[
            (ENV_VENDOR_KEY, "v"),
            (ENV_USER_KEY, "u"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, SANDBOX_BASE_URL);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = MetrcConfig::from_lookup(lookup_from(&[
            (ENV_VENDOR_KEY, "v"),
            (ENV_USER_KEY, "u"),
            (ENV_BASE_URL, "https://api-co.metrc.com"),
            (ENV_TIMEOUT_SECS, "45"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api-co.metrc.com");
        assert_eq!(config.request_timeout_secs, 45);
    }

    #[test]
    fn test_from_lookup_missing_key() {
        let err = MetrcConfig::from_lookup(lookup_from(&[(ENV_VENDOR_KEY, "v")])).unwrap_err();
        assert_eq!(
            err,
            Error::ConfigError(format!("{ENV_USER_KEY} is not set"))
        );
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let result = MetrcConfig::from_lookup(lookup_from(&[
            (ENV_VENDOR_KEY, "v"),
            (ENV_USER_KEY, "u"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]));
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_config_deserialize_with_defaults() {
        let json = r#"{
            "base_url": "https://api-ca.metrc.com",
            "vendor_key": "v",
            "user_key": "u"
        }"#;

        let config: MetrcConfig = serde_json::from_str(json).unwrap();
        assert!(config.tls_verify);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
        assert!(config.check().is_ok());
    }
}
