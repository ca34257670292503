//! Extractor configuration
//!
//! The configuration is loaded from a YAML/JSON recipe file, an inline JSON
//! string, or a JSON map handed over by the registry. Every required field is
//! checked by [`Config::validate`] before any network call is made.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Example recipe shown by the `info` command
pub const SAMPLE_CONFIG: &str = r#"host: https://server.tableau.com
version: "3.13"
sitename: testdev550928
username: meteor_user
password: xxxxxxxxxx
"#;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Config
// ============================================================================

/// Validated extractor configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server root, e.g. `https://server.tableau.com` (no trailing slash)
    pub host: String,
    /// REST API version, e.g. `3.13`
    pub version: String,
    /// Site content URL used at sign-in
    pub site_name: String,
    /// Sign-in user
    pub username: String,
    /// Sign-in password
    pub password: SecretString,
    /// Per-request timeout
    pub timeout: Duration,
    /// Optional requests-per-second ceiling
    pub rate_limit: Option<u32>,
}

impl Config {
    /// Create a config with default transport settings
    pub fn new(
        host: impl Into<String>,
        version: impl Into<String>,
        site_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let password: String = password.into();
        Self {
            host: trim_host(host.into()),
            version: version.into(),
            site_name: site_name.into(),
            username: username.into(),
            password: SecretString::from(password),
            timeout: DEFAULT_TIMEOUT,
            rate_limit: None,
        }
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a requests-per-second ceiling
    #[must_use]
    pub fn with_rate_limit(mut self, requests_per_second: u32) -> Self {
        self.rate_limit = Some(requests_per_second);
        self
    }

    /// Build and validate a config from a JSON map
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        let raw: RawConfig = serde_json::from_value(value.clone())
            .map_err(|e| Error::config(format!("invalid config: {e}")))?;
        raw.into_config()
    }

    /// Build and validate a config from YAML (or JSON) text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = serde_yaml::from_str(content)?;
        raw.into_config()
    }

    /// Load and validate a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Check that every required field is present and well-formed
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("host", self.host.as_str()),
            ("version", self.version.as_str()),
            ("sitename", self.site_name.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.expose_secret()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::missing_field(field));
            }
        }

        let url = url::Url::parse(&self.host)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "host",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.timeout.is_zero() {
            return Err(Error::invalid_value("timeout_seconds", "must be positive"));
        }
        if self.rate_limit == Some(0) {
            return Err(Error::invalid_value("rate_limit", "must be positive"));
        }

        Ok(())
    }

    /// Root of every REST call: `<host>/api/<version>`
    pub fn api_base(&self) -> String {
        format!("{}/api/{}", self.host, self.version)
    }
}

fn trim_host(host: String) -> String {
    host.trim_end_matches('/').to_string()
}

// ============================================================================
// Raw recipe
// ============================================================================

/// Unvalidated recipe as written by the user
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    host: Option<String>,
    version: Option<Scalar>,
    #[serde(alias = "site_name")]
    sitename: Option<String>,
    username: Option<String>,
    password: Option<String>,
    timeout_seconds: Option<u64>,
    rate_limit: Option<u32>,
}

/// `version: 3.13` in YAML is a float, so accept numbers too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(f64),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
        }
    }
}

impl RawConfig {
    fn into_config(self) -> Result<Config> {
        let host = required("host", self.host)?;
        let version = required("version", self.version.map(Scalar::into_string))?;
        let site_name = required("sitename", self.sitename)?;
        let username = required("username", self.username)?;
        let password = required("password", self.password)?;

        let mut config = Config::new(host, version, site_name, username, password);
        if let Some(secs) = self.timeout_seconds {
            config.timeout = Duration::from_secs(secs);
        }
        config.rate_limit = self.rate_limit;

        config.validate()?;
        Ok(config)
    }
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::missing_field(field))
}
