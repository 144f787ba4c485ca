//! SDK configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `AIRSHIP_REGION` - Data center region, `us` or `eu` (default: us)
//! - `AIRSHIP_BASE_URL` - Explicit API base URL, overrides the region default

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

const US_BASE_URL: &str = "https://go.urbanairship.com";
const EU_BASE_URL: &str = "https://go.airship.eu";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Airship data center region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Us,
    Eu,
}

impl Region {
    /// Default API base URL for this region.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Us => US_BASE_URL,
            Self::Eu => EU_BASE_URL,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Us => write!(f, "us"),
            Self::Eu => write!(f, "eu"),
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            _ => Err(format!("invalid region: {s} (expected us or eu)")),
        }
    }
}

/// Where request descriptors point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Data center region
    pub region: Region,
    /// API base URL (scheme and host, no trailing path)
    pub base_url: Url,
}

impl SdkConfig {
    /// Configuration pointing at a region's default base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the region URL fails to parse.
    pub fn for_region(region: Region) -> Result<Self, ConfigError> {
        Ok(Self {
            region,
            base_url: region_url(region)?,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(get_optional_env)
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let region = lookup("AIRSHIP_REGION")
            .map(|raw| raw.parse::<Region>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("AIRSHIP_REGION".to_string(), e))?
            .unwrap_or_default();

        let base_url = match lookup("AIRSHIP_BASE_URL") {
            Some(raw) => Url::parse(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("AIRSHIP_BASE_URL".to_string(), e.to_string())
            })?,
            None => region_url(region)?,
        };

        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidEnvVar(
                "AIRSHIP_BASE_URL".to_string(),
                format!("{base_url} cannot be used as a base URL"),
            ));
        }

        tracing::debug!(%region, %base_url, "loaded airship sdk config");

        Ok(Self { region, base_url })
    }

    /// Resolve an API path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns a parse error if `path` is not a valid URL path.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

/// Parse one of the built-in region URLs.
fn region_url(region: Region) -> Result<Url, ConfigError> {
    Url::parse(region.base_url())
        .map_err(|e| ConfigError::InvalidEnvVar("AIRSHIP_REGION".to_string(), e.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
