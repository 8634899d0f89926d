//! Geolocation client configuration.

use serde::{Deserialize, Serialize};

/// Browser location endpoint, including the static `browser` and `sensor` parameters.
pub const DEFAULT_ENDPOINT: &str =
    "https://maps.googleapis.com/maps/api/browserlocation/json?browser=firefox&sensor=true";

/// Configuration for the geolocation client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeolocationConfig {
    /// Base lookup URL; `wifi` parameters are appended to its query
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User agent: unset for the crate default, "impersonate" for a browser UA
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self::base_default().with_env_overrides()
    }
}

impl GeolocationConfig {
    /// Base default without env overrides.
    pub fn base_default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `GEOLOCATION_ENDPOINT`: base lookup URL
    /// - `GEOLOCATION_TIMEOUT`: request timeout in seconds (0 is ignored)
    /// - `GEOLOCATION_USER_AGENT`: user agent, or "impersonate"
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("GEOLOCATION_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Some(val) = lookup("GEOLOCATION_TIMEOUT") {
            match val.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => {}
            }
        }
        if let Some(ua) = lookup("GEOLOCATION_USER_AGENT") {
            self.user_agent = Some(ua);
        }
        self
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}
