//! Geolocation service client.

use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};
use url::Url;

use super::observation::looks_like_mac;
use super::user_agent::resolve_user_agent;
use super::{GeolocationError, Location, Observation};
use crate::config::GeolocationConfig;

/// Collects access point observations and resolves them to a location.
///
/// The client is not meant to be shared between callers; each fetch sends
/// every observation added so far.
pub struct GeolocationClient {
    config: GeolocationConfig,
    client: Client,
    observations: Vec<Observation>,
    location: Option<Location>,
}

impl GeolocationClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeolocationConfig) -> Result<Self, GeolocationError> {
        // Reject a bad endpoint up front rather than on the first fetch.
        Url::parse(&config.endpoint)
            .map_err(|e| GeolocationError::Config(format!("{}: {}", config.endpoint, e)))?;
        if config.timeout_secs == 0 {
            return Err(GeolocationError::Config(
                "timeout must be at least one second".to_string(),
            ));
        }

        let client = Client::builder()
            .user_agent(resolve_user_agent(config.user_agent.as_deref()))
            .timeout(config.timeout())
            .gzip(true)
            .build()
            .map_err(|e| GeolocationError::Config(e.to_string()))?;

        Ok(Self {
            config,
            client,
            observations: Vec::new(),
            location: None,
        })
    }

    /// Get the config.
    pub fn config(&self) -> &GeolocationConfig {
        &self.config
    }

    /// Add an access point. The signal strength is coerced to an integer,
    /// with absent or non-numeric input becoming 0.
    pub fn add_observation(
        &mut self,
        mac_address: &str,
        network_name: Option<&str>,
        signal_strength: Option<&str>,
    ) {
        self.push_observation(Observation::from_raw(
            mac_address,
            network_name,
            signal_strength,
        ));
    }

    /// Add an already built observation.
    pub fn push_observation(&mut self, observation: Observation) {
        if !looks_like_mac(observation.mac_address()) {
            warn!(
                "MAC address {:?} is not in AA:BB:CC:DD:EE:FF form, sending as-is",
                observation.mac_address()
            );
        }
        self.observations.push(observation);
    }

    /// Observations in the order they were added.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn clear_observations(&mut self) {
        self.observations.clear();
    }

    /// Build the lookup URL: the configured endpoint plus one `wifi`
    /// parameter per observation.
    pub fn query_url(&self) -> Result<Url, GeolocationError> {
        let mut url = Url::parse(&self.config.endpoint)
            .map_err(|e| GeolocationError::Config(format!("{}: {}", self.config.endpoint, e)))?;

        if !self.observations.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for observation in &self.observations {
                pairs.append_pair("wifi", &observation.token());
            }
        }

        Ok(url)
    }

    /// Ask the geolocation service where the observed access points are.
    ///
    /// On success the location is returned and kept for [`Self::location`];
    /// on failure the previously stored location is left untouched.
    pub async fn fetch_location(&mut self) -> Result<Location, GeolocationError> {
        if self.observations.is_empty() {
            return Err(GeolocationError::NoObservations);
        }

        let url = self.query_url()?;
        debug!(
            "Querying geolocation service with {} access points: {}",
            self.observations.len(),
            url
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GeolocationError::Lookup(describe_request_error(&e)))?;

        let status = response.status();
        debug!("Geolocation service returned {}", status);
        if status != StatusCode::OK {
            return Err(GeolocationError::Lookup(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeolocationError::Lookup(describe_request_error(&e)))?;
        let location = Location::from_response(&body)?;

        info!(
            "Located device at {},{} (within {} m)",
            location.latitude, location.longitude, location.accuracy
        );
        self.location = Some(location);
        Ok(location)
    }

    /// Result of the most recent successful fetch.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.location.map(|l| l.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.location.map(|l| l.longitude)
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.location.map(|l| l.accuracy)
    }

    /// Map URL for the last location, if one has been fetched.
    pub fn map_url(&self) -> Option<String> {
        self.location.map(|l| l.map_url())
    }

    /// One-line summary of the last location, if one has been fetched.
    pub fn describe(&self) -> Option<String> {
        self.location.map(|l| l.to_string())
    }
}

/// Render a transport error with its kind and full cause chain.
fn describe_request_error(error: &reqwest::Error) -> String {
    let kind = if error.is_timeout() {
        "timed out"
    } else if error.is_connect() {
        "connection failed"
    } else {
        "request failed"
    };

    let mut message = format!("{}: {}", kind, error);
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
