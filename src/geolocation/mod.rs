//! Wi-Fi geolocation lookups.
//!
//! Access points are collected as [`Observation`]s, sent to the browser
//! location API as repeated `wifi` query parameters, and the JSON answer is
//! turned into a [`Location`].

mod client;
mod location;
mod observation;
mod user_agent;

pub use client::GeolocationClient;
pub use location::{Location, MAP_URL};
pub use observation::{looks_like_mac, parse_signal_strength, Observation};
pub use user_agent::{resolve_user_agent, IMPERSONATE_USER_AGENT, USER_AGENT};

use thiserror::Error;

/// Errors that can occur during a geolocation lookup.
#[derive(Debug, Error)]
pub enum GeolocationError {
    /// Transport failure or a non-200 answer.
    #[error("Failed to contact geolocation service: {0}")]
    Lookup(String),

    /// The answer was not JSON or lacked the expected fields.
    #[error("Failed to parse geolocation response: {0}")]
    Parse(String),

    #[error("No access points to look up")]
    NoObservations,

    #[error("Invalid geolocation configuration: {0}")]
    Config(String),
}
