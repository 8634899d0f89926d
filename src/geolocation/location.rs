//! Lookup results.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GeolocationError;

/// Map viewer that takes a `q=<lat>,<lng>` query.
pub const MAP_URL: &str = "https://maps.google.com/";

/// Position estimated by the geolocation service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius of the estimate, in meters.
    pub accuracy: f64,
}

/// Browser location API response format.
#[derive(Debug, Deserialize)]
struct LocationResponse {
    location: LatLng,
    accuracy: f64,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl Location {
    /// Parse a browser location API response body.
    pub fn from_response(body: &str) -> Result<Self, GeolocationError> {
        let response: LocationResponse = serde_json::from_str(body)
            .map_err(|e| GeolocationError::Parse(e.to_string()))?;

        Ok(Self {
            latitude: response.location.lat,
            longitude: response.location.lng,
            accuracy: response.accuracy,
        })
    }

    /// Map viewer URL centred on this location.
    pub fn map_url(&self) -> String {
        format!("{}?q={},{}", MAP_URL, self.latitude, self.longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Google indicates the device is within {} meters of {},{}.",
            self.accuracy, self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_reads_fields() {
        let location =
            Location::from_response(r#"{"location":{"lat":37.4,"lng":-122.1},"accuracy":150}"#)
                .unwrap();

        assert_eq!(location.latitude, 37.4);
        assert_eq!(location.longitude, -122.1);
        assert_eq!(location.accuracy, 150.0);
    }

    #[test]
    fn from_response_ignores_extra_fields() {
        let body = r#"{"status":"OK","location":{"lat":1.5,"lng":2.5},"accuracy":20.0}"#;
        let location = Location::from_response(body).unwrap();
        assert_eq!(location.accuracy, 20.0);
    }

    #[test]
    fn from_response_rejects_non_json() {
        let err = Location::from_response("<html>nope</html>").unwrap_err();
        assert!(matches!(err, GeolocationError::Parse(_)));
    }

    #[test]
    fn from_response_rejects_missing_fields() {
        let err = Location::from_response(r#"{"location":{"lat":1.0},"accuracy":5}"#).unwrap_err();
        assert!(matches!(err, GeolocationError::Parse(_)));

        let err = Location::from_response(r#"{"location":{"lat":1.0,"lng":2.0}}"#).unwrap_err();
        assert!(matches!(err, GeolocationError::Parse(_)));
    }

    #[test]
    fn map_url_embeds_coordinates() {
        let location = Location {
            latitude: 37.4,
            longitude: -122.1,
            accuracy: 150.0,
        };
        assert_eq!(location.map_url(), "https://maps.google.com/?q=37.4,-122.1");
    }

    #[test]
    fn display_summary() {
        let location = Location {
            latitude: 37.4,
            longitude: -122.1,
            accuracy: 150.0,
        };
        assert_eq!(
            location.to_string(),
            "Google indicates the device is within 150 meters of 37.4,-122.1."
        );
    }
}
