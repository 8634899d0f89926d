//! wlan-geolocate - locate a device from the Wi-Fi access points around it.
//!
//! Collects access point observations (BSSID, optional ESSID, signal
//! strength), sends them to a browser-style geolocation web service and
//! returns the estimated position.
//!
//! ```no_run
//! # async fn demo() -> Result<(), wlan_geolocate::GeolocationError> {
//! use wlan_geolocate::{GeolocationClient, GeolocationConfig};
//!
//! let mut client = GeolocationClient::new(GeolocationConfig::default())?;
//! client.add_observation("00:11:22:33:44:55", Some("example"), Some("-80"));
//! let location = client.fetch_location().await?;
//! println!("{}\n{}", location, location.map_url());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod geolocation;

pub use config::GeolocationConfig;
pub use geolocation::{GeolocationClient, GeolocationError, Location, Observation};
