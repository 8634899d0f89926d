//! User agent handling for lookup requests.

pub const USER_AGENT: &str = concat!(
    "wlan-geolocate/",
    env!("CARGO_PKG_VERSION"),
    " (Rust; reqwest)"
);

/// Firefox user agent, matching the `browser=firefox` the endpoint is queried with.
pub const IMPERSONATE_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0";

/// Resolve user agent from config value.
/// - None => default wlan-geolocate user agent
/// - "impersonate" => Firefox user agent
/// - other => custom user agent string
pub fn resolve_user_agent(config: Option<&str>) -> String {
    match config {
        None => USER_AGENT.to_string(),
        Some("impersonate") => IMPERSONATE_USER_AGENT.to_string(),
        Some(custom) => custom.to_string(),
    }
}
