//! Access point observations.

/// One access point as reported to the geolocation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    mac_address: String,
    network_name: Option<String>,
    signal_strength: i32,
}

impl Observation {
    /// Create an observation. The MAC address is uppercased but otherwise
    /// passed through as given.
    pub fn new(mac_address: &str, network_name: Option<&str>, signal_strength: i32) -> Self {
        Self {
            mac_address: mac_address.to_uppercase(),
            network_name: network_name.map(|s| s.to_string()),
            signal_strength,
        }
    }

    /// Create an observation from loosely typed input, coercing the signal
    /// strength with [`parse_signal_strength`] (absent means 0).
    pub fn from_raw(
        mac_address: &str,
        network_name: Option<&str>,
        signal_strength: Option<&str>,
    ) -> Self {
        let signal = signal_strength.map(parse_signal_strength).unwrap_or(0);
        Self::new(mac_address, network_name, signal)
    }

    pub fn mac_address(&self) -> &str {
        &self.mac_address
    }

    pub fn network_name(&self) -> Option<&str> {
        self.network_name.as_deref()
    }

    pub fn signal_strength(&self) -> i32 {
        self.signal_strength
    }

    /// Unencoded `wifi` parameter value: `mac:<MAC>|ssid:<name>|ss=<signal>`.
    pub fn token(&self) -> String {
        format!(
            "mac:{}|ssid:{}|ss={}",
            self.mac_address,
            self.network_name.as_deref().unwrap_or(""),
            self.signal_strength
        )
    }
}

/// Coerce a signal strength to an integer using its leading digits.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Input without leading digits yields 0.
pub fn parse_signal_strength(raw: &str) -> i32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i32, |acc, b| {
            let digit = i32::from(b - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}

/// Whether the string has the `AA:BB:CC:DD:EE:FF` shape.
pub fn looks_like_mac(mac: &str) -> bool {
    let groups: Vec<&str> = mac.split(':').collect();
    groups.len() == 6
        && groups
            .iter()
            .all(|g| g.len() == 2 && g.bytes().all(|b| b.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_normalizes_mac() {
        let obs = Observation::from_raw("aa:bb:cc:dd:ee:ff", Some("MyAP"), Some("-70"));
        assert_eq!(obs.token(), "mac:AA:BB:CC:DD:EE:FF|ssid:MyAP|ss=-70");
        assert_eq!(obs.mac_address(), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn missing_signal_defaults_to_zero() {
        let obs = Observation::from_raw("00:11:22:33:44:55", None, None);
        assert_eq!(obs.signal_strength(), 0);
        assert_eq!(obs.token(), "mac:00:11:22:33:44:55|ssid:|ss=0");
    }

    #[test]
    fn malformed_mac_passes_through() {
        let obs = Observation::new("not-a-mac", None, -83);
        assert_eq!(obs.mac_address(), "NOT-A-MAC");
        assert!(obs.network_name().is_none());
    }

    #[test]
    fn parse_signal_strength_leading_integer() {
        assert_eq!(parse_signal_strength("-70"), -70);
        assert_eq!(parse_signal_strength("  42"), 42);
        assert_eq!(parse_signal_strength("+5"), 5);
        assert_eq!(parse_signal_strength("-83dBm"), -83);
        assert_eq!(parse_signal_strength("abc"), 0);
        assert_eq!(parse_signal_strength(""), 0);
        assert_eq!(parse_signal_strength("-"), 0);
    }

    #[test]
    fn parse_signal_strength_saturates() {
        assert_eq!(parse_signal_strength("99999999999999"), i32::MAX);
        assert_eq!(parse_signal_strength("-99999999999999"), i32::MIN);
    }

    #[test]
    fn looks_like_mac_test() {
        assert!(looks_like_mac("00:11:22:33:44:55"));
        assert!(looks_like_mac("aa:BB:cc:DD:ee:FF"));

        assert!(!looks_like_mac("00:11:22:33:44"));
        assert!(!looks_like_mac("00-11-22-33-44-55"));
        assert!(!looks_like_mac("00:11:22:33:44:GG"));
        assert!(!looks_like_mac(""));
    }
}
