//! CLI parser and the lookup command.

use clap::Parser;
use console::style;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::debug;

use wlan_geolocate::{GeolocationClient, GeolocationConfig, Location, Observation};

/// Signal strength reported for access points given on the command line.
const DEFAULT_SIGNAL_STRENGTH: i32 = -83;

#[derive(Parser, Debug)]
#[command(name = "wlan-geolocate")]
#[command(about = "Ask a geolocation service for the location of a set of BSSIDs")]
#[command(version)]
#[command(
    after_help = "Example: iwlist scan 2>/dev/null | awk '/Address/{print $5}' | xargs wlan-geolocate"
)]
pub struct Cli {
    /// Access point MAC addresses (BSSIDs), e.g. 00:11:22:33:44:55
    #[arg(value_name = "MAC", required_unless_present = "stdin")]
    macs: Vec<String>,

    /// Also read whitespace-separated MAC addresses from stdin
    #[arg(long)]
    stdin: bool,

    /// Signal strength (dBm) reported for every access point
    #[arg(short, long, default_value_t = DEFAULT_SIGNAL_STRENGTH, allow_hyphen_values = true)]
    signal: i32,

    /// Network name (ESSID) reported for every access point
    #[arg(long)]
    ssid: Option<String>,

    /// Geolocation endpoint URL (overrides GEOLOCATION_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds (overrides GEOLOCATION_TIMEOUT)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// User agent, or "impersonate" for a browser one (overrides GEOLOCATION_USER_AGENT)
    #[arg(long)]
    user_agent: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// JSON output format.
#[derive(Debug, Serialize)]
struct LookupOutput {
    #[serde(flatten)]
    location: Location,
    map_url: String,
}

impl Cli {
    /// Environment-derived config with command-line overrides applied.
    fn config(&self) -> GeolocationConfig {
        let mut config = GeolocationConfig::default();
        if let Some(ref endpoint) = self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(ref ua) = self.user_agent {
            config.user_agent = Some(ua.clone());
        }
        config
    }
}

/// Split stdin contents into MAC addresses.
fn parse_mac_list(input: &str) -> Vec<String> {
    input.split_whitespace().map(|s| s.to_string()).collect()
}

/// Positional MACs first, then any read from stdin.
fn collect_macs(positional: &[String], stdin_input: Option<&str>) -> Vec<String> {
    let mut macs = positional.to_vec();
    if let Some(input) = stdin_input {
        let from_stdin = parse_mac_list(input);
        debug!("Read {} MAC addresses from stdin", from_stdin.len());
        macs.extend(from_stdin);
    }
    macs
}

/// Format a lookup result: the summary line then the map URL, or JSON.
fn render(location: &Location, json: bool) -> anyhow::Result<String> {
    if json {
        let output = LookupOutput {
            location: *location,
            map_url: location.map_url(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(format!("{}\n{}", location, location.map_url()))
    }
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let stdin_input = if cli.stdin {
        let mut input = String::new();
        tokio::io::stdin().read_to_string(&mut input).await?;
        if input.trim().is_empty() {
            eprintln!("{}", style("No MAC addresses read from stdin").yellow());
        }
        Some(input)
    } else {
        None
    };
    let macs = collect_macs(&cli.macs, stdin_input.as_deref());

    let mut client = GeolocationClient::new(cli.config())?;
    for mac in &macs {
        client.push_observation(Observation::new(mac, cli.ssid.as_deref(), cli.signal));
    }

    let location = client.fetch_location().await?;
    println!("{}", render(&location, cli.json)?);

    Ok(())
}
