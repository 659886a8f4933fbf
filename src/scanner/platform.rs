use super::{find_connected, AccessPoint, ScanSnapshot, Scanner};
use color_eyre::Result;
use std::process::Command;
use tracing::{debug, warn};

/// Scans through the OS using the `wifiscanner` crate.
#[derive(Debug, Clone, Default)]
pub struct PlatformScanner {
    /// Connected SSID supplied by the user instead of asking the OS
    connected_override: Option<String>,
}

impl PlatformScanner {
    pub fn new(connected_override: Option<String>) -> Self {
        Self { connected_override }
    }

    fn connected_ssid(&self) -> Option<String> {
        if let Some(ref ssid) = self.connected_override {
            return Some(ssid.clone());
        }
        let ssid = current_ssid();
        if ssid.is_none() {
            debug!("could not determine connected SSID");
        }
        ssid
    }
}

impl Scanner for PlatformScanner {
    fn name(&self) -> &'static str {
        "platform"
    }

    fn scan(&self) -> Result<ScanSnapshot> {
        let wifi_networks = wifiscanner::scan().map_err(|e| {
            color_eyre::eyre::eyre!(
                "WiFi scan failed: {:?}\n\nTry running with --demo flag for simulated data.",
                e
            )
        })?;

        let access_points: Vec<AccessPoint> = wifi_networks
            .into_iter()
            .map(|wifi| {
                let frequency_mhz = channel_to_frequency(&wifi.channel);
                if frequency_mhz == 0 {
                    warn!(channel = %wifi.channel, bssid = %wifi.mac, "unrecognised channel");
                }
                AccessPoint::new(wifi.ssid, wifi.mac, frequency_mhz, parse_signal(&wifi.signal_level))
            })
            .collect();

        let current = self
            .connected_ssid()
            .and_then(|ssid| find_connected(&access_points, &ssid));

        Ok(ScanSnapshot {
            access_points,
            current,
        })
    }
}

/// Convert a reported channel ("6", "149,+1", "36 (5GHz)") to its centre frequency.
/// Unrecognised channels give 0.
pub fn channel_to_frequency(channel: &str) -> i32 {
    let digits: String = channel
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<i32>() {
        Ok(ch @ 1..=13) => 2407 + 5 * ch,
        Ok(14) => 2484,
        Ok(ch @ 32..=177) => 5000 + 5 * ch,
        _ => 0,
    }
}

pub fn parse_signal(signal: &str) -> i32 {
    signal
        .trim()
        .trim_end_matches(" dBm")
        .trim_end_matches('%')
        .split_whitespace()
        .next()
        .unwrap_or("-100")
        .parse::<i32>()
        .unwrap_or(-100)
}

/// SSID of the network this machine is associated with
#[cfg(target_os = "macos")]
fn current_ssid() -> Option<String> {
    let output = Command::new("networksetup")
        .args(["-getairportnetwork", "en0"])
        .output()
        .ok()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.contains("not associated") {
        return None;
    }

    stdout
        .trim()
        .strip_prefix("Current Wi-Fi Network: ")
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty())
}

/// SSID of the network this machine is associated with
#[cfg(not(target_os = "macos"))]
fn current_ssid() -> Option<String> {
    let output = Command::new("iwgetid").arg("-r").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let ssid = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if ssid.is_empty() { None } else { Some(ssid) }
}
