mod demo;
mod platform;

pub use demo::DemoScanner;
pub use platform::{channel_to_frequency, parse_signal, PlatformScanner};

use crate::analysis::{channel_of, FrequencyBand};
use color_eyre::Result;

/// One observed (or currently connected) wireless network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPoint {
    /// SSID, empty for hidden networks
    pub name: String,
    /// BSSID of the radio
    pub hardware_id: String,
    pub frequency_mhz: i32,
    pub signal_dbm: i32,
}

impl AccessPoint {
    pub fn new(
        name: impl Into<String>,
        hardware_id: impl Into<String>,
        frequency_mhz: i32,
        signal_dbm: i32,
    ) -> Self {
        Self {
            name: name.into(),
            hardware_id: hardware_id.into(),
            frequency_mhz,
            signal_dbm,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.is_empty()
    }

    pub fn display_name(&self) -> &str {
        if self.is_hidden() { "<Hidden>" } else { &self.name }
    }

    pub fn channel(&self) -> u32 {
        channel_of(self.frequency_mhz)
    }

    pub fn band(&self) -> FrequencyBand {
        FrequencyBand::from_frequency(self.frequency_mhz)
    }

    pub fn signal_bars(&self) -> String {
        let bars = match self.signal_dbm {
            s if s >= -50 => 5,
            s if s >= -60 => 4,
            s if s >= -70 => 3,
            s if s >= -80 => 2,
            _ => 1,
        };
        let filled = "\u{2593}".repeat(bars);
        let empty = "\u{2591}".repeat(5 - bars);
        format!("{}{}", filled, empty)
    }
}

/// Everything a single scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanSnapshot {
    pub access_points: Vec<AccessPoint>,
    /// The network this machine is associated with, if it could be determined
    pub current: Option<AccessPoint>,
}

impl ScanSnapshot {
    /// Frequency of the connected network, 0 when not connected.
    pub fn current_frequency(&self) -> i32 {
        self.current.as_ref().map_or(0, |ap| ap.frequency_mhz)
    }
}

/// Source of scan snapshots. Implementations may block; callers run them
/// off the async runtime.
pub trait Scanner: Send + Sync {
    fn name(&self) -> &'static str;

    fn scan(&self) -> Result<ScanSnapshot>;
}

/// Pick the strongest scanned record broadcasting `ssid`.
pub fn find_connected(access_points: &[AccessPoint], ssid: &str) -> Option<AccessPoint> {
    if ssid.is_empty() {
        return None;
    }
    access_points
        .iter()
        .filter(|ap| ap.name == ssid)
        .max_by_key(|ap| ap.signal_dbm)
        .cloned()
}
