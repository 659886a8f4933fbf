use super::{AccessPoint, ScanSnapshot, Scanner};
use color_eyre::Result;
use std::time::{SystemTime, UNIX_EPOCH};

/// Simulated neighbourhood for trying the UI without a WiFi adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoScanner;

const DEMO_NETWORKS: &[(&str, &str, i32, i32)] = &[
    ("Home_Network", "C8:7F:54:BF:29:1C", 2437, -45),
    ("CoffeeShop_Free", "A1:B2:C3:D4:E5:F6", 5180, -52),
    ("Airport_WiFi", "11:22:33:44:55:66", 2437, -55),
    ("Starbucks_WiFi", "AA:BB:CC:DD:EE:FF", 2462, -62),
    ("Hotel_Guest", "12:34:56:78:9A:BC", 2412, -48),
    ("Library_Public", "DE:AD:BE:EF:CA:FE", 5745, -58),
    ("FastFood_Free", "FE:ED:FA:CE:00:11", 2437, -70),
    ("Mall_WiFi", "22:33:44:55:66:77", 5220, -65),
    ("Neighbor_2G", "88:99:AA:BB:CC:DD", 2437, -78),
    ("xfinitywifi", "EE:FF:00:11:22:33", 2437, -72),
    ("ATT_WiFi", "44:55:66:77:88:99", 2462, -80),
    ("", "00:11:22:33:44:55", 2437, -85),
];

impl Scanner for DemoScanner {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn scan(&self) -> Result<ScanSnapshot> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();

        let access_points: Vec<AccessPoint> = DEMO_NETWORKS
            .iter()
            .enumerate()
            .map(|(idx, &(ssid, mac, frequency_mhz, base_signal))| {
                let variance = ((seed.wrapping_add(idx as u64) % 7) as i32) - 3;
                AccessPoint::new(ssid, mac, frequency_mhz, base_signal + variance)
            })
            .collect();

        let current = access_points.first().cloned();

        Ok(ScanSnapshot {
            access_points,
            current,
        })
    }
}
