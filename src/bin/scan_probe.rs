//! Quick check of the real platform scanner and the analysis on top of it

use wifi_channel_advisor::scanner::{PlatformScanner, Scanner};
use wifi_channel_advisor::suggest;

fn main() {
    let connected = std::env::args().nth(1);
    println!("Scanning with the platform scanner (connected override: {:?})...\n", connected);

    match PlatformScanner::new(connected).scan() {
        Ok(snapshot) => {
            println!("SUCCESS! Found {} access points:\n", snapshot.access_points.len());
            for (i, ap) in snapshot.access_points.iter().enumerate() {
                println!(
                    "{}. {} [{}]\n   {} MHz -> channel {} ({}) | Signal: {} dBm",
                    i + 1,
                    ap.display_name(),
                    ap.hardware_id,
                    ap.frequency_mhz,
                    ap.channel(),
                    ap.band(),
                    ap.signal_dbm
                );
            }

            match snapshot.current {
                Some(ref current) => println!("\nConnected to {} on {} MHz", current.display_name(), current.frequency_mhz),
                None => println!("\nConnected network not detected"),
            }

            let text = suggest(snapshot.current_frequency(), &snapshot.access_points);
            println!("\nSuggestion: {}", if text.is_empty() { "<none>" } else { text.as_str() });
        }
        Err(e) => {
            println!("FAILED: {}", e);
        }
    }
}
