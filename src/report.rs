//! Plain-text rendering of one scan for `--once`.

use crate::analysis::{aggregate, suggest};
use crate::scanner::ScanSnapshot;
use std::fmt::{self, Write};

/// Width of the longest histogram bar.
const BAR_WIDTH: usize = 30;

pub fn render(snapshot: &ScanSnapshot) -> Result<String, fmt::Error> {
    let aggregate = aggregate(&snapshot.access_points);
    let mut out = String::new();

    match snapshot.current {
        Some(ref current) => writeln!(
            out,
            "Connected: {} [{}] channel {} ({}), {} dBm",
            current.display_name(),
            current.hardware_id,
            current.channel(),
            current.band(),
            current.signal_dbm
        )?,
        None => out.push_str("Connected: unknown\n"),
    }

    let hidden = snapshot
        .access_points
        .len()
        .saturating_sub(aggregate.networks.len());
    writeln!(
        out,
        "\nNetworks ({} found, {} hidden)",
        aggregate.networks.len(),
        hidden
    )?;
    for network in &aggregate.networks {
        writeln!(
            out,
            "  {:<24} {:<17} {:>4} dBm  ch {:>3} ({})",
            network.name,
            network.hardware_id,
            network.signal_dbm,
            network.channel(),
            network.band()
        )?;
    }

    out.push_str("\nChannel usage\n");
    let peak = aggregate.histogram.iter().map(|(_, count)| count).max().unwrap_or(0);
    for (channel, count) in aggregate.histogram.iter() {
        let bar_len = if peak == 0 { 0 } else { count * BAR_WIDTH / peak };
        let label = if channel == 0 { "  ?".to_string() } else { format!("{:>3}", channel) };
        writeln!(out, "  {} | {:<width$} {}", label, "#".repeat(bar_len), count, width = BAR_WIDTH)?;
    }

    let suggestion = suggest(snapshot.current_frequency(), &snapshot.access_points);
    out.push_str("\nSuggestion\n");
    if suggestion.is_empty() {
        out.push_str("  No suggestion: not connected or no networks visible.\n");
    } else {
        for line in suggestion.lines() {
            writeln!(out, "  {}", line)?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::AccessPoint;

    fn snapshot() -> ScanSnapshot {
        let access_points = vec![
            AccessPoint::new("Home", "AA:00:00:00:00:01", 2437, -45),
            AccessPoint::new("Cafe", "AA:00:00:00:00:02", 2437, -70),
            AccessPoint::new("Lab", "AA:00:00:00:00:03", 5180, -60),
            AccessPoint::new("", "AA:00:00:00:00:04", 2412, -80),
        ];
        let current = access_points.first().cloned();
        ScanSnapshot {
            access_points,
            current,
        }
    }

    #[test]
    fn test_report_sections() {
        let text = render(&snapshot()).unwrap();

        assert!(text.starts_with("Connected: Home [AA:00:00:00:00:01] channel 6 (2.4 GHz), -45 dBm"));
        assert!(text.contains("Networks (3 found, 1 hidden)"));
        assert!(text.contains("looks relatively free"));
        assert!(text.contains("  There are also 5 GHz networks available."));
    }

    #[test]
    fn test_report_ranks_and_counts() {
        let text = render(&snapshot()).unwrap();

        let home = text.find("  Home").unwrap();
        let lab = text.find("  Lab").unwrap();
        let cafe = text.find("  Cafe").unwrap();
        assert!(home < lab && lab < cafe);

        let six = format!("    6 | {:<30} 2", "#".repeat(30));
        let thirty_six = format!("   36 | {:<30} 1", "#".repeat(15));
        assert!(text.contains(&six), "{}", text);
        assert!(text.contains(&thirty_six), "{}", text);
        // Hidden network is not counted
        assert!(!text.contains("    1 |"));
    }

    #[test]
    fn test_report_without_connection() {
        let mut snapshot = snapshot();
        snapshot.current = None;
        let text = render(&snapshot).unwrap();
        assert!(text.starts_with("Connected: unknown"));
        assert!(text.contains("No suggestion"));
    }
}
