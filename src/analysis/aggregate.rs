use super::channel::channel_of;
use crate::scanner::AccessPoint;
use std::collections::BTreeMap;

/// Count of access points per channel, iterated in ascending channel order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelHistogram(BTreeMap<u32, usize>);

impl ChannelHistogram {
    /// Networks seen on `channel`, zero if none.
    pub fn count(&self, channel: u32) -> usize {
        self.0.get(&channel).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.0.iter().map(|(&channel, &count)| (channel, count))
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<u32> for ChannelHistogram {
    fn from_iter<I: IntoIterator<Item = u32>>(channels: I) -> Self {
        let counts = channels.into_iter().fold(BTreeMap::new(), |mut acc, channel| {
            *acc.entry(channel).or_insert(0) += 1;
            acc
        });
        ChannelHistogram(counts)
    }
}

/// Result of aggregating one scan.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    /// Named networks, strongest signal first.
    pub networks: Vec<AccessPoint>,
    pub histogram: ChannelHistogram,
    pub has_5ghz: bool,
}

/// Drop hidden networks, rank the rest by signal and count them per channel.
pub fn aggregate(access_points: &[AccessPoint]) -> Aggregate {
    let mut networks: Vec<AccessPoint> = access_points
        .iter()
        .filter(|ap| !ap.is_hidden())
        .cloned()
        .collect();

    // sort_by is stable, equal signals keep scan order
    networks.sort_by(|a, b| b.signal_dbm.cmp(&a.signal_dbm));

    let histogram = networks.iter().map(|ap| channel_of(ap.frequency_mhz)).collect();
    let has_5ghz = networks.iter().any(|ap| ap.frequency_mhz >= 5000);

    Aggregate {
        networks,
        histogram,
        has_5ghz,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ap(name: &str, frequency_mhz: i32, signal_dbm: i32) -> AccessPoint {
        AccessPoint::new(name, format!("{}-bssid", name), frequency_mhz, signal_dbm)
    }

    #[test]
    fn test_empty_scan() {
        let result = aggregate(&[]);
        assert!(result.histogram.is_empty());
        assert!(result.networks.is_empty());
        assert!(!result.has_5ghz);
    }

    #[test]
    fn test_hidden_networks_excluded() {
        let scan = vec![
            ap("Home", 2437, -50),
            ap("", 2437, -40),
            ap("Cafe", 2462, -70),
            ap("", 5180, -60),
        ];
        let result = aggregate(&scan);

        assert_eq!(result.networks.len(), 2);
        assert_eq!(result.histogram.total(), 2);
        assert_eq!(result.histogram.count(6), 1);
        assert_eq!(result.histogram.count(11), 1);
        // The only 5 GHz record was hidden
        assert!(!result.has_5ghz);
    }

    #[test]
    fn test_sorted_strongest_first_and_stable() {
        let scan = vec![
            ap("Weak", 2412, -80),
            ap("TieA", 2437, -60),
            ap("Strong", 5180, -40),
            ap("TieB", 2462, -60),
        ];
        let names: Vec<String> = aggregate(&scan)
            .networks
            .into_iter()
            .map(|ap| ap.name)
            .collect();
        assert_eq!(names, vec!["Strong", "TieA", "TieB", "Weak"]);
    }

    #[test]
    fn test_5ghz_presence() {
        let result = aggregate(&[ap("Lab", 5180, -70), ap("Home", 2412, -50)]);
        assert!(result.has_5ghz);
        assert_eq!(result.histogram.count(36), 1);
    }

    #[test]
    fn test_out_of_band_counted_on_unknown_channel() {
        let result = aggregate(&[ap("Odd", 2300, -70), ap("Odder", 0, -71)]);
        assert_eq!(result.histogram.count(0), 2);
        assert_eq!(result.histogram.len(), 1);
    }

    #[test]
    fn test_histogram_iterates_ascending() {
        let histogram: ChannelHistogram = [149, 1, 36, 6, 1].into_iter().collect();
        let channels: Vec<u32> = histogram.iter().map(|(channel, _)| channel).collect();
        assert_eq!(channels, vec![1, 6, 36, 149]);
        assert_eq!(histogram.count(1), 2);
        assert_eq!(histogram.count(11), 0);
    }
}
