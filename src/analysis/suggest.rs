use super::aggregate::aggregate;
use super::channel::{channel_of, UNKNOWN_CHANNEL};
use crate::scanner::AccessPoint;
use std::fmt;
use tracing::debug;

/// More than this many named networks on the current channel counts as congested.
pub const CONGESTION_THRESHOLD: usize = 3;

/// Frequencies at or above this are 5 GHz or higher.
const FIVE_GHZ_MHZ: i32 = 5000;

/// Outcome of comparing the current channel against the scanned neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub current_channel: u32,
    pub best_channel: u32,
    /// Named networks sharing the current channel.
    pub congested_peers: usize,
    pub suggest_5ghz: bool,
}

impl Recommendation {
    pub fn should_switch(&self) -> bool {
        self.congested_peers > CONGESTION_THRESHOLD && self.best_channel != self.current_channel
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.should_switch() {
            write!(
                f,
                "Your current channel {} is congested by multiple nearby networks. \
                 Consider changing to channel {} for better performance.",
                self.current_channel, self.best_channel
            )?;
        } else {
            write!(
                f,
                "Your current channel {} looks relatively free. No immediate changes required.",
                self.current_channel
            )?;
        }

        if self.suggest_5ghz {
            write!(
                f,
                "\nThere are also 5 GHz networks available. Switching to a 5 GHz network \
                 can reduce interference if your router supports it."
            )?;
        }
        Ok(())
    }
}

/// Decide whether the connected network should move channel.
///
/// Returns `None` when there is nothing to reason about: not connected
/// (`current_frequency_mhz == 0`) or an empty scan.
///
/// The least crowded alternative is searched in ascending channel order and
/// only a strictly lower count replaces the running best, so ties resolve to
/// the current channel first and then to the lowest channel number.
pub fn recommend(current_frequency_mhz: i32, scanned: &[AccessPoint]) -> Option<Recommendation> {
    if current_frequency_mhz == 0 || scanned.is_empty() {
        return None;
    }

    let current_channel = channel_of(current_frequency_mhz);
    let aggregate = aggregate(scanned);
    let congested_peers = aggregate.histogram.count(current_channel);

    let mut best_channel = current_channel;
    let mut best_count = congested_peers;
    for (channel, count) in aggregate.histogram.iter() {
        if channel == UNKNOWN_CHANNEL {
            continue;
        }
        if count < best_count {
            best_channel = channel;
            best_count = count;
        }
    }

    debug!(
        current_channel,
        congested_peers, best_channel, best_count, "channel recommendation"
    );

    Some(Recommendation {
        current_channel,
        best_channel,
        congested_peers,
        suggest_5ghz: current_frequency_mhz < FIVE_GHZ_MHZ && aggregate.has_5ghz,
    })
}

/// Human-readable suggestion text, empty when there is no suggestion.
pub fn suggest(current_frequency_mhz: i32, scanned: &[AccessPoint]) -> String {
    recommend(current_frequency_mhz, scanned)
        .map(|recommendation| recommendation.to_string())
        .unwrap_or_default()
}
