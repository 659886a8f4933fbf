//! Channel analysis over a single scan snapshot.
//!
//! Everything here is pure: the same snapshot always yields the same
//! histogram and the same suggestion.

mod aggregate;
mod channel;
mod suggest;

pub use aggregate::{aggregate, Aggregate, ChannelHistogram};
pub use channel::{channel_of, FrequencyBand, UNKNOWN_CHANNEL};
pub use suggest::{recommend, suggest, Recommendation, CONGESTION_THRESHOLD};
