//! WiFi channel congestion analysis.
//!
//! [`channel_of`], [`aggregate`] and [`suggest`] are the pure core; the
//! remaining modules scan, render and drive the terminal UI around them.

pub mod analysis;
pub mod app;
pub mod components;
pub mod event;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod theme;
pub mod tui;

pub use analysis::{aggregate, channel_of, recommend, suggest, ChannelHistogram};
pub use scanner::{AccessPoint, ScanSnapshot, Scanner};
