use std::fmt;

/// Channel reported for frequencies outside the 2.4 GHz and 5 GHz bands.
pub const UNKNOWN_CHANNEL: u32 = 0;

/// Map a carrier frequency in MHz to its WiFi channel number.
///
/// 2412-2484 MHz map to `(f - 2407) / 5`, 5000-5900 MHz to `(f - 5000) / 5`.
/// Anything else, negative input included, is [`UNKNOWN_CHANNEL`].
pub fn channel_of(frequency_mhz: i32) -> u32 {
    match frequency_mhz {
        2412..=2484 => ((frequency_mhz - 2407) / 5) as u32,
        5000..=5900 => ((frequency_mhz - 5000) / 5) as u32,
        _ => UNKNOWN_CHANNEL,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyBand {
    Band2_4GHz,
    Band5GHz,
    Band6GHz,
    Unknown,
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrequencyBand::Band2_4GHz => write!(f, "2.4 GHz"),
            FrequencyBand::Band5GHz => write!(f, "5 GHz"),
            FrequencyBand::Band6GHz => write!(f, "6 GHz"),
            FrequencyBand::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FrequencyBand {
    /// Display-only classification; channel numbers come from [`channel_of`].
    pub fn from_frequency(frequency_mhz: i32) -> Self {
        match frequency_mhz {
            2400..=2500 => FrequencyBand::Band2_4GHz,
            5000..=5900 => FrequencyBand::Band5GHz,
            5925..=7125 => FrequencyBand::Band6GHz,
            _ => FrequencyBand::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2_4ghz_channels() {
        assert_eq!(channel_of(2412), 1);
        assert_eq!(channel_of(2437), 6);
        assert_eq!(channel_of(2462), 11);
        assert_eq!(channel_of(2472), 13);
        // Upper band edge follows the formula, not the regulatory channel 14
        assert_eq!(channel_of(2484), 15);
    }

    #[test]
    fn test_5ghz_channels() {
        assert_eq!(channel_of(5000), 0);
        assert_eq!(channel_of(5180), 36);
        assert_eq!(channel_of(5745), 149);
        assert_eq!(channel_of(5900), 180);
        // Truncates between channel centres
        assert_eq!(channel_of(5183), 36);
    }

    #[test]
    fn test_out_of_band_is_unknown() {
        for f in [-5180, -1, 0, 2400, 2407, 2411, 2485, 4999, 5901, 6000, 6115] {
            assert_eq!(channel_of(f), UNKNOWN_CHANNEL, "frequency {}", f);
        }
    }

    #[test]
    fn test_band_classification() {
        assert_eq!(FrequencyBand::from_frequency(2437), FrequencyBand::Band2_4GHz);
        assert_eq!(FrequencyBand::from_frequency(5180), FrequencyBand::Band5GHz);
        assert_eq!(FrequencyBand::from_frequency(6115), FrequencyBand::Band6GHz);
        assert_eq!(FrequencyBand::from_frequency(0), FrequencyBand::Unknown);
        assert_eq!(FrequencyBand::Band2_4GHz.to_string(), "2.4 GHz");
    }
}
