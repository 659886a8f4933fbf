//! Tracing setup.
//!
//! The TUI owns stdout/stderr while it runs, so interactive sessions only log
//! when a file is given. `RUST_LOG` always overrides the `-v` level.

use color_eyre::Result;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

/// Log to `log_file` if given, else to stderr unless `interactive`.
pub fn init(verbosity: u8, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(verbosity));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| color_eyre::eyre::eyre!("failed to set up logging: {}", e))?;
        }
        None if !interactive => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| color_eyre::eyre::eyre!("failed to set up logging: {}", e))?;
        }
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(7), "trace");
    }
}
