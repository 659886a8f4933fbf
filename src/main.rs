use clap::Parser;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use wifi_channel_advisor::app::App;
use wifi_channel_advisor::event::{Event, EventHandler};
use wifi_channel_advisor::scanner::{DemoScanner, PlatformScanner, Scanner};
use wifi_channel_advisor::{logging, report, tui};

#[derive(Parser, Debug)]
#[command(name = "wifi-channel-advisor")]
#[command(author = "Aviv E")]
#[command(version)]
#[command(about = "Map WiFi channel congestion around you and suggest a quieter channel")]
struct Args {
    /// Auto-refresh interval in seconds
    #[arg(short, long, default_value = "5")]
    interval: u64,

    /// Start in manual mode (no auto-refresh)
    #[arg(short = 'm', long)]
    manual: bool,

    /// Run with simulated WiFi networks (for testing/demo)
    #[arg(short, long)]
    demo: bool,

    /// SSID you are connected to, if the OS will not report it
    #[arg(short, long)]
    connected: Option<String>,

    /// Print a single report to stdout instead of starting the UI
    #[arg(long)]
    once: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(args.verbose, args.log_file.as_deref(), !args.once)?;

    let scanner: Arc<dyn Scanner> = if args.demo {
        Arc::new(DemoScanner)
    } else {
        Arc::new(PlatformScanner::new(args.connected.clone()))
    };
    info!(scanner = scanner.name(), once = args.once, "starting");

    if args.once {
        let snapshot = tokio::task::spawn_blocking(move || scanner.scan()).await??;
        print!("{}", report::render(&snapshot)?);
        return Ok(());
    }

    let interval = Duration::from_secs(args.interval.max(1));
    let mut terminal = tui::init()?;
    let mut app = App::new(scanner, interval, !args.manual);

    // Restore the terminal whether the loop ends normally or with an error
    let result = run(&mut terminal, &mut app).await;
    tui::restore()?;
    result
}

async fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    let mut events = EventHandler::new(Duration::from_millis(100));

    // Initial scan
    scan(app).await;

    loop {
        terminal.draw(|frame| app.render(frame))?;

        match events.next().await? {
            Event::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    app.quit();
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    KeyCode::Up | KeyCode::Char('k') => app.navigate_up(),
                    KeyCode::Down | KeyCode::Char('j') => app.navigate_down(),
                    KeyCode::Char('r') => {
                        app.trigger_scan();
                        terminal.draw(|frame| app.render(frame))?;
                        scan(app).await;
                    }
                    KeyCode::Char('d') => {
                        app.set_scanner(Arc::new(DemoScanner));
                        if scan(app).await {
                            app.set_status("Using simulated networks".to_string());
                        }
                    }
                    KeyCode::Char('a') => app.toggle_scan_mode(),
                    KeyCode::Char('?') => app.toggle_help(),
                    _ => {}
                }
            }
            Event::Tick => {
                if app.should_scan() {
                    scan(app).await;
                }
            }
            Event::Resize => {
                // Picked up by the next draw
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Scan once, showing failures in the UI instead of exiting
async fn scan(app: &mut App) -> bool {
    match app.perform_scan().await {
        Ok(()) => {
            app.clear_error();
            true
        }
        Err(e) => {
            warn!(error = %e, "scan failed");
            app.set_error(format!("{}", e));
            false
        }
    }
}
