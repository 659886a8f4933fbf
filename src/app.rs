use crate::analysis::{aggregate, recommend, Aggregate, Recommendation};
use crate::components::{ChannelChart, Component, NetworkTable, StatusBar, SuggestionPanel};
use crate::scanner::{AccessPoint, ScanSnapshot, Scanner};
use crate::theme::Theme;
use chrono::{DateTime, Local};
use color_eyre::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Auto,
    Manual,
}

pub struct App {
    scanner: Arc<dyn Scanner>,
    /// Latest scan, replaced wholesale on every scan
    pub snapshot: ScanSnapshot,
    /// Named networks (strongest first) and the channel histogram
    pub aggregate: Aggregate,
    pub recommendation: Option<Recommendation>,
    pub selected_index: usize,
    pub scan_mode: ScanMode,
    pub auto_interval: Duration,
    pub last_scan: Instant,
    pub last_scan_at: Option<DateTime<Local>>,
    pub is_scanning: bool,
    pub should_quit: bool,
    pub show_help: bool,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(scanner: Arc<dyn Scanner>, auto_interval: Duration, start_auto: bool) -> Self {
        Self {
            scanner,
            snapshot: ScanSnapshot::default(),
            aggregate: Aggregate::default(),
            recommendation: None,
            selected_index: 0,
            scan_mode: if start_auto {
                ScanMode::Auto
            } else {
                ScanMode::Manual
            },
            auto_interval,
            // Trigger immediate scan; intervals longer than uptime cannot be subtracted
            last_scan: Instant::now()
                .checked_sub(auto_interval)
                .unwrap_or_else(Instant::now),
            last_scan_at: None,
            is_scanning: false,
            should_quit: false,
            show_help: false,
            error_message: None,
            status_message: None,
        }
    }

    pub fn scanner_name(&self) -> &'static str {
        self.scanner.name()
    }

    /// Swap the scan source, e.g. to demo data after a platform failure
    pub fn set_scanner(&mut self, scanner: Arc<dyn Scanner>) {
        info!(from = self.scanner.name(), to = scanner.name(), "switching scanner");
        self.scanner = scanner;
    }

    /// Named networks, strongest signal first
    pub fn networks(&self) -> &[AccessPoint] {
        &self.aggregate.networks
    }

    pub fn selected_network(&self) -> Option<&AccessPoint> {
        self.aggregate.networks.get(self.selected_index)
    }

    /// Suggestion text for the latest scan, empty when there is none
    pub fn suggestion(&self) -> String {
        self.recommendation
            .map(|recommendation| recommendation.to_string())
            .unwrap_or_default()
    }

    pub fn is_connected(&self, network: &AccessPoint) -> bool {
        self.snapshot
            .current
            .as_ref()
            .is_some_and(|current| current.hardware_id.eq_ignore_ascii_case(&network.hardware_id))
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some(msg);
    }

    pub fn set_error(&mut self, msg: String) {
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn navigate_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn navigate_down(&mut self) {
        if self.selected_index + 1 < self.aggregate.networks.len() {
            self.selected_index += 1;
        }
    }

    pub fn toggle_scan_mode(&mut self) {
        self.scan_mode = match self.scan_mode {
            ScanMode::Auto => ScanMode::Manual,
            ScanMode::Manual => ScanMode::Auto,
        };
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_scan(&self) -> bool {
        if self.is_scanning {
            return false;
        }
        match self.scan_mode {
            ScanMode::Auto => self.last_scan.elapsed() >= self.auto_interval,
            ScanMode::Manual => false,
        }
    }

    pub fn trigger_scan(&mut self) {
        self.is_scanning = true;
    }

    /// Get time until next auto-refresh
    pub fn get_next_refresh_secs(&self) -> Option<u64> {
        if matches!(self.scan_mode, ScanMode::Auto) && !self.is_scanning {
            Some(self.auto_interval.saturating_sub(self.last_scan.elapsed()).as_secs())
        } else {
            None
        }
    }

    /// Run the scanner off the runtime and analyse the result
    pub async fn perform_scan(&mut self) -> Result<()> {
        self.is_scanning = true;
        let scanner = Arc::clone(&self.scanner);
        let result = tokio::task::spawn_blocking(move || scanner.scan()).await;

        self.is_scanning = false;
        self.last_scan = Instant::now();

        let snapshot = result??;
        self.apply_snapshot(snapshot);
        Ok(())
    }

    /// Replace the current analysis with one computed from `snapshot`
    pub fn apply_snapshot(&mut self, snapshot: ScanSnapshot) {
        let selected_bssid = self.selected_network().map(|n| n.hardware_id.clone());

        self.aggregate = aggregate(&snapshot.access_points);
        self.recommendation = recommend(snapshot.current_frequency(), &snapshot.access_points);
        self.snapshot = snapshot;
        self.last_scan_at = Some(Local::now());
        self.status_message = None;

        info!(
            scanner = self.scanner.name(),
            seen = self.snapshot.access_points.len(),
            named = self.aggregate.networks.len(),
            channels = self.aggregate.histogram.len(),
            connected = self.snapshot.current.is_some(),
            "scan analysed"
        );

        // Keep the cursor on the same radio if it is still visible
        self.selected_index = selected_bssid
            .and_then(|bssid| {
                self.aggregate
                    .networks
                    .iter()
                    .position(|n| n.hardware_id == bssid)
            })
            .unwrap_or(0);
        debug!(selected = self.selected_index, "selection restored");
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Main content
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[0]);

        NetworkTable.render(frame, main_chunks[0], self);

        let side_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(9)])
            .split(main_chunks[1]);

        ChannelChart.render(frame, side_chunks[0], self);
        SuggestionPanel.render(frame, side_chunks[1], self);

        StatusBar.render(frame, chunks[1], self);

        if self.show_help {
            self.render_help_overlay(frame);
        }
        if let Some(ref error) = self.error_message {
            self.render_error_overlay(frame, error);
        }
    }

    fn render_error_overlay(&self, frame: &mut Frame, error: &str) {
        use ratatui::style::{Color, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

        let area = centered_rect(70, 50, frame.area());

        let error_text = vec![
            Line::from(""),
            Line::from(Span::styled("WiFi Scan Failed", Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from(error.to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Tip: Run with --demo to see the analyzer with simulated networks",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
            Line::from("Press 'd' to switch to demo mode, 'r' to retry, or 'q' to quit"),
        ];

        let paragraph = Paragraph::new(error_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(Span::styled(" Error ", Style::default().fg(Color::Red))),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Clear, Paragraph};

        let area = centered_rect(50, 60, frame.area());

        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled("Keyboard Shortcuts", Theme::title_style())),
            Line::from(""),
            Line::from("\u{2191}/\u{2193} or j/k   Navigate networks"),
            Line::from("r              Rescan now"),
            Line::from("a              Toggle auto/manual mode"),
            Line::from("d              Switch to demo data"),
            Line::from("?              Toggle this help"),
            Line::from("q / Esc        Quit"),
            Line::from(""),
            Line::from(Span::styled("Channel Chart", Theme::title_style())),
            Line::from(""),
            Line::from(vec![
                Span::styled("\u{2588}\u{2588}", Theme::current_channel_style()),
                Span::raw("  Your channel"),
            ]),
            Line::from(vec![
                Span::styled("\u{2588}\u{2588}", Theme::best_channel_style()),
                Span::raw("  Suggested channel"),
            ]),
            Line::from(""),
            Line::from("Press ? to close"),
        ];

        let paragraph = Paragraph::new(help_text).block(
            Block::default()
                .borders(Borders::ALL)
                .style(Theme::border_style())
                .title(Span::styled(" Help ", Theme::title_style())),
        );

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::DemoScanner;
    use color_eyre::eyre::eyre;

    struct FixtureScanner(ScanSnapshot);

    impl Scanner for FixtureScanner {
        fn name(&self) -> &'static str {
            "fixture"
        }

        fn scan(&self) -> Result<ScanSnapshot> {
            Ok(self.0.clone())
        }
    }

    struct FailingScanner;

    impl Scanner for FailingScanner {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn scan(&self) -> Result<ScanSnapshot> {
            Err(eyre!("no wireless interface"))
        }
    }

    fn congested_snapshot() -> ScanSnapshot {
        let mut access_points: Vec<AccessPoint> = (0..5)
            .map(|i| AccessPoint::new(format!("Ch6_{}", i), format!("06:00:00:00:00:0{}", i), 2437, -60 - i))
            .collect();
        access_points.push(AccessPoint::new("Quiet", "01:00:00:00:00:01", 2412, -40));
        access_points.push(AccessPoint::new("", "FF:00:00:00:00:01", 2462, -30));
        let current = access_points.first().cloned();
        ScanSnapshot {
            access_points,
            current,
        }
    }

    fn app_with(scanner: impl Scanner + 'static) -> App {
        App::new(Arc::new(scanner), Duration::from_secs(5), false)
    }

    #[tokio::test]
    async fn test_scan_populates_analysis() {
        let mut app = app_with(FixtureScanner(congested_snapshot()));
        app.perform_scan().await.unwrap();

        assert!(!app.is_scanning);
        assert_eq!(app.networks().len(), 6);
        assert_eq!(app.networks()[0].name, "Quiet");
        assert_eq!(app.aggregate.histogram.count(6), 5);
        assert!(app.suggestion().contains("Consider changing to channel 1"));
        assert!(app.is_connected(&app.networks()[1]));
        assert!(app.last_scan_at.is_some());
    }

    #[tokio::test]
    async fn test_scan_failure_is_returned() {
        let mut app = app_with(FailingScanner);
        let err = app.perform_scan().await.unwrap_err();

        assert!(err.to_string().contains("no wireless interface"));
        assert!(!app.is_scanning);
        assert!(app.suggestion().is_empty());
    }

    #[test]
    fn test_not_connected_has_no_suggestion() {
        let mut snapshot = congested_snapshot();
        snapshot.current = None;

        let mut app = app_with(FixtureScanner(ScanSnapshot::default()));
        app.apply_snapshot(snapshot);
        assert!(app.recommendation.is_none());
        assert_eq!(app.suggestion(), "");
    }

    #[test]
    fn test_selection_follows_bssid_across_scans() {
        let mut app = app_with(FixtureScanner(ScanSnapshot::default()));
        app.apply_snapshot(congested_snapshot());
        app.navigate_down();
        app.navigate_down();
        let bssid = app.selected_network().unwrap().hardware_id.clone();

        let mut rescan = congested_snapshot();
        rescan.access_points.retain(|ap| ap.name != "Quiet");
        app.apply_snapshot(rescan);

        assert_eq!(app.selected_network().unwrap().hardware_id, bssid);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut app = app_with(FixtureScanner(ScanSnapshot::default()));
        app.navigate_up();
        app.navigate_down();
        assert_eq!(app.selected_index, 0);

        app.apply_snapshot(congested_snapshot());
        for _ in 0..20 {
            app.navigate_down();
        }
        assert_eq!(app.selected_index, 5);
    }

    #[test]
    fn test_huge_interval_does_not_panic() {
        let app = App::new(Arc::new(DemoScanner), Duration::from_secs(u64::MAX), true);
        assert_eq!(app.scan_mode, ScanMode::Auto);
        assert!(!app.should_scan());
    }

    #[test]
    fn test_status_cleared_by_next_scan() {
        let mut app = app_with(FixtureScanner(ScanSnapshot::default()));
        app.set_status("Using simulated networks".to_string());
        app.apply_snapshot(DemoScanner.scan().unwrap());

        assert!(app.status_message.is_none());
        assert!(app.last_scan_at.is_some());
    }

    #[test]
    fn test_manual_mode_never_auto_scans() {
        let mut app = app_with(FixtureScanner(ScanSnapshot::default()));
        assert!(!app.should_scan());
        assert!(app.get_next_refresh_secs().is_none());

        app.toggle_scan_mode();
        assert_eq!(app.scan_mode, ScanMode::Auto);
        assert!(app.should_scan());
    }
}
