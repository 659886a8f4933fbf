use crate::app::{App, ScanMode};
use crate::components::Component;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct StatusBar;

impl Component for StatusBar {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let mode_span = match app.scan_mode {
            ScanMode::Auto => match app.get_next_refresh_secs() {
                Some(secs) => Span::styled(
                    format!("[Auto] next scan in {}s", secs),
                    Theme::auto_mode_style(),
                ),
                None => Span::styled("[Auto]", Theme::auto_mode_style()),
            },
            ScanMode::Manual => Span::styled("[Manual]", Theme::manual_mode_style()),
        };

        let status_span = if app.is_scanning {
            Span::raw(" Scanning...")
        } else if let Some(ref msg) = app.status_message {
            Span::styled(format!(" {}", msg), Theme::status_style())
        } else if let Some(at) = app.last_scan_at {
            Span::styled(
                format!(" {} scan at {}", app.scanner_name(), at.format("%H:%M:%S")),
                Theme::status_style(),
            )
        } else {
            Span::raw("")
        };

        let help_text = Span::styled(
            " | \u{2191}\u{2193} Nav | r Scan | a Auto | d Demo | ? Help | q Quit",
            Theme::help_style(),
        );

        let line = Line::from(vec![mode_span, status_span, help_text]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
