use crate::app::App;
use crate::components::Component;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub struct SuggestionPanel;

impl Component for SuggestionPanel {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let mut lines = Vec::new();

        match app.snapshot.current {
            Some(ref current) => lines.push(Line::from(vec![
                Span::styled("Connected: ", Theme::header_style()),
                Span::raw(format!(
                    "{} (channel {}, {}, {} dBm)",
                    current.display_name(),
                    current.channel(),
                    current.band(),
                    current.signal_dbm
                )),
            ])),
            None => lines.push(Line::from(Span::styled(
                "Not connected to a known network",
                Theme::help_style(),
            ))),
        }
        lines.push(Line::from(""));

        match app.recommendation {
            Some(recommendation) => {
                let style = if recommendation.should_switch() {
                    Theme::warning_style()
                } else {
                    Theme::ok_style()
                };
                for text in recommendation.to_string().lines() {
                    lines.push(Line::from(Span::styled(text.to_string(), style)));
                }
            }
            None => lines.push(Line::from(Span::styled(
                "No suggestion until connected and networks are visible.",
                Theme::help_style(),
            ))),
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Theme::border_style())
                    .title(Span::styled(" Suggestion ", Theme::title_style())),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}
