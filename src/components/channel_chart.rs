use crate::app::App;
use crate::components::Component;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

/// Bar per channel, ascending, coloured by congestion.
pub struct ChannelChart;

impl Component for ChannelChart {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let histogram = &app.aggregate.histogram;
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Theme::border_style())
            .title(Span::styled(
                format!(" Channel Usage ({} channels) ", histogram.len()),
                Theme::title_style(),
            ));

        if histogram.is_empty() {
            let message = if app.is_scanning { "Scanning..." } else { "No networks found" };
            frame.render_widget(Paragraph::new(message).block(block), area);
            return;
        }

        let current = app.recommendation.map(|r| r.current_channel);
        let best = app
            .recommendation
            .filter(|r| r.should_switch())
            .map(|r| r.best_channel);

        let bars: Vec<Bar> = histogram
            .iter()
            .map(|(channel, count)| {
                let style = if Some(channel) == current {
                    Theme::current_channel_style()
                } else if Some(channel) == best {
                    Theme::best_channel_style()
                } else {
                    Theme::congestion_style(count)
                };
                let label = if channel == 0 { "?".to_string() } else { channel.to_string() };

                Bar::default()
                    .value(count as u64)
                    .label(Line::from(label))
                    .style(style)
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .bar_width(3)
            .bar_gap(1)
            .data(BarGroup::default().bars(&bars));

        frame.render_widget(chart, area);
    }
}
