use crate::app::App;
use crate::components::Component;
use crate::theme::Theme;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

/// Named networks, strongest first, with the channel each one occupies.
pub struct NetworkTable;

impl Component for NetworkTable {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let header = Row::new(["SSID", "Signal", "dBm", "Channel", "BSSID"])
            .style(Theme::header_style())
            .height(1);

        let rows = app.networks().iter().enumerate().map(|(idx, network)| {
            let is_selected = idx == app.selected_index;

            let select_indicator = if is_selected { "\u{25b6}" } else { " " };
            let (connect_indicator, connect_style) = if app.is_connected(network) {
                ("\u{25cf}", Theme::connected_style())
            } else {
                (" ", Style::default())
            };

            let ssid_cell = Cell::from(Line::from(vec![
                Span::raw(format!("{} ", select_indicator)),
                Span::styled(connect_indicator, connect_style),
                Span::raw(format!(" {}", truncate(network.display_name(), 18))),
            ]));

            let signal_cell = Cell::from(Span::styled(
                network.signal_bars(),
                Theme::signal_style(network.signal_dbm),
            ));
            let dbm_cell = Cell::from(format!("{:4}", network.signal_dbm));

            let channel = network.channel();
            let channel_cell = Cell::from(Span::styled(
                format!("{:3} ({})", channel, network.band()),
                Theme::congestion_style(app.aggregate.histogram.count(channel)),
            ));

            let bssid_cell = Cell::from(network.hardware_id.clone());

            let row = Row::new([ssid_cell, signal_cell, dbm_cell, channel_cell, bssid_cell]);
            if is_selected {
                row.style(Theme::selected_style())
            } else {
                row
            }
        });

        let hidden = app
            .snapshot
            .access_points
            .len()
            .saturating_sub(app.networks().len());
        let title = if hidden > 0 {
            format!(" Networks ({} found, {} hidden) ", app.networks().len(), hidden)
        } else {
            format!(" Networks ({} found) ", app.networks().len())
        };

        let table = Table::new(
            rows,
            [
                Constraint::Min(24),    // SSID
                Constraint::Length(7),  // Signal bars
                Constraint::Length(5),  // dBm
                Constraint::Length(15), // Channel
                Constraint::Length(18), // BSSID
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Theme::border_style())
                .title(Span::styled(title, Theme::title_style())),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut table_state = TableState::default();
        table_state.select(Some(app.selected_index));

        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}
