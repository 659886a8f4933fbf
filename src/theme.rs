use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    /// Colour for a channel's bar, by how many named networks share it
    pub fn congestion_color(count: usize) -> Color {
        match count {
            0..=1 => Color::Green,
            2..=3 => Color::Yellow,
            4..=5 => Color::Rgb(255, 165, 0), // Orange
            _ => Color::Red,
        }
    }

    pub fn congestion_style(count: usize) -> Style {
        Style::default().fg(Self::congestion_color(count))
    }

    /// Bar for the channel we are connected on
    pub fn current_channel_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    /// Bar for the suggested channel
    pub fn best_channel_style() -> Style {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn auto_mode_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn manual_mode_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Marker next to the network we are associated with
    pub fn connected_style() -> Style {
        Style::default().fg(Color::Green)
    }

    /// Suggestion text when a channel change is advised
    pub fn warning_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok_style() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn signal_style(dbm: i32) -> Style {
        let color = match dbm {
            s if s >= -50 => Color::Green,
            s if s >= -70 => Color::Yellow,
            _ => Color::Red,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_congestion_colors() {
        assert_eq!(Theme::congestion_color(1), Color::Green);
        assert_eq!(Theme::congestion_color(3), Color::Yellow);
        assert_eq!(Theme::congestion_color(4), Color::Rgb(255, 165, 0));
        assert_eq!(Theme::congestion_color(9), Color::Red);
    }
}
