mod channel_chart;
mod network_table;
mod status_bar;
mod suggestion_panel;

pub use channel_chart::ChannelChart;
pub use network_table::NetworkTable;
pub use status_bar::StatusBar;
pub use suggestion_panel::SuggestionPanel;

use crate::app::App;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait Component {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App);
}
