use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::{AppState, InputMode};

const NORMAL_KEYS: &str =
    "/ search · c/C category · s sort · r reset · t ratings · ↑↓ PgUp PgDn scroll · q quit";
const SEARCH_KEYS: &str = "type to filter · Backspace delete · Ctrl+U clear · Enter/Esc done";

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let keys = match state.input_mode {
            InputMode::Normal => NORMAL_KEYS,
            InputMode::Search => SEARCH_KEYS,
        };

        let mut spans = vec![Span::styled(keys, Style::default().fg(Color::DarkGray))];

        let frame = state.grid.frame();
        if frame.row_count > 0 && !state.surface.is_loading() {
            let row_height = u64::from(state.grid.metrics().row_height.max(1));
            let first_row = frame.scroll_offset / row_height + 1;
            spans.push(Span::styled(
                format!("   row {}/{}", first_row.min(frame.row_count as u64), frame.row_count),
                Style::default().fg(Color::Cyan),
            ));
        }

        let widget = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(widget, area);
    }
}
