use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct SummaryComponent;

impl Component for SummaryComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        // Hidden while the first fetch is in flight
        if state.surface.is_loading() {
            return;
        }

        let mut spans = vec![Span::styled(
            format!(" {}", state.view.summary()),
            Style::default().fg(Color::White),
        )];
        if state.flags.show_ratings {
            spans.push(Span::styled(
                "  · ratings on",
                Style::default().fg(Color::DarkGray),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
