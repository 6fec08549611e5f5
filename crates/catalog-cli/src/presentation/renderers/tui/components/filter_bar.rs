use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::{AppState, InputMode};
use crate::presentation::view_models::FilterBarViewModel;

const SEARCH_PLACEHOLDER: &str = "Search products…";

pub(crate) struct FilterBarComponent;

impl Component for FilterBarComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let bar = FilterBarViewModel::from_filter(&state.filter);
        let searching = state.input_mode == InputMode::Search;
        let label = Style::default().fg(Color::DarkGray);

        let query = if searching {
            Span::styled(
                format!("{}▏", bar.query),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else if bar.query.is_empty() {
            Span::styled(SEARCH_PLACEHOLDER, label.add_modifier(Modifier::ITALIC))
        } else {
            Span::raw(bar.query)
        };

        let line = Line::from(vec![
            Span::styled("Search: ", label),
            query,
            Span::raw("   "),
            Span::styled("Category: ", label),
            Span::styled(bar.category, Style::default().fg(Color::Cyan)),
            Span::raw("   "),
            Span::styled("Sort: ", label),
            Span::styled(bar.sort, Style::default().fg(Color::Cyan)),
            Span::raw("   "),
            Span::styled("[r] Reset", label),
        ]);

        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Catalog ")
                .border_style(label),
        );

        f.render_widget(widget, area);
    }
}
