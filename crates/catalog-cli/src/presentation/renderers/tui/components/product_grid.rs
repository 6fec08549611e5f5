use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::Component;
use crate::presentation::formatters::fit;
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::view_models::{CellViewModel, RowViewModel};
use catalog_engine::GridMetrics;

/// Blank cells between two cards, taken out of `item_width`.
const CARD_GAP: usize = 2;

pub(crate) struct ProductGridComponent;

impl Component for ProductGridComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        // Last column is the scrollbar
        let grid_area = Rect {
            width: area.width.saturating_sub(1),
            ..area
        };
        state
            .grid
            .resize(u32::from(grid_area.width), u32::from(grid_area.height));

        let metrics = *state.grid.metrics();
        let vm = state.view_model();

        if let Some(message) = vm.message {
            let y = area.y + area.height / 3;
            let message_area = Rect {
                y,
                height: area.height.min(1),
                ..area
            };
            let widget = Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(widget, message_area);
            return;
        }

        let lines: Vec<Line> = (0..grid_area.height)
            .map(|y| {
                let content_y = vm.scroll_offset + u64::from(y);
                match vm.row_at(content_y) {
                    Some((row, line)) => row_line(row, line, &metrics),
                    None => Line::default(),
                }
            })
            .collect();
        f.render_widget(Paragraph::new(lines), grid_area);

        let mut scrollbar = ScrollbarState::new(vm.total_height as usize)
            .viewport_content_length(grid_area.height as usize)
            .position(vm.scroll_offset as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar,
        );
    }
}

/// One screen line cutting through a materialized row.
pub(crate) fn row_line(row: &RowViewModel, line: u32, metrics: &GridMetrics) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(metrics.padding as usize / 2))];
    for cell in &row.cells {
        spans.extend(card_spans(cell, line, metrics.item_width as usize));
    }
    Line::from(spans)
}

/// Line `line` of one grid cell, exactly `item_width` cells wide.
///
/// Cards are drawn as a box: border, name, category, rating (blank when
/// ratings are off), price, border. Lines past the box are the row gap.
pub(crate) fn card_spans(cell: &CellViewModel, line: u32, item_width: usize) -> Vec<Span<'static>> {
    let box_width = item_width.saturating_sub(CARD_GAP);
    let blank = || vec![Span::raw(" ".repeat(item_width))];

    let CellViewModel::Card(card) = cell else {
        return blank();
    };
    if box_width < 5 {
        return blank();
    }

    let inner = box_width - 4;
    let border = Style::default().fg(Color::DarkGray);
    let body = |text: &str, style: Style| {
        vec![
            Span::styled("│ ", border),
            Span::styled(fit(text, inner), style),
            Span::styled(" │", border),
        ]
    };

    let mut spans = match line {
        0 => vec![Span::styled(
            format!("┌{}┐", "─".repeat(box_width - 2)),
            border,
        )],
        1 => body(&card.name, Style::default().add_modifier(Modifier::BOLD)),
        2 => body(&card.category, Style::default().fg(Color::DarkGray)),
        3 => body(
            card.rating.as_deref().unwrap_or(""),
            Style::default().fg(Color::Yellow),
        ),
        4 => body(&card.price, Style::default().fg(Color::Green)),
        5 => vec![Span::styled(
            format!("└{}┘", "─".repeat(box_width - 2)),
            border,
        )],
        _ => return blank(),
    };
    spans.push(Span::raw(" ".repeat(item_width - box_width)));
    spans
}
