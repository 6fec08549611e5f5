use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::AppState;
use super::components::{
    Component, FilterBarComponent, FooterComponent, ProductGridComponent, SummaryComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    FilterBarComponent.render(f, main_chunks[0], state);
    SummaryComponent.render(f, main_chunks[1], state);
    // Grid measures itself here, so it must render before the footer reads the frame
    ProductGridComponent.render(f, main_chunks[2], state);
    FooterComponent.render(f, main_chunks[3], state);
}
