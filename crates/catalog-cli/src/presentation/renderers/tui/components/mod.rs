use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod filter_bar;
pub(crate) mod footer;
pub(crate) mod product_grid;
pub(crate) mod summary;

pub(crate) use filter_bar::FilterBarComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use product_grid::ProductGridComponent;
pub(crate) use summary::SummaryComponent;
