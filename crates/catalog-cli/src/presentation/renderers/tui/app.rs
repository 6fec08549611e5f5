use crate::presentation::view_models::{CatalogViewModel, SurfaceState};
use catalog_engine::{DerivedView, GridMetrics, VirtualGrid, derive_view};
use catalog_runtime::StoreSnapshot;
use catalog_types::{CategoryFilter, FeatureFlags, FilterState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tokio::sync::watch;

/// Lines scrolled per mouse wheel notch.
const WHEEL_STEP: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Search,
}

pub(crate) struct AppState {
    updates: watch::Receiver<StoreSnapshot>,
    pub snapshot: StoreSnapshot,
    pub filter: FilterState,
    pub flags: FeatureFlags,
    pub view: DerivedView,
    pub grid: VirtualGrid,
    pub surface: SurfaceState,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(mut updates: watch::Receiver<StoreSnapshot>, flags: FeatureFlags) -> Self {
        let snapshot = updates.borrow_and_update().clone();
        let filter = FilterState::new();
        let view = derive_view(&snapshot.products, &filter);
        let surface = SurfaceState::derive(snapshot.is_loading, view.shown());

        let mut grid = VirtualGrid::new(GridMetrics::terminal());
        grid.set_item_count(view.shown());

        Self {
            updates,
            snapshot,
            filter,
            flags,
            view,
            grid,
            surface,
            input_mode: InputMode::Normal,
            should_quit: false,
        }
    }

    /// Pull the latest store snapshot, if one was published since the last call.
    pub fn sync_store(&mut self) -> bool {
        if !self.updates.has_changed().unwrap_or(false) {
            return false;
        }
        self.snapshot = self.updates.borrow_and_update().clone();
        tracing::debug!(
            products = self.snapshot.products.len(),
            is_loading = self.snapshot.is_loading,
            "store snapshot received"
        );
        self.refresh_view();
        true
    }

    fn refresh_view(&mut self) {
        self.view = derive_view(&self.snapshot.products, &self.filter);
        self.grid.set_item_count(self.view.shown());
        self.surface = self
            .surface
            .transition(self.snapshot.is_loading, self.view.shown());
    }

    pub fn view_model(&self) -> CatalogViewModel {
        CatalogViewModel::build(
            self.surface,
            &self.view,
            &self.filter,
            self.grid.frame(),
            self.flags,
        )
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.refresh_view();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.set_category(category);
        self.refresh_view();
    }

    /// Step through the category list, wrapping at either end.
    pub fn cycle_category(&mut self, forward: bool) {
        let categories = &self.view.categories;
        if categories.is_empty() {
            return;
        }

        let len = categories.len();
        let next = match categories.iter().position(|c| *c == self.filter.category) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        let category = categories[next].clone();
        self.set_category(category);
    }

    pub fn toggle_sort(&mut self) {
        self.filter.set_sort(self.filter.sort.toggled());
        self.refresh_view();
    }

    pub fn reset_filters(&mut self) {
        self.filter.reset();
        self.refresh_view();
    }

    pub fn toggle_ratings(&mut self) {
        self.flags = self.flags.with_ratings(!self.flags.show_ratings);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                let mut query = self.filter.query.clone();
                query.pop();
                self.set_query(query);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.set_query("");
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut query = self.filter.query.clone();
                query.push(ch);
                self.set_query(query);
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Char('c') => self.cycle_category(true),
            KeyCode::Char('C') => self.cycle_category(false),
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char('r') => self.reset_filters(),
            KeyCode::Char('t') => self.toggle_ratings(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.grid.scroll_rows(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.grid.scroll_rows(-1);
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.grid.page_down();
            }
            KeyCode::PageUp => {
                self.grid.page_up();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.grid.home();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.grid.end();
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.grid.scroll_by(WHEEL_STEP);
            }
            MouseEventKind::ScrollUp => {
                self.grid.scroll_by(-WHEEL_STEP);
            }
            _ => {}
        }
    }
}
