//! Responsive, virtualized product grid.
//!
//! `VirtualGrid` keeps the inputs that drive layout (metrics, measured
//! viewport, item count) and recomputes columns -> row count -> window as a
//! unit whenever any of them changes, so the window can never index rows
//! that a narrower view no longer has.

use crate::layout::{DEFAULT_COLUMNS, GridMetrics, column_count, row_count};
use crate::window::{Viewport, Window, compute_window};
use serde::Serialize;

/// Everything the presentation layer needs to draw one frame of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GridFrame {
    pub columns: usize,
    pub item_count: usize,
    pub row_count: usize,
    pub total_height: u64,
    pub scroll_offset: u64,
    pub window: Window,
}

impl GridFrame {
    /// Items of a materialized row, padded with `None` to `columns` slots.
    pub fn row_slots<'a, T>(&self, view: &'a [T], row_index: usize) -> Vec<Option<&'a T>> {
        row_slots(view, row_index, self.columns)
    }
}

#[derive(Debug, Clone)]
pub struct VirtualGrid {
    metrics: GridMetrics,
    viewport: Option<Viewport>,
    item_count: usize,
    frame: GridFrame,
}

impl VirtualGrid {
    pub fn new(metrics: GridMetrics) -> Self {
        let mut grid = Self {
            metrics,
            viewport: None,
            item_count: 0,
            frame: GridFrame::default(),
        };
        grid.recompute();
        grid
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn frame(&self) -> &GridFrame {
        &self.frame
    }

    pub fn columns(&self) -> usize {
        self.frame.columns
    }

    /// New container size. Keeps the scroll position, re-clamped.
    pub fn resize(&mut self, width: u32, height: u32) -> &GridFrame {
        let scroll_offset = self.viewport.map(|v| v.scroll_offset).unwrap_or(0);
        self.viewport = Some(Viewport {
            width,
            height,
            scroll_offset,
        });
        self.recompute();
        &self.frame
    }

    /// New length of the derived view (e.g. after a filter change).
    pub fn set_item_count(&mut self, item_count: usize) -> &GridFrame {
        self.item_count = item_count;
        self.recompute();
        &self.frame
    }

    pub fn scroll_to(&mut self, offset: u64) -> &GridFrame {
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.scroll_offset = offset;
        }
        self.recompute();
        &self.frame
    }

    pub fn scroll_by(&mut self, delta: i64) -> &GridFrame {
        let current = self.frame.scroll_offset;
        let target = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta as u64)
        };
        self.scroll_to(target)
    }

    /// Scroll by whole rows.
    pub fn scroll_rows(&mut self, rows: i64) -> &GridFrame {
        self.scroll_by(rows.saturating_mul(i64::from(self.metrics.row_height)))
    }

    pub fn page_down(&mut self) -> &GridFrame {
        let page = self.viewport.map(|v| v.height).unwrap_or(0).max(1);
        self.scroll_by(i64::from(page))
    }

    pub fn page_up(&mut self) -> &GridFrame {
        let page = self.viewport.map(|v| v.height).unwrap_or(0).max(1);
        self.scroll_by(-i64::from(page))
    }

    pub fn home(&mut self) -> &GridFrame {
        self.scroll_to(0)
    }

    pub fn end(&mut self) -> &GridFrame {
        self.scroll_to(u64::MAX)
    }

    fn max_scroll(&self, total_height: u64) -> u64 {
        let viewport_height = self.viewport.map(|v| v.height).unwrap_or(0);
        total_height.saturating_sub(u64::from(viewport_height))
    }

    fn recompute(&mut self) {
        let columns = match self.viewport {
            Some(viewport) => column_count(viewport.width, &self.metrics),
            None => DEFAULT_COLUMNS,
        };
        let rows = row_count(self.item_count, columns);
        let total_height = (rows as u64).saturating_mul(u64::from(self.metrics.row_height));
        let max_scroll = self.max_scroll(total_height);

        let window = match self.viewport.as_mut() {
            Some(viewport) => {
                viewport.scroll_offset = viewport.scroll_offset.min(max_scroll);
                compute_window(
                    rows,
                    self.metrics.row_height,
                    viewport.scroll_offset,
                    viewport.height,
                    self.metrics.overscan,
                )
            }
            // Nothing is materialized until the container has been measured
            None => Window {
                rows: Vec::new(),
                total_height,
            },
        };

        self.frame = GridFrame {
            columns,
            item_count: self.item_count,
            row_count: rows,
            total_height,
            scroll_offset: self.viewport.map(|v| v.scroll_offset).unwrap_or(0),
            window,
        };
    }
}

/// Slice row `row_index` out of `view`, `columns` slots wide.
///
/// The final row of a view may be short; its missing slots are `None` so
/// every row has the same number of cells.
pub fn row_slots<T>(view: &[T], row_index: usize, columns: usize) -> Vec<Option<&T>> {
    let columns = columns.max(1);
    let start = row_index.saturating_mul(columns);

    (start..start.saturating_add(columns))
        .map(|i| view.get(i))
        .collect()
}
