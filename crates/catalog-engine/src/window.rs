//! Fixed-height row windowing.
//!
//! Only the rows intersecting the viewport (plus an overscan margin on each
//! side) are materialized. The reported total height always covers every
//! row so the scrollbar reflects the true content size.

use serde::Serialize;
use std::ops::RangeInclusive;

/// Measured state of the scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scroll_offset: u64,
}

/// One materialized row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VirtualRow {
    pub index: usize,
    /// `index * row_height`
    pub top: u64,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Window {
    pub rows: Vec<VirtualRow>,
    /// `row_count * row_height`
    pub total_height: u64,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index range of the materialized rows, if any.
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some(first.index..=last.index),
            _ => None,
        }
    }
}

/// Compute the rows to materialize for the given scroll position.
///
/// The visible range is expanded by `overscan` rows on both sides and
/// clipped to `[0, row_count - 1]`. An offset past the end of the content
/// is treated as pointing at the last row.
pub fn compute_window(
    row_count: usize,
    row_height: u32,
    scroll_offset: u64,
    viewport_height: u32,
    overscan: usize,
) -> Window {
    let height = u64::from(row_height);
    let total_height = (row_count as u64).saturating_mul(height);

    if row_count == 0 || row_height == 0 {
        return Window {
            rows: Vec::new(),
            total_height,
        };
    }

    let last_index = row_count - 1;
    let to_index = |offset: u64| usize::try_from(offset / height).unwrap_or(usize::MAX);

    let bottom = scroll_offset.saturating_add(u64::from(viewport_height.max(1)) - 1);
    let first_visible = to_index(scroll_offset).min(last_index);
    let last_visible = to_index(bottom).min(last_index);

    let start = first_visible.saturating_sub(overscan);
    let end = last_visible.saturating_add(overscan).min(last_index);

    let rows = (start..=end)
        .map(|index| VirtualRow {
            index,
            top: index as u64 * height,
            height: row_height,
        })
        .collect();

    Window { rows, total_height }
}
