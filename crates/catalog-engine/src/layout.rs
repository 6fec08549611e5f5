/// Column count used before the container has been measured.
pub const DEFAULT_COLUMNS: usize = 4;

/// Fixed sizing constants of the product grid.
///
/// Units are whatever the surface measures in: pixels for the web preset,
/// terminal cells for the TUI preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    /// Width reserved for one card, gap included
    pub item_width: u32,
    /// Horizontal padding of the container, subtracted before dividing
    pub padding: u32,
    /// Height of one grid row, gap included
    pub row_height: u32,
    /// Rows materialized beyond each edge of the viewport
    pub overscan: usize,
}

impl GridMetrics {
    /// Card 256 wide, 280 high plus a 16 gap, 32 container padding.
    pub const fn web() -> Self {
        Self {
            item_width: 256,
            padding: 32,
            row_height: 280 + 16,
            overscan: 2,
        }
    }

    /// Cell-based sizing for the terminal surface.
    pub const fn terminal() -> Self {
        Self {
            item_width: 30,
            padding: 2,
            row_height: 7,
            overscan: 2,
        }
    }
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self::web()
    }
}

/// `max(1, floor((width - padding) / item_width))`
///
/// Never returns zero, even for widths narrower than the padding.
pub fn column_count(width: u32, metrics: &GridMetrics) -> usize {
    let usable = width.saturating_sub(metrics.padding);
    let columns = usable.checked_div(metrics.item_width).unwrap_or(0);
    (columns as usize).max(1)
}

/// Number of grid rows needed for `items` products at `columns` per row.
pub fn row_count(items: usize, columns: usize) -> usize {
    items.div_ceil(columns.max(1))
}
