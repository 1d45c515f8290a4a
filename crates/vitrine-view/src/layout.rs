//! Fixed layout metrics for card placement.
//!
//! The deployed page lays cards out with CSS (a three-column grid across
//! the left three quarters of the content area, a compact stacked list in
//! the right quarter). This module reproduces that geometry with fixed
//! metrics so every card gets a page-coordinate rectangle the playback
//! controller can evaluate visibility against.

use vitrine_playback::Rect;

/// Metrics for placing sections and cards on the page.
#[derive(Debug, Clone)]
pub struct LayoutMetrics {
    /// Width of the whole content area.
    pub content_width: f32,
    /// Height of the scrollable viewport window.
    pub viewport_height: f32,
    /// Height of the fixed navigation bar at the top of the page.
    pub nav_height: f32,
    /// Vertical space taken by a section heading.
    pub heading_height: f32,
    /// Columns in the featured grid.
    pub featured_columns: usize,
    /// Height of one featured card.
    pub featured_card_height: f32,
    /// Height of one row in the secondary list.
    pub secondary_row_height: f32,
    /// Edge length of the square media thumbnail in a secondary row.
    pub secondary_thumb_size: f32,
    /// Gap between cards, rows, and the two regions.
    pub gap: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            content_width: 1200.0,
            viewport_height: 800.0,
            nav_height: 64.0,
            heading_height: 56.0,
            featured_columns: 3,
            featured_card_height: 320.0,
            secondary_row_height: 72.0,
            secondary_thumb_size: 48.0,
            gap: 24.0,
        }
    }
}

impl LayoutMetrics {
    /// Width of the featured region (the left three quarters).
    #[must_use]
    pub fn featured_region_width(&self) -> f32 {
        self.content_width * 0.75
    }

    /// Width of one featured card, after subtracting inter-column gaps.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn featured_card_width(&self) -> f32 {
        let columns = self.featured_columns.max(1) as f32;
        (self.featured_region_width() - (columns - 1.0) * self.gap) / columns
    }

    /// Left edge of the secondary column.
    #[must_use]
    pub fn secondary_region_x(&self) -> f32 {
        self.featured_region_width() + self.gap
    }

    /// Width of one secondary row.
    #[must_use]
    pub fn secondary_row_width(&self) -> f32 {
        self.content_width - self.secondary_region_x()
    }

    /// Rectangle of the featured card at `index` within a grid whose
    /// first row starts at `y_start`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn featured_card_rect(&self, y_start: f32, index: usize) -> Rect {
        let columns = self.featured_columns.max(1);
        let col = (index % columns) as f32;
        let row = (index / columns) as f32;
        Rect::new(
            col * (self.featured_card_width() + self.gap),
            y_start + row * (self.featured_card_height + self.gap),
            self.featured_card_width(),
            self.featured_card_height,
        )
    }

    /// Vertical extent of a featured grid holding `count` cards.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn featured_grid_height(&self, count: usize) -> f32 {
        let rows = count.div_ceil(self.featured_columns.max(1)) as f32;
        rows * (self.featured_card_height + self.gap)
    }

    /// Rectangle of a secondary row starting at `y_start`.
    #[must_use]
    pub fn secondary_row_rect(&self, y_start: f32) -> Rect {
        Rect::new(
            self.secondary_region_x(),
            y_start,
            self.secondary_row_width(),
            self.secondary_row_height,
        )
    }

    /// The viewport rectangle at a given vertical scroll offset.
    #[must_use]
    pub fn viewport_at(&self, scroll_y: f32) -> Rect {
        Rect::new(0.0, scroll_y, self.content_width, self.viewport_height)
    }
}
