//! Page scroll model.

/// Pixel-equivalent height of one terminal row.
pub const CELL_HEIGHT_PX: u32 = 20;

/// Rows moved by one mouse wheel notch.
pub const WHEEL_STEP_ROWS: usize = 3;

/// Vertical scroll position of the page, measured in rows.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: usize,
    max_offset: usize,
}

impl ScrollState {
    /// Creates a state at the top of the page.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
        }
    }

    /// Returns the current offset in rows.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the largest reachable offset.
    #[must_use]
    pub const fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Returns the offset in pixel-equivalent units.
    #[must_use]
    pub fn offset_px(&self) -> u32 {
        u32::try_from(self.offset)
            .unwrap_or(u32::MAX)
            .saturating_mul(CELL_HEIGHT_PX)
    }

    /// Returns scroll progress through the page in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.max_offset == 0 {
            return 0.0;
        }
        (self.offset as f64 / self.max_offset as f64).clamp(0.0, 1.0)
    }

    /// Updates the scrollable extent from content and viewport heights.
    /// Returns whether the offset had to be clamped.
    pub fn set_extent(&mut self, content_height: usize, viewport_height: usize) -> bool {
        self.max_offset = content_height.saturating_sub(viewport_height);
        let clamped = self.offset.min(self.max_offset);
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    /// Jumps to an offset. Returns whether it moved.
    pub fn set_offset(&mut self, offset: usize) -> bool {
        let clamped = offset.min(self.max_offset);
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    /// Scrolls by a signed number of rows.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let target = self.offset.saturating_add_signed(delta);
        self.set_offset(target)
    }

    /// Scrolls up one viewport.
    pub fn page_up(&mut self, viewport_height: usize) -> bool {
        self.set_offset(self.offset.saturating_sub(viewport_height.max(1)))
    }

    /// Scrolls down one viewport.
    pub fn page_down(&mut self, viewport_height: usize) -> bool {
        self.set_offset(self.offset.saturating_add(viewport_height.max(1)))
    }

    /// Jumps to the bottom.
    pub fn end(&mut self) -> bool {
        self.set_offset(self.max_offset)
    }
}
