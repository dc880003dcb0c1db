/// Vertical offset, in pixels, past which the header draws its shadow.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Tracks whether the content region has scrolled past [`SCROLL_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    last_offset: f64,
    is_scrolled: bool,
}

impl ScrollState {
    /// Record a scroll notification. Returns true when `is_scrolled` flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.is_scrolled;
        self.last_offset = offset;
        self.is_scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}
