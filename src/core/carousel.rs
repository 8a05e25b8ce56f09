//! Circular windowed navigation for the testimonial deck
//!
//! The carousel shows a fixed-size window of consecutive testimonials and
//! wraps modulo the deck length, so no cursor position is ever out of
//! range. Advancing by one slides the visible set by exactly one entry
//! (sliding, not paging). The window size follows the viewport width.

/// Viewport width below which a single testimonial is shown.
pub const ONE_COLUMN_MAX_WIDTH: f64 = 768.0;

/// Viewport width below which two testimonials are shown.
pub const TWO_COLUMN_MAX_WIDTH: f64 = 1024.0;

/// Number of testimonials visible at the given viewport width.
pub fn items_per_view(viewport_width: f64) -> usize {
    if viewport_width < ONE_COLUMN_MAX_WIDTH {
        1
    } else if viewport_width < TWO_COLUMN_MAX_WIDTH {
        2
    } else {
        3
    }
}

/// Cursor over a non-empty circular deck.
///
/// The deck itself is external read-only content; this state only tracks
/// which entry leads the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    cursor: usize,
    len: usize,
}

impl CarouselState {
    /// Cursor at the first entry of a deck of `len` items.
    ///
    /// An empty deck is a content-collaborator invariant violation, not a
    /// runtime condition this layer recovers from.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "testimonial deck must be non-empty");
        Self { cursor: 0, len }
    }

    /// Current leading index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Deck length.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance the window by one entry, wrapping at the end.
    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % self.len;
    }

    /// Move the window back by one entry, wrapping at the start.
    pub fn prev(&mut self) {
        self.cursor = (self.cursor + self.len - 1) % self.len;
    }

    /// Jump to `index`, normalized by Euclidean modulo so any integer
    /// (negative or past the end) lands inside the deck.
    pub fn go_to(&mut self, index: isize) {
        self.cursor = index.rem_euclid(self.len as isize) as usize;
    }

    /// Indices of the `count` consecutive entries starting at the cursor,
    /// wrapping circularly.
    pub fn visible_window(&self, count: usize) -> Vec<usize> {
        (0..count).map(|i| (self.cursor + i) % self.len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero() {
        let state = CarouselState::new(5);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.len(), 5);
    }

    #[test]
    fn test_next_wraps() {
        let mut state = CarouselState::new(3);
        state.next();
        state.next();
        assert_eq!(state.cursor(), 2);
        state.next();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_prev_wraps_from_zero() {
        let mut state = CarouselState::new(5);
        state.prev();
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn test_cyclic_law() {
        // next() called len times from any start returns to the start
        for start in 0..5isize {
            let mut state = CarouselState::new(5);
            state.go_to(start);
            let origin = state.cursor();
            for _ in 0..5 {
                state.next();
            }
            assert_eq!(state.cursor(), origin);
        }
    }

    #[test]
    fn test_go_to_normalizes_any_integer() {
        let mut state = CarouselState::new(5);

        state.go_to(7);
        assert_eq!(state.cursor(), 2);

        state.go_to(-1);
        assert_eq!(state.cursor(), 4);

        state.go_to(-12);
        assert_eq!(state.cursor(), 3);

        // go_to(k) agrees with go_to(k mod len)
        let mut a = CarouselState::new(5);
        let mut b = CarouselState::new(5);
        for k in [-13isize, -5, 0, 4, 5, 23] {
            a.go_to(k);
            b.go_to(k.rem_euclid(5));
            assert_eq!(a.cursor(), b.cursor(), "k = {k}");
        }
    }

    #[test]
    fn test_visible_window_wraps() {
        let mut state = CarouselState::new(5);
        state.go_to(3);
        assert_eq!(state.visible_window(3), vec![3, 4, 0]);
    }

    #[test]
    fn test_window_slides_by_one() {
        let mut state = CarouselState::new(5);
        let before = state.visible_window(3);
        state.next();
        let after = state.visible_window(3);

        // Sliding window: the tail of the old window is the head of the new
        assert_eq!(before[1..], after[..2]);
    }

    #[test]
    fn test_items_per_view_tiers() {
        assert_eq!(items_per_view(320.0), 1);
        assert_eq!(items_per_view(767.0), 1);
        assert_eq!(items_per_view(768.0), 2);
        assert_eq!(items_per_view(1023.0), 2);
        assert_eq!(items_per_view(1024.0), 3);
        assert_eq!(items_per_view(1920.0), 3);
    }

    #[test]
    fn test_window_same_goto_same_view() {
        let mut a = CarouselState::new(4);
        let mut b = CarouselState::new(4);
        a.go_to(-3);
        b.go_to(1);
        assert_eq!(a.visible_window(2), b.visible_window(2));
    }
}
