//! Pointer tracking for magnetic controls
//!
//! A magnetic button follows the pointer while hovered: its rendered
//! position is the pointer's offset from the button center, damped so the
//! control drifts toward the pointer instead of snapping onto it. Leaving
//! the control resets everything immediately.

/// Damping applied to the raw pointer delta before rendering.
pub const MAGNETIC_DAMPING: f64 = 0.3;

/// Bounding box of a control, in viewport coordinates.
///
/// Mirrors the fields of a DOM rect so the math stays independent of the
/// rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ControlRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Center point of the rect.
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Pointer offset from a control's center, plus the hover flag.
///
/// Lives for the control's mount duration; reset to the default whenever
/// the pointer leaves the control's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub dx: f64,
    pub dy: f64,
    pub hovering: bool,
}

impl PointerOffset {
    /// Update from a pointer position over the given control rect.
    pub fn track(&mut self, pointer_x: f64, pointer_y: f64, rect: ControlRect) {
        let (cx, cy) = rect.center();
        self.dx = pointer_x - cx;
        self.dy = pointer_y - cy;
        self.hovering = true;
    }

    /// Pointer left the control: zero the offset and clear the hover flag
    /// with no animated decay.
    pub fn release(&mut self) {
        *self = Self::default();
    }

    /// The damped offset actually applied to the control's transform.
    ///
    /// `(0, 0)` whenever not hovering, regardless of stale deltas.
    pub fn rendered_offset(&self) -> (f64, f64) {
        if self.hovering {
            (self.dx * MAGNETIC_DAMPING, self.dy * MAGNETIC_DAMPING)
        } else {
            (0.0, 0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_at_rest() {
        let offset = PointerOffset::default();
        assert_eq!(offset.rendered_offset(), (0.0, 0.0));
        assert!(!offset.hovering);
    }

    #[test]
    fn test_track_measures_from_center() {
        let mut offset = PointerOffset::default();
        // 200x50 control at (100, 400): center is (200, 425)
        offset.track(230.0, 435.0, ControlRect::new(100.0, 400.0, 200.0, 50.0));

        assert_eq!(offset.dx, 30.0);
        assert_eq!(offset.dy, 10.0);
        assert!(offset.hovering);
    }

    #[test]
    fn test_rendered_offset_is_damped() {
        let mut offset = PointerOffset::default();
        offset.track(230.0, 435.0, ControlRect::new(100.0, 400.0, 200.0, 50.0));

        let (x, y) = offset.rendered_offset();
        assert!((x - 9.0).abs() < 1e-9);
        assert!((y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_release_resets_instantly() {
        let mut offset = PointerOffset::default();
        offset.track(500.0, 500.0, ControlRect::new(0.0, 0.0, 100.0, 40.0));
        assert_ne!(offset.rendered_offset(), (0.0, 0.0));

        offset.release();
        assert_eq!(offset, PointerOffset::default());
        assert_eq!(offset.rendered_offset(), (0.0, 0.0));
    }

    #[test]
    fn test_not_hovering_renders_zero_even_with_stale_delta() {
        let offset = PointerOffset {
            dx: 40.0,
            dy: -12.0,
            hovering: false,
        };
        assert_eq!(offset.rendered_offset(), (0.0, 0.0));
    }

    #[test]
    fn test_track_follows_movement() {
        let rect = ControlRect::new(0.0, 0.0, 100.0, 100.0);
        let mut offset = PointerOffset::default();

        offset.track(50.0, 50.0, rect);
        assert_eq!(offset.rendered_offset(), (0.0, 0.0));

        offset.track(60.0, 40.0, rect);
        let (x, y) = offset.rendered_offset();
        assert!((x - 3.0).abs() < 1e-9);
        assert!((y + 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rect_center() {
        let rect = ControlRect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.center(), (25.0, 40.0));
    }
}
