//! One-shot reveal state for viewport-triggered enter animations
//!
//! Every section heading and card starts hidden (opacity 0, shifted 20px
//! down) and animates in the first time any part of it enters the
//! viewport. The transition is irreversible: scrolling away and back never
//! re-hides or re-plays the animation.

/// Seconds a heading or card takes to fade and slide in.
pub const REVEAL_DURATION_SECS: f64 = 0.5;

/// Seconds the hero copy block takes; slower for a weightier entrance.
pub const HERO_REVEAL_DURATION_SECS: f64 = 0.8;

/// Vertical offset in px applied before a target is revealed.
pub const REVEAL_OFFSET_PX: f64 = 20.0;

/// Index-based stagger steps used to sequence grids of siblings.
const STAGGER_STEPS_SECS: [f64; 4] = [0.0, 0.1, 0.2, 0.3];

/// Stagger delay for the `index`-th sibling in a revealed grid.
///
/// Indices past the table reuse the last step so long rows keep a bounded
/// total delay.
pub fn stagger_delay(index: usize) -> f64 {
    let capped = index.min(STAGGER_STEPS_SECS.len() - 1);
    STAGGER_STEPS_SECS[capped]
}

/// Animation phase of a reveal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Mounted but not yet seen; rendered hidden.
    #[default]
    Pending,
    /// Seen at least once; rendered visible, permanently.
    Revealed,
}

/// Per-element reveal state machine.
///
/// Transitions `Pending -> Revealed` exactly once, driven by the first
/// viewport intersection. The revealed state is monotonic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    phase: RevealPhase,
    delay_secs: f64,
}

impl RevealState {
    /// A pending target with no stagger delay.
    pub fn new() -> Self {
        Self {
            phase: RevealPhase::Pending,
            delay_secs: 0.0,
        }
    }

    /// A pending target staggered as the `index`-th sibling.
    pub fn with_stagger(index: usize) -> Self {
        Self {
            phase: RevealPhase::Pending,
            delay_secs: stagger_delay(index),
        }
    }

    /// Record that the element became visible.
    ///
    /// Returns `true` only on the call that performed the transition;
    /// repeated notifications are no-ops.
    pub fn mark_visible(&mut self) -> bool {
        if self.phase == RevealPhase::Revealed {
            return false;
        }
        self.phase = RevealPhase::Revealed;
        true
    }

    /// Current phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Whether the enter animation has been triggered.
    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Stagger delay in seconds.
    pub fn delay_secs(&self) -> f64 {
        self.delay_secs
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_pending() {
        let state = RevealState::new();
        assert_eq!(state.phase(), RevealPhase::Pending);
        assert!(!state.is_revealed());
    }

    #[test]
    fn test_first_visibility_reveals() {
        let mut state = RevealState::new();
        assert!(state.mark_visible());
        assert!(state.is_revealed());
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut state = RevealState::new();
        assert!(state.mark_visible());

        // Any further intersection events (element left and re-entered the
        // viewport) must not transition again.
        for _ in 0..10 {
            assert!(!state.mark_visible());
            assert_eq!(state.phase(), RevealPhase::Revealed);
        }
    }

    #[test]
    fn test_stagger_delay_table() {
        assert_eq!(stagger_delay(0), 0.0);
        assert_eq!(stagger_delay(1), 0.1);
        assert_eq!(stagger_delay(2), 0.2);
        assert_eq!(stagger_delay(3), 0.3);
    }

    #[test]
    fn test_stagger_delay_caps_past_table() {
        assert_eq!(stagger_delay(4), 0.3);
        assert_eq!(stagger_delay(100), 0.3);
    }

    #[test]
    fn test_with_stagger_carries_delay() {
        let state = RevealState::with_stagger(2);
        assert_eq!(state.delay_secs(), 0.2);
        assert_eq!(state.phase(), RevealPhase::Pending);
    }

    #[test]
    fn test_default_is_pending_no_delay() {
        let state = RevealState::default();
        assert_eq!(state.phase(), RevealPhase::Pending);
        assert_eq!(state.delay_secs(), 0.0);
    }
}
