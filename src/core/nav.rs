//! Navigation state: section keys and the mobile menu machine
//!
//! The page has six named regions reachable from the header, the mobile
//! overlay, and the footer. One mobile menu exists per page; its state is
//! written only by the toggle control and by navigation (which always
//! forces it closed).

use derive_more::Display;

/// Milliseconds the menu overlay takes to fade/slide in or out.
pub const MENU_TRANSITION_MS: u32 = 200;

/// A named page region.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Home,
    Features,
    Trainers,
    Classes,
    Pricing,
    Contact,
}

impl SectionKey {
    /// All sections in page order.
    pub const ALL: [SectionKey; 6] = [
        SectionKey::Home,
        SectionKey::Features,
        SectionKey::Trainers,
        SectionKey::Classes,
        SectionKey::Pricing,
        SectionKey::Contact,
    ];

    /// Uppercase nav label.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKey::Home => "HOME",
            SectionKey::Features => "FEATURES",
            SectionKey::Trainers => "TRAINERS",
            SectionKey::Classes => "CLASSES",
            SectionKey::Pricing => "PRICING",
            SectionKey::Contact => "CONTACT",
        }
    }
}

/// Mobile menu phase.
///
/// Logically the menu is a single boolean; `Closing` exists so the exit
/// transition can play before the overlay unmounts, and counts as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPhase {
    #[default]
    Closed,
    Open,
    /// Exit transition running; the overlay is still mounted.
    Closing,
}

impl MenuPhase {
    /// Whether the menu is open in the boolean sense.
    pub fn is_open(&self) -> bool {
        matches!(self, MenuPhase::Open)
    }

    /// Whether the overlay should be in the tree at all.
    pub fn is_mounted(&self) -> bool {
        !matches!(self, MenuPhase::Closed)
    }

    /// The toggle control was pressed.
    pub fn toggled(self) -> MenuPhase {
        match self {
            MenuPhase::Open => MenuPhase::Closing,
            MenuPhase::Closed | MenuPhase::Closing => MenuPhase::Open,
        }
    }

    /// Navigation happened: force toward closed. Idempotent when already
    /// closed or closing.
    pub fn closed(self) -> MenuPhase {
        match self {
            MenuPhase::Open => MenuPhase::Closing,
            other => other,
        }
    }

    /// The exit transition finished.
    pub fn settled(self) -> MenuPhase {
        match self {
            MenuPhase::Closing => MenuPhase::Closed,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(MenuPhase::default(), MenuPhase::Closed);
        assert!(!MenuPhase::default().is_open());
    }

    #[test]
    fn test_toggle_round_trip_returns_to_closed() {
        let opened = MenuPhase::Closed.toggled();
        assert!(opened.is_open());

        let closing = opened.toggled();
        assert!(!closing.is_open());

        assert_eq!(closing.settled(), MenuPhase::Closed);
    }

    #[test]
    fn test_navigation_always_ends_closed() {
        assert!(!MenuPhase::Open.closed().is_open());
        assert!(!MenuPhase::Closed.closed().is_open());
        assert!(!MenuPhase::Closing.closed().is_open());
    }

    #[test]
    fn test_close_is_idempotent_when_already_closed() {
        assert_eq!(MenuPhase::Closed.closed(), MenuPhase::Closed);
        assert_eq!(MenuPhase::Closing.closed(), MenuPhase::Closing);
    }

    #[test]
    fn test_reopen_during_exit_transition() {
        let phase = MenuPhase::Open.toggled();
        assert_eq!(phase, MenuPhase::Closing);
        assert_eq!(phase.toggled(), MenuPhase::Open);
    }

    #[test]
    fn test_settle_only_finishes_closing() {
        assert_eq!(MenuPhase::Open.settled(), MenuPhase::Open);
        assert_eq!(MenuPhase::Closed.settled(), MenuPhase::Closed);
        assert_eq!(MenuPhase::Closing.settled(), MenuPhase::Closed);
    }

    #[test]
    fn test_closing_keeps_overlay_mounted() {
        assert!(MenuPhase::Closing.is_mounted());
        assert!(MenuPhase::Open.is_mounted());
        assert!(!MenuPhase::Closed.is_mounted());
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(SectionKey::ALL.len(), 6);
        assert_eq!(SectionKey::Home.label(), "HOME");
        assert_eq!(SectionKey::Classes.label(), "CLASSES");
        assert_eq!(SectionKey::Pricing.to_string(), "Pricing");
    }
}
