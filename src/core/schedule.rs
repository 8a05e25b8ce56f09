//! Weekly class schedule selection
//!
//! Seven fixed day tabs, one selected at a time. Selection swaps the
//! visible class list directly; there is no transition state beyond the
//! content swap itself.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A day tab key. Monday is the default selection.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in tab order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Stable lowercase key, used as the tab id.
    pub fn key(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Three-letter tab label.
    pub fn short_label(&self) -> &'static str {
        match self {
            Weekday::Monday => "MON",
            Weekday::Tuesday => "TUE",
            Weekday::Wednesday => "WED",
            Weekday::Thursday => "THU",
            Weekday::Friday => "FRI",
            Weekday::Saturday => "SAT",
            Weekday::Sunday => "SUN",
        }
    }
}

/// Cursor over the seven day tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DaySelection {
    current: Weekday,
}

impl DaySelection {
    /// Selection starting on Monday.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected day.
    pub fn current(&self) -> Weekday {
        self.current
    }

    /// Select a day directly. Idempotent when the day is already current.
    pub fn select(&mut self, day: Weekday) {
        self.current = day;
    }

    /// Whether `day` is the selected tab.
    pub fn is_selected(&self, day: Weekday) -> bool {
        self.current == day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_monday() {
        let selection = DaySelection::new();
        assert_eq!(selection.current(), Weekday::Monday);
        assert!(selection.is_selected(Weekday::Monday));
    }

    #[test]
    fn test_select_switches_day() {
        let mut selection = DaySelection::new();
        selection.select(Weekday::Tuesday);
        assert_eq!(selection.current(), Weekday::Tuesday);
        assert!(!selection.is_selected(Weekday::Monday));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut selection = DaySelection::new();
        selection.select(Weekday::Friday);
        let snapshot = selection;
        selection.select(Weekday::Friday);
        assert_eq!(selection, snapshot);
    }

    #[test]
    fn test_all_days_in_order() {
        assert_eq!(Weekday::ALL.len(), 7);
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::ALL[6], Weekday::Sunday);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = Weekday::ALL.iter().map(|d| d.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn test_display_matches_variant() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
        assert_eq!(Weekday::Monday.short_label(), "MON");
        assert_eq!(Weekday::Sunday.key(), "sunday");
    }
}
