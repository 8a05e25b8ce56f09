//! Static site content
//!
//! The read-only dataset the interaction layer renders: feature grid,
//! trainer roster, weekly class lineup, pricing tiers, and the
//! testimonial deck. This layer only reads it; nothing here mutates.

use serde::Serialize;

use super::schedule::Weekday;

/// A feature-grid entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A trainer-roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trainer {
    pub name: &'static str,
    pub specialty: &'static str,
}

/// One class in the weekly lineup. Intensity is a 1..=5 meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassEntry {
    pub name: &'static str,
    pub time: &'static str,
    pub trainer: &'static str,
    pub intensity: u8,
}

/// A membership tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: u32,
    pub features: &'static [&'static str],
    pub popular: bool,
}

/// A testimonial-deck entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub author: &'static str,
    pub quote: &'static str,
}

/// The four feature-grid cards.
pub fn features() -> &'static [Feature] {
    &[
        Feature {
            icon: "dumbbell",
            title: "Personal Training",
            description: "One-on-one sessions with expert trainers who create customized workout plans to help you reach your goals faster.",
        },
        Feature {
            icon: "apple",
            title: "Smart Diet Plans",
            description: "Nutrition plans tailored to your body type, goals, and preferences, designed by certified nutritionists.",
        },
        Feature {
            icon: "clock",
            title: "24/7 Access",
            description: "Our facilities are open around the clock, allowing you to work out whenever it fits your schedule.",
        },
        Feature {
            icon: "chart",
            title: "Fitness Tracking",
            description: "Advanced tracking technology that monitors your progress and provides real-time feedback to optimize your workouts.",
        },
    ]
}

/// The trainer roster.
pub fn trainers() -> &'static [Trainer] {
    &[
        Trainer {
            name: "Alex Morgan",
            specialty: "Strength & Conditioning",
        },
        Trainer {
            name: "Sarah Chen",
            specialty: "HIIT & Cardio",
        },
        Trainer {
            name: "Marcus Johnson",
            specialty: "Bodybuilding",
        },
        Trainer {
            name: "Emma Rodriguez",
            specialty: "Yoga & Flexibility",
        },
    ]
}

/// The class lineup for one day. Every day is populated.
pub fn classes_for(day: Weekday) -> &'static [ClassEntry] {
    match day {
        Weekday::Monday => &[
            ClassEntry { name: "Power HIIT", time: "6:00 AM - 7:00 AM", trainer: "Sarah Chen", intensity: 4 },
            ClassEntry { name: "Strength Basics", time: "9:00 AM - 10:30 AM", trainer: "Alex Morgan", intensity: 3 },
            ClassEntry { name: "Cardio Blast", time: "12:00 PM - 1:00 PM", trainer: "Marcus Johnson", intensity: 5 },
            ClassEntry { name: "Evening Yoga", time: "6:00 PM - 7:30 PM", trainer: "Emma Rodriguez", intensity: 2 },
        ],
        Weekday::Tuesday => &[
            ClassEntry { name: "Morning Flow", time: "7:00 AM - 8:00 AM", trainer: "Emma Rodriguez", intensity: 2 },
            ClassEntry { name: "Bodybuilding", time: "10:00 AM - 11:30 AM", trainer: "Marcus Johnson", intensity: 4 },
            ClassEntry { name: "Lunch Express", time: "12:30 PM - 1:15 PM", trainer: "Sarah Chen", intensity: 3 },
            ClassEntry { name: "Advanced Strength", time: "7:00 PM - 8:30 PM", trainer: "Alex Morgan", intensity: 5 },
        ],
        Weekday::Wednesday => &[
            ClassEntry { name: "HIIT Circuit", time: "6:00 AM - 7:00 AM", trainer: "Sarah Chen", intensity: 5 },
            ClassEntry { name: "Core Focus", time: "9:00 AM - 10:00 AM", trainer: "Emma Rodriguez", intensity: 3 },
            ClassEntry { name: "Functional Training", time: "12:00 PM - 1:00 PM", trainer: "Alex Morgan", intensity: 4 },
            ClassEntry { name: "Evening Cardio", time: "6:00 PM - 7:00 PM", trainer: "Marcus Johnson", intensity: 4 },
        ],
        Weekday::Thursday => &[
            ClassEntry { name: "Strength & Tone", time: "7:00 AM - 8:30 AM", trainer: "Alex Morgan", intensity: 3 },
            ClassEntry { name: "Flexibility", time: "10:00 AM - 11:00 AM", trainer: "Emma Rodriguez", intensity: 2 },
            ClassEntry { name: "Express HIIT", time: "12:30 PM - 1:15 PM", trainer: "Sarah Chen", intensity: 4 },
            ClassEntry { name: "Muscle Building", time: "7:00 PM - 8:30 PM", trainer: "Marcus Johnson", intensity: 5 },
        ],
        Weekday::Friday => &[
            ClassEntry { name: "Morning Cardio", time: "6:00 AM - 7:00 AM", trainer: "Marcus Johnson", intensity: 4 },
            ClassEntry { name: "Pilates Fusion", time: "9:00 AM - 10:00 AM", trainer: "Emma Rodriguez", intensity: 3 },
            ClassEntry { name: "Lunch HIIT", time: "12:00 PM - 1:00 PM", trainer: "Sarah Chen", intensity: 5 },
            ClassEntry { name: "Weekend Prep", time: "6:00 PM - 7:30 PM", trainer: "Alex Morgan", intensity: 4 },
        ],
        Weekday::Saturday => &[
            ClassEntry { name: "Weekend Warrior", time: "8:00 AM - 9:30 AM", trainer: "Alex Morgan", intensity: 5 },
            ClassEntry { name: "Full Body Blast", time: "10:30 AM - 12:00 PM", trainer: "Marcus Johnson", intensity: 4 },
            ClassEntry { name: "Yoga Flow", time: "1:00 PM - 2:30 PM", trainer: "Emma Rodriguez", intensity: 3 },
        ],
        Weekday::Sunday => &[
            ClassEntry { name: "Recovery Yoga", time: "9:00 AM - 10:30 AM", trainer: "Emma Rodriguez", intensity: 2 },
            ClassEntry { name: "Open Gym", time: "11:00 AM - 3:00 PM", trainer: "All Trainers", intensity: 3 },
            ClassEntry { name: "Meditation", time: "4:00 PM - 5:00 PM", trainer: "Emma Rodriguez", intensity: 1 },
        ],
    }
}

/// The three membership tiers.
pub fn pricing_tiers() -> &'static [PricingTier] {
    &[
        PricingTier {
            name: "Basic",
            price: 49,
            features: &[
                "Access to gym facilities",
                "Basic equipment usage",
                "2 group classes per week",
                "Locker room access",
                "Fitness assessment",
            ],
            popular: false,
        },
        PricingTier {
            name: "Premium",
            price: 89,
            features: &[
                "Unlimited gym access",
                "All equipment usage",
                "Unlimited group classes",
                "1 personal training session/month",
                "Nutrition consultation",
                "Access to mobile app",
            ],
            popular: true,
        },
        PricingTier {
            name: "Elite",
            price: 129,
            features: &[
                "24/7 premium access",
                "All premium equipment",
                "Unlimited classes with priority",
                "4 personal training sessions/month",
                "Advanced nutrition planning",
                "Recovery spa access",
                "Exclusive events",
            ],
            popular: false,
        },
    ]
}

/// The testimonial deck.
pub fn testimonials() -> &'static [Testimonial] {
    &[
        Testimonial {
            author: "Michael T.",
            quote: "I've tried many gyms before, but NEXUS is on another level. The trainers are exceptional and the atmosphere pushes you to achieve more than you thought possible.",
        },
        Testimonial {
            author: "Jennifer K.",
            quote: "The personalized approach at NEXUS has completely changed my fitness journey. I've lost 30 pounds and gained confidence I never thought I'd have.",
        },
        Testimonial {
            author: "David L.",
            quote: "As a busy professional, the 24/7 access and efficient workouts have been game-changing. The trainers know exactly how to maximize my limited time.",
        },
        Testimonial {
            author: "Sophia R.",
            quote: "The community aspect of NEXUS keeps me coming back. It's not just a gym, it's a supportive family that celebrates every victory together.",
        },
        Testimonial {
            author: "James W.",
            quote: "The technology integration at NEXUS is incredible. Being able to track my progress in real-time has been a huge motivator in reaching my goals.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_day_has_classes() {
        for day in Weekday::ALL {
            assert!(
                !classes_for(day).is_empty(),
                "{day} must have at least one class"
            );
        }
    }

    #[test]
    fn test_intensity_within_meter_range() {
        for day in Weekday::ALL {
            for class in classes_for(day) {
                assert!(
                    (1..=5).contains(&class.intensity),
                    "{} intensity out of range",
                    class.name
                );
            }
        }
    }

    #[test]
    fn test_tuesday_lineup_is_bound_to_tuesday() {
        let tuesday = classes_for(Weekday::Tuesday);
        let names: Vec<&str> = tuesday.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Morning Flow",
                "Bodybuilding",
                "Lunch Express",
                "Advanced Strength"
            ]
        );

        // No other day shares Tuesday's exact lineup
        for day in Weekday::ALL {
            if day != Weekday::Tuesday {
                assert_ne!(classes_for(day), tuesday);
            }
        }
    }

    #[test]
    fn test_deck_is_non_empty() {
        assert!(!testimonials().is_empty());
        assert_eq!(testimonials().len(), 5);
    }

    #[test]
    fn test_exactly_one_popular_tier() {
        let popular = pricing_tiers().iter().filter(|t| t.popular).count();
        assert_eq!(popular, 1);
    }

    #[test]
    fn test_tiers_priced_ascending() {
        let prices: Vec<u32> = pricing_tiers().iter().map(|t| t.price).collect();
        assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_roster_and_features_populated() {
        assert_eq!(trainers().len(), 4);
        assert_eq!(features().len(), 4);
    }
}
