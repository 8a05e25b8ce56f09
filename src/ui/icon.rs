use leptos::prelude::*;

/// Inline SVG icon component
#[component]
pub fn Icon(
    /// Icon name from the [`icons`] module
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    match name {
        icons::STAR => view! {
            <svg class=class viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z" />
            </svg>
        }
        .into_any(),
        icons::INSTAGRAM => view! {
            <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                <line x1="17.5" y1="6.5" x2="17.51" y2="6.5" />
            </svg>
        }
        .into_any(),
        _ => view! {
            <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d=stroke_path(name) />
            </svg>
        }
        .into_any(),
    }
}

/// Path data for single-path stroke icons.
fn stroke_path(name: &'static str) -> &'static str {
    match name {
        icons::DUMBBELL => "M6.5 6.5v11M17.5 6.5v11M3 9.5v5M21 9.5v5M6.5 12h11",
        icons::APPLE => {
            "M12 6.5c-3 0-5 2.5-5 5.5s2.5 7 5 7 5-4 5-7-2-5.5-5-5.5zM12 6.5c0-2 1.5-3.5 3.5-3.5"
        }
        icons::CLOCK => "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::CHART => "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
        icons::MENU => "M4 6h16M4 12h16M4 18h16",
        icons::X => "M6 18L18 6M6 6l12 12",
        icons::CHEVRON_DOWN => "M19 9l-7 7-7-7",
        icons::CHEVRON_LEFT => "M15 19l-7-7 7-7",
        icons::CHEVRON_RIGHT => "M9 5l7 7-7 7",
        icons::SEND => "M12 19l9 2-9-18-9 18 9-2zm0 0v-8",
        icons::TWITTER => {
            "M23 3a10.9 10.9 0 01-3.14 1.53 4.48 4.48 0 00-7.86 3v1A10.66 10.66 0 013 4s-4 9 5 13a11.64 11.64 0 01-7 2c9 5 20 0 20-11.1a4.5 4.5 0 00-.08-.83A7.72 7.72 0 0023 3z"
        }
        icons::FACEBOOK => {
            "M18 2h-3a5 5 0 00-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 011-1h3z"
        }
        _ => "M13 10V3L4 14h7v7l9-11h-7z",
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const DUMBBELL: &str = "dumbbell";
    pub const APPLE: &str = "apple";
    pub const CLOCK: &str = "clock";
    pub const CHART: &str = "chart";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const STAR: &str = "star";
    pub const SEND: &str = "send";
    pub const INSTAGRAM: &str = "instagram";
    pub const TWITTER: &str = "twitter";
    pub const FACEBOOK: &str = "facebook";
}
