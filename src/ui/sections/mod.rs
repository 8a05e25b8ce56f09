//! Page sections in render order

pub mod contact;
pub mod features;
pub mod footer;
pub mod hero;
pub mod newsletter;
pub mod pricing;
pub mod schedule;
pub mod testimonials;
pub mod trainers;

pub use contact::ContactSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use newsletter::NewsletterSection;
pub use pricing::PricingSection;
pub use schedule::ScheduleSection;
pub use testimonials::TestimonialsSection;
pub use trainers::TrainersSection;

use leptos::prelude::*;

use crate::ui::reveal::Reveal;

/// Centered section heading: badge, title, and subtitle revealing in
/// sequence as the section scrolls into view.
#[component]
pub fn SectionHeading(
    badge: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <Reveal index=0>
                <div class="inline-block px-3 py-1 mb-4 text-xs font-semibold bg-red-500/20 text-red-500 rounded-full">
                    {badge}
                </div>
            </Reveal>
            <Reveal index=1>
                <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
            </Reveal>
            <Reveal index=2>
                <p class="text-neutral-400 max-w-2xl mx-auto">{subtitle}</p>
            </Reveal>
        </div>
    }
}
