//! Membership pricing section

use leptos::prelude::*;

use crate::core::content;
use crate::core::nav::SectionKey;
use crate::ui::cards::PricingCard;
use crate::ui::nav::use_nav_context;
use crate::ui::reveal::Reveal;
use crate::ui::sections::SectionHeading;

#[component]
pub fn PricingSection() -> impl IntoView {
    let nav = use_nav_context();

    view! {
        <section node_ref=nav.section_ref(SectionKey::Pricing) class="relative py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    badge="MEMBERSHIP PLANS"
                    title="Choose Your Path"
                    subtitle="Flexible membership options designed to fit your lifestyle and goals, with no long-term commitments required."
                />

                <div class="grid md:grid-cols-3 gap-6 max-w-5xl mx-auto">
                    {content::pricing_tiers().iter().enumerate().map(|(i, tier)| {
                        view! {
                            <Reveal index=i>
                                <PricingCard tier=tier />
                            </Reveal>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
