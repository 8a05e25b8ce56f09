//! Feature grid section

use leptos::prelude::*;

use crate::core::content;
use crate::core::nav::SectionKey;
use crate::ui::cards::FeatureCard;
use crate::ui::nav::use_nav_context;
use crate::ui::reveal::Reveal;
use crate::ui::sections::SectionHeading;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    let nav = use_nav_context();

    view! {
        <section node_ref=nav.section_ref(SectionKey::Features) class="relative py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    badge="FEATURES"
                    title="The Complete Fitness Experience"
                    subtitle="Our state-of-the-art facility combines cutting-edge technology with expert guidance to deliver a fitness experience like no other."
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {content::features().iter().enumerate().map(|(i, feature)| {
                        view! {
                            <Reveal index=i>
                                <FeatureCard feature=feature />
                            </Reveal>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
