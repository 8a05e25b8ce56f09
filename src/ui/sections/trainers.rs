//! Trainer roster section

use leptos::prelude::*;

use crate::core::content;
use crate::core::nav::SectionKey;
use crate::ui::cards::TrainerCard;
use crate::ui::nav::use_nav_context;
use crate::ui::reveal::Reveal;
use crate::ui::sections::SectionHeading;

#[component]
pub fn TrainersSection() -> impl IntoView {
    let nav = use_nav_context();

    view! {
        <section node_ref=nav.section_ref(SectionKey::Trainers) class="relative py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    badge="EXPERT TRAINERS"
                    title="Meet Our Elite Team"
                    subtitle="Our certified trainers are dedicated to helping you achieve your fitness goals with personalized guidance and motivation."
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {content::trainers().iter().enumerate().map(|(i, trainer)| {
                        view! {
                            <Reveal index=i>
                                <TrainerCard trainer=trainer />
                            </Reveal>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
