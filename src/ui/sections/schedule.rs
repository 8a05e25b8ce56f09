//! Weekly class schedule section
//!
//! Seven day tabs over a shared panel. Selecting a day swaps the class
//! list directly; the dataset guarantees every day is populated.

use leptos::prelude::*;

use crate::core::content;
use crate::core::nav::SectionKey;
use crate::core::schedule::{DaySelection, Weekday};
use crate::ui::cards::ClassCard;
use crate::ui::nav::use_nav_context;
use crate::ui::reveal::Reveal;
use crate::ui::sections::SectionHeading;

#[component]
pub fn ScheduleSection() -> impl IntoView {
    let nav = use_nav_context();
    let selection = RwSignal::new(DaySelection::new());

    view! {
        <section node_ref=nav.section_ref(SectionKey::Classes) class="relative py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    badge="CLASS SCHEDULE"
                    title="Weekly Class Lineup"
                    subtitle="Join our diverse range of classes led by expert trainers, designed to challenge and inspire you at every fitness level."
                />

                <Reveal class="w-full max-w-4xl mx-auto">
                    <div class="grid grid-cols-7 mb-8 day-tabs" role="tablist">
                        {Weekday::ALL.into_iter().map(|day| {
                            let selected = move || selection.get().is_selected(day);
                            view! {
                                <button
                                    class="day-tab"
                                    class=("day-tab-active", selected)
                                    on:click=move |_| selection.update(|s| s.select(day))
                                    role="tab"
                                    id=format!("tab-{}", day.key())
                                    aria-selected=selected
                                    aria-controls="schedule-panel"
                                >
                                    {day.short_label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <div class="space-y-4" role="tabpanel" id="schedule-panel">
                        {move || {
                            content::classes_for(selection.get().current())
                                .iter()
                                .map(|class_entry| view! { <ClassCard class_entry=class_entry /> })
                                .collect_view()
                        }}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
