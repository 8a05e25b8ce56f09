//! Testimonials carousel section
//!
//! A sliding circular window over the testimonial deck. The window size
//! follows the viewport width tier; prev/next shift the visible set by
//! exactly one entry, and the dots jump the cursor directly.

use leptos::prelude::*;

use crate::core::carousel::{CarouselState, items_per_view};
use crate::core::content;
use crate::ui::cards::TestimonialCard;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::Reveal;
use crate::ui::scroll::use_scroll_context;
use crate::ui::sections::SectionHeading;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let scroll = use_scroll_context();

    let deck = content::testimonials();
    let carousel = RwSignal::new(CarouselState::new(deck.len()));

    let per_view = Memo::new(move |_| items_per_view(scroll.viewport_width.get()).min(deck.len()));

    view! {
        <section class="relative py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    badge="TESTIMONIALS"
                    title="Success Stories"
                    subtitle="Hear from our members who have transformed their lives through dedication and the support of our community."
                />

                <Reveal class="max-w-5xl mx-auto">
                    <div
                        class="grid gap-4"
                        style=move || format!(
                            "grid-template-columns: repeat({}, minmax(0, 1fr));",
                            per_view.get()
                        )
                    >
                        {move || {
                            carousel
                                .get()
                                .visible_window(per_view.get())
                                .into_iter()
                                .map(|i| view! { <TestimonialCard testimonial=&deck[i] /> })
                                .collect_view()
                        }}
                    </div>

                    <div class="flex justify-center items-center gap-4 mt-8">
                        <button
                            class="carousel-arrow"
                            on:click=move |_| carousel.update(|c| c.prev())
                            aria-label="Previous testimonial"
                        >
                            <Icon name=icons::CHEVRON_LEFT class="w-5 h-5" />
                        </button>

                        <div class="flex gap-2">
                            {(0..deck.len()).map(|i| {
                                let active = move || carousel.get().cursor() == i;
                                view! {
                                    <button
                                        class="carousel-dot"
                                        class=("carousel-dot-active", active)
                                        on:click=move |_| carousel.update(|c| c.go_to(i as isize))
                                        aria-label=format!("Go to testimonial {}", i + 1)
                                    ></button>
                                }
                            }).collect_view()}
                        </div>

                        <button
                            class="carousel-arrow"
                            on:click=move |_| carousel.update(|c| c.next())
                            aria-label="Next testimonial"
                        >
                            <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5" />
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
