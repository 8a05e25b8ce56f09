//! Newsletter signup section
//!
//! Collects an email address; actual subscription is an external
//! collaborator's responsibility, so submit only swallows the event.

use leptos::prelude::*;
use leptos::web_sys;

use crate::ui::magnetic::MagneticButton;
use crate::ui::reveal::Reveal;

#[component]
pub fn NewsletterSection() -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!("newsletter signup submitted (no backend wired)");
    };

    view! {
        <section class="relative py-20 bg-gradient-to-b from-black to-neutral-900">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto bg-black/40 backdrop-blur-sm border border-neutral-800 rounded-xl p-8">
                    <div class="text-center mb-8">
                        <Reveal index=0>
                            <h2 class="text-2xl md:text-3xl font-bold mb-4">"Stay Updated"</h2>
                        </Reveal>
                        <Reveal index=1>
                            <p class="text-neutral-400">
                                "Subscribe to our newsletter for exclusive fitness tips, special offers, and upcoming events."
                            </p>
                        </Reveal>
                    </div>

                    <Reveal index=2>
                        <form class="flex flex-col sm:flex-row gap-4" on:submit=on_submit>
                            <input
                                type="email"
                                placeholder="Enter your email"
                                class="form-input flex-1"
                                aria-label="Email address"
                            />
                            <MagneticButton class="btn-gradient sm:w-auto w-full">
                                "SUBSCRIBE"
                            </MagneticButton>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
