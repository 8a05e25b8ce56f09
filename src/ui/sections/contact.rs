//! Contact section
//!
//! Info column plus a message form. Submission is a no-op stub; the form
//! collaborator that would deliver it lives outside this layer.

use leptos::prelude::*;
use leptos::web_sys;

use crate::core::nav::SectionKey;
use crate::ui::icon::{Icon, icons};
use crate::ui::magnetic::MagneticButton;
use crate::ui::nav::use_nav_context;
use crate::ui::reveal::Reveal;
use crate::ui::sections::SectionHeading;

#[component]
pub fn ContactSection() -> impl IntoView {
    let nav = use_nav_context();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!("contact form submitted (no backend wired)");
    };

    view! {
        <section node_ref=nav.section_ref(SectionKey::Contact) class="relative py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    badge="CONTACT US"
                    title="Get In Touch"
                    subtitle="Have questions or ready to start your fitness journey? Reach out to our team."
                />

                <div class="grid lg:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <Reveal>
                        <div class="space-y-6">
                            <div>
                                <h3 class="text-xl font-bold mb-2">"Visit Us"</h3>
                                <p class="text-neutral-400">
                                    "123 Fitness Avenue"
                                    <br />
                                    "New York, NY 10001"
                                </p>
                            </div>
                            <div>
                                <h3 class="text-xl font-bold mb-2">"Opening Hours"</h3>
                                <p class="text-neutral-400">
                                    "Monday - Friday: 24 Hours"
                                    <br />
                                    "Saturday - Sunday: 6am - 10pm"
                                </p>
                            </div>
                            <div>
                                <h3 class="text-xl font-bold mb-2">"Contact"</h3>
                                <p class="text-neutral-400">
                                    "info@nexusfitness.com"
                                    <br />
                                    "(555) 123-4567"
                                </p>
                            </div>
                            <div>
                                <h3 class="text-xl font-bold mb-2">"Follow Us"</h3>
                                <SocialLinks class="w-6 h-6" />
                            </div>
                        </div>
                    </Reveal>

                    <Reveal index=1>
                        <form class="space-y-6" on:submit=on_submit>
                            <div class="grid sm:grid-cols-2 gap-4">
                                <div class="space-y-2">
                                    <label for="name" class="text-sm font-medium">"Name"</label>
                                    <input id="name" placeholder="Your name" class="form-input w-full" />
                                </div>
                                <div class="space-y-2">
                                    <label for="email" class="text-sm font-medium">"Email"</label>
                                    <input id="email" type="email" placeholder="Your email" class="form-input w-full" />
                                </div>
                            </div>
                            <div class="space-y-2">
                                <label for="subject" class="text-sm font-medium">"Subject"</label>
                                <input id="subject" placeholder="Subject" class="form-input w-full" />
                            </div>
                            <div class="space-y-2">
                                <label for="message" class="text-sm font-medium">"Message"</label>
                                <textarea
                                    id="message"
                                    placeholder="Your message"
                                    class="form-input w-full min-h-[120px]"
                                ></textarea>
                            </div>
                            <MagneticButton class="w-full btn-gradient">
                                "SEND MESSAGE"
                            </MagneticButton>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Social media icon row
#[component]
pub fn SocialLinks(#[prop(default = "w-5 h-5")] class: &'static str) -> impl IntoView {
    view! {
        <div class="flex gap-4">
            <a href="#" class="text-neutral-400 hover:text-red-500 transition-colors" aria-label="Instagram">
                <Icon name=icons::INSTAGRAM class=class />
            </a>
            <a href="#" class="text-neutral-400 hover:text-red-500 transition-colors" aria-label="Twitter">
                <Icon name=icons::TWITTER class=class />
            </a>
            <a href="#" class="text-neutral-400 hover:text-red-500 transition-colors" aria-label="Facebook">
                <Icon name=icons::FACEBOOK class=class />
            </a>
        </div>
    }
}
