//! Page footer

use leptos::prelude::*;

use crate::core::nav::SectionKey;
use crate::ui::nav::{Logo, use_nav_context};
use crate::ui::sections::contact::SocialLinks;

#[component]
pub fn Footer() -> impl IntoView {
    let nav = use_nav_context();

    view! {
        <footer class="relative py-12 border-t border-neutral-800">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center gap-4">
                    <Logo />

                    <div class="flex flex-wrap justify-center gap-8">
                        {SectionKey::ALL.into_iter().map(|key| {
                            view! {
                                <button
                                    class="text-sm text-neutral-400 hover:text-red-500 transition-colors"
                                    on:click=move |_| nav.scroll_to(key)
                                >
                                    {key.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <SocialLinks />
                </div>

                <div class="mt-8 pt-8 border-t border-neutral-800 text-center text-sm text-neutral-500">
                    <p>"© 2025 NEXUS Fitness. All rights reserved."</p>
                    <div class="flex justify-center gap-4 mt-2">
                        <a href="#" class="hover:text-neutral-300 transition-colors">"Privacy Policy"</a>
                        <a href="#" class="hover:text-neutral-300 transition-colors">"Terms of Service"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
