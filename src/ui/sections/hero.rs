//! Hero section
//!
//! The copy block plays the slow 0.8s reveal on load; the visual region
//! binds its opacity and scale to the parallax maps, recomputed on every
//! scroll progress update. Scrolling back to the top restores the visual
//! exactly to full opacity and size.

use leptos::prelude::*;

use crate::core::motion::{HERO_OPACITY, HERO_SCALE};
use crate::core::nav::SectionKey;
use crate::core::reveal::HERO_REVEAL_DURATION_SECS;
use crate::ui::icon::{Icon, icons};
use crate::ui::magnetic::MagneticButton;
use crate::ui::nav::use_nav_context;
use crate::ui::reveal::Reveal;
use crate::ui::scroll::use_scroll_context;

#[component]
pub fn HeroSection() -> impl IntoView {
    let nav = use_nav_context();
    let scroll = use_scroll_context();

    let visual_style = move || {
        let p = scroll.progress.get();
        format!(
            "opacity: {:.3}; transform: scale({:.3});",
            HERO_OPACITY.sample(p),
            HERO_SCALE.sample(p)
        )
    };

    view! {
        <section
            node_ref=nav.section_ref(SectionKey::Home)
            class="relative min-h-screen flex items-center pt-20"
        >
            <div class="container mx-auto px-4 py-20">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <Reveal duration_secs=HERO_REVEAL_DURATION_SECS class="relative z-10">
                        <div class="inline-block px-3 py-1 mb-4 text-xs font-semibold bg-red-500/20 text-red-500 rounded-full">
                            "THE FUTURE OF FITNESS"
                        </div>
                        <h1 class="text-4xl md:text-6xl font-bold mb-6 leading-tight">
                            "Train Smarter, "
                            <br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-red-500 to-red-300">
                                "Live Stronger"
                            </span>
                        </h1>
                        <p class="text-neutral-400 mb-8 max-w-lg">
                            "Experience the next evolution in fitness with cutting-edge equipment, personalized training, and a community that pushes you beyond your limits."
                        </p>
                        <div class="flex flex-wrap gap-4">
                            <MagneticButton class="btn-gradient">
                                "JOIN THE FUTURE OF FITNESS"
                            </MagneticButton>
                            <MagneticButton class="btn-outline">
                                "TAKE A TOUR"
                            </MagneticButton>
                        </div>
                    </Reveal>

                    // Scroll-reactive visual region; the scene inside is a
                    // stand-in for the externally defined 3D object
                    <div class="relative h-[400px] lg:h-[600px] hero-visual" style=visual_style>
                        <HeroScene />

                        <div class="absolute bottom-0 left-0 right-0 flex justify-center">
                            <div class="flex flex-col items-center gap-2 text-neutral-500 hero-scroll-hint">
                                <span class="text-xs">"SCROLL DOWN"</span>
                                <Icon name=icons::CHEVRON_DOWN class="w-4 h-4" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Floating dumbbell illustration with sparkle accents
#[component]
fn HeroScene() -> impl IntoView {
    view! {
        <div class="absolute inset-0 flex items-center justify-center" aria-hidden="true">
            <div class="hero-float">
                <svg class="w-64 h-64 md:w-80 md:h-80 text-red-500 drop-shadow-[0_0_35px_rgba(255,0,64,0.35)]" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round">
                    <path d="M6.5 6.5v11M17.5 6.5v11M3 9.5v5M21 9.5v5M6.5 12h11" />
                </svg>
            </div>
            {(0..12usize).map(|i| {
                // Deterministic scatter; each sparkle twinkles on its own phase
                let left = (i * 83 % 100) as f64;
                let top = (i * 47 % 100) as f64;
                let delay = (i % 6) as f64 * 0.5;
                view! {
                    <span
                        class="sparkle"
                        style=format!("left: {left:.0}%; top: {top:.0}%; animation-delay: {delay:.1}s;")
                    ></span>
                }
            }).collect_view()}
        </div>
    }
}
