//! Hover-reactive cards
//!
//! One generic hover capability gates every decorative card overlay; the
//! feature/trainer/pricing variants only pick a skin. Each card owns its
//! own boolean, so concurrent hovers over different cards are independent
//! and need no coordination.

use leptos::prelude::*;

use crate::core::content::{ClassEntry, Feature, PricingTier, Testimonial, Trainer};
use crate::ui::icon::{Icon, icons};
use crate::ui::magnetic::MagneticButton;

/// Boolean hover state: true between pointer-enter and pointer-leave.
#[derive(Clone, Copy)]
pub struct HoverState {
    hovered: RwSignal<bool>,
}

impl HoverState {
    pub fn new() -> Self {
        Self {
            hovered: RwSignal::new(false),
        }
    }

    pub fn enter(&self) {
        self.hovered.set(true);
    }

    pub fn leave(&self) {
        self.hovered.set(false);
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual style of the overlay a card shows while hovered.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OverlaySkin {
    /// Diagonal red gradient wash.
    Feature,
    /// Accent border frame plus a portrait zoom.
    Trainer,
    /// Gradient wash with an outer glow shadow.
    Pricing,
}

impl OverlaySkin {
    fn overlay_class(&self) -> &'static str {
        match self {
            OverlaySkin::Feature => "card-overlay card-overlay-wash",
            OverlaySkin::Trainer => "card-overlay card-overlay-frame",
            OverlaySkin::Pricing => "card-overlay card-overlay-wash",
        }
    }

    /// Whether the hovered card lifts upward.
    fn lifts(&self) -> bool {
        matches!(self, OverlaySkin::Trainer)
    }

    /// Whether the hovered card gains a glow shadow.
    fn glows(&self) -> bool {
        matches!(self, OverlaySkin::Pricing)
    }
}

/// Generic hover-overlay card shell.
///
/// Exactly one overlay instance exists per card at a time: it mounts on
/// pointer-enter and unmounts on pointer-leave.
#[component]
pub fn HoverCard(
    /// Overlay visual variant
    skin: OverlaySkin,
    /// Additional CSS classes for the card container
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let hover = HoverState::new();

    view! {
        <div
            class=format!("hover-card {class}")
            class=("card-lift", move || skin.lifts() && hover.is_hovered())
            class=("card-glow", move || skin.glows() && hover.is_hovered())
            on:mouseenter=move |_| hover.enter()
            on:mouseleave=move |_| hover.leave()
        >
            <div class="relative z-10">{children()}</div>
            {move || {
                hover
                    .is_hovered()
                    .then(|| view! { <div class=skin.overlay_class() aria-hidden="true"></div> })
            }}
        </div>
    }
}

/// Feature-grid card
#[component]
pub fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <HoverCard skin=OverlaySkin::Feature class="bg-black/40 backdrop-blur-sm border border-neutral-800 rounded-xl p-6 h-full">
            <div class="mb-4 rounded-full w-12 h-12 flex items-center justify-center bg-red-500/20 text-red-500">
                <Icon name=feature.icon class="w-6 h-6" />
            </div>
            <h3 class="text-xl font-bold mb-2">{feature.title}</h3>
            <p class="text-neutral-400">{feature.description}</p>
        </HoverCard>
    }
}

/// Trainer-roster card with a portrait placeholder
#[component]
pub fn TrainerCard(trainer: &'static Trainer) -> impl IntoView {
    view! {
        <HoverCard skin=OverlaySkin::Trainer class="rounded-xl overflow-hidden">
            <div class="aspect-[3/4] rounded-xl relative overflow-hidden">
                <div
                    class="absolute inset-0 flex items-center justify-center trainer-portrait"
                    style=format!("background-color: {};", accent_color(trainer.name))
                >
                    <span class="text-6xl font-bold text-white/80">{initials(trainer.name)}</span>
                </div>
                <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent z-10"></div>
                <div class="absolute bottom-0 left-0 p-4 z-20">
                    <h3 class="text-xl font-bold text-white">{trainer.name}</h3>
                    <p class="text-red-400">{trainer.specialty}</p>
                </div>
            </div>
        </HoverCard>
    }
}

/// Membership tier card with the magnetic CTA
#[component]
pub fn PricingCard(tier: &'static PricingTier) -> impl IntoView {
    let card_class = if tier.popular {
        "bg-black/40 backdrop-blur-sm border border-red-500/50 rounded-xl p-6"
    } else {
        "bg-black/40 backdrop-blur-sm border border-neutral-800 rounded-xl p-6"
    };

    view! {
        <HoverCard skin=OverlaySkin::Pricing class=card_class>
            {tier.popular.then(|| view! {
                <div class="absolute top-0 right-0">
                    <div class="bg-red-500 text-white text-xs font-bold px-3 py-1 rounded-bl-lg">"POPULAR"</div>
                </div>
            })}
            <h3 class="text-xl font-bold mb-2">{tier.name}</h3>
            <div class="mb-4">
                <span class="text-3xl font-bold">{format!("${}", tier.price)}</span>
                <span class="text-neutral-400">"/month"</span>
            </div>
            <ul class="space-y-2 mb-6">
                {tier.features.iter().map(|feature| {
                    view! {
                        <li class="flex items-center gap-2">
                            <div class="w-1.5 h-1.5 rounded-full bg-red-500"></div>
                            <span class="text-neutral-300">{*feature}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <MagneticButton class="w-full btn-gradient">
                "Choose Plan"
            </MagneticButton>
        </HoverCard>
    }
}

/// Testimonial-deck card
#[component]
pub fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <div class="bg-black/40 backdrop-blur-sm border border-neutral-800 rounded-xl p-6 h-full">
            <div class="flex flex-col h-full">
                <div class="mb-4 flex items-center gap-4">
                    <div
                        class="w-12 h-12 rounded-full border-2 border-red-500 flex items-center justify-center"
                        style=format!("background-color: {};", accent_color(testimonial.author))
                    >
                        <span class="font-bold text-white">{initials(testimonial.author)}</span>
                    </div>
                    <div>
                        <h4 class="font-bold">{testimonial.author}</h4>
                        <div class="flex text-red-500">
                            {(0..5).map(|_| view! { <Icon name=icons::STAR class="w-4 h-4" /> }).collect_view()}
                        </div>
                    </div>
                </div>
                <p class="text-neutral-400 flex-grow">{testimonial.quote}</p>
            </div>
        </div>
    }
}

/// Weekly-schedule class card with the 1-5 intensity meter
#[component]
pub fn ClassCard(class_entry: &'static ClassEntry) -> impl IntoView {
    view! {
        <div class="bg-black/40 backdrop-blur-sm border border-neutral-800 rounded-xl p-4">
            <div class="flex justify-between items-center">
                <div>
                    <h4 class="font-bold text-lg">{class_entry.name}</h4>
                    <p class="text-neutral-400">{class_entry.time}</p>
                    <p class="text-sm text-red-400">{format!("with {}", class_entry.trainer)}</p>
                </div>
                <div class="flex flex-col items-end">
                    <div class="text-sm text-neutral-400 mb-1">"Intensity"</div>
                    <div class="flex gap-1">
                        {(0..5u8).map(|i| {
                            let filled = i < class_entry.intensity;
                            view! {
                                <div class=if filled {
                                    "w-2 h-6 rounded-full bg-red-500"
                                } else {
                                    "w-2 h-6 rounded-full bg-neutral-700"
                                }></div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Deterministic accent color derived from a display name.
fn accent_color(name: &str) -> &'static str {
    const COLORS: [&str; 6] = [
        "#7f1d1d", "#831843", "#581c87", "#1e3a8a", "#14532d", "#713f12",
    ];
    let hash = name
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_add(b as u32));
    COLORS[(hash as usize) % COLORS.len()]
}

/// Uppercase initials for the avatar placeholder.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}
