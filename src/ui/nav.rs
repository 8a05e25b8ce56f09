//! Navigation context, header, and mobile menu overlay
//!
//! The root page owns one [`NavContext`] and provides it through Leptos
//! context: per-section node refs plus the mobile menu phase. Any control
//! that navigates calls [`NavContext::scroll_to`], which smooth-scrolls
//! the target section into view and always forces the menu closed.

use leptos::html;
use leptos::prelude::*;

use crate::core::nav::{MenuPhase, SectionKey};
use crate::ui::icon::{Icon, icons};
use crate::ui::magnetic::MagneticButton;

/// Navigation state threaded to every section and control.
#[derive(Clone, Copy)]
pub struct NavContext {
    menu: RwSignal<MenuPhase>,
    home: NodeRef<html::Section>,
    features: NodeRef<html::Section>,
    trainers: NodeRef<html::Section>,
    classes: NodeRef<html::Section>,
    pricing: NodeRef<html::Section>,
    contact: NodeRef<html::Section>,
}

impl NavContext {
    /// The node ref a section registers itself under.
    pub fn section_ref(&self, key: SectionKey) -> NodeRef<html::Section> {
        match key {
            SectionKey::Home => self.home,
            SectionKey::Features => self.features,
            SectionKey::Trainers => self.trainers,
            SectionKey::Classes => self.classes,
            SectionKey::Pricing => self.pricing,
            SectionKey::Contact => self.contact,
        }
    }

    /// Current menu phase.
    pub fn menu_phase(&self) -> MenuPhase {
        self.menu.get()
    }

    /// Whether the mobile menu is open.
    pub fn menu_is_open(&self) -> bool {
        self.menu.get().is_open()
    }

    /// Burger button handler.
    pub fn toggle_menu(&self) {
        let next = self.menu.get_untracked().toggled();
        self.menu.set(next);
        if next == MenuPhase::Closing {
            self.settle_after_transition();
        }
    }

    /// Force the menu toward closed; idempotent when already closed.
    pub fn close_menu(&self) {
        let current = self.menu.get_untracked();
        let next = current.closed();
        if next != current {
            self.menu.set(next);
            self.settle_after_transition();
        }
    }

    /// Smooth-scroll `key`'s section to the viewport top and close the
    /// menu. A section that is not mounted yet is silently skipped.
    pub fn scroll_to(&self, key: SectionKey) {
        #[cfg(not(feature = "ssr"))]
        {
            use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

            if let Some(section) = self.section_ref(key).get_untracked() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
        }

        self.close_menu();
    }

    /// Unmount the overlay once the exit transition has played.
    fn settle_after_transition(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let menu = self.menu;
            gloo_timers::callback::Timeout::new(crate::core::nav::MENU_TRANSITION_MS, move || {
                let _ = menu.try_update(|phase| *phase = phase.settled());
            })
            .forget();
        }
        #[cfg(feature = "ssr")]
        {
            // No transition to wait for without a rendering surface
            self.menu.set(self.menu.get_untracked().settled());
        }
    }
}

/// Provide the navigation context to the page
pub fn provide_nav_context() -> NavContext {
    let ctx = NavContext {
        menu: RwSignal::new(MenuPhase::Closed),
        home: NodeRef::new(),
        features: NodeRef::new(),
        trainers: NodeRef::new(),
        classes: NodeRef::new(),
        pricing: NodeRef::new(),
        contact: NodeRef::new(),
    };
    provide_context(ctx);
    ctx
}

/// Use the navigation context from anywhere in the component tree
pub fn use_nav_context() -> NavContext {
    use_context::<NavContext>().expect("NavContext should be provided")
}

/// Fixed page header with desktop nav and the mobile menu toggle
#[component]
pub fn Header() -> impl IntoView {
    let nav = use_nav_context();

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-black/20 backdrop-blur-md border-b border-neutral-800">
            <div class="container mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <Logo />

                    <nav class="hidden md:flex items-center gap-8">
                        {SectionKey::ALL.into_iter().map(|key| {
                            view! {
                                <button
                                    class="text-sm hover:text-red-500 transition-colors"
                                    on:click=move |_| nav.scroll_to(key)
                                >
                                    {key.label()}
                                </button>
                            }
                        }).collect_view()}
                    </nav>

                    <div class="hidden md:block">
                        <MagneticButton class="btn-gradient">
                            "JOIN NOW"
                        </MagneticButton>
                    </div>

                    <button
                        class="md:hidden text-white"
                        on:click=move |_| nav.toggle_menu()
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || nav.menu_is_open()
                    >
                        {move || {
                            if nav.menu_is_open() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Full-screen mobile navigation overlay
///
/// Mounted while the phase is Open or Closing; the `menu-leaving` class
/// plays the reverse transition before the phase settles to Closed.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let nav = use_nav_context();

    view! {
        {move || {
            nav.menu_phase().is_mounted().then(|| {
                view! {
                    <div
                        class="fixed inset-0 z-40 bg-black/95 pt-20 px-4 mobile-menu"
                        class=("menu-leaving", move || nav.menu_phase() == MenuPhase::Closing)
                    >
                        <nav class="flex flex-col gap-4">
                            {SectionKey::ALL.into_iter().map(|key| {
                                view! {
                                    <button
                                        class="py-3 text-left border-b border-neutral-800 hover:text-red-500 transition-colors"
                                        on:click=move |_| nav.scroll_to(key)
                                    >
                                        {key.label()}
                                    </button>
                                }
                            }).collect_view()}
                            <div class="mt-4">
                                <MagneticButton class="w-full btn-gradient">
                                    "JOIN NOW"
                                </MagneticButton>
                            </div>
                        </nav>
                    </div>
                }
            })
        }}
    }
}

/// Brand logo block
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <div class="w-10 h-10 rounded-full bg-gradient-to-br from-red-500 to-red-700 flex items-center justify-center">
                <Icon name=icons::DUMBBELL class="w-5 h-5 text-white" />
            </div>
            <span class="text-xl font-bold">"NEXUS"</span>
        </div>
    }
}
