//! Viewport-triggered reveal animations
//!
//! Wraps a block of content and plays its one-shot enter animation (fade
//! in, slide up) the first time any part of it intersects the viewport.
//! Each wrapped element owns its own IntersectionObserver registered for
//! exactly one notification: after firing, the observer is torn down, so
//! leaving and re-entering the viewport can never replay or reverse the
//! animation.
//!
//! If intersection observation is unavailable the target renders visible
//! immediately - a missing animation, never hidden content.

use leptos::prelude::*;

use crate::core::reveal::{REVEAL_DURATION_SECS, RevealState};

/// Fraction of the element that must be visible to trigger the reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom margin shrinking the observed viewport, so targets reveal once
/// they are meaningfully on screen rather than at the very first pixel.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// One-shot reveal wrapper.
///
/// `index` staggers grids of siblings (0.1s steps); `duration_secs`
/// defaults to the heading/card duration and is overridden to 0.8s for
/// the hero copy block.
#[component]
pub fn Reveal(
    /// Sibling index used for index-based stagger delays
    #[prop(optional)]
    index: Option<usize>,
    /// Enter animation duration in seconds
    #[prop(default = REVEAL_DURATION_SECS)]
    duration_secs: f64,
    /// Additional CSS classes for the wrapper
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(match index {
        Some(i) => RevealState::with_stagger(i),
        None => RevealState::new(),
    });

    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    observe(node_ref, state);

    let delay_secs = state.get_untracked().delay_secs();
    let style = format!(
        "transition-duration: {duration_secs}s; transition-delay: {delay_secs}s;"
    );

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal-target {class}")
            class:visible=move || state.get().is_revealed()
            style=style
        >
            {children()}
        </div>
    }
}

/// Register the element with a single-fire IntersectionObserver.
#[cfg(not(feature = "ssr"))]
fn observe(node_ref: NodeRef<leptos::html::Div>, state: RwSignal<RevealState>) {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen::closure::Closure;

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };

        if !observer_supported() {
            let _ = state.try_update(|s| s.mark_visible());
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    // try_update: the wrapped element may already be
                    // unmounted when a late notification arrives
                    let fired = state.try_update(|s| s.mark_visible()).unwrap_or(false);
                    if fired {
                        observer.unobserve(&entry.target());
                        observer.disconnect();
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => {
                observer.observe(&element);

                // Unmounting before the first intersection silently drops
                // the registration
                let cleanup = observer.clone();
                on_cleanup(move || cleanup.disconnect());

                callback.forget();
            }
            Err(_) => {
                let _ = state.try_update(|s| s.mark_visible());
            }
        }
    });
}

/// Whether the runtime exposes IntersectionObserver.
#[cfg(not(feature = "ssr"))]
fn observer_supported() -> bool {
    use wasm_bindgen::JsValue;

    web_sys::window()
        .map(|w| {
            js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}
