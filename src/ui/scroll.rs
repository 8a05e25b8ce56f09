//! Scroll progress context
//!
//! Provides:
//! - ScrollContext with the page-wide scroll progress signal
//! - A viewport width signal refreshed by the same resize listener
//! - Window scroll/resize listeners wired once at the root
//!
//! Scroll progress is the only cross-component scroll state; the listener
//! installed here is its single writer. Handlers are O(1): read three
//! window metrics, store one float.

use leptos::prelude::*;

/// Viewport width assumed before the first client-side measurement.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Shared scroll state for parallax and layout consumers.
#[derive(Clone, Copy)]
pub struct ScrollContext {
    /// Normalized page scroll progress in [0, 1]; 0.0 at the top.
    pub progress: RwSignal<f64>,
    /// Current viewport width in px; drives the carousel window size.
    pub viewport_width: RwSignal<f64>,
}

/// Provide the scroll context and install the window listeners.
///
/// Call once from the root page. On the server (or if no window exists)
/// the signals keep their defaults and nothing is installed.
pub fn provide_scroll_context() -> ScrollContext {
    let ctx = ScrollContext {
        progress: RwSignal::new(0.0),
        viewport_width: RwSignal::new(DEFAULT_VIEWPORT_WIDTH),
    };

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };

            // Initial measurement before the first scroll event
            measure(ctx);

            let handler =
                Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| measure(ctx));

            let _ = window
                .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());
            let _ = window
                .add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref());

            // Keep the closure alive for the page lifetime
            handler.forget();
        });
    }

    provide_context(ctx);

    ctx
}

/// Use the scroll context from anywhere in the component tree
pub fn use_scroll_context() -> ScrollContext {
    use_context::<ScrollContext>().expect("ScrollContext should be provided")
}

/// Read the window metrics and update both signals.
#[cfg(not(feature = "ssr"))]
fn measure(ctx: ScrollContext) {
    use crate::core::motion::scroll_progress;

    let Some(window) = web_sys::window() else {
        return;
    };

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);

    ctx.progress
        .set(scroll_progress(scroll_y, document_height, viewport_height));

    if let Some(width) = window.inner_width().ok().and_then(|v| v.as_f64()) {
        ctx.viewport_width.set(width);
    }
}
