//! Magnetic call-to-action button
//!
//! While the pointer is over the button, the control drifts toward it:
//! the rendered translate is the pointer's offset from the button center
//! damped by [`crate::core::pointer::MAGNETIC_DAMPING`]. A gradient
//! overlay and glow shadow accompany the hover. Leaving the button snaps
//! everything back instantly.

use leptos::html;
use leptos::prelude::*;
use leptos::web_sys;

use crate::core::pointer::PointerOffset;

#[cfg(not(feature = "ssr"))]
use crate::core::pointer::ControlRect;

/// Pointer-following button.
///
/// Unmounting mid-hover disposes the offset signal with the component, so
/// no further offset computation can occur.
#[component]
pub fn MagneticButton(
    /// Additional CSS classes for the button
    #[prop(into, optional)]
    class: String,
    /// Click handler
    #[prop(optional)]
    on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let offset = RwSignal::new(PointerOffset::default());
    let node_ref = NodeRef::<html::Button>::new();

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(button) = node_ref.get() {
                let rect = button.get_bounding_client_rect();
                offset.update(|o| {
                    o.track(
                        ev.client_x() as f64,
                        ev.client_y() as f64,
                        ControlRect::new(rect.left(), rect.top(), rect.width(), rect.height()),
                    );
                });
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = ev;
        }
    };

    let transform = move || {
        let (x, y) = offset.get().rendered_offset();
        format!("transform: translate({x:.1}px, {y:.1}px);")
    };

    let hovering = move || offset.get().hovering;

    view! {
        <button
            node_ref=node_ref
            class=format!("magnetic-btn {class}")
            class=("magnetic-glow", hovering)
            style=transform
            on:mousemove=on_mouse_move
            on:mouseenter=move |_| offset.update(|o| o.hovering = true)
            on:mouseleave=move |_| offset.update(|o| o.release())
            on:click=move |_| {
                if let Some(callback) = on_press {
                    callback.run(());
                }
            }
        >
            {move || {
                hovering().then(|| view! { <span class="magnetic-overlay" aria-hidden="true"></span> })
            }}
            <span class="magnetic-content">{children()}</span>
        </button>
    }
}
