use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Overlay plus dialog surface shared by the profile popup and confirmation dialogs.
#[component]
pub fn ModalFrame(
    /// Called when the dialog is dismissed (overlay click or close button).
    on_close: Callback<()>,
    /// Surface size modifier: "mini", "small" or "large" (default: "small").
    #[prop(optional)]
    size: Option<&'static str>,
    /// Show the close button and allow overlay dismissal (default: true).
    #[prop(optional)]
    closable: Option<bool>,
    children: Children,
) -> impl IntoView {
    let closable = closable.unwrap_or(true);
    let size = size.unwrap_or("small");
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Dismiss only when both press and release land on the overlay itself,
    // so a text selection dragged outside the surface does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let close_deferred = move || {
        // Next tick: the overlay must not be removed during its own click dispatch.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = closable && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_deferred();
        }
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=format!("modal modal--{size}")
                role="dialog"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {closable.then(|| view! {
                    <button class="modal__close" title="Close" on:click=move |_| close_deferred()>
                        {icon("close")}
                    </button>
                })}
                {children()}
            </div>
        </div>
    }
}
