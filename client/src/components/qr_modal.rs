//! Modal showing the digital-envelope QR code.

#[cfg(test)]
#[path = "qr_modal_test.rs"]
mod qr_modal_test;

use leptos::prelude::*;

use crate::content::GiftInfo;

/// Keys that dismiss the dialog.
#[must_use]
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Fullscreen QR dialog. Closes on backdrop click, the close button, or Escape.
///
/// The dialog takes focus when it mounts so key presses reach it.
#[component]
pub fn QrModal(gift: GiftInfo, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });

    view! {
        <div class="qr-modal__backdrop" role="presentation" on:click=on_backdrop>
            <div
                class="qr-modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="qr-modal-title"
                tabindex="-1"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <button type="button" class="qr-modal__close" aria-label="Tutup QR digital" on:click=on_close_click>
                    "✕"
                </button>
                <p id="qr-modal-title" class="qr-modal__title">"QR Digital"</p>
                <div class="qr-modal__code">
                    <img src=gift.qr_src alt=gift.qr_alt/>
                </div>
                <p class="qr-modal__note">{gift.qr_note}</p>
            </div>
        </div>
    }
}
