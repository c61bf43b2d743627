//! Intro overlay gate and the scroll-snapping container behind it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page sections are rendered immediately (so SSR markup is complete) but the
//! container stays transparent, inert, and `aria-hidden` while the overlay is
//! up. Document scrolling is locked until the guest opens the invitation and
//! restored on open or unmount.

use leptos::prelude::*;

use crate::content::OverlayCopy;
use crate::state::invitation::{DEFAULT_OPEN_LABEL, InvitationState, OverlayPhase};
use crate::util::scroll::{self, OverflowSnapshot};

#[component]
pub fn InvitationShell(copy: OverlayCopy, children: Children) -> impl IntoView {
    let invitation = RwSignal::new(InvitationState::default());
    let saved_overflow = StoredValue::new(None::<OverflowSnapshot>);

    Effect::new(move || {
        let locked = invitation.with(InvitationState::scroll_locked);
        if saved_overflow.with_value(Option::is_none) {
            saved_overflow.set_value(OverflowSnapshot::capture());
        }
        if locked {
            scroll::lock_document();
        } else if let Some(snapshot) = saved_overflow.get_value() {
            snapshot.restore();
        }
    });
    on_cleanup(move || {
        if let Some(snapshot) = saved_overflow.get_value() {
            snapshot.restore();
        }
    });

    let on_open = move |_| {
        if !invitation.try_update(InvitationState::open).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            log::debug!("invitation opened");
            gloo_timers::callback::Timeout::new(crate::state::invitation::OVERLAY_FADE_MS, move || {
                let _ = invitation.try_update(InvitationState::finish_fade);
            })
            .forget();
        }
    };

    let opened = move || invitation.with(|s| s.opened);
    let fading = move || invitation.with(|s| s.overlay == OverlayPhase::Fading);
    let button_label = copy.button_label.unwrap_or(DEFAULT_OPEN_LABEL);

    view! {
        <Show when=move || invitation.with(InvitationState::overlay_mounted)>
            <div class="invitation-overlay" class:invitation-overlay--fading=fading>
                <div class="invitation-overlay__card">
                    {copy.subtitle.map(|subtitle| view! { <p class="invitation-overlay__subtitle">{subtitle}</p> })}
                    <h1 class="invitation-overlay__title">{copy.title}</h1>
                    {copy
                        .description
                        .map(|description| view! { <p class="invitation-overlay__description">{description}</p> })}
                    <div class="invitation-overlay__actions">
                        <span class="invitation-overlay__rule"></span>
                        <button type="button" class="invitation-overlay__button" on:click=on_open>
                            {button_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>

        <div
            class="invitation-scroll"
            class:invitation-scroll--open=opened
            aria-hidden=move || if opened() { "false" } else { "true" }
        >
            {children()}
        </div>
    }
}
