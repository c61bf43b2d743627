//! Photo gallery with a looping thumbnail carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Position logic lives in [`CarouselState`]; this component owns the DOM side:
//! it applies the scroll commands to the thumbnail viewport and runs the
//! auto-advance and interaction-idle timers. Timers are fire-and-forget and
//! carry tokens, so a timer outliving the component or a newer interaction is
//! ignored by the state model.

use leptos::prelude::*;

use crate::content::GalleryImage;
use crate::state::carousel::{CarouselState, Direction, extended_slots};

#[component]
pub fn WeddingGallery(images: &'static [GalleryImage]) -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::new(images.len()));
    let viewport_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::carousel::{AUTO_ADVANCE_MS, ScrollMotion};

        let position = Memo::new(move |_| carousel.with(CarouselState::virtual_index));
        Effect::new(move || {
            position.track();
            let Some(viewport) = viewport_ref.get() else {
                return;
            };
            let width = f64::from(viewport.client_width());
            let Some(command) = carousel.try_update(|c| c.settle(width)) else {
                return;
            };

            if let Some(shift) = command.shift_by {
                let jump = web_sys::ScrollToOptions::new();
                jump.set_left(shift);
                jump.set_behavior(web_sys::ScrollBehavior::Instant);
                viewport.scroll_by_with_scroll_to_options(&jump);
            }

            let target = web_sys::ScrollToOptions::new();
            target.set_left(command.left);
            target.set_behavior(match command.motion {
                ScrollMotion::Instant => web_sys::ScrollBehavior::Instant,
                ScrollMotion::Smooth => web_sys::ScrollBehavior::Smooth,
            });
            viewport.scroll_to_with_scroll_to_options(&target);
        });

        let ticket = Memo::new(move |_| carousel.with(CarouselState::advance_ticket));
        Effect::new(move || {
            let Some(ticket) = ticket.get() else {
                return;
            };
            gloo_timers::callback::Timeout::new(AUTO_ADVANCE_MS, move || {
                let _ = carousel.try_update(|c| c.auto_advance(ticket));
            })
            .forget();
        });
    }

    let mark_interacting = move || {
        let Some(token) = carousel.try_update(CarouselState::begin_interaction) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(crate::state::carousel::INTERACTION_IDLE_MS, move || {
            let _ = carousel.try_update(|c| c.end_interaction(token));
        })
        .forget();
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    let active_image = move || carousel.with(CarouselState::active_index).and_then(|i| images.get(i));
    let cannot_navigate = move || !carousel.with(CarouselState::can_navigate);

    (!images.is_empty()).then(move || {
        view! {
            <div
                class="gallery"
                on:mouseenter=move |_| mark_interacting()
                on:mouseleave=move |_| carousel.update(CarouselState::cancel_interaction)
                on:focusin=move |_| mark_interacting()
                on:focusout=move |_| mark_interacting()
            >
                <div class="gallery__stage">
                    <div class="gallery__frame">
                        <img
                            class="gallery__image"
                            src=move || active_image().map(|image| image.src)
                            alt=move || active_image().map(|image| image.alt)
                        />
                        <div class="gallery__shade"></div>
                    </div>
                    <div class="gallery__caption">
                        <p class="gallery__title">{move || active_image().map(|image| image.title)}</p>
                        <p class="gallery__description">{move || active_image().map(|image| image.description)}</p>
                    </div>
                </div>

                <div class="gallery__meta">
                    <span class="gallery__hint">"Pilih Momen"</span>
                    <span class="gallery__counter">{move || carousel.with(CarouselState::counter_label)}</span>
                </div>

                <div class="gallery__strip">
                    <button
                        type="button"
                        class="gallery__arrow"
                        aria-label="Foto sebelumnya"
                        disabled=cannot_navigate
                        on:click=move |_| {
                            mark_interacting();
                            carousel.update(|c| c.step(Direction::Prev));
                        }
                    >
                        <ThumbArrow direction=Direction::Prev/>
                    </button>

                    <div class="gallery__viewport" node_ref=viewport_ref>
                        {extended_slots(images.len())
                            .into_iter()
                            .map(|slot| {
                                let image = images[slot.original_index];
                                view! {
                                    <button
                                        type="button"
                                        class="gallery__thumb"
                                        class:gallery__thumb--active=move || {
                                            carousel.with(|c| c.is_active_slot(slot.virtual_index))
                                        }
                                        aria-label=format!("Tampilkan foto {}", image.title)
                                        on:click=move |_| {
                                            mark_interacting();
                                            carousel.update(|c| c.select(slot.original_index));
                                        }
                                    >
                                        <img src=image.src alt=image.alt loading="lazy"/>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        type="button"
                        class="gallery__arrow"
                        aria-label="Foto selanjutnya"
                        disabled=cannot_navigate
                        on:click=move |_| {
                            mark_interacting();
                            carousel.update(|c| c.step(Direction::Next));
                        }
                    >
                        <ThumbArrow direction=Direction::Next/>
                    </button>
                </div>
            </div>
        }
    })
}

#[component]
fn ThumbArrow(direction: Direction) -> impl IntoView {
    view! {
        <svg
            class="gallery__arrow-icon"
            class:gallery__arrow-icon--prev={direction == Direction::Prev}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            aria-hidden="true"
        >
            <path d="M8 5l8 7-8 7"/>
        </svg>
    }
}
