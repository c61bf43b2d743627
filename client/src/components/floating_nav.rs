//! Floating in-page navigation with active-section highlighting.

use leptos::prelude::*;

use crate::content::SectionConfig;
use crate::state::nav::ActiveSection;

/// Duration of the press pulse on a navigation button.
pub const NAV_PULSE_MS: u32 = 250;

/// Bottom-centered icon bar linking to each page section.
///
/// On hydration the sections are looked up by DOM id and watched with an
/// intersection observer; the most visible one is highlighted.
#[component]
pub fn FloatingNav(sections: Vec<SectionConfig>) -> impl IntoView {
    let active = RwSignal::new(ActiveSection::new(sections.iter().map(|s| s.id)));
    let pulsing = RwSignal::new(None::<&'static str>);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::nav::{NAV_ROOT_MARGIN, SectionSighting, nav_thresholds};
        use crate::util::observer::{ObserverHandle, observe};

        let ids: Vec<&'static str> = sections.iter().map(|s| s.id).collect();
        let handle = StoredValue::new_local(None::<ObserverHandle>);
        Effect::new(move || {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let targets: Vec<web_sys::Element> = ids.iter().filter_map(|id| document.get_element_by_id(id)).collect();
            if targets.len() < ids.len() {
                log::debug!("floating nav: {} of {} sections found", targets.len(), ids.len());
            }
            let observed = observe(&targets, NAV_ROOT_MARGIN, &nav_thresholds(), move |batch| {
                let sightings: Vec<SectionSighting> = batch
                    .into_iter()
                    .map(|s| SectionSighting { id: s.target.id(), is_intersecting: s.is_intersecting, ratio: s.ratio })
                    .collect();
                let _ = active.try_update(|a| a.observe(&sightings));
            });
            handle.set_value(observed);
        });
        on_cleanup(move || handle.set_value(None));
    }

    (!sections.is_empty()).then(move || {
        view! {
            <div class="floating-nav">
                <nav class="floating-nav__bar">
                    {sections
                        .into_iter()
                        .map(|section| {
                            let id = section.id;
                            let on_click = move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                if !crate::util::scroll::scroll_to_section(id) {
                                    return;
                                }
                                pulsing.set(Some(id));
                                #[cfg(feature = "hydrate")]
                                gloo_timers::callback::Timeout::new(NAV_PULSE_MS, move || {
                                    if pulsing.try_get_untracked().flatten() == Some(id) {
                                        let _ = pulsing.try_set(None);
                                    }
                                })
                                .forget();
                            };
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class="floating-nav__link"
                                    class:floating-nav__link--active=move || active.with(|a| a.is_active(id))
                                    class:floating-nav__link--pulse=move || pulsing.get() == Some(id)
                                    aria-label=section.label
                                    title=section.label
                                    on:click=on_click
                                >
                                    <svg
                                        class="floating-nav__icon"
                                        viewBox="0 0 24 24"
                                        fill="none"
                                        stroke="currentColor"
                                        stroke-width="1.5"
                                        aria-hidden="true"
                                        inner_html=section.icon
                                    ></svg>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        }
    })
}
