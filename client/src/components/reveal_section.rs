//! Section wrapper that fades and slides in when scrolled into view.

use leptos::prelude::*;

/// Scroll-snap section whose `reveal-section--visible` class follows the
/// viewport intersection rule in [`crate::state::reveal::next_visibility`].
#[component]
pub fn RevealSection(
    #[prop(into)] id: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let section_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLDS, next_visibility};
        use crate::util::observer::{ObserverHandle, observe};

        let handle = StoredValue::new_local(None::<ObserverHandle>);
        Effect::new(move || {
            let Some(section) = section_ref.get() else {
                return;
            };
            let element: web_sys::Element = section.into();
            let target = element.clone();
            let observed = observe(&[element], REVEAL_ROOT_MARGIN, &REVEAL_THRESHOLDS, move |batch| {
                for sighting in batch.iter().filter(|s| s.target == target) {
                    let _ = visible.try_update(|v| *v = next_visibility(*v, sighting.is_intersecting, sighting.top));
                }
            });
            handle.set_value(observed);
        });
        on_cleanup(move || handle.set_value(None));
    }

    view! {
        <section
            id=id
            node_ref=section_ref
            class=format!("reveal-section {class}")
            class:reveal-section--visible=move || visible.get()
        >
            {children()}
        </section>
    }
}
