//! `IntersectionObserver` glue shared by the reveal wrapper and the floating
//! navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components hold the returned [`ObserverHandle`] in a local `StoredValue`
//! and clear it in `on_cleanup`; dropping the handle disconnects the observer
//! and releases the JS callback.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// The parts of an observer entry the UI reads.
pub struct Sighting {
    pub target: Element,
    pub is_intersecting: bool,
    pub ratio: f64,
    /// Top edge of the target's bounding rect, relative to the viewport.
    pub top: f64,
}

impl From<IntersectionObserverEntry> for Sighting {
    fn from(entry: IntersectionObserverEntry) -> Self {
        Self {
            target: entry.target(),
            is_intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
            top: entry.bounding_client_rect().top(),
        }
    }
}

/// Live observer. Disconnects on drop.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `targets` and deliver each callback batch to `on_batch`.
///
/// Returns `None` when the browser rejects the options or `targets` is empty.
pub fn observe(
    targets: &[Element],
    root_margin: &str,
    thresholds: &[f64],
    mut on_batch: impl FnMut(Vec<Sighting>) + 'static,
) -> Option<ObserverHandle> {
    if targets.is_empty() {
        return None;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .map(Sighting::from)
                .collect();
            on_batch(batch);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    let threshold_list = thresholds
        .iter()
        .map(|t| JsValue::from_f64(*t))
        .collect::<Array>();
    init.set_threshold(&threshold_list);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("intersection observer unavailable: {err:?}");
            return None;
        }
    };
    for target in targets {
        observer.observe(target);
    }

    Some(ObserverHandle { observer, _callback: callback })
}
