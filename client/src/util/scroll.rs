//! Document scroll helpers.
//!
//! All functions are no-ops outside a browser environment, so components can
//! call them unconditionally during SSR.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Inline `overflow` values of `<html>` and `<body>` before the intro gate
/// locked scrolling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverflowSnapshot {
    pub document: String,
    pub body: String,
}

impl OverflowSnapshot {
    /// Read the current inline overflow values.
    pub fn capture() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let (root, body) = root_and_body()?;
            Some(Self {
                document: root.style().get_property_value("overflow").unwrap_or_default(),
                body: body.style().get_property_value("overflow").unwrap_or_default(),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    /// Put the captured values back.
    pub fn restore(&self) {
        set_overflow(&self.document, &self.body);
    }
}

/// Block page scrolling on both `<html>` and `<body>`.
pub fn lock_document() {
    set_overflow("hidden", "hidden");
}

fn set_overflow(document: &str, body: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some((root, body_el)) = root_and_body() else {
            return;
        };
        let _ = root.style().set_property("overflow", document);
        let _ = body_el.style().set_property("overflow", body);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (document, body);
    }
}

#[cfg(feature = "hydrate")]
fn root_and_body() -> Option<(web_sys::HtmlElement, web_sys::HtmlElement)> {
    let document = web_sys::window()?.document()?;
    let root = document.document_element()?.dyn_into::<web_sys::HtmlElement>().ok()?;
    let body = document.body()?;
    Some((root, body))
}

/// Smooth-scroll the element with `id` to the top of its scroll container.
///
/// Returns `false` when no such element exists.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}
