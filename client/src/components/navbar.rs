//! Site navbar, hidden on invitation routes.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Invitation pages run full-screen without site chrome.
#[must_use]
pub fn navbar_visible(path: &str) -> bool {
    !path.starts_with("/wedding")
}

#[component]
pub fn ConditionalNavbar() -> impl IntoView {
    let location = use_location();
    move || navbar_visible(&location.pathname.get()).then(|| view! { <Navbar/> })
}

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="app-navbar">
            <nav class="app-navbar__inner">
                <a href="/" class="app-navbar__brand">"Undangan"</a>
                <div class="app-navbar__links">
                    <a href="/" class="app-navbar__link">"Home"</a>
                    <a href="/wedding" class="app-navbar__link">"Wedding"</a>
                </div>
            </nav>
        </header>
    }
}
