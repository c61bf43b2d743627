//! Landing page listing the available invitation themes.

use leptos::prelude::*;

use crate::theme::Theme;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <h1 class="home-page__title">"Undangan Pernikahan"</h1>
            <p class="home-page__subtitle">"Pilih tema undangan"</p>
            <ThemeLinks/>
        </main>
    }
}

/// One card per theme linking to its invitation route.
#[component]
pub fn ThemeLinks() -> impl IntoView {
    view! {
        <ul class="theme-list">
            {Theme::ALL
                .into_iter()
                .map(|theme| {
                    let palette = theme.palette();
                    let swatch = format!("background:{};border-color:{};", palette.background, palette.accent);
                    view! {
                        <li class="theme-list__item">
                            <a class="theme-list__link" href=theme.path()>
                                <span class="theme-list__swatch" style=swatch></span>
                                <span class="theme-list__name">{theme.display_name()}</span>
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
