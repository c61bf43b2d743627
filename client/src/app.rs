//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::ConditionalNavbar;
use crate::pages::{home::HomePage, wedding::WeddingPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/undangan.css"/>
        <Title text="Undangan Pernikahan"/>

        <Router>
            <ConditionalNavbar/>
            <Routes fallback=|| "Halaman tidak ditemukan.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("wedding") view=WeddingPage/>
                <Route path=(StaticSegment("wedding"), ParamSegment("theme")) view=WeddingPage/>
            </Routes>
        </Router>
    }
}
