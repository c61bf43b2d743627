//! Themed invitation page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/wedding` and `/wedding/:theme` resolve to a `Theme`, which decides the
//! palette and which sections render. Every section is wrapped in a
//! `RevealSection` whose DOM id matches the floating nav targets.

#[cfg(test)]
#[path = "wedding_test.rs"]
mod wedding_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::floating_nav::FloatingNav;
use crate::components::invitation_shell::InvitationShell;
use crate::components::qr_modal::QrModal;
use crate::components::reveal_section::RevealSection;
use crate::components::wedding_gallery::WeddingGallery;
use crate::components::wish_board::WishBoard;
use crate::content::{
    CEREMONIES, COUPLE, GALLERY, GIFT, OVERLAY, SectionId, TIMELINE, VENUE, VERSE_ARABIC, VERSE_TRANSLATION,
    section_config,
};
use crate::pages::home::ThemeLinks;
use crate::theme::Theme;

/// Route outcome for an optional theme slug. `None` means the slug is unknown.
#[must_use]
pub fn resolve_theme(slug: Option<&str>) -> Option<Theme> {
    match slug {
        None => Some(Theme::default()),
        Some(slug) => Theme::from_slug(slug),
    }
}

#[component]
pub fn WeddingPage() -> impl IntoView {
    let params = use_params_map();
    let theme = move || params.read().get("theme");

    move || match resolve_theme(theme().as_deref()) {
        Some(theme) => view! { <InvitationPage theme/> }.into_any(),
        None => view! { <UnknownTheme/> }.into_any(),
    }
}

#[component]
fn UnknownTheme() -> impl IntoView {
    view! {
        <main class="home-page">
            <Title text="Tema tidak ditemukan"/>
            <h1 class="home-page__title">"Tema tidak ditemukan"</h1>
            <p class="home-page__subtitle">"Silakan pilih salah satu tema berikut."</p>
            <ThemeLinks/>
        </main>
    }
}

#[component]
pub fn InvitationPage(theme: Theme) -> impl IntoView {
    let nav_sections = theme.sections().iter().copied().map(section_config).collect::<Vec<_>>();
    let title = format!("{} | {}", OVERLAY.title, theme.display_name());

    view! {
        <Title text=title/>
        <div class=format!("invitation theme-{}", theme.slug()) style=theme.css_vars()>
            <InvitationShell copy=OVERLAY>
                <main class="invitation__sections">
                    {theme.sections().iter().copied().map(section_view).collect_view()}
                </main>
                <FloatingNav sections=nav_sections/>
            </InvitationShell>
        </div>
    }
}

fn section_view(section: SectionId) -> AnyView {
    let id = section.dom_id();
    match section {
        SectionId::Invitation => view! { <RevealSection id><VerseSection/></RevealSection> }.into_any(),
        SectionId::Couple => view! { <RevealSection id><CoupleSection/></RevealSection> }.into_any(),
        SectionId::Story => view! { <RevealSection id><StorySection/></RevealSection> }.into_any(),
        SectionId::Events => view! { <RevealSection id><EventsSection/></RevealSection> }.into_any(),
        SectionId::Gallery => view! {
            <RevealSection id class="reveal-section--wide">
                <h2 class="section-title">"Galeri"</h2>
                <WeddingGallery images=&GALLERY/>
            </RevealSection>
        }
        .into_any(),
        SectionId::Wishes => view! { <RevealSection id><WishesSection/></RevealSection> }.into_any(),
    }
}

#[component]
fn VerseSection() -> impl IntoView {
    view! {
        <div class="section-card verse">
            <p class="verse__opening">"Bismillahirrahmanirrahim"</p>
            <p class="verse__arabic" dir="rtl" lang="ar">{VERSE_ARABIC}</p>
            <p class="verse__translation">{VERSE_TRANSLATION}</p>
        </div>
    }
}

#[component]
fn CoupleSection() -> impl IntoView {
    view! {
        <h2 class="section-title">"Mempelai"</h2>
        <div class="couple">
            {COUPLE
                .iter()
                .map(|person| {
                    view! {
                        <article class="section-card couple__card" id=person.id>
                            <img class="couple__photo" src=person.image_src alt=person.image_alt loading="lazy"/>
                            <p class="couple__role">{person.role}</p>
                            <h3 class="couple__name">{person.name}</h3>
                            <p class="couple__parents">{person.parents}</p>
                            <p class="couple__description">{person.description}</p>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn StorySection() -> impl IntoView {
    view! {
        <h2 class="section-title">"Cerita Kami"</h2>
        <ol class="timeline">
            {TIMELINE
                .iter()
                .map(|event| {
                    view! {
                        <li class="section-card timeline__item">
                            <span class="timeline__year">{event.year}</span>
                            <h3 class="timeline__title">{event.title}</h3>
                            <p class="timeline__description">{event.description}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
fn EventsSection() -> impl IntoView {
    view! {
        <h2 class="section-title">"Akad & Resepsi"</h2>
        <div class="events">
            {CEREMONIES
                .iter()
                .map(|ceremony| {
                    view! {
                        <article class="section-card events__card">
                            <h3 class="events__title">{ceremony.title}</h3>
                            <p class="events__schedule">{ceremony.schedule}</p>
                            <p class="events__description">{ceremony.description}</p>
                        </article>
                    }
                })
                .collect_view()}
        </div>
        <div class="section-card venue">
            <h3 class="venue__name">{VENUE.name}</h3>
            <p class="venue__address">{VENUE.address}</p>
            <a class="venue__link" href=VENUE.maps_url target="_blank" rel="noopener noreferrer">
                "Buka Google Maps"
            </a>
        </div>
    }
}

#[component]
fn WishesSection() -> impl IntoView {
    let qr_open = RwSignal::new(false);
    let close_qr = Callback::new(move |()| qr_open.set(false));

    view! {
        <h2 class="section-title">"Ucapan & Doa"</h2>
        <WishBoard/>
        <div class="section-card gift">
            <h3 class="gift__title">"Tanda Kasih"</h3>
            <p class="gift__intro">{GIFT.intro}</p>
            <div class="gift__account">
                <p class="gift__label">{GIFT.bank_name}</p>
                <p class="gift__number">{GIFT.account_number}</p>
                <p class="gift__holder">{format!("a.n. {}", GIFT.account_holder)}</p>
            </div>
            <div class="gift__account">
                <p class="gift__label">"QRIS / E-Wallet"</p>
                <p class="gift__note">{GIFT.envelope_note}</p>
            </div>
            <div class="gift__actions">
                <button type="button" class="gift__button" on:click=move |_| qr_open.set(true)>
                    "Lihat QR Digital"
                </button>
                <a class="gift__link" href=GIFT.confirm_url target="_blank" rel="noopener noreferrer">
                    "Konfirmasi Transfer"
                </a>
            </div>
        </div>
        <Show when=move || qr_open.get()>
            <QrModal gift=GIFT on_close=close_qr/>
        </Show>
    }
}
