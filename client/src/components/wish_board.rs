//! Guest wish form and paged wish list.

use leptos::prelude::*;

use crate::content::SEED_WISHES;
use crate::state::wishes::{MAX_MESSAGE_CHARS, MAX_NAME_CHARS, WISHES_PER_PAGE, WishBook};

#[component]
pub fn WishBoard() -> impl IntoView {
    let book = RwSignal::new(WishBook::seeded(WISHES_PER_PAGE, SEED_WISHES));
    let name = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);
    let failed = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = book.try_update(|b| {
            b.submit(&name.get_untracked(), &message.get_untracked())
                .map(|wish| wish.name.clone())
        });
        match result {
            Some(Ok(author)) => {
                #[cfg(feature = "hydrate")]
                log::debug!("wish added by {author}");
                name.set(String::new());
                message.set(String::new());
                failed.set(false);
                info.set(Some(format!("Terima kasih, {author}! Ucapan Anda sudah kami terima.")));
            }
            Some(Err(err)) => {
                failed.set(true);
                info.set(Some(err.to_string()));
            }
            None => {}
        }
    };

    let page_label = move || book.with(|b| format!("{} / {}", b.page(), b.total_pages()));

    view! {
        <div class="wish-board">
            <form class="wish-form" on:submit=on_submit>
                <input
                    class="wish-form__input"
                    type="text"
                    placeholder="Nama"
                    maxlength=MAX_NAME_CHARS.to_string()
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    class="wish-form__input wish-form__input--message"
                    rows="3"
                    placeholder="Tulis doa dan ucapan terbaik Anda"
                    maxlength=MAX_MESSAGE_CHARS.to_string()
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <button class="wish-form__submit" type="submit">"Kirim Ucapan"</button>
                <Show when=move || info.get().is_some()>
                    <p class="wish-form__message" class:wish-form__message--error=move || failed.get()>
                        {move || info.get().unwrap_or_default()}
                    </p>
                </Show>
            </form>

            <div class="wish-list">
                {move || {
                    book.with(|b| {
                        b.page_items()
                            .iter()
                            .map(|wish| {
                                let author = wish.name.clone();
                                let text = wish.message.clone();
                                view! {
                                    <article class="wish-card">
                                        <p class="wish-card__name">{author}</p>
                                        <p class="wish-card__message">{text}</p>
                                    </article>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>

            <div class="wish-pagination">
                <button
                    type="button"
                    class="wish-pagination__button"
                    aria-label="Halaman sebelumnya"
                    disabled=move || !book.with(WishBook::has_prev)
                    on:click=move |_| book.update(WishBook::prev_page)
                >
                    "‹"
                </button>
                <span class="wish-pagination__label">{page_label}</span>
                <button
                    type="button"
                    class="wish-pagination__button"
                    aria-label="Halaman selanjutnya"
                    disabled=move || !book.with(WishBook::has_next)
                    on:click=move |_| book.update(WishBook::next_page)
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
