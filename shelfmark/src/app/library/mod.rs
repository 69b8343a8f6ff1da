//! The public catalog: home, library, genre and book pages

use leptos::prelude::*;
use leptos_router::hooks::use_params;
use shelfmark_components::{
    books::{BookDetail, FeaturedSections},
    search::BookSearch,
};
use shelfmark_shared::GENERIC_ERROR_MESSAGE;

use super::shared::{use_page_config, GenreParams, IsbnParams};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6 p-6">
            <h1 class="text-4xl font-bold">"Welcome to the library"</h1>
            <FeaturedSections page="home" />
        </div>
    }
}

#[component]
pub fn LibraryPage() -> impl IntoView {
    let page_config = use_page_config();

    view! {
        <div class="flex flex-col gap-6 p-6">
            <Transition fallback=move || view! { <p class="text-slate-500">"Loading..."</p> }>
                {move || page_config.get().map(|res| match res {
                    Ok(cfg) => view! {
                        <BookSearch default_filter=cfg.default_filter genres=cfg.genres />
                    }
                    .into_any(),
                    Err(e) => {
                        leptos::logging::error!("Unable to get page config: {e}");
                        view! { <p class="text-rose-600">{GENERIC_ERROR_MESSAGE}</p> }.into_any()
                    }
                })}
            </Transition>
            <FeaturedSections page="library" />
        </div>
    }
}

#[component]
pub fn GenrePage() -> impl IntoView {
    let params = use_params::<GenreParams>();
    let genre = Signal::derive(move || {
        params
            .read()
            .as_ref()
            .ok()
            .and_then(|p| p.name.clone())
            .unwrap_or_default()
    });

    view! {
        <div class="flex flex-col gap-6 p-6">
            <h1 class="text-4xl font-bold">{move || genre.get()}</h1>
            <FeaturedSections page="genre" genre=genre />
        </div>
    }
}

#[component]
pub fn BookPage() -> impl IntoView {
    let params = use_params::<IsbnParams>();
    let isbn = Signal::derive(move || {
        params
            .read()
            .as_ref()
            .ok()
            .and_then(|p| p.isbn.clone())
            .unwrap_or_default()
    });

    view! {
        <div class="p-6">
            <BookDetail isbn=isbn />
        </div>
    }
}
