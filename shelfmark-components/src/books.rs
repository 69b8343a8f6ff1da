//! Featured book sections and the detail page of a single book

use leptos::prelude::*;
use shelfmark_shared::{
    actions::ModalAction,
    filter::{build_query_string, SearchFilter},
    numbers::shorten_number,
    urls::{book_detail_url, featured_data_url, media_url, records_data_url, search_url, SEARCH_BOOKS_ENDPOINT},
    Book, BookSummary, BorrowRecord, FeaturedSection, SearchBooksResponse, GENERIC_ERROR_MESSAGE,
};

use crate::{
    borrows::{provide_timer_registry, RecordRow},
    modal::use_modal,
    services, EmptyMessage, DANGER_BUTTON_CLASSES, DEFAULT_BUTTON_CLASSES, DISABLED_BUTTON_CLASSES,
};

/// The featured sections of `page` (`home`, `library` or `genre`)
#[component]
pub fn FeaturedSections(
    page: &'static str,
    #[prop(optional, into)] genre: Option<Signal<String>>,
) -> impl IntoView {
    let sections = LocalResource::new(move || {
        let genre = genre.map(|g| g.get());
        async move {
            services::get_json::<Vec<FeaturedSection>>(&featured_data_url(page, genre.as_deref()))
                .await
        }
    });

    view! {
        <div class="flex flex-col gap-8">
            {move || match sections.get() {
                None => view! { <p class="text-slate-500">"Loading..."</p> }.into_any(),
                Some(Err(e)) => {
                    leptos::logging::error!("Could not load featured sections: {e}");
                    view! { <p class="text-rose-600">{GENERIC_ERROR_MESSAGE}</p> }.into_any()
                }
                Some(Ok(sections)) => sections
                    .into_iter()
                    .map(|section| view! { <Section section=section /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn Section(section: FeaturedSection) -> impl IntoView {
    view! {
        <section>
            <h2 class="mb-2 text-2xl font-bold">{section.title}</h2>
            <BookCards books=section.books />
        </section>
    }
}

/// A row of book cards; an empty list shows the empty message instead
#[component]
pub fn BookCards(books: Vec<BookSummary>) -> impl IntoView {
    if books.is_empty() {
        return view! { <EmptyMessage /> }.into_any();
    }
    view! {
        <div class="flex gap-4 overflow-x-auto pb-2">
            {books.into_iter().map(|book| view! { <BookCard book=book /> }).collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub fn BookCard(book: BookSummary) -> impl IntoView {
    view! {
        <a class="flex w-32 shrink-0 flex-col hover:underline" href=book_detail_url(&book.isbn)>
            <img class="h-48 w-32 rounded object-cover" src=media_url(&book.cover) alt=book.title.clone() />
            <span class="mt-1 text-sm font-semibold">{book.title}</span>
        </a>
    }
}

/// Everything the detail page needs about one book
#[derive(Debug, Clone)]
struct BookDetails {
    book: Option<Book>,
    is_staff: bool,
    /// the record of the current user for this book, if it is not returned yet
    active_record: Option<BorrowRecord>,
}

async fn load_details(isbn: String) -> Result<BookDetails, services::FetchError> {
    let params = build_query_string(&isbn, &SearchFilter::new());
    let found = services::get_json::<SearchBooksResponse>(&search_url(SEARCH_BOOKS_ENDPOINT, &params)).await?;
    // anonymous users have no records; the backend answers with an error for them
    let records = services::get_json::<Vec<BorrowRecord>>(&records_data_url(None))
        .await
        .unwrap_or_default();
    Ok(BookDetails {
        book: found.books.into_iter().find(|b| b.isbn == isbn),
        is_staff: found.is_staff,
        active_record: records
            .into_iter()
            .find(|r| r.book_isbn == isbn && r.is_active()),
    })
}

#[component]
pub fn BookDetail(#[prop(into)] isbn: Signal<String>) -> impl IntoView {
    let details = LocalResource::new(move || load_details(isbn.get()));
    provide_timer_registry();

    view! {
        {move || match details.get() {
            None => view! { <p class="text-slate-500">"Loading..."</p> }.into_any(),
            Some(Err(e)) => {
                leptos::logging::error!("Could not load book: {e}");
                view! { <p class="text-rose-600">{GENERIC_ERROR_MESSAGE}</p> }.into_any()
            }
            Some(Ok(BookDetails { book: None, .. })) => {
                view! { <EmptyMessage /> }.into_any()
            }
            Some(Ok(BookDetails { book: Some(book), is_staff, active_record })) => view! {
                <BookInfo book=book is_staff=is_staff active_record=active_record />
            }
            .into_any(),
        }}
    }
}

#[component]
fn BookInfo(book: Book, is_staff: bool, active_record: Option<BorrowRecord>) -> impl IntoView {
    let modal = use_modal();
    let available = book.is_available();
    let for_borrow = book.clone();
    let for_delete = book.clone();

    view! {
        <article class="flex flex-col gap-6 md:flex-row">
            <img class="h-96 w-64 rounded object-cover shadow" src=media_url(&book.cover) alt=book.title.clone() />
            <div class="flex flex-col gap-2">
                <h1 class="text-3xl font-bold">{book.title.clone()}</h1>
                <span class="text-xl text-slate-600">{book.author.clone()}</span>
                <span class="text-sm text-slate-400">"ISBN " {book.isbn.clone()}</span>
                {book.date_published.clone().map(|d| view! { <span>"Published " {d}</span> })}
                {book.borrow_count.map(|c| view! { <span>"Borrowed " {shorten_number(c)} " times"</span> })}
                {book.available_quantity.zip(book.total_quantity).map(|(a, t)| view! {
                    <span>{a} " of " {t} " copies available"</span>
                })}
                {book.description.clone().map(|d| view! { <p class="mt-4 max-w-prose">{d}</p> })}
                <div class="flex">
                    {match active_record {
                        Some(record) => view! { <RecordRow record=record /> }.into_any(),
                        None => view! {
                            <button
                                type="button"
                                class=format!("{DEFAULT_BUTTON_CLASSES} {DISABLED_BUTTON_CLASSES}")
                                disabled=!available
                                on:click=move |_| modal.open(ModalAction::Borrow(for_borrow.clone()))
                            >
                                {if available { "Borrow" } else { "Unavailable" }}
                            </button>
                        }
                        .into_any(),
                    }}
                    {is_staff.then(|| view! {
                        <button
                            type="button"
                            class=DANGER_BUTTON_CLASSES
                            on:click=move |_| modal.open(ModalAction::Delete(for_delete.clone()))
                        >
                            "Delete"
                        </button>
                    })}
                </div>
            </div>
        </article>
    }
}
