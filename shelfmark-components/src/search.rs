//! The live search bars of the library and the borrow list
//!
//! Each page constructs one [`SearchController`]. It owns the [`SearchState`], runs a query
//! for every change and keeps the URL in sync with what is searched.

use leptos::{ev, html, prelude::*, task::spawn_local};
use leptos_use::{on_click_outside, use_event_listener, use_window};
use serde::de::DeserializeOwned;
use shelfmark_shared::{
    actions::ModalAction,
    filter::{FilterValue, SearchFilter, GENRES_KEY, SORT_KEY},
    search::{HistoryAction, QueryPlan, QueryTrigger, SearchState},
    urls::{
        book_detail_url, media_url, search_url, LIBRARY_PAGE, SEARCH_BOOKS_ENDPOINT,
        SEARCH_RECORDS_ENDPOINT, YOUR_BORROWS_PAGE,
    },
    Book, RecordSummary, SearchBooksResponse, GENERIC_ERROR_MESSAGE,
};

use crate::{
    dropdown::Dropdown,
    icons::SearchIcon,
    modal::use_modal,
    list_or_empty, services, DANGER_BUTTON_CLASSES, DEFAULT_BUTTON_CLASSES,
    DISABLED_BUTTON_CLASSES,
};

pub const BOOK_SORT_OPTIONS: [(&str, &str); 3] = [
    ("popularity", "Most popular"),
    ("latest", "Newest"),
    ("oldest", "Oldest"),
];
pub const RECORD_SORT_OPTIONS: [(&str, &str); 2] = [("latest", "Latest"), ("oldest", "Oldest")];

pub struct SearchController<T: 'static> {
    state: RwSignal<SearchState>,
    results: RwSignal<Option<T>>,
    failed: RwSignal<bool>,
    /// Incremented for every query; answers to older queries are dropped
    generation: StoredValue<u64>,
    endpoint: &'static str,
}
impl<T: 'static> Clone for SearchController<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: 'static> Copy for SearchController<T> {}

impl<T> SearchController<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Construct the controller and hook it up to the browser
    ///
    /// `path` is the page the history entries are pushed for.
    pub fn new(path: &str, endpoint: &'static str, default_filter: SearchFilter) -> Self {
        let ctrl = Self {
            state: RwSignal::new(SearchState::new(path, default_filter)),
            results: RwSignal::new(None),
            failed: RwSignal::new(false),
            generation: StoredValue::new(0),
            endpoint,
        };

        // seed from the location the page was loaded with; effects never run on the server
        Effect::new(move |_| {
            let query_string = services::current_query_string();
            ctrl.state.update(|s| s.seed_from_query_string(&query_string));
            if !ctrl.state.with_untracked(SearchState::is_collapsed) {
                ctrl.run(QueryTrigger::Initial);
            }
        });

        let _ = use_event_listener(use_window(), ev::popstate, move |_| {
            let query_string = services::current_query_string();
            ctrl.state.update(|s| s.apply_popstate(&query_string));
            ctrl.run(QueryTrigger::UserChange);
        });

        ctrl
    }

    fn run(&self, trigger: QueryTrigger) {
        if let Some(plan) = self.state.try_update(|s| s.plan_query(trigger)) {
            self.run_plan(plan);
        }
    }

    fn run_plan(&self, plan: QueryPlan) {
        if let HistoryAction::Push(url) = &plan.history {
            services::push_history(url);
        }
        let Some(generation) = self.generation.try_update_value(|g| {
            *g += 1;
            *g
        }) else {
            return;
        };
        let ctrl = *self;
        spawn_local(async move {
            let res = services::get_json::<T>(&search_url(ctrl.endpoint, &plan.params)).await;
            if ctrl.generation.try_get_value() != Some(generation) {
                return;
            }
            match res {
                Ok(results) => {
                    ctrl.failed.set(false);
                    ctrl.results.set(Some(results));
                }
                // the previous results stay
                Err(e) => {
                    leptos::logging::error!("Search for {} failed: {e}", plan.params);
                    ctrl.failed.set(true);
                }
            }
        });
    }

    pub fn set_text(&self, text: &str) {
        self.state.update(|s| s.set_text(text));
        self.run(QueryTrigger::UserChange);
    }

    pub fn toggle_filter(&self, key: &str, value: &str) {
        self.state.update(|s| s.toggle_filter(key, value));
        self.run(QueryTrigger::UserChange);
    }

    pub fn set_filter(&self, key: &str, value: &str) {
        self.state.update(|s| s.set_filter(key, value));
        self.run(QueryTrigger::UserChange);
    }

    pub fn clear_filters(&self) {
        self.state.update(SearchState::clear_filters);
        self.run(QueryTrigger::UserChange);
    }

    /// Collapse and forget the results; [`Self::restore`] runs the query again
    pub fn dismiss(&self) {
        if self.state.with_untracked(SearchState::is_collapsed) {
            return;
        }
        self.state.update(SearchState::dismiss);
        self.results.set(None);
        self.failed.set(false);
    }

    pub fn restore(&self) {
        if let Some(plan) = self.state.try_update(SearchState::restore).flatten() {
            self.run_plan(plan);
        }
    }

    pub fn text(&self) -> String {
        self.state.with(|s| s.text().to_string())
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.with(SearchState::is_collapsed)
    }

    pub fn show_clear_filters(&self) -> bool {
        self.state.with(SearchState::show_clear_filters)
    }

    pub fn filter_contains(&self, key: &str, value: &str) -> bool {
        self.state
            .with(|s| s.filter().get(key).is_some_and(|v| v.contains(value)))
    }

    /// What the dropdown of a single-valued filter shows
    pub fn single_filter_value(&self, key: &str) -> Option<String> {
        self.state.with(|s| match s.filter().get(key) {
            Some(FilterValue::Single(v)) => Some(v.clone()),
            _ => None,
        })
    }

    pub fn results(&self) -> Option<T> {
        self.results.get()
    }

    pub fn failed(&self) -> bool {
        self.failed.get()
    }
}

/// The search input with everything around it that both searches share
#[component]
fn SearchBar<T>(
    ctrl: SearchController<T>,
    placeholder: &'static str,
    /// The filter dropdowns
    #[prop(into)]
    filters: ViewFn,
    /// The results; hidden while the search is collapsed
    #[prop(into)]
    results: ViewFn,
) -> impl IntoView
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let container = NodeRef::<html::Div>::new();
    let _ = on_click_outside(container, move |_| ctrl.dismiss());

    view! {
        <div node_ref=container class="relative w-full">
            <div class="flex flex-wrap items-center gap-2">
                <label class="flex grow items-center gap-2 rounded-xl bg-white px-3 py-2 shadow">
                    <SearchIcon inner_class="h-5 w-5 text-slate-400" />
                    <input
                        type="search"
                        class="grow outline-none"
                        placeholder=placeholder
                        prop:value=move || ctrl.text()
                        on:input=move |ev| ctrl.set_text(&event_target_value(&ev))
                        on:focus=move |_| ctrl.restore()
                    />
                </label>
                {filters.run()}
                <Show when=move || ctrl.show_clear_filters()>
                    <button
                        type="button"
                        class="text-sm text-slate-600 underline"
                        on:click=move |_| ctrl.clear_filters()
                    >
                        "Clear filters"
                    </button>
                </Show>
            </div>
            <div class="search-results mt-2" class:hidden=move || ctrl.is_collapsed()>
                <Show when=move || ctrl.failed()>
                    <p class="text-rose-600">{GENERIC_ERROR_MESSAGE}</p>
                </Show>
                {results.run()}
            </div>
        </div>
    }
}

/// A dropdown choosing exactly one of `options` for the filter `key`
#[component]
fn SingleFilterDropdown<T>(
    ctrl: SearchController<T>,
    id: &'static str,
    key: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let label = Signal::derive(move || {
        let current = ctrl.single_filter_value(key);
        options
            .iter()
            .find(|(value, _)| current.as_deref() == Some(*value))
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| "Sort".to_string())
    });

    view! {
        <Dropdown id=id label=label>
            {options
                .iter()
                .map(|(value, option_label)| view! {
                    <label class="flex cursor-pointer items-center gap-2 p-1">
                        <input
                            type="radio"
                            name=id
                            prop:checked=move || ctrl.filter_contains(key, value)
                            on:change=move |_| ctrl.set_filter(key, value)
                        />
                        {*option_label}
                    </label>
                })
                .collect_view()}
        </Dropdown>
    }
}

/// A dropdown toggling any number of `options` in the filter `key`
#[component]
fn MultiFilterDropdown<T>(
    ctrl: SearchController<T>,
    id: &'static str,
    key: &'static str,
    label: &'static str,
    options: Vec<String>,
) -> impl IntoView
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    view! {
        <Dropdown id=id label=label>
            {options
                .clone()
                .into_iter()
                .map(|option| {
                    let for_checked = option.clone();
                    let for_change = option.clone();
                    view! {
                        <label class="flex cursor-pointer items-center gap-2 p-1">
                            <input
                                type="checkbox"
                                prop:checked=move || ctrl.filter_contains(key, &for_checked)
                                on:change=move |_| ctrl.toggle_filter(key, &for_change)
                            />
                            {option}
                        </label>
                    }
                })
                .collect_view()}
        </Dropdown>
    }
}

/// The book search of the library
///
/// Staff additionally get a delete button on every result.
#[component]
pub fn BookSearch(default_filter: SearchFilter, genres: Vec<String>) -> impl IntoView {
    let ctrl = SearchController::<SearchBooksResponse>::new(LIBRARY_PAGE, SEARCH_BOOKS_ENDPOINT, default_filter);

    view! {
        <SearchBar
            ctrl=ctrl
            placeholder="Search by title, author or ISBN"
            filters=move || view! {
                <SingleFilterDropdown ctrl=ctrl id="book-sort" key=SORT_KEY options=&BOOK_SORT_OPTIONS />
                <MultiFilterDropdown ctrl=ctrl id="book-genres" key=GENRES_KEY label="Genres" options=genres.clone() />
            }
            results=move || view! {
                {move || ctrl.results().map(|found| {
                    let is_staff = found.is_staff;
                    list_or_empty(found.books, move |book| {
                        view! { <BookResult book=book is_staff=is_staff /> }
                    })
                })}
            }
        />
    }
}

#[component]
fn BookResult(book: Book, is_staff: bool) -> impl IntoView {
    let modal = use_modal();
    let available = book.is_available();
    let for_borrow = book.clone();
    let for_delete = book.clone();

    view! {
        <div class="flex items-center gap-4 border-b border-slate-200 py-2">
            <img class="h-16 w-12 object-cover" src=media_url(&book.cover) alt=book.title.clone() />
            <a class="grow hover:underline" href=book_detail_url(&book.isbn)>
                <div class="font-semibold">{book.title.clone()}</div>
                <div class="text-sm text-slate-600">{book.author.clone()}</div>
            </a>
            <button
                type="button"
                class=format!("{DEFAULT_BUTTON_CLASSES} {DISABLED_BUTTON_CLASSES}")
                disabled=!available
                on:click=move |_| modal.open(ModalAction::Borrow(for_borrow.clone()))
            >
                "Borrow"
            </button>
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
    }
}

/// The search over the borrow records of the current user
///
/// Choosing a result scrolls its row in the borrow list into view.
#[component]
pub fn RecordSearch() -> impl IntoView {
    let default_filter = SearchFilter::new().with_single(SORT_KEY, RECORD_SORT_OPTIONS[0].0);
    let ctrl = SearchController::<Vec<RecordSummary>>::new(YOUR_BORROWS_PAGE, SEARCH_RECORDS_ENDPOINT, default_filter);

    view! {
        <SearchBar
            ctrl=ctrl
            placeholder="Search by record id, title, author or ISBN"
            filters=move || view! {
                <SingleFilterDropdown ctrl=ctrl id="record-sort" key=SORT_KEY options=&RECORD_SORT_OPTIONS />
            }
            results=move || view! {
                {move || ctrl.results().map(|records| {
                    list_or_empty(records, move |record| {
                        let record_id = record.id;
                        view! {
                            <button
                                type="button"
                                class="flex w-full items-center gap-4 border-b border-slate-200 py-2 text-left hover:bg-slate-100"
                                on:click=move |_| {
                                    ctrl.dismiss();
                                    services::scroll_to_record(record_id);
                                }
                            >
                                <img class="h-16 w-12 object-cover" src=media_url(&record.book_cover) alt=record.book_title.clone() />
                                <span class="text-sm text-slate-400">"#" {record_id}</span>
                                <span class="font-semibold">{record.book_title.clone()}</span>
                                <span class="text-sm text-slate-600">{record.book_author.clone()}</span>
                            </button>
                        }
                    })
                })}
            }
        />
    }
}
