//! The interactive parts of the catalog pages
//!
//! Everything that talks to the backend does so from the browser; on the server these
//! components only render their loading state.

pub mod auth;
pub mod books;
pub mod borrows;
pub mod buttons;
pub mod clock;
pub mod dropdown;
pub mod icons;
pub mod modal;
pub mod search;
pub mod services;

use leptos::prelude::*;
use shelfmark_shared::EMPTY_LIST_MESSAGE;

pub const DEFAULT_BUTTON_CLASSES: &str = "text-md m-2 rounded-2xl bg-slate-600 p-2 text-center font-bold text-slate-50 shadow-sm shadow-sky-600 hover:bg-slate-500";
pub const DANGER_BUTTON_CLASSES: &str = "text-md m-2 rounded-2xl bg-rose-700 p-2 text-center font-bold text-slate-50 shadow-sm shadow-rose-400 hover:bg-rose-600";
pub const DISABLED_BUTTON_CLASSES: &str = "disabled:cursor-not-allowed disabled:bg-slate-300 disabled:shadow-none";

#[component]
pub fn EmptyMessage() -> impl IntoView {
    view! { <p class="empty-message">{EMPTY_LIST_MESSAGE}</p> }
}

/// Render every item, or only the empty message if there is none
pub fn list_or_empty<T, V>(items: Vec<T>, render: impl FnMut(T) -> V) -> AnyView
where
    V: IntoView + 'static,
{
    if items.is_empty() {
        return view! { <EmptyMessage /> }.into_any();
    }
    items.into_iter().map(render).collect_view().into_any()
}

#[cfg(all(test, feature = "ssr"))]
mod test {
    use shelfmark_shared::BookSummary;

    use super::*;
    use crate::books::BookCards;

    fn hobbit() -> BookSummary {
        BookSummary {
            isbn: "9780261103344".to_string(),
            title: "The Hobbit".to_string(),
            cover: "book_covers/hobbit.png".to_string(),
        }
    }

    #[test]
    fn empty_list_renders_only_the_message() {
        let html = list_or_empty(Vec::<BookSummary>::new(), |book| {
            view! { <a href="/">{book.title}</a> }
        })
        .to_html();
        assert!(html.contains("Nothing to display here."), "{html}");
        assert!(!html.contains("<a"), "{html}");
    }

    #[test]
    fn items_replace_the_message() {
        let html = list_or_empty(vec![hobbit(), hobbit()], |book| {
            view! { <a href="/">{book.title}</a> }
        })
        .to_html();
        assert_eq!(html.matches("<a").count(), 2, "{html}");
        assert!(!html.contains(EMPTY_LIST_MESSAGE), "{html}");
    }

    #[test]
    fn empty_book_cards() {
        let html = view! { <BookCards books=vec![] /> }.to_html();
        assert!(html.contains("Nothing to display here."), "{html}");
        assert!(!html.contains("<a"), "{html}");

        let html = view! { <BookCards books=vec![hobbit()] /> }.to_html();
        assert!(html.contains("/library/book/9780261103344/"), "{html}");
        assert!(!html.contains(EMPTY_LIST_MESSAGE), "{html}");
    }
}
