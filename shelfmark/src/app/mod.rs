use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path, StaticSegment,
};
use shelfmark_components::{
    dropdown::{provide_dropdowns, Dropdown},
    modal::{provide_modal, ActionModal, ModalController},
};
use shelfmark_shared::{
    actions::ModalAction,
    urls::{genre_url, LIBRARY_PAGE, LOGIN_PAGE, REGISTER_PAGE, YOUR_BORROWS_PAGE},
};

use auth::{LoginPage, RegisterPage};
use borrows::YourBorrowsPage;
use library::{BookPage, GenrePage, HomePage, LibraryPage};
use shared::{get_page_config, PageConfigResource};

mod auth;
mod borrows;
mod library;
pub mod shared;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

const NAVBAR_BUTTON_CLASSES: &str = "p-2 pl-4 pr-4 hover:bg-slate-500 bg-slate-600 rounded-2xl text-xl font-bold m-2 text-center shadow-md";

#[component]
fn NavBarButton(to: &'static str, children: Children) -> impl IntoView {
    let location = use_location();
    // `/` would be active everywhere
    let is_active = move || {
        let current = location.pathname.get();
        if to == "/" {
            current == "/"
        } else {
            current.starts_with(to)
        }
    };

    view! {
        <a
            class=NAVBAR_BUTTON_CLASSES
            class=(["text-sky-300", "shadow-slate-300"], is_active)
            class=(["text-slate-50", "shadow-sky-600"], move || !is_active())
            href=to
        >
            {children()}
        </a>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let page_config = use_context::<PageConfigResource>().expect("App provides the page config");
    let modal = use_context::<ModalController>().expect("App provides the modal");

    view! {
        <nav class="flex flex-row flex-wrap items-center justify-around border-b-4 border-slate-600 bg-black">
            <a href="/">
                <span class="p-2 text-2xl font-bold text-slate-50">"shelfmark"</span>
            </a>
            <NavBarButton to="/">Home</NavBarButton>
            <NavBarButton to=LIBRARY_PAGE>Library</NavBarButton>
            <Transition fallback=|| ()>
                {move || page_config.get().and_then(Result::ok).map(|cfg| view! {
                    <Dropdown id="nav-genres" label="Genres">
                        {cfg.genres
                            .iter()
                            .map(|g| view! {
                                <a class="block rounded p-1 text-slate-900 hover:bg-slate-200" href=genre_url(g)>{g.clone()}</a>
                            })
                            .collect_view()}
                    </Dropdown>
                })}
            </Transition>
            <NavBarButton to=YOUR_BORROWS_PAGE>Your borrows</NavBarButton>
            <Dropdown id="nav-account" label="Account">
                <a class="block rounded p-1 text-slate-900 hover:bg-slate-200" href=LOGIN_PAGE>"Log in"</a>
                <a class="block rounded p-1 text-slate-900 hover:bg-slate-200" href=REGISTER_PAGE>"Register"</a>
                <button
                    type="button"
                    class="block w-full rounded p-1 text-left text-slate-900 hover:bg-slate-200"
                    on:click=move |_| modal.open(ModalAction::Logout)
                >
                    "Log out"
                </button>
            </Dropdown>
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let page_config: PageConfigResource = Resource::new(|| (), |_| get_page_config());
    provide_context(page_config);
    provide_dropdowns();
    provide_modal();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/shelfmark.css" />

        // sets the document title
        <Title text="shelfmark - library catalog" />

        <div class="min-h-screen w-full flex flex-col bg-slate-100 text-slate-900">
            <Router>
                <NavBar />
                <main class="grow w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage />
                        <Route path=path!("library/") view=LibraryPage />
                        <Route path=path!("library/genre/:name/") view=GenrePage />
                        <Route path=path!("library/book/:isbn/") view=BookPage />
                        <Route path=path!("your-borrows/") view=YourBorrowsPage />
                        <Route path=path!("login/") view=LoginPage />
                        <Route path=path!("register/") view=RegisterPage />
                    </Routes>
                </main>
                <ActionModal />
            </Router>
        </div>
    }
}
