//! The borrow records of the signed in user

use leptos::prelude::*;
use shelfmark_components::{borrows::BorrowList, search::RecordSearch};

#[component]
pub fn YourBorrowsPage() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6 p-6">
            <h1 class="text-4xl font-bold">"Your borrows"</h1>
            <RecordSearch />
            <BorrowList />
        </div>
    }
}
