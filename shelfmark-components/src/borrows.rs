//! The borrow list of the current user, with live countdowns
//!
//! Every active record runs two one second timers: one until the book may be returned, one
//! until it is due. Their handles live in a [`TimerRegistry`] owned by the list, so a row
//! cancels its timers when it is removed and the list cancels everything when it goes away.
//! A timer also cancels itself once its state is terminal.

use std::time::Duration;

use leptos::prelude::*;
use shelfmark_shared::{
    actions::ModalAction,
    countdown::{DueStatus, ReturnCooldown},
    dates::format_date,
    timers::{TimerKind, TimerRegistry},
    urls::{book_detail_url, media_url, record_element_id, records_data_url},
    BorrowRecord, GENERIC_ERROR_MESSAGE,
};

use crate::{
    clock::{local_offset, now, Interval},
    modal::use_modal,
    services, EmptyMessage, DEFAULT_BUTTON_CLASSES, DISABLED_BUTTON_CLASSES,
};

const TICK: Duration = Duration::from_secs(1);

type Registry = StoredValue<TimerRegistry<Interval>>;

/// Provide the registry for the timers of all [`RecordRow`]s below the current owner
///
/// Every timer still running is cancelled when the owner is cleaned up.
pub fn provide_timer_registry() {
    let registry: Registry = StoredValue::new(TimerRegistry::new());
    provide_context(registry);
    on_cleanup(move || {
        registry.try_update_value(|r| r.cancel_all());
    });
}

/// All borrow records of the current user (or of `user_id`, for staff)
#[component]
pub fn BorrowList(#[prop(optional)] user_id: Option<i64>) -> impl IntoView {
    let records = LocalResource::new(move || async move {
        services::get_json::<Vec<BorrowRecord>>(&records_data_url(user_id)).await
    });

    provide_timer_registry();

    view! {
        <div class="flex flex-col gap-4">
            {move || match records.get() {
                None => view! { <p class="text-slate-500">"Loading..."</p> }.into_any(),
                Some(Err(e)) => {
                    leptos::logging::error!("Could not load borrow records: {e}");
                    view! { <p class="text-rose-600">{GENERIC_ERROR_MESSAGE}</p> }.into_any()
                }
                Some(Ok(records)) if records.is_empty() => {
                    view! { <EmptyMessage /> }.into_any()
                }
                Some(Ok(records)) => view! {
                    <For
                        each=move || records.clone()
                        key=|record| record.id
                        children=move |record| view! { <RecordRow record=record /> }
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

/// One record; returned records only show their dates
#[component]
pub fn RecordRow(record: BorrowRecord) -> impl IntoView {
    let offset = local_offset();
    let record_id = record.id;
    let book = record.book();

    view! {
        <div id=record_element_id(record_id) class="flex gap-4 rounded-lg bg-white p-4 shadow">
            <a href=book_detail_url(&book.isbn)>
                <img class="h-32 w-24 object-cover" src=media_url(&book.cover) alt=book.title.clone() />
            </a>
            <div class="flex grow flex-col">
                <a class="font-bold hover:underline" href=book_detail_url(&book.isbn)>{book.title.clone()}</a>
                <span class="text-slate-600">{book.author.clone()}</span>
                <span class="text-sm">"Borrowed: " {format_date(record.borrow_date, offset)}</span>
                {match record.return_date {
                    Some(returned) => view! {
                        <span class="text-sm">"Returned: " {format_date(returned, offset)}</span>
                    }
                    .into_any(),
                    None => view! {
                        <span class="text-sm">"Due: " {format_date(record.due_date, offset)}</span>
                        <ActiveRecordStatus record=record.clone() />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

/// The countdowns and the return button of a record not returned yet
#[component]
fn ActiveRecordStatus(record: BorrowRecord) -> impl IntoView {
    let record_id = record.id;
    let borrow_date = record.borrow_date;
    let due_date = record.due_date;

    let cooldown = RwSignal::new(ReturnCooldown::compute(borrow_date, now()));
    let due = RwSignal::new(DueStatus::compute(due_date, now()));

    let registry = use_context::<Registry>();
    if let Some(registry) = registry {
        // effects only run in the browser; there are no timers on the server
        Effect::new(move |_| {
            start_timer(registry, record_id, TimerKind::ReturnCooldown, move || {
                let state = ReturnCooldown::compute(borrow_date, now());
                cooldown.set(state);
                state.is_terminal()
            });
            start_timer(registry, record_id, TimerKind::DueStatus, move || {
                let state = DueStatus::compute(due_date, now());
                due.set(state);
                state.is_terminal()
            });
        });
        on_cleanup(move || {
            registry.try_update_value(|r| r.cancel_record(record_id));
        });
    } else {
        leptos::logging::warn!("Record {record_id} rendered outside of a borrow list; countdowns are static");
    }

    let modal = use_modal();
    let return_available = Signal::derive(move || cooldown.with(ReturnCooldown::is_available));

    view! {
        <span
            class="due-status text-sm font-semibold"
            class:critical=move || due.with(|d| d.urgency().is_critical())
            class:warning=move || due.with(|d| d.urgency().is_warning())
        >
            {move || due.with(DueStatus::label)}
        </span>
        <span title=move || cooldown.with(ReturnCooldown::tooltip) class="self-end">
            <button
                type="button"
                class=format!("{DEFAULT_BUTTON_CLASSES} {DISABLED_BUTTON_CLASSES}")
                disabled=move || !return_available.get()
                on:click=move |_| {
                    if return_available.get_untracked() {
                        modal.open(ModalAction::Return(record.clone()));
                    }
                }
            >
                "Return"
            </button>
        </span>
    }
}

/// Run `tick` now and then every second until it reports a terminal state
///
/// `tick` returns whether its state is terminal. Nothing is registered if it already is.
fn start_timer<F>(registry: Registry, record_id: i64, kind: TimerKind, tick: F)
where
    F: Fn() -> bool + Copy + 'static,
{
    if tick() {
        registry.try_update_value(|r| r.cancel(record_id, kind));
        return;
    }
    let handle = set_interval_with_handle(
        move || {
            if tick() {
                registry.try_update_value(|r| r.cancel(record_id, kind));
            }
        },
        TICK,
    );
    match handle {
        Ok(handle) => {
            registry.try_update_value(|r| r.register(record_id, kind, Interval(handle)));
        }
        Err(e) => leptos::logging::error!("Could not start timer for record {record_id}: {e:?}"),
    }
}
