//! The one confirmation modal every page shares
//!
//! Components open it with a [`ModalAction`]; confirming posts the action and acts on the
//! answer. The modal stays open on errors and shows the message inside of it.

use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};
use shelfmark_shared::{
    actions::ModalAction,
    response::{ActionOutcome, ModalEffect},
    urls::media_url,
};

use crate::{
    buttons::{Button, SubmitButton},
    clock::{local_offset, now},
    icons::CloseIcon,
    services, DEFAULT_BUTTON_CLASSES,
};

#[derive(Debug, Clone, Copy)]
pub struct ModalController {
    action: RwSignal<Option<ModalAction>>,
    message: RwSignal<Option<String>>,
    pending: RwSignal<bool>,
}
impl ModalController {
    fn new() -> Self {
        Self {
            action: RwSignal::new(None),
            message: RwSignal::new(None),
            pending: RwSignal::new(false),
        }
    }

    pub fn open(&self, action: ModalAction) {
        self.message.set(None);
        self.action.set(Some(action));
    }

    pub fn close(&self) {
        self.action.set(None);
        self.message.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.action.with(Option::is_some)
    }

    /// Act on the answer to a confirmed action
    fn apply(&self, outcome: ActionOutcome) {
        match ModalEffect::from(outcome) {
            ModalEffect::Navigate(url) => services::navigate(&url),
            ModalEffect::Reload => services::reload(),
            ModalEffect::Show { message, log } => {
                if let Some(detail) = log {
                    leptos::logging::error!("{detail}");
                }
                self.message.set(Some(message));
            }
        }
    }
}

/// Provide the modal controller for the page; render [`ActionModal`] once below it
pub fn provide_modal() -> ModalController {
    let ctrl = ModalController::new();
    provide_context(ctrl);
    ctrl
}

pub fn use_modal() -> ModalController {
    use_context::<ModalController>().unwrap_or_else(provide_modal)
}

#[component]
pub fn ActionModal() -> impl IntoView {
    let ctrl = use_modal();
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if ctrl.pending.get_untracked() {
            return;
        }
        let Some(action) = ctrl.action.get_untracked() else {
            return;
        };
        let form = form_ref
            .get_untracked()
            .and_then(|f| web_sys::FormData::new_with_form(&f).ok());
        ctrl.message.set(None);
        ctrl.pending.set(true);
        spawn_local(async move {
            let outcome = services::perform_action(&action, form).await;
            // re-enable on every path, including redirects that take a while to load
            ctrl.pending.set(false);
            ctrl.apply(outcome);
        });
    };

    view! {
        <Show when=move || ctrl.is_open()>
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-slate-900/50">
                <form
                    node_ref=form_ref
                    on:submit=on_submit
                    class="relative w-full max-w-lg rounded-xl bg-white p-6 shadow-xl"
                >
                    <button
                        type="button"
                        class="absolute right-3 top-3 text-slate-500 hover:text-slate-800"
                        on:click=move |_| ctrl.close()
                    >
                        <CloseIcon inner_class="h-6 w-6" />
                    </button>
                    <h2 class="mb-4 text-xl font-bold">
                        {move || ctrl.action.with(|a| a.as_ref().map(ModalAction::heading))}
                    </h2>
                    {move || ctrl.action.get().map(|action| view! { <ModalPreview action=action /> })}
                    <div class="modal-error text-rose-600" class:hidden=move || ctrl.message.with(Option::is_none)>
                        {move || ctrl.message.get()}
                    </div>
                    <div class="flex justify-end">
                        <Button
                            busy_reader=ctrl.pending
                            on_click=move |_| ctrl.close()
                            label="Cancel" />
                        <SubmitButton
                            busy_reader=ctrl.pending
                            class=DEFAULT_BUTTON_CLASSES
                            label=Signal::derive(move || {
                                ctrl.action
                                    .with(|a| a.as_ref().map(ModalAction::confirm_label).unwrap_or_default())
                                    .to_string()
                            }) />
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[component]
fn ModalPreview(action: ModalAction) -> impl IntoView {
    let dates = action.preview_dates(now(), local_offset());
    let danger = matches!(action, ModalAction::Delete(_));
    let book = action.book();

    view! {
        {book.map(|book| view! {
            <div class="mb-4 flex gap-4">
                <img class="h-32 w-24 object-cover" src=media_url(&book.cover) alt=book.title.clone() />
                <div>
                    <div class="font-bold">{book.title.clone()}</div>
                    <div class="text-slate-600">{book.author.clone()}</div>
                    <div class="text-sm text-slate-400">{book.isbn.clone()}</div>
                </div>
            </div>
        })}
        <dl class="mb-4">
            {dates
                .into_iter()
                .map(|(label, date)| view! {
                    <dt class="font-semibold">{label}</dt>
                    <dd class="mb-2">{date}</dd>
                })
                .collect_view()}
        </dl>
        <Show when=move || danger>
            <p class="font-semibold text-rose-700">"This cannot be undone."</p>
        </Show>
    }
}
