//! Login and registration forms
//!
//! Both post to the backend and show its validation errors next to the fields. Errors not
//! tied to a field (`__all__`) are shown above the submit button.

use std::collections::BTreeMap;

use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};
use shelfmark_shared::{
    response::AuthOutcome,
    urls::{LOGIN_ENDPOINT, REGISTER_ENDPOINT},
    GENERIC_ERROR_MESSAGE,
};

use crate::{buttons::SubmitButton, services};

/// The key the backend files errors under that belong to no single field
const NON_FIELD_ERRORS: &str = "__all__";

struct Field {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
}

const LOGIN_FIELDS: &[Field] = &[
    Field { name: "username", label: "Username", input_type: "text", autocomplete: "username" },
    Field { name: "password", label: "Password", input_type: "password", autocomplete: "current-password" },
];

const REGISTER_FIELDS: &[Field] = &[
    Field { name: "first_name", label: "First name", input_type: "text", autocomplete: "given-name" },
    Field { name: "last_name", label: "Last name", input_type: "text", autocomplete: "family-name" },
    Field { name: "username", label: "Username", input_type: "text", autocomplete: "username" },
    Field { name: "email", label: "Email", input_type: "email", autocomplete: "email" },
    Field { name: "password1", label: "Password", input_type: "password", autocomplete: "new-password" },
    Field { name: "password2", label: "Confirm password", input_type: "password", autocomplete: "new-password" },
];

#[component]
pub fn LoginForm() -> impl IntoView {
    view! { <AuthForm endpoint=LOGIN_ENDPOINT fields=LOGIN_FIELDS submit_label="Log in" /> }
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    view! { <AuthForm endpoint=REGISTER_ENDPOINT fields=REGISTER_FIELDS submit_label="Register" /> }
}

#[component]
fn AuthForm(
    endpoint: &'static str,
    fields: &'static [Field],
    submit_label: &'static str,
) -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let general_error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let form = form_ref
            .get_untracked()
            .and_then(|f| web_sys::FormData::new_with_form(&f).ok());
        // `next` is passed on to the backend, which answers with where to go
        let query_string = services::current_query_string();
        let url = if query_string.is_empty() {
            endpoint.to_string()
        } else {
            format!("{endpoint}?{query_string}")
        };
        pending.set(true);
        spawn_local(async move {
            let outcome = services::submit_auth(&url, form).await;
            pending.set(false);
            match outcome {
                AuthOutcome::Redirect(to) => services::navigate(&to),
                AuthOutcome::FieldErrors(mut field_errors) => {
                    general_error.set(field_errors.remove(NON_FIELD_ERRORS));
                    errors.set(field_errors);
                }
                AuthOutcome::HardError(detail) => {
                    leptos::logging::error!("{detail}");
                    errors.set(BTreeMap::new());
                    general_error.set(Some(GENERIC_ERROR_MESSAGE.to_string()));
                }
            }
        });
    };

    view! {
        <form node_ref=form_ref on:submit=on_submit class="mx-auto flex w-full max-w-md flex-col gap-3 rounded-xl bg-white p-6 shadow">
            {fields
                .iter()
                .enumerate()
                .map(|(idx, field)| {
                    let name = field.name;
                    let error = move || errors.with(|e| e.get(name).cloned());
                    view! {
                        <label class="flex flex-col gap-1">
                            <span class="font-semibold">{field.label}</span>
                            <input
                                class="form-input rounded-lg border border-slate-300 px-3 py-2"
                                class:invalid=move || error().is_some()
                                type=field.input_type
                                name=name
                                autocomplete=field.autocomplete
                                autofocus={idx == 0}
                                required=true
                            />
                            <span class="text-sm text-rose-600">{error}</span>
                        </label>
                    }
                })
                .collect_view()}
            <p class="text-rose-600">{move || general_error.get()}</p>
            <SubmitButton busy_reader=pending label=submit_label />
        </form>
    }
}
