use crate::{icons::SpinIcon, DEFAULT_BUTTON_CLASSES, DISABLED_BUTTON_CLASSES};
use leptos::prelude::*;
use web_sys::MouseEvent;

/// A button that refuses clicks while `busy_reader` is set
#[component]
pub fn Button(
    #[prop(into)] busy_reader: Signal<bool>,
    on_click: impl Fn(MouseEvent) + 'static,
    #[prop(into)] label: Signal<String>,
    #[prop(default = "")] busy_label: &'static str,
    #[prop(default = DEFAULT_BUTTON_CLASSES)] class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("{class} {DISABLED_BUTTON_CLASSES}")
            disabled=move || busy_reader.get()
            on:click=move |ev| {
                if !busy_reader.get() {
                    on_click(ev);
                }
            }
        >
            <Show when=move || busy_reader.get()>
                <SpinIcon inner_class="inline animate-spin h-5 w-5 mr-2 text-white" />
            </Show>

            {move || if busy_reader.get() && !busy_label.is_empty() { busy_label.to_string() } else { label.get() }}
        </button>
    }
}

/// The submit button of a form, spinning while the submission is pending
#[component]
pub fn SubmitButton(
    #[prop(into)] busy_reader: Signal<bool>,
    #[prop(into)] label: Signal<String>,
    #[prop(default = DEFAULT_BUTTON_CLASSES)] class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!("{class} {DISABLED_BUTTON_CLASSES}")
            disabled=move || busy_reader.get()
        >
            <Show when=move || busy_reader.get()>
                <SpinIcon inner_class="inline animate-spin h-5 w-5 mr-2 text-white" />
            </Show>
            {move || label.get()}
        </button>
    }
}
