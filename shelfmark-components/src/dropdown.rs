//! Dropdowns of which at most one is open at a time
//!
//! A click on a trigger toggles its dropdown and closes every other one. A click anywhere
//! outside of a dropdown closes all of them.

use leptos::{ev, prelude::*, wasm_bindgen::JsCast};
use leptos_use::{use_document, use_event_listener};
use shelfmark_shared::dropdown::DropdownSet;
use web_sys::Element;

use crate::icons::ChevronDownIcon;

/// The attribute every dropdown root carries
const DROPDOWN_MARKER: &str = "data-dropdown";

#[derive(Debug, Clone, Copy)]
pub struct DropdownController(RwSignal<DropdownSet>);
impl DropdownController {
    pub fn toggle(&self, id: &str) {
        self.0.update(|set| set.toggle(id));
    }

    pub fn close_all(&self) {
        self.0.update(|set| set.close_all());
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.0.with(|set| set.is_open(id))
    }
}

/// Provide the controller for all dropdowns below the current owner
///
/// Also installs the document listener closing them.
pub fn provide_dropdowns() -> DropdownController {
    let ctrl = DropdownController(RwSignal::new(DropdownSet::new()));
    provide_context(ctrl);

    let _ = use_event_listener(use_document(), ev::click, move |ev| {
        if !inside_dropdown(&ev) {
            ctrl.close_all();
        }
    });

    ctrl
}

fn inside_dropdown(ev: &ev::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(&format!("[{DROPDOWN_MARKER}]")).ok().flatten())
        .is_some()
}

#[component]
pub fn Dropdown(
    /// must be unique on the page
    id: &'static str,
    #[prop(into)] label: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let ctrl = use_context::<DropdownController>()
        .unwrap_or_else(provide_dropdowns);
    let is_open = Signal::derive(move || ctrl.is_open(id));

    view! {
        <div class="relative inline-block" data-dropdown=id>
            <button
                type="button"
                class="inline-flex items-center gap-1 rounded-lg px-3 py-2 text-sm font-semibold hover:bg-slate-200"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctrl.toggle(id);
                }
            >
                {move || label.get()}
                <ChevronDownIcon inner_class="h-4 w-4" />
            </button>
            <div
                class="absolute z-10 mt-1 min-w-48 rounded-lg bg-white p-2 shadow-lg"
                class:shown=move || is_open.get()
                class:hidden=move || !is_open.get()
                on:click=|ev| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
