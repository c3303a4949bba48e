//! New Todo Form Component
//!
//! Header form for creating new entries.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_todo, use_app_store};

/// Form for creating new entries; Enter submits. Input is trimmed and
/// an empty result is a no-op that keeps the draft text.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (draft, set_draft) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = draft.get();
        if store_add_todo(&store, &input) {
            set_draft.set(String::new());
        }
    };

    view! {
        <form on:submit=create_todo>
            <input
                id="new-todo"
                type="text"
                placeholder="What needs to be done?"
                autofocus
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_draft.set(input.value());
                }
            />
        </form>
    }
}
