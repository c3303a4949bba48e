//! Todo Item Component
//!
//! One list row per entry: toggle, label with edit-in-place, destroy.
//! The row re-renders fully whenever the entry changes (the parent
//! `<For>` keys on every mutable field).

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::Todo;
use crate::store::{store_apply_edit, store_remove_todo, store_toggle_todo, use_app_store};

/// A single row in the todo list
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let label_title = todo.title.clone();
    let edit_seed = todo.title.clone();

    let (edit_text, set_edit_text) = signal(String::new());
    let edit_input: NodeRef<html::Input> = NodeRef::new();

    let is_editing = move || ctx.editing.get() == Some(id);
    let is_hidden = move || ctx.filter.get().is_hidden(completed);

    let row_class = move || {
        let mut c = String::from("todo");
        if completed {
            c.push_str(" completed");
        }
        if is_editing() {
            c.push_str(" editing");
        }
        if is_hidden() {
            c.push_str(" hidden");
        }
        c
    };

    // Double-click enters edit mode seeded with the current title
    let start_edit = move |_: web_sys::MouseEvent| {
        set_edit_text.set(edit_seed.clone());
        ctx.start_editing(id);
        spawn_local(async move {
            // Focus once the edit field has mounted
            TimeoutFuture::new(0).await;
            if let Some(input) = edit_input.get_untracked() {
                let _ = input.focus();
            }
        });
    };

    // Blur and Enter both land here; the editing check keeps the blur
    // fired by unmounting the field from committing twice
    let commit_edit = move || {
        if ctx.editing.get_untracked() != Some(id) {
            return;
        }
        ctx.stop_editing();
        store_apply_edit(&store, id, &edit_text.get_untracked());
    };

    view! {
        <li class=row_class>
            <div class="view">
                <input
                    class="toggle"
                    type="checkbox"
                    checked=completed
                    on:change=move |_| store_toggle_todo(&store, id)
                />
                <label on:dblclick=start_edit>{label_title}</label>
                <button class="destroy" on:click=move |_| store_remove_todo(&store, id)>
                    "×"
                </button>
            </div>
            {move || {
                is_editing()
                    .then(|| {
                        view! {
                            <input
                                class="edit"
                                type="text"
                                node_ref=edit_input
                                prop:value=move || edit_text.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_edit_text.set(input.value());
                                }
                                on:blur=move |_| commit_edit()
                                // Escape does not cancel; the pending text commits on blur
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        commit_edit();
                                    }
                                }
                            />
                        }
                    })
            }}
        </li>
    }
}
