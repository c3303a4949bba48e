//! Todo List Component
//!
//! The main section: toggle-all checkbox plus the list body, hidden
//! entirely while the collection is empty.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::TodoItem;
use crate::store::{store_todos, store_toggle_all, use_app_store};

/// Main list view over the order-sorted collection
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let todos = move || store_todos(&store);
    let all_completed = move || {
        let todos = todos();
        !todos.is_empty() && todos.iter().all(|t| t.completed)
    };
    let section_class = move || if todos().is_empty() { "hidden" } else { "" };

    view! {
        <section id="main" class=section_class>
            <input
                id="toggle-all"
                type="checkbox"
                prop:checked=all_completed
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store_toggle_all(&store, input.checked());
                }
            />
            <label for="toggle-all">"Mark all as complete"</label>
            <ul id="todo-list">
                <For
                    each=todos
                    key=|todo| {
                        // Key on every mutable field so changes re-render the row
                        (todo.id, todo.title.clone(), todo.completed, todo.order)
                    }
                    children=move |todo| {
                        view! { <TodoItem todo=todo /> }
                    }
                />
            </ul>
        </section>
    }
}
