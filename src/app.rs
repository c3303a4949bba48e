//! Ticklist App
//!
//! Top-level component: seeds the store from persisted state, wires
//! the context and hash router, and renders the application shell.

use leptos::prelude::*;

use crate::components::{Footer, NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::router;
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // The persisted collection is authoritative at startup
    let store = AppStore::new(AppState::load());

    let (filter, set_filter) = signal(router::current_filter());
    let (editing, set_editing) = signal(None::<u32>);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(filter, (editing, set_editing)));

    // Filter changes arrive only through the hash router
    router::bind_hashchange(set_filter);

    view! {
        <section id="todoapp">
            <header id="header">
                <h1>"todos"</h1>
                <NewTodoForm />
            </header>
            <TodoList />
            <Footer />
        </section>
    }
}
