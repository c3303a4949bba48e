//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every
//! mutation helper applies a pure list operation and writes the new
//! collection to browser storage before returning.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list::{self, EditOutcome};
use crate::models::Todo;
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The todo collection; display order comes from the `order` field
    pub todos: Vec<Todo>,
}

impl AppState {
    /// State seeded from the persisted collection
    pub fn load() -> Self {
        Self {
            todos: storage::load_todos(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Order-sorted snapshot of the collection (reactive read)
pub fn store_todos(store: &AppStore) -> Vec<Todo> {
    list::sorted(&store.todos().get())
}

/// Append a new entry from raw input; returns whether one was added
pub fn store_add_todo(store: &AppStore, input: &str) -> bool {
    let binding = store.todos();
    let mut todos = binding.write();
    let added = list::add_todo(&mut todos, input);
    if added {
        storage::save_todos(&todos);
    }
    added
}

/// Flip one entry's completed flag
pub fn store_toggle_todo(store: &AppStore, id: u32) {
    let binding = store.todos();
    let mut todos = binding.write();
    list::toggle(&mut todos, id);
    storage::save_todos(&todos);
}

/// Remove one entry
pub fn store_remove_todo(store: &AppStore, id: u32) {
    let binding = store.todos();
    let mut todos = binding.write();
    list::remove(&mut todos, id);
    storage::save_todos(&todos);
}

/// Commit an in-place edit; an empty trimmed title removes the entry
pub fn store_apply_edit(store: &AppStore, id: u32, input: &str) -> EditOutcome {
    let binding = store.todos();
    let mut todos = binding.write();
    let outcome = list::apply_edit(&mut todos, id, input);
    storage::save_todos(&todos);
    outcome
}

/// Set every entry's completed flag in one batch
pub fn store_toggle_all(store: &AppStore, completed: bool) {
    let binding = store.todos();
    let mut todos = binding.write();
    list::toggle_all(&mut todos, completed);
    storage::save_todos(&todos);
}

/// Remove every entry completed at the time of the call
pub fn store_clear_completed(store: &AppStore) {
    let binding = store.todos();
    let mut todos = binding.write();
    list::clear_completed(&mut todos);
    storage::save_todos(&todos);
}
