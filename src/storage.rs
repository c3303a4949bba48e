//! Browser Storage Adapter
//!
//! Synchronous localStorage persistence for the todo collection under
//! a fixed namespace key. Absent or broken storage degrades to an
//! empty collection on load; failed writes are skipped.

use crate::list;
use crate::models::Todo;

/// Namespace key for the persisted collection
const STORAGE_KEY: &str = "ticklist-todos";

/// Load the persisted collection, sorted into display order.
/// The persisted representation is authoritative at load time.
pub fn load_todos() -> Vec<Todo> {
    let Some(json) = read_raw() else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Todo>>(&json) {
        Ok(todos) => list::sorted(&todos),
        Err(err) => {
            web_sys::console::log_1(
                &format!("[STORAGE] discarding unparsable collection: {}", err).into(),
            );
            Vec::new()
        }
    }
}

fn read_raw() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

/// Write the full serialized collection; one call per mutation.
pub fn save_todos(todos: &[Todo]) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let Ok(Some(storage)) = win.local_storage() else {
        return;
    };
    match serde_json::to_string(todos) {
        Ok(json) => {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
        Err(err) => {
            web_sys::console::log_1(&format!("[STORAGE] serialize failed: {}", err).into());
        }
    }
}
