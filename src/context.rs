//! Application Context
//!
//! Shared state provided via Leptos Context API. This is the explicit
//! wiring that stands in for constructor injection: collaborators are
//! resolved once at startup with `provide_context`, and a missing
//! registration fails fast inside `expect_context`.

use leptos::prelude::*;

use crate::filter::Filter;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active visibility filter - read (written only by the router)
    pub filter: ReadSignal<Filter>,
    /// Entry currently in edit mode, if any - read
    pub editing: ReadSignal<Option<u32>>,
    /// Entry currently in edit mode - write
    set_editing: WriteSignal<Option<u32>>,
}

impl AppContext {
    pub fn new(
        filter: ReadSignal<Filter>,
        editing: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
    ) -> Self {
        Self {
            filter,
            editing: editing.0,
            set_editing: editing.1,
        }
    }

    /// Put one entry into edit mode (closes any other open editor)
    pub fn start_editing(&self, id: u32) {
        self.set_editing.set(Some(id));
    }

    /// Leave edit mode
    pub fn stop_editing(&self) {
        self.set_editing.set(None);
    }
}
