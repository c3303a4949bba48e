//! Hash Router
//!
//! Maps the URL fragment to the active filter and republishes changes
//! into the filter signal. The fragment pattern is `#/<keyword>` where
//! everything after `#/` is the filter keyword.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::filter::Filter;

/// Filter encoded in the current location hash
pub fn current_filter() -> Filter {
    let hash = web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default();
    Filter::from_hash(&hash)
}

/// Republish hash changes into the filter signal. The listener stays
/// bound for the lifetime of the page.
pub fn bind_hashchange(set_filter: WriteSignal<Filter>) {
    let on_hashchange = Closure::<dyn FnMut()>::new(move || {
        set_filter.set(current_filter());
    });
    if let Some(win) = web_sys::window() {
        let _ = win
            .add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
    }
    on_hashchange.forget();
}
