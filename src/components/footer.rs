//! Footer Component
//!
//! Summary counts, filter tabs, and the clear-completed action.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::filter::Filter;
use crate::list;
use crate::store::{store_clear_completed, store_todos, use_app_store};

/// Footer with counts and filter links, hidden while the collection
/// is empty
#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let remaining_count = move || list::remaining(&store_todos(&store)).len();
    let completed_count = move || list::completed(&store_todos(&store)).len();
    let footer_class = move || {
        if store_todos(&store).is_empty() {
            "hidden"
        } else {
            ""
        }
    };

    view! {
        <footer id="footer" class=footer_class>
            <span id="todo-count">
                <strong>{move || remaining_count()}</strong>
                {move || if remaining_count() == 1 { " item left" } else { " items left" }}
            </span>
            <ul id="filters">
                {Filter::ALL
                    .iter()
                    .map(|filter| {
                        let filter = *filter;
                        view! {
                            <li>
                                <a
                                    href=filter.href()
                                    class=move || {
                                        if ctx.filter.get() == filter { "selected" } else { "" }
                                    }
                                >
                                    {filter.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            {move || {
                (completed_count() > 0)
                    .then(|| {
                        view! {
                            <button
                                id="clear-completed"
                                on:click=move |_| store_clear_completed(&store)
                            >
                                {move || format!("Clear completed ({})", completed_count())}
                            </button>
                        }
                    })
            }}
        </footer>
    }
}
