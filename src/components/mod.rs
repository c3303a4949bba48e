//! UI Components
//!
//! Reusable Leptos components.

mod footer;
mod new_todo_form;
mod todo_item;
mod todo_list;

pub use footer::Footer;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
