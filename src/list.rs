//! List Operations
//!
//! Pure helpers over the todo collection. Everything here is DOM-free
//! so the collection semantics stay testable off the browser; the
//! reactive store wraps these and adds persistence.

use crate::models::Todo;

/// Outcome of committing an in-place edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    Deleted,
}

/// Trim an input title; `None` means the input is empty after trimming
pub fn normalize_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Entries with completed = true
pub fn completed(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|t| t.completed).cloned().collect()
}

/// Entries with completed = false (complement of `completed`)
pub fn remaining(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|t| !t.completed).cloned().collect()
}

/// Order value for the next appended entry: 1 on an empty collection,
/// max existing order + 1 otherwise
pub fn next_order(todos: &[Todo]) -> u32 {
    todos.iter().map(|t| t.order).max().map_or(1, |max| max + 1)
}

fn next_id(todos: &[Todo]) -> u32 {
    todos.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}

/// Display-order snapshot: ascending by `order`, with `id` breaking
/// hypothetical ties so the sort is total
pub fn sorted(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted: Vec<Todo> = todos.to_vec();
    sorted.sort_by_key(|t| (t.order, t.id));
    sorted
}

/// Append a new uncompleted entry; empty trimmed input is a no-op.
/// Returns whether an entry was added.
pub fn add_todo(todos: &mut Vec<Todo>, input: &str) -> bool {
    let Some(title) = normalize_title(input) else {
        return false;
    };
    let todo = Todo {
        id: next_id(todos),
        title,
        completed: false,
        order: next_order(todos),
    };
    todos.push(todo);
    true
}

/// Flip one entry's completed flag
pub fn toggle(todos: &mut [Todo], id: u32) {
    if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
        todo.completed = !todo.completed;
    }
}

/// Remove one entry by id
pub fn remove(todos: &mut Vec<Todo>, id: u32) {
    todos.retain(|t| t.id != id);
}

/// Set every entry's completed flag to the checkbox state, item by item
pub fn toggle_all(todos: &mut [Todo], completed: bool) {
    for todo in todos.iter_mut() {
        todo.completed = completed;
    }
}

/// Drop every entry completed at the time of the call
pub fn clear_completed(todos: &mut Vec<Todo>) {
    todos.retain(|t| !t.completed);
}

/// Commit an in-place edit: a non-empty trimmed title is saved, an
/// empty one deletes the entry
pub fn apply_edit(todos: &mut Vec<Todo>, id: u32, input: &str) -> EditOutcome {
    match normalize_title(input) {
        Some(title) => {
            if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
                todo.title = title;
            }
            EditOutcome::Saved
        }
        None => {
            remove(todos, id);
            EditOutcome::Deleted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool, order: u32) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            completed,
            order,
        }
    }

    #[test]
    fn test_completed_remaining_partition() {
        let todos = vec![
            make_todo(1, true, 1),
            make_todo(2, false, 2),
            make_todo(3, true, 3),
            make_todo(4, false, 4),
        ];

        let done = completed(&todos);
        let open = remaining(&todos);

        // No overlap, no omission
        assert_eq!(done.len() + open.len(), todos.len());
        assert!(done.iter().all(|t| t.completed));
        assert!(open.iter().all(|t| !t.completed));
        for todo in &todos {
            let in_done = done.iter().any(|t| t.id == todo.id);
            let in_open = open.iter().any(|t| t.id == todo.id);
            assert!(in_done != in_open);
        }
    }

    #[test]
    fn test_next_order_empty() {
        assert_eq!(next_order(&[]), 1);
    }

    #[test]
    fn test_next_order_is_max_plus_one() {
        // Gapped orders: max wins, not length
        let todos = vec![make_todo(1, false, 2), make_todo(2, false, 9)];
        assert_eq!(next_order(&todos), 10);
    }

    #[test]
    fn test_add_todo_assigns_monotonic_order_and_id() {
        let mut todos = Vec::new();
        assert!(add_todo(&mut todos, "first"));
        assert!(add_todo(&mut todos, "  second  "));

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].order, 1);
        assert_eq!(todos[1].order, 2);
        assert!(todos[1].id > todos[0].id);
        assert_eq!(todos[1].title, "second");
        assert!(!todos[0].completed && !todos[1].completed);
    }

    #[test]
    fn test_add_todo_empty_trimmed_title_is_noop() {
        let mut todos = vec![make_todo(1, false, 1)];
        assert!(!add_todo(&mut todos, "   "));
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn test_sorted_by_order() {
        let todos = vec![
            make_todo(1, false, 3),
            make_todo(2, false, 1),
            make_todo(3, false, 2),
        ];
        let sorted = sorted(&todos);
        assert_eq!(
            sorted.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![2, 3, 1]
        );
    }

    #[test]
    fn test_toggle_all_marks_everything() {
        let mut todos = vec![make_todo(1, false, 1)];
        toggle_all(&mut todos, true);
        assert_eq!(completed(&todos).len(), 1);
        assert_eq!(remaining(&todos).len(), 0);

        toggle_all(&mut todos, false);
        assert_eq!(completed(&todos).len(), 0);
        assert_eq!(remaining(&todos).len(), 1);
    }

    #[test]
    fn test_clear_completed_keeps_remaining_unchanged() {
        let mut todos = vec![
            make_todo(1, true, 1),
            make_todo(2, false, 2),
            make_todo(3, true, 3),
        ];
        clear_completed(&mut todos);

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 2);
        assert_eq!(todos[0].title, "Todo 2");
        assert_eq!(todos[0].order, 2);
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_apply_edit_saves_trimmed_title() {
        let mut todos = vec![make_todo(1, false, 1)];
        let outcome = apply_edit(&mut todos, 1, "  new title  ");
        assert_eq!(outcome, EditOutcome::Saved);
        assert_eq!(todos[0].title, "new title");
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn test_apply_edit_empty_title_deletes() {
        let mut todos = vec![make_todo(1, false, 1), make_todo(2, false, 2)];
        let outcome = apply_edit(&mut todos, 1, "   ");
        assert_eq!(outcome, EditOutcome::Deleted);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 2);
    }

    #[test]
    fn test_toggle_flips_single_entry() {
        let mut todos = vec![make_todo(1, false, 1), make_todo(2, false, 2)];
        toggle(&mut todos, 2);
        assert!(!todos[0].completed);
        assert!(todos[1].completed);
        toggle(&mut todos, 2);
        assert!(!todos[1].completed);
    }

    #[test]
    fn test_remove_by_id() {
        let mut todos = vec![make_todo(1, false, 1), make_todo(2, false, 2)];
        remove(&mut todos, 1);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 2);
    }
}
