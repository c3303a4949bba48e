//! Frontend Models
//!
//! Data structures persisted to browser storage.

use serde::{Deserialize, Serialize};

/// A single to-do entry
///
/// `id` is store-assigned at creation and stable for the lifetime of
/// the entry; `order` drives display order and grows monotonically as
/// entries are appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub order: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The serialized field names are the storage wire contract.
    #[test]
    fn test_persisted_field_names() {
        let todo = Todo {
            id: 3,
            title: "Buy milk".to_string(),
            completed: true,
            order: 7,
        };

        let value = serde_json::to_value(&todo).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 4);
        assert_eq!(obj["id"], 3);
        assert_eq!(obj["title"], "Buy milk");
        assert_eq!(obj["completed"], true);
        assert_eq!(obj["order"], 7);
    }
}
