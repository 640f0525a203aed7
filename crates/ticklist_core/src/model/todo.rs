//! Todo record and partial-update semantics.
//!
//! # Responsibility
//! - Define the persisted todo shape (`id`, `title`, `completed`).
//! - Provide merge semantics for partial updates.
//! - Derive aggregate counters from a collection scan.
//!
//! # Invariants
//! - `id` is unique within one collection and never reassigned.
//! - A patch only touches the fields it carries; all others are preserved.
//! - `Counts` satisfies `active + completed == total`.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to a todo by the storage layer at creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = u64;

/// One task item as persisted inside the list blob.
///
/// Serialized field names (`id`, `title`, `completed`) are part of the
/// storage format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Storage-assigned identifier, unique within the collection.
    pub id: TodoId,
    /// User-supplied task text.
    pub title: String,
    /// Completion flag; new records always start unset.
    pub completed: bool,
}

/// Partial update applied to one existing record.
///
/// Unset fields keep the record's current value (merge, not replace).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that replaces only the title.
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            completed: None,
        }
    }

    /// Patch that replaces only the completion flag.
    pub fn completed(value: bool) -> Self {
        Self {
            title: None,
            completed: Some(value),
        }
    }

    /// Merges the carried fields into `todo`, leaving the rest untouched.
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

/// Aggregate counters derived from a full collection scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Records not yet completed.
    pub active: usize,
    /// Records marked completed.
    pub completed: usize,
    /// All records.
    pub total: usize,
}

impl Counts {
    /// Scans `todos` once and derives all three counters.
    pub fn of(todos: &[Todo]) -> Self {
        let total = todos.len();
        let completed = todos.iter().filter(|todo| todo.completed).count();
        Self {
            active: total - completed,
            completed,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Counts, Todo, TodoPatch};

    fn todo(id: u64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn patch_merges_only_carried_fields() {
        let mut target = todo(1, "original", false);

        TodoPatch::completed(true).apply(&mut target);
        assert_eq!(target.title, "original");
        assert!(target.completed);

        TodoPatch::title("renamed").apply(&mut target);
        assert_eq!(target.title, "renamed");
        assert!(target.completed);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut target = todo(7, "stable", true);
        TodoPatch::default().apply(&mut target);
        assert_eq!(target, todo(7, "stable", true));
    }

    #[test]
    fn counts_partition_the_collection() {
        let todos = [
            todo(1, "a", false),
            todo(2, "b", true),
            todo(3, "c", true),
        ];
        let counts = Counts::of(&todos);
        assert_eq!(counts.active, 1);
        assert_eq!(counts.completed, 2);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.active + counts.completed, counts.total);
    }

    #[test]
    fn counts_of_empty_collection_are_zero() {
        assert_eq!(Counts::of(&[]), Counts::default());
    }

    #[test]
    fn record_serializes_with_stable_field_names() {
        let encoded = serde_json::to_string(&todo(3, "write tests", false)).unwrap();
        assert_eq!(
            encoded,
            r#"{"id":3,"title":"write tests","completed":false}"#
        );
    }
}
