//! Todo use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for controller callers.
//! - Normalize the polymorphic read query into storage lookups.
//! - Derive aggregate counters.
//!
//! # Invariants
//! - The service holds no state of its own; storage is the single source of
//!   truth.
//! - Created records always start with `completed = false`.

use crate::model::todo::{Counts, Todo, TodoId, TodoPatch};
use crate::store::todo_store::{NewTodo, StoreResult, TodoFilter, TodoStore};

/// Query shapes accepted by [`TodoService::read`].
///
/// The three shapes mirror the lookup styles callers need: everything, one
/// id, or a field predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoQuery {
    /// Whole collection, insertion order.
    All,
    /// Exactly the records carrying this id.
    Id(TodoId),
    /// Records matching every set predicate field.
    Where(TodoFilter),
}

/// Use-case service wrapper for todo CRUD operations.
pub struct TodoService<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    /// Creates a service using the provided storage implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates one record with a trimmed title and `completed = false`.
    ///
    /// An empty trimmed title is accepted here; rejecting it is the
    /// caller's responsibility.
    pub fn create(&self, title: &str) -> StoreResult<Todo> {
        self.store.insert(NewTodo {
            title: title.trim().to_string(),
            completed: false,
        })
    }

    /// Reads records for any of the supported query shapes.
    pub fn read(&self, query: &TodoQuery) -> StoreResult<Vec<Todo>> {
        match query {
            TodoQuery::All => self.store.find_all(),
            TodoQuery::Id(id) => self.store.find(&TodoFilter::by_id(*id)),
            TodoQuery::Where(filter) => self.store.find(filter),
        }
    }

    /// Merges `patch` into the record carrying `id`.
    pub fn update(&self, id: TodoId, patch: &TodoPatch) -> StoreResult<Vec<Todo>> {
        self.store.update(id, patch)
    }

    /// Removes the record carrying `id`.
    pub fn remove(&self, id: TodoId) -> StoreResult<Vec<Todo>> {
        self.store.remove(id)
    }

    /// Removes every record in the collection.
    pub fn remove_all(&self) -> StoreResult<Vec<Todo>> {
        self.store.drop_all()
    }

    /// Derives aggregate counters from a full scan.
    pub fn counts(&self) -> StoreResult<Counts> {
        Ok(Counts::of(&self.store.find_all()?))
    }
}
