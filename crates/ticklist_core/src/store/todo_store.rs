//! Todo blob store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist one todo collection as a single JSON document per list name.
//! - Allocate record ids and enforce lookup semantics for mutations.
//!
//! # Invariants
//! - The persisted payload always parses as `{"todos":[...]}`.
//! - Ids handed out by one store are strictly increasing.
//! - Collection order is insertion order; mutations never reorder the
//!   surviving records.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::todo::{Todo, TodoId, TodoPatch};
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for blob persistence and lookup operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Persisted payload for the named list failed to deserialize.
    Corrupt { name: String, message: String },
    /// In-memory document failed to serialize before a write.
    Encode(serde_json::Error),
    /// Update/remove target id does not exist in the collection.
    NotFound(TodoId),
    /// Connection has not been migrated to the schema this build expects.
    UninitializedDatabase {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt { name, message } => {
                write!(f, "corrupt blob for list `{name}`: {message}")
            }
            Self::Encode(err) => write!(f, "failed to encode list document: {err}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::UninitializedDatabase {
                expected_version,
                actual_version,
            } => write!(
                f,
                "database schema version {actual_version} does not match expected {expected_version}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Corrupt { .. } | Self::NotFound(_) | Self::UninitializedDatabase { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Input for creating one record; the id is store-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
}

/// Field predicate matched against records, AND-combined across set fields.
///
/// An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub id: Option<TodoId>,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoFilter {
    /// Filter selecting records carrying exactly this id.
    pub fn by_id(id: TodoId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Filter selecting records by completion flag.
    pub fn by_completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Returns whether every set field equals the record's field.
    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(id) = self.id {
            if todo.id != id {
                return false;
            }
        }
        if let Some(title) = &self.title {
            if &todo.title != title {
                return false;
            }
        }
        if let Some(completed) = self.completed {
            if todo.completed != completed {
                return false;
            }
        }
        true
    }
}

/// Root document serialized under one storage key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TodoDocument {
    todos: Vec<Todo>,
}

/// Storage contract for one named todo collection.
///
/// Every operation completes before it returns; a substituted asynchronous
/// backend must preserve that ordering so callers never observe reordered
/// mutations on one logical list.
pub trait TodoStore {
    /// Full collection in insertion order.
    fn find_all(&self) -> StoreResult<Vec<Todo>>;

    /// Records matching every set field of `filter`, in insertion order.
    fn find(&self, filter: &TodoFilter) -> StoreResult<Vec<Todo>>;

    /// Appends a new record with a freshly allocated id and returns it.
    fn insert(&self, new: NewTodo) -> StoreResult<Todo>;

    /// Merges `patch` into the record carrying `id`; returns the full
    /// updated collection.
    fn update(&self, id: TodoId, patch: &TodoPatch) -> StoreResult<Vec<Todo>>;

    /// Deletes every record carrying `id`; returns the remaining collection
    /// in original relative order.
    fn remove(&self, id: TodoId) -> StoreResult<Vec<Todo>>;

    /// Resets the collection to empty and returns it.
    fn drop_all(&self) -> StoreResult<Vec<Todo>>;
}

/// SQLite-backed blob store: one row in `blobs` per list name.
#[derive(Debug)]
pub struct SqliteTodoStore {
    conn: Connection,
    name: String,
    next_id: Cell<TodoId>,
}

impl SqliteTodoStore {
    /// Opens the named list, creating an empty collection when absent.
    ///
    /// Opening is idempotent: an existing payload is left untouched and only
    /// validated. The id allocator is seeded past the highest persisted id.
    ///
    /// # Errors
    /// - `UninitializedDatabase` when migrations have not been applied to
    ///   `conn`.
    /// - `Corrupt` when an existing payload does not deserialize; there is
    ///   no in-memory fallback, so this is fatal for the list.
    pub fn open(conn: Connection, name: impl Into<String>) -> StoreResult<Self> {
        let name = name.into();

        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(StoreError::UninitializedDatabase {
                expected_version,
                actual_version,
            });
        }

        let store = Self {
            conn,
            name,
            next_id: Cell::new(1),
        };

        let document = match store.read_payload()? {
            Some(payload) => store.decode(&payload)?,
            None => {
                let document = TodoDocument::default();
                store.write_document(&document)?;
                document
            }
        };

        let highest = document.todos.iter().map(|todo| todo.id).max().unwrap_or(0);
        store.next_id.set(highest + 1);

        info!(
            "event=store_open module=store status=ok name={} records={}",
            store.name,
            document.todos.len()
        );
        Ok(store)
    }

    /// List name this store was opened with.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn read_payload(&self) -> StoreResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM blobs WHERE name = ?1;",
                params![self.name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn load_document(&self) -> StoreResult<TodoDocument> {
        match self.read_payload()? {
            Some(payload) => self.decode(&payload),
            None => Err(StoreError::Corrupt {
                name: self.name.clone(),
                message: "blob row missing after open".to_string(),
            }),
        }
    }

    fn decode(&self, payload: &str) -> StoreResult<TodoDocument> {
        serde_json::from_str(payload).map_err(|err| StoreError::Corrupt {
            name: self.name.clone(),
            message: err.to_string(),
        })
    }

    fn write_document(&self, document: &TodoDocument) -> StoreResult<()> {
        let payload = serde_json::to_string(document)?;
        self.conn.execute(
            "INSERT INTO blobs (name, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![self.name, payload],
        )?;
        Ok(())
    }

    fn allocate_id(&self, document: &TodoDocument) -> TodoId {
        // The counter never moves backwards, even if records with higher
        // ids were persisted by another store instance since open.
        let floor = document.todos.iter().map(|todo| todo.id).max().unwrap_or(0);
        let id = self.next_id.get().max(floor + 1);
        self.next_id.set(id + 1);
        id
    }
}

impl TodoStore for SqliteTodoStore {
    fn find_all(&self) -> StoreResult<Vec<Todo>> {
        Ok(self.load_document()?.todos)
    }

    fn find(&self, filter: &TodoFilter) -> StoreResult<Vec<Todo>> {
        let document = self.load_document()?;
        Ok(document
            .todos
            .into_iter()
            .filter(|todo| filter.matches(todo))
            .collect())
    }

    fn insert(&self, new: NewTodo) -> StoreResult<Todo> {
        let mut document = self.load_document()?;
        let todo = Todo {
            id: self.allocate_id(&document),
            title: new.title,
            completed: new.completed,
        };
        document.todos.push(todo.clone());
        self.write_document(&document)?;

        debug!(
            "event=todo_insert module=store status=ok name={} id={}",
            self.name, todo.id
        );
        Ok(todo)
    }

    fn update(&self, id: TodoId, patch: &TodoPatch) -> StoreResult<Vec<Todo>> {
        let mut document = self.load_document()?;
        let target = document
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        patch.apply(target);
        self.write_document(&document)?;

        debug!(
            "event=todo_update module=store status=ok name={} id={id}",
            self.name
        );
        Ok(document.todos)
    }

    fn remove(&self, id: TodoId) -> StoreResult<Vec<Todo>> {
        let mut document = self.load_document()?;
        let before = document.todos.len();
        document.todos.retain(|todo| todo.id != id);
        if document.todos.len() == before {
            return Err(StoreError::NotFound(id));
        }
        self.write_document(&document)?;

        debug!(
            "event=todo_remove module=store status=ok name={} id={id}",
            self.name
        );
        Ok(document.todos)
    }

    fn drop_all(&self) -> StoreResult<Vec<Todo>> {
        self.write_document(&TodoDocument::default())?;
        info!(
            "event=store_drop module=store status=ok name={}",
            self.name
        );
        Ok(Vec::new())
    }
}
