//! Application assembly: storage, service, view and controller wiring.
//!
//! # Responsibility
//! - Build the full component stack for one named todo list.
//! - Relay route changes and UI events into the controller.
//!
//! # Invariants
//! - Components receive their collaborators by constructor injection; no
//!   shared global state is involved.

use crate::controller::Controller;
use crate::db::{open_db, open_db_in_memory};
use crate::notify::Notifier;
use crate::service::todo_service::TodoService;
use crate::store::todo_store::{SqliteTodoStore, StoreResult};
use crate::view::{UiEvent, View};
use std::path::Path;

/// One fully wired todo application over a SQLite-backed list.
pub struct TodoApp<V: View, N: Notifier> {
    controller: Controller<SqliteTodoStore, V, N>,
}

impl<V: View, N: Notifier> TodoApp<V, N> {
    /// Opens (or creates) the named list in a database file.
    pub fn open(path: impl AsRef<Path>, name: &str, view: V, notifier: N) -> StoreResult<Self> {
        let conn = open_db(path)?;
        Ok(Self::assemble(SqliteTodoStore::open(conn, name)?, view, notifier))
    }

    /// Opens the named list in a fresh in-memory database.
    pub fn open_in_memory(name: &str, view: V, notifier: N) -> StoreResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self::assemble(SqliteTodoStore::open(conn, name)?, view, notifier))
    }

    fn assemble(store: SqliteTodoStore, view: V, notifier: N) -> Self {
        Self {
            controller: Controller::new(TodoService::new(store), view, notifier),
        }
    }

    /// Applies a location-hash change (`""`, `"#/active"`, `"#/completed"`).
    pub fn set_view(&mut self, location_hash: &str) -> StoreResult<()> {
        self.controller.set_view(location_hash)
    }

    /// Feeds one named UI event through the controller.
    pub fn dispatch(&mut self, event: UiEvent) -> StoreResult<()> {
        self.controller.dispatch(event)
    }

    /// Read access to the wired view.
    pub fn view(&self) -> &V {
        self.controller.view()
    }

    pub fn view_mut(&mut self) -> &mut V {
        self.controller.view_mut()
    }

    /// The underlying controller, for callers needing direct access.
    pub fn controller(&self) -> &Controller<SqliteTodoStore, V, N> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<SqliteTodoStore, V, N> {
        &mut self.controller
    }
}
