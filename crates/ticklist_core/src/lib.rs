//! Core domain logic for ticklist.
//! This crate is the single source of truth for task-list behavior.

pub mod app;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod route;
pub mod service;
pub mod store;
pub mod view;

pub use app::TodoApp;
pub use controller::Controller;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Counts, Todo, TodoId, TodoPatch};
pub use notify::{LogNotifier, Notifier};
pub use route::Route;
pub use service::todo_service::{TodoQuery, TodoService};
pub use store::todo_store::{
    NewTodo, SqliteTodoStore, StoreError, StoreResult, TodoFilter, TodoStore,
};
pub use view::page::PageView;
pub use view::{RenderOp, UiEvent, View};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
