//! View layer: render-operation vocabulary and page adapters.
//!
//! # Responsibility
//! - Define the fixed message vocabulary exchanged with the controller.
//! - Keep view implementations free of business state.
//!
//! # Invariants
//! - Render operations are interpreted in issuance order.
//! - Views never mutate stored records; they only mirror them.

pub mod page;
pub mod template;

use crate::model::todo::{Todo, TodoId};
use crate::route::Route;

/// Named UI events emitted by an interaction surface toward the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// New-todo input submitted.
    NewTodo { title: String },
    /// Edit mode requested for one item.
    ItemEdit { id: TodoId },
    /// Edit committed with the edited text.
    ItemEditDone { id: TodoId, title: String },
    /// Edit abandoned.
    ItemEditCancel { id: TodoId },
    /// Item deletion requested.
    ItemRemove { id: TodoId },
    /// One item's completion checkbox flipped.
    ItemToggle { id: TodoId, completed: bool },
    /// Clear-completed control activated.
    RemoveCompleted,
    /// Toggle-all checkbox flipped.
    ToggleAll { completed: bool },
}

/// Named render operations issued by the controller.
///
/// Each variant carries exactly the payload its page mutation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// Replace the entry list with these records.
    ShowEntries(Vec<Todo>),
    /// Remove one entry row by id.
    RemoveItem(TodoId),
    /// Set the remaining-items counter from the active count.
    UpdateElementCount(usize),
    /// Show or hide the clear-completed control with its label count.
    ClearCompletedButton { completed: usize, visible: bool },
    /// Show or hide the main content block.
    ContentBlockVisibility { visible: bool },
    /// Set the toggle-all checkbox state.
    ToggleAll { checked: bool },
    /// Highlight the active filter link.
    SetFilter(Route),
    /// Set one entry's completed class and checkbox.
    ElementComplete { id: TodoId, completed: bool },
    /// Clear the new-todo input.
    ClearNewTodo,
    /// Enter edit mode for one entry with its current title.
    EditItem { id: TodoId, title: String },
    /// Exit edit mode, committing the given title to the row.
    EditItemDone { id: TodoId, title: String },
}

/// Side-effecting render adapter driven by the controller.
pub trait View {
    /// Applies one render operation to the live page.
    fn render(&mut self, op: RenderOp);
}
