//! Headless page model mirroring the todo screen.
//!
//! # Responsibility
//! - Interpret every render operation against in-memory page state.
//! - Produce the page's HTML fragment on demand for display layers.
//!
//! # Invariants
//! - Holds no business state beyond what render operations delivered.
//! - Row order mirrors the most recent `ShowEntries` payload.

use super::{template, RenderOp, View};
use crate::model::todo::{Todo, TodoId};
use crate::route::Route;

/// In-memory stand-in for the live page a browser view would mutate.
///
/// Display layers read the page back either field-by-field or as one HTML
/// fragment via [`PageView::document`].
#[derive(Debug, Default)]
pub struct PageView {
    rows: Vec<Todo>,
    counter_html: String,
    clear_completed_label: String,
    clear_completed_visible: bool,
    content_visible: bool,
    toggle_all_checked: bool,
    selected_filter: Route,
    new_todo_input: String,
    editing: Option<(TodoId, String)>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records pending text in the new-todo input.
    ///
    /// Cleared again by the `ClearNewTodo` render operation.
    pub fn type_new_todo(&mut self, text: impl Into<String>) {
        self.new_todo_input = text.into();
    }

    /// Entry rows in display order.
    pub fn rows(&self) -> &[Todo] {
        &self.rows
    }

    /// Current remaining-items counter markup.
    pub fn counter_html(&self) -> &str {
        &self.counter_html
    }

    pub fn clear_completed_label(&self) -> &str {
        &self.clear_completed_label
    }

    pub fn clear_completed_visible(&self) -> bool {
        self.clear_completed_visible
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn toggle_all_checked(&self) -> bool {
        self.toggle_all_checked
    }

    pub fn selected_filter(&self) -> Route {
        self.selected_filter
    }

    pub fn new_todo_input(&self) -> &str {
        &self.new_todo_input
    }

    /// Row currently in edit mode, with the title it was entered with.
    pub fn editing(&self) -> Option<(TodoId, &str)> {
        self.editing.as_ref().map(|(id, title)| (*id, title.as_str()))
    }

    /// Renders the current page state as one HTML fragment.
    pub fn document(&self) -> String {
        let mut html = String::new();

        if self.content_visible {
            html.push_str("<section class=\"main\"><ul class=\"todo-list\">");
            html.push_str(&template::render_list(&self.rows));
            html.push_str("</ul></section>");
        }

        html.push_str("<footer class=\"footer\"><span class=\"todo-count\">");
        html.push_str(&self.counter_html);
        html.push_str("</span><ul class=\"filters\">");
        for route in [Route::All, Route::Active, Route::Completed] {
            let selected = if route == self.selected_filter {
                " class=\"selected\""
            } else {
                ""
            };
            html.push_str(&format!(
                "<li><a href=\"#/{}\"{selected}>{route}</a></li>",
                route.segment()
            ));
        }
        html.push_str("</ul>");
        if self.clear_completed_visible {
            html.push_str(&format!(
                "<button class=\"clear-completed\">{}</button>",
                self.clear_completed_label
            ));
        }
        html.push_str("</footer>");
        html
    }

    fn row_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

impl View for PageView {
    fn render(&mut self, op: RenderOp) {
        match op {
            RenderOp::ShowEntries(todos) => self.rows = todos,
            RenderOp::RemoveItem(id) => self.rows.retain(|row| row.id != id),
            RenderOp::UpdateElementCount(active) => {
                self.counter_html = template::item_counter(active);
            }
            RenderOp::ClearCompletedButton { completed, visible } => {
                self.clear_completed_label = template::clear_completed_label(completed);
                self.clear_completed_visible = visible;
            }
            RenderOp::ContentBlockVisibility { visible } => self.content_visible = visible,
            RenderOp::ToggleAll { checked } => self.toggle_all_checked = checked,
            RenderOp::SetFilter(route) => self.selected_filter = route,
            RenderOp::ElementComplete { id, completed } => {
                if let Some(row) = self.row_mut(id) {
                    row.completed = completed;
                }
            }
            RenderOp::ClearNewTodo => self.new_todo_input.clear(),
            RenderOp::EditItem { id, title } => self.editing = Some((id, title)),
            RenderOp::EditItemDone { id, title } => {
                if let Some(row) = self.row_mut(id) {
                    row.title = title;
                }
                if matches!(self.editing, Some((editing_id, _)) if editing_id == id) {
                    self.editing = None;
                }
            }
        }
    }
}
