//! Controller: orchestration between service, view and router.
//!
//! # Responsibility
//! - Translate named UI events into service mutations plus re-renders.
//! - Track the active route and refresh filtered entries when it changes.
//!
//! # Invariants
//! - Aggregate counters refresh on every refilter pass.
//! - The entry list re-renders on route change and on forced refreshes.
//! - Handlers leave the page consistent with stored state before returning.

use crate::model::todo::{Todo, TodoId, TodoPatch};
use crate::notify::Notifier;
use crate::route::Route;
use crate::service::todo_service::{TodoQuery, TodoService};
use crate::store::todo_store::{StoreError, StoreResult, TodoFilter, TodoStore};
use crate::view::{RenderOp, UiEvent, View};
use log::debug;

/// Mediator between the todo service and a view implementation.
///
/// Route state starts unset; the first [`Controller::set_view`] call always
/// renders the entry list.
pub struct Controller<S: TodoStore, V: View, N: Notifier> {
    service: TodoService<S>,
    view: V,
    notifier: N,
    active_route: Route,
    last_active_route: Option<Route>,
}

impl<S, V, N> Controller<S, V, N>
where
    S: TodoStore,
    V: View,
    N: Notifier,
{
    /// Wires a controller to its collaborators.
    pub fn new(service: TodoService<S>, view: V, notifier: N) -> Self {
        Self {
            service,
            view,
            notifier,
            active_route: Route::All,
            last_active_route: None,
        }
    }

    /// Read access to the wired view, for display layers and tests.
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn service(&self) -> &TodoService<S> {
        &self.service
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Routes one named UI event to its handler.
    pub fn dispatch(&mut self, event: UiEvent) -> StoreResult<()> {
        match event {
            UiEvent::NewTodo { title } => self.add_item(&title),
            UiEvent::ItemEdit { id } => self.edit_item(id),
            UiEvent::ItemEditDone { id, title } => self.edit_item_save(id, &title),
            UiEvent::ItemEditCancel { id } => self.edit_item_cancel(id),
            UiEvent::ItemRemove { id } => self.remove_item(id),
            UiEvent::ItemToggle { id, completed } => self.toggle_complete(id, completed, false),
            UiEvent::RemoveCompleted => self.remove_completed_items(),
            UiEvent::ToggleAll { completed } => self.toggle_all(completed),
        }
    }

    /// Loads and initializes the view for a location hash.
    pub fn set_view(&mut self, location_hash: &str) -> StoreResult<()> {
        let route = Route::from_location_hash(location_hash);
        self.update_filter_state(route)
    }

    /// Adds a new item unless the trimmed title is empty.
    pub fn add_item(&mut self, title: &str) -> StoreResult<()> {
        if title.trim().is_empty() {
            return Ok(());
        }

        let todo = self.service.create(title)?;
        debug!("event=todo_add module=controller status=ok id={}", todo.id);
        self.view.render(RenderOp::ClearNewTodo);
        self.refilter(true)
    }

    /// Enters edit mode for one item with its stored title.
    pub fn edit_item(&mut self, id: TodoId) -> StoreResult<()> {
        let todo = self.read_one(id)?;
        self.view.render(RenderOp::EditItem {
            id,
            title: todo.title,
        });
        Ok(())
    }

    /// Commits an edit; an empty title removes the item instead.
    pub fn edit_item_save(&mut self, id: TodoId, title: &str) -> StoreResult<()> {
        // Only literal space characters are trimmed; tabs and newlines
        // survive into the stored title.
        let title = title.trim_matches(' ');

        if title.is_empty() {
            return self.remove_item(id);
        }

        self.service.update(id, &TodoPatch::title(title))?;
        self.view.render(RenderOp::EditItemDone {
            id,
            title: title.to_string(),
        });
        Ok(())
    }

    /// Exits edit mode, restoring the stored title.
    pub fn edit_item_cancel(&mut self, id: TodoId) -> StoreResult<()> {
        let todo = self.read_one(id)?;
        self.view.render(RenderOp::EditItemDone {
            id,
            title: todo.title,
        });
        Ok(())
    }

    /// Removes one item from storage and from the page.
    pub fn remove_item(&mut self, id: TodoId) -> StoreResult<()> {
        self.service.remove(id)?;
        self.view.render(RenderOp::RemoveItem(id));
        self.notifier
            .notify(&format!("Element with ID: {id} has been removed."));
        self.refilter(false)
    }

    /// Removes every completed item, confirming each removal.
    pub fn remove_completed_items(&mut self) -> StoreResult<()> {
        let completed = self
            .service
            .read(&TodoQuery::Where(TodoFilter::by_completed(true)))?;
        for item in completed {
            self.remove_item(item.id)?;
        }
        self.refilter(false)
    }

    /// Updates one item's completion flag.
    ///
    /// `silent` suppresses the refilter pass; bulk togglers use it to avoid
    /// redundant full refreshes per item.
    pub fn toggle_complete(&mut self, id: TodoId, completed: bool, silent: bool) -> StoreResult<()> {
        self.service.update(id, &TodoPatch::completed(completed))?;
        self.view.render(RenderOp::ElementComplete { id, completed });

        if !silent {
            self.refilter(false)?;
        }
        Ok(())
    }

    /// Sets every item's completion flag, then refilters once.
    pub fn toggle_all(&mut self, completed: bool) -> StoreResult<()> {
        let pending = self
            .service
            .read(&TodoQuery::Where(TodoFilter::by_completed(!completed)))?;
        for item in pending {
            self.toggle_complete(item.id, completed, true)?;
        }
        self.refilter(false)
    }

    fn show_all(&mut self) -> StoreResult<()> {
        let data = self.service.read(&TodoQuery::All)?;
        self.view.render(RenderOp::ShowEntries(data));
        Ok(())
    }

    fn show_active(&mut self) -> StoreResult<()> {
        let data = self
            .service
            .read(&TodoQuery::Where(TodoFilter::by_completed(false)))?;
        self.view.render(RenderOp::ShowEntries(data));
        Ok(())
    }

    fn show_completed(&mut self) -> StoreResult<()> {
        let data = self
            .service
            .read(&TodoQuery::Where(TodoFilter::by_completed(true)))?;
        self.view.render(RenderOp::ShowEntries(data));
        Ok(())
    }

    fn update_counts(&mut self) -> StoreResult<()> {
        let counts = self.service.counts()?;
        self.view.render(RenderOp::UpdateElementCount(counts.active));
        self.view.render(RenderOp::ClearCompletedButton {
            completed: counts.completed,
            visible: counts.completed > 0,
        });
        self.view.render(RenderOp::ToggleAll {
            checked: counts.completed == counts.total,
        });
        self.view.render(RenderOp::ContentBlockVisibility {
            visible: counts.total > 0,
        });
        Ok(())
    }

    /// Re-filters the entry list for the active route.
    ///
    /// Counters always refresh. The list re-renders on `force`, on any route
    /// change, and whenever the previous route was not `All`; the only
    /// suppressed case is an unforced pass that stays on `All`.
    fn refilter(&mut self, force: bool) -> StoreResult<()> {
        self.update_counts()?;

        if force
            || self.last_active_route != Some(Route::All)
            || self.last_active_route != Some(self.active_route)
        {
            match self.active_route {
                Route::All => self.show_all()?,
                Route::Active => self.show_active()?,
                Route::Completed => self.show_completed()?,
            }
        }

        self.last_active_route = Some(self.active_route);
        Ok(())
    }

    fn update_filter_state(&mut self, route: Route) -> StoreResult<()> {
        self.active_route = route;
        self.refilter(false)?;
        self.view.render(RenderOp::SetFilter(route));
        Ok(())
    }

    fn read_one(&self, id: TodoId) -> StoreResult<Todo> {
        self.service
            .read(&TodoQuery::Id(id))?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound(id))
    }
}
