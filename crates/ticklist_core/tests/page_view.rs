use ticklist_core::{PageView, RenderOp, Route, Todo, View};

fn todo(id: u64, title: &str, completed: bool) -> Todo {
    Todo {
        id,
        title: title.to_string(),
        completed,
    }
}

fn page_with(todos: Vec<Todo>) -> PageView {
    let mut page = PageView::new();
    page.render(RenderOp::ShowEntries(todos));
    page.render(RenderOp::ContentBlockVisibility { visible: true });
    page
}

#[test]
fn show_entries_replaces_all_rows() {
    let mut page = page_with(vec![todo(1, "first", false)]);
    page.render(RenderOp::ShowEntries(vec![
        todo(2, "second", false),
        todo(3, "third", true),
    ]));

    let ids: Vec<_> = page.rows().iter().map(|row| row.id).collect();
    assert_eq!(ids, [2, 3]);
}

#[test]
fn remove_item_drops_exactly_one_row() {
    let mut page = page_with(vec![todo(1, "keep", false), todo(2, "drop", false)]);
    page.render(RenderOp::RemoveItem(2));

    assert_eq!(page.rows().len(), 1);
    assert_eq!(page.rows()[0].id, 1);
}

#[test]
fn element_complete_updates_one_row_in_place() {
    let mut page = page_with(vec![todo(1, "flip", false), todo(2, "stay", false)]);
    page.render(RenderOp::ElementComplete {
        id: 1,
        completed: true,
    });

    assert!(page.rows()[0].completed);
    assert!(!page.rows()[1].completed);

    let document = page.document();
    assert!(document.contains("class=\"completed\""));
}

#[test]
fn counter_and_clear_button_follow_render_ops() {
    let mut page = page_with(vec![]);
    page.render(RenderOp::UpdateElementCount(2));
    page.render(RenderOp::ClearCompletedButton {
        completed: 1,
        visible: true,
    });

    assert_eq!(page.counter_html(), "<strong>2</strong> items left");
    assert!(page.clear_completed_visible());
    assert_eq!(page.clear_completed_label(), "Clear completed");

    page.render(RenderOp::ClearCompletedButton {
        completed: 0,
        visible: false,
    });
    assert!(!page.clear_completed_visible());
    assert_eq!(page.clear_completed_label(), "");
}

#[test]
fn clear_new_todo_empties_the_input() {
    let mut page = PageView::new();
    page.type_new_todo("half typed");
    assert_eq!(page.new_todo_input(), "half typed");

    page.render(RenderOp::ClearNewTodo);
    assert_eq!(page.new_todo_input(), "");
}

#[test]
fn edit_lifecycle_tracks_the_edited_row() {
    let mut page = page_with(vec![todo(1, "before", false)]);

    page.render(RenderOp::EditItem {
        id: 1,
        title: "before".to_string(),
    });
    assert_eq!(page.editing(), Some((1, "before")));

    page.render(RenderOp::EditItemDone {
        id: 1,
        title: "after".to_string(),
    });
    assert_eq!(page.editing(), None);
    assert_eq!(page.rows()[0].title, "after");
}

#[test]
fn set_filter_highlights_the_active_link() {
    let mut page = PageView::new();
    page.render(RenderOp::SetFilter(Route::Active));

    assert_eq!(page.selected_filter(), Route::Active);
    let document = page.document();
    assert!(document.contains("<a href=\"#/active\" class=\"selected\">Active</a>"));
    assert!(document.contains("<a href=\"#/\">All</a>"));
}

#[test]
fn hidden_content_block_omits_the_entry_list() {
    let mut page = page_with(vec![todo(1, "invisible", false)]);
    page.render(RenderOp::ContentBlockVisibility { visible: false });

    assert!(!page.document().contains("todo-list"));
}

#[test]
fn document_escapes_user_titles() {
    let page = page_with(vec![todo(1, "<b>bold</b> & co", false)]);

    let document = page.document();
    assert!(document.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
    assert!(!document.contains("<b>bold</b>"));
}

#[test]
fn toggle_all_checkbox_mirrors_render_state() {
    let mut page = PageView::new();
    assert!(!page.toggle_all_checked());

    page.render(RenderOp::ToggleAll { checked: true });
    assert!(page.toggle_all_checked());
}
