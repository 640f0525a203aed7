//! Pure HTML-fragment builders for the todo page.
//!
//! # Responsibility
//! - Turn todo records into entry-list markup.
//! - Build the counter line and clear-completed label.
//!
//! # Invariants
//! - Only title text is escaped; ids and class names pass through verbatim.
//! - Output order always follows input order.

use crate::model::todo::Todo;
use once_cell::sync::Lazy;
use regex::Regex;

const ITEM_TEMPLATE: &str = concat!(
    "<li data-id=\"{{id}}\" class=\"{{completed}}\">",
    "<div class=\"view\">",
    "<input class=\"toggle\" type=\"checkbox\" {{checked}}>",
    "<label>{{title}}</label>",
    "<button class=\"destroy\"></button>",
    "</div>",
    "</li>"
);

static HAS_UNESCAPED_HTML_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("[&<>\"'`]").expect("valid escape detection regex"));

/// Renders the `<li>` markup for every record, concatenated in input order.
pub fn render_list(todos: &[Todo]) -> String {
    let mut view = String::new();
    for todo in todos {
        view.push_str(&render_item(todo));
    }
    view
}

/// Renders the `<li>` markup for one record.
pub fn render_item(todo: &Todo) -> String {
    let (completed, checked) = if todo.completed {
        ("completed", "checked")
    } else {
        ("", "")
    };

    // Title is substituted last so escaped user text is never re-scanned
    // for placeholders.
    ITEM_TEMPLATE
        .replacen("{{id}}", &todo.id.to_string(), 1)
        .replacen("{{completed}}", completed, 1)
        .replacen("{{checked}}", checked, 1)
        .replacen("{{title}}", &escape_html(&todo.title), 1)
}

/// Counter line for remaining items, pluralized unless exactly one.
pub fn item_counter(active: usize) -> String {
    let plural = if active == 1 { "" } else { "s" };
    format!("<strong>{active}</strong> item{plural} left")
}

/// Label for the clear-completed control; empty hides the control.
pub fn clear_completed_label(completed: usize) -> String {
    if completed > 0 {
        "Clear completed".to_string()
    } else {
        String::new()
    }
}

/// Escapes ``& < > " ' ` `` with their HTML entity equivalents.
pub fn escape_html(text: &str) -> String {
    if !HAS_UNESCAPED_HTML_RE.is_match(text) {
        return text.to_string();
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '`' => escaped.push_str("&#x60;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{clear_completed_label, escape_html, item_counter, render_item, render_list};
    use crate::model::todo::Todo;

    fn todo(id: u64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn item_markup_carries_id_class_and_checked_state() {
        let markup = render_item(&todo(42, "ship it", true));
        assert!(markup.contains("data-id=\"42\""));
        assert!(markup.contains("class=\"completed\""));
        assert!(markup.contains("type=\"checkbox\" checked"));
        assert!(markup.contains("<label>ship it</label>"));
    }

    #[test]
    fn active_item_has_empty_class_and_unchecked_box() {
        let markup = render_item(&todo(1, "pending", false));
        assert!(markup.contains("class=\"\""));
        assert!(markup.contains("type=\"checkbox\" >"));
    }

    #[test]
    fn list_concatenates_in_input_order() {
        let markup = render_list(&[todo(1, "first", false), todo(2, "second", false)]);
        let first = markup.find("first").unwrap();
        let second = markup.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn title_text_is_escaped() {
        let markup = render_item(&todo(1, "<script>&\"'`", false));
        assert!(markup.contains("<label>&lt;script&gt;&amp;&quot;&#x27;&#x60;</label>"));
    }

    #[test]
    fn placeholder_text_in_titles_is_not_substituted() {
        let markup = render_item(&todo(1, "{{completed}}", false));
        assert!(markup.contains("<label>{{completed}}</label>"));
    }

    #[test]
    fn escape_leaves_plain_text_untouched() {
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn counter_pluralizes_except_for_exactly_one() {
        assert_eq!(item_counter(0), "<strong>0</strong> items left");
        assert_eq!(item_counter(1), "<strong>1</strong> item left");
        assert_eq!(item_counter(2), "<strong>2</strong> items left");
    }

    #[test]
    fn clear_completed_label_is_empty_without_completed_items() {
        assert_eq!(clear_completed_label(0), "");
        assert_eq!(clear_completed_label(3), "Clear completed");
    }
}
