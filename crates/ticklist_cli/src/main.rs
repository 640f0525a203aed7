//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire the full core stack against an in-memory list.
//! - Keep output deterministic for quick local sanity checks.

use ticklist_core::{LogNotifier, PageView, StoreResult, TodoApp, UiEvent};

fn main() {
    let app = TodoApp::open_in_memory("todos-ticklist", PageView::new(), LogNotifier);
    let mut app = match app {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to open todo list: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_demo(&mut app) {
        eprintln!("demo sequence failed: {err}");
        std::process::exit(1);
    }

    println!("ticklist_core version={}", ticklist_core::core_version());
    println!("{}", app.view().document());
}

fn run_demo(app: &mut TodoApp<PageView, LogNotifier>) -> StoreResult<()> {
    app.set_view("")?;
    app.dispatch(UiEvent::NewTodo {
        title: "Buy milk".to_string(),
    })?;
    app.dispatch(UiEvent::NewTodo {
        title: "Write the weekly report".to_string(),
    })?;
    app.dispatch(UiEvent::ItemToggle {
        id: 1,
        completed: true,
    })?;
    app.set_view("#/active")?;
    Ok(())
}
