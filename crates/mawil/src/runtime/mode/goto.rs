use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppMode};
use crate::runtime::EventResult;

/// Handles key input while the go-to-path prompt is open.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::GoTo { input } = &mut app.mode else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Esc => app.mode = AppMode::Browse,
        KeyCode::Enter => {
            let path = prompt_path(input);
            app.mode = AppMode::Browse;
            if let Some(path) = path {
                app.navigate(path);
            }
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(character) => input.push(character),
        _ => {}
    }

    EventResult::Continue
}

/// Turns prompt input into a path, adding the leading `/` when omitted.
fn prompt_path(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if input.starts_with('/') {
        return Some(input.to_string());
    }

    Some(format!("/{input}"))
}
