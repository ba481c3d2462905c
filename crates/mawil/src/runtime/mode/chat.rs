use crossterm::event::{KeyCode, KeyEvent};

use crate::app::assistant::QUICK_ACTIONS;
use crate::app::{App, AppMode};
use crate::runtime::EventResult;

/// Handles key input while the assistant panel is focused.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.assistant.close();
            app.mode = AppMode::Browse;
        }
        KeyCode::Tab => app.mode = AppMode::Browse,
        KeyCode::Enter => app.submit_assistant_input(),
        KeyCode::Backspace => app.assistant.pop_input_char(),
        KeyCode::Char(character) => app.assistant.push_input_char(character),
        KeyCode::F(number) => {
            if let Some(index) = quick_action_index(number) {
                app.send_quick_action(index);
            }
        }
        _ => {}
    }

    EventResult::Continue
}

/// Maps `F1`-`F4` to zero-based quick action indexes.
fn quick_action_index(number: u8) -> Option<usize> {
    let index = usize::from(number).checked_sub(1)?;

    (index < QUICK_ACTIONS.len()).then_some(index)
}
