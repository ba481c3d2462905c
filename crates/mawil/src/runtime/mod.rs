//! Key-event dispatch for the interactive terminal loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::app::{App, AppMode};

pub mod mode;

/// Outcome of handling one terminal event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventResult {
    Continue,
    Quit,
}

/// Routes `key` to the handler for the current [`AppMode`].
///
/// `Ctrl+C` quits from every mode; key release and repeat events are
/// ignored.
pub fn handle_key(app: &mut App, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Continue;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Quit;
    }

    debug!(code = ?key.code, mode = ?app.mode, "handling key");

    match app.mode {
        AppMode::Browse => mode::browse::handle(app, key),
        AppMode::GoTo { .. } => mode::goto::handle(app, key),
        AppMode::Chat => mode::chat::handle(app, key),
        AppMode::ContactForm => mode::contact::handle(app, key),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::domain::content::ContentStore;
    use crate::infra::text_generator::MockTextGenerator;

    /// Builds an app whose text generator must not be called.
    pub(crate) fn new_test_app() -> App {
        let content =
            Arc::new(ContentStore::load_embedded().expect("embedded content should parse"));

        App::new(
            content,
            Arc::new(MockTextGenerator::new()),
            Duration::from_secs(5),
        )
    }

    pub(crate) fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }
}
