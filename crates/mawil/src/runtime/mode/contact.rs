use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppMode};
use crate::runtime::EventResult;

/// Handles key input while the contact inquiry form is focused.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => app.mode = AppMode::Browse,
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.contact_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.contact_form.focus_previous(),
        KeyCode::Backspace => app.contact_form.pop_char(),
        KeyCode::Char(character) => app.contact_form.push_char(character),
        _ => {}
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::contact::ContactField;
    use crate::runtime::test_support::{key, new_test_app};

    fn form_app() -> App {
        let mut app = new_test_app();
        app.navigate("/contact");
        app.mode = AppMode::ContactForm;

        app
    }

    #[test]
    fn test_handle_typing_fills_focused_field() {
        // Arrange
        let mut app = form_app();

        // Act
        handle(&mut app, key(KeyCode::Char('A')));
        handle(&mut app, key(KeyCode::Char('l')));
        handle(&mut app, key(KeyCode::Tab));
        handle(&mut app, key(KeyCode::Char('q')));
        handle(&mut app, key(KeyCode::Backspace));
        handle(&mut app, key(KeyCode::Char('@')));

        // Assert
        assert_eq!(app.contact_form.value(ContactField::Name), "Al");
        assert_eq!(app.contact_form.value(ContactField::Email), "@");
        assert_eq!(app.mode, AppMode::ContactForm);
    }

    #[test]
    fn test_handle_back_tab_wraps_to_message() {
        // Arrange
        let mut app = form_app();

        // Act
        handle(&mut app, key(KeyCode::BackTab));

        // Assert
        assert_eq!(app.contact_form.focused_field(), ContactField::Message);
    }

    #[test]
    fn test_handle_esc_keeps_draft() {
        // Arrange
        let mut app = form_app();
        handle(&mut app, key(KeyCode::Char('N')));

        // Act
        handle(&mut app, key(KeyCode::Esc));

        // Assert
        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.contact_form.value(ContactField::Name), "N");
    }
}
