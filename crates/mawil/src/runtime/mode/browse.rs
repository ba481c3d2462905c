use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppMode};
use crate::domain::link::{APPLY_PATH, HEADER_LINKS, MAX_NUMBERED_LINKS, active_header_index};
use crate::domain::page::PageDescriptor;
use crate::runtime::EventResult;

const PAGE_SCROLL_LINES: u16 = 10;

/// Handles key input while the app is in `AppMode::Browse`.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Tab => cycle_header_tab(app, true),
        KeyCode::BackTab => cycle_header_tab(app, false),
        KeyCode::Char(':' | 'g') => {
            app.mode = AppMode::GoTo {
                input: String::new(),
            };
        }
        KeyCode::Char('a') => app.navigate(APPLY_PATH),
        KeyCode::Char('c') => {
            app.assistant.toggle();
            if app.assistant.is_open() {
                app.mode = AppMode::Chat;
            }
        }
        KeyCode::Char('e') if app.page() == PageDescriptor::Contact => {
            app.mode = AppMode::ContactForm;
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(1),
        KeyCode::PageDown => app.scroll_down(PAGE_SCROLL_LINES),
        KeyCode::PageUp => app.scroll_up(PAGE_SCROLL_LINES),
        KeyCode::Char(character) if key.modifiers == KeyModifiers::NONE => {
            if let Some(index) = link_index(character) {
                app.follow_link(index);
            }
        }
        _ => {}
    }

    EventResult::Continue
}

/// Moves to the neighboring header tab, starting from the ends when no tab is
/// active.
fn cycle_header_tab(app: &mut App, is_forward: bool) {
    let tab_count = HEADER_LINKS.len();
    let next_index = match (active_header_index(&app.page()), is_forward) {
        (Some(index), true) => (index + 1) % tab_count,
        (Some(index), false) => (index + tab_count - 1) % tab_count,
        (None, true) => 0,
        (None, false) => tab_count - 1,
    };

    let (_, path) = HEADER_LINKS[next_index];
    app.navigate(path);
}

/// Maps digit keys `1`-`9` to zero-based link indexes.
fn link_index(character: char) -> Option<usize> {
    let digit = usize::try_from(character.to_digit(10)?).ok()?;
    if digit == 0 || digit > MAX_NUMBERED_LINKS {
        return None;
    }

    Some(digit - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::test_support::{key, new_test_app};

    #[test]
    fn test_handle_q_quits() {
        // Arrange
        let mut app = new_test_app();

        // Act
        let event_result = handle(&mut app, key(KeyCode::Char('q')));

        // Assert
        assert_eq!(event_result, EventResult::Quit);
    }

    #[test]
    fn test_handle_tab_cycles_header_tabs_and_wraps() {
        // Arrange
        let mut app = new_test_app();
        app.navigate("/contact");

        // Act
        handle(&mut app, key(KeyCode::Tab));
        let after_wrap = app.navigation().current_path().to_string();
        handle(&mut app, key(KeyCode::BackTab));

        // Assert
        assert_eq!(after_wrap, "/");
        assert_eq!(app.navigation().current_path(), "/contact");
    }

    #[test]
    fn test_handle_tab_from_program_detail_moves_past_programs() {
        // Arrange
        let mut app = new_test_app();
        app.navigate("/programs/marine-ecosystems");

        // Act
        handle(&mut app, key(KeyCode::Tab));

        // Assert
        assert_eq!(app.navigation().current_path(), "/admissions");
    }

    #[test]
    fn test_handle_tab_from_page_without_tab_starts_at_home() {
        // Arrange
        let mut app = new_test_app();
        app.navigate("/staff");

        // Act
        handle(&mut app, key(KeyCode::Tab));

        // Assert
        assert_eq!(app.navigation().current_path(), "/");
    }

    #[test]
    fn test_handle_digit_follows_page_link() {
        // Arrange
        let mut app = new_test_app();
        app.navigate("/policies");

        // Act
        handle(&mut app, key(KeyCode::Char('2')));

        // Assert
        assert_eq!(app.navigation().current_path(), "/policies/assessment");
    }

    #[test]
    fn test_handle_zero_and_missing_links_keep_path() {
        // Arrange
        let mut app = new_test_app();
        app.navigate("/contact");

        // Act
        handle(&mut app, key(KeyCode::Char('0')));
        handle(&mut app, key(KeyCode::Char('9')));

        // Assert
        assert_eq!(app.navigation().current_path(), "/contact");
    }

    #[test]
    fn test_handle_c_opens_chat_and_closes_again() {
        // Arrange
        let mut app = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::Char('c')));
        let opened_mode = app.mode.clone();
        app.mode = AppMode::Browse;
        handle(&mut app, key(KeyCode::Char('c')));

        // Assert
        assert_eq!(opened_mode, AppMode::Chat);
        assert!(!app.assistant.is_open());
        assert_eq!(app.mode, AppMode::Browse);
    }

    #[test]
    fn test_handle_e_enters_form_only_on_contact_page() {
        // Arrange
        let mut app = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::Char('e')));
        let home_mode = app.mode.clone();
        app.navigate("/contact");
        handle(&mut app, key(KeyCode::Char('e')));

        // Assert
        assert_eq!(home_mode, AppMode::Browse);
        assert_eq!(app.mode, AppMode::ContactForm);
    }

    #[test]
    fn test_handle_scroll_keys_adjust_offset() {
        // Arrange
        let mut app = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::PageDown));
        handle(&mut app, key(KeyCode::Char('k')));

        // Assert
        assert_eq!(app.navigation().scroll_offset(), PAGE_SCROLL_LINES - 1);
    }

    #[test]
    fn test_handle_a_and_colon_open_apply_and_prompt() {
        // Arrange
        let mut app = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::Char('a')));
        handle(&mut app, key(KeyCode::Char(':')));

        // Assert
        assert_eq!(app.page(), PageDescriptor::AdmissionsInfo);
        assert_eq!(
            app.mode,
            AppMode::GoTo {
                input: String::new()
            }
        );
    }
}
