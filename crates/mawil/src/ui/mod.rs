//! Terminal rendering of the site chrome, pages, and overlays.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::{App, AppMode};

pub mod components;
pub mod document;
pub mod icon;
pub mod markdown;
pub mod pages;
pub mod router;
pub mod text_util;

use components::chat_panel::ChatPanel;
use components::footer_bar::{FOOTER_HEIGHT, FooterBar};
use components::goto_prompt::GoToPrompt;
use components::help_bar::HelpBar;
use components::nav_bar::{NAV_BAR_HEIGHT, NavBar};
use components::site_notice::SiteNotice;

/// Stateless widget rendered into a fixed area.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Full-body view that may keep render-time state.
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// Renders one frame for the current app state.
pub fn render(f: &mut Frame, app: &App) {
    let [header_area, notice_area, body_area, footer_area, help_area] = Layout::vertical([
        Constraint::Length(NAV_BAR_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(f.area());
    let content = app.content();
    let page = app.page();

    NavBar::new(content.institution(), &page).render(f, header_area);
    SiteNotice::new(&content.institution().email).render(f, notice_area);
    router::render_page(f, body_area, app, &page);
    FooterBar::new(content.institution()).render(f, footer_area);

    if let AppMode::GoTo { input } = &app.mode {
        GoToPrompt::new(input).render(f, help_area);
    } else {
        HelpBar::new(&app.mode, &page, app.assistant.is_open()).render(f, help_area);
    }

    if app.assistant.is_open() {
        ChatPanel::new(&app.assistant, app.mode == AppMode::Chat).render(f, body_area);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::domain::content::ContentStore;
    use crate::infra::text_generator::MockTextGenerator;

    fn test_app() -> App {
        let content =
            Arc::new(ContentStore::load_embedded().expect("embedded content should parse"));

        App::new(content, Arc::new(MockTextGenerator::new()), Duration::from_secs(5))
    }

    fn render_to_text(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| render(f, app))
            .expect("failed to draw frame");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_home_shows_chrome_and_hero() {
        // Arrange
        let app = test_app();

        // Act
        let text = render_to_text(&app, 120, 50);

        // Assert
        assert!(text.contains("Apply Now"));
        assert!(text.contains("Advancing Knowledge"));
        assert!(text.contains("official Maw'il Institute website"));
        assert!(text.contains("Grievance Procedures"));
    }

    #[test]
    fn test_render_open_chat_panel_overlays_transcript() {
        // Arrange
        let mut app = test_app();
        app.assistant.open();
        app.mode = AppMode::Chat;

        // Act
        let text = render_to_text(&app, 120, 50);

        // Assert
        assert!(text.contains("Maw'il Assistant"));
        assert!(text.contains("Hello!"));
        assert!(text.contains("How do I apply?"));
    }

    #[test]
    fn test_render_goto_prompt_replaces_help_line() {
        // Arrange
        let mut app = test_app();
        app.mode = AppMode::GoTo {
            input: "/staff".to_string(),
        };

        // Act
        let text = render_to_text(&app, 120, 50);

        // Assert
        assert!(text.contains("Go to: /staff"));
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        // Arrange
        let mut app = test_app();
        app.assistant.open();
        app.navigate("/policies/assessment");

        // Act
        let text = render_to_text(&app, 20, 6);

        // Assert
        assert!(!text.is_empty());
    }
}
