use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::domain::content::{ContentStore, Program};
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};

const CURRICULUM_HEADERS: [&str; 3] = ["Code", "Module", "Credits"];

/// Program facts, curriculum, and outcomes; unknown ids show a not-found
/// message.
pub struct ProgramDetailPage<'a> {
    content: &'a ContentStore,
    program_id: &'a str,
    scroll_offset: u16,
}

impl<'a> ProgramDetailPage<'a> {
    pub fn new(content: &'a ContentStore, program_id: &'a str, scroll_offset: u16) -> Self {
        Self {
            content,
            program_id,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = match self.content.program(self.program_id) {
            Some(program) => program_lines(program),
            None => vec![
                document::title("Program not found"),
                Line::from(""),
                document::paragraph(format!(
                    "No program is published under the identifier \"{}\".",
                    self.program_id
                )),
            ],
        };

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::ProgramDetail(self.program_id.to_string()),
            self.content,
        )));

        lines
    }
}

impl Page for ProgramDetailPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}

fn program_lines(program: &Program) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            program.level.to_uppercase(),
            Style::default().fg(Color::Yellow),
        )),
        document::title(program.title.clone()),
        Line::from(""),
        document::paragraph(program.overview.clone()),
        Line::from(""),
        document::field("Duration", program.duration.clone()),
        document::field("Delivery Mode", program.delivery.clone()),
        document::field("Prerequisites", program.prerequisites.clone()),
    ];

    lines.extend(document::heading("Curriculum Structure"));
    let rows: Vec<Vec<String>> = program
        .modules
        .iter()
        .map(|module| {
            vec![
                module.code.clone(),
                module.title.clone(),
                format!("{} Credits", module.credits),
            ]
        })
        .collect();
    lines.extend(document::table(&CURRICULUM_HEADERS, &rows));
    lines.push(document::muted(format!(
        "Total: {} Credits",
        program.total_credits()
    )));

    lines.extend(document::heading("Learning Outcomes"));
    lines.extend(
        program
            .outcomes
            .iter()
            .map(|outcome| document::bullet(outcome.clone())),
    );

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pages::test_support::{embedded_store, lines_text, render_page};

    #[test]
    fn test_lines_for_known_program_list_modules_and_outcomes() {
        // Arrange
        let content = embedded_store();
        let program = content
            .program("conservation-bio")
            .expect("program should exist");
        let page = ProgramDetailPage::new(&content, "conservation-bio", 0);

        // Act
        let lines = lines_text(&page.lines());

        // Assert
        assert!(lines.contains(&program.title));
        for module in &program.modules {
            assert!(
                lines
                    .iter()
                    .any(|line| line.starts_with(&module.code) && line.contains(&module.title))
            );
        }
        assert_eq!(
            lines.iter().filter(|line| line.starts_with("  • ")).count(),
            program.outcomes.len()
        );
    }

    #[test]
    fn test_render_unknown_program_shows_not_found() {
        // Arrange
        let content = embedded_store();
        let mut page = ProgramDetailPage::new(&content, "astrophysics", 0);

        // Act
        let text = render_page(&mut page, 80, 20);

        // Assert
        assert!(text.contains("Program not found"));
        assert!(text.contains("Back to Programs"));
    }

    #[test]
    fn test_render_empty_program_id_shows_not_found() {
        // Arrange
        let content = embedded_store();
        let mut page = ProgramDetailPage::new(&content, "", 0);

        // Act
        let text = render_page(&mut page, 80, 20);

        // Assert
        assert!(text.contains("Program not found"));
    }
}
