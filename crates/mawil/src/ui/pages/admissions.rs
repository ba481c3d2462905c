use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::domain::content::ContentStore;
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};

/// Entry requirements, tuition note, and the numbered application steps.
pub struct AdmissionsPage<'a> {
    content: &'a ContentStore,
    scroll_offset: u16,
}

impl<'a> AdmissionsPage<'a> {
    pub fn new(content: &'a ContentStore, scroll_offset: u16) -> Self {
        Self {
            content,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let admissions = self.content.admissions();
        let mut lines = vec![document::title("Admissions & Enrollment")];

        lines.extend(document::heading("Entry Requirements"));
        lines.extend(
            admissions
                .requirements
                .iter()
                .map(|requirement| document::bullet(requirement.clone())),
        );

        lines.extend(document::heading("Tuition & Fees"));
        lines.push(document::paragraph(admissions.tuition_note.clone()));

        lines.extend(document::heading("Application Process"));
        lines.extend(admissions.steps.iter().enumerate().map(|(index, step)| {
            Line::from(vec![
                Span::styled(
                    format!("  ({}) ", index + 1),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(step.clone()),
            ])
        }));
        lines.push(Line::from(""));
        lines.push(document::muted(format!(
            "To begin an application, email {}.",
            self.content.institution().email
        )));

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::AdmissionsInfo,
            self.content,
        )));

        lines
    }
}

impl Page for AdmissionsPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}
