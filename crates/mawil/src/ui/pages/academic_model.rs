use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::domain::content::ContentStore;
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};

const CALENDAR_HEADERS: [&str; 4] = ["Term", "Start Date", "End Date", "Status"];

/// Delivery model, assessment philosophy, and the academic calendar.
pub struct AcademicModelPage<'a> {
    content: &'a ContentStore,
    scroll_offset: u16,
}

impl<'a> AcademicModelPage<'a> {
    pub fn new(content: &'a ContentStore, scroll_offset: u16) -> Self {
        Self {
            content,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![document::title("Academic Model & Delivery")];

        lines.extend(document::heading("Instructional Delivery"));
        lines.push(document::paragraph(format!(
            "{} utilizes a Hybrid delivery model. Courses are structured into modules requiring \
specific contact hours. Students access learning materials via our secure Learning Management \
System (LMS) and participate in scheduled field workshops.",
            self.content.institution().name
        )));

        lines.extend(document::heading("Assessment Philosophy"));
        lines.push(document::paragraph(
            "Student progress is measured through a combination of formative and summative \
assessments, including written examinations, research papers, and oral presentations. A minimum \
passing grade of 60% is required for certification.",
        ));

        lines.extend(document::heading("Academic Calendar"));
        let rows: Vec<Vec<String>> = self
            .content
            .calendar()
            .iter()
            .map(|term| {
                vec![
                    term.term.clone(),
                    term.start.clone(),
                    term.end.clone(),
                    term.status.clone(),
                ]
            })
            .collect();
        lines.extend(document::table(&CALENDAR_HEADERS, &rows));
        lines.push(document::muted("* Dates are subject to administrative change."));

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::AcademicModel,
            self.content,
        )));

        lines
    }
}

impl Page for AcademicModelPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}
