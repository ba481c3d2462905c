use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::domain::content::ContentStore;
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};

/// Board of trustees and the organizational unit chart.
pub struct GovernancePage<'a> {
    content: &'a ContentStore,
    scroll_offset: u16,
}

impl<'a> GovernancePage<'a> {
    pub fn new(content: &'a ContentStore, scroll_offset: u16) -> Self {
        Self {
            content,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let governance = self.content.governance();
        let mut lines = vec![document::title("Governance & Leadership")];

        lines.extend(document::heading("Board of Trustees"));
        for member in &governance.board {
            lines.push(document::subheading(member.name.clone()));
            lines.push(document::muted(member.title.clone()));
            lines.push(document::paragraph(member.biography.clone()));
        }

        lines.extend(document::heading("Organizational Structure"));
        lines.push(document::subheading("Board of Trustees & Founder"));
        lines.extend(governance.units.iter().map(|unit| document::bullet(unit.clone())));
        lines.push(document::muted("Organizational Hierarchy valid as of 2026"));

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::Governance,
            self.content,
        )));

        lines
    }
}

impl Page for GovernancePage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}
