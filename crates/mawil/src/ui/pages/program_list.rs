use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::domain::content::ContentStore;
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};

/// Catalog of program cards linking to their detail pages.
pub struct ProgramListPage<'a> {
    content: &'a ContentStore,
    scroll_offset: u16,
}

impl<'a> ProgramListPage<'a> {
    pub fn new(content: &'a ContentStore, scroll_offset: u16) -> Self {
        Self {
            content,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![document::title("Academic Programs")];

        for (index, program) in self.content.programs().iter().enumerate() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                program.level.to_uppercase(),
                Style::default().fg(Color::Yellow),
            )));
            lines.push(document::subheading(format!(
                "[{}] {}",
                index + 1,
                program.title
            )));
            lines.push(document::paragraph(program.overview.clone()));
            lines.push(document::muted(format!(
                "Duration: {}  |  Delivery: {}",
                program.duration, program.delivery
            )));
        }

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::ProgramList,
            self.content,
        )));

        lines
    }
}

impl Page for ProgramListPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}
