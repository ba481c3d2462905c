use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::domain::content::ContentStore;
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};

/// Fallback view for paths that resolve to no page.
pub struct NotFoundPage<'a> {
    content: &'a ContentStore,
    path: &'a str,
    scroll_offset: u16,
}

impl<'a> NotFoundPage<'a> {
    pub fn new(content: &'a ContentStore, path: &'a str, scroll_offset: u16) -> Self {
        Self {
            content,
            path,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            document::title("Page Not Found"),
            Line::from(""),
            document::paragraph(format!("No page exists at `{}`.", self.path)),
            document::muted("Check the address or return to the home page."),
        ];

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::NotFound(self.path.to_string()),
            self.content,
        )));

        lines
    }
}

impl Page for NotFoundPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}
