use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::domain::content::ContentStore;
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};

/// Index of institutional policy documents.
pub struct PolicyListPage<'a> {
    content: &'a ContentStore,
    scroll_offset: u16,
}

impl<'a> PolicyListPage<'a> {
    pub fn new(content: &'a ContentStore, scroll_offset: u16) -> Self {
        Self {
            content,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            document::title("Institutional Policies"),
            Line::from(""),
            document::paragraph(format!(
                "{} is governed by a comprehensive set of policies ensuring fair treatment, \
academic rigor, and institutional transparency. All students and faculty are required to adhere \
to these standards.",
                self.content.institution().name
            )),
        ];

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::PolicyList,
            self.content,
        )));

        lines
    }
}

impl Page for PolicyListPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pages::test_support::{embedded_store, lines_text};

    #[test]
    fn test_lines_link_every_policy_by_label() {
        // Arrange
        let content = embedded_store();
        let page = PolicyListPage::new(&content, 0);

        // Act
        let lines = lines_text(&page.lines());

        // Assert
        for (index, policy) in content.policies().iter().enumerate() {
            let expected = format!(
                "  [{}] {}  › /policies/{}",
                index + 1,
                policy.label,
                policy.slug
            );
            assert!(lines.contains(&expected), "missing `{expected}`");
        }
    }
}
