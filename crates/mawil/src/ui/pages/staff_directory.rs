use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::domain::content::ContentStore;
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};
use crate::ui::icon::Icon;

/// Staff roster grouped by department in first-appearance order.
pub struct StaffDirectoryPage<'a> {
    content: &'a ContentStore,
    scroll_offset: u16,
}

impl<'a> StaffDirectoryPage<'a> {
    pub fn new(content: &'a ContentStore, scroll_offset: u16) -> Self {
        Self {
            content,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            document::title("Faculty & Staff Directory"),
            Line::from(""),
            document::paragraph(
                "Our institution is supported by a dedicated team of administrators, educators, \
and researchers committed to the advancement of zoological sciences and student success.",
            ),
        ];

        for department in self.content.departments() {
            lines.extend(document::heading(department));
            for member in self.content.staff_in_department(department) {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {}", member.name),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("  {}", member.role),
                        Style::default().fg(Color::Yellow),
                    ),
                ]));
                lines.push(document::muted(format!(
                    "    {}  {} {}",
                    member.credentials,
                    Icon::Mail,
                    member.email
                )));
            }
        }

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::StaffDirectory,
            self.content,
        )));

        lines
    }
}

impl Page for StaffDirectoryPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}
