use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::domain::content::ContentStore;
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};

const MANDATE: [&str; 4] = [
    "Provide accessible, high-quality instruction through structured academic programs in \
biological sciences.",
    "Foster a scholarly environment grounded in critical inquiry, observation, and ethical \
responsibility.",
    "Maintain rigorous assessment standards to ensure student competency in scientific methods.",
    "Operate with full transparency in governance and administration as a public-benefit entity.",
];

/// Institution profile with mandate and founding history.
pub struct AboutPage<'a> {
    content: &'a ContentStore,
    scroll_offset: u16,
}

impl<'a> AboutPage<'a> {
    pub fn new(content: &'a ContentStore, scroll_offset: u16) -> Self {
        Self {
            content,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let institution = self.content.institution();
        let founder = self
            .content
            .governance()
            .board
            .first()
            .map_or("the founding board", |member| member.name.as_str());

        let mut lines = vec![
            document::title("About the Institution"),
            Line::from(""),
            document::paragraph(format!(
                "{} is an independent non-profit educational institution established to \
provide structured learning opportunities in Zoology and Environmental Sciences. We are \
committed to academic integrity, institutional transparency, and the educational advancement \
of our student body.",
                institution.name
            )),
        ];

        lines.extend(document::heading("Institutional Mandate"));
        lines.push(document::paragraph("Our mandate is to:"));
        lines.extend(MANDATE.iter().map(|item| document::bullet(*item)));

        lines.extend(document::heading("History & Founding"));
        lines.push(document::paragraph(format!(
            "Established in {year} by {founder}, {name} was founded with a vision to cultivate \
deep expertise in the biological sciences. The founder's leadership continues to guide the \
institution toward academic excellence.",
            year = institution.founded_year,
            name = institution.name,
        )));

        lines.extend(document::heading("Registered Office"));
        lines.push(document::paragraph(institution.address.one_line()));
        lines.push(document::muted(institution.license_number.clone()));

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::About,
            self.content,
        )));

        lines
    }
}

impl Page for AboutPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}
