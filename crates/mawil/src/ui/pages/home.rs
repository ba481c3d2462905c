use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::domain::content::ContentStore;
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};

const HERO_TITLE: &str = "Advancing Knowledge Through Rigorous Scholarship";

/// Feature cards as `(title, summary)`; their targets are the page links.
const FEATURE_CARDS: [(&str, &str); 3] = [
    (
        "Scientific Excellence",
        "Structured curricula designed to meet rigorous learning outcomes in biological \
sciences.",
    ),
    (
        "Faculty & Research",
        "Led by qualified instructors and subject matter experts committed to pedagogical \
integrity.",
    ),
    (
        "Institutional Governance",
        "Operated under a transparent governance structure with established policies and \
oversight.",
    ),
];

/// Landing page with the hero statement and feature cards.
pub struct HomePage<'a> {
    content: &'a ContentStore,
    scroll_offset: u16,
}

impl<'a> HomePage<'a> {
    pub fn new(content: &'a ContentStore, scroll_offset: u16) -> Self {
        Self {
            content,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let institution = self.content.institution();
        let mut lines = vec![
            document::title(HERO_TITLE),
            Line::from(""),
            document::paragraph(format!(
                "{} is dedicated to providing structured educational programs and preserving \
our natural heritage.",
                institution.name
            )),
        ];

        for (title, summary) in FEATURE_CARDS {
            lines.extend(document::heading(title));
            lines.push(document::paragraph(summary));
        }

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::Home,
            self.content,
        )));

        lines
    }
}

impl Page for HomePage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}
