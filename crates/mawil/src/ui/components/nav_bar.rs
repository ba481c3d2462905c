use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::domain::content::Institution;
use crate::domain::link::{HEADER_LINKS, active_header_index};
use crate::domain::page::PageDescriptor;
use crate::ui::Component;

/// Rows taken by the header, including its bottom border.
pub const NAV_BAR_HEIGHT: u16 = 3;
const APPLY_LABEL: &str = " Apply Now (a) ";

/// Site header with the institution name, navigation tabs, and the apply
/// shortcut.
pub struct NavBar<'a> {
    active_index: Option<usize>,
    institution: &'a Institution,
}

impl<'a> NavBar<'a> {
    /// Creates a header highlighting the tab that matches `page`.
    pub fn new(institution: &'a Institution, page: &PageDescriptor) -> Self {
        Self {
            active_index: active_header_index(page),
            institution,
        }
    }
}

impl Component for NavBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .padding(Padding::top(1));
        let inner_area = block.inner(area);
        f.render_widget(block, area);

        let apply_width = u16::try_from(APPLY_LABEL.len()).unwrap_or(u16::MAX);
        let [brand_area, tabs_area, apply_area] = Layout::horizontal([
            Constraint::Length(28),
            Constraint::Min(0),
            Constraint::Length(apply_width),
        ])
        .areas(inner_area);

        let brand = Line::from(vec![
            Span::styled(
                format!(" {}", self.institution.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", self.institution.subtitle.to_uppercase()),
                Style::default().fg(Color::Gray),
            ),
        ]);
        f.render_widget(Paragraph::new(brand), brand_area);
        f.render_widget(
            Paragraph::new(Line::from(tab_spans(self.active_index))),
            tabs_area,
        );
        f.render_widget(
            Paragraph::new(Span::styled(
                APPLY_LABEL,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            apply_area,
        );
    }
}

fn tab_spans(active_index: Option<usize>) -> Vec<Span<'static>> {
    HEADER_LINKS
        .iter()
        .enumerate()
        .map(|(index, (label, _))| {
            let label = format!(" {label} ");
            if Some(index) == active_index {
                Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
            } else {
                Span::styled(label, Style::default().fg(Color::Gray))
            }
        })
        .collect()
}
