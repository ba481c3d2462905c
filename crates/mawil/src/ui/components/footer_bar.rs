use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use time::OffsetDateTime;

use crate::domain::content::Institution;
use crate::domain::link::FOOTER_GROUPS;
use crate::ui::Component;
use crate::ui::icon::Icon;

/// Rows taken by the footer, including its top border.
pub const FOOTER_HEIGHT: u16 = 5;
const LINK_SEPARATOR: &str = " · ";

/// Footer listing governance, academic, and policy links plus the contact
/// line.
pub struct FooterBar<'a> {
    institution: &'a Institution,
    year: i32,
}

impl<'a> FooterBar<'a> {
    /// Creates a footer stamped with the current UTC year.
    pub fn new(institution: &'a Institution) -> Self {
        Self {
            institution,
            year: OffsetDateTime::now_utc().year(),
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = FOOTER_GROUPS
            .iter()
            .map(|(heading, links)| {
                let labels = links
                    .iter()
                    .map(|(label, _)| *label)
                    .collect::<Vec<_>>()
                    .join(LINK_SEPARATOR);

                Line::from(vec![
                    Span::styled(
                        format!(" {:<12}", heading.to_uppercase()),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(labels),
                ])
            })
            .collect();

        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} {}", Icon::Mail, self.institution.email),
                Style::default().fg(Color::White),
            ),
            Span::raw(LINK_SEPARATOR),
            Span::raw(copyright_line(self.year, &self.institution.name)),
        ]));

        lines
    }
}

impl Component for FooterBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let footer = Paragraph::new(self.lines())
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::TOP));

        f.render_widget(footer, area);
    }
}

fn copyright_line(year: i32, institution_name: &str) -> String {
    format!("© {year} {institution_name} Institution. Non-Profit Educational Institution.")
}
