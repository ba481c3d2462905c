use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;
use crate::ui::icon::Icon;

/// One-line notice that the site is official and still being updated.
pub struct SiteNotice<'a> {
    contact_email: &'a str,
}

impl<'a> SiteNotice<'a> {
    pub fn new(contact_email: &'a str) -> Self {
        Self { contact_email }
    }

    fn notice_text(&self) -> String {
        format!(
            "You are viewing the official Maw'il Institute website. Some sections are \
currently being updated as new institutional information is published. For official \
enquiries, contact {}",
            self.contact_email
        )
    }
}

impl Component for SiteNotice<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} Site Notice ", Icon::Notice),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(self.notice_text(), Style::default().fg(Color::Yellow)),
        ]);

        f.render_widget(Paragraph::new(line), area);
    }
}
