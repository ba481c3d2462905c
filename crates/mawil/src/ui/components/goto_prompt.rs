use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ui::Component;

const PROMPT_LABEL: &str = " Go to: ";

/// Single-line prompt accepting a raw path.
pub struct GoToPrompt<'a> {
    input: &'a str,
}

impl<'a> GoToPrompt<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }
}

impl Component for GoToPrompt<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                PROMPT_LABEL,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.input.to_string()),
        ]);
        f.render_widget(
            Paragraph::new(line).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
            area,
        );

        let cursor_offset = u16::try_from(PROMPT_LABEL.width() + self.input.width())
            .unwrap_or(u16::MAX)
            .min(area.width.saturating_sub(1));
        f.set_cursor_position(Position::new(area.x + cursor_offset, area.y));
    }
}
