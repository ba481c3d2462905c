use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::assistant::{AssistantSession, QUICK_ACTIONS};
use crate::domain::chat::{ChatMessage, ChatRole};
use crate::ui::Component;
use crate::ui::icon::Icon;
use crate::ui::markdown::render_message;
use crate::ui::text_util::{truncate_with_ellipsis, wrap_styled_line};

const INPUT_HEIGHT: u16 = 3;
const INPUT_PROMPT: &str = "> ";
const MIN_PANEL_WIDTH: u16 = 40;
const PANEL_WIDTH_PERCENT: u16 = 45;

/// Assistant overlay docked to the right edge of the page body.
pub struct ChatPanel<'a> {
    is_focused: bool,
    session: &'a AssistantSession,
}

impl<'a> ChatPanel<'a> {
    pub fn new(session: &'a AssistantSession, is_focused: bool) -> Self {
        Self {
            is_focused,
            session,
        }
    }

    /// Returns the docked panel area inside `area`.
    fn panel_area(area: Rect) -> Rect {
        let scaled_width = u32::from(area.width) * u32::from(PANEL_WIDTH_PERCENT) / 100;
        let width = u16::try_from(scaled_width)
            .unwrap_or(area.width)
            .max(MIN_PANEL_WIDTH)
            .min(area.width);

        Rect::new(area.x + area.width - width, area.y, width, area.height)
    }

    /// Builds the wrapped transcript, ending with the thinking indicator
    /// while a request is outstanding.
    fn transcript_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for message in self.session.messages() {
            lines.push(role_line(message.role));
            lines.extend(message_lines(message, width));
            lines.push(Line::from(""));
        }

        if self.session.is_awaiting_response() {
            lines.push(Line::from(Span::styled(
                format!("{} Thinking...", Icon::current_spinner()),
                Style::default().fg(Color::Cyan),
            )));
        }

        lines
    }

    fn quick_action_lines(&self, width: usize) -> Vec<Line<'static>> {
        if !self.session.quick_actions_available() {
            return Vec::new();
        }

        let mut lines = vec![Line::from(Span::styled(
            "Quick questions",
            Style::default().fg(Color::Gray),
        ))];
        lines.extend(QUICK_ACTIONS.iter().enumerate().map(|(index, prompt)| {
            let number = format!("[F{}] ", index + 1);
            let label = truncate_with_ellipsis(prompt, width.saturating_sub(number.len()));

            Line::from(vec![
                Span::styled(number, Style::default().fg(Color::Yellow)),
                Span::raw(label),
            ])
        }));

        lines
    }

    fn border_color(&self) -> Color {
        if self.is_focused {
            Color::Cyan
        } else {
            Color::Gray
        }
    }
}

impl Component for ChatPanel<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let panel_area = Self::panel_area(area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color()))
            .title(Span::styled(
                format!(" {} Maw'il Assistant ", Icon::Chat),
                Style::default()
                    .fg(self.border_color())
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);
        let inner_area = block.inner(panel_area);

        f.render_widget(Clear, panel_area);
        f.render_widget(block, panel_area);

        let content_width = usize::from(inner_area.width.saturating_sub(2).max(1));
        let quick_action_lines = self.quick_action_lines(content_width);
        let quick_action_height = u16::try_from(quick_action_lines.len()).unwrap_or(u16::MAX);
        let [transcript_area, quick_action_area, input_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(quick_action_height),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .areas(inner_area);

        let transcript_lines = self.transcript_lines(content_width);
        let overflow = transcript_lines
            .len()
            .saturating_sub(usize::from(transcript_area.height));
        let scroll_offset = u16::try_from(overflow).unwrap_or(u16::MAX);
        f.render_widget(
            Paragraph::new(transcript_lines)
                .scroll((scroll_offset, 0))
                .block(Block::default().padding(Padding::horizontal(1))),
            transcript_area,
        );
        f.render_widget(
            Paragraph::new(quick_action_lines)
                .block(Block::default().padding(Padding::horizontal(1))),
            quick_action_area,
        );

        let input_block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let input_inner = input_block.inner(input_area);
        let visible_input = visible_input_tail(
            self.session.input(),
            usize::from(input_inner.width).saturating_sub(INPUT_PROMPT.len() + 2),
        );
        let input_line = Line::from(vec![
            Span::styled(format!(" {INPUT_PROMPT}"), Style::default().fg(Color::Cyan)),
            Span::raw(visible_input.clone()),
        ]);
        f.render_widget(Paragraph::new(input_line).block(input_block), input_area);

        if self.is_focused && input_inner.height > 0 {
            let cursor_offset = u16::try_from(1 + INPUT_PROMPT.len() + visible_input.width())
                .unwrap_or(u16::MAX)
                .min(input_inner.width.saturating_sub(1));
            f.set_cursor_position(Position::new(input_inner.x + cursor_offset, input_inner.y));
        }
    }
}

fn role_line(role: ChatRole) -> Line<'static> {
    let color = match role {
        ChatRole::User => Color::Yellow,
        ChatRole::Assistant => Color::Cyan,
    };

    Line::from(Span::styled(
        role.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Assistant text goes through the formatter; user text stays literal.
fn message_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    match message.role {
        ChatRole::Assistant => render_message(&message.text, width),
        ChatRole::User => wrap_styled_line(vec![Span::raw(message.text.clone())], width),
    }
}

/// Returns the end of `input` that fits in `max_width` columns.
fn visible_input_tail(input: &str, max_width: usize) -> String {
    let mut tail: Vec<char> = Vec::new();
    let mut width = 0;
    for character in input.chars().rev() {
        let character_width = character.to_string().width();
        if width + character_width > max_width {
            break;
        }
        tail.push(character);
        width += character_width;
    }

    tail.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::assistant::GREETING;

    fn line_text(line: &Line<'_>) -> String {
        line.spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    fn render_panel(session: &AssistantSession) -> String {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| ChatPanel::new(session, true).render(f, f.area()))
            .expect("failed to draw");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_transcript_lines_format_assistant_but_not_user_text() {
        // Arrange
        let mut session = AssistantSession::new("context".to_string());
        session.send("**literal**");
        session.receive("**Bold** reply");
        let panel = ChatPanel::new(&session, true);

        // Act
        let lines = panel.transcript_lines(50);

        // Assert
        let rendered: Vec<String> = lines.iter().map(line_text).collect();
        assert!(rendered.contains(&"**literal**".to_string()));
        assert!(rendered.contains(&"Bold reply".to_string()));
        assert_eq!(rendered[0], "Assistant");
        assert!(GREETING.starts_with(&rendered[1]));
    }

    #[test]
    fn test_render_shows_thinking_indicator_while_awaiting() {
        // Arrange
        let mut session = AssistantSession::new("context".to_string());
        session.send("How do I apply?");

        // Act
        let text = render_panel(&session);

        // Assert
        assert!(text.contains("Thinking..."));
        assert!(!text.contains("Quick questions"));
    }

    #[test]
    fn test_panel_area_handles_very_wide_terminals() {
        // Arrange
        let wide_area = Rect::new(0, 0, 2000, 40);
        let narrow_area = Rect::new(0, 0, 30, 10);

        // Act
        let wide_panel = ChatPanel::panel_area(wide_area);
        let narrow_panel = ChatPanel::panel_area(narrow_area);

        // Assert
        assert_eq!(wide_panel, Rect::new(1100, 0, 900, 40));
        assert_eq!(narrow_panel, narrow_area);
    }

    #[test]
    fn test_render_offers_quick_actions_for_new_session() {
        // Arrange
        let session = AssistantSession::new("context".to_string());

        // Act
        let text = render_panel(&session);

        // Assert
        assert!(text.contains("Quick questions"));
        assert!(text.contains("[F1] How do I apply?"));
    }

    #[test]
    fn test_visible_input_tail_keeps_end_of_long_input() {
        // Arrange
        let input = "What are the tuition fees?";

        // Act
        let tail = visible_input_tail(input, 10);

        // Assert
        assert_eq!(tail, "tion fees?");
        assert_eq!(visible_input_tail("short", 10), "short");
    }
}
