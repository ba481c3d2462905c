//! Terminal rendering of formatted assistant messages.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::domain::message_format::{InlineSpan, MessageBlock, format_message};
use crate::ui::icon::Icon;
use crate::ui::text_util::wrap_styled_line;

const BULLET_INDENT: &str = "  ";

/// Formats `text` and renders its blocks as wrapped, styled lines.
pub fn render_message(text: &str, width: usize) -> Vec<Line<'static>> {
    format_message(text)
        .into_iter()
        .flat_map(|block| render_block(block, width))
        .collect()
}

fn render_block(block: MessageBlock, width: usize) -> Vec<Line<'static>> {
    match block {
        MessageBlock::Spacer => vec![Line::from("")],
        MessageBlock::Header(text) => wrap_styled_line(
            vec![Span::styled(
                text,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )],
            width,
        ),
        MessageBlock::SubHeader(text) => wrap_styled_line(
            vec![Span::styled(
                text,
                Style::default().add_modifier(Modifier::BOLD),
            )],
            width,
        ),
        MessageBlock::Bullet(spans) => render_bullet(spans, width),
        MessageBlock::Numbered(spans) | MessageBlock::Paragraph(spans) => {
            wrap_styled_line(inline_spans(spans), width)
        }
    }
}

/// Renders a bullet with a hanging indent for wrapped continuation lines.
fn render_bullet(spans: Vec<InlineSpan>, width: usize) -> Vec<Line<'static>> {
    let content_width = width.saturating_sub(BULLET_INDENT.len()).max(1);
    let wrapped = wrap_styled_line(inline_spans(spans), content_width);

    wrapped
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let prefix = if index == 0 {
                Span::styled(format!("{} ", Icon::Bullet), Style::default().fg(Color::Cyan))
            } else {
                Span::raw(BULLET_INDENT)
            };
            let mut spans = vec![prefix];
            spans.extend(line.spans);

            Line::from(spans)
        })
        .collect()
}

fn inline_spans(spans: Vec<InlineSpan>) -> Vec<Span<'static>> {
    spans
        .into_iter()
        .map(|span| match span {
            InlineSpan::Plain(text) => Span::raw(text),
            InlineSpan::Emphasis(text) => {
                Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
            }
        })
        .collect()
}
