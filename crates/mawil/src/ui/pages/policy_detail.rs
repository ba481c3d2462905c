use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::domain::content::{ContentStore, PolicyBlock, PolicyDocument};
use crate::domain::link::page_links;
use crate::domain::message_format::{InlineSpan, parse_inline};
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};
use crate::ui::icon::Icon;

const POLICY_METADATA: &str = "Last Updated: August 2024 | Authority: Office of Academic Affairs";

/// Full text of one policy document; unknown slugs show a not-found
/// message.
pub struct PolicyDetailPage<'a> {
    content: &'a ContentStore,
    scroll_offset: u16,
    slug: &'a str,
}

impl<'a> PolicyDetailPage<'a> {
    pub fn new(content: &'a ContentStore, slug: &'a str, scroll_offset: u16) -> Self {
        Self {
            content,
            scroll_offset,
            slug,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = match self.content.policy(self.slug) {
            Some(policy) => policy_lines(policy),
            None => vec![
                document::title("Policy Not Found"),
                Line::from(""),
                document::paragraph("The requested policy document could not be located."),
            ],
        };

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::PolicyDetail(self.slug.to_string()),
            self.content,
        )));

        lines
    }
}

impl Page for PolicyDetailPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}

fn policy_lines(policy: &PolicyDocument) -> Vec<Line<'static>> {
    let mut lines = vec![
        document::title(policy.title.clone()),
        document::muted(POLICY_METADATA),
    ];

    for section in &policy.sections {
        lines.extend(document::heading(section.heading.clone()));
        for block in &section.blocks {
            lines.extend(block_lines(block));
        }
    }

    lines
}

fn block_lines(block: &PolicyBlock) -> Vec<Line<'static>> {
    match block {
        PolicyBlock::Paragraph { text } => vec![Line::from(emphasized_spans(text))],
        PolicyBlock::List { items } => items
            .iter()
            .map(|item| {
                let mut spans = vec![Span::styled(
                    format!("  {} ", Icon::Bullet),
                    Style::default().fg(Color::Cyan),
                )];
                spans.extend(emphasized_spans(item));

                Line::from(spans)
            })
            .collect(),
        PolicyBlock::Table { headers, rows } => {
            let headers: Vec<&str> = headers.iter().map(String::as_str).collect();

            document::table(&headers, rows)
        }
    }
}

/// Policy text marks defined terms with `**` pairs.
fn emphasized_spans(text: &str) -> Vec<Span<'static>> {
    parse_inline(text)
        .into_iter()
        .map(|span| match span {
            InlineSpan::Plain(text) => Span::raw(text),
            InlineSpan::Emphasis(text) => {
                Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
            }
        })
        .collect()
}
