//! Building blocks shared by the page views.
//!
//! Pages assemble `Vec<Line>` documents from these helpers and render them
//! through [`render_document`], which handles wrapping and scrolling.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::domain::link::PageLink;
use crate::ui::icon::Icon;

const COLUMN_GAP: usize = 3;

/// Renders `lines` into `area`, wrapped and scrolled by `scroll_offset`.
pub fn render_document(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>, scroll_offset: u16) {
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset, 0))
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)));

    f.render_widget(paragraph, area);
}

/// Page title line.
pub fn title(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Section heading preceded by a blank line.
pub fn heading(text: impl Into<String>) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            text.into(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

/// Emphasized subheading, used for cards and sub-sections.
pub fn subheading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

pub fn paragraph(text: impl Into<String>) -> Line<'static> {
    Line::from(text.into())
}

/// Secondary text such as captions and metadata.
pub fn muted(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(Color::Gray)))
}

pub fn bullet(text: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {} ", Icon::Bullet), Style::default().fg(Color::Cyan)),
        Span::raw(text.into()),
    ])
}

/// `label: value` fact line with a bold label.
pub fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.into()),
    ])
}

/// Renders a header row, a rule, and left-aligned rows padded to column
/// widths.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let column_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let header_cells: Vec<String> = headers.iter().map(ToString::to_string).collect();
    let rule_width = column_widths.iter().sum::<usize>()
        + COLUMN_GAP * column_widths.len().saturating_sub(1);

    let mut lines = vec![
        Line::from(Span::styled(
            table_row(&header_cells, &column_widths),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        muted("─".repeat(rule_width)),
    ];
    lines.extend(
        rows.iter()
            .map(|row| Line::from(table_row(row, &column_widths))),
    );

    lines
}

fn table_row(cells: &[String], column_widths: &[usize]) -> String {
    let gap = " ".repeat(COLUMN_GAP);

    cells
        .iter()
        .zip(column_widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join(&gap)
        .trim_end()
        .to_string()
}

/// Numbered link list followed with digit keys.
pub fn link_list(links: &[PageLink]) -> Vec<Line<'static>> {
    if links.is_empty() {
        return Vec::new();
    }

    let mut lines = heading("Links");
    lines.extend(links.iter().enumerate().map(|(index, link)| {
        Line::from(vec![
            Span::styled(
                format!("  [{}] ", index + 1),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(link.label.clone()),
            Span::styled(
                format!("  {} {}", Icon::Pointer, link.path),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn test_table_pads_columns_to_widest_cell() {
        // Arrange
        let headers = ["Code", "Title"];
        let rows = vec![
            vec!["CB101".to_string(), "Ecology".to_string()],
            vec!["CB2".to_string(), "Field Methods".to_string()],
        ];

        // Act
        let lines = table(&headers, &rows);

        // Assert
        let rendered: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(rendered[0], "Code    Title");
        assert_eq!(rendered[1], "─".repeat(21));
        assert_eq!(rendered[2], "CB101   Ecology");
        assert_eq!(rendered[3], "CB2     Field Methods");
    }

    #[test]
    fn test_link_list_numbers_from_one() {
        // Arrange
        let links = vec![
            PageLink {
                label: "Admissions".to_string(),
                path: "/admissions".to_string(),
            },
            PageLink {
                label: "Contact Us".to_string(),
                path: "/contact".to_string(),
            },
        ];

        // Act
        let lines = link_list(&links);

        // Assert
        assert_eq!(line_text(&lines[1]), "Links");
        assert_eq!(line_text(&lines[2]), "  [1] Admissions  › /admissions");
        assert_eq!(line_text(&lines[3]), "  [2] Contact Us  › /contact");
    }

    #[test]
    fn test_link_list_empty_renders_nothing() {
        // Arrange
        let links: Vec<PageLink> = Vec::new();

        // Act
        let lines = link_list(&links);

        // Assert
        assert!(lines.is_empty());
    }
}
