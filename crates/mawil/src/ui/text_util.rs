use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Truncate text to `max_width` display columns and append `...` when it
/// overflows.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if text.width() <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let visible_width = max_width - 3;
    let mut truncated = String::new();
    let mut current_width = 0;
    for character in text.chars() {
        let character_width = character.to_string().width();
        if current_width + character_width > visible_width {
            break;
        }
        truncated.push(character);
        current_width += character_width;
    }

    format!("{truncated}...")
}

/// Word-wraps a sequence of styled spans into multiple lines at the given
/// width.
///
/// Span styles are preserved across line breaks, and widths are measured in
/// terminal columns so Arabic and other wide text wraps correctly.
pub fn wrap_styled_line(spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![Line::from(spans)];
    }

    let mut wrapped_lines: Vec<Line<'static>> = Vec::new();
    let mut current_spans: Vec<Span<'static>> = Vec::new();
    let mut current_width: usize = 0;
    let mut needs_space = false;

    for span in spans {
        let style = span.style;
        let content = span.content.into_owned();
        // Spans starting or ending in whitespace separate words across spans.
        if content.starts_with(char::is_whitespace) {
            needs_space = true;
        }

        for word in content.split_whitespace() {
            let word_width = word.width();
            let additional_space_width = usize::from(needs_space && current_width > 0);

            if current_width + additional_space_width + word_width > width
                && !current_spans.is_empty()
            {
                wrapped_lines.push(Line::from(std::mem::take(&mut current_spans)));
                current_width = 0;
            }

            if needs_space && current_width > 0 {
                current_spans.push(Span::styled(" ".to_string(), style));
                current_width += 1;
            }

            current_spans.push(Span::styled(word.to_string(), style));
            current_width += word_width;
            needs_space = true;
        }

        needs_space = content.ends_with(char::is_whitespace);
    }

    if !current_spans.is_empty() {
        wrapped_lines.push(Line::from(current_spans));
    }

    if wrapped_lines.is_empty() {
        wrapped_lines.push(Line::from(""));
    }

    wrapped_lines
}
