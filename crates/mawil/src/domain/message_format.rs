//! Restricted markdown subset used by assistant replies.
//!
//! Each input line becomes exactly one [`MessageBlock`]. Only `**` pairs
//! carry inline emphasis; everything else is literal text.

const BOLD_MARKER: &str = "**";
const SUB_HEADER_MARKER: &str = "###";
const HEADER_MARKER: &str = "##";
const BULLET_PREFIXES: [&str; 2] = ["* ", "- "];

/// Inline run of text inside a block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InlineSpan {
    Plain(String),
    Emphasis(String),
}

/// Display block produced for one line of message text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MessageBlock {
    Spacer,
    Header(String),
    SubHeader(String),
    Bullet(Vec<InlineSpan>),
    /// Numbered item keeping its original numeral.
    Numbered(Vec<InlineSpan>),
    Paragraph(Vec<InlineSpan>),
}

/// Converts `text` into display blocks, one per newline-delimited line.
pub fn format_message(text: &str) -> Vec<MessageBlock> {
    text.split('\n').map(format_line).collect()
}

fn format_line(line: &str) -> MessageBlock {
    let line = line.trim();
    if line.is_empty() {
        return MessageBlock::Spacer;
    }

    if let Some(rest) = line.strip_prefix(SUB_HEADER_MARKER) {
        return MessageBlock::SubHeader(rest.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix(HEADER_MARKER) {
        return MessageBlock::Header(rest.trim().to_string());
    }

    if let Some(rest) = BULLET_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(*prefix))
    {
        return MessageBlock::Bullet(parse_inline(rest));
    }

    if is_numbered_item(line) {
        return MessageBlock::Numbered(parse_inline(line));
    }

    MessageBlock::Paragraph(parse_inline(line))
}

/// Returns `true` for lines shaped like `<digits>. <text>`.
fn is_numbered_item(line: &str) -> bool {
    let digits_end = line
        .char_indices()
        .find(|(_, character)| !character.is_ascii_digit())
        .map_or(line.len(), |(index, _)| index);
    if digits_end == 0 {
        return false;
    }

    let mut rest = line[digits_end..].chars();

    rest.next() == Some('.') && rest.next().is_some_and(char::is_whitespace)
}

/// Splits `text` on `**` pairs into plain and emphasized spans.
///
/// A trailing segment without a closing marker stays literal, marker
/// included. Empty segments are dropped.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let segments: Vec<&str> = text.split(BOLD_MARKER).collect();
    let last_index = segments.len() - 1;
    let mut spans = Vec::with_capacity(segments.len());

    for (index, segment) in segments.into_iter().enumerate() {
        let is_inside_pair = index % 2 == 1;
        if is_inside_pair && index == last_index {
            push_plain(&mut spans, &format!("{BOLD_MARKER}{segment}"));
        } else if is_inside_pair {
            if !segment.is_empty() {
                spans.push(InlineSpan::Emphasis(segment.to_string()));
            }
        } else {
            push_plain(&mut spans, segment);
        }
    }

    spans
}

/// Appends plain text, merging with a preceding plain span.
fn push_plain(spans: &mut Vec<InlineSpan>, text: &str) {
    if text.is_empty() {
        return;
    }

    if let Some(InlineSpan::Plain(previous)) = spans.last_mut() {
        previous.push_str(text);

        return;
    }

    spans.push(InlineSpan::Plain(text.to_string()));
}
