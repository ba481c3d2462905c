use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppMode;
use crate::domain::page::PageDescriptor;
use crate::ui::Component;

const KEY_STYLE_COLOR: Color = Color::Yellow;

/// Bottom line listing the keys available in the current mode.
pub struct HelpBar {
    actions: Vec<(&'static str, &'static str)>,
}

impl HelpBar {
    pub fn new(mode: &AppMode, page: &PageDescriptor, is_chat_open: bool) -> Self {
        Self {
            actions: help_actions(mode, page, is_chat_open),
        }
    }
}

impl Component for HelpBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for (index, (key, description)) in self.actions.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(KEY_STYLE_COLOR)));
            spans.push(Span::raw(format!(" {description}")));
        }

        let help = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(help, area);
    }
}

/// Returns `(key, description)` pairs for the active input mode.
fn help_actions(
    mode: &AppMode,
    page: &PageDescriptor,
    is_chat_open: bool,
) -> Vec<(&'static str, &'static str)> {
    match mode {
        AppMode::Browse => {
            let mut actions = vec![
                ("Tab", "next tab"),
                ("1-9", "follow link"),
                ("g", "go to path"),
                ("j/k", "scroll"),
                ("a", "apply"),
            ];
            if *page == PageDescriptor::Contact {
                actions.push(("e", "edit inquiry"));
            }
            actions.push(if is_chat_open {
                ("c", "close assistant")
            } else {
                ("c", "assistant")
            });
            actions.push(("q", "quit"));

            actions
        }
        AppMode::GoTo { .. } => vec![("Enter", "go"), ("Esc", "cancel")],
        AppMode::Chat => vec![
            ("Enter", "send"),
            ("F1-F4", "quick action"),
            ("Tab", "back to page"),
            ("Esc", "close"),
        ],
        AppMode::ContactForm => vec![
            ("Tab", "next field"),
            ("Shift+Tab", "previous field"),
            ("Esc", "done"),
        ],
    }
}
