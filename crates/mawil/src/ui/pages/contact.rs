use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::contact::{ContactField, ContactForm};
use crate::domain::content::ContentStore;
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::document::{self, render_document};
use crate::ui::icon::Icon;

const FORM_NOTE: &str = "Inquiries are not sent from this terminal. Copy your message into an \
email to the address above.";

/// Contact details plus the local inquiry form draft.
pub struct ContactPage<'a> {
    content: &'a ContentStore,
    form: &'a ContactForm,
    is_editing: bool,
    scroll_offset: u16,
}

impl<'a> ContactPage<'a> {
    pub fn new(
        content: &'a ContentStore,
        form: &'a ContactForm,
        is_editing: bool,
        scroll_offset: u16,
    ) -> Self {
        Self {
            content,
            form,
            is_editing,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let institution = self.content.institution();
        let mut lines = vec![
            document::title("Contact Us"),
            Line::from(""),
            document::paragraph(
                "We welcome inquiries from prospective students, partners, and the public.",
            ),
        ];

        lines.extend(document::heading("Contact Information"));
        lines.push(document::field("Email", institution.email.clone()));
        lines.push(document::field("Address", institution.address.one_line()));
        lines.push(document::field("License", institution.license_number.clone()));

        lines.extend(document::heading("Send an Inquiry"));
        lines.extend(ContactField::ALL.iter().map(|field| self.field_line(*field)));
        lines.push(Line::from(""));
        lines.push(document::muted(FORM_NOTE));

        lines.extend(document::link_list(&page_links(
            &PageDescriptor::Contact,
            self.content,
        )));

        lines
    }

    fn field_line(&self, field: ContactField) -> Line<'static> {
        let is_focused = self.is_editing && self.form.focused_field() == field;
        let marker = if is_focused {
            format!("{} ", Icon::Pointer)
        } else {
            "  ".to_string()
        };
        let value_style = if is_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        let value = self.form.value(field);
        let value = if value.is_empty() && !is_focused {
            Span::styled("(empty)", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(value.to_string(), value_style)
        };

        let label = format!("{}:", field.label());

        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{label:<8}"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            value,
        ])
    }
}

impl Page for ContactPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        render_document(f, area, self.lines(), self.scroll_offset);
    }
}
