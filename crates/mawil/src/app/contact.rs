//! Ephemeral draft of the contact page inquiry form.

/// Editable field of the inquiry form.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

/// Inquiry draft kept only while the contact page is shown.
///
/// The form is never submitted; navigation discards it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactForm {
    email: String,
    focused_field: ContactField,
    message: String,
    name: String,
}

impl ContactForm {
    pub fn focused_field(&self) -> ContactField {
        self.focused_field
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused_field = self.focused_field.previous();
    }

    pub fn push_char(&mut self, character: char) {
        self.focused_value_mut().push(character);
    }

    pub fn pop_char(&mut self) {
        self.focused_value_mut().pop();
    }

    /// Returns whether every field is still empty.
    pub fn is_blank(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|field| self.value(*field).is_empty())
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focused_field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}
