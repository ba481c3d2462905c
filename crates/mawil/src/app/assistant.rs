//! Assistant chat transcript and request gating.

use tracing::warn;

use crate::domain::chat::ChatMessage;
use crate::domain::content::ContentStore;
use crate::infra::text_generator::EndpointError;

/// First transcript entry shown when the panel opens.
pub const GREETING: &str = "Hello! I'm the Maw'il assistant. Ask me about our programs, \
admissions, faculty, or institutional policies.";
/// Reply appended whenever the endpoint fails.
pub const APOLOGY: &str = "I'm sorry, I'm having trouble connecting right now. \
Please contact us directly at info@mawil.org.";
/// Canned prompts offered at the start of a conversation.
pub const QUICK_ACTIONS: [&str; 4] = [
    "How do I apply?",
    "What programs do you offer?",
    "Who are the faculty?",
    "What are the tuition fees?",
];
/// Quick actions are hidden once the transcript reaches this many messages.
pub const QUICK_ACTION_TRANSCRIPT_LIMIT: usize = 3;

const FORMATTING_INSTRUCTIONS: &str = "Format every answer for a chat panel that \
understands a small markdown subset: start sections with '## ' headers or '### ' \
sub-headers, wrap key terms in **double asterisks** for bold emphasis, and use '- ' \
bullet lists or '1. ' numbered lists for structured content. Keep answers concise \
and factual, and suggest contacting the institute by email when unsure.";

/// One outbound text-generation request produced by an accepted send.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssistantRequest {
    pub prompt: String,
    pub context: String,
}

/// Transcript, draft input, and visibility of the assistant panel.
///
/// At most one request is outstanding; [`AssistantSession::send`] is a no-op
/// until [`AssistantSession::receive`] or [`AssistantSession::fail`] clears
/// the flag.
#[derive(Debug)]
pub struct AssistantSession {
    input: String,
    is_awaiting_response: bool,
    is_open: bool,
    messages: Vec<ChatMessage>,
    system_context: String,
}

impl AssistantSession {
    /// Creates a closed session holding the greeting and a fixed system
    /// context.
    pub fn new(system_context: String) -> Self {
        Self {
            input: String::new(),
            is_awaiting_response: false,
            is_open: false,
            messages: vec![ChatMessage::assistant(GREETING)],
            system_context,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.is_awaiting_response
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn system_context(&self) -> &str {
        &self.system_context
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn push_input_char(&mut self, character: char) {
        self.input.push(character);
    }

    pub fn pop_input_char(&mut self) {
        self.input.pop();
    }

    /// Accepts `text` unless it is blank or a request is outstanding.
    ///
    /// On acceptance the user message is appended before any request is
    /// dispatched.
    pub fn send(&mut self, text: &str) -> Option<AssistantRequest> {
        if text.trim().is_empty() || self.is_awaiting_response {
            return None;
        }

        self.messages.push(ChatMessage::user(text));
        self.is_awaiting_response = true;

        Some(AssistantRequest {
            prompt: text.to_string(),
            context: self.system_context.clone(),
        })
    }

    /// Sends the draft input, clearing it only when the send is accepted.
    pub fn submit_input(&mut self) -> Option<AssistantRequest> {
        let text = self.input.clone();
        let request = self.send(&text)?;
        self.input.clear();

        Some(request)
    }

    /// Returns whether quick actions are currently offered.
    pub fn quick_actions_available(&self) -> bool {
        self.messages.len() < QUICK_ACTION_TRANSCRIPT_LIMIT && !self.is_awaiting_response
    }

    /// Sends the quick action at `index` when quick actions are offered.
    pub fn send_quick_action(&mut self, index: usize) -> Option<AssistantRequest> {
        if !self.quick_actions_available() {
            return None;
        }
        let prompt = QUICK_ACTIONS.get(index)?;

        self.send(prompt)
    }

    /// Appends the endpoint reply verbatim and clears the outstanding flag.
    pub fn receive(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
        self.is_awaiting_response = false;
    }

    /// Logs `error`, appends the apology, and clears the outstanding flag.
    pub fn fail(&mut self, error: &EndpointError) {
        warn!(error = %error, "assistant request failed");

        self.messages.push(ChatMessage::assistant(APOLOGY));
        self.is_awaiting_response = false;
    }
}

/// Builds the system instruction describing the institute from `content`.
pub fn build_system_context(content: &ContentStore) -> String {
    let institution = content.institution();
    let mut context = format!(
        "You are the virtual assistant of {name} {subtitle}, an educational institute \
founded in {founded}. Answer questions from prospective students using only the \
information below. Contact email: {email}. Address: {address}.\n",
        name = institution.name,
        subtitle = institution.subtitle,
        founded = institution.founded_year,
        email = institution.email,
        address = institution.address.one_line(),
    );

    context.push_str("\nProgram catalog:\n");
    for program in content.programs() {
        context.push_str(&format!(
            "- {title} ({level}; {duration}; {delivery}): {overview} Prerequisites: \
{prerequisites}\n",
            title = program.title,
            level = program.level,
            duration = program.duration,
            delivery = program.delivery,
            overview = program.overview,
            prerequisites = program.prerequisites,
        ));
    }

    context.push_str("\nStaff roster:\n");
    for member in content.staff() {
        context.push_str(&format!(
            "- {name}, {role} ({department}), {credentials}, {email}\n",
            name = member.name,
            role = member.role,
            department = member.department,
            credentials = member.credentials,
            email = member.email,
        ));
    }

    let admissions = content.admissions();
    context.push_str("\nAdmission steps:\n");
    for (index, step) in admissions.steps.iter().enumerate() {
        context.push_str(&format!("{}. {step}\n", index + 1));
    }
    context.push_str(&format!(
        "Entry requirements: {}. Tuition: {}\n",
        admissions.requirements.join(", "),
        admissions.tuition_note
    ));

    context.push('\n');
    context.push_str(FORMATTING_INSTRUCTIONS);

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::ChatRole;

    fn session() -> AssistantSession {
        AssistantSession::new("context".to_string())
    }

    #[test]
    fn test_new_session_is_closed_with_greeting() {
        // Arrange & Act
        let session = session();

        // Assert
        assert!(!session.is_open());
        assert_eq!(session.messages(), &[ChatMessage::assistant(GREETING)]);
        assert!(session.quick_actions_available());
    }

    #[test]
    fn test_send_blank_text_is_noop() {
        // Arrange
        let mut session = session();

        // Act
        let empty_request = session.send("");
        let whitespace_request = session.send("   ");

        // Assert
        assert!(empty_request.is_none());
        assert!(whitespace_request.is_none());
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_awaiting_response());
    }

    #[test]
    fn test_send_while_awaiting_is_noop() {
        // Arrange
        let mut session = session();
        session.send("first question");

        // Act
        let request = session.send("second question");

        // Assert
        assert!(request.is_none());
        assert_eq!(session.messages().len(), 2);
        assert!(session.is_awaiting_response());
    }

    #[test]
    fn test_send_appends_user_message_and_carries_context() {
        // Arrange
        let mut session = session();

        // Act
        let request = session.send("How to apply?");

        // Assert
        assert_eq!(
            request,
            Some(AssistantRequest {
                prompt: "How to apply?".to_string(),
                context: "context".to_string(),
            })
        );
        assert_eq!(
            session.messages().last(),
            Some(&ChatMessage::user("How to apply?"))
        );
        assert!(session.is_awaiting_response());
    }

    #[test]
    fn test_receive_appends_reply_after_user_message() {
        // Arrange
        let mut session = session();
        session.send("How to apply?");

        // Act
        session.receive("## Steps");

        // Assert
        assert_eq!(
            &session.messages()[1..],
            &[
                ChatMessage::user("How to apply?"),
                ChatMessage::assistant("## Steps"),
            ]
        );
        assert!(!session.is_awaiting_response());
    }

    #[test]
    fn test_fail_appends_apology_with_contact_address() {
        // Arrange
        let mut session = session();
        session.send("x");

        // Act
        session.fail(&EndpointError::EmptyResponse);

        // Assert
        let reply = session.messages().last().expect("reply should exist");
        assert_eq!(reply.role, ChatRole::Assistant);
        assert_eq!(reply.text, APOLOGY);
        assert!(reply.text.contains("info@mawil.org"));
        assert!(!session.is_awaiting_response());
    }

    #[test]
    fn test_submit_input_keeps_draft_when_rejected() {
        // Arrange
        let mut session = session();
        session.send("pending");
        "draft".chars().for_each(|character| session.push_input_char(character));

        // Act
        let request = session.submit_input();

        // Assert
        assert!(request.is_none());
        assert_eq!(session.input(), "draft");
    }

    #[test]
    fn test_submit_input_clears_draft_when_accepted() {
        // Arrange
        let mut session = session();
        "hi!".chars().for_each(|character| session.push_input_char(character));
        session.pop_input_char();

        // Act
        let request = session.submit_input();

        // Assert
        assert_eq!(request.map(|request| request.prompt), Some("hi".to_string()));
        assert_eq!(session.input(), "");
    }

    #[test]
    fn test_quick_actions_hidden_after_transcript_threshold() {
        // Arrange
        let mut session = session();
        session.send_quick_action(0);
        session.receive("Apply online.");

        // Act
        let request = session.send_quick_action(1);

        // Assert
        assert!(request.is_none());
        assert_eq!(session.messages().len(), QUICK_ACTION_TRANSCRIPT_LIMIT);
        assert!(!session.quick_actions_available());
    }

    #[test]
    fn test_send_quick_action_behaves_like_send() {
        // Arrange
        let mut session = session();

        // Act
        let request = session.send_quick_action(2);
        let out_of_range = session.send_quick_action(9);

        // Assert
        assert_eq!(
            request.map(|request| request.prompt),
            Some(QUICK_ACTIONS[2].to_string())
        );
        assert!(out_of_range.is_none());
        assert_eq!(
            session.messages().last(),
            Some(&ChatMessage::user(QUICK_ACTIONS[2]))
        );
    }

    #[test]
    fn test_toggle_keeps_transcript() {
        // Arrange
        let mut session = session();
        session.open();
        session.send("hello");

        // Act
        session.toggle();
        session.toggle();

        // Assert
        assert!(session.is_open());
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_build_system_context_covers_catalog_staff_and_steps() {
        // Arrange
        let content = ContentStore::load_embedded().expect("embedded content should parse");

        // Act
        let context = build_system_context(&content);

        // Assert
        assert!(context.contains("Certificate in Conservation Biology"));
        assert!(context.contains("Dr. Yazan Mohammad Aref"));
        assert!(context.contains("1. Apply Online"));
        assert!(context.contains("info@mawil.org"));
        assert!(context.contains("**double asterisks**"));
    }

    #[test]
    fn test_build_system_context_puts_each_record_on_its_own_line() {
        // Arrange
        let content = ContentStore::load_embedded().expect("embedded content should parse");

        // Act
        let context = build_system_context(&content);

        // Assert
        let lines: Vec<&str> = context.lines().collect();
        for member in content.staff() {
            let member_lines = lines
                .iter()
                .filter(|line| line.starts_with(&format!("- {},", member.name)))
                .count();
            assert_eq!(member_lines, 1, "{} should appear once", member.name);
        }
        for (index, step) in content.admissions().steps.iter().enumerate() {
            let step_line = format!("{}. {step}", index + 1);
            assert!(lines.contains(&step_line.as_str()));
        }
        assert!(
            lines
                .iter()
                .any(|line| line.starts_with("Entry requirements: "))
        );
    }
}
