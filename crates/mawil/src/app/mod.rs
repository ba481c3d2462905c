//! App-layer composition root and shared state container.
//!
//! [`App`] owns navigation, the assistant session, and per-view form state.
//! Runtime mode handlers mutate it only through its methods.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::domain::content::ContentStore;
use crate::domain::link::page_links;
use crate::domain::page::PageDescriptor;
use crate::infra::text_generator::{EndpointError, TextGenerator};

pub mod assistant;
pub mod contact;
pub mod navigation;

use assistant::{AssistantRequest, AssistantSession, build_system_context};
use contact::ContactForm;
use navigation::Navigation;

/// Returns the mawil home directory (`~/.mawil`).
pub fn mawil_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(".mawil");
    }

    PathBuf::from(".mawil")
}

/// Input mode deciding which handler receives key events.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum AppMode {
    /// Page browsing with link and tab navigation.
    #[default]
    Browse,
    /// Path prompt opened with `:` or `g`.
    GoTo { input: String },
    /// Assistant panel focused for typing.
    Chat,
    /// Contact page inquiry form focused for typing.
    ContactForm,
}

/// Internal app events emitted by background tasks.
///
/// Producers only emit events; state mutation is centralized in
/// [`App::process_pending_app_events`].
#[derive(Debug)]
pub enum AppEvent {
    /// Outcome of the outstanding assistant request.
    AssistantReplied { result: Result<String, EndpointError> },
}

/// Stores application state and coordinates navigation and the assistant.
pub struct App {
    pub assistant: AssistantSession,
    pub contact_form: ContactForm,
    pub mode: AppMode,
    content: Arc<ContentStore>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    navigation: Navigation,
    request_timeout: Duration,
    text_generator: Arc<dyn TextGenerator>,
}

impl App {
    /// Builds the app at the home page with a closed assistant panel.
    pub fn new(
        content: Arc<ContentStore>,
        text_generator: Arc<dyn TextGenerator>,
        request_timeout: Duration,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let assistant = AssistantSession::new(build_system_context(&content));

        Self {
            assistant,
            contact_form: ContactForm::default(),
            mode: AppMode::Browse,
            content,
            event_rx,
            event_tx,
            navigation: Navigation::new(),
            request_timeout,
            text_generator,
        }
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Resolves the page for the current path.
    pub fn page(&self) -> PageDescriptor {
        self.navigation.page()
    }

    /// Moves to `path`, scrolling to the top and discarding the contact
    /// form draft.
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        info!(path = %path, "navigating");

        self.navigation.navigate(path);
        self.contact_form = ContactForm::default();
        if self.mode == AppMode::ContactForm {
            self.mode = AppMode::Browse;
        }
    }

    /// Follows the numbered page link at zero-based `index`.
    ///
    /// Returns `false` when the page has no such link.
    pub fn follow_link(&mut self, index: usize) -> bool {
        let Some(link) = page_links(&self.page(), &self.content).into_iter().nth(index) else {
            debug!(index, "no page link at index");

            return false;
        };

        self.navigate(link.path);

        true
    }

    pub fn scroll_down(&mut self, line_count: u16) {
        self.navigation.scroll_down(line_count);
    }

    pub fn scroll_up(&mut self, line_count: u16) {
        self.navigation.scroll_up(line_count);
    }

    /// Sends `text` through the assistant session, dispatching a request when
    /// accepted.
    pub fn send_assistant_message(&mut self, text: &str) {
        if let Some(request) = self.assistant.send(text) {
            self.dispatch_assistant_request(request);
        }
    }

    /// Sends the assistant draft input.
    pub fn submit_assistant_input(&mut self) {
        if let Some(request) = self.assistant.submit_input() {
            self.dispatch_assistant_request(request);
        }
    }

    /// Sends the quick action at zero-based `index`.
    pub fn send_quick_action(&mut self, index: usize) {
        if let Some(request) = self.assistant.send_quick_action(index) {
            self.dispatch_assistant_request(request);
        }
    }

    /// Applies every queued app event without waiting.
    pub fn process_pending_app_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_app_event(event);
        }
    }

    /// Waits for the next internal app event.
    #[cfg(test)]
    pub(crate) async fn next_app_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    pub(crate) fn apply_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AssistantReplied { result: Ok(text) } => {
                info!(reply_len = text.len(), "assistant replied");
                self.assistant.receive(text);
            }
            AppEvent::AssistantReplied { result: Err(error) } => {
                self.assistant.fail(&error);
            }
        }
    }

    /// Spawns the text-generation call; its outcome returns as an
    /// [`AppEvent::AssistantReplied`].
    fn dispatch_assistant_request(&self, request: AssistantRequest) {
        let event_tx = self.event_tx.clone();
        let request_timeout = self.request_timeout;
        let text_generator = Arc::clone(&self.text_generator);
        info!(prompt_len = request.prompt.len(), "dispatching assistant request");

        tokio::spawn(async move {
            let generation = text_generator.generate(request.prompt, request.context);
            let result = tokio::time::timeout(request_timeout, generation)
                .await
                .unwrap_or(Err(EndpointError::Timeout(request_timeout)));

            let _ = event_tx.send(AppEvent::AssistantReplied { result });
        });
    }
}
