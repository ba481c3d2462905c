//! Current-path state driving the page resolver.

use crate::domain::page::{HOME_PATH, PageDescriptor};

/// Current path plus the scroll position of the active view.
///
/// Paths are stored verbatim; resolution happens on every read through
/// [`Navigation::page`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Navigation {
    current_path: String,
    scroll_offset: u16,
    scroll_reset_count: u64,
}

impl Navigation {
    /// Creates navigation state positioned at the home path.
    pub fn new() -> Self {
        Self {
            current_path: HOME_PATH.to_string(),
            scroll_offset: 0,
            scroll_reset_count: 0,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Resolves the current path into a page descriptor.
    pub fn page(&self) -> PageDescriptor {
        PageDescriptor::resolve(&self.current_path)
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Returns how many times navigation has scrolled the view to the top.
    pub fn scroll_reset_count(&self) -> u64 {
        self.scroll_reset_count
    }

    /// Replaces the current path without validation and scrolls to the top.
    ///
    /// Navigating to the current path still resets the scroll position.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
        self.scroll_offset = 0;
        self.scroll_reset_count = self.scroll_reset_count.saturating_add(1);
    }

    pub fn scroll_down(&mut self, line_count: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(line_count);
    }

    pub fn scroll_up(&mut self, line_count: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(line_count);
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_home() {
        // Arrange & Act
        let navigation = Navigation::new();

        // Assert
        assert_eq!(navigation.current_path(), "/");
        assert_eq!(navigation.page(), PageDescriptor::Home);
        assert_eq!(navigation.scroll_reset_count(), 0);
    }

    #[test]
    fn test_navigate_replaces_path_and_resolves_detail() {
        // Arrange
        let mut navigation = Navigation::new();

        // Act
        navigation.navigate("/programs/marine-ecosystems");

        // Assert
        assert_eq!(navigation.current_path(), "/programs/marine-ecosystems");
        assert_eq!(
            navigation.page(),
            PageDescriptor::ProgramDetail("marine-ecosystems".to_string())
        );
    }

    #[test]
    fn test_navigate_to_current_path_keeps_page_and_resets_scroll() {
        // Arrange
        let mut navigation = Navigation::new();
        navigation.navigate("/staff");
        navigation.scroll_down(12);
        let page_before = navigation.page();

        // Act
        navigation.navigate("/staff");

        // Assert
        assert_eq!(navigation.page(), page_before);
        assert_eq!(navigation.scroll_offset(), 0);
        assert_eq!(navigation.scroll_reset_count(), 2);
    }

    #[test]
    fn test_navigate_accepts_unknown_paths() {
        // Arrange
        let mut navigation = Navigation::new();

        // Act
        navigation.navigate("/nowhere");

        // Assert
        assert_eq!(navigation.current_path(), "/nowhere");
        assert_eq!(
            navigation.page(),
            PageDescriptor::NotFound("/nowhere".to_string())
        );
    }

    #[test]
    fn test_scroll_up_saturates_at_top() {
        // Arrange
        let mut navigation = Navigation::new();
        navigation.scroll_down(2);

        // Act
        navigation.scroll_up(5);

        // Assert
        assert_eq!(navigation.scroll_offset(), 0);
    }
}
