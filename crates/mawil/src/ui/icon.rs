use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Bullet,
    Chat,
    Mail,
    Notice,
    Pointer,
    Spinner(usize),
}

impl Icon {
    /// Returns the spinner frame for the current wall-clock time.
    pub fn current_spinner() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();

        Icon::Spinner(usize::try_from(now / 100).unwrap_or_default())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Bullet => "•",
            Icon::Chat => "◆",
            Icon::Mail => "✉",
            Icon::Notice => "!",
            Icon::Pointer => "›",
            Icon::Spinner(frame) => SPINNER_FRAMES[frame % SPINNER_FRAMES.len()],
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
