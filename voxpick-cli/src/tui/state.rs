use voxpick_core::AppState;

/// Connection details shown in the status bar.
pub struct SessionInfo {
    pub server_url: String,
    pub profile: Option<String>,
}

/// Panel that receives keys that are not global shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Language,
    Gender,
    Search,
    Voices,
    Text,
    Rate,
    Pitch,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Language,
        Focus::Gender,
        Focus::Search,
        Focus::Voices,
        Focus::Text,
        Focus::Rate,
        Focus::Pitch,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// View state that only the terminal front-end needs. Everything the user
/// edits lives in the core `AppState`.
pub struct TuiState {
    pub focus: Focus,

    /// Whether the language dropdown is expanded.
    pub dropdown_open: bool,

    /// Highlighted row in the expanded dropdown.
    pub dropdown_cursor: usize,

    /// Spinner animation frame counter.
    pub spinner_frame: usize,

    pub session: SessionInfo,

    /// Whether the app should exit.
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(session: SessionInfo) -> Self {
        Self {
            focus: Focus::Text,
            dropdown_open: false,
            dropdown_cursor: 0,
            spinner_frame: 0,
            session,
            should_quit: false,
        }
    }

    /// Expands the dropdown with the current language highlighted.
    pub fn open_dropdown(&mut self, app: &AppState) {
        self.dropdown_open = true;
        self.dropdown_cursor = app
            .filter
            .language_code
            .as_deref()
            .and_then(|code| app.languages.iter().position(|l| l.code == code))
            .unwrap_or(0);
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    pub fn move_dropdown(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.dropdown_cursor = 0;
            return;
        }
        let max = len as isize - 1;
        self.dropdown_cursor = (self.dropdown_cursor as isize + delta).clamp(0, max) as usize;
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.dropdown_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        assert_eq!(Focus::Pitch.next(), Focus::Language);
        assert_eq!(Focus::Language.prev(), Focus::Pitch);
        assert_eq!(Focus::Voices.next().prev(), Focus::Voices);
    }

    #[test]
    fn test_dropdown_cursor_is_clamped() {
        let mut state = TuiState::new(SessionInfo {
            server_url: "http://localhost".to_string(),
            profile: None,
        });
        state.move_dropdown(5, 3);
        assert_eq!(state.dropdown_cursor, 2);
        state.move_dropdown(-10, 3);
        assert_eq!(state.dropdown_cursor, 0);
        state.move_dropdown(1, 0);
        assert_eq!(state.dropdown_cursor, 0);
    }
}
