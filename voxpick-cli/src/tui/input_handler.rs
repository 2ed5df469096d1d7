use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;
use voxpick_core::AppState;

use super::state::{Focus, TuiState};

const PAGE: isize = 10;

pub enum TuiAction {
    /// Send the current text for synthesis.
    Generate,
    Play,
    Stop,
    Download,
    /// Send the canned API test request.
    TestApi,
    /// Copy an example request to the clipboard.
    CopyExample,
    /// Quit the application.
    Quit,
    /// No action needed.
    None,
}

pub fn handle_key_event(
    key: KeyEvent,
    textarea: &mut TextArea,
    state: &mut TuiState,
    app: &mut AppState,
) -> TuiAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return TuiAction::Quit,
        // Most terminals cannot tell Ctrl+Enter from Enter, Ctrl+G always works.
        KeyCode::Enter | KeyCode::Char('g') if ctrl => return TuiAction::Generate,
        KeyCode::F(2) => return TuiAction::Play,
        KeyCode::F(3) => return TuiAction::Stop,
        KeyCode::F(4) => return TuiAction::Download,
        KeyCode::F(5) => return TuiAction::TestApi,
        KeyCode::F(6) => return TuiAction::CopyExample,
        KeyCode::Tab => {
            state.set_focus(state.focus.next());
            return TuiAction::None;
        }
        KeyCode::BackTab => {
            state.set_focus(state.focus.prev());
            return TuiAction::None;
        }
        _ => {}
    }

    if state.dropdown_open {
        handle_dropdown_key(key, state, app);
        return TuiAction::None;
    }

    match state.focus {
        Focus::Language => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down) {
                state.open_dropdown(app);
            }
        }
        Focus::Gender => match key.code {
            KeyCode::Left => app.set_gender_filter(app.filter.gender.prev()),
            KeyCode::Right => app.set_gender_filter(app.filter.gender.next()),
            _ => {}
        },
        Focus::Search => handle_search_key(key, state, app),
        Focus::Voices => match key.code {
            KeyCode::Up => step_voice(app, -1),
            KeyCode::Down => step_voice(app, 1),
            KeyCode::PageUp => step_voice(app, -PAGE),
            KeyCode::PageDown => step_voice(app, PAGE),
            KeyCode::Home => step_voice(app, isize::MIN / 2),
            KeyCode::End => step_voice(app, isize::MAX / 2),
            _ => {}
        },
        Focus::Text => {
            if textarea.input(key) {
                app.set_text(textarea.lines().join("\n"));
            }
        }
        Focus::Rate => match key.code {
            KeyCode::Left | KeyCode::Char('-') => app.adjust_rate(-1),
            KeyCode::Right | KeyCode::Char('+') => app.adjust_rate(1),
            KeyCode::Home | KeyCode::Char('0') => app.rate = 0,
            _ => {}
        },
        Focus::Pitch => match key.code {
            KeyCode::Left | KeyCode::Char('-') => app.adjust_pitch(-1),
            KeyCode::Right | KeyCode::Char('+') => app.adjust_pitch(1),
            KeyCode::Home | KeyCode::Char('0') => app.pitch = 0,
            _ => {}
        },
    }
    TuiAction::None
}

fn handle_dropdown_key(key: KeyEvent, state: &mut TuiState, app: &mut AppState) {
    let len = app.languages.len();
    match key.code {
        KeyCode::Esc => state.close_dropdown(),
        KeyCode::Up => state.move_dropdown(-1, len),
        KeyCode::Down => state.move_dropdown(1, len),
        KeyCode::PageUp => state.move_dropdown(-PAGE, len),
        KeyCode::PageDown => state.move_dropdown(PAGE, len),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(code) = app.languages.get(state.dropdown_cursor).map(|l| l.code.clone()) {
                app.select_language(&code);
            }
            state.close_dropdown();
        }
        _ => {}
    }
}

fn handle_search_key(key: KeyEvent, state: &mut TuiState, app: &mut AppState) {
    let mut query = app.filter.search_query.clone();
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => query.push(c),
        KeyCode::Backspace => {
            query.pop();
        }
        KeyCode::Esc => query.clear(),
        KeyCode::Down | KeyCode::Enter => {
            state.set_focus(Focus::Voices);
            return;
        }
        _ => return,
    }
    app.set_search_query(query);
}

/// Moves the selection through the visible list.
fn step_voice(app: &mut AppState, delta: isize) {
    let len = app.filtered.len();
    if len == 0 {
        return;
    }
    let target = match app.selected_index() {
        Some(index) => (index as isize).saturating_add(delta).clamp(0, len as isize - 1) as usize,
        None => 0,
    };
    let id = app.filtered[target].id.clone();
    if app.selected_voice.as_deref() != Some(id.as_str()) {
        app.select_voice(&id);
    }
}

pub fn configure_textarea(textarea: &mut TextArea) {
    textarea.set_placeholder_text("Type the text to speak... (Ctrl+G to generate)");
    textarea.set_cursor_line_style(ratatui::style::Style::default());
    textarea.set_style(ratatui::style::Style::default().fg(ratatui::style::Color::White));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::SessionInfo;
    use voxpick_core::api::mock::{sample_languages, sample_voices};
    use voxpick_core::catalog::GenderFilter;

    fn setup() -> (TextArea<'static>, TuiState, AppState) {
        let mut app = AppState::new();
        app.set_catalog(sample_languages(), sample_voices());
        app.select_language("English");
        let state = TuiState::new(SessionInfo {
            server_url: "http://127.0.0.1:8000".to_string(),
            profile: None,
        });
        (TextArea::default(), state, app)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_global_shortcuts() {
        let (mut textarea, mut state, mut app) = setup();
        assert!(matches!(
            handle_key_event(ctrl('g'), &mut textarea, &mut state, &mut app),
            TuiAction::Generate
        ));
        assert!(matches!(
            handle_key_event(
                KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL),
                &mut textarea,
                &mut state,
                &mut app
            ),
            TuiAction::Generate
        ));
        assert!(matches!(
            handle_key_event(press(KeyCode::F(6)), &mut textarea, &mut state, &mut app),
            TuiAction::CopyExample
        ));
        assert!(matches!(
            handle_key_event(ctrl('q'), &mut textarea, &mut state, &mut app),
            TuiAction::Quit
        ));
    }

    #[test]
    fn test_typing_updates_text() {
        let (mut textarea, mut state, mut app) = setup();
        for c in "hi".chars() {
            handle_key_event(press(KeyCode::Char(c)), &mut textarea, &mut state, &mut app);
        }
        assert_eq!(app.text, "hi");
    }

    #[test]
    fn test_dropdown_selects_language_and_esc_closes() {
        let (mut textarea, mut state, mut app) = setup();
        state.set_focus(Focus::Language);

        handle_key_event(press(KeyCode::Enter), &mut textarea, &mut state, &mut app);
        assert!(state.dropdown_open);
        // Languages are sorted by name: English, German, Russian.
        assert_eq!(state.dropdown_cursor, 0);

        handle_key_event(press(KeyCode::Esc), &mut textarea, &mut state, &mut app);
        assert!(!state.dropdown_open);
        assert_eq!(app.filter.language_code.as_deref(), Some("English"));

        handle_key_event(press(KeyCode::Enter), &mut textarea, &mut state, &mut app);
        handle_key_event(press(KeyCode::Down), &mut textarea, &mut state, &mut app);
        handle_key_event(press(KeyCode::Down), &mut textarea, &mut state, &mut app);
        handle_key_event(press(KeyCode::Enter), &mut textarea, &mut state, &mut app);

        assert!(!state.dropdown_open);
        assert_eq!(app.filter.language_code.as_deref(), Some("Russian"));
        assert_eq!(app.selected_voice.as_deref(), Some("ru-RU-DmitryNeural"));
    }

    #[test]
    fn test_voice_list_navigation_is_clamped() {
        let (mut textarea, mut state, mut app) = setup();
        state.set_focus(Focus::Voices);
        let first = app.filtered[0].id.clone();
        let last = app.filtered[app.filtered.len() - 1].id.clone();

        handle_key_event(press(KeyCode::Up), &mut textarea, &mut state, &mut app);
        assert_eq!(app.selected_voice.as_deref(), Some(first.as_str()));

        handle_key_event(press(KeyCode::End), &mut textarea, &mut state, &mut app);
        assert_eq!(app.selected_voice.as_deref(), Some(last.as_str()));

        handle_key_event(press(KeyCode::Down), &mut textarea, &mut state, &mut app);
        assert_eq!(app.selected_voice.as_deref(), Some(last.as_str()));
    }

    #[test]
    fn test_search_and_gender_keys_filter() {
        let (mut textarea, mut state, mut app) = setup();
        state.set_focus(Focus::Search);
        for c in "gb".chars() {
            handle_key_event(press(KeyCode::Char(c)), &mut textarea, &mut state, &mut app);
        }
        assert_eq!(app.filtered.len(), 1);
        assert_eq!(app.selected_voice.as_deref(), Some("en-GB-SoniaNeural"));

        handle_key_event(press(KeyCode::Esc), &mut textarea, &mut state, &mut app);
        assert_eq!(app.filter.search_query, "");

        state.set_focus(Focus::Gender);
        handle_key_event(press(KeyCode::Right), &mut textarea, &mut state, &mut app);
        assert_eq!(app.filter.gender, GenderFilter::Male);
        assert!(app.filtered.iter().all(|v| v.id == "en-US-GuyNeural"));
    }

    #[test]
    fn test_rate_and_pitch_keys() {
        let (mut textarea, mut state, mut app) = setup();
        state.set_focus(Focus::Rate);
        handle_key_event(press(KeyCode::Right), &mut textarea, &mut state, &mut app);
        assert_eq!(app.rate, 5);

        state.set_focus(Focus::Pitch);
        handle_key_event(press(KeyCode::Left), &mut textarea, &mut state, &mut app);
        assert_eq!(app.pitch, -1);
        handle_key_event(press(KeyCode::Home), &mut textarea, &mut state, &mut app);
        assert_eq!(app.pitch, 0);
    }
}
