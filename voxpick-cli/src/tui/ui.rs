use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use tui_textarea::TextArea;
use voxpick_core::AppState;

use super::state::TuiState;
use super::widgets::{controls, filter_bar, language_bar, status_bar, text_panel, voice_list};

/// What the UI needs to know about audio output besides `AppState`.
pub struct AudioView {
    pub playing: bool,
    pub has_audio: bool,
}

pub fn draw_ui(
    frame: &mut Frame,
    state: &TuiState,
    app: &AppState,
    audio: &AudioView,
    textarea: &mut TextArea,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Language, gender, search
            Constraint::Min(6),    // Voice list and editor
            Constraint::Length(1), // Response info
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let filters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(28),
            Constraint::Min(12),
        ])
        .split(rows[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let editor = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(main[1]);

    let sliders = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(editor[1]);

    language_bar::render(frame, filters[0], state, app);
    filter_bar::render_gender(frame, filters[1], state, app);
    filter_bar::render_search(frame, filters[2], state, app);
    voice_list::render(frame, main[0], state, app);
    text_panel::render(frame, editor[0], state, app, textarea);
    controls::render_rate(frame, sliders[0], state, app);
    controls::render_pitch(frame, sliders[1], state, app);
    controls::render_response(frame, rows[2], app, audio.playing, audio.has_audio);
    status_bar::render(frame, rows[3], state, app);
    status_bar::render_help(frame, rows[4]);

    // Drawn last so it overlays the panels below the language box.
    if state.dropdown_open {
        language_bar::render_dropdown(frame, filters[0], state, app);
    }
}
