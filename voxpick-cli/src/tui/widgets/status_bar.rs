use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use voxpick_core::app::StatusKind;
use voxpick_core::AppState;

use crate::tui::state::TuiState;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const HELP: &str = " Tab focus · Ctrl+G generate · F2 play · F3 stop · F4 save · F5 test API · F6 copy example · Ctrl+Q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState, app: &AppState) {
    let busy = app.generating || app.testing_api || !app.loaded;
    let sep = Span::styled(" | ", Style::default().fg(Color::DarkGray));

    let mut parts: Vec<Span<'static>> = vec![Span::raw(" ")];
    if busy {
        let spinner = SPINNER_CHARS[state.spinner_frame % SPINNER_CHARS.len()];
        parts.push(Span::styled(
            format!("{spinner} "),
            Style::default().fg(Color::Cyan),
        ));
    }

    match &app.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => Color::White,
                StatusKind::Success => Color::Green,
                StatusKind::Warning => Color::Yellow,
                StatusKind::Error => Color::Red,
            };
            parts.push(Span::styled(status.text.clone(), Style::default().fg(color)));
        }
        None => parts.push(Span::styled("Ready", Style::default().fg(Color::Green))),
    }

    parts.push(sep.clone());
    let voice = app
        .selected_voice
        .clone()
        .unwrap_or_else(|| "no voice".to_string());
    parts.push(Span::styled(voice, Style::default().fg(Color::Yellow)));

    parts.push(sep);
    let server = match &state.session.profile {
        Some(profile) => format!("{} [{profile}]", state.session.server_url),
        None => state.session.server_url.clone(),
    };
    parts.push(Span::styled(server, Style::default().fg(Color::Cyan)));

    let bar = Paragraph::new(Line::from(parts)).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    frame.render_widget(bar, area);
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Span::styled(HELP, Style::default().fg(Color::DarkGray)));
    frame.render_widget(help, area);
}
