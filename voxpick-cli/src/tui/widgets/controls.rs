use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
    Frame,
};
use voxpick_core::app::state::{PITCH_RANGE, RATE_RANGE};
use voxpick_core::app::ResponseInfo;
use voxpick_core::AppState;

use super::panel_block;
use crate::tui::state::{Focus, TuiState};

pub fn render_rate(frame: &mut Frame, area: Rect, state: &TuiState, app: &AppState) {
    let ratio = slider_ratio(app.rate, *RATE_RANGE.start(), *RATE_RANGE.end());
    render_slider(frame, area, "Rate", format_rate(app.rate), ratio, state.focus == Focus::Rate);
}

pub fn render_pitch(frame: &mut Frame, area: Rect, state: &TuiState, app: &AppState) {
    let ratio = slider_ratio(app.pitch, *PITCH_RANGE.start(), *PITCH_RANGE.end());
    render_slider(
        frame,
        area,
        "Pitch",
        format_pitch(app.pitch),
        ratio,
        state.focus == Focus::Pitch,
    );
}

fn render_slider(frame: &mut Frame, area: Rect, title: &str, label: String, ratio: f64, focused: bool) {
    let gauge = LineGauge::default()
        .block(panel_block(title, focused))
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .label(format!("{label:>6} "))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

/// One line under the main panels: last response details, audio state and
/// the copy confirmation.
pub fn render_response(frame: &mut Frame, area: Rect, app: &AppState, playing: bool, has_audio: bool) {
    let dim = Style::default().fg(Color::DarkGray);
    let sep = Span::styled(" · ", dim);

    let mut parts: Vec<Span<'static>> = vec![Span::raw(" ")];
    match &app.last_response {
        Some(info) => parts.extend(response_spans(info, &sep)),
        None => parts.push(Span::styled("No request sent yet", dim)),
    }

    parts.push(Span::styled("   ", dim));
    let (audio, color) = if playing {
        ("▶ playing", Color::Green)
    } else if has_audio {
        ("■ audio ready (F2 play)", Color::White)
    } else {
        ("no audio", Color::DarkGray)
    };
    parts.push(Span::styled(audio, Style::default().fg(color)));

    if app.copy_confirmed(Instant::now()) {
        parts.push(Span::styled("   Copied!", Style::default().fg(Color::Green)));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn response_spans(info: &ResponseInfo, sep: &Span<'static>) -> Vec<Span<'static>> {
    let status = match info.status {
        Some(code) => code.to_string(),
        None => "-".to_string(),
    };
    let status_color = match info.status {
        Some(code) if (200..300).contains(&code) => Color::Green,
        _ => Color::Red,
    };
    let size = info
        .size
        .map(format_size)
        .unwrap_or_else(|| "-".to_string());

    vec![
        Span::raw("Status: "),
        Span::styled(status, Style::default().fg(status_color)),
        sep.clone(),
        Span::raw(format!("Time: {} ms", info.elapsed.as_millis())),
        sep.clone(),
        Span::raw(format!("Size: {size}")),
    ]
}

fn slider_ratio(value: i32, min: i32, max: i32) -> f64 {
    ((value - min) as f64 / (max - min) as f64).clamp(0.0, 1.0)
}

fn format_rate(rate: i32) -> String {
    format!("{rate:+}%")
}

fn format_pitch(pitch: i32) -> String {
    format!("{pitch:+}Hz")
}

fn format_size(bytes: usize) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}
