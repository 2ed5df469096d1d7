use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use tui_textarea::TextArea;
use voxpick_core::app::state::MAX_TEXT_CHARS;
use voxpick_core::AppState;

use super::panel_block;
use crate::tui::state::{Focus, TuiState};

const WARNING_CHARS: usize = 2000;
const DANGER_CHARS: usize = 5000;

#[derive(Debug, PartialEq, Eq)]
enum CountLevel {
    Normal,
    Warning,
    Danger,
}

fn count_level(chars: usize) -> CountLevel {
    if chars > DANGER_CHARS {
        CountLevel::Danger
    } else if chars > WARNING_CHARS {
        CountLevel::Warning
    } else {
        CountLevel::Normal
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &TuiState,
    app: &AppState,
    textarea: &mut TextArea,
) {
    let focused = state.focus == Focus::Text;
    let cursor = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    textarea.set_cursor_style(cursor);

    let chars = app.char_count();
    let color = match count_level(chars) {
        CountLevel::Normal => Color::DarkGray,
        CountLevel::Warning => Color::Yellow,
        CountLevel::Danger => Color::Red,
    };
    let counter = Line::from(Span::styled(
        format!(" {chars} / {MAX_TEXT_CHARS} "),
        Style::default().fg(color),
    ))
    .right_aligned();

    let block = panel_block("Text", focused).title_bottom(counter);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&*textarea, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_level_thresholds() {
        assert_eq!(count_level(0), CountLevel::Normal);
        assert_eq!(count_level(2000), CountLevel::Normal);
        assert_eq!(count_level(2001), CountLevel::Warning);
        assert_eq!(count_level(5000), CountLevel::Warning);
        assert_eq!(count_level(5001), CountLevel::Danger);
    }
}
