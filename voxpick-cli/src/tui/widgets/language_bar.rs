use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use voxpick_core::AppState;

use super::panel_block;
use crate::tui::state::{Focus, TuiState};

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState, app: &AppState) {
    let label = match app.selected_language() {
        Some(language) => format!("{} ({}) ▾", language.name, language.count),
        None if !app.loaded => "Loading...".to_string(),
        None => "No languages".to_string(),
    };
    let paragraph = Paragraph::new(label)
        .block(panel_block("Language", state.focus == Focus::Language));
    frame.render_widget(paragraph, area);
}

/// Expanded dropdown drawn over whatever sits below `anchor`.
pub fn render_dropdown(frame: &mut Frame, anchor: Rect, state: &TuiState, app: &AppState) {
    let screen = frame.area();
    let top = anchor.y + anchor.height;
    let max_height = screen.height.saturating_sub(top);
    let height = (app.languages.len() as u16 + 2).min(max_height);
    if height < 3 {
        return;
    }
    let area = Rect {
        x: anchor.x,
        y: top,
        width: anchor.width.max(32).min(screen.width.saturating_sub(anchor.x)),
        height,
    };

    let items: Vec<ListItem> = app
        .languages
        .iter()
        .map(|l| ListItem::new(format!("{} ({})", l.name, l.count)))
        .collect();
    let list = List::new(items)
        .block(panel_block("Select language", true))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.dropdown_cursor));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}
