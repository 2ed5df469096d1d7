use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use voxpick_core::AppState;

use super::panel_block;
use crate::tui::state::{Focus, TuiState};

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState, app: &AppState) {
    let title = format!("Voices ({})", app.filtered.len());
    let block = panel_block(&title, state.focus == Focus::Voices);

    if app.filtered.is_empty() {
        let message = if app.loaded {
            "No voices match the filters"
        } else {
            "Loading voices..."
        };
        let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .filtered
        .iter()
        .map(|voice| {
            ListItem::new(Line::from(vec![
                Span::raw(voice.name.clone()),
                Span::styled(
                    format!("  {}", voice.short_name()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let selected = app.selected_index();
    let visible_rows = area.height.saturating_sub(2) as usize;
    let offset = center_offset(selected, app.filtered.len(), visible_rows);

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("● ");
    let mut list_state = ListState::default()
        .with_offset(offset)
        .with_selected(selected);

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// First visible row that puts `selected` in the middle of a viewport of
/// `height` rows, without scrolling past either end of the list.
fn center_offset(selected: Option<usize>, len: usize, height: usize) -> usize {
    match selected {
        None => 0,
        Some(index) => index
            .saturating_sub(height / 2)
            .min(len.saturating_sub(height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(None, 50, 10), 0);
        // Near the top the list cannot scroll up further.
        assert_eq!(center_offset(Some(2), 50, 10), 0);
        assert_eq!(center_offset(Some(20), 50, 10), 15);
        // Near the bottom the last page stays full.
        assert_eq!(center_offset(Some(48), 50, 10), 40);
        // Everything fits.
        assert_eq!(center_offset(Some(3), 5, 10), 0);
    }
}
