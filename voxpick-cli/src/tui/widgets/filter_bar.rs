use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};
use voxpick_core::catalog::GenderFilter;
use voxpick_core::AppState;

use super::panel_block;
use crate::tui::state::{Focus, TuiState};

const GENDER_TABS: [GenderFilter; 3] = [GenderFilter::All, GenderFilter::Male, GenderFilter::Female];

pub fn render_gender(frame: &mut Frame, area: Rect, state: &TuiState, app: &AppState) {
    let selected = GENDER_TABS
        .iter()
        .position(|g| *g == app.filter.gender)
        .unwrap_or(0);
    let tabs = Tabs::new(GENDER_TABS.iter().map(|g| g.label()))
        .select(selected)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(panel_block("Gender ◂ ▸", state.focus == Focus::Gender));
    frame.render_widget(tabs, area);
}

pub fn render_search(frame: &mut Frame, area: Rect, state: &TuiState, app: &AppState) {
    let focused = state.focus == Focus::Search;
    let query = &app.filter.search_query;

    let line = if query.is_empty() && !focused {
        Line::from(Span::styled(
            "name, id or locale",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(query.clone())];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(line).block(panel_block("Search", focused)),
        area,
    );
}
