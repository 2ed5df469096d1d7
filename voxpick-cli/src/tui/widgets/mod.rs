pub mod controls;
pub mod filter_bar;
pub mod language_bar;
pub mod status_bar;
pub mod text_panel;
pub mod voice_list;

use ratatui::{
    style::{Color, Style},
    widgets::Block,
};

/// Bordered panel whose border lights up when it has focus.
pub fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::bordered()
        .title(format!(" {title} "))
        .border_style(Style::default().fg(border))
}
