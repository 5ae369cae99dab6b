//! src/view/components/input_bar.rs
//! ============================================================================
//! # InputBar: The Task Entry Form
//!
//! Single-line text field at the top of the screen. Always focused; Enter
//! submits its contents. The cursor tracks the end of the input buffer and
//! is hidden while the blocking alert owns the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::app_state::AppState;
use crate::view::theme;

pub struct InputBar;

impl InputBar {
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let palette = theme::palette(app.config.theme);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" New Task ")
            .border_style(Style::default().fg(palette.accent));

        let paragraph = Paragraph::new(app.ui.input.as_str())
            .block(block)
            .style(Style::default().fg(palette.foreground));

        frame.render_widget(paragraph, area);

        if app.ui.alert.is_none() && area.width > 2 && area.height > 2 {
            let x = (area.x + 1 + app.ui.input.len() as u16).min(area.right().saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}
