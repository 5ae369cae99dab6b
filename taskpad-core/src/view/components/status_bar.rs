//! src/view/components/status_bar.rs
//! ============================================================================
//! # StatusBar: Persistent Status/Info Display
//!
//! - Renders the last action message or a ready hint at the bottom of UI
//! - Shows the live entry count on the right

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::app_state::AppState;
use crate::view::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let palette = theme::palette(app.config.theme);

        let status_block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.comment));
        frame.render_widget(status_block, area);

        if area.height < 2 {
            return;
        }
        let text_area = Rect::new(area.x, area.y + 1, area.width, 1);

        let (msg, style) = if let Some(ref status) = app.last_status {
            (status.clone(), Style::default().fg(palette.green))
        } else {
            ("Ready".to_string(), Style::default().fg(palette.comment))
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(text_area);

        let left_para = Paragraph::new(Line::from(Span::styled(format!(" {msg} "), style)))
            .alignment(Alignment::Left);

        let right_text = format!("{} tasks ", app.tasks.len());
        let right_para = Paragraph::new(Line::from(Span::styled(
            right_text,
            Style::default().fg(palette.yellow),
        )))
        .alignment(Alignment::Right);

        frame.render_widget(left_para, chunks[0]);
        frame.render_widget(right_para, chunks[1]);
    }
}
