//! src/view/components/alert_overlay.rs
//! ============================================================================
//! # AlertOverlay: Blocking User Notification
//!
//! Centered modal shown when a submission is rejected. The controller
//! swallows all other input while it is visible, so the handler's
//! continuation is effectively gated on user acknowledgment.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::model::app_state::AppState;
use crate::view::theme;

pub struct AlertOverlay;

impl AlertOverlay {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let Some(alert) = &app.ui.alert else {
            return;
        };
        let palette = theme::palette(app.config.theme);

        let overlay_area = Self::centered_rect(50, 20, area);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Alert ")
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(palette.red).bold())
            .border_style(Style::default().fg(palette.red))
            .style(Style::default().bg(palette.background));

        let paragraph = Paragraph::new(alert.message.as_str())
            .block(block)
            .style(Style::default().fg(palette.foreground))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, overlay_area);

        // help text below the box
        let help_area = Rect {
            x: overlay_area.x,
            y: overlay_area.y + overlay_area.height,
            width: overlay_area.width,
            height: 1,
        };
        if help_area.y < area.bottom() {
            let help = Paragraph::new("Enter to dismiss")
                .style(Style::default().fg(palette.comment))
                .alignment(Alignment::Center);
            frame.render_widget(help, help_area);
        }
    }

    /// Centers a rectangle of given width/height percentages within the area.
    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1]);

        horizontal[1]
    }
}
