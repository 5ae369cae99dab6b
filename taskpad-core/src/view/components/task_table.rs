//! src/view/components/task_table.rs
//! ============================================================================
//! # TaskTable: The Task List Container
//!
//! Renders the live task list: one row per entry, showing the entry text,
//! a trailing space separator, the creation time, and the removal control
//! at the right edge of the row.
//!
//! This component is also the geometry source of truth for click handling:
//! `removal_controls` produces the control rectangle for every currently
//! visible entry, tagged with the owning `TaskId`, and is called fresh by
//! the delegated removal handler on every click. Rendering draws the
//! controls from the same function, so what the user clicks is exactly
//! what the handler tests against.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::app_state::AppState;
use crate::model::task_list::{TaskId, TaskList};
use crate::view::theme;

/// Label of the per-entry removal control.
const REMOVE_LABEL: &str = "[Delete Task]";

/// Width reserved for the creation timestamp (HH:MM:SS).
const TIME_WIDTH: u16 = 8;

pub struct TaskTable;

impl TaskTable {
    /// The interior strip of the container where entry rows are laid out,
    /// excluding borders and the optional keymap footer line.
    pub fn rows_area(area: Rect, show_footer: bool) -> Rect {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if show_footer && inner.height > 1 {
            Rect {
                height: inner.height - 1,
                ..inner
            }
        } else {
            inner
        }
    }

    /// Current removal-control rectangles, one per visible entry, each
    /// tagged with its owning entry id. Recomputed from the live list and
    /// geometry on every call; nothing is cached.
    pub fn removal_controls(tasks: &TaskList, rows: Rect, scroll: usize) -> Vec<(TaskId, Rect)> {
        let mut controls = Vec::new();
        if rows.width == 0 || rows.height == 0 {
            return controls;
        }

        #[allow(clippy::cast_possible_truncation)]
        let width = (REMOVE_LABEL.len() as u16).min(rows.width);
        let x = rows.x + rows.width - width;

        for (row, entry) in tasks
            .iter()
            .skip(scroll)
            .take(rows.height as usize)
            .enumerate()
        {
            #[allow(clippy::cast_possible_truncation)]
            let y = rows.y + row as u16;
            controls.push((entry.id, Rect::new(x, y, width, 1)));
        }
        controls
    }

    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let palette = theme::palette(app.config.theme);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Tasks — {} entries ", app.tasks.len()))
            .border_style(Style::default().fg(palette.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Self::rows_area(area, app.config.show_footer);

        // Keymap footer, always visible when configured
        if app.config.show_footer && inner.height > rows.height {
            let keymap: String = [
                "[Enter] Add",
                "[Click Delete] Remove",
                "[↑/↓] Scroll",
                "[Esc] Quit",
            ]
            .join("   ");
            let footer = Paragraph::new(Span::styled(
                keymap,
                Style::default()
                    .fg(palette.comment)
                    .add_modifier(Modifier::ITALIC),
            ));
            frame.render_widget(footer, Rect::new(inner.x, rows.y + rows.height, inner.width, 1));
        }

        if app.tasks.is_empty() {
            if rows.height > 0 {
                let hint = Paragraph::new(Span::styled(
                    "No tasks yet. Type a task above and press Enter.",
                    Style::default().fg(palette.comment),
                ));
                frame.render_widget(hint, Rect::new(rows.x, rows.y, rows.width, 1));
            }
            return;
        }

        let controls = Self::removal_controls(&app.tasks, rows, app.ui.scroll);
        let control_width = controls.first().map_or(0, |(_, c)| c.width);
        let text_width = rows
            .width
            .saturating_sub(control_width + TIME_WIDTH + 1);

        for (row, entry) in app
            .tasks
            .iter()
            .skip(app.ui.scroll)
            .take(rows.height as usize)
            .enumerate()
        {
            #[allow(clippy::cast_possible_truncation)]
            let y = rows.y + row as u16;

            if text_width > 0 {
                // one trailing space separator before the control
                let text = format!("{} ", entry.text);
                let line = Paragraph::new(Span::styled(
                    text,
                    Style::default().fg(palette.foreground),
                ));
                frame.render_widget(line, Rect::new(rows.x, y, text_width, 1));
            }

            if rows.width > control_width + TIME_WIDTH {
                let time = entry.created_at.format("%H:%M:%S").to_string();
                let stamp =
                    Paragraph::new(Span::styled(time, Style::default().fg(palette.comment)));
                frame.render_widget(stamp, Rect::new(rows.x + text_width, y, TIME_WIDTH, 1));
            }
        }

        // the removal controls, drawn from the same rectangles the click
        // handler tests against
        for (_, control) in controls {
            let button = Paragraph::new(Span::styled(
                REMOVE_LABEL,
                Style::default()
                    .fg(palette.background)
                    .bg(palette.red)
                    .add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(button, control);
        }
    }
}
