//! src/view/ui.rs
//! ============================================================================
//! # View: TUI Render Orchestrator
//!
//! Each draw cycle lays out the input form, the task list container, and
//! the status bar, records the resulting regions into the UI state (the
//! click handler is scoped by them), and renders the blocking alert on top
//! when active.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::model::app_state::AppState;
use crate::model::ui_state::LayoutMap;
use crate::view::components::alert_overlay::AlertOverlay;
use crate::view::components::input_bar::InputBar;
use crate::view::components::status_bar::StatusBar;
use crate::view::components::task_table::TaskTable;

pub struct View;

impl View {
    /// Draws the full UI for one frame; to be called in the
    /// `terminal.draw(|frame| ...)` callback.
    pub fn redraw(frame: &mut Frame<'_>, app: &mut AppState) {
        let full: Rect = frame.area();
        let chunks: Vec<Rect> = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // input form
                Constraint::Min(1),    // task list container
                Constraint::Length(2), // status bar
            ])
            .split(full)
            .to_vec();

        app.ui.layout = LayoutMap {
            input_area: chunks[0],
            list_area: chunks[1],
            list_rows: TaskTable::rows_area(chunks[1], app.config.show_footer),
            status_area: chunks[2],
        };

        // keep the viewport offset valid for the current geometry
        let viewport = (app.ui.layout.list_rows.height as usize).max(1);
        let max_scroll = app.tasks.len().saturating_sub(viewport);
        if app.ui.scroll > max_scroll {
            app.ui.scroll = max_scroll;
        }

        InputBar::render(frame, app, chunks[0]);
        TaskTable::render(frame, app, chunks[1]);
        StatusBar::render(frame, app, chunks[2]);

        if app.ui.alert.is_some() {
            AlertOverlay::render(frame, app, full);
        }
    }
}
