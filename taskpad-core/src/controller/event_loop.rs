//! src/controller/event_loop.rs
//! ============================================================================
//! # Controller: Async Event Loop
//!
//! The Controller owns the terminal event stream and translates raw events
//! into [`Action`]s, which it applies to the shared `AppState` one at a
//! time. Both the submission handler and the delegated removal handler run
//! to completion inside `apply`, so the rendered state is always
//! consistent between events.
//!
//! The delegated removal handler is registered here exactly once, as the
//! mouse branch of `apply`: it is scoped to the list container recorded by
//! the last render, and re-derives the current set of removal controls on
//! every click instead of caching them. Controls belonging to entries
//! created long after startup therefore work without any extra
//! registration step.

use std::sync::Arc;

use crossterm::event::{
    Event as TermEvent, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::layout::Position;
use tokio::sync::Mutex;
use tracing::error;

use crate::controller::actions::Action;
use crate::model::app_state::AppState;
use crate::view::components::task_table::TaskTable;

/// Controller struct: owns the terminal event source and the shared state.
pub struct Controller {
    pub app: Arc<Mutex<AppState>>,
    events: EventStream,
}

impl Controller {
    pub fn new(app: Arc<Mutex<AppState>>) -> Self {
        Self {
            app,
            events: EventStream::new(),
        }
    }

    /// Waits for the next terminal event and translates it into an action.
    /// Returns `None` when the event stream ends.
    pub async fn next_action(&mut self) -> Option<Action> {
        loop {
            match self.events.next().await? {
                Ok(event) => {
                    let alert_active = self.app.lock().await.ui.alert_active();
                    if let Some(action) = map_event(&event, alert_active) {
                        return Some(action);
                    }
                }
                Err(e) => {
                    error!("Terminal event stream error: {}", e);
                    return None;
                }
            }
        }
    }

    /// Apply a single action to the shared state.
    pub async fn dispatch_action(&self, action: Action) {
        let mut state = self.app.lock().await;
        apply(&mut state, action);
    }
}

/// Translate a raw terminal event into a semantic action.
///
/// While the blocking alert is active only the acknowledgment keys map to
/// anything; every other key press and mouse event is swallowed until the
/// user acknowledges.
pub fn map_event(event: &TermEvent, alert_active: bool) -> Option<Action> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            if alert_active {
                return match key.code {
                    KeyCode::Enter | KeyCode::Esc => Some(Action::DismissAlert),
                    _ => None,
                };
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::Quit)
                }
                KeyCode::Esc => Some(Action::Quit),
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Backspace => Some(Action::DeleteChar),
                KeyCode::Up => Some(Action::ScrollUp),
                KeyCode::Down => Some(Action::ScrollDown),
                KeyCode::Char(c) => Some(Action::InsertChar(c)),
                _ => None,
            }
        }
        TermEvent::Mouse(mouse) => {
            if alert_active {
                return None;
            }
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                MouseEventKind::ScrollUp => Some(Action::ScrollUp),
                MouseEventKind::ScrollDown => Some(Action::ScrollDown),
                _ => None,
            }
        }
        TermEvent::Resize(w, h) => Some(Action::Resize(*w, *h)),
        _ => None,
    }
}

/// Apply one action to state. Runs to completion; actions arrive strictly
/// one at a time.
pub fn apply(state: &mut AppState, action: Action) {
    match action {
        Action::InsertChar(c) => {
            state.ui.push_char(c);
            state.redraw = true;
        }
        Action::DeleteChar => {
            state.ui.pop_char();
            state.redraw = true;
        }
        Action::Submit => state.submit_input(),
        Action::DismissAlert => state.dismiss_alert(),
        Action::Click { column, row } => handle_click(state, Position::new(column, row)),
        Action::ScrollUp => {
            if state.ui.scroll > 0 {
                state.ui.scroll -= 1;
                state.redraw = true;
            }
        }
        Action::ScrollDown => {
            let viewport = (state.ui.layout.list_rows.height as usize).max(1);
            let max_scroll = state.tasks.len().saturating_sub(viewport);
            if state.ui.scroll < max_scroll {
                state.ui.scroll += 1;
                state.redraw = true;
            }
        }
        Action::Resize(_, _) => {
            // areas are recomputed on the next render pass
            state.redraw = true;
        }
        Action::Quit => {
            // handled by the run loop before dispatch
        }
    }
}

/// Delegated removal handler.
///
/// Scoped to the list container recorded by the last render. The control
/// rectangles are recomputed from the live task list, scroll offset, and
/// container geometry on every click; a click qualifies only when its
/// exact origin cell lies inside a control, so clicks on entry text or
/// padding remove nothing. At most one control can contain the origin, so
/// scanning stops at the first match.
fn handle_click(state: &mut AppState, origin: Position) {
    if !state.ui.layout.list_area.contains(origin) {
        return;
    }

    let controls = TaskTable::removal_controls(
        &state.tasks,
        state.ui.layout.list_rows,
        state.ui.scroll,
    );
    for (id, control) in controls {
        if control.contains(origin) {
            state.remove_task(id);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crossterm::event::{KeyEvent, MouseEvent};
    use ratatui::layout::Rect;

    use crate::config::Config;
    use crate::model::ui_state::LayoutMap;

    /// State with the layout a render pass over a 40x15 terminal records.
    fn laid_out_state() -> AppState {
        let mut app = AppState::new(Arc::new(Config::default()));
        let list_area = Rect::new(0, 3, 40, 10);
        app.ui.layout = LayoutMap {
            input_area: Rect::new(0, 0, 40, 3),
            list_area,
            list_rows: TaskTable::rows_area(list_area, app.config.show_footer),
            status_area: Rect::new(0, 13, 40, 2),
        };
        app
    }

    fn submit(app: &mut AppState, text: &str) {
        app.ui.input = text.to_string();
        apply(app, Action::Submit);
    }

    fn controls(app: &AppState) -> Vec<(crate::model::task_list::TaskId, Rect)> {
        TaskTable::removal_controls(&app.tasks, app.ui.layout.list_rows, app.ui.scroll)
    }

    fn key(code: KeyCode) -> TermEvent {
        TermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn left_click(column: u16, row: u16) -> TermEvent {
        TermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn key_events_map_to_editing_actions() {
        assert_eq!(
            map_event(&key(KeyCode::Char('a')), false),
            Some(Action::InsertChar('a'))
        );
        assert_eq!(
            map_event(&key(KeyCode::Backspace), false),
            Some(Action::DeleteChar)
        );
        assert_eq!(map_event(&key(KeyCode::Enter), false), Some(Action::Submit));
        assert_eq!(map_event(&key(KeyCode::Esc), false), Some(Action::Quit));
    }

    #[test]
    fn key_release_events_are_ignored() {
        let release = TermEvent::Key(KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(map_event(&release, false), None);
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let event = TermEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&event, false), Some(Action::Quit));
    }

    #[test]
    fn alert_swallows_everything_but_acknowledgment() {
        assert_eq!(map_event(&key(KeyCode::Char('x')), true), None);
        assert_eq!(map_event(&left_click(5, 5), true), None);
        assert_eq!(
            map_event(&key(KeyCode::Enter), true),
            Some(Action::DismissAlert)
        );
        assert_eq!(
            map_event(&key(KeyCode::Esc), true),
            Some(Action::DismissAlert)
        );
    }

    #[test]
    fn typing_then_submit_adds_an_entry() {
        let mut app = laid_out_state();
        for c in "call mom".chars() {
            apply(&mut app, Action::InsertChar(c));
        }
        apply(&mut app, Action::Submit);

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.get(0).unwrap().text, "call mom");
        assert_eq!(app.ui.input, "");
    }

    #[test]
    fn click_on_removal_control_removes_exactly_that_entry() {
        let mut app = laid_out_state();
        for text in ["one", "two", "three", "four"] {
            submit(&mut app, text);
        }

        let (_, control) = controls(&app)[1];
        apply(
            &mut app,
            Action::Click {
                column: control.x,
                row: control.y,
            },
        );

        let texts: Vec<&str> = app.tasks.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "three", "four"]);
    }

    #[test]
    fn click_on_entry_text_removes_nothing() {
        let mut app = laid_out_state();
        submit(&mut app, "untouchable");

        let rows = app.ui.layout.list_rows;
        apply(
            &mut app,
            Action::Click {
                column: rows.x,
                row: rows.y,
            },
        );
        // one cell to the left of the control is still not the control
        let (_, control) = controls(&app)[0];
        apply(
            &mut app,
            Action::Click {
                column: control.x - 1,
                row: control.y,
            },
        );

        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn click_outside_the_list_container_removes_nothing() {
        let mut app = laid_out_state();
        submit(&mut app, "safe");

        apply(&mut app, Action::Click { column: 5, row: 1 }); // input field
        apply(&mut app, Action::Click { column: 5, row: 14 }); // status bar

        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn controls_created_after_removals_still_work() {
        let mut app = laid_out_state();
        submit(&mut app, "first");
        submit(&mut app, "second");

        let (_, control) = controls(&app)[1];
        apply(
            &mut app,
            Action::Click {
                column: control.x,
                row: control.y,
            },
        );
        assert_eq!(app.tasks.len(), 1);

        submit(&mut app, "third");
        let (_, control) = controls(&app)[1];
        apply(
            &mut app,
            Action::Click {
                column: control.x,
                row: control.y,
            },
        );

        let texts: Vec<&str> = app.tasks.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first"]);
    }

    #[test]
    fn hit_testing_respects_the_scroll_offset() {
        let mut app = laid_out_state();
        for i in 0..10 {
            submit(&mut app, format!("task {i}").as_str());
        }
        app.ui.scroll = 3;

        // first visible row now belongs to the fourth entry
        let (_, control) = controls(&app)[0];
        apply(
            &mut app,
            Action::Click {
                column: control.x,
                row: control.y,
            },
        );

        assert_eq!(app.tasks.len(), 9);
        assert!(app.tasks.iter().all(|e| e.text != "task 3"));
    }

    #[test]
    fn empty_submission_raises_alert_and_acknowledgment_clears_it() {
        let mut app = laid_out_state();
        apply(&mut app, Action::Submit);

        assert!(app.ui.alert_active());
        assert!(app.tasks.is_empty());

        apply(&mut app, Action::DismissAlert);
        assert!(!app.ui.alert_active());

        submit(&mut app, "back to normal");
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn scroll_is_clamped_to_the_list_length() {
        let mut app = laid_out_state();
        let viewport = app.ui.layout.list_rows.height as usize;
        for i in 0..viewport + 1 {
            submit(&mut app, format!("task {i}").as_str());
        }

        apply(&mut app, Action::ScrollUp); // already at the top
        assert_eq!(app.ui.scroll, 0);

        for _ in 0..5 {
            apply(&mut app, Action::ScrollDown);
        }
        assert_eq!(app.ui.scroll, 1);
    }

    #[test]
    fn resize_requests_a_redraw() {
        let mut app = laid_out_state();
        app.redraw = false;

        apply(&mut app, Action::Resize(80, 24));
        assert!(app.redraw);
    }
}
