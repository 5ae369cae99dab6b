//! src/model/app_state.rs
//! ============================================================================
//! # AppState: Application State
//!
//! `AppState` unifies all state for the task list TUI: the ordered task
//! container, the interaction state, and the last status message. The two
//! mutation paths are `submit_input` (the submission handler) and
//! `remove_task` (reached only through the delegated removal handler); both
//! run to completion inside a single dispatch, so no further coordination
//! is needed.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::model::task_list::{TaskId, TaskList};
use crate::model::ui_state::{Alert, UIState};

/// Core application state struct.
pub struct AppState {
    pub config: Arc<Config>,
    pub tasks: TaskList,
    pub ui: UIState,
    pub last_status: Option<String>,
    pub redraw: bool,
}

impl AppState {
    /// Construct a new, ready-to-use AppState.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            tasks: TaskList::new(),
            ui: UIState::new(),
            last_status: None,
            redraw: true,
        }
    }

    /// Submission handler: turn the current input buffer into a new task
    /// entry, or raise the blocking alert when the buffer is empty.
    ///
    /// Empty means the exact empty string; no trimming is applied. The
    /// rejected submission leaves every other piece of state untouched and
    /// is user-correctable, so it is not treated as an error.
    pub fn submit_input(&mut self) {
        if self.ui.input.is_empty() {
            info!("Rejected empty task submission");
            self.ui.show_alert(Alert::invalid_input());
        } else {
            let text = std::mem::take(&mut self.ui.input);
            let id = self.tasks.add(text);
            self.set_status(format!("Added task #{id}"));
        }
        self.redraw = true;
    }

    /// Remove the entry owning the activated removal control. Returns
    /// whether an entry was actually removed.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        match self.tasks.remove(id) {
            Some(entry) => {
                info!("Removed task #{}: {:?}", id, entry.text);
                self.set_status(format!("Removed task #{id}"));
                self.redraw = true;
                true
            }
            None => {
                warn!("Removal requested for unknown task #{id}");
                false
            }
        }
    }

    /// Acknowledge the blocking alert.
    pub fn dismiss_alert(&mut self) {
        self.ui.dismiss_alert();
        self.redraw = true;
    }

    /// Set the latest status message (shown in the status bar).
    pub fn set_status(&mut self, msg: impl Into<String>) {
        let msg_str = msg.into();
        info!("Status: {}", msg_str);
        self.last_status = Some(msg_str);
        self.redraw = true;
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &"Config")
            .field("tasks", &self.tasks)
            .field("ui", &self.ui)
            .field("last_status", &self.last_status)
            .field("redraw", &self.redraw)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Arc::new(Config::default()))
    }

    #[test]
    fn non_empty_submission_adds_exactly_one_entry() {
        let mut app = state();
        app.ui.input = "buy milk".to_string();

        app.submit_input();

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.get(0).unwrap().text, "buy milk");
        assert!(app.ui.alert.is_none());
    }

    #[test]
    fn input_is_cleared_after_submission() {
        let mut app = state();
        app.ui.input = "water plants".to_string();

        app.submit_input();

        assert_eq!(app.ui.input, "");
    }

    #[test]
    fn empty_submission_is_a_no_op_on_the_list() {
        let mut app = state();
        app.ui.input = "existing".to_string();
        app.submit_input();

        app.submit_input(); // buffer is now empty

        assert_eq!(app.tasks.len(), 1);
        assert!(app.ui.alert_active());
        assert_eq!(
            app.ui.alert.as_ref().unwrap().message,
            "Invalid input. Please enter a task."
        );
    }

    #[test]
    fn whitespace_input_is_not_empty() {
        // exact empty-string check, no trimming
        let mut app = state();
        app.ui.input = " ".to_string();

        app.submit_input();

        assert_eq!(app.tasks.len(), 1);
        assert!(app.ui.alert.is_none());
    }

    #[test]
    fn submissions_preserve_insertion_order() {
        let mut app = state();
        for text in ["one", "two", "three"] {
            app.ui.input = text.to_string();
            app.submit_input();
        }

        let texts: Vec<&str> = app.tasks.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn remove_task_reports_unknown_ids() {
        let mut app = state();
        app.ui.input = "only".to_string();
        app.submit_input();
        let id = app.tasks.get(0).unwrap().id;

        assert!(app.remove_task(id));
        assert!(!app.remove_task(id));
        assert!(app.tasks.is_empty());
    }
}
