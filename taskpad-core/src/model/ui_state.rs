//! src/model/ui_state.rs
//! ============================================================================
//! # UIState: Interaction State
//!
//! Tracks the input buffer (the text field), the blocking alert modal, the
//! list scroll offset, and the screen regions recorded by the last render
//! pass. The layout map is what scopes the delegated click handler: the
//! list area is the stable container, registered once and updated only by
//! rendering, while the removal controls inside it are recomputed fresh on
//! every click.

use ratatui::layout::Rect;

/// Blocking user notification. While one is active, every key and mouse
/// event except the acknowledgment keys is swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

impl Alert {
    /// The one recognized user-level failure: an empty task submission.
    pub fn invalid_input() -> Self {
        Self {
            message: "Invalid input. Please enter a task.".to_string(),
        }
    }
}

/// Screen regions recorded by the most recent render pass.
///
/// `list_area` is the container region the delegated removal handler is
/// scoped to (borders included); `list_rows` is the interior strip where
/// entry rows and their removal controls are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutMap {
    pub input_area: Rect,
    pub list_area: Rect,
    pub list_rows: Rect,
    pub status_area: Rect,
}

/// Complete interaction state for the task list UI.
#[derive(Debug, Clone, Default)]
pub struct UIState {
    /// User input buffer (the text field). Always focused.
    pub input: String,
    /// Currently active blocking alert, if any.
    pub alert: Option<Alert>,
    /// List viewport offset (index of the first visible entry).
    pub scroll: usize,
    /// Regions recorded by the last render.
    pub layout: LayoutMap,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn show_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn alert_active(&self) -> bool {
        self.alert.is_some()
    }
}
