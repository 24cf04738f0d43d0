//! Command system for work order editing

use doc_model::WorkOrder;
use serde::{Deserialize, Serialize};

/// Whether the table renders static text or editable inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    #[default]
    View,
    Edit,
}

impl EditMode {
    pub fn is_editing(self) -> bool {
        self == EditMode::Edit
    }

    pub fn toggled(self) -> Self {
        match self {
            EditMode::View => EditMode::Edit,
            EditMode::Edit => EditMode::View,
        }
    }
}

impl From<bool> for EditMode {
    fn from(editing: bool) -> Self {
        if editing {
            EditMode::Edit
        } else {
            EditMode::View
        }
    }
}

/// Everything a command may touch: the document plus view-local flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The work order being edited
    pub document: WorkOrder,
    /// Current content mode of the table
    pub edit_mode: EditMode,
    /// Whether the "add column control" picker is open
    pub add_column_panel_open: bool,
}

impl SessionState {
    pub fn new(document: WorkOrder) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }
}

/// What happened when a command ran.
///
/// Commands never fail; an ignored command leaves the state exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum CommandOutcome {
    /// The state changed
    Applied,
    /// Nothing to do; carries the reason
    Ignored(&'static str),
}

impl CommandOutcome {
    pub fn is_applied(self) -> bool {
        self == CommandOutcome::Applied
    }

    /// `Applied` when `changed`, otherwise `Ignored(reason)`
    pub fn from_change(changed: bool, reason: &'static str) -> Self {
        if changed {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Ignored(reason)
        }
    }
}

/// Trait for all editing commands
pub trait Command: std::fmt::Debug {
    /// Apply this command to the session state
    fn apply(&self, state: &mut SessionState) -> CommandOutcome;

    /// Get a display name for this command
    fn display_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_mode_toggle_round_trip() {
        assert_eq!(EditMode::View.toggled(), EditMode::Edit);
        assert_eq!(EditMode::View.toggled().toggled(), EditMode::View);
        assert!(EditMode::from(true).is_editing());
        assert!(!EditMode::default().is_editing());
    }

    #[test]
    fn test_outcome_from_change() {
        assert!(CommandOutcome::from_change(true, "unused").is_applied());
        assert_eq!(
            CommandOutcome::from_change(false, "no such item"),
            CommandOutcome::Ignored("no such item")
        );
    }
}
