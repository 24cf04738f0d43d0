//! Edit-mode toolbar
//!
//! Everything above the table: the mode toggle, the merge controls panel and
//! the row management button. Each widget carries the action it dispatches.

use crate::{ButtonVariant, ButtonWidget, CheckboxWidget};
use doc_model::MergeColumn;
use edit_engine::{EditAction, SessionState};
use serde::{Deserialize, Serialize};

/// Notice shown in the add-column panel once every column is active
pub const ALL_COLUMNS_ADDED: &str = "All columns are already added!";

/// Merge checkbox plus its remove button for one active column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeControlWidget {
    pub column: MergeColumn,
    pub checkbox: CheckboxWidget,
    pub remove: ButtonWidget,
}

/// Contents of the add-column picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AddColumnPanel {
    /// One button per column that can be added back
    Choices { buttons: Vec<ButtonWidget> },
    Notice { text: String },
}

/// The merge controls panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePanel {
    /// Shows or hides the add-column picker
    pub panel_toggle: ButtonWidget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_column: Option<AddColumnPanel>,
    /// Active columns in catalog order
    pub controls: Vec<MergeControlWidget>,
    /// Enable-all and disable-all, present while any column is active
    pub bulk: Vec<ButtonWidget>,
}

/// Controls rendered above the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolbar {
    pub mode_toggle: ButtonWidget,
    /// Only present in edit mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_panel: Option<MergePanel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_item: Option<ButtonWidget>,
}

impl Toolbar {
    /// Build the toolbar for the current session
    pub fn render(state: &SessionState) -> Self {
        if !state.edit_mode.is_editing() {
            return Self {
                mode_toggle: ButtonWidget::new("Edit Mode", EditAction::EnterEditMode),
                merge_panel: None,
                add_item: None,
            };
        }

        Self {
            mode_toggle: ButtonWidget::new("Save & Exit Edit Mode", EditAction::ExitEditMode),
            merge_panel: Some(merge_panel(state)),
            add_item: Some(ButtonWidget::new("Add New Fabric Item", EditAction::AddItem)),
        }
    }
}

fn merge_panel(state: &SessionState) -> MergePanel {
    let merge = state.document.merge_controls();
    let active = merge.active();

    let toggle_label = if state.add_column_panel_open {
        "Hide Column Control"
    } else {
        "Add Column Control"
    };
    let panel_toggle = ButtonWidget::new(toggle_label, EditAction::ToggleAddColumnPanel)
        .with_variant(ButtonVariant::Outline);

    let add_column = state.add_column_panel_open.then(|| {
        let available = active.available_to_add();
        if available.is_empty() {
            AddColumnPanel::Notice {
                text: ALL_COLUMNS_ADDED.to_string(),
            }
        } else {
            AddColumnPanel::Choices {
                buttons: available
                    .into_iter()
                    .map(|column| {
                        ButtonWidget::new(column.label(), EditAction::AddColumn { column })
                            .with_variant(ButtonVariant::Outline)
                    })
                    .collect(),
            }
        }
    });

    let controls = active
        .in_catalog_order()
        .into_iter()
        .map(|column| {
            let checked = merge.is_merged(column);
            MergeControlWidget {
                column,
                checkbox: CheckboxWidget {
                    label: format!("Merge {}", column.label()),
                    checked,
                    on_toggle: EditAction::SetMergeFlag {
                        column,
                        merged: !checked,
                    },
                },
                remove: ButtonWidget::new("Remove", EditAction::RemoveColumn { column })
                    .with_variant(ButtonVariant::Ghost),
            }
        })
        .collect();

    let bulk = if active.is_empty() {
        Vec::new()
    } else {
        vec![
            ButtonWidget::new("Enable All Active Merges", EditAction::EnableAllActiveMerges),
            ButtonWidget::new("Disable All Active Merges", EditAction::DisableAllActiveMerges)
                .with_variant(ButtonVariant::Outline),
        ]
    };

    MergePanel {
        panel_toggle,
        add_column,
        controls,
        bulk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::WorkOrder;
    use edit_engine::{Command, EditMode};

    fn editing_state() -> SessionState {
        SessionState {
            edit_mode: EditMode::Edit,
            ..SessionState::new(WorkOrder::sample())
        }
    }

    #[test]
    fn test_view_mode_only_has_toggle() {
        let toolbar = Toolbar::render(&SessionState::new(WorkOrder::sample()));
        assert_eq!(toolbar.mode_toggle.label, "Edit Mode");
        assert_eq!(toolbar.mode_toggle.action, EditAction::EnterEditMode);
        assert!(toolbar.merge_panel.is_none());
        assert!(toolbar.add_item.is_none());
    }

    #[test]
    fn test_merge_controls_in_catalog_order() {
        let mut state = editing_state();
        EditAction::RemoveColumn { column: MergeColumn::Sl }.apply(&mut state);
        EditAction::AddColumn { column: MergeColumn::Sl }.apply(&mut state);

        let toolbar = Toolbar::render(&state);
        assert_eq!(toolbar.mode_toggle.label, "Save & Exit Edit Mode");
        let panel = toolbar.merge_panel.unwrap();
        let labels: Vec<_> = panel.controls.iter().map(|c| c.checkbox.label.as_str()).collect();
        assert_eq!(labels[0], "Merge S/L Column");
        assert_eq!(labels[5], "Merge Nature of Work");

        // Re-added column comes back unmerged; clicking it merges
        assert!(!panel.controls[0].checkbox.checked);
        assert_eq!(
            panel.controls[0].checkbox.on_toggle,
            EditAction::SetMergeFlag {
                column: MergeColumn::Sl,
                merged: true
            }
        );
        assert_eq!(panel.bulk.len(), 2);
    }

    #[test]
    fn test_add_column_panel_contents() {
        let mut state = editing_state();
        EditAction::ToggleAddColumnPanel.apply(&mut state);
        let panel = Toolbar::render(&state).merge_panel.unwrap();
        assert_eq!(panel.panel_toggle.label, "Hide Column Control");
        assert_eq!(
            panel.add_column,
            Some(AddColumnPanel::Notice {
                text: ALL_COLUMNS_ADDED.to_string()
            })
        );

        EditAction::RemoveColumn { column: MergeColumn::Gsm }.apply(&mut state);
        let panel = Toolbar::render(&state).merge_panel.unwrap();
        match panel.add_column {
            Some(AddColumnPanel::Choices { buttons }) => {
                assert_eq!(buttons.len(), 1);
                assert_eq!(buttons[0].label, "GSM");
            }
            other => panic!("expected choices, got {:?}", other),
        }
    }

    #[test]
    fn test_bulk_buttons_hidden_without_active_columns() {
        let mut state = editing_state();
        for column in MergeColumn::ALL {
            EditAction::RemoveColumn { column }.apply(&mut state);
        }
        let panel = Toolbar::render(&state).merge_panel.unwrap();
        assert!(panel.controls.is_empty());
        assert!(panel.bulk.is_empty());
    }
}
