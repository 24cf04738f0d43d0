//! Edit actions
//!
//! Each user gesture on the form maps to one [`EditAction`]. Actions are plain
//! data so the page shell can send them back as JSON; applying one is a
//! synchronous, infallible mutation of the [`SessionState`].

use crate::{Command, CommandOutcome, EditMode, Result, SessionState};
use doc_model::{DetailFieldUpdate, DetailId, ItemFieldUpdate, ItemId, MergeColumn};
use serde::{Deserialize, Serialize};

/// A single edit the user can perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditAction {
    /// Append an empty fabric item
    AddItem,
    RemoveItem {
        item_id: ItemId,
    },
    /// Append an empty colour row to an item
    AddDetail {
        item_id: ItemId,
    },
    RemoveDetail {
        item_id: ItemId,
        detail_id: DetailId,
    },
    UpdateItemField {
        item_id: ItemId,
        update: ItemFieldUpdate,
    },
    UpdateDetailField {
        item_id: ItemId,
        detail_id: DetailId,
        update: DetailFieldUpdate,
    },
    /// Expose a merge control for a column
    AddColumn {
        column: MergeColumn,
    },
    /// Drop a column's merge control (also unmerges it)
    RemoveColumn {
        column: MergeColumn,
    },
    SetMergeFlag {
        column: MergeColumn,
        merged: bool,
    },
    EnableAllActiveMerges,
    DisableAllActiveMerges,
    EnterEditMode,
    /// Leave edit mode ("Save & Exit Edit Mode")
    ExitEditMode,
    ToggleEditMode,
    /// Show or hide the add-column picker
    ToggleAddColumnPanel,
}

impl EditAction {
    /// Decode an action sent by the page shell
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a list of actions
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build an `AddColumn` action from a textual column id
    pub fn add_column(column_id: &str) -> Result<Self> {
        Ok(EditAction::AddColumn {
            column: column_id.parse()?,
        })
    }

    /// Build a `RemoveColumn` action from a textual column id
    pub fn remove_column(column_id: &str) -> Result<Self> {
        Ok(EditAction::RemoveColumn {
            column: column_id.parse()?,
        })
    }

    /// Whether this action touches the merge columns rather than the rows
    pub fn is_column_action(&self) -> bool {
        matches!(
            self,
            EditAction::AddColumn { .. }
                | EditAction::RemoveColumn { .. }
                | EditAction::SetMergeFlag { .. }
                | EditAction::EnableAllActiveMerges
                | EditAction::DisableAllActiveMerges
        )
    }
}

impl Command for EditAction {
    fn apply(&self, state: &mut SessionState) -> CommandOutcome {
        let doc = &mut state.document;
        match self {
            EditAction::AddItem => {
                doc.add_item();
                CommandOutcome::Applied
            }
            EditAction::RemoveItem { item_id } => {
                CommandOutcome::from_change(doc.remove_item(item_id), "no such item")
            }
            EditAction::AddDetail { item_id } => {
                CommandOutcome::from_change(doc.add_detail(item_id).is_some(), "no such item")
            }
            EditAction::RemoveDetail { item_id, detail_id } => {
                // Same rule as WorkOrderItem::remove_detail, checked here for the reason
                let is_last = doc
                    .item(item_id)
                    .is_some_and(|item| item.detail_count() <= 1);
                if is_last {
                    return CommandOutcome::Ignored("item must keep at least one detail row");
                }
                CommandOutcome::from_change(
                    doc.remove_detail(item_id, detail_id),
                    "no such detail row",
                )
            }
            EditAction::UpdateItemField { item_id, update } => CommandOutcome::from_change(
                doc.update_item_field(item_id, update.clone()),
                "no such item",
            ),
            EditAction::UpdateDetailField {
                item_id,
                detail_id,
                update,
            } => CommandOutcome::from_change(
                doc.update_detail_field(item_id, detail_id, update.clone()),
                "no such detail row",
            ),
            EditAction::AddColumn { column } => {
                // Picking a column closes the picker even when it was already active
                let closed = std::mem::replace(&mut state.add_column_panel_open, false);
                let added = state.document.add_column(*column);
                CommandOutcome::from_change(added || closed, "column already active")
            }
            EditAction::RemoveColumn { column } => {
                CommandOutcome::from_change(doc.remove_column(*column), "column not active")
            }
            EditAction::SetMergeFlag { column, merged } => {
                if !doc.merge_controls().active().contains(*column) {
                    return CommandOutcome::Ignored("column not active");
                }
                CommandOutcome::from_change(
                    doc.set_merge_flag(*column, *merged),
                    "merge flag unchanged",
                )
            }
            EditAction::EnableAllActiveMerges => CommandOutcome::from_change(
                doc.enable_all_active_merges() > 0,
                "all active columns already merged",
            ),
            EditAction::DisableAllActiveMerges => CommandOutcome::from_change(
                doc.disable_all_active_merges() > 0,
                "no active column merged",
            ),
            EditAction::EnterEditMode => set_mode(state, EditMode::Edit),
            EditAction::ExitEditMode => set_mode(state, EditMode::View),
            EditAction::ToggleEditMode => {
                let next = state.edit_mode.toggled();
                set_mode(state, next)
            }
            EditAction::ToggleAddColumnPanel => {
                state.add_column_panel_open = !state.add_column_panel_open;
                CommandOutcome::Applied
            }
        }
    }

    fn display_name(&self) -> &str {
        match self {
            EditAction::AddItem => "Add Item",
            EditAction::RemoveItem { .. } => "Remove Item",
            EditAction::AddDetail { .. } => "Add Detail Row",
            EditAction::RemoveDetail { .. } => "Remove Detail Row",
            EditAction::UpdateItemField { .. } => "Update Item Field",
            EditAction::UpdateDetailField { .. } => "Update Detail Field",
            EditAction::AddColumn { .. } => "Add Column Control",
            EditAction::RemoveColumn { .. } => "Remove Column Control",
            EditAction::SetMergeFlag { .. } => "Toggle Merge",
            EditAction::EnableAllActiveMerges => "Enable All Active Merges",
            EditAction::DisableAllActiveMerges => "Disable All Active Merges",
            EditAction::EnterEditMode => "Enter Edit Mode",
            EditAction::ExitEditMode => "Exit Edit Mode",
            EditAction::ToggleEditMode => "Toggle Edit Mode",
            EditAction::ToggleAddColumnPanel => "Toggle Add Column Panel",
        }
    }
}

fn set_mode(state: &mut SessionState, mode: EditMode) -> CommandOutcome {
    if state.edit_mode == mode {
        return CommandOutcome::Ignored("edit mode unchanged");
    }
    state.edit_mode = mode;
    CommandOutcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::WorkOrder;

    fn sample_state() -> SessionState {
        SessionState::new(WorkOrder::sample())
    }

    #[test]
    fn test_add_detail_on_sample_item() {
        let mut state = sample_state();
        let action = EditAction::AddDetail {
            item_id: ItemId::from("1"),
        };
        assert!(action.apply(&mut state).is_applied());

        let item = state.document.item(&ItemId::from("1")).unwrap();
        assert_eq!(item.detail_count(), 3);
        let added = item.details().last().unwrap();
        assert_eq!(added.qty, 0);
        assert_eq!(added.colour, "");
    }

    #[test]
    fn test_remove_last_detail_is_ignored() {
        let mut state = SessionState::default();
        EditAction::AddItem.apply(&mut state);
        let item = state.document.items()[0].clone();
        let before = state.clone();

        let outcome = EditAction::RemoveDetail {
            item_id: item.id.clone(),
            detail_id: item.details()[0].id.clone(),
        }
        .apply(&mut state);

        assert!(!outcome.is_applied());
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut state = sample_state();
        let before = state.clone();
        let outcome = EditAction::UpdateItemField {
            item_id: ItemId::from("404"),
            update: ItemFieldUpdate::Sl(9),
        }
        .apply(&mut state);
        assert_eq!(outcome, CommandOutcome::Ignored("no such item"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_add_column_closes_panel() {
        let mut state = sample_state();
        EditAction::ToggleAddColumnPanel.apply(&mut state);
        assert!(state.add_column_panel_open);

        EditAction::RemoveColumn {
            column: MergeColumn::Gsm,
        }
        .apply(&mut state);
        let outcome = EditAction::AddColumn {
            column: MergeColumn::Gsm,
        }
        .apply(&mut state);
        assert!(outcome.is_applied());
        assert!(!state.add_column_panel_open);
    }

    #[test]
    fn test_add_active_column_still_closes_open_panel() {
        let mut state = sample_state();
        EditAction::ToggleAddColumnPanel.apply(&mut state);

        let outcome = EditAction::AddColumn {
            column: MergeColumn::Sl,
        }
        .apply(&mut state);
        assert!(outcome.is_applied());
        assert!(!state.add_column_panel_open);
        assert_eq!(state.document.merge_controls().active().len(), 6);

        // With the panel already closed nothing changes
        let before = state.clone();
        let outcome = EditAction::AddColumn {
            column: MergeColumn::Sl,
        }
        .apply(&mut state);
        assert_eq!(outcome, CommandOutcome::Ignored("column already active"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_duplicate_add_column_is_ignored() {
        let mut state = sample_state();
        let outcome = EditAction::AddColumn {
            column: MergeColumn::Sl,
        }
        .apply(&mut state);
        assert_eq!(outcome, CommandOutcome::Ignored("column already active"));
        assert_eq!(state.document.merge_controls().active().len(), 6);
    }

    #[test]
    fn test_set_merge_flag_on_removed_column_is_ignored() {
        let mut state = sample_state();
        EditAction::remove_column("quality").unwrap().apply(&mut state);
        let outcome = EditAction::SetMergeFlag {
            column: MergeColumn::Quality,
            merged: true,
        }
        .apply(&mut state);
        assert!(!outcome.is_applied());
        assert!(!state.document.is_merged(MergeColumn::Quality));
    }

    #[test]
    fn test_mode_switches_leave_document_alone() {
        let mut state = sample_state();
        let original = state.document.clone();

        EditAction::EnterEditMode.apply(&mut state);
        assert!(state.edit_mode.is_editing());
        EditAction::ExitEditMode.apply(&mut state);
        assert!(!state.edit_mode.is_editing());
        EditAction::ToggleEditMode.apply(&mut state);
        EditAction::ToggleEditMode.apply(&mut state);

        assert_eq!(state.document, original);
        assert_eq!(
            EditAction::ExitEditMode.apply(&mut state),
            CommandOutcome::Ignored("edit mode unchanged")
        );
    }

    #[test]
    fn test_json_round_trip_shape() {
        let action = EditAction::from_json(r#"{"type": "addDetail", "item_id": "1"}"#).unwrap();
        assert_eq!(
            action,
            EditAction::AddDetail {
                item_id: ItemId::from("1")
            }
        );

        let update = EditAction::from_json(
            r#"{"type": "updateDetailField", "item_id": "2", "detail_id": "2-1",
                "update": {"field": "qty", "value": 1200}}"#,
        )
        .unwrap();
        assert!(matches!(
            update,
            EditAction::UpdateDetailField {
                update: DetailFieldUpdate::Qty(1200),
                ..
            }
        ));

        let toggle = EditAction::from_json(
            r#"{"type": "setMergeFlag", "column": "fabricDesc", "merged": false}"#,
        )
        .unwrap();
        assert!(toggle.is_column_action());
    }

    #[test]
    fn test_bad_input_is_an_error() {
        assert!(EditAction::from_json(r#"{"type": "explode"}"#).is_err());
        assert!(EditAction::add_column("colour").is_err());
    }
}
