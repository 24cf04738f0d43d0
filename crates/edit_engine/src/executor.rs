//! Command execution engine

use crate::{Command, CommandOutcome, EditAction, EditMode, FieldBinding, Result, SessionState};
use doc_model::WorkOrder;

/// Owns the work order and view state, and runs every edit against them.
///
/// Each call to [`EditingEngine::execute`] runs to completion before the caller
/// re-renders; there is no queued or deferred work.
#[derive(Debug, Default)]
pub struct EditingEngine {
    state: SessionState,
    /// Incremented on every applied command
    version: u64,
}

impl EditingEngine {
    /// Create an engine over a document, starting in view mode
    pub fn new(document: WorkOrder) -> Self {
        Self {
            state: SessionState::new(document),
            version: 0,
        }
    }

    /// Set the initial edit mode
    pub fn with_edit_mode(mut self, mode: EditMode) -> Self {
        self.state.edit_mode = mode;
        self
    }

    pub fn document(&self) -> &WorkOrder {
        &self.state.document
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn edit_mode(&self) -> EditMode {
        self.state.edit_mode
    }

    pub fn is_editing(&self) -> bool {
        self.state.edit_mode.is_editing()
    }

    pub fn add_column_panel_open(&self) -> bool {
        self.state.add_column_panel_open
    }

    /// Number of commands that changed state so far
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Execute a command
    pub fn execute(&mut self, command: &dyn Command) -> CommandOutcome {
        let outcome = command.apply(&mut self.state);
        match outcome {
            CommandOutcome::Applied => {
                self.version += 1;
                tracing::debug!(
                    command = command.display_name(),
                    version = self.version,
                    "command applied: {:?}",
                    command
                );
            }
            CommandOutcome::Ignored(reason) => {
                tracing::debug!(command = command.display_name(), reason, "command ignored");
            }
        }
        outcome
    }

    /// Execute an edit action, logging merge-column changes at info level
    pub fn dispatch(&mut self, action: &EditAction) -> CommandOutcome {
        let outcome = self.execute(action);
        if action.is_column_action() && outcome.is_applied() {
            tracing::info!(action = action.display_name(), "merge controls changed: {:?}", action);
        }
        outcome
    }

    /// Execute a batch of actions in order
    pub fn dispatch_all<'a>(
        &mut self,
        actions: impl IntoIterator<Item = &'a EditAction>,
    ) -> Vec<CommandOutcome> {
        actions
            .into_iter()
            .map(|action| self.dispatch(action))
            .collect()
    }

    /// Decode and execute an action sent as JSON
    pub fn dispatch_json(&mut self, json: &str) -> Result<CommandOutcome> {
        let action = EditAction::from_json(json)?;
        Ok(self.dispatch(&action))
    }

    /// Apply the text typed into a bound input
    pub fn input(&mut self, binding: &FieldBinding, raw: &str) -> CommandOutcome {
        self.dispatch(&binding.on_change(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{DetailField, DetailId, ItemId, MergeColumn};

    #[test]
    fn test_version_counts_applied_commands_only() {
        let mut engine = EditingEngine::new(WorkOrder::sample());
        engine.dispatch(&EditAction::AddItem);
        engine.dispatch(&EditAction::RemoveItem {
            item_id: ItemId::from("nope"),
        });
        engine.dispatch(&EditAction::EnterEditMode);
        assert_eq!(engine.version(), 2);
    }

    #[test]
    fn test_add_active_column_with_panel_open_bumps_version() {
        let mut engine = EditingEngine::new(WorkOrder::sample());
        engine.dispatch(&EditAction::ToggleAddColumnPanel);
        let outcome = engine.dispatch(&EditAction::AddColumn {
            column: MergeColumn::Sl,
        });
        assert!(outcome.is_applied());
        assert!(!engine.add_column_panel_open());
        assert_eq!(engine.version(), 2);
    }

    #[test]
    fn test_input_updates_quantity() {
        let mut engine = EditingEngine::new(WorkOrder::sample()).with_edit_mode(EditMode::Edit);
        let binding = FieldBinding::detail(ItemId::from("1"), DetailId::from("1-1"), DetailField::Qty);

        assert!(engine.input(&binding, "4000").is_applied());
        assert_eq!(engine.document().total_qty(), 9255);

        engine.input(&binding, "lots");
        assert_eq!(engine.document().total_qty(), 5255);
    }

    #[test]
    fn test_dispatch_json() {
        let mut engine = EditingEngine::new(WorkOrder::sample());
        let outcome = engine
            .dispatch_json(r#"{"type": "removeColumn", "column": "gsm"}"#)
            .unwrap();
        assert!(outcome.is_applied());
        assert!(!engine.document().is_merged(MergeColumn::Gsm));

        assert!(engine.dispatch_json("{not json").is_err());
    }

    #[test]
    fn test_remove_gsm_then_enable_all() {
        let mut engine = EditingEngine::new(WorkOrder::sample());
        let outcomes = engine.dispatch_all(&[
            EditAction::DisableAllActiveMerges,
            EditAction::RemoveColumn {
                column: MergeColumn::Gsm,
            },
            EditAction::EnableAllActiveMerges,
        ]);
        assert!(outcomes.iter().all(|o| o.is_applied()));

        let doc = engine.document();
        assert!(!doc.is_merged(MergeColumn::Gsm));
        for column in doc.merge_controls().active().iter() {
            assert!(doc.is_merged(column));
        }
    }
}
