//! Column merge state
//!
//! [`MergeState`] holds one flag per merge-capable column; [`ActiveColumns`]
//! is the ordered set of columns currently exposing a merge control.
//! [`MergeControls`] owns both and keeps them consistent: a column that loses
//! its control can never stay merged.

use crate::MergeColumn;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Merge State
// =============================================================================

/// Per-column vertical merge flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeState(BTreeMap<MergeColumn, bool>);

impl MergeState {
    /// All columns merged
    pub fn new() -> Self {
        Self(MergeColumn::ALL.into_iter().map(|c| (c, true)).collect())
    }

    pub fn is_merged(&self, column: MergeColumn) -> bool {
        self.0.get(&column).copied().unwrap_or(false)
    }

    fn set(&mut self, column: MergeColumn, merged: bool) -> bool {
        let previous = self.0.insert(column, merged);
        previous != Some(merged)
    }

    /// Iterate flags in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (MergeColumn, bool)> + '_ {
        self.0.iter().map(|(c, m)| (*c, *m))
    }
}

impl Default for MergeState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Active Columns
// =============================================================================

/// Columns currently showing a merge control, in the order they were added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveColumns(Vec<MergeColumn>);

impl ActiveColumns {
    /// Every catalog column active
    pub fn new() -> Self {
        Self(MergeColumn::ALL.to_vec())
    }

    /// No column active
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, column: MergeColumn) -> bool {
        self.0.contains(&column)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MergeColumn> + '_ {
        self.0.iter().copied()
    }

    /// Active columns in catalog order rather than insertion order
    pub fn in_catalog_order(&self) -> Vec<MergeColumn> {
        MergeColumn::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Catalog columns that could be added back
    pub fn available_to_add(&self) -> Vec<MergeColumn> {
        MergeColumn::ALL
            .into_iter()
            .filter(|c| !self.contains(*c))
            .collect()
    }

    fn insert(&mut self, column: MergeColumn) -> bool {
        if self.contains(column) {
            return false;
        }
        self.0.push(column);
        true
    }

    fn remove(&mut self, column: MergeColumn) -> bool {
        let before = self.0.len();
        self.0.retain(|c| *c != column);
        self.0.len() != before
    }
}

impl Default for ActiveColumns {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Merge Controls
// =============================================================================

/// Merge flags together with the set of columns that expose a control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeControls {
    state: MergeState,
    active: ActiveColumns,
}

impl MergeControls {
    /// All six columns active and merged
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MergeState {
        &self.state
    }

    pub fn active(&self) -> &ActiveColumns {
        &self.active
    }

    pub fn is_merged(&self, column: MergeColumn) -> bool {
        self.state.is_merged(column)
    }

    /// Expose a merge control for `column`. Returns false if already active.
    pub fn add_column(&mut self, column: MergeColumn) -> bool {
        self.active.insert(column)
    }

    /// Drop the control for `column` and force its merge flag off.
    ///
    /// Returns true if the column was active.
    pub fn remove_column(&mut self, column: MergeColumn) -> bool {
        let removed = self.active.remove(column);
        self.state.set(column, false);
        removed
    }

    /// Set one merge flag. Ignored for columns without an active control.
    pub fn set_merge_flag(&mut self, column: MergeColumn, merged: bool) -> bool {
        if !self.active.contains(column) {
            return false;
        }
        self.state.set(column, merged)
    }

    /// Merge every active column; returns the number of flags changed
    pub fn enable_all_active(&mut self) -> usize {
        self.set_all_active(true)
    }

    /// Unmerge every active column; returns the number of flags changed
    pub fn disable_all_active(&mut self) -> usize {
        self.set_all_active(false)
    }

    fn set_all_active(&mut self, merged: bool) -> usize {
        let columns: Vec<_> = self.active.iter().collect();
        columns
            .into_iter()
            .filter(|c| self.state.set(*c, merged))
            .count()
    }
}

/// Wire shape of [`MergeControls`]
#[derive(Deserialize)]
struct MergeControlsRecord {
    state: MergeState,
    active: ActiveColumns,
}

impl<'de> Deserialize<'de> for MergeControls {
    /// Decoded controls drop repeated columns and unmerge inactive ones
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = MergeControlsRecord::deserialize(deserializer)?;
        let mut controls = MergeControls {
            state: record.state,
            active: ActiveColumns::empty(),
        };
        for column in record.active.iter() {
            controls.active.insert(column);
        }
        for column in MergeColumn::ALL {
            if !controls.active.contains(column) {
                controls.state.set(column, false);
            }
        }
        Ok(controls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_all_active_and_merged() {
        let controls = MergeControls::new();
        for column in MergeColumn::ALL {
            assert!(controls.active().contains(column));
            assert!(controls.is_merged(column));
        }
        assert!(controls.active().available_to_add().is_empty());
    }

    #[test]
    fn test_remove_column_forces_flag_off() {
        let mut controls = MergeControls::new();
        assert!(controls.remove_column(MergeColumn::Gsm));
        assert!(!controls.is_merged(MergeColumn::Gsm));
        assert!(!controls.active().contains(MergeColumn::Gsm));

        // Second removal is ignored but the flag stays off
        assert!(!controls.remove_column(MergeColumn::Gsm));
        assert!(!controls.is_merged(MergeColumn::Gsm));
    }

    #[test]
    fn test_add_column_never_duplicates() {
        let mut controls = MergeControls::new();
        assert!(!controls.add_column(MergeColumn::Sl));
        assert_eq!(controls.active().len(), 6);

        controls.remove_column(MergeColumn::Sl);
        assert!(controls.add_column(MergeColumn::Sl));
        assert!(!controls.add_column(MergeColumn::Sl));
        assert_eq!(controls.active().len(), 6);

        // Re-added column keeps its forced-off flag until toggled
        assert!(!controls.is_merged(MergeColumn::Sl));
        // Appended at the end, but catalog order is still available
        assert_eq!(controls.active().iter().last(), Some(MergeColumn::Sl));
        assert_eq!(controls.active().in_catalog_order(), MergeColumn::ALL.to_vec());
    }

    #[test]
    fn test_set_merge_flag_requires_active_column() {
        let mut controls = MergeControls::new();
        controls.remove_column(MergeColumn::Quality);
        assert!(!controls.set_merge_flag(MergeColumn::Quality, true));
        assert!(!controls.is_merged(MergeColumn::Quality));

        assert!(controls.set_merge_flag(MergeColumn::Sl, false));
        assert!(!controls.is_merged(MergeColumn::Sl));
    }

    #[test]
    fn test_bulk_toggle_skips_inactive_columns() {
        let mut controls = MergeControls::new();
        controls.remove_column(MergeColumn::Gsm);

        assert_eq!(controls.disable_all_active(), 5);
        assert_eq!(controls.enable_all_active(), 5);

        assert!(!controls.is_merged(MergeColumn::Gsm));
        for column in controls.active().iter() {
            assert!(controls.is_merged(column));
        }
    }

    #[test]
    fn test_available_to_add_in_catalog_order() {
        let mut controls = MergeControls::new();
        controls.remove_column(MergeColumn::NatureOfWork);
        controls.remove_column(MergeColumn::Sl);
        assert_eq!(
            controls.active().available_to_add(),
            vec![MergeColumn::Sl, MergeColumn::NatureOfWork]
        );
    }

    #[test]
    fn test_decoding_restores_control_invariants() {
        let json = serde_json::json!({
            "state": {"sl": true, "gsm": true, "quality": false},
            "active": ["sl", "sl", "quality"]
        });
        let controls: MergeControls = serde_json::from_value(json).unwrap();

        assert_eq!(
            controls.active().iter().collect::<Vec<_>>(),
            vec![MergeColumn::Sl, MergeColumn::Quality]
        );
        assert!(controls.is_merged(MergeColumn::Sl));
        // gsm has no control, so it cannot stay merged
        assert!(!controls.is_merged(MergeColumn::Gsm));
        assert!(!controls.is_merged(MergeColumn::FabricDesc));
    }
}
