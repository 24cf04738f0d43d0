//! Vertical merge placement
//!
//! One rule covers all six merge-capable columns: a merged column emits a
//! single cell on an item's first detail row spanning every detail row, and
//! nothing on the rest; an unmerged column emits one cell per row.

use doc_model::{MergeColumn, MergeState, WorkOrderItem};
use serde::{Deserialize, Serialize};

/// How a merge-capable column appears on one detail row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellPlacement {
    /// A cell spanning this many rows
    Spanning(u32),
    /// A cell covering just this row
    Single,
    /// Covered by a spanning cell above
    Suppressed,
}

impl CellPlacement {
    /// Row span of the emitted cell, `None` when suppressed
    pub fn row_span(self) -> Option<u32> {
        match self {
            CellPlacement::Spanning(n) => Some(n),
            CellPlacement::Single => Some(1),
            CellPlacement::Suppressed => None,
        }
    }
}

/// Placement of `column` on row `detail_index` of `item`
pub fn merged_cell(
    column: MergeColumn,
    item: &WorkOrderItem,
    detail_index: usize,
    merge: &MergeState,
) -> CellPlacement {
    if !merge.is_merged(column) {
        return CellPlacement::Single;
    }
    if detail_index == 0 {
        let span = u32::try_from(item.detail_count()).unwrap_or(u32::MAX);
        CellPlacement::Spanning(span)
    } else {
        CellPlacement::Suppressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{MergeControls, WorkOrder};

    #[test]
    fn test_merged_column_spans_first_row_only() {
        let doc = WorkOrder::sample();
        let item = &doc.items()[1];
        let merge = MergeControls::new();

        assert_eq!(
            merged_cell(MergeColumn::Gsm, item, 0, merge.state()),
            CellPlacement::Spanning(3)
        );
        assert_eq!(
            merged_cell(MergeColumn::Gsm, item, 2, merge.state()),
            CellPlacement::Suppressed
        );
    }

    #[test]
    fn test_unmerged_column_is_single_everywhere() {
        let doc = WorkOrder::sample();
        let item = &doc.items()[0];
        let mut merge = MergeControls::new();
        merge.set_merge_flag(MergeColumn::Quality, false);

        for index in 0..item.detail_count() {
            let placement = merged_cell(MergeColumn::Quality, item, index, merge.state());
            assert_eq!(placement.row_span(), Some(1));
        }
    }
}
