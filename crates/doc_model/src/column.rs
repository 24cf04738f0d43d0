//! Column catalog for the work order table
//!
//! The printed table is laid out on a 13-column physical grid. Eleven logical
//! columns map onto it: six carry item-level values and can be merged
//! vertically across an item's detail rows, five carry per-detail values and
//! always render one cell per detail row.

use crate::{DetailField, DocModelError, ItemField, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of physical grid columns in the work order table
pub const GRID_COLUMN_COUNT: u32 = 13;

// =============================================================================
// Text Alignment
// =============================================================================

/// Horizontal alignment of a column's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
}

// =============================================================================
// Merge Columns
// =============================================================================

/// A column whose value lives on the item and may span all of its detail rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MergeColumn {
    Sl,
    FabricDesc,
    Gsm,
    FWidth,
    Quality,
    NatureOfWork,
}

impl MergeColumn {
    /// All merge-capable columns in catalog (display) order
    pub const ALL: [MergeColumn; 6] = [
        MergeColumn::Sl,
        MergeColumn::FabricDesc,
        MergeColumn::Gsm,
        MergeColumn::FWidth,
        MergeColumn::Quality,
        MergeColumn::NatureOfWork,
    ];

    /// Stable column id, as used by the page shell
    pub fn id(self) -> &'static str {
        match self {
            MergeColumn::Sl => "sl",
            MergeColumn::FabricDesc => "fabricDesc",
            MergeColumn::Gsm => "gsm",
            MergeColumn::FWidth => "fWidth",
            MergeColumn::Quality => "quality",
            MergeColumn::NatureOfWork => "natureOfWork",
        }
    }

    /// Human readable label shown next to the merge control
    pub fn label(self) -> &'static str {
        match self {
            MergeColumn::Sl => "S/L Column",
            MergeColumn::FabricDesc => "Fabric Description",
            MergeColumn::Gsm => "GSM",
            MergeColumn::FWidth => "F/Width",
            MergeColumn::Quality => "Quality",
            MergeColumn::NatureOfWork => "Nature of Work",
        }
    }

    /// The item field rendered in this column
    pub fn field(self) -> ItemField {
        match self {
            MergeColumn::Sl => ItemField::Sl,
            MergeColumn::FabricDesc => ItemField::FabricDescription,
            MergeColumn::Gsm => ItemField::Gsm,
            MergeColumn::FWidth => ItemField::FWidthInch,
            MergeColumn::Quality => ItemField::Quality,
            MergeColumn::NatureOfWork => ItemField::NatureOfWork,
        }
    }

    /// First physical grid column covered by this column
    pub fn grid_col(self) -> u32 {
        match self {
            MergeColumn::Sl => 0,
            MergeColumn::FabricDesc => 1,
            MergeColumn::Gsm => 4,
            MergeColumn::FWidth => 5,
            MergeColumn::Quality => 6,
            MergeColumn::NatureOfWork => 7,
        }
    }

    /// Number of physical grid columns covered.
    ///
    /// Fabric description always spans three underlying columns, merged or not.
    pub fn col_span(self) -> u32 {
        match self {
            MergeColumn::FabricDesc => 3,
            _ => 1,
        }
    }

    pub fn align(self) -> TextAlign {
        match self {
            MergeColumn::FabricDesc => TextAlign::Left,
            _ => TextAlign::Center,
        }
    }

    /// Whether the column renders in bold type
    pub fn bold(self) -> bool {
        self == MergeColumn::Sl
    }
}

impl fmt::Display for MergeColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MergeColumn {
    type Err = DocModelError;

    fn from_str(s: &str) -> Result<Self> {
        MergeColumn::ALL
            .into_iter()
            .find(|column| column.id() == s)
            .ok_or_else(|| DocModelError::UnknownColumn(s.to_string()))
    }
}

// =============================================================================
// Detail Columns
// =============================================================================

/// A column whose value lives on the detail row; never merge-eligible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetailColumn {
    Colour,
    Qty,
    Rate,
    Remarks,
    Swatch,
}

impl DetailColumn {
    pub const ALL: [DetailColumn; 5] = [
        DetailColumn::Colour,
        DetailColumn::Qty,
        DetailColumn::Rate,
        DetailColumn::Remarks,
        DetailColumn::Swatch,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DetailColumn::Colour => "colour",
            DetailColumn::Qty => "qty",
            DetailColumn::Rate => "rate",
            DetailColumn::Remarks => "remarks",
            DetailColumn::Swatch => "swatch",
        }
    }

    pub fn field(self) -> DetailField {
        match self {
            DetailColumn::Colour => DetailField::Colour,
            DetailColumn::Qty => DetailField::Qty,
            DetailColumn::Rate => DetailField::Rate,
            DetailColumn::Remarks => DetailField::Remarks,
            DetailColumn::Swatch => DetailField::Swatch,
        }
    }

    pub fn grid_col(self) -> u32 {
        match self {
            DetailColumn::Colour => 8,
            DetailColumn::Qty => 9,
            DetailColumn::Rate => 10,
            DetailColumn::Remarks => 11,
            DetailColumn::Swatch => 12,
        }
    }
}

impl fmt::Display for DetailColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// =============================================================================
// Table Columns
// =============================================================================

/// Any logical column of the table, in left-to-right order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableColumn {
    Merge(MergeColumn),
    Detail(DetailColumn),
}

impl TableColumn {
    /// All logical columns, left to right
    pub const ALL: [TableColumn; 11] = [
        TableColumn::Merge(MergeColumn::Sl),
        TableColumn::Merge(MergeColumn::FabricDesc),
        TableColumn::Merge(MergeColumn::Gsm),
        TableColumn::Merge(MergeColumn::FWidth),
        TableColumn::Merge(MergeColumn::Quality),
        TableColumn::Merge(MergeColumn::NatureOfWork),
        TableColumn::Detail(DetailColumn::Colour),
        TableColumn::Detail(DetailColumn::Qty),
        TableColumn::Detail(DetailColumn::Rate),
        TableColumn::Detail(DetailColumn::Remarks),
        TableColumn::Detail(DetailColumn::Swatch),
    ];

    pub fn id(self) -> &'static str {
        match self {
            TableColumn::Merge(c) => c.id(),
            TableColumn::Detail(c) => c.id(),
        }
    }

    pub fn grid_col(self) -> u32 {
        match self {
            TableColumn::Merge(c) => c.grid_col(),
            TableColumn::Detail(c) => c.grid_col(),
        }
    }

    pub fn col_span(self) -> u32 {
        match self {
            TableColumn::Merge(c) => c.col_span(),
            TableColumn::Detail(_) => 1,
        }
    }

    pub fn align(self) -> TextAlign {
        match self {
            TableColumn::Merge(c) => c.align(),
            TableColumn::Detail(_) => TextAlign::Center,
        }
    }

    /// Whether this column can ever be merged across detail rows
    pub fn is_merge_capable(self) -> bool {
        matches!(self, TableColumn::Merge(_))
    }
}

impl From<MergeColumn> for TableColumn {
    fn from(column: MergeColumn) -> Self {
        TableColumn::Merge(column)
    }
}

impl From<DetailColumn> for TableColumn {
    fn from(column: DetailColumn) -> Self {
        TableColumn::Detail(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_column_ids_round_trip() {
        for column in MergeColumn::ALL {
            assert_eq!(column.id().parse::<MergeColumn>().unwrap(), column);
        }
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let err = "colour".parse::<MergeColumn>().unwrap_err();
        assert_eq!(err, DocModelError::UnknownColumn("colour".to_string()));
    }

    #[test]
    fn test_serde_uses_column_ids() {
        let json = serde_json::to_string(&MergeColumn::FWidth).unwrap();
        assert_eq!(json, "\"fWidth\"");
        let parsed: MergeColumn = serde_json::from_str("\"natureOfWork\"").unwrap();
        assert_eq!(parsed, MergeColumn::NatureOfWork);
    }

    #[test]
    fn test_grid_covers_thirteen_columns() {
        let covered: u32 = TableColumn::ALL.iter().map(|c| c.col_span()).sum();
        assert_eq!(covered, GRID_COLUMN_COUNT);

        let mut next = 0;
        for column in TableColumn::ALL {
            assert_eq!(column.grid_col(), next, "column {} out of place", column.id());
            next += column.col_span();
        }
    }

    #[test]
    fn test_only_item_columns_are_merge_capable() {
        let capable: Vec<_> = TableColumn::ALL
            .into_iter()
            .filter(|c| c.is_merge_capable())
            .collect();
        assert_eq!(capable.len(), MergeColumn::ALL.len());
        assert!(!TableColumn::from(DetailColumn::Qty).is_merge_capable());
    }
}
