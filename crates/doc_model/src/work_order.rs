//! Work order items, detail rows and document-level operations
//!
//! A [`WorkOrder`] is an ordered list of fabric items, each holding one or more
//! colour/quantity detail rows, plus the [`MergeControls`] that decide how the
//! item-level columns are rendered. Every operation here is total: unknown ids,
//! duplicate columns and attempts to drop an item's last detail row leave the
//! document untouched and report `false`/`None` instead of failing.

use crate::{
    DetailField, DetailFieldUpdate, ItemField, ItemFieldUpdate, MergeColumn, MergeControls,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a fabric item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier of a detail row, unique within its item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailId(String);

impl DetailId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Compose the `"<itemId>-<seq>"` id used for detail rows
    pub fn for_item(item_id: &ItemId, seq: u64) -> Self {
        Self(format!("{}-{}", item_id, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric suffix if this id has the `"<itemId>-<seq>"` shape
    fn seq_within(&self, item_id: &ItemId) -> Option<u64> {
        self.0
            .strip_prefix(item_id.as_str())?
            .strip_prefix('-')?
            .parse()
            .ok()
    }
}

impl fmt::Display for DetailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DetailId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// =============================================================================
// Work Order Detail
// =============================================================================

/// One colour/quantity line within a fabric item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderDetail {
    pub id: DetailId,
    pub colour: String,
    /// Quantity in yards
    pub qty: u64,
    pub rate: String,
    pub remarks: String,
    pub swatch: String,
}

impl WorkOrderDetail {
    /// Create an empty detail row
    pub fn new(id: DetailId) -> Self {
        Self {
            id,
            colour: String::new(),
            qty: 0,
            rate: String::new(),
            remarks: String::new(),
            swatch: String::new(),
        }
    }

    pub fn with_colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = colour.into();
        self
    }

    pub fn with_qty(mut self, qty: u64) -> Self {
        self.qty = qty;
        self
    }

    pub fn with_rate(mut self, rate: impl Into<String>) -> Self {
        self.rate = rate.into();
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    pub fn with_swatch(mut self, swatch: impl Into<String>) -> Self {
        self.swatch = swatch.into();
        self
    }

    /// Current value of `field` as display text (quantities unformatted)
    pub fn field_text(&self, field: DetailField) -> String {
        match field {
            DetailField::Colour => self.colour.clone(),
            DetailField::Qty => self.qty.to_string(),
            DetailField::Rate => self.rate.clone(),
            DetailField::Remarks => self.remarks.clone(),
            DetailField::Swatch => self.swatch.clone(),
        }
    }

    pub fn apply(&mut self, update: DetailFieldUpdate) {
        match update {
            DetailFieldUpdate::Colour(v) => self.colour = v,
            DetailFieldUpdate::Qty(v) => self.qty = v,
            DetailFieldUpdate::Rate(v) => self.rate = v,
            DetailFieldUpdate::Remarks(v) => self.remarks = v,
            DetailFieldUpdate::Swatch(v) => self.swatch = v,
        }
    }
}

// =============================================================================
// Work Order Item
// =============================================================================

/// One fabric specification with its detail rows.
///
/// Invariant: `details` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderItem {
    pub id: ItemId,
    /// Display sequence number; user-editable and never renumbered
    pub sl: i64,
    pub fabric_description: String,
    pub gsm: String,
    pub f_width_inch: String,
    pub quality: String,
    pub nature_of_work: String,
    details: Vec<WorkOrderDetail>,
    /// Last detail sequence handed out; ids are never reused
    next_detail_seq: u64,
}

impl WorkOrderItem {
    /// Create an item with empty fields and a single empty detail row
    pub fn new(id: ItemId, sl: i64) -> Self {
        let first = WorkOrderDetail::new(DetailId::for_item(&id, 1));
        Self {
            id,
            sl,
            fabric_description: String::new(),
            gsm: String::new(),
            f_width_inch: String::new(),
            quality: String::new(),
            nature_of_work: String::new(),
            details: vec![first],
            next_detail_seq: 1,
        }
    }

    /// Replace the detail rows.
    ///
    /// An empty list keeps a single empty row. The id counter continues past
    /// every supplied `"<itemId>-<seq>"` id and past the row count.
    pub fn with_details(mut self, details: Vec<WorkOrderDetail>) -> Self {
        if details.is_empty() {
            return self;
        }
        let highest = details
            .iter()
            .filter_map(|d| d.id.seq_within(&self.id))
            .max()
            .unwrap_or(0);
        self.next_detail_seq = highest.max(details.len() as u64);
        self.details = details;
        self
    }

    pub fn with_fabric_description(mut self, value: impl Into<String>) -> Self {
        self.fabric_description = value.into();
        self
    }

    pub fn with_gsm(mut self, value: impl Into<String>) -> Self {
        self.gsm = value.into();
        self
    }

    pub fn with_f_width_inch(mut self, value: impl Into<String>) -> Self {
        self.f_width_inch = value.into();
        self
    }

    pub fn with_quality(mut self, value: impl Into<String>) -> Self {
        self.quality = value.into();
        self
    }

    pub fn with_nature_of_work(mut self, value: impl Into<String>) -> Self {
        self.nature_of_work = value.into();
        self
    }

    /// Detail rows in display order
    pub fn details(&self) -> &[WorkOrderDetail] {
        &self.details
    }

    pub fn detail_count(&self) -> usize {
        self.details.len()
    }

    pub fn detail(&self, detail_id: &DetailId) -> Option<&WorkOrderDetail> {
        self.details.iter().find(|d| &d.id == detail_id)
    }

    /// Current value of `field` as display text
    pub fn field_text(&self, field: ItemField) -> String {
        match field {
            ItemField::Sl => self.sl.to_string(),
            ItemField::FabricDescription => self.fabric_description.clone(),
            ItemField::Gsm => self.gsm.clone(),
            ItemField::FWidthInch => self.f_width_inch.clone(),
            ItemField::Quality => self.quality.clone(),
            ItemField::NatureOfWork => self.nature_of_work.clone(),
        }
    }

    pub fn apply(&mut self, update: ItemFieldUpdate) {
        match update {
            ItemFieldUpdate::Sl(v) => self.sl = v,
            ItemFieldUpdate::FabricDescription(v) => self.fabric_description = v,
            ItemFieldUpdate::Gsm(v) => self.gsm = v,
            ItemFieldUpdate::FWidthInch(v) => self.f_width_inch = v,
            ItemFieldUpdate::Quality(v) => self.quality = v,
            ItemFieldUpdate::NatureOfWork(v) => self.nature_of_work = v,
        }
    }

    /// Append an empty detail row and return its id
    pub fn add_detail(&mut self) -> DetailId {
        self.next_detail_seq += 1;
        let id = DetailId::for_item(&self.id, self.next_detail_seq);
        self.details.push(WorkOrderDetail::new(id.clone()));
        id
    }

    /// Remove a detail row unless it is the last one left
    pub fn remove_detail(&mut self, detail_id: &DetailId) -> bool {
        if self.details.len() <= 1 {
            return false;
        }
        let before = self.details.len();
        self.details.retain(|d| &d.id != detail_id);
        self.details.len() != before
    }

    pub fn update_detail(&mut self, detail_id: &DetailId, update: DetailFieldUpdate) -> bool {
        match self.details.iter_mut().find(|d| &d.id == detail_id) {
            Some(detail) => {
                detail.apply(update);
                true
            }
            None => false,
        }
    }

    /// Sum of quantities over this item's rows
    pub fn total_qty(&self) -> u64 {
        self.details
            .iter()
            .fold(0u64, |sum, d| sum.saturating_add(d.qty))
    }
}

// =============================================================================
// Work Order
// =============================================================================

/// The whole work order: items plus column merge controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkOrder {
    items: Vec<WorkOrderItem>,
    merge: MergeControls,
    /// Last item sequence handed out; ids are never reused
    next_item_seq: u64,
}

impl WorkOrder {
    /// Create an empty work order with every merge column active and merged
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a work order from existing items.
    ///
    /// New item ids continue past every numeric id present and past the item count.
    pub fn with_items(items: Vec<WorkOrderItem>) -> Self {
        let highest = items
            .iter()
            .filter_map(|item| item.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            next_item_seq: highest.max(items.len() as u64),
            items,
            merge: MergeControls::new(),
        }
    }

    pub fn items(&self) -> &[WorkOrderItem] {
        &self.items
    }

    pub fn item(&self, item_id: &ItemId) -> Option<&WorkOrderItem> {
        self.items.iter().find(|item| &item.id == item_id)
    }

    fn item_mut(&mut self, item_id: &ItemId) -> Option<&mut WorkOrderItem> {
        self.items.iter_mut().find(|item| &item.id == item_id)
    }

    pub fn merge_controls(&self) -> &MergeControls {
        &self.merge
    }

    pub fn is_merged(&self, column: MergeColumn) -> bool {
        self.merge.is_merged(column)
    }

    // -------------------------------------------------------------------------
    // Item and detail operations
    // -------------------------------------------------------------------------

    /// Append a new empty item numbered after the current item count
    pub fn add_item(&mut self) -> ItemId {
        self.next_item_seq += 1;
        let id = ItemId::new(self.next_item_seq.to_string());
        let sl = self.items.len() as i64 + 1;
        self.items.push(WorkOrderItem::new(id.clone(), sl));
        id
    }

    pub fn remove_item(&mut self, item_id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != item_id);
        self.items.len() != before
    }

    /// Append an empty detail row to an item
    pub fn add_detail(&mut self, item_id: &ItemId) -> Option<DetailId> {
        self.item_mut(item_id).map(WorkOrderItem::add_detail)
    }

    /// Remove a detail row; rejected when it would leave the item without rows
    pub fn remove_detail(&mut self, item_id: &ItemId, detail_id: &DetailId) -> bool {
        self.item_mut(item_id)
            .is_some_and(|item| item.remove_detail(detail_id))
    }

    pub fn update_item_field(&mut self, item_id: &ItemId, update: ItemFieldUpdate) -> bool {
        match self.item_mut(item_id) {
            Some(item) => {
                item.apply(update);
                true
            }
            None => false,
        }
    }

    pub fn update_detail_field(
        &mut self,
        item_id: &ItemId,
        detail_id: &DetailId,
        update: DetailFieldUpdate,
    ) -> bool {
        self.item_mut(item_id)
            .is_some_and(|item| item.update_detail(detail_id, update))
    }

    // -------------------------------------------------------------------------
    // Merge column operations
    // -------------------------------------------------------------------------

    pub fn add_column(&mut self, column: MergeColumn) -> bool {
        self.merge.add_column(column)
    }

    pub fn remove_column(&mut self, column: MergeColumn) -> bool {
        self.merge.remove_column(column)
    }

    pub fn set_merge_flag(&mut self, column: MergeColumn, merged: bool) -> bool {
        self.merge.set_merge_flag(column, merged)
    }

    pub fn enable_all_active_merges(&mut self) -> usize {
        self.merge.enable_all_active()
    }

    pub fn disable_all_active_merges(&mut self) -> usize {
        self.merge.disable_all_active()
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Total quantity over every detail row, recomputed on each call
    pub fn total_qty(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |sum, item| sum.saturating_add(item.total_qty()))
    }

    /// Number of detail rows across all items
    pub fn detail_row_count(&self) -> usize {
        self.items.iter().map(WorkOrderItem::detail_count).sum()
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Wire shape of [`WorkOrderItem`]; rebuilt through the item builders so the
/// row and id invariants hold for decoded data too
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    id: ItemId,
    sl: i64,
    #[serde(default)]
    fabric_description: String,
    #[serde(default)]
    gsm: String,
    #[serde(default)]
    f_width_inch: String,
    #[serde(default)]
    quality: String,
    #[serde(default)]
    nature_of_work: String,
    #[serde(default)]
    details: Vec<WorkOrderDetail>,
    #[serde(default)]
    next_detail_seq: u64,
}

impl ItemRecord {
    fn into_item(self) -> WorkOrderItem {
        let mut seen = HashSet::new();
        let details: Vec<_> = self
            .details
            .into_iter()
            .filter(|d| seen.insert(d.id.clone()))
            .collect();

        let mut item = WorkOrderItem::new(self.id, self.sl)
            .with_fabric_description(self.fabric_description)
            .with_gsm(self.gsm)
            .with_f_width_inch(self.f_width_inch)
            .with_quality(self.quality)
            .with_nature_of_work(self.nature_of_work)
            .with_details(details);
        item.next_detail_seq = item.next_detail_seq.max(self.next_detail_seq);
        item
    }
}

impl<'de> Deserialize<'de> for WorkOrderItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        ItemRecord::deserialize(deserializer).map(ItemRecord::into_item)
    }
}

/// Wire shape of [`WorkOrder`]
#[derive(Deserialize)]
struct WorkOrderRecord {
    #[serde(default)]
    items: Vec<WorkOrderItem>,
    #[serde(default)]
    merge: MergeControls,
    #[serde(default)]
    next_item_seq: u64,
}

impl<'de> Deserialize<'de> for WorkOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = WorkOrderRecord::deserialize(deserializer)?;
        let mut seen = HashSet::new();
        let items = record
            .items
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();

        let mut doc = WorkOrder::with_items(items);
        doc.merge = record.merge;
        doc.next_item_seq = doc.next_item_seq.max(record.next_item_seq);
        Ok(doc)
    }
}
