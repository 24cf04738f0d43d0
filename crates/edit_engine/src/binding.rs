//! Input bindings
//!
//! A rendered input knows which field it edits; combined with the text the
//! user typed it produces the matching update action.

use crate::EditAction;
use doc_model::{DetailField, DetailId, ItemField, ItemId};
use serde::{Deserialize, Serialize};

/// The model field an input is bound to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "camelCase")]
pub enum FieldBinding {
    Item {
        item_id: ItemId,
        field: ItemField,
    },
    Detail {
        item_id: ItemId,
        detail_id: DetailId,
        field: DetailField,
    },
}

impl FieldBinding {
    pub fn item(item_id: ItemId, field: ItemField) -> Self {
        FieldBinding::Item { item_id, field }
    }

    pub fn detail(item_id: ItemId, detail_id: DetailId, field: DetailField) -> Self {
        FieldBinding::Detail {
            item_id,
            detail_id,
            field,
        }
    }

    /// Whether the input should be a number input
    pub fn is_numeric(&self) -> bool {
        match self {
            FieldBinding::Item { field, .. } => field.is_numeric(),
            FieldBinding::Detail { field, .. } => field.is_numeric(),
        }
    }

    /// The update action produced when the input's text changes to `raw`
    pub fn on_change(&self, raw: &str) -> EditAction {
        match self {
            FieldBinding::Item { item_id, field } => EditAction::UpdateItemField {
                item_id: item_id.clone(),
                update: field.from_input(raw),
            },
            FieldBinding::Detail {
                item_id,
                detail_id,
                field,
            } => EditAction::UpdateDetailField {
                item_id: item_id.clone(),
                detail_id: detail_id.clone(),
                update: field.from_input(raw),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{DetailFieldUpdate, ItemFieldUpdate};

    #[test]
    fn test_numeric_binding_parses_with_fallback() {
        let binding = FieldBinding::detail(ItemId::from("1"), DetailId::from("1-1"), DetailField::Qty);
        assert!(binding.is_numeric());
        assert_eq!(
            binding.on_change("abc"),
            EditAction::UpdateDetailField {
                item_id: ItemId::from("1"),
                detail_id: DetailId::from("1-1"),
                update: DetailFieldUpdate::Qty(0),
            }
        );
    }

    #[test]
    fn test_text_binding_keeps_raw_value() {
        let binding = FieldBinding::item(ItemId::from("2"), ItemField::Quality);
        assert!(!binding.is_numeric());
        assert_eq!(
            binding.on_change(" N/P "),
            EditAction::UpdateItemField {
                item_id: ItemId::from("2"),
                update: ItemFieldUpdate::Quality(" N/P ".to_string()),
            }
        );
    }
}
