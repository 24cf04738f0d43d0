//! Editable fields and typed field updates
//!
//! Inputs hand raw text to the model. Text fields take it verbatim; the two
//! numeric fields (`sl`, `qty`) go through [`parse_integer`], which mirrors the
//! lenient prefix parsing browsers apply to number inputs and falls back to 0.

use crate::{DocModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Integer Parsing
// =============================================================================

/// Parse the leading integer of `raw`.
///
/// Leading whitespace and a single sign are accepted, then the longest run of
/// ASCII digits; anything after it is ignored (`"12abc"` is 12, `"3.7"` is 3).
/// Returns `None` when no digit is found or the value overflows.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return None;
    }

    let magnitude: i64 = digits[..digit_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a sequence number, substituting 0 when nothing parses
pub fn parse_sequence(raw: &str) -> i64 {
    parse_integer(raw).unwrap_or(0)
}

/// Parse a quantity; negative or unparseable input becomes 0
pub fn parse_quantity(raw: &str) -> u64 {
    parse_integer(raw)
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(0)
}

// =============================================================================
// Item Fields
// =============================================================================

/// Item-level field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemField {
    Sl,
    FabricDescription,
    Gsm,
    FWidthInch,
    Quality,
    NatureOfWork,
}

impl ItemField {
    pub const ALL: [ItemField; 6] = [
        ItemField::Sl,
        ItemField::FabricDescription,
        ItemField::Gsm,
        ItemField::FWidthInch,
        ItemField::Quality,
        ItemField::NatureOfWork,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemField::Sl => "sl",
            ItemField::FabricDescription => "fabricDescription",
            ItemField::Gsm => "gsm",
            ItemField::FWidthInch => "fWidthInch",
            ItemField::Quality => "quality",
            ItemField::NatureOfWork => "natureOfWork",
        }
    }

    pub fn is_numeric(self) -> bool {
        self == ItemField::Sl
    }

    /// Build the update an input bound to this field produces for `raw` text
    pub fn from_input(self, raw: &str) -> ItemFieldUpdate {
        match self {
            ItemField::Sl => ItemFieldUpdate::Sl(parse_sequence(raw)),
            ItemField::FabricDescription => ItemFieldUpdate::FabricDescription(raw.to_string()),
            ItemField::Gsm => ItemFieldUpdate::Gsm(raw.to_string()),
            ItemField::FWidthInch => ItemFieldUpdate::FWidthInch(raw.to_string()),
            ItemField::Quality => ItemFieldUpdate::Quality(raw.to_string()),
            ItemField::NatureOfWork => ItemFieldUpdate::NatureOfWork(raw.to_string()),
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemField {
    type Err = DocModelError;

    fn from_str(s: &str) -> Result<Self> {
        ItemField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| DocModelError::UnknownField(s.to_string()))
    }
}

/// A single item field replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ItemFieldUpdate {
    Sl(i64),
    FabricDescription(String),
    Gsm(String),
    FWidthInch(String),
    Quality(String),
    NatureOfWork(String),
}

impl ItemFieldUpdate {
    pub fn field(&self) -> ItemField {
        match self {
            ItemFieldUpdate::Sl(_) => ItemField::Sl,
            ItemFieldUpdate::FabricDescription(_) => ItemField::FabricDescription,
            ItemFieldUpdate::Gsm(_) => ItemField::Gsm,
            ItemFieldUpdate::FWidthInch(_) => ItemField::FWidthInch,
            ItemFieldUpdate::Quality(_) => ItemField::Quality,
            ItemFieldUpdate::NatureOfWork(_) => ItemField::NatureOfWork,
        }
    }
}

// =============================================================================
// Detail Fields
// =============================================================================

/// Detail-level field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetailField {
    Colour,
    Qty,
    Rate,
    Remarks,
    Swatch,
}

impl DetailField {
    pub const ALL: [DetailField; 5] = [
        DetailField::Colour,
        DetailField::Qty,
        DetailField::Rate,
        DetailField::Remarks,
        DetailField::Swatch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DetailField::Colour => "colour",
            DetailField::Qty => "qty",
            DetailField::Rate => "rate",
            DetailField::Remarks => "remarks",
            DetailField::Swatch => "swatch",
        }
    }

    pub fn is_numeric(self) -> bool {
        self == DetailField::Qty
    }

    /// Build the update an input bound to this field produces for `raw` text
    pub fn from_input(self, raw: &str) -> DetailFieldUpdate {
        match self {
            DetailField::Colour => DetailFieldUpdate::Colour(raw.to_string()),
            DetailField::Qty => DetailFieldUpdate::Qty(parse_quantity(raw)),
            DetailField::Rate => DetailFieldUpdate::Rate(raw.to_string()),
            DetailField::Remarks => DetailFieldUpdate::Remarks(raw.to_string()),
            DetailField::Swatch => DetailFieldUpdate::Swatch(raw.to_string()),
        }
    }
}

impl fmt::Display for DetailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DetailField {
    type Err = DocModelError;

    fn from_str(s: &str) -> Result<Self> {
        DetailField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| DocModelError::UnknownField(s.to_string()))
    }
}

/// A single detail field replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum DetailFieldUpdate {
    Colour(String),
    Qty(u64),
    Rate(String),
    Remarks(String),
    Swatch(String),
}

impl DetailFieldUpdate {
    pub fn field(&self) -> DetailField {
        match self {
            DetailFieldUpdate::Colour(_) => DetailField::Colour,
            DetailFieldUpdate::Qty(_) => DetailField::Qty,
            DetailFieldUpdate::Rate(_) => DetailField::Rate,
            DetailFieldUpdate::Remarks(_) => DetailField::Remarks,
            DetailFieldUpdate::Swatch(_) => DetailField::Swatch,
        }
    }
}
