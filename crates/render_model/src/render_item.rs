//! Render item types
//!
//! The renderer produces a [`TableRender`]: a list of rows on the 13-column
//! grid, each holding positioned cells. Cells carry either static text or a
//! widget wired to the [`EditAction`] it triggers, so the page shell only has
//! to draw and forward events.

use doc_model::{ItemId, TableColumn, TextAlign};
use edit_engine::{EditAction, FieldBinding};
use serde::{Deserialize, Serialize};

/// Color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(209, 213, 219);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// =============================================================================
// Widgets
// =============================================================================

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Destructive,
}

/// A clickable button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonWidget {
    pub label: String,
    pub variant: ButtonVariant,
    /// Dispatched on click
    pub action: EditAction,
}

impl ButtonWidget {
    pub fn new(label: impl Into<String>, action: EditAction) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Primary,
            action,
        }
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// A text or number input bound to a model field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputWidget {
    /// Current field value
    pub value: String,
    /// Render as a number input
    pub numeric: bool,
    /// Field the typed text is written to, see [`FieldBinding::on_change`]
    pub binding: FieldBinding,
}

impl InputWidget {
    pub fn new(value: impl Into<String>, binding: FieldBinding) -> Self {
        Self {
            value: value.into(),
            numeric: binding.is_numeric(),
            binding,
        }
    }
}

/// A labelled checkbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxWidget {
    pub label: String,
    pub checked: bool,
    /// Dispatched when the box is clicked
    pub on_toggle: EditAction,
}

// =============================================================================
// Cells and Rows
// =============================================================================

/// What a cell displays
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellContent {
    #[default]
    Empty,
    Text { text: String },
    Input(InputWidget),
    Button(ButtonWidget),
}

impl CellContent {
    pub fn text(text: impl Into<String>) -> Self {
        CellContent::Text { text: text.into() }
    }

    /// Plain text shown by this content, if any
    pub fn display_text(&self) -> &str {
        match self {
            CellContent::Empty => "",
            CellContent::Text { text } => text,
            CellContent::Input(input) => &input.value,
            CellContent::Button(button) => &button.label,
        }
    }
}

/// A positioned table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderCell {
    /// Logical column, when the cell belongs to one
    pub column: Option<TableColumn>,
    /// First physical grid column covered
    pub grid_col: u32,
    pub col_span: u32,
    pub row_span: u32,
    pub align: TextAlign,
    pub bold: bool,
    /// Header cells render as `th`
    pub header: bool,
    pub content: CellContent,
    /// Extra buttons drawn beside the content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ButtonWidget>,
}

impl RenderCell {
    /// An empty single cell at `grid_col`
    pub fn blank(grid_col: u32) -> Self {
        Self {
            column: None,
            grid_col,
            col_span: 1,
            row_span: 1,
            align: TextAlign::Center,
            bold: false,
            header: false,
            content: CellContent::Empty,
            actions: Vec::new(),
        }
    }

    /// An empty cell positioned like `column`
    pub fn for_column(column: TableColumn) -> Self {
        Self {
            column: Some(column),
            col_span: column.col_span(),
            align: column.align(),
            ..Self::blank(column.grid_col())
        }
    }

    pub fn with_content(mut self, content: CellContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_col_span(mut self, col_span: u32) -> Self {
        self.col_span = col_span;
        self
    }

    pub fn with_row_span(mut self, row_span: u32) -> Self {
        self.row_span = row_span;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn header(mut self) -> Self {
        self.header = true;
        self.bold = true;
        self
    }

    pub fn with_action(mut self, button: ButtonWidget) -> Self {
        self.actions.push(button);
        self
    }

    /// One past the last grid column covered
    pub fn grid_end(&self) -> u32 {
        self.grid_col + self.col_span
    }
}

/// Role of a table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowKind {
    Header,
    Detail,
    AddDetailAction,
    RemoveItemAction,
    Padding,
    Total,
}

/// A table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRow {
    pub kind: RowKind,
    /// Owning item for detail and action rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,
    pub cells: Vec<RenderCell>,
}

impl RenderRow {
    pub fn new(kind: RowKind, cells: Vec<RenderCell>) -> Self {
        Self {
            kind,
            item_id: None,
            cells,
        }
    }

    pub fn for_item(kind: RowKind, item_id: ItemId, cells: Vec<RenderCell>) -> Self {
        Self {
            kind,
            item_id: Some(item_id),
            cells,
        }
    }

    /// The cell emitted for `column` in this row, if any
    pub fn cell(&self, column: TableColumn) -> Option<&RenderCell> {
        self.cells.iter().find(|c| c.column == Some(column))
    }
}

// =============================================================================
// Styling
// =============================================================================

/// Presentation variant of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStyle {
    /// Tight on-screen layout
    Compact,
    /// Heavier borders and padding matching the printed form
    #[default]
    BorderedPrint,
}

/// Styling hints for the page shell. Never affects row or cell structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableStyle {
    pub cell_padding: f64,
    pub padding_row_height: f64,
    pub input_height: f64,
    pub outer_border_width: f64,
    pub row_border_width: f64,
    /// Border between items
    pub item_border_width: f64,
    pub border_color: Color,
}

impl LayoutStyle {
    pub fn table_style(self) -> TableStyle {
        match self {
            LayoutStyle::Compact => TableStyle {
                cell_padding: 4.0,
                padding_row_height: 20.0,
                input_height: 28.0,
                outer_border_width: 1.0,
                row_border_width: 1.0,
                item_border_width: 1.0,
                border_color: Color::GRAY,
            },
            LayoutStyle::BorderedPrint => TableStyle {
                cell_padding: 8.0,
                padding_row_height: 36.0,
                input_height: 32.0,
                outer_border_width: 2.0,
                row_border_width: 1.0,
                item_border_width: 2.0,
                border_color: Color::BLACK,
            },
        }
    }
}

// =============================================================================
// Table Render
// =============================================================================

/// The rendered table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRender {
    pub layout_style: LayoutStyle,
    pub style: TableStyle,
    pub editing: bool,
    pub rows: Vec<RenderRow>,
    /// Sum of all quantities at render time
    pub total_qty: u64,
}

impl TableRender {
    pub fn rows_of_kind(&self, kind: RowKind) -> impl Iterator<Item = &RenderRow> + '_ {
        self.rows.iter().filter(move |r| r.kind == kind)
    }

    /// Detail rows belonging to `item_id`, top to bottom
    pub fn item_rows<'a>(&'a self, item_id: &'a ItemId) -> impl Iterator<Item = &'a RenderRow> + 'a {
        self.rows_of_kind(RowKind::Detail)
            .filter(move |r| r.item_id.as_ref() == Some(item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::MergeColumn;

    #[test]
    fn test_cell_for_column_takes_column_geometry() {
        let cell = RenderCell::for_column(MergeColumn::FabricDesc.into());
        assert_eq!(cell.grid_col, 1);
        assert_eq!(cell.col_span, 3);
        assert_eq!(cell.grid_end(), 4);
        assert_eq!(cell.align, TextAlign::Left);
    }

    #[test]
    fn test_layout_styles_differ_only_in_hints() {
        let compact = LayoutStyle::Compact.table_style();
        let print = LayoutStyle::BorderedPrint.table_style();
        assert!(print.outer_border_width > compact.outer_border_width);
        assert!(print.cell_padding > compact.cell_padding);
    }

    #[test]
    fn test_content_json_shape() {
        let json = serde_json::to_value(CellContent::text("Black")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "text", "text": "Black"}));
        let style: LayoutStyle = serde_json::from_str("\"bordered_print\"").unwrap();
        assert_eq!(style, LayoutStyle::BorderedPrint);
    }
}
