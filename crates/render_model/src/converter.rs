//! Work order to render tree conversion

use crate::{
    format_thousands, merged_cell, ButtonVariant, ButtonWidget, CellContent, InputWidget,
    LayoutStyle, RenderCell, RenderRow, RowKind, TableRender,
};
use doc_model::{
    DetailColumn, MergeColumn, TableColumn, TextAlign, WorkOrder, WorkOrderDetail, WorkOrderItem,
    GRID_COLUMN_COUNT,
};
use edit_engine::{EditAction, EditMode, FieldBinding, SessionState};
use serde::{Deserialize, Serialize};

/// Configuration for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub layout_style: LayoutStyle,
    /// Empty rows kept between the items and the totals row
    pub padding_rows: usize,
    /// Separator used when formatting quantities
    pub thousands_separator: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout_style: LayoutStyle::BorderedPrint,
            padding_rows: 8,
            thousands_separator: ',',
        }
    }
}

/// Converts a work order into a render tree
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    config: RenderConfig,
}

impl TableRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the table for a session
    pub fn render_session(&self, state: &SessionState) -> TableRender {
        self.render(&state.document, state.edit_mode)
    }

    /// Render the table for `document` in the given mode.
    ///
    /// Output is a pure function of the inputs.
    pub fn render(&self, document: &WorkOrder, mode: EditMode) -> TableRender {
        let editing = mode.is_editing();
        let mut rows = header_rows();

        for item in document.items() {
            for (index, detail) in item.details().iter().enumerate() {
                rows.push(self.detail_row(document, item, index, detail, editing));
            }
            if editing {
                rows.extend(item_action_rows(item));
            }
        }

        rows.extend((0..self.config.padding_rows).map(|_| padding_row()));

        let total_qty = document.total_qty();
        rows.push(self.total_row(total_qty));

        tracing::trace!(
            rows = rows.len(),
            items = document.items().len(),
            editing,
            "rendered work order table"
        );

        TableRender {
            layout_style: self.config.layout_style,
            style: self.config.layout_style.table_style(),
            editing,
            rows,
            total_qty,
        }
    }

    fn detail_row(
        &self,
        document: &WorkOrder,
        item: &WorkOrderItem,
        index: usize,
        detail: &WorkOrderDetail,
        editing: bool,
    ) -> RenderRow {
        let merge = document.merge_controls().state();
        let mut cells = Vec::with_capacity(TableColumn::ALL.len());

        for column in MergeColumn::ALL {
            let Some(row_span) = merged_cell(column, item, index, merge).row_span() else {
                continue;
            };
            let field = column.field();
            let content = if editing {
                CellContent::Input(InputWidget::new(
                    item.field_text(field),
                    FieldBinding::item(item.id.clone(), field),
                ))
            } else {
                CellContent::text(item.field_text(field))
            };
            cells.push(
                RenderCell::for_column(column.into())
                    .with_row_span(row_span)
                    .bold(column.bold())
                    .with_content(content),
            );
        }

        for column in DetailColumn::ALL {
            cells.push(self.detail_cell(item, detail, column, editing));
        }

        RenderRow::for_item(RowKind::Detail, item.id.clone(), cells)
    }

    fn detail_cell(
        &self,
        item: &WorkOrderItem,
        detail: &WorkOrderDetail,
        column: DetailColumn,
        editing: bool,
    ) -> RenderCell {
        let field = column.field();
        let cell = RenderCell::for_column(column.into());

        if !editing {
            let text = match column {
                DetailColumn::Qty => format_thousands(detail.qty, self.config.thousands_separator),
                _ => detail.field_text(field),
            };
            return cell.with_content(CellContent::text(text));
        }

        let binding = FieldBinding::detail(item.id.clone(), detail.id.clone(), field);
        let cell = cell.with_content(CellContent::Input(InputWidget::new(
            detail.field_text(field),
            binding,
        )));

        if column == DetailColumn::Colour && item.detail_count() > 1 {
            cell.with_action(
                ButtonWidget::new(
                    "Remove Color Row",
                    EditAction::RemoveDetail {
                        item_id: item.id.clone(),
                        detail_id: detail.id.clone(),
                    },
                )
                .with_variant(ButtonVariant::Ghost),
            )
        } else {
            cell
        }
    }

    fn total_row(&self, total_qty: u64) -> RenderRow {
        let qty = DetailColumn::Qty.grid_col();
        let cells = vec![
            RenderCell::blank(0).with_col_span(DetailColumn::Colour.grid_col()),
            RenderCell::blank(DetailColumn::Colour.grid_col())
                .with_content(CellContent::text("Total Qty (Yds) =")),
            RenderCell::for_column(DetailColumn::Qty.into()).with_content(CellContent::text(
                format_thousands(total_qty, self.config.thousands_separator),
            )),
            RenderCell::blank(qty + 1),
            RenderCell::blank(qty + 2),
            RenderCell::blank(qty + 3),
        ];
        RenderRow::new(RowKind::Total, cells)
    }
}

fn header_rows() -> Vec<RenderRow> {
    let labels: [(TableColumn, &str); 8] = [
        (MergeColumn::Sl.into(), "S/L"),
        (MergeColumn::FabricDesc.into(), "Fabrics Description"),
        (MergeColumn::Gsm.into(), "GSM"),
        (MergeColumn::FWidth.into(), "F/Width Inch."),
        (MergeColumn::Quality.into(), "Quality"),
        (MergeColumn::NatureOfWork.into(), "Nature Of Work"),
        (DetailColumn::Colour.into(), "Colour"),
        (DetailColumn::Qty.into(), "Qty. (yds)"),
    ];

    let mut top: Vec<RenderCell> = labels
        .into_iter()
        .map(|(column, label)| {
            let mut cell = RenderCell::for_column(column)
                .header()
                .with_content(CellContent::text(label));
            cell.align = TextAlign::Center;
            cell
        })
        .collect();
    top.push(
        RenderCell::blank(DetailColumn::Rate.grid_col())
            .with_col_span(3)
            .header()
            .with_content(CellContent::text("Rate (TK./Per Yds)")),
    );

    let rate = DetailColumn::Rate.grid_col();
    let mut sub: Vec<RenderCell> = (0..rate).map(|col| RenderCell::blank(col).header()).collect();
    sub.extend([
        (DetailColumn::Rate, "Good"),
        (DetailColumn::Remarks, "Remarks"),
        (DetailColumn::Swatch, "Swatch"),
    ]
    .into_iter()
    .map(|(column, label)| {
        RenderCell::for_column(column.into())
            .header()
            .with_content(CellContent::text(label))
    }));

    vec![
        RenderRow::new(RowKind::Header, top),
        RenderRow::new(RowKind::Header, sub),
    ]
}

fn item_action_rows(item: &WorkOrderItem) -> [RenderRow; 2] {
    let add = ButtonWidget::new(
        format!("Add Color Row to Item {}", item.sl),
        EditAction::AddDetail {
            item_id: item.id.clone(),
        },
    );
    let remove = ButtonWidget::new(
        format!("Remove Entire Item {}", item.sl),
        EditAction::RemoveItem {
            item_id: item.id.clone(),
        },
    )
    .with_variant(ButtonVariant::Destructive);

    [
        (RowKind::AddDetailAction, add),
        (RowKind::RemoveItemAction, remove),
    ]
    .map(|(kind, button)| {
        let cell = RenderCell::blank(0)
            .with_col_span(GRID_COLUMN_COUNT)
            .with_content(CellContent::Button(button));
        RenderRow::for_item(kind, item.id.clone(), vec![cell])
    })
}

fn padding_row() -> RenderRow {
    let cells = TableColumn::ALL
        .into_iter()
        .map(|column| RenderCell::blank(column.grid_col()).with_col_span(column.col_span()))
        .collect();
    RenderRow::new(RowKind::Padding, cells)
}
