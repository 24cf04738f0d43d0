//! Plain-text table output

use doc_model::GRID_COLUMN_COUNT;
use render_model::{CellContent, RenderCell, TableRender};

const MIN_WIDTH: usize = 3;
const SEPARATOR: &str = " | ";

/// Text shown for a cell: inputs in angle brackets, buttons in square brackets
fn cell_text(cell: &RenderCell) -> String {
    let mut text = match &cell.content {
        CellContent::Empty => String::new(),
        CellContent::Text { text } => text.clone(),
        CellContent::Input(input) => format!("<{}>", input.value),
        CellContent::Button(button) => format!("[{}]", button.label),
    };
    for action in &cell.actions {
        text.push_str(&format!(" [{}]", action.label));
    }
    text
}

/// Draw the table as aligned text, leaving row-spanned slots blank
pub fn render_text(table: &TableRender) -> String {
    let columns = GRID_COLUMN_COUNT as usize;
    let mut widths = vec![MIN_WIDTH; columns];
    for cell in table.rows.iter().flat_map(|r| &r.cells) {
        if cell.col_span == 1 {
            let col = cell.grid_col as usize;
            widths[col] = widths[col].max(cell_text(cell).chars().count());
        }
    }

    let mut out = String::new();
    let mut covered = vec![0u32; columns];
    for row in &table.rows {
        let mut slots: Vec<Option<String>> = vec![None; columns];
        let mut spans = vec![1usize; columns];
        for (col, remaining) in covered.iter().enumerate() {
            if *remaining > 0 {
                slots[col] = Some(String::new());
            }
        }
        for cell in &row.cells {
            let start = cell.grid_col as usize;
            slots[start] = Some(cell_text(cell));
            spans[start] = cell.col_span as usize;
            for col in cell.grid_col..cell.grid_end() {
                covered[col as usize] = covered[col as usize].max(cell.row_span);
            }
        }

        let mut line = Vec::new();
        let mut col = 0;
        while col < columns {
            let span = spans[col].max(1).min(columns - col);
            let width = widths[col..col + span].iter().sum::<usize>() + SEPARATOR.len() * (span - 1);
            let text = slots[col].clone().unwrap_or_default();
            line.push(format!("{:<width$}", text, width = width));
            col += span;
        }
        out.push_str(line.join(SEPARATOR).trim_end());
        out.push('\n');

        for remaining in covered.iter_mut() {
            *remaining = remaining.saturating_sub(1);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::WorkOrder;
    use edit_engine::EditMode;
    use render_model::TableRenderer;

    #[test]
    fn test_render_text_sample() {
        let table = TableRenderer::default().render(&WorkOrder::sample(), EditMode::View);
        let text = render_text(&table);
        assert_eq!(text.lines().count(), table.rows.len());
        assert!(text.contains("Fabrics Description"));
        assert!(text.contains("8,255"));
        assert!(text.contains("Burgundy"));
    }

    #[test]
    fn test_render_text_edit_mode_shows_widgets() {
        let table = TableRenderer::default().render(&WorkOrder::sample(), EditMode::Edit);
        let text = render_text(&table);
        assert!(text.contains("<Black> [Remove Color Row]"));
        assert!(text.contains("[Add Color Row to Item 2]"));
    }
}
