//! Flattens wiki tables into table events.
//!
//! Rows and cells map one to one onto row and cell events, header cells use
//! the head-cell pair. A caption has no event of its own: when the first
//! cell of the first row is a caption it is rendered before the table inside
//! two nested groups. The inner group holds the caption, the outer one stays
//! open around the table and closes after it.

use crate::converter::Traversal;
use crate::ir::attributes::Attributes;
use crate::ir::token::{CellKind, TableCell, TableRow, WikiTable};

pub fn flatten_table(table: &WikiTable, cx: &mut Traversal<'_>) {
    let empty = Attributes::new();
    let caption = table
        .rows
        .first()
        .and_then(|row| row.cells.first())
        .filter(|cell| cell.kind == CellKind::Caption);

    if let Some(caption) = caption {
        cx.listener().begin_group(&empty);
        cx.listener().begin_group(&empty);
        cx.traverse(&caption.content);
        cx.listener().end_group(&empty);
    }

    cx.listener().begin_table(&table.attributes);
    for (index, row) in table.rows.iter().enumerate() {
        let skip_first = index == 0 && caption.is_some();
        walk_row(row, skip_first, cx);
    }
    cx.listener().end_table(&table.attributes);

    if caption.is_some() {
        cx.listener().end_group(&empty);
    }
}

fn walk_row(row: &TableRow, skip_caption: bool, cx: &mut Traversal<'_>) {
    cx.listener().begin_table_row(&row.attributes);
    let skip = usize::from(skip_caption);
    for cell in row.cells.iter().skip(skip) {
        walk_cell(cell, cx);
    }
    cx.listener().end_table_row(&row.attributes);
}

fn walk_cell(cell: &TableCell, cx: &mut Traversal<'_>) {
    match cell.kind {
        CellKind::Header => {
            cx.listener().begin_table_head_cell(&cell.attributes);
            cx.traverse(&cell.content);
            cx.listener().end_table_head_cell(&cell.attributes);
        }
        CellKind::Body | CellKind::Caption => {
            cx.listener().begin_table_cell(&cell.attributes);
            cx.traverse(&cell.content);
            cx.listener().end_table_cell(&cell.attributes);
        }
    }
}
