// SPDX-License-Identifier: Apache-2.0

use blotter_grid::ExportSelection;
use blotter_model::{CellFormat, FieldValue, GridRecord};
use std::io::Write;

#[derive(Debug)]
pub struct ExportError(pub String);

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ExportError {}

/// Render the grid's resolved export to CSV. Only rows named by the
/// selection are written, in selection order; columns come from the
/// selection too, so visibility and the all-columns flag are already
/// applied.
pub fn write_csv<R: GridRecord, W: Write>(
    selection: &ExportSelection,
    records: &[R],
    out: &mut W,
) -> Result<(), ExportError> {
    let header: Vec<String> = selection
        .columns
        .iter()
        .map(|c| escape_field(c.label))
        .collect();
    writeln!(out, "{}", header.join(",")).map_err(|e| ExportError(e.to_string()))?;

    for id in &selection.row_ids {
        let Some(record) = records.iter().find(|r| r.record_id() == *id) else {
            continue;
        };
        let cells: Vec<String> = selection
            .columns
            .iter()
            .map(|column| escape_field(&render_cell(record.field(column.field), column.format)))
            .collect();
        writeln!(out, "{}", cells.join(",")).map_err(|e| ExportError(e.to_string()))?;
    }
    Ok(())
}

fn render_cell(value: FieldValue, format: CellFormat) -> String {
    match (format, &value) {
        (CellFormat::Currency, FieldValue::Int(v)) => format!("{:.2}", *v as f64),
        (CellFormat::Currency, FieldValue::Float(v)) => format!("{v:.2}"),
        (CellFormat::Hours, FieldValue::Int(v)) => format!("{:.1}", *v as f64),
        (CellFormat::Hours, FieldValue::Float(v)) => format!("{v:.1}"),
        _ => value.to_string(),
    }
}

fn escape_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
