//! # CSV Export
//!
//! Flat-row artifact: one row per line item, then the totals block.
//!
//! ## Layout
//! ```text
//! Section,Description,Unit,Qty,Unit Cost,Line Total
//! A. General Requirements,Mobilization/Demobilization,lot,1,5000.00,5000.00
//! ...
//! B. Materials,"Ming Philflex THHN Wire ...",pcs,5,1500.00,7500.00
//! ,,,,TOTAL,22500.00
//! ,,,,LABOR,15000.00
//! ,,,,VAT 12%,2700.00
//! ,,,,INVOICE TOTAL,25200.00
//! ```
//!
//! Amounts are plain decimal pesos (no peso sign, no digit grouping) so the
//! file round-trips through a spreadsheet tool as numbers. An empty document
//! produces the header row and a zero totals block, never an error.

use std::io::Write;

use ::csv::Writer;

use crate::error::{ExportError, ExportResult};
use crate::input::QuotationExportInput;
use jseven_core::Money;

/// Column header row.
const COLUMNS: [&str; 6] = ["Section", "Description", "Unit", "Qty", "Unit Cost", "Line Total"];

/// Writes the CSV artifact to any writer.
pub fn write_csv<W: Write>(input: &QuotationExportInput, writer: W) -> ExportResult<()> {
    let mut out = Writer::from_writer(writer);

    out.write_record(COLUMNS)?;

    for section in &input.sections {
        for item in &section.items {
            let quantity = item.quantity.to_string();
            let unit_cost = money_cell(Money::from_centavos(item.unit_cost));
            let line_total = money_cell(item.line_subtotal());
            out.write_record([
                section.title.as_str(),
                item.description.as_str(),
                item.unit.as_str(),
                quantity.as_str(),
                unit_cost.as_str(),
                line_total.as_str(),
            ])?;
        }
    }

    total_row(&mut out, "TOTAL", input.totals.total)?;
    total_row(&mut out, "LABOR", input.totals.labor)?;
    total_row(&mut out, "VAT 12%", input.totals.vat)?;
    total_row(&mut out, "INVOICE TOTAL", input.totals.invoice_total)?;

    out.flush().map_err(|e| ExportError::Write(e.to_string()))?;
    Ok(())
}

/// Writes the CSV artifact into a byte buffer.
pub fn csv_bytes(input: &QuotationExportInput) -> ExportResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(input, &mut buffer)?;
    Ok(buffer)
}

fn total_row<W: Write>(out: &mut Writer<W>, label: &str, centavos: i64) -> ExportResult<()> {
    let amount = money_cell(Money::from_centavos(centavos));
    out.write_record(["", "", "", "", label, amount.as_str()])?;
    Ok(())
}

/// Spreadsheet-friendly amount cell: `22500.00`.
fn money_cell(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.pesos().abs(), amount.centavos_part())
}

// =============================================================================
// Unit Tests
// =============================================================================
