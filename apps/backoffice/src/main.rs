//! # Backoffice Demo Entry Point
//!
//! Seeds the in-memory stores and walks one quotation session end to end:
//! open a new dialog, fill it in, save it, and write both export artifacts
//! next to the binary.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (RUST_LOG respected, "info" by default)
//! 2. Seed the repositories with the development dataset
//! 3. Run one editor session through the command layer
//! 4. Write quotation.csv and quotation-plan.json

use std::fs;

use tracing::info;
use tracing_subscriber::EnvFilter;

use jseven_backoffice::commands::quotation::{
    add_item, edit_item, edit_item_quantity, edit_item_unit_cost, editor_totals,
    export_csv, export_pdf_plan, list_quotations, new_quotation, save_quotation,
    set_recipient,
};
use jseven_backoffice::state::{EditorState, StoreState};
use jseven_core::{ItemEdit, Recipient, SectionKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let stores = StoreState::new();
    stores.seed();
    let editor = EditorState::new();

    // One full editor session through the command layer
    new_quotation(&editor)?;
    set_recipient(
        &editor,
        Recipient {
            to_company: "Mega Supplies".to_string(),
            tin: "123-456-789-000".to_string(),
            business_style: "Wholesale".to_string(),
            address: "18 Rizal Ave, Calamba, Laguna".to_string(),
            for_project: "Electrical Works @ Laguna".to_string(),
            for_location: "Calamba, Laguna".to_string(),
        },
    )?;

    let id = add_item(&editor, SectionKind::Materials)?;
    edit_item(
        &editor,
        SectionKind::Materials,
        id,
        ItemEdit::Description("Panel board, 8 branches".to_string()),
    )?;
    edit_item(
        &editor,
        SectionKind::Materials,
        id,
        ItemEdit::Unit("pcs".to_string()),
    )?;
    edit_item_quantity(&editor, SectionKind::Materials, id, "2")?;
    edit_item_unit_cost(&editor, SectionKind::Materials, id, "3,250.00")?;

    let totals = editor_totals(&editor)?;
    info!(
        total = %totals.total(),
        labor = %totals.labor(),
        vat = %totals.vat(),
        invoice_total = %totals.invoice_total(),
        "Draft totals"
    );

    let summary = save_quotation(&stores, &editor)?;
    info!(quote_no = %summary.quote_no, amount = %summary.amount(), "Saved quotation");

    for row in list_quotations(&stores, "") {
        info!(
            quote_no = %row.quote_no,
            client = %row.client,
            amount = %row.amount(),
            status = %row.status,
            "Row"
        );
    }

    // Export artifacts for the saved quotation
    let csv = export_csv(&stores, &summary.quote_no)?;
    fs::write("quotation.csv", &csv)?;

    let plan = export_pdf_plan(&stores, &summary.quote_no)?;
    fs::write("quotation-plan.json", plan.to_json()?)?;

    info!("Wrote quotation.csv and quotation-plan.json");
    Ok(())
}
