//! # Quotation Commands
//!
//! Everything the quotation screen invokes: list/search/sort, the editor
//! dialog lifecycle, field edits, save, and export.
//!
//! ## Editor Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Editor Session                                   │
//! │                                                                         │
//! │  "New Quotation" ──► new_quotation() ──► dialog shows defaults         │
//! │                                                                         │
//! │  field edits ──► set_recipient / edit_item / add_term / ...            │
//! │                  (synchronous, local to the open document)             │
//! │                                                                         │
//! │  totals strip ──► editor_totals() (recomputed each read)               │
//! │                                                                         │
//! │  "Save" ──► save_quotation()                                           │
//! │       │       ├── validation fails → VALIDATION_ERROR, dialog STAYS   │
//! │       │       └── ok → stored under its QTN number, dialog closes     │
//! │       ▼                                                                 │
//! │  "Cancel" ──► cancel_quotation() → edits discarded                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::ApiError;
use crate::state::{EditorState, StoreState};
use jseven_core::validation::{
    parse_quantity, parse_unit_cost, validate_description, validate_recipient_for_save,
};
use jseven_core::{
    HeaderColor, ItemEdit, QuotationDocument, QuotationSummary, Recipient, SectionKind,
    SignatoryRole, Totals,
};
use jseven_export::{build_plan, csv_bytes, export_input, HeaderBand, PdfPlan, QuotationExportInput};
use jseven_store::{QuotationSortKey, SortDirection};

// =============================================================================
// List Screen
// =============================================================================

/// Lists quotation rows, filtered by the search box text.
///
/// The filter matches client, project, or quote number, case-insensitively;
/// empty text returns every row.
pub fn list_quotations(stores: &StoreState, query: &str) -> Vec<QuotationSummary> {
    debug!(query, "list_quotations command");
    stores.quotations().search(query)
}

/// Lists quotation rows sorted by a typed column key.
pub fn sort_quotations(
    stores: &StoreState,
    key: QuotationSortKey,
    direction: SortDirection,
) -> Vec<QuotationSummary> {
    debug!(?key, ?direction, "sort_quotations command");
    stores.quotations().list_sorted(key, direction)
}

/// Deletes the selected rows; returns how many existed and were removed.
pub fn delete_quotations(stores: &StoreState, quote_nos: &[String]) -> usize {
    debug!(count = quote_nos.len(), "delete_quotations command");
    stores.quotations().delete_many(quote_nos)
}

// =============================================================================
// Dialog Lifecycle
// =============================================================================

/// Opens the dialog on a fresh default document.
pub fn new_quotation(editor: &EditorState) -> Result<QuotationDocument, ApiError> {
    debug!("new_quotation command");
    editor.open_new().map_err(ApiError::editor)
}

/// Opens the dialog on the stored document behind a list row.
///
/// Every field round-trips: the dialog shows exactly what was saved.
pub fn edit_quotation(
    stores: &StoreState,
    editor: &EditorState,
    quote_no: &str,
) -> Result<QuotationDocument, ApiError> {
    debug!(quote_no, "edit_quotation command");
    let document = stores.quotations().get(quote_no)?;
    editor
        .open_editing(quote_no.to_string(), document.clone())
        .map_err(ApiError::editor)?;
    Ok(document)
}

/// Opens the dialog on a summary row that has no stored document (a legacy
/// import). Only client and project carry over; everything else starts
/// blank.
pub fn edit_legacy_row(
    editor: &EditorState,
    summary: &QuotationSummary,
) -> Result<QuotationDocument, ApiError> {
    debug!(quote_no = %summary.quote_no, "edit_legacy_row command");
    let document = QuotationDocument::from_summary(summary);
    editor
        .open_editing(summary.quote_no.clone(), document.clone())
        .map_err(ApiError::editor)?;
    Ok(document)
}

/// Closes the dialog, discarding all edits.
pub fn cancel_quotation(editor: &EditorState) -> Result<(), ApiError> {
    debug!("cancel_quotation command");
    editor.cancel().map_err(ApiError::editor)
}

/// Validates and persists the open document, closing the dialog on success.
///
/// Validation failures leave the dialog OPEN with all edits intact; the
/// user fixes the field and saves again.
pub fn save_quotation(
    stores: &StoreState,
    editor: &EditorState,
) -> Result<QuotationSummary, ApiError> {
    debug!("save_quotation command");

    // Validate while the dialog is still open, so a rejection keeps it open
    editor
        .with_document(|doc| validate_recipient_for_save(&doc.recipient))
        .map_err(ApiError::editor)??;

    let taken = editor.take_for_save().map_err(ApiError::editor)?;
    let summary = stores.quotations().save(taken.document)?;
    Ok(summary)
}

// =============================================================================
// Field Edits
// =============================================================================

/// Returns a snapshot of the open document.
pub fn open_document(editor: &EditorState) -> Result<QuotationDocument, ApiError> {
    editor.with_document(|doc| doc.clone()).map_err(ApiError::editor)
}

/// Recomputes the totals strip for the open document.
pub fn editor_totals(editor: &EditorState) -> Result<Totals, ApiError> {
    editor.with_document(|doc| doc.totals()).map_err(ApiError::editor)
}

/// Replaces the recipient block.
pub fn set_recipient(editor: &EditorState, recipient: Recipient) -> Result<(), ApiError> {
    editor
        .with_document_mut(|doc| doc.recipient = recipient)
        .map_err(ApiError::editor)
}

/// Appends a blank row to a section and returns its id.
pub fn add_item(editor: &EditorState, section: SectionKind) -> Result<u32, ApiError> {
    debug!(?section, "add_item command");
    let id = editor
        .with_document_mut(|doc| doc.section_mut(section).add_item())
        .map_err(ApiError::editor)??;
    Ok(id)
}

/// Applies a typed single-field edit to one row.
pub fn edit_item(
    editor: &EditorState,
    section: SectionKind,
    id: u32,
    edit: ItemEdit,
) -> Result<(), ApiError> {
    if let ItemEdit::Description(description) = &edit {
        validate_description(description)?;
    }

    editor
        .with_document_mut(|doc| doc.section_mut(section).apply_edit(id, edit))
        .map_err(ApiError::editor)??;
    Ok(())
}

/// Parses quantity text at the boundary and applies it to one row.
/// Invalid text is rejected; the stored value is untouched.
pub fn edit_item_quantity(
    editor: &EditorState,
    section: SectionKind,
    id: u32,
    input: &str,
) -> Result<(), ApiError> {
    let quantity = parse_quantity(input)?;
    edit_item(editor, section, id, ItemEdit::Quantity(quantity))
}

/// Parses unit-cost text at the boundary and applies it to one row.
pub fn edit_item_unit_cost(
    editor: &EditorState,
    section: SectionKind,
    id: u32,
    input: &str,
) -> Result<(), ApiError> {
    let unit_cost = parse_unit_cost(input)?;
    edit_item(editor, section, id, ItemEdit::UnitCost(unit_cost))
}

/// Removes a row by id. Removing an unknown id is a no-op.
pub fn remove_item(editor: &EditorState, section: SectionKind, id: u32) -> Result<(), ApiError> {
    debug!(?section, id, "remove_item command");
    editor
        .with_document_mut(|doc| doc.section_mut(section).remove_item(id))
        .map_err(ApiError::editor)
}

/// Pulls a catalog material into the B section, snapshotting its current
/// price into the new line item.
pub fn add_material_from_catalog(
    stores: &StoreState,
    editor: &EditorState,
    material_id: u32,
) -> Result<u32, ApiError> {
    debug!(material_id, "add_material_from_catalog command");
    let material = stores.materials().get(material_id)?;

    let id = add_item(editor, SectionKind::Materials)?;
    edit_item(
        editor,
        SectionKind::Materials,
        id,
        ItemEdit::Description(material.name.clone()),
    )?;
    edit_item(
        editor,
        SectionKind::Materials,
        id,
        ItemEdit::Unit("pcs".to_string()),
    )?;
    edit_item(
        editor,
        SectionKind::Materials,
        id,
        ItemEdit::UnitCost(material.price()),
    )?;
    Ok(id)
}

/// Appends a terms clause.
pub fn add_term(editor: &EditorState, text: String) -> Result<(), ApiError> {
    editor
        .with_document_mut(|doc| doc.terms.push(text))
        .map_err(ApiError::editor)
}

/// Rewrites one terms clause.
pub fn update_term(editor: &EditorState, index: usize, text: String) -> Result<(), ApiError> {
    editor
        .with_document_mut(|doc| match doc.terms.get_mut(index) {
            Some(slot) => {
                *slot = text;
                Ok(())
            }
            None => Err(ApiError::validation(format!("No term at index {}", index))),
        })
        .map_err(ApiError::editor)?
}

/// Removes one terms clause; out-of-range indices are a no-op.
pub fn remove_term(editor: &EditorState, index: usize) -> Result<(), ApiError> {
    editor
        .with_document_mut(|doc| {
            if index < doc.terms.len() {
                doc.terms.remove(index);
            }
        })
        .map_err(ApiError::editor)
}

/// Appends a blank note line.
pub fn add_note(editor: &EditorState) -> Result<(), ApiError> {
    editor
        .with_document_mut(|doc| doc.notes.push(String::new()))
        .map_err(ApiError::editor)
}

/// Rewrites one note line.
pub fn update_note(editor: &EditorState, index: usize, text: String) -> Result<(), ApiError> {
    editor
        .with_document_mut(|doc| match doc.notes.get_mut(index) {
            Some(slot) => {
                *slot = text;
                Ok(())
            }
            None => Err(ApiError::validation(format!("No note at index {}", index))),
        })
        .map_err(ApiError::editor)?
}

/// Removes one note line; out-of-range indices are a no-op.
pub fn remove_note(editor: &EditorState, index: usize) -> Result<(), ApiError> {
    editor
        .with_document_mut(|doc| {
            if index < doc.notes.len() {
                doc.notes.remove(index);
            }
        })
        .map_err(ApiError::editor)
}

/// Replaces the free-text transaction instructions.
pub fn set_transaction_notes(editor: &EditorState, text: String) -> Result<(), ApiError> {
    editor
        .with_document_mut(|doc| doc.transaction_notes = text)
        .map_err(ApiError::editor)
}

/// Renames one of the two signature roles.
pub fn set_signatory(
    editor: &EditorState,
    role: SignatoryRole,
    name: String,
) -> Result<(), ApiError> {
    editor
        .with_document_mut(|doc| match role {
            SignatoryRole::OperationsManager => doc.signatories.operations_manager = name,
            SignatoryRole::Conforme => doc.signatories.conforme = name,
        })
        .map_err(ApiError::editor)
}

/// Parses and applies a header band color (`#rrggbb`).
pub fn set_header_color(editor: &EditorState, input: &str) -> Result<(), ApiError> {
    let color = HeaderColor::parse(input)?;
    editor
        .with_document_mut(|doc| doc.header_color = color)
        .map_err(ApiError::editor)
}

// =============================================================================
// Preview & Export
// =============================================================================

/// Builds the preview/export contract object for the open document.
pub fn preview_quotation(editor: &EditorState) -> Result<QuotationExportInput, ApiError> {
    debug!("preview_quotation command");
    editor
        .with_document(|doc| export_input(doc))
        .map_err(ApiError::editor)
}

/// Exports the open document as CSV bytes.
pub fn export_editor_csv(editor: &EditorState) -> Result<Vec<u8>, ApiError> {
    debug!("export_editor_csv command");
    let bytes = editor
        .with_document(|doc| csv_bytes(&export_input(doc)))
        .map_err(ApiError::editor)??;
    Ok(bytes)
}

/// Builds the PDF layout plan for the open document.
pub fn export_editor_pdf_plan(editor: &EditorState) -> Result<PdfPlan, ApiError> {
    debug!("export_editor_pdf_plan command");
    editor
        .with_document(|doc| build_plan(&export_input(doc), HeaderBand::for_document(doc)))
        .map_err(ApiError::editor)
}

/// Exports a STORED quotation as CSV bytes (the list screen's export).
pub fn export_csv(stores: &StoreState, quote_no: &str) -> Result<Vec<u8>, ApiError> {
    debug!(quote_no, "export_csv command");
    let document = stores.quotations().get(quote_no)?;
    Ok(csv_bytes(&export_input(&document))?)
}

/// Builds the PDF layout plan for a stored quotation.
pub fn export_pdf_plan(stores: &StoreState, quote_no: &str) -> Result<PdfPlan, ApiError> {
    debug!(quote_no, "export_pdf_plan command");
    let document = stores.quotations().get(quote_no)?;
    Ok(build_plan(
        &export_input(&document),
        HeaderBand::for_document(&document),
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use jseven_core::{Money, QuotationStatus};

    fn open_session() -> (StoreState, EditorState) {
        let stores = StoreState::new();
        let editor = EditorState::new();
        (stores, editor)
    }

    fn fill_required(editor: &EditorState) {
        set_recipient(
            editor,
            Recipient {
                to_company: "Mega Supplies".to_string(),
                for_project: "Electrical Works @ Laguna".to_string(),
                ..Recipient::default()
            },
        )
        .unwrap();
    }

    #[test]
    fn test_full_session_new_edit_save() {
        let (stores, editor) = open_session();

        new_quotation(&editor).unwrap();
        fill_required(&editor);

        // Add a material row through the text boundary
        let id = add_item(&editor, SectionKind::Materials).unwrap();
        edit_item(
            &editor,
            SectionKind::Materials,
            id,
            ItemEdit::Description("Panel board".to_string()),
        )
        .unwrap();
        edit_item_quantity(&editor, SectionKind::Materials, id, "2").unwrap();
        edit_item_unit_cost(&editor, SectionKind::Materials, id, "3,250.50").unwrap();

        let totals = editor_totals(&editor).unwrap();
        // boilerplate ₱22,500 + 2 × ₱3,250.50
        assert_eq!(totals.total(), Money::from_centavos(2_250_000 + 650_100));

        let summary = save_quotation(&stores, &editor).unwrap();
        assert_eq!(summary.quote_no, "QTN-001");
        assert!(!editor.is_open());

        // Reopen for edit: everything round-trips
        let reopened = edit_quotation(&stores, &editor, "QTN-001").unwrap();
        assert_eq!(reopened.materials.len(), 2);
        assert_eq!(
            reopened.materials.items[1].description,
            "Panel board"
        );
        cancel_quotation(&editor).unwrap();
    }

    #[test]
    fn test_save_validation_failure_keeps_dialog_open() {
        let (stores, editor) = open_session();
        new_quotation(&editor).unwrap();

        // Recipient left blank → required-field rejection
        let err = save_quotation(&stores, &editor).unwrap_err();
        assert!(err.message.contains("toCompany"));

        // The dialog is still open with the edits intact
        assert!(editor.is_open());
        assert!(stores.quotations().is_empty());
    }

    #[test]
    fn test_invalid_numeric_text_is_rejected_and_value_untouched() {
        let (_, editor) = open_session();
        new_quotation(&editor).unwrap();

        let doc = open_document(&editor).unwrap();
        let id = doc.materials.items[0].id;

        assert!(edit_item_quantity(&editor, SectionKind::Materials, id, "abc").is_err());
        assert!(edit_item_quantity(&editor, SectionKind::Materials, id, "").is_err());
        assert!(edit_item_unit_cost(&editor, SectionKind::Materials, id, "-10").is_err());

        let after = open_document(&editor).unwrap();
        assert_eq!(after.materials.items[0].quantity, 5);
        assert_eq!(
            after.materials.items[0].unit_cost(),
            Money::from_pesos(1_500)
        );
    }

    #[test]
    fn test_terms_and_notes_editing() {
        let (_, editor) = open_session();
        new_quotation(&editor).unwrap();

        add_term(&editor, "Price valid for 30 days".to_string()).unwrap();
        update_term(&editor, 0, "60% Downpayment".to_string()).unwrap();
        assert!(update_term(&editor, 99, "x".to_string()).is_err());
        remove_term(&editor, 1).unwrap();
        remove_term(&editor, 99).unwrap(); // no-op

        add_note(&editor).unwrap();
        update_note(&editor, 1, "Deliver to site".to_string()).unwrap();

        let doc = open_document(&editor).unwrap();
        assert_eq!(doc.terms[0], "60% Downpayment");
        assert_eq!(doc.terms.len(), 5); // 5 defaults + 1 added - 1 removed
        assert_eq!(doc.notes, vec![String::new(), "Deliver to site".to_string()]);
    }

    #[test]
    fn test_header_color_and_signatories() {
        let (_, editor) = open_session();
        new_quotation(&editor).unwrap();

        set_header_color(&editor, "#2563EB").unwrap();
        assert!(set_header_color(&editor, "blue").is_err());
        set_signatory(&editor, SignatoryRole::Conforme, "Juan dela Cruz".to_string()).unwrap();

        let doc = open_document(&editor).unwrap();
        assert_eq!(doc.header_color.as_str(), "#2563eb");
        assert_eq!(doc.signatories.conforme, "Juan dela Cruz");
    }

    #[test]
    fn test_add_material_from_catalog_snapshots_price() {
        let (stores, editor) = open_session();
        stores.seed();
        new_quotation(&editor).unwrap();

        let catalog = stores.materials().list();
        let wire = &catalog[0];
        let id = add_material_from_catalog(&stores, &editor, wire.id).unwrap();

        // Catalog price change after the fact does not rewrite the line
        let mut updated = wire.clone();
        updated.price_centavos = Money::from_pesos(9_999).centavos();
        stores.materials().update(updated).unwrap();

        let doc = open_document(&editor).unwrap();
        let line = doc.materials.get(id).unwrap();
        assert_eq!(line.unit_cost(), Money::from_pesos(1_500));
        assert_eq!(line.description, wire.name);
    }

    #[test]
    fn test_list_search_and_bulk_delete() {
        let (stores, editor) = open_session();
        stores.seed();

        assert_eq!(list_quotations(&stores, "").len(), 3);
        assert_eq!(list_quotations(&stores, "techno").len(), 1);

        let sorted = sort_quotations(
            &stores,
            QuotationSortKey::Amount,
            SortDirection::Descending,
        );
        assert_eq!(sorted[0].quote_no, "QTN-001");

        let removed = delete_quotations(
            &stores,
            &["QTN-001".to_string(), "QTN-404".to_string()],
        );
        assert_eq!(removed, 1);
        assert_eq!(list_quotations(&stores, "").len(), 2);

        // No dialog was involved
        assert!(!editor.is_open());
    }

    #[test]
    fn test_edit_legacy_row_carries_client_and_project() {
        let (_, editor) = open_session();
        let summary = QuotationSummary {
            quote_no: "QTN-777".to_string(),
            client: "Mega Supplies".to_string(),
            project: "Laguna".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
            amount_centavos: 200_000,
            status: QuotationStatus::Pending,
        };

        let doc = edit_legacy_row(&editor, &summary).unwrap();
        assert_eq!(doc.recipient.to_company, "Mega Supplies");
        assert!(doc.materials.is_empty());
        assert!(editor.is_open());
    }

    #[test]
    fn test_exports_from_stored_document() {
        let (stores, editor) = open_session();
        stores.seed();

        let bytes = export_csv(&stores, "QTN-001").unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("TOTAL"));
        assert!(text.contains("2000.00"));

        let plan = export_pdf_plan(&stores, "QTN-001").unwrap();
        assert_eq!(plan.header.quote_no, "QTN-001");

        assert!(export_csv(&stores, "QTN-404").is_err());
        assert!(!editor.is_open());
    }

    #[test]
    fn test_editor_exports_work_on_empty_sections() {
        let (_, editor) = open_session();
        new_quotation(&editor).unwrap();

        // Strip both sections: export must still succeed
        let doc = open_document(&editor).unwrap();
        for item in &doc.general_requirements.items {
            remove_item(&editor, SectionKind::GeneralRequirements, item.id).unwrap();
        }
        for item in &doc.materials.items {
            remove_item(&editor, SectionKind::Materials, item.id).unwrap();
        }

        let totals = editor_totals(&editor).unwrap();
        assert_eq!(totals.invoice_total(), Money::zero());

        assert!(export_editor_csv(&editor).is_ok());
        let plan = export_editor_pdf_plan(&editor).unwrap();
        assert!(plan.to_json().is_ok());

        let preview = preview_quotation(&editor).unwrap();
        assert!(preview.sections.iter().all(|s| s.items.is_empty()));
    }
}
