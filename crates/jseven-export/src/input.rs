//! # Export Input Contract
//!
//! The fixed document model handed to every export target. This is the one
//! interface worth pinning precisely: external renderers (and the frontend
//! preview) all consume this exact shape.
//!
//! ```text
//! QuotationExportInput {
//!   recipient: { toCompany, tin, businessStyle, address, forProject, forLocation }
//!   sections: [ { title, items: [ { description, unit, quantity, unitCost } ] } ]
//!   terms: string[]
//!   notes: string[]
//!   transactionNotes: string
//!   signatories: { operationsManager, conforme }
//!   totals: { total, labor, vat, invoiceTotal }   // centavos
//!   headerColor: "#rrggbb"
//! }
//! ```
//!
//! Sections are emitted in print order: general requirements first, then
//! materials. All monetary fields are integer centavos; rendering decides
//! the display format.

use serde::{Deserialize, Serialize};

use jseven_core::{LineItem, Money, QuotationDocument, Recipient, Signatories, Totals};

/// Title of the first printed section.
pub const GENERAL_REQUIREMENTS_TITLE: &str = "A. General Requirements";

/// Title of the second printed section.
pub const MATERIALS_TITLE: &str = "B. Materials";

// =============================================================================
// Contract Types
// =============================================================================

/// One priced row as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportItem {
    pub description: String,
    pub unit: String,
    pub quantity: i64,
    /// Unit cost in centavos.
    pub unit_cost: i64,
}

impl ExportItem {
    /// Derived line subtotal in centavos.
    pub fn line_subtotal(&self) -> Money {
        Money::from_centavos(self.unit_cost).multiply_quantity(self.quantity)
    }
}

impl From<&LineItem> for ExportItem {
    fn from(item: &LineItem) -> Self {
        ExportItem {
            description: item.description.clone(),
            unit: item.unit.clone(),
            quantity: item.quantity,
            unit_cost: item.unit_cost_centavos,
        }
    }
}

/// A titled run of rows (one heading band + one table in the PDF).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSection {
    pub title: String,
    pub items: Vec<ExportItem>,
}

/// The totals block in the contract's field names, all centavos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTotals {
    pub total: i64,
    pub labor: i64,
    pub vat: i64,
    pub invoice_total: i64,
}

impl From<Totals> for ExportTotals {
    fn from(totals: Totals) -> Self {
        ExportTotals {
            total: totals.total_centavos,
            labor: totals.labor_centavos,
            vat: totals.vat_centavos,
            invoice_total: totals.invoice_total_centavos,
        }
    }
}

/// The full export contract object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationExportInput {
    pub recipient: Recipient,
    pub sections: Vec<ExportSection>,
    pub terms: Vec<String>,
    pub notes: Vec<String>,
    pub transaction_notes: String,
    pub signatories: Signatories,
    pub totals: ExportTotals,
    pub header_color: String,
}

/// Builds the contract object from a document, recomputing totals fresh.
pub fn export_input(document: &QuotationDocument) -> QuotationExportInput {
    QuotationExportInput {
        recipient: document.recipient.clone(),
        sections: vec![
            ExportSection {
                title: GENERAL_REQUIREMENTS_TITLE.to_string(),
                items: document
                    .general_requirements
                    .items
                    .iter()
                    .map(ExportItem::from)
                    .collect(),
            },
            ExportSection {
                title: MATERIALS_TITLE.to_string(),
                items: document.materials.items.iter().map(ExportItem::from).collect(),
            },
        ],
        terms: document.terms.clone(),
        notes: document.notes.clone(),
        transaction_notes: document.transaction_notes.clone(),
        signatories: document.signatories.clone(),
        totals: document.totals().into(),
        header_color: document.header_color.as_str().to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
