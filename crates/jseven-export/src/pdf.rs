//! # PDF Layout Plan
//!
//! The structured input a paginated PDF renderer consumes. Rendering the
//! actual bytes is an external collaborator's job; this module owns the
//! layout decisions.
//!
//! ## Plan Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HeaderBand        company identity, date, quote number, band color    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  RecipientBlock    To / TIN / Business Style / Address / Project / Loc │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  HeadingBand       "A. General Requirements"  (filled with band color) │
//! │  ItemTable         Description | Unit | Qty | Unit Cost | Total        │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  HeadingBand       "B. Materials"                                      │
//! │  ItemTable         Description | Unit | Qty | Unit Cost | Total        │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  BulletList        Terms & Conditions                                  │
//! │  TransactionBlock  Mode of Payment + instructions                      │
//! │  BulletList        Notes                                               │
//! │  TotalsBand        TOTAL / LABOR / VAT 12% / INVOICE TOTAL             │
//! │  SignatureRow      Operations Manager          Conforme                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Currency cells are pre-formatted (`₱1,500.00`) so every renderer prints
//! identical figures. Empty sections produce tables with zero rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::input::QuotationExportInput;
use jseven_core::{
    HeaderColor, Money, QuotationDocument, COMPANY_ADDRESS, COMPANY_CONTACT, COMPANY_EMAIL,
    COMPANY_NAME, PAYMENT_MODE,
};

/// Placeholder quote number shown before the repository assigns one.
const UNASSIGNED_QUOTE_NO: &str = "AUTO-0001";

/// Item table column headers, in print order.
const ITEM_COLUMNS: [&str; 5] = ["Description", "Unit", "Qty", "Unit Cost", "Total"];

// =============================================================================
// Plan Types
// =============================================================================

/// The colored identity band at the top of the first page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBand {
    pub company_name: String,
    pub address: String,
    pub contact: String,
    pub email: String,
    pub date: NaiveDate,
    pub quote_no: String,
    /// Band fill color as RGB components.
    pub fill_rgb: [u8; 3],
}

impl HeaderBand {
    /// Builds the band for a document: company constants plus the
    /// document's date, number, and chosen color.
    pub fn for_document(document: &QuotationDocument) -> Self {
        HeaderBand {
            company_name: COMPANY_NAME.to_string(),
            address: COMPANY_ADDRESS.to_string(),
            contact: COMPANY_CONTACT.to_string(),
            email: COMPANY_EMAIL.to_string(),
            date: document.date,
            quote_no: document
                .quote_no
                .clone()
                .unwrap_or_else(|| UNASSIGNED_QUOTE_NO.to_string()),
            fill_rgb: rgb_array(document.header_color.rgb()),
        }
    }
}

/// One named signature slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureLine {
    pub name: String,
    pub role: String,
}

/// A renderable block of the document, in print order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PdfBlock {
    /// Full-width colored band carrying a section title.
    HeadingBand { title: String, fill_rgb: [u8; 3] },

    /// The five-column line-item table under a heading band.
    ItemTable {
        columns: Vec<String>,
        /// Pre-formatted cells; currency columns already carry `₱` figures.
        rows: Vec<Vec<String>>,
    },

    /// The addressee block (label/value pairs).
    RecipientBlock { entries: Vec<(String, String)> },

    /// A titled bullet list (terms, notes).
    BulletList { title: String, items: Vec<String> },

    /// Fixed payment-mode label plus optional free-text instructions.
    TransactionBlock {
        payment_mode: String,
        instructions: String,
    },

    /// The four-figure totals strip.
    TotalsBand { entries: Vec<(String, String)> },

    /// The two signature slots at the foot of the document.
    SignatureRow {
        left: SignatureLine,
        right: SignatureLine,
    },
}

/// The complete layout plan for one quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfPlan {
    pub header: HeaderBand,
    pub blocks: Vec<PdfBlock>,
}

impl PdfPlan {
    /// Serializes the plan for an out-of-process renderer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builds the layout plan from the export contract object.
///
/// Never fails: malformed colors fall back to the default band color and
/// empty sections produce empty tables.
pub fn build_plan(input: &QuotationExportInput, header: HeaderBand) -> PdfPlan {
    let fill_rgb = rgb_array(
        HeaderColor::parse(&input.header_color)
            .unwrap_or_default()
            .rgb(),
    );

    let mut blocks = Vec::new();

    blocks.push(PdfBlock::RecipientBlock {
        entries: vec![
            ("To".to_string(), input.recipient.to_company.clone()),
            ("TIN".to_string(), input.recipient.tin.clone()),
            (
                "Business Style".to_string(),
                input.recipient.business_style.clone(),
            ),
            ("Address".to_string(), input.recipient.address.clone()),
            ("For Project".to_string(), input.recipient.for_project.clone()),
            ("Location".to_string(), input.recipient.for_location.clone()),
        ],
    });

    for section in &input.sections {
        blocks.push(PdfBlock::HeadingBand {
            title: section.title.clone(),
            fill_rgb,
        });
        blocks.push(PdfBlock::ItemTable {
            columns: ITEM_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: section
                .items
                .iter()
                .map(|item| {
                    vec![
                        item.description.clone(),
                        item.unit.clone(),
                        item.quantity.to_string(),
                        Money::from_centavos(item.unit_cost).to_string(),
                        item.line_subtotal().to_string(),
                    ]
                })
                .collect(),
        });
    }

    blocks.push(PdfBlock::BulletList {
        title: "Terms & Conditions".to_string(),
        items: input.terms.clone(),
    });
    blocks.push(PdfBlock::TransactionBlock {
        payment_mode: PAYMENT_MODE.to_string(),
        instructions: input.transaction_notes.clone(),
    });
    blocks.push(PdfBlock::BulletList {
        title: "Notes".to_string(),
        items: input.notes.clone(),
    });

    blocks.push(PdfBlock::TotalsBand {
        entries: vec![
            ("TOTAL".to_string(), money_figure(input.totals.total)),
            ("LABOR".to_string(), money_figure(input.totals.labor)),
            ("VAT 12%".to_string(), money_figure(input.totals.vat)),
            (
                "INVOICE TOTAL".to_string(),
                money_figure(input.totals.invoice_total),
            ),
        ],
    });

    blocks.push(PdfBlock::SignatureRow {
        left: SignatureLine {
            name: input.signatories.operations_manager.clone(),
            role: "Operations Manager".to_string(),
        },
        right: SignatureLine {
            name: input.signatories.conforme.clone(),
            role: "Conforme".to_string(),
        },
    });

    PdfPlan { header, blocks }
}

fn money_figure(centavos: i64) -> String {
    Money::from_centavos(centavos).to_string()
}

fn rgb_array((r, g, b): (u8, u8, u8)) -> [u8; 3] {
    [r, g, b]
}

// =============================================================================
// Unit Tests
// =============================================================================
