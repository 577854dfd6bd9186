//! # Quotation Document
//!
//! The full quotation document model and its list-row projection.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Document Lifecycle                                   │
//! │                                                                         │
//! │  "New Quotation" ──► QuotationDocument::new()                          │
//! │                       boilerplate sections, terms, signatories         │
//! │                              │                                          │
//! │                         edits in the dialog                             │
//! │                              │                                          │
//! │  save ──► repository assigns quote_no, stores the FULL document        │
//! │                              │                                          │
//! │  "Edit" ──► repository returns the stored document; every field        │
//! │             round-trips (the legacy edit path dropped fields)          │
//! │                              │                                          │
//! │  list row ──► summary(): client, project, date, amount, status         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `from_summary` reproduces the legacy carry-over (client and project onto
//! fresh blanks) and exists only for summary rows that have no stored
//! document behind them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::totals::{compute_totals, Totals};
use crate::types::{
    HeaderColor, ItemSection, QuotationStatus, Recipient, SectionKind, Signatories,
};
use crate::DEFAULT_OPERATIONS_MANAGER;

// =============================================================================
// Defaults
// =============================================================================

/// Boilerplate terms offered on every new quotation.
pub const DEFAULT_TERMS: [&str; 5] = [
    "50% Downpayment",
    "40% Progress Billing",
    "10% Upon Completion",
    "Completion - 7 Working Days",
    "Warranty - 1 Year",
];

fn default_general_requirements() -> ItemSection {
    ItemSection::from_rows(&[
        ("Mobilization/Demobilization", 1, "lot", Money::from_pesos(5_000)),
        ("Platform Support, Tools and Equipment", 1, "lot", Money::from_pesos(5_000)),
        ("Project Management", 1, "lot", Money::from_pesos(5_000)),
    ])
}

fn default_materials() -> ItemSection {
    ItemSection::from_rows(&[(
        "Ming Philflex THHN Wire 2.0mm² #14 (150mtrs/box)",
        5,
        "pcs",
        Money::from_pesos(1_500),
    )])
}

fn default_signatories() -> Signatories {
    Signatories {
        operations_manager: DEFAULT_OPERATIONS_MANAGER.to_string(),
        conforme: String::new(),
    }
}

// =============================================================================
// Quotation Document
// =============================================================================

/// A full quotation document as edited in the dialog and stored by the
/// quotation repository.
///
/// ## Identity
/// - `id`: UUID v4, immutable, assigned at creation
/// - `quote_no`: human-readable business key (`QTN-001`), assigned by the
///   repository on first save; `None` while the document is unsaved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuotationDocument {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Business key assigned on first save.
    pub quote_no: Option<String>,

    /// Quotation date shown in the header band.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Header band color of the exported artifact.
    pub header_color: HeaderColor,

    /// Addressee block.
    pub recipient: Recipient,

    /// Section A: mobilization, tools, project management.
    pub general_requirements: ItemSection,

    /// Section B: the priced goods.
    pub materials: ItemSection,

    /// Ordered terms & conditions clauses.
    pub terms: Vec<String>,

    /// Free-text instructions under the fixed mode-of-payment label.
    pub transaction_notes: String,

    /// Ordered free-text notes.
    pub notes: Vec<String>,

    /// The two signature roles.
    pub signatories: Signatories,

    /// List badge status.
    pub status: QuotationStatus,

    /// When the document was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the document was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl QuotationDocument {
    /// Creates a new document with the boilerplate defaults: three general
    /// requirement rows, one material row, five terms, one blank note, the
    /// default operations manager, and the dark-slate header.
    pub fn new() -> Self {
        let now = Utc::now();
        QuotationDocument {
            id: Uuid::new_v4().to_string(),
            quote_no: None,
            date: now.date_naive(),
            header_color: HeaderColor::default(),
            recipient: Recipient::default(),
            general_requirements: default_general_requirements(),
            materials: default_materials(),
            terms: DEFAULT_TERMS.iter().map(|t| t.to_string()).collect(),
            transaction_notes: String::new(),
            notes: vec![String::new()],
            signatories: default_signatories(),
            status: QuotationStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds an editable document from a bare summary row.
    ///
    /// Only the client and project carry over; sections and terms start
    /// EMPTY (not the boilerplate), matching the legacy behavior for rows
    /// whose full document was never stored. Prefer the repository's stored
    /// document whenever one exists.
    pub fn from_summary(summary: &QuotationSummary) -> Self {
        let now = Utc::now();
        QuotationDocument {
            id: Uuid::new_v4().to_string(),
            quote_no: Some(summary.quote_no.clone()),
            date: summary.date,
            header_color: HeaderColor::default(),
            recipient: Recipient {
                to_company: summary.client.clone(),
                for_project: summary.project.clone(),
                ..Recipient::default()
            },
            general_requirements: ItemSection::new(),
            materials: ItemSection::new(),
            terms: Vec::new(),
            transaction_notes: String::new(),
            notes: vec![String::new()],
            signatories: default_signatories(),
            status: summary.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Computes the totals summary from the current sections.
    ///
    /// Derived on every call; the document never stores totals.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.general_requirements, &self.materials)
    }

    /// Borrows the addressed item section.
    pub fn section(&self, kind: SectionKind) -> &ItemSection {
        match kind {
            SectionKind::GeneralRequirements => &self.general_requirements,
            SectionKind::Materials => &self.materials,
        }
    }

    /// Mutably borrows the addressed item section.
    pub fn section_mut(&mut self, kind: SectionKind) -> &mut ItemSection {
        match kind {
            SectionKind::GeneralRequirements => &mut self.general_requirements,
            SectionKind::Materials => &mut self.materials,
        }
    }

    /// Projects the list-row summary. `None` until a quote number has been
    /// assigned; unsaved documents have no list row.
    pub fn summary(&self) -> Option<QuotationSummary> {
        let quote_no = self.quote_no.clone()?;
        Some(QuotationSummary {
            quote_no,
            client: self.recipient.to_company.clone(),
            project: self.recipient.for_project.clone(),
            date: self.date,
            amount_centavos: self.totals().total_centavos,
            status: self.status,
        })
    }
}

impl Default for QuotationDocument {
    fn default() -> Self {
        QuotationDocument::new()
    }
}

// =============================================================================
// Quotation Summary
// =============================================================================

/// The list-row projection of a quotation: what the table shows and what
/// search and sort operate on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuotationSummary {
    pub quote_no: String,
    pub client: String,
    pub project: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Combined total (both buckets, before VAT), in centavos.
    pub amount_centavos: i64,
    pub status: QuotationStatus,
}

impl QuotationSummary {
    /// Returns the row amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_centavos(self.amount_centavos)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
