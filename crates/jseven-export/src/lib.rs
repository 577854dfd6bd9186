//! # jseven-export: Export Sink for Quotation Documents
//!
//! Consumes a finished `QuotationDocument` and produces export artifacts.
//!
//! ## The Sink Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Export Pipeline                                  │
//! │                                                                         │
//! │  QuotationDocument (+ derived Totals)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  QuotationExportInput ── the fixed contract object (input.rs)          │
//! │       │                                                                 │
//! │       ├──► csv::write_csv ──► flat rows, opens in a spreadsheet        │
//! │       │                                                                 │
//! │       └──► pdf::build_plan ──► PdfPlan: heading bands + tables         │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │            external paginated PDF renderer (out of scope)              │
//! │                                                                         │
//! │  Empty documents are VALID input everywhere: the CSV degrades to a     │
//! │  header row plus zero totals, the plan to empty tables. No errors.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod csv;
pub mod error;
pub mod input;
pub mod pdf;

// =============================================================================
// Re-exports
// =============================================================================

// `self::` disambiguates our csv module from the csv crate
pub use self::csv::{csv_bytes, write_csv};
pub use error::{ExportError, ExportResult};
pub use input::{export_input, ExportItem, ExportSection, ExportTotals, QuotationExportInput};
pub use pdf::{build_plan, HeaderBand, PdfBlock, PdfPlan, SignatureLine};
