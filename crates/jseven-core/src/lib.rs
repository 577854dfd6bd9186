//! # jseven-core: Pure Business Logic for the JSeven Backoffice
//!
//! This crate is the **heart** of the quotation tool. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     JSeven Backoffice Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (Dashboard UI)                      │   │
//! │  │    Quotation List ──► Editor Dialog ──► Preview ──► Export     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Backoffice Commands                          │   │
//! │  │    list_quotations, open_editor, edit_item, save, export, etc. │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ jseven-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  totals   │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │  Totals   │  │   rules   │  │   │
//! │  │   │  Section  │  │  VatRate  │  │  reducer  │  │  parsers  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        jseven-store (repositories) / jseven-export (sink)       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, ItemSection, Recipient, etc.)
//! - [`catalog`] - Marketplace records (Client, Supplier, Material)
//! - [`money`] - Money type with integer centavo arithmetic (no floating point!)
//! - [`document`] - The quotation document model and its defaults
//! - [`totals`] - The totals reducer (subtotals, labor, VAT, invoice total)
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary parsing and business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use jseven_core::money::{Money, VatRate};
//!
//! // Create money from centavos (never from floats!)
//! let amount = Money::from_pesos(22_500); // ₱22,500.00
//!
//! // VAT at the fixed domain rate of 12%
//! let vat = amount.calculate_vat(VatRate::standard());
//! assert_eq!(vat, Money::from_pesos(2_700));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod document;
pub mod error;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use jseven_core::Money` instead of
// `use jseven_core::money::Money`

pub use catalog::*;
pub use document::{QuotationDocument, QuotationSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, VatRate};
pub use totals::{compute_totals, Totals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Value-added tax rate in basis points (1200 = 12%).
///
/// ## Why a constant?
/// The 12% VAT is a hard-coded domain rule with no configuration surface.
/// It is deliberately NOT configurable; a future tax-rule engine would
/// replace this constant rather than parameterize it.
pub const STANDARD_VAT_BPS: u32 = 1200;

/// Default header color for new quotations (dark slate).
pub const DEFAULT_HEADER_COLOR: &str = "#0f172a";

/// Header color presets offered by the editor.
pub const HEADER_COLOR_PRESETS: [&str; 5] =
    ["#0f172a", "#0ea5a3", "#fb923c", "#ef4444", "#2563eb"];

/// Default operations-manager signatory on a fresh quotation.
pub const DEFAULT_OPERATIONS_MANAGER: &str = "Engr. Jimmy Catipay";

/// The fixed mode-of-payment label shown in the transaction details block.
/// Payment terms beyond this label live in the free-text transaction notes.
pub const PAYMENT_MODE: &str = "Cash on Delivery (CoD)";

/// Company identity printed in the quotation header band.
pub const COMPANY_NAME: &str = "JSEVEN";
pub const COMPANY_ADDRESS: &str =
    "2nd Floor Unit-3 Blk 74 Lot 8, C. Arellano, Katarungan Village, Muntinlupa";
pub const COMPANY_CONTACT: &str = "Tel: (02) 7000 2618 | 0920 804 3301";
pub const COMPANY_EMAIL: &str = "jseven@engservices.net";

/// Maximum line items allowed in a single section.
///
/// ## Business Reason
/// Prevents runaway documents and keeps the printed quotation readable.
pub const MAX_SECTION_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 10000 instead of 100).
pub const MAX_ITEM_QUANTITY: i64 = 9_999;

/// Maximum length of a line-item description.
pub const MAX_DESCRIPTION_LEN: usize = 300;
