//! # jseven-store: Repository Layer for the JSeven Backoffice
//!
//! This crate provides list state for the dashboard behind repository types.
//! Storage is in-memory (`RwLock`-protected, shared via `Arc`); all list
//! state is session-local by design.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     JSeven Backoffice Data Flow                         │
//! │                                                                         │
//! │  Backoffice Command (list_quotations)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   jseven-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐  ┌───────────────┐  ┌──────────────────┐ │   │
//! │  │   │ QuotationRepo  │  │ ClientRepo    │  │ SupplierRepo     │ │   │
//! │  │   │ full documents │  │ contact rows  │  │ MaterialRepo     │ │   │
//! │  │   │ QTN-nnn keys   │  │ integer ids   │  │ ...              │ │   │
//! │  │   └────────────────┘  └───────────────┘  └──────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │            Arc<RwLock<...>> in-memory storage                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  The storage is the ONLY thing in-memory about this crate: callers     │
//! │  see list/create/update/delete and never touch the lock directly.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Store error types
//! - [`repository`] - Repository implementations (quotation, client, ...)

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};

// Repository re-exports for convenience
pub use repository::client::{ClientField, ClientRepository};
pub use repository::material::{MaterialField, MaterialRepository};
pub use repository::quotation::{QuotationRepository, QuotationSortKey};
pub use repository::supplier::{SupplierField, SupplierRepository};
pub use repository::SortDirection;
