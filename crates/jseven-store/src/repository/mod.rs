//! # Repository Module
//!
//! In-memory repository implementations for the dashboard lists.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts storage behind a clean API.          │
//! │                                                                         │
//! │  Backoffice Command                                                    │
//! │       │                                                                 │
//! │       │  stores.quotations().search("laguna")                          │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  QuotationRepository                                                   │
//! │  ├── save(&self, document)                                             │
//! │  ├── get(&self, quote_no)                                              │
//! │  ├── list / search / list_sorted                                       │
//! │  └── delete / delete_many                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Arc<RwLock<...>> in-memory map                                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • The UI never owns list state (no component-local copies)           │
//! │  • Typed sort/filter keys instead of string field names               │
//! │  • A real backend can replace the lock without touching callers       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`quotation::QuotationRepository`] - Full documents + list summaries
//! - [`client::ClientRepository`] - Client contact records
//! - [`supplier::SupplierRepository`] - Supplier records with bank details
//! - [`material::MaterialRepository`] - Catalog materials

use serde::{Deserialize, Serialize};

pub mod client;
pub mod material;
pub mod quotation;
pub mod supplier;

/// Sort direction shared by every sortable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Applies the direction to an already-ascending ordering.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}
