//! # Quotation Repository
//!
//! Stores FULL quotation documents and serves list summaries.
//!
//! ## Why full documents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               Edit Round-Trip (the fixed behavior)                      │
//! │                                                                         │
//! │  save(document) ──► stored under "QTN-007" (assigned here)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list() ──► summaries only (client, project, date, amount, status)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Edit" ──► get("QTN-007") ──► the SAME document, every field intact   │
//! │                                                                         │
//! │  The legacy dashboard rebuilt the document from the summary row and    │
//! │  lost terms, materials, notes, and signatories in the process. The     │
//! │  store keeps the document, so nothing is synthesized on edit.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quote Numbers
//! `QTN-001`, `QTN-002`, ... assigned from a monotonic counter on first
//! save. Deleting a quotation does not free its number.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::SortDirection;
use jseven_core::{QuotationDocument, QuotationSummary};

/// Typed sort keys for the quotation list.
///
/// Replaces string column names: each key maps to an accessor below, so a
/// typo is a compile error rather than a silently unsorted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuotationSortKey {
    QuoteNo,
    Date,
    Client,
    Project,
    Amount,
    Status,
}

impl QuotationSortKey {
    /// Compares two summaries under this key (always ascending; the caller
    /// applies direction).
    fn compare(self, a: &QuotationSummary, b: &QuotationSummary) -> Ordering {
        match self {
            QuotationSortKey::QuoteNo => a.quote_no.cmp(&b.quote_no),
            QuotationSortKey::Date => a.date.cmp(&b.date),
            QuotationSortKey::Client => a.client.to_lowercase().cmp(&b.client.to_lowercase()),
            QuotationSortKey::Project => a.project.to_lowercase().cmp(&b.project.to_lowercase()),
            QuotationSortKey::Amount => a.amount_centavos.cmp(&b.amount_centavos),
            QuotationSortKey::Status => format!("{}", a.status).cmp(&format!("{}", b.status)),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    /// Documents keyed by quote number. BTreeMap keeps list order stable
    /// (QTN-001, QTN-002, ...).
    documents: BTreeMap<String, QuotationDocument>,

    /// Next quote number to assign.
    next_no: u32,
}

/// Repository for quotation documents and their list summaries.
///
/// ## Usage
/// ```rust
/// use jseven_store::QuotationRepository;
/// use jseven_core::QuotationDocument;
///
/// let repo = QuotationRepository::new();
///
/// let mut doc = QuotationDocument::new();
/// doc.recipient.to_company = "Mega Supplies".to_string();
/// doc.recipient.for_project = "Electrical Works @ Laguna".to_string();
///
/// let summary = repo.save(doc).unwrap();
/// assert_eq!(summary.quote_no, "QTN-001");
/// ```
#[derive(Debug, Clone)]
pub struct QuotationRepository {
    inner: Arc<RwLock<Inner>>,
}

/// Default repositories start empty at QTN-001.
impl Default for QuotationRepository {
    fn default() -> Self {
        QuotationRepository::new()
    }
}

impl QuotationRepository {
    /// Creates an empty repository. Numbering starts at QTN-001.
    pub fn new() -> Self {
        QuotationRepository {
            inner: Arc::new(RwLock::new(Inner {
                documents: BTreeMap::new(),
                next_no: 1,
            })),
        }
    }

    /// Saves a document, assigning a quote number on first save, and
    /// returns the stored list summary.
    ///
    /// ## Behavior
    /// - `quote_no == None`: a fresh `QTN-nnn` is assigned
    /// - `quote_no == Some(..)`: upsert under that number; the counter is
    ///   advanced past it so seeded rows never collide with new ones
    pub fn save(&self, mut document: QuotationDocument) -> StoreResult<QuotationSummary> {
        let mut inner = self.inner.write().expect("quotation store lock poisoned");

        let quote_no = match document.quote_no.clone() {
            Some(existing) => {
                // Keep the counter ahead of any externally numbered row
                if let Some(n) = parse_quote_no(&existing) {
                    if n >= inner.next_no {
                        inner.next_no = n + 1;
                    }
                }
                existing
            }
            None => {
                let assigned = format_quote_no(inner.next_no);
                inner.next_no += 1;
                document.quote_no = Some(assigned.clone());
                assigned
            }
        };

        document.updated_at = Utc::now();

        let summary = QuotationSummary {
            quote_no: quote_no.clone(),
            client: document.recipient.to_company.clone(),
            project: document.recipient.for_project.clone(),
            date: document.date,
            amount_centavos: document.totals().total_centavos,
            status: document.status,
        };

        debug!(quote_no = %quote_no, "Saving quotation");
        inner.documents.insert(quote_no, document);

        Ok(summary)
    }

    /// Gets the full stored document for a quote number.
    pub fn get(&self, quote_no: &str) -> StoreResult<QuotationDocument> {
        let inner = self.inner.read().expect("quotation store lock poisoned");
        inner
            .documents
            .get(quote_no)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "quotation",
                id: quote_no.to_string(),
            })
    }

    /// Deletes one quotation.
    pub fn delete(&self, quote_no: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().expect("quotation store lock poisoned");

        debug!(quote_no = %quote_no, "Deleting quotation");
        match inner.documents.remove(quote_no) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                entity: "quotation",
                id: quote_no.to_string(),
            }),
        }
    }

    /// Deletes the selected quotations (the list's bulk action) and returns
    /// how many were actually removed. Unknown numbers are skipped.
    pub fn delete_many(&self, quote_nos: &[String]) -> usize {
        let mut inner = self.inner.write().expect("quotation store lock poisoned");

        let mut removed = 0;
        for quote_no in quote_nos {
            if inner.documents.remove(quote_no).is_some() {
                removed += 1;
            }
        }

        debug!(requested = quote_nos.len(), removed, "Bulk delete quotations");
        removed
    }

    /// Lists all summaries in quote-number order.
    pub fn list(&self) -> Vec<QuotationSummary> {
        let inner = self.inner.read().expect("quotation store lock poisoned");
        inner
            .documents
            .values()
            .filter_map(|d| d.summary())
            .collect()
    }

    /// Case-insensitive search over client, project, and quote number.
    ///
    /// An empty query returns every row, matching the dashboard filter box.
    pub fn search(&self, query: &str) -> Vec<QuotationSummary> {
        let needle = query.trim().to_lowercase();

        debug!(query = %needle, "Searching quotations");
        self.list()
            .into_iter()
            .filter(|s| {
                needle.is_empty()
                    || s.client.to_lowercase().contains(&needle)
                    || s.project.to_lowercase().contains(&needle)
                    || s.quote_no.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Lists all summaries sorted by the given key and direction.
    pub fn list_sorted(&self, key: QuotationSortKey, direction: SortDirection) -> Vec<QuotationSummary> {
        let mut summaries = self.list();
        summaries.sort_by(|a, b| direction.apply(key.compare(a, b)));
        summaries
    }

    /// Number of stored quotations.
    pub fn len(&self) -> usize {
        let inner = self.inner.read().expect("quotation store lock poisoned");
        inner.documents.len()
    }

    /// Checks if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Formats the business key: 1 → "QTN-001".
fn format_quote_no(n: u32) -> String {
    format!("QTN-{:03}", n)
}

/// Parses "QTN-042" → Some(42); anything else → None.
fn parse_quote_no(quote_no: &str) -> Option<u32> {
    quote_no.strip_prefix("QTN-")?.parse().ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use jseven_core::{ItemEdit, Money, QuotationStatus};

    fn saved_document(repo: &QuotationRepository, client: &str, project: &str) -> QuotationSummary {
        let mut doc = QuotationDocument::new();
        doc.recipient.to_company = client.to_string();
        doc.recipient.for_project = project.to_string();
        repo.save(doc).unwrap()
    }

    #[test]
    fn test_save_assigns_sequential_numbers() {
        let repo = QuotationRepository::new();
        let first = saved_document(&repo, "Mega Supplies", "Electrical Works @ Laguna");
        let second = saved_document(&repo, "TechnoMart", "Warehouse Wiring");

        assert_eq!(first.quote_no, "QTN-001");
        assert_eq!(second.quote_no, "QTN-002");
    }

    #[test]
    fn test_edit_round_trips_every_field() {
        let repo = QuotationRepository::new();

        let mut doc = QuotationDocument::new();
        doc.recipient.to_company = "Mega Supplies".to_string();
        doc.recipient.for_project = "Electrical Works @ Laguna".to_string();
        doc.recipient.tin = "123-456-789".to_string();
        doc.terms.push("Custom clause".to_string());
        doc.notes = vec!["Deliver to site".to_string()];
        let summary = repo.save(doc.clone()).unwrap();

        // The stored document keeps everything the saved one had
        let stored = repo.get(&summary.quote_no).unwrap();
        assert_eq!(stored.recipient.tin, "123-456-789");
        assert_eq!(stored.terms.last().unwrap(), "Custom clause");
        assert_eq!(stored.notes, vec!["Deliver to site".to_string()]);
        assert_eq!(stored.general_requirements.len(), 3);

        // Editing and re-saving replaces the stored copy under the same key
        let mut edited = stored;
        let id = edited.materials.items[0].id;
        edited.materials.apply_edit(id, ItemEdit::Quantity(10)).unwrap();
        let resaved = repo.save(edited).unwrap();

        assert_eq!(resaved.quote_no, summary.quote_no);
        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.get(&summary.quote_no).unwrap().materials.items[0].quantity,
            10
        );
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let repo = QuotationRepository::new();
        assert!(matches!(
            repo.get("QTN-999"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_seeded_numbers_advance_the_counter() {
        let repo = QuotationRepository::new();

        let mut doc = QuotationDocument::new();
        doc.quote_no = Some("QTN-007".to_string());
        doc.recipient.to_company = "BuildFast".to_string();
        doc.recipient.for_project = "Residential Project".to_string();
        repo.save(doc).unwrap();

        let next = saved_document(&repo, "TechnoMart", "Warehouse Wiring");
        assert_eq!(next.quote_no, "QTN-008");
    }

    #[test]
    fn test_numbers_are_not_reused_after_delete() {
        let repo = QuotationRepository::new();
        let first = saved_document(&repo, "Mega Supplies", "Laguna");
        repo.delete(&first.quote_no).unwrap();

        let second = saved_document(&repo, "TechnoMart", "Warehouse Wiring");
        assert_eq!(second.quote_no, "QTN-002");
    }

    #[test]
    fn test_delete_many_skips_unknown() {
        let repo = QuotationRepository::new();
        let first = saved_document(&repo, "Mega Supplies", "Laguna");
        let second = saved_document(&repo, "TechnoMart", "Warehouse Wiring");

        let removed = repo.delete_many(&[
            first.quote_no.clone(),
            "QTN-999".to_string(),
            second.quote_no.clone(),
        ]);

        assert_eq!(removed, 2);
        assert!(repo.is_empty());
    }

    #[test]
    fn test_search_matches_client_project_and_number() {
        let repo = QuotationRepository::new();
        saved_document(&repo, "Mega Supplies", "Electrical Works @ Laguna");
        saved_document(&repo, "TechnoMart", "Warehouse Wiring");
        saved_document(&repo, "BuildFast", "Residential Project");

        assert_eq!(repo.search("laguna").len(), 1);
        assert_eq!(repo.search("TECHNO").len(), 1);
        assert_eq!(repo.search("qtn-003").len(), 1);
        assert_eq!(repo.search("").len(), 3);
        assert!(repo.search("nothing-matches").is_empty());
    }

    #[test]
    fn test_list_sorted_by_amount() {
        let repo = QuotationRepository::new();

        // Default boilerplate totals ₱22,500; shrink one document
        let mut small = QuotationDocument::new();
        small.recipient.to_company = "BuildFast".to_string();
        small.recipient.for_project = "Residential Project".to_string();
        let id = small.materials.items[0].id;
        small
            .materials
            .apply_edit(id, ItemEdit::UnitCost(Money::from_pesos(100)))
            .unwrap();
        repo.save(small).unwrap();
        saved_document(&repo, "Mega Supplies", "Laguna");

        let descending = repo.list_sorted(QuotationSortKey::Amount, SortDirection::Descending);
        assert_eq!(descending[0].client, "Mega Supplies");
        assert_eq!(descending[1].client, "BuildFast");

        let ascending = repo.list_sorted(QuotationSortKey::Amount, SortDirection::Ascending);
        assert_eq!(ascending[0].client, "BuildFast");
    }

    #[test]
    fn test_status_survives_round_trip() {
        let repo = QuotationRepository::new();
        let mut doc = QuotationDocument::new();
        doc.recipient.to_company = "Mega Supplies".to_string();
        doc.recipient.for_project = "Laguna".to_string();
        doc.status = QuotationStatus::Accepted;

        let summary = repo.save(doc).unwrap();
        assert_eq!(summary.status, QuotationStatus::Accepted);
        assert_eq!(
            repo.get(&summary.quote_no).unwrap().status,
            QuotationStatus::Accepted
        );
    }
}
