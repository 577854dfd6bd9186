//! # Supplier Repository
//!
//! CRUD and search for supplier records. Same contact rules as clients;
//! suppliers additionally carry bank settlement details.

use std::cmp::Ordering;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::SortDirection;
use jseven_core::validation::validate_contact;
use jseven_core::{Supplier, SupplierDraft};

/// Typed sort/display keys for the supplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SupplierField {
    BusinessName,
    Email,
    Phone,
    DateAdded,
}

impl SupplierField {
    fn compare(self, a: &Supplier, b: &Supplier) -> Ordering {
        match self {
            SupplierField::BusinessName => a
                .business_name
                .to_lowercase()
                .cmp(&b.business_name.to_lowercase()),
            SupplierField::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            SupplierField::Phone => a.phone.cmp(&b.phone),
            SupplierField::DateAdded => a.date_added.cmp(&b.date_added),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Supplier>,
    next_id: u32,
}

/// Repository for supplier records.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    inner: Arc<RwLock<Inner>>,
}

impl Default for SupplierRepository {
    fn default() -> Self {
        SupplierRepository::new()
    }
}

impl SupplierRepository {
    pub fn new() -> Self {
        SupplierRepository {
            inner: Arc::new(RwLock::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Creates a supplier from form input; validation failures store nothing.
    pub fn create(&self, draft: SupplierDraft) -> StoreResult<Supplier> {
        validate_contact(&draft.business_name, &draft.email, &draft.phone)?;

        let mut inner = self.inner.write().expect("supplier store lock poisoned");
        let supplier = Supplier {
            id: inner.next_id,
            business_name: draft.business_name,
            email: draft.email,
            phone: draft.phone,
            vat_number: draft.vat_number,
            address: draft.address,
            bank_details: draft.bank_details,
            date_added: Utc::now().date_naive(),
        };
        inner.next_id += 1;

        debug!(id = supplier.id, "Creating supplier");
        inner.rows.push(supplier.clone());
        Ok(supplier)
    }

    /// Gets a supplier by id.
    pub fn get(&self, id: u32) -> StoreResult<Supplier> {
        let inner = self.inner.read().expect("supplier store lock poisoned");
        inner
            .rows
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Replaces a stored supplier. The updated record is re-validated.
    pub fn update(&self, supplier: Supplier) -> StoreResult<()> {
        validate_contact(&supplier.business_name, &supplier.email, &supplier.phone)?;

        let mut inner = self.inner.write().expect("supplier store lock poisoned");
        let slot = inner
            .rows
            .iter_mut()
            .find(|s| s.id == supplier.id)
            .ok_or_else(|| not_found(supplier.id))?;

        debug!(id = supplier.id, "Updating supplier");
        *slot = supplier;
        Ok(())
    }

    /// Deletes a supplier by id.
    pub fn delete(&self, id: u32) -> StoreResult<()> {
        let mut inner = self.inner.write().expect("supplier store lock poisoned");
        let before = inner.rows.len();
        inner.rows.retain(|s| s.id != id);

        if inner.rows.len() == before {
            return Err(not_found(id));
        }

        debug!(id, "Deleted supplier");
        Ok(())
    }

    /// Lists all suppliers in insertion order.
    pub fn list(&self) -> Vec<Supplier> {
        let inner = self.inner.read().expect("supplier store lock poisoned");
        inner.rows.clone()
    }

    /// Case-insensitive search over business name, email, and phone.
    pub fn search(&self, query: &str) -> Vec<Supplier> {
        let needle = query.trim().to_lowercase();
        self.list()
            .into_iter()
            .filter(|s| {
                needle.is_empty()
                    || s.business_name.to_lowercase().contains(&needle)
                    || s.email.to_lowercase().contains(&needle)
                    || s.phone.contains(&needle)
            })
            .collect()
    }

    /// Lists all suppliers sorted by a typed field key.
    pub fn list_sorted(&self, field: SupplierField, direction: SortDirection) -> Vec<Supplier> {
        let mut rows = self.list();
        rows.sort_by(|a, b| direction.apply(field.compare(a, b)));
        rows
    }
}

fn not_found(id: u32) -> StoreError {
    StoreError::NotFound {
        entity: "supplier",
        id: id.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use jseven_core::BankDetails;

    fn draft(name: &str) -> SupplierDraft {
        SupplierDraft {
            business_name: name.to_string(),
            email: format!("sales@{}.ph", name.to_lowercase()),
            phone: "0917 555 0000".to_string(),
            bank_details: BankDetails {
                bank_name: "BDO".to_string(),
                account_name: name.to_string(),
                account_number: "001234567890".to_string(),
            },
            ..SupplierDraft::default()
        }
    }

    #[test]
    fn test_create_keeps_bank_details() {
        let repo = SupplierRepository::new();
        let supplier = repo.create(draft("Philflex")).unwrap();
        assert_eq!(supplier.bank_details.bank_name, "BDO");
        assert_eq!(repo.get(supplier.id).unwrap(), supplier);
    }

    #[test]
    fn test_create_rejects_missing_contact() {
        let repo = SupplierRepository::new();
        let mut bad = draft("Philflex");
        bad.phone.clear();
        assert!(matches!(repo.create(bad), Err(StoreError::Validation(_))));
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_sort_by_name() {
        let repo = SupplierRepository::new();
        repo.create(draft("Philflex")).unwrap();
        repo.create(draft("Firefly")).unwrap();

        let sorted = repo.list_sorted(SupplierField::BusinessName, SortDirection::Ascending);
        assert_eq!(sorted[0].business_name, "Firefly");
    }
}
