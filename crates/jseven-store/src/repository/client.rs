//! # Client Repository
//!
//! CRUD and search for client contact records.
//!
//! Creation validates the required contact fields (business name, email,
//! phone) before anything is stored. A violation aborts the save with no
//! partial record; the dashboard surfaces it as a blocking alert.

use std::cmp::Ordering;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::SortDirection;
use jseven_core::validation::validate_contact;
use jseven_core::{Client, ClientDraft};

/// Typed sort/display keys for the client table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClientField {
    BusinessName,
    Email,
    Phone,
    DateAdded,
}

impl ClientField {
    fn compare(self, a: &Client, b: &Client) -> Ordering {
        match self {
            ClientField::BusinessName => a
                .business_name
                .to_lowercase()
                .cmp(&b.business_name.to_lowercase()),
            ClientField::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            ClientField::Phone => a.phone.cmp(&b.phone),
            ClientField::DateAdded => a.date_added.cmp(&b.date_added),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Client>,
    next_id: u32,
}

/// Repository for client records.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    inner: Arc<RwLock<Inner>>,
}

impl Default for ClientRepository {
    fn default() -> Self {
        ClientRepository::new()
    }
}

impl ClientRepository {
    pub fn new() -> Self {
        ClientRepository {
            inner: Arc::new(RwLock::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Creates a client from form input. Validation failures abort the save
    /// and nothing is stored.
    pub fn create(&self, draft: ClientDraft) -> StoreResult<Client> {
        validate_contact(&draft.business_name, &draft.email, &draft.phone)?;

        let mut inner = self.inner.write().expect("client store lock poisoned");
        let client = Client {
            id: inner.next_id,
            business_name: draft.business_name,
            email: draft.email,
            phone: draft.phone,
            vat_number: draft.vat_number,
            address: draft.address,
            shipping_addresses: draft.shipping_addresses,
            date_added: Utc::now().date_naive(),
        };
        inner.next_id += 1;

        debug!(id = client.id, "Creating client");
        inner.rows.push(client.clone());
        Ok(client)
    }

    /// Gets a client by id.
    pub fn get(&self, id: u32) -> StoreResult<Client> {
        let inner = self.inner.read().expect("client store lock poisoned");
        inner
            .rows
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Replaces a stored client. The updated record is re-validated.
    pub fn update(&self, client: Client) -> StoreResult<()> {
        validate_contact(&client.business_name, &client.email, &client.phone)?;

        let mut inner = self.inner.write().expect("client store lock poisoned");
        let slot = inner
            .rows
            .iter_mut()
            .find(|c| c.id == client.id)
            .ok_or_else(|| not_found(client.id))?;

        debug!(id = client.id, "Updating client");
        *slot = client;
        Ok(())
    }

    /// Deletes a client by id.
    pub fn delete(&self, id: u32) -> StoreResult<()> {
        let mut inner = self.inner.write().expect("client store lock poisoned");
        let before = inner.rows.len();
        inner.rows.retain(|c| c.id != id);

        if inner.rows.len() == before {
            return Err(not_found(id));
        }

        debug!(id, "Deleted client");
        Ok(())
    }

    /// Lists all clients in insertion order.
    pub fn list(&self) -> Vec<Client> {
        let inner = self.inner.read().expect("client store lock poisoned");
        inner.rows.clone()
    }

    /// Case-insensitive search over business name, email, and phone.
    pub fn search(&self, query: &str) -> Vec<Client> {
        let needle = query.trim().to_lowercase();
        self.list()
            .into_iter()
            .filter(|c| {
                needle.is_empty()
                    || c.business_name.to_lowercase().contains(&needle)
                    || c.email.to_lowercase().contains(&needle)
                    || c.phone.contains(&needle)
            })
            .collect()
    }

    /// Lists all clients sorted by a typed field key.
    pub fn list_sorted(&self, field: ClientField, direction: SortDirection) -> Vec<Client> {
        let mut rows = self.list();
        rows.sort_by(|a, b| direction.apply(field.compare(a, b)));
        rows
    }
}

fn not_found(id: u32) -> StoreError {
    StoreError::NotFound {
        entity: "client",
        id: id.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str) -> ClientDraft {
        ClientDraft {
            business_name: name.to_string(),
            email: email.to_string(),
            phone: "0917 555 0000".to_string(),
            ..ClientDraft::default()
        }
    }

    #[test]
    fn test_create_assigns_ids() {
        let repo = ClientRepository::new();
        let a = repo.create(draft("Mega Supplies", "ops@megasupplies.ph")).unwrap();
        let b = repo.create(draft("TechnoMart", "sales@technomart.ph")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_create_rejects_missing_required_fields() {
        let repo = ClientRepository::new();

        let mut bad = draft("", "ops@megasupplies.ph");
        assert!(matches!(
            repo.create(bad.clone()),
            Err(StoreError::Validation(_))
        ));

        bad = draft("Mega Supplies", "not-an-email");
        assert!(repo.create(bad).is_err());

        // Nothing was stored by the failed attempts
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_update_and_delete() {
        let repo = ClientRepository::new();
        let mut client = repo.create(draft("Mega Supplies", "ops@megasupplies.ph")).unwrap();

        client.phone = "0920 804 3301".to_string();
        repo.update(client.clone()).unwrap();
        assert_eq!(repo.get(client.id).unwrap().phone, "0920 804 3301");

        repo.delete(client.id).unwrap();
        assert!(matches!(repo.get(client.id), Err(StoreError::NotFound { .. })));
        assert!(matches!(repo.delete(client.id), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_search_and_sort() {
        let repo = ClientRepository::new();
        repo.create(draft("TechnoMart", "sales@technomart.ph")).unwrap();
        repo.create(draft("BuildFast", "ops@buildfast.ph")).unwrap();

        assert_eq!(repo.search("techno").len(), 1);
        assert_eq!(repo.search("").len(), 2);

        let sorted = repo.list_sorted(ClientField::BusinessName, SortDirection::Ascending);
        assert_eq!(sorted[0].business_name, "BuildFast");
    }
}
