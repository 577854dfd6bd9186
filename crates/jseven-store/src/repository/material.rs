//! # Material Repository
//!
//! CRUD and search for catalog materials.
//!
//! Materials are the goods a quotation's B section draws from. The record
//! keeps a display price in centavos; pulling a material into a quotation
//! copies that price into the line item (a price snapshot: later catalog
//! edits don't rewrite existing quotations).

use std::cmp::Ordering;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::SortDirection;
use jseven_core::{Material, MaterialDraft, ValidationError};

/// Typed sort/display keys for the materials table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialField {
    Name,
    Price,
    Supplier,
    Category,
    StockDate,
    AvailableStock,
}

impl MaterialField {
    fn compare(self, a: &Material, b: &Material) -> Ordering {
        match self {
            MaterialField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            MaterialField::Price => a.price_centavos.cmp(&b.price_centavos),
            MaterialField::Supplier => a.supplier.to_lowercase().cmp(&b.supplier.to_lowercase()),
            MaterialField::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            MaterialField::StockDate => a.stock_date.cmp(&b.stock_date),
            MaterialField::AvailableStock => a.available_stock.cmp(&b.available_stock),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Material>,
    next_id: u32,
}

/// Repository for catalog materials.
#[derive(Debug, Clone)]
pub struct MaterialRepository {
    inner: Arc<RwLock<Inner>>,
}

impl Default for MaterialRepository {
    fn default() -> Self {
        MaterialRepository::new()
    }
}

impl MaterialRepository {
    pub fn new() -> Self {
        MaterialRepository {
            inner: Arc::new(RwLock::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Creates a material from form input.
    ///
    /// ## Rules
    /// - Name is required
    /// - Price and stock must be non-negative
    pub fn create(&self, draft: MaterialDraft) -> StoreResult<Material> {
        validate_draft(&draft)?;

        let mut inner = self.inner.write().expect("material store lock poisoned");
        let material = Material {
            id: inner.next_id,
            name: draft.name,
            spec: draft.spec,
            price_centavos: draft.price_centavos,
            supplier: draft.supplier,
            category: draft.category,
            stock_date: Utc::now().date_naive(),
            creator: draft.creator,
            status: draft.status,
            available_stock: draft.available_stock,
        };
        inner.next_id += 1;

        debug!(id = material.id, name = %material.name, "Creating material");
        inner.rows.push(material.clone());
        Ok(material)
    }

    /// Gets a material by id.
    pub fn get(&self, id: u32) -> StoreResult<Material> {
        let inner = self.inner.read().expect("material store lock poisoned");
        inner
            .rows
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Replaces a stored material.
    pub fn update(&self, material: Material) -> StoreResult<()> {
        if material.name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "name".to_string(),
            }
            .into());
        }

        let mut inner = self.inner.write().expect("material store lock poisoned");
        let slot = inner
            .rows
            .iter_mut()
            .find(|m| m.id == material.id)
            .ok_or_else(|| not_found(material.id))?;

        debug!(id = material.id, "Updating material");
        *slot = material;
        Ok(())
    }

    /// Deletes a material by id.
    pub fn delete(&self, id: u32) -> StoreResult<()> {
        let mut inner = self.inner.write().expect("material store lock poisoned");
        let before = inner.rows.len();
        inner.rows.retain(|m| m.id != id);

        if inner.rows.len() == before {
            return Err(not_found(id));
        }

        debug!(id, "Deleted material");
        Ok(())
    }

    /// Lists all materials in insertion order.
    pub fn list(&self) -> Vec<Material> {
        let inner = self.inner.read().expect("material store lock poisoned");
        inner.rows.clone()
    }

    /// Case-insensitive search over name, spec, supplier, and category.
    pub fn search(&self, query: &str) -> Vec<Material> {
        let needle = query.trim().to_lowercase();
        self.list()
            .into_iter()
            .filter(|m| {
                needle.is_empty()
                    || m.name.to_lowercase().contains(&needle)
                    || m.spec.to_lowercase().contains(&needle)
                    || m.supplier.to_lowercase().contains(&needle)
                    || m.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Lists all materials sorted by a typed field key.
    pub fn list_sorted(&self, field: MaterialField, direction: SortDirection) -> Vec<Material> {
        let mut rows = self.list();
        rows.sort_by(|a, b| direction.apply(field.compare(a, b)));
        rows
    }
}

fn validate_draft(draft: &MaterialDraft) -> StoreResult<()> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        }
        .into());
    }
    if draft.price_centavos < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        }
        .into());
    }
    if draft.available_stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "availableStock".to_string(),
            min: 0,
            max: i64::MAX,
        }
        .into());
    }
    Ok(())
}

fn not_found(id: u32) -> StoreError {
    StoreError::NotFound {
        entity: "material",
        id: id.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
