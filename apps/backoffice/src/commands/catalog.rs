//! # Catalog Commands
//!
//! CRUD and search over the three marketplace lists: clients, suppliers,
//! and materials. These are thin wrappers: required-field rules live in the
//! repositories, which reject and store nothing on violation. The dashboard
//! surfaces rejections as blocking alerts.

use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;
use jseven_core::{
    Client, ClientDraft, Material, MaterialDraft, Supplier, SupplierDraft,
};
use jseven_store::{ClientField, MaterialField, SortDirection, SupplierField};

// =============================================================================
// Clients
// =============================================================================

/// Lists clients, filtered by the search box text.
pub fn list_clients(stores: &StoreState, query: &str) -> Vec<Client> {
    debug!(query, "list_clients command");
    stores.clients().search(query)
}

/// Lists clients sorted by a typed column key.
pub fn sort_clients(
    stores: &StoreState,
    field: ClientField,
    direction: SortDirection,
) -> Vec<Client> {
    stores.clients().list_sorted(field, direction)
}

/// Creates a client; missing business name, email, or phone aborts the save.
pub fn create_client(stores: &StoreState, draft: ClientDraft) -> Result<Client, ApiError> {
    debug!(business_name = %draft.business_name, "create_client command");
    Ok(stores.clients().create(draft)?)
}

/// Updates a stored client.
pub fn update_client(stores: &StoreState, client: Client) -> Result<(), ApiError> {
    debug!(id = client.id, "update_client command");
    Ok(stores.clients().update(client)?)
}

/// Deletes a client by id.
pub fn delete_client(stores: &StoreState, id: u32) -> Result<(), ApiError> {
    debug!(id, "delete_client command");
    Ok(stores.clients().delete(id)?)
}

// =============================================================================
// Suppliers
// =============================================================================

/// Lists suppliers, filtered by the search box text.
pub fn list_suppliers(stores: &StoreState, query: &str) -> Vec<Supplier> {
    debug!(query, "list_suppliers command");
    stores.suppliers().search(query)
}

/// Lists suppliers sorted by a typed column key.
pub fn sort_suppliers(
    stores: &StoreState,
    field: SupplierField,
    direction: SortDirection,
) -> Vec<Supplier> {
    stores.suppliers().list_sorted(field, direction)
}

/// Creates a supplier under the same required-field rules as clients.
pub fn create_supplier(stores: &StoreState, draft: SupplierDraft) -> Result<Supplier, ApiError> {
    debug!(business_name = %draft.business_name, "create_supplier command");
    Ok(stores.suppliers().create(draft)?)
}

/// Updates a stored supplier.
pub fn update_supplier(stores: &StoreState, supplier: Supplier) -> Result<(), ApiError> {
    debug!(id = supplier.id, "update_supplier command");
    Ok(stores.suppliers().update(supplier)?)
}

/// Deletes a supplier by id.
pub fn delete_supplier(stores: &StoreState, id: u32) -> Result<(), ApiError> {
    debug!(id, "delete_supplier command");
    Ok(stores.suppliers().delete(id)?)
}

// =============================================================================
// Materials
// =============================================================================

/// Lists materials, filtered over name, spec, supplier, and category.
pub fn list_materials(stores: &StoreState, query: &str) -> Vec<Material> {
    debug!(query, "list_materials command");
    stores.materials().search(query)
}

/// Lists materials sorted by a typed column key.
pub fn sort_materials(
    stores: &StoreState,
    field: MaterialField,
    direction: SortDirection,
) -> Vec<Material> {
    stores.materials().list_sorted(field, direction)
}

/// Creates a material; the name is required and amounts must be
/// non-negative.
pub fn create_material(stores: &StoreState, draft: MaterialDraft) -> Result<Material, ApiError> {
    debug!(name = %draft.name, "create_material command");
    Ok(stores.materials().create(draft)?)
}

/// Updates a stored material.
pub fn update_material(stores: &StoreState, material: Material) -> Result<(), ApiError> {
    debug!(id = material.id, "update_material command");
    Ok(stores.materials().update(material)?)
}

/// Deletes a material by id.
pub fn delete_material(stores: &StoreState, id: u32) -> Result<(), ApiError> {
    debug!(id, "delete_material command");
    Ok(stores.materials().delete(id)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_client_crud_through_commands() {
        let stores = StoreState::new();

        let client = create_client(
            &stores,
            ClientDraft {
                business_name: "Mega Supplies".to_string(),
                email: "ops@megasupplies.ph".to_string(),
                phone: "0917 555 0101".to_string(),
                ..ClientDraft::default()
            },
        )
        .unwrap();

        assert_eq!(list_clients(&stores, "mega").len(), 1);
        delete_client(&stores, client.id).unwrap();
        assert!(list_clients(&stores, "").is_empty());
    }

    #[test]
    fn test_missing_required_field_surfaces_validation_code() {
        let stores = StoreState::new();
        let err = create_client(
            &stores,
            ClientDraft {
                business_name: "Mega Supplies".to_string(),
                phone: "0917 555 0101".to_string(),
                ..ClientDraft::default()
            },
        )
        .unwrap_err();

        assert!(matches!(err.code, ErrorCode::ValidationError));
        assert!(list_clients(&stores, "").is_empty());
    }

    #[test]
    fn test_material_sort_command() {
        let stores = StoreState::new();
        stores.seed();

        let rows = sort_materials(&stores, MaterialField::Price, SortDirection::Ascending);
        assert!(rows[0].price_centavos <= rows[1].price_centavos);
    }

    #[test]
    fn test_unknown_ids_surface_not_found() {
        let stores = StoreState::new();
        assert!(matches!(
            delete_supplier(&stores, 42).unwrap_err().code,
            ErrorCode::NotFound
        ));
        assert!(matches!(
            delete_material(&stores, 42).unwrap_err().code,
            ErrorCode::NotFound
        ));
    }
}
