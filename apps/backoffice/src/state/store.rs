//! # Store State
//!
//! The shared repository handles every command reaches for, plus the seed
//! data that stands in for a backend during development.

use chrono::NaiveDate;
use tracing::info;

use jseven_core::{
    Address, ClientDraft, ItemEdit, MaterialDraft, MaterialStatus, Money,
    QuotationDocument, QuotationStatus, SupplierDraft,
};
use jseven_store::{
    ClientRepository, MaterialRepository, QuotationRepository, SupplierRepository,
};

/// The four repositories behind the dashboard lists.
///
/// Cloning is cheap (each repository is an `Arc` handle), so commands can
/// hold their own copies.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    quotations: QuotationRepository,
    clients: ClientRepository,
    suppliers: SupplierRepository,
    materials: MaterialRepository,
}

impl StoreState {
    /// Creates empty stores.
    pub fn new() -> Self {
        StoreState {
            quotations: QuotationRepository::new(),
            clients: ClientRepository::new(),
            suppliers: SupplierRepository::new(),
            materials: MaterialRepository::new(),
        }
    }

    pub fn quotations(&self) -> &QuotationRepository {
        &self.quotations
    }

    pub fn clients(&self) -> &ClientRepository {
        &self.clients
    }

    pub fn suppliers(&self) -> &SupplierRepository {
        &self.suppliers
    }

    pub fn materials(&self) -> &MaterialRepository {
        &self.materials
    }

    /// Seeds the development dataset: the three familiar quotation rows and
    /// a small catalog. Each seeded quotation is a FULL document (one
    /// material line carrying the row amount), so the edit round-trip works
    /// on seed data too.
    pub fn seed(&self) {
        let rows = [
            (
                "QTN-001",
                "Mega Supplies",
                "Electrical Works @ Laguna",
                NaiveDate::from_ymd_opt(2025, 8, 5),
                Money::from_pesos(2_000),
                QuotationStatus::Accepted,
            ),
            (
                "QTN-002",
                "TechnoMart",
                "Warehouse Wiring",
                NaiveDate::from_ymd_opt(2025, 8, 12),
                Money::from_pesos(1_500),
                QuotationStatus::Draft,
            ),
            (
                "QTN-003",
                "BuildFast",
                "Residential Project",
                NaiveDate::from_ymd_opt(2025, 8, 18),
                Money::from_pesos(950),
                QuotationStatus::Rejected,
            ),
        ];

        for (quote_no, client, project, date, amount, status) in rows {
            let mut doc = QuotationDocument::new();
            doc.quote_no = Some(quote_no.to_string());
            doc.recipient.to_company = client.to_string();
            doc.recipient.for_project = project.to_string();
            if let Some(date) = date {
                doc.date = date;
            }
            doc.status = status;

            // Collapse the boilerplate into one material line holding the
            // row amount, so the list shows the familiar figures
            doc.general_requirements = Default::default();
            doc.materials = Default::default();
            if let Ok(id) = doc.materials.add_item() {
                let _ = doc
                    .materials
                    .apply_edit(id, ItemEdit::Description(format!("{} package", project)));
                let _ = doc.materials.apply_edit(id, ItemEdit::Unit("lot".to_string()));
                let _ = doc.materials.apply_edit(id, ItemEdit::UnitCost(amount));
            }

            // Seed rows are well-formed by construction
            if self.quotations.save(doc).is_err() {
                tracing::warn!(quote_no, "Failed to seed quotation");
            }
        }

        let _ = self.clients.create(ClientDraft {
            business_name: "Mega Supplies".to_string(),
            email: "ops@megasupplies.ph".to_string(),
            phone: "0917 555 0101".to_string(),
            vat_number: Some("123-456-789-000".to_string()),
            address: Address {
                street: "18 Rizal Ave".to_string(),
                city: "Calamba".to_string(),
                state: "Laguna".to_string(),
                postal_code: "4027".to_string(),
            },
            shipping_addresses: Vec::new(),
        });
        let _ = self.clients.create(ClientDraft {
            business_name: "TechnoMart".to_string(),
            email: "sales@technomart.ph".to_string(),
            phone: "0917 555 0102".to_string(),
            vat_number: None,
            address: Address::default(),
            shipping_addresses: Vec::new(),
        });

        let _ = self.suppliers.create(SupplierDraft {
            business_name: "Philflex".to_string(),
            email: "orders@philflex.ph".to_string(),
            phone: "0917 555 0201".to_string(),
            vat_number: Some("987-654-321-000".to_string()),
            address: Address::default(),
            bank_details: Default::default(),
        });

        let _ = self.materials.create(MaterialDraft {
            name: "Ming Philflex THHN Wire 2.0mm² #14 (150mtrs/box)".to_string(),
            spec: "2.0mm² #14".to_string(),
            price_centavos: Money::from_pesos(1_500).centavos(),
            supplier: "Philflex".to_string(),
            category: "Electrical".to_string(),
            creator: "admin".to_string(),
            status: MaterialStatus::Approved,
            available_stock: 40,
        });
        let _ = self.materials.create(MaterialDraft {
            name: "PVC Junction Box 4x4".to_string(),
            spec: "4x4 in".to_string(),
            price_centavos: Money::from_pesos(85).centavos(),
            supplier: "Firefly".to_string(),
            category: "Electrical".to_string(),
            creator: "admin".to_string(),
            status: MaterialStatus::Pending,
            available_stock: 120,
        });

        info!(
            quotations = self.quotations.len(),
            clients = self.clients.list().len(),
            suppliers = self.suppliers.list().len(),
            materials = self.materials.list().len(),
            "Seeded development data"
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_all_stores() {
        let stores = StoreState::new();
        stores.seed();

        assert_eq!(stores.quotations().len(), 3);
        assert_eq!(stores.clients().list().len(), 2);
        assert_eq!(stores.suppliers().list().len(), 1);
        assert_eq!(stores.materials().list().len(), 2);
    }

    #[test]
    fn test_seeded_rows_keep_their_amounts() {
        let stores = StoreState::new();
        stores.seed();

        let rows = stores.quotations().list();
        let qtn1 = rows.iter().find(|r| r.quote_no == "QTN-001").unwrap();
        assert_eq!(qtn1.amount(), Money::from_pesos(2_000));
        assert_eq!(qtn1.status, QuotationStatus::Accepted);
        assert_eq!(qtn1.date, NaiveDate::from_ymd_opt(2025, 8, 5).unwrap());
    }

    #[test]
    fn test_seeded_documents_round_trip() {
        let stores = StoreState::new();
        stores.seed();

        let doc = stores.quotations().get("QTN-002").unwrap();
        assert_eq!(doc.recipient.to_company, "TechnoMart");
        assert_eq!(doc.materials.len(), 1);
        assert_eq!(doc.totals().total(), Money::from_pesos(1_500));
    }
}
