//! # Catalog Types
//!
//! Domain types for the marketplace lists that surround the quotation tool:
//! clients, suppliers, and materials.
//!
//! These records are simple: free-form contact data plus a handful of typed
//! fields. The interesting rule is at the boundary: creating a client or
//! supplier requires business name, email, and phone (see
//! `validation::validate_contact`); everything else is optional.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Address
// =============================================================================

/// A postal address block. All parts free-form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

// =============================================================================
// Client
// =============================================================================

/// A client record as managed on the clients screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Small integer id assigned by the repository.
    pub id: u32,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub vat_number: Option<String>,
    pub address: Address,
    pub shipping_addresses: Vec<Address>,
    #[ts(as = "String")]
    pub date_added: NaiveDate,
}

/// Client fields supplied by the form; the repository assigns id and date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub vat_number: Option<String>,
    pub address: Address,
    pub shipping_addresses: Vec<Address>,
}

// =============================================================================
// Supplier
// =============================================================================

/// Bank settlement details carried on a supplier record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
}

/// A supplier record: the same contact block as a client, plus bank details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: u32,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub vat_number: Option<String>,
    pub address: Address,
    pub bank_details: BankDetails,
    #[ts(as = "String")]
    pub date_added: NaiveDate,
}

/// Supplier fields supplied by the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub vat_number: Option<String>,
    pub address: Address,
    pub bank_details: BankDetails,
}

// =============================================================================
// Material
// =============================================================================

/// Approval status of a catalog material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MaterialStatus {
    Approved,
    Pending,
    Rejected,
}

impl Default for MaterialStatus {
    fn default() -> Self {
        MaterialStatus::Pending
    }
}

impl fmt::Display for MaterialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaterialStatus::Approved => "Approved",
            MaterialStatus::Pending => "Pending",
            MaterialStatus::Rejected => "Rejected",
        };
        f.write_str(label)
    }
}

/// A catalog material offered to quotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: u32,
    pub name: String,
    pub spec: String,
    /// Unit price in centavos.
    pub price_centavos: i64,
    pub supplier: String,
    pub category: String,
    #[ts(as = "String")]
    pub stock_date: NaiveDate,
    pub creator: String,
    pub status: MaterialStatus,
    pub available_stock: i64,
}

impl Material {
    /// Returns the price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_centavos(self.price_centavos)
    }
}

/// Material fields supplied by the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDraft {
    pub name: String,
    pub spec: String,
    pub price_centavos: i64,
    pub supplier: String,
    pub category: String,
    pub creator: String,
    pub status: MaterialStatus,
    pub available_stock: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
