//! # Domain Types
//!
//! Core domain types for the quotation tool.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │   ItemSection   │   │    Recipient    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  items (Vec)    │   │  to_company     │       │
//! │  │  description    │   │  next_id        │   │  tin, address   │       │
//! │  │  quantity       │   │  subtotal()     │   │  for_project    │       │
//! │  │  unit, cost     │   │  (recomputed)   │   │  for_location   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   HeaderColor   │   │ QuotationStatus │   │   Signatories   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  "#0f172a"      │   │  Draft          │   │  ops manager    │       │
//! │  │  rgb() → bands  │   │  Pending        │   │  conforme       │       │
//! │  └─────────────────┘   │  Accepted       │   └─────────────────┘       │
//! │                        │  Rejected       │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Line items carry a `u32` id assigned by their owning section from a
//! monotonic counter. Ids are unique within one section's lifetime and are
//! never reused after a removal.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError, ValidationResult};
use crate::money::Money;
use crate::{DEFAULT_HEADER_COLOR, MAX_SECTION_ITEMS};

// =============================================================================
// Line Item
// =============================================================================

/// A single priced entry on a quotation.
///
/// The subtotal is ALWAYS derived (`unit_cost × quantity`) and never stored,
/// so an edit can never leave a stale total behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Identifier unique within the owning section's lifetime.
    pub id: u32,

    /// Free-form description of the work or material.
    pub description: String,

    /// Quantity of units. Non-negative after boundary validation, but the
    /// arithmetic beneath is sign-correct either way.
    pub quantity: i64,

    /// Free-form unit label ("pcs", "lot", "mtrs").
    pub unit: String,

    /// Cost per unit in centavos.
    pub unit_cost_centavos: i64,
}

impl LineItem {
    /// Returns the unit cost as Money.
    #[inline]
    pub fn unit_cost(&self) -> Money {
        Money::from_centavos(self.unit_cost_centavos)
    }

    /// Derived line subtotal: `unit_cost × quantity`.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.unit_cost().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Item Edit
// =============================================================================

/// A typed single-field edit applied to one line item.
///
/// Replaces string-keyed field access: the editable field set
/// {description, quantity, unit, unitCost} is closed, so it is an enum.
/// Numeric payloads arrive here already parsed and validated; see
/// `validation::parse_quantity` and `validation::parse_unit_cost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ItemEdit {
    Description(String),
    Quantity(i64),
    Unit(String),
    UnitCost(Money),
}

// =============================================================================
// Item Section
// =============================================================================

/// An ordered collection of line items (General Requirements or Materials).
///
/// ## Invariants
/// - Order is display/print order; the only structural operations are
///   append and remove.
/// - The subtotal is recomputed fresh on every access; no cached total
///   exists that could desynchronize from edits.
/// - `next_id` only ever grows, so removed ids are never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemSection {
    /// Line items in display order.
    pub items: Vec<LineItem>,

    /// Next id to assign. Serialized with the section so a stored document
    /// keeps its counter across an edit round-trip.
    next_id: u32,
}

impl ItemSection {
    /// Creates an empty section.
    pub fn new() -> Self {
        ItemSection {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a section pre-populated from `(description, quantity, unit,
    /// unit_cost)` rows, assigning ids in order. Used for document defaults
    /// and tests.
    pub fn from_rows(rows: &[(&str, i64, &str, Money)]) -> Self {
        let mut section = ItemSection::new();
        for (description, quantity, unit, unit_cost) in rows {
            let id = section.allocate_id();
            section.items.push(LineItem {
                id,
                description: (*description).to_string(),
                quantity: *quantity,
                unit: (*unit).to_string(),
                unit_cost_centavos: unit_cost.centavos(),
            });
        }
        section
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends a blank line item (quantity 1, cost ₱0) and returns its id.
    ///
    /// ## Errors
    /// `CoreError::SectionFull` once the section holds `MAX_SECTION_ITEMS`.
    pub fn add_item(&mut self) -> CoreResult<u32> {
        if self.items.len() >= MAX_SECTION_ITEMS {
            return Err(CoreError::SectionFull {
                max: MAX_SECTION_ITEMS,
            });
        }

        let id = self.allocate_id();
        self.items.push(LineItem {
            id,
            description: String::new(),
            quantity: 1,
            unit: String::new(),
            unit_cost_centavos: 0,
        });
        Ok(id)
    }

    /// Applies a single-field edit to exactly one item.
    ///
    /// All other items and fields are untouched (mutation isolation).
    ///
    /// ## Errors
    /// `CoreError::ItemNotFound` if no item has the addressed id.
    pub fn apply_edit(&mut self, id: u32, edit: ItemEdit) -> CoreResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CoreError::ItemNotFound { id })?;

        match edit {
            ItemEdit::Description(description) => item.description = description,
            ItemEdit::Quantity(quantity) => item.quantity = quantity,
            ItemEdit::Unit(unit) => item.unit = unit,
            ItemEdit::UnitCost(unit_cost) => item.unit_cost_centavos = unit_cost.centavos(),
        }
        Ok(())
    }

    /// Removes an item by id. Removing an unknown id is a no-op, not an
    /// error.
    pub fn remove_item(&mut self, id: u32) {
        self.items.retain(|i| i.id != id);
    }

    /// Looks up an item by id.
    pub fn get(&self, id: u32) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Returns the number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the section has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Section subtotal: `Σ unit_cost × quantity`, recomputed on every call.
    pub fn subtotal(&self) -> Money {
        Money::from_centavos(self.items.iter().map(|i| i.subtotal().centavos()).sum())
    }
}

impl Default for ItemSection {
    fn default() -> Self {
        ItemSection::new()
    }
}

/// Which of the two item sections an edit addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    GeneralRequirements,
    Materials,
}

// =============================================================================
// Recipient
// =============================================================================

/// The quotation's addressee block. All fields are free-form text with no
/// cross-field validation; only `to_company` and `for_project` are required
/// at save time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub to_company: String,
    pub tin: String,
    pub business_style: String,
    pub address: String,
    pub for_project: String,
    pub for_location: String,
}

// =============================================================================
// Signatories
// =============================================================================

/// The two named signature roles on the printed quotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Signatories {
    /// Signs for JSeven.
    pub operations_manager: String,

    /// Counter-signatory acknowledging client acceptance.
    pub conforme: String,
}

/// Which of the two signature roles a command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum SignatoryRole {
    OperationsManager,
    Conforme,
}

// =============================================================================
// Header Color
// =============================================================================

/// Presentation color of the exported document's header band.
///
/// Not business data, but it is carried with the document because it affects
/// the exported artifact. Always a validated lowercase `#rrggbb` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HeaderColor(String);

impl HeaderColor {
    /// Parses and validates a `#rrggbb` hex color.
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let input = input.trim();
        let hex = input.strip_prefix('#').ok_or_else(|| invalid_color(input))?;

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_color(input));
        }

        Ok(HeaderColor(format!("#{}", hex.to_ascii_lowercase())))
    }

    /// The raw `#rrggbb` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decomposes into (r, g, b) components for table-fill styling.
    pub fn rgb(&self) -> (u8, u8, u8) {
        // The constructor guarantees exactly six hex digits
        let hex = &self.0[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

impl Default for HeaderColor {
    fn default() -> Self {
        HeaderColor(DEFAULT_HEADER_COLOR.to_string())
    }
}

impl fmt::Display for HeaderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn invalid_color(input: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "headerColor".to_string(),
        reason: format!("'{}' is not a #rrggbb hex color", input),
    }
}

// =============================================================================
// Quotation Status
// =============================================================================

/// Lifecycle status of a quotation as shown in the list badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum QuotationStatus {
    /// Still being worked on; the default for new documents.
    Draft,
    /// Sent to the client, awaiting a response.
    Pending,
    /// Client signed the conforme.
    Accepted,
    /// Client declined.
    Rejected,
}

impl Default for QuotationStatus {
    fn default() -> Self {
        QuotationStatus::Draft
    }
}

impl fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuotationStatus::Draft => "Draft",
            QuotationStatus::Pending => "Pending",
            QuotationStatus::Accepted => "Accepted",
            QuotationStatus::Rejected => "Rejected",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn section_with_defaults() -> ItemSection {
        ItemSection::from_rows(&[
            ("Mobilization/Demobilization", 1, "lot", Money::from_pesos(5_000)),
            ("Project Management", 1, "lot", Money::from_pesos(5_000)),
        ])
    }

    #[test]
    fn test_line_item_subtotal() {
        let section = ItemSection::from_rows(&[("Wire", 5, "pcs", Money::from_pesos(1_500))]);
        assert_eq!(section.items[0].subtotal(), Money::from_pesos(7_500));
    }

    #[test]
    fn test_zero_quantity_subtotal_is_zero() {
        let section = ItemSection::from_rows(&[("Wire", 0, "pcs", Money::from_pesos(1_500))]);
        assert_eq!(section.items[0].subtotal(), Money::zero());
        assert_eq!(section.subtotal(), Money::zero());
    }

    #[test]
    fn test_add_item_defaults() {
        let mut section = ItemSection::new();
        let id = section.add_item().unwrap();

        let item = section.get(id).unwrap();
        assert_eq!(item.description, "");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit, "");
        assert_eq!(item.unit_cost_centavos, 0);
    }

    #[test]
    fn test_add_then_remove_restores_section() {
        let mut section = section_with_defaults();
        let before = section.clone();
        let before_total = section.subtotal();

        let id = section.add_item().unwrap();
        section
            .apply_edit(id, ItemEdit::UnitCost(Money::from_pesos(750)))
            .unwrap();
        assert_ne!(section.subtotal(), before_total);

        section.remove_item(id);
        assert_eq!(section.items, before.items);
        assert_eq!(section.subtotal(), before_total);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut section = ItemSection::new();
        let first = section.add_item().unwrap();
        section.remove_item(first);
        let second = section.add_item().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_apply_edit_touches_exactly_one_item() {
        let mut section = section_with_defaults();
        let untouched = section.items[1].clone();

        let target = section.items[0].id;
        section
            .apply_edit(target, ItemEdit::Quantity(3))
            .unwrap();

        assert_eq!(section.items[0].quantity, 3);
        assert_eq!(section.items[1], untouched);
    }

    #[test]
    fn test_apply_edit_unknown_id_is_error() {
        let mut section = section_with_defaults();
        let err = section.apply_edit(999, ItemEdit::Quantity(2)).unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound { id: 999 }));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut section = section_with_defaults();
        let before = section.clone();
        section.remove_item(999);
        assert_eq!(section, before);
    }

    #[test]
    fn test_subtotal_additivity() {
        let mut section = section_with_defaults();
        let before = section.subtotal();

        let id = section.add_item().unwrap();
        section.apply_edit(id, ItemEdit::Quantity(4)).unwrap();
        section
            .apply_edit(id, ItemEdit::UnitCost(Money::from_pesos(250)))
            .unwrap();

        let added = section.get(id).unwrap().subtotal();
        assert_eq!(section.subtotal(), before + added);

        section.remove_item(id);
        assert_eq!(section.subtotal(), before);
    }

    #[test]
    fn test_section_full() {
        let mut section = ItemSection::new();
        for _ in 0..MAX_SECTION_ITEMS {
            section.add_item().unwrap();
        }
        assert!(matches!(
            section.add_item(),
            Err(CoreError::SectionFull { .. })
        ));
    }

    #[test]
    fn test_header_color_parse() {
        let color = HeaderColor::parse("#0F172A").unwrap();
        assert_eq!(color.as_str(), "#0f172a");
        assert_eq!(color.rgb(), (0x0f, 0x17, 0x2a));

        assert!(HeaderColor::parse("0f172a").is_err());
        assert!(HeaderColor::parse("#0f172").is_err());
        assert!(HeaderColor::parse("#zzzzzz").is_err());
    }

    #[test]
    fn test_header_color_default() {
        assert_eq!(HeaderColor::default().as_str(), "#0f172a");
    }

    #[test]
    fn test_status_serializes_as_badge_label() {
        let json = serde_json::to_string(&QuotationStatus::Accepted).unwrap();
        assert_eq!(json, "\"Accepted\"");
        assert_eq!(QuotationStatus::default(), QuotationStatus::Draft);
    }
}
