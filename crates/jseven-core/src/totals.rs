//! # Totals Reducer
//!
//! The pure reduction from the two item sections to the quotation's totals
//! summary.
//!
//! ## Reduction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Totals Reduction                                 │
//! │                                                                         │
//! │  General Requirements            Materials                              │
//! │  Σ qty × unit_cost               Σ qty × unit_cost                      │
//! │        │                               │                                │
//! │        ▼                               ▼                                │
//! │  general_requirements_total      materials_total                        │
//! │        │                               │                                │
//! │        └───────────────┬───────────────┘                                │
//! │                        ▼                                                │
//! │                      total                                              │
//! │                        │                                                │
//! │        ┌───────────────┼───────────────┐                                │
//! │        ▼               ▼               ▼                                │
//! │      labor         vat (12%)     invoice_total                          │
//! │  (= gen. req.)                  (= total + vat)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Business Rules (preserved exactly, not general truths)
//! - `labor` is the general-requirements subtotal: mobilization, tools, and
//!   project management are the labor-equivalent bucket in this domain.
//! - VAT is the fixed 12% rate; see `STANDARD_VAT_BPS`.
//!
//! The reducer is a pure function: no hidden state, no caching, calling it
//! twice on unchanged input yields identical output.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, VatRate};
use crate::types::ItemSection;

// =============================================================================
// Totals
// =============================================================================

/// The derived totals summary of a quotation document.
///
/// Every field is stored in centavos; accessor methods return `Money`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub general_requirements_centavos: i64,
    pub materials_centavos: i64,
    pub total_centavos: i64,
    pub labor_centavos: i64,
    pub vat_centavos: i64,
    pub invoice_total_centavos: i64,
}

impl Totals {
    /// Totals of an empty document: all zero.
    pub const fn zero() -> Self {
        Totals {
            general_requirements_centavos: 0,
            materials_centavos: 0,
            total_centavos: 0,
            labor_centavos: 0,
            vat_centavos: 0,
            invoice_total_centavos: 0,
        }
    }

    /// Derives totals from a known combined amount, as the list view does
    /// when previewing a summary row without its full document: the split
    /// between the two buckets is unknown, so labor reads zero.
    pub fn from_amount(total: Money) -> Self {
        let vat = total.calculate_vat(VatRate::standard());
        Totals {
            general_requirements_centavos: 0,
            materials_centavos: 0,
            total_centavos: total.centavos(),
            labor_centavos: 0,
            vat_centavos: vat.centavos(),
            invoice_total_centavos: (total + vat).centavos(),
        }
    }

    pub fn general_requirements(&self) -> Money {
        Money::from_centavos(self.general_requirements_centavos)
    }

    pub fn materials(&self) -> Money {
        Money::from_centavos(self.materials_centavos)
    }

    pub fn total(&self) -> Money {
        Money::from_centavos(self.total_centavos)
    }

    pub fn labor(&self) -> Money {
        Money::from_centavos(self.labor_centavos)
    }

    pub fn vat(&self) -> Money {
        Money::from_centavos(self.vat_centavos)
    }

    pub fn invoice_total(&self) -> Money {
        Money::from_centavos(self.invoice_total_centavos)
    }
}

impl Default for Totals {
    fn default() -> Self {
        Totals::zero()
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Reduces the two item sections to a totals summary.
///
/// Pure function: reads the sections, computes, returns. Section subtotals
/// are recomputed here from the line items; nothing cached is trusted.
pub fn compute_totals(general_requirements: &ItemSection, materials: &ItemSection) -> Totals {
    let general = general_requirements.subtotal();
    let material = materials.subtotal();
    let total = general + material;

    // Labor is the general-requirements bucket by domain convention
    let labor = general;
    let vat = total.calculate_vat(VatRate::standard());
    let invoice_total = total + vat;

    Totals {
        general_requirements_centavos: general.centavos(),
        materials_centavos: material.centavos(),
        total_centavos: total.centavos(),
        labor_centavos: labor.centavos(),
        vat_centavos: vat.centavos(),
        invoice_total_centavos: invoice_total.centavos(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemEdit, ItemSection};
    use proptest::prelude::*;

    fn boilerplate_sections() -> (ItemSection, ItemSection) {
        let general = ItemSection::from_rows(&[
            ("Mobilization/Demobilization", 1, "lot", Money::from_pesos(5_000)),
            ("Platform Support, Tools and Equipment", 1, "lot", Money::from_pesos(5_000)),
            ("Project Management", 1, "lot", Money::from_pesos(5_000)),
        ]);
        let materials = ItemSection::from_rows(&[(
            "Ming Philflex THHN Wire 2.0mm² #14 (150mtrs/box)",
            5,
            "pcs",
            Money::from_pesos(1_500),
        )]);
        (general, materials)
    }

    /// The canonical end-to-end scenario: three ₱5,000 requirement rows and
    /// one 5 × ₱1,500 material row.
    #[test]
    fn test_boilerplate_scenario() {
        let (general, materials) = boilerplate_sections();
        let totals = compute_totals(&general, &materials);

        assert_eq!(totals.general_requirements(), Money::from_pesos(15_000));
        assert_eq!(totals.materials(), Money::from_pesos(7_500));
        assert_eq!(totals.total(), Money::from_pesos(22_500));
        assert_eq!(totals.labor(), Money::from_pesos(15_000));
        assert_eq!(totals.vat(), Money::from_pesos(2_700));
        assert_eq!(totals.invoice_total(), Money::from_pesos(25_200));
    }

    #[test]
    fn test_empty_document_totals_are_zero() {
        let totals = compute_totals(&ItemSection::new(), &ItemSection::new());
        assert_eq!(totals, Totals::zero());
    }

    #[test]
    fn test_total_is_sum_of_buckets() {
        let (general, materials) = boilerplate_sections();
        let totals = compute_totals(&general, &materials);
        assert_eq!(
            totals.total(),
            totals.general_requirements() + totals.materials()
        );
        assert_eq!(totals.invoice_total(), totals.total() + totals.vat());
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let (general, materials) = boilerplate_sections();
        let first = compute_totals(&general, &materials);
        let second = compute_totals(&general, &materials);
        assert_eq!(first, second);
    }

    #[test]
    fn test_edit_in_one_section_leaves_other_bucket_unchanged() {
        let (general, mut materials) = boilerplate_sections();
        let before = compute_totals(&general, &materials);

        let id = materials.items[0].id;
        materials.apply_edit(id, ItemEdit::Quantity(10)).unwrap();
        let after = compute_totals(&general, &materials);

        assert_eq!(
            after.general_requirements(),
            before.general_requirements()
        );
        assert_eq!(after.materials(), Money::from_pesos(15_000));
    }

    #[test]
    fn test_from_amount_matches_summary_preview() {
        // Summary-row preview: only the combined amount is known
        let totals = Totals::from_amount(Money::from_pesos(2_000));
        assert_eq!(totals.total(), Money::from_pesos(2_000));
        assert_eq!(totals.labor(), Money::zero());
        assert_eq!(totals.vat(), Money::from_pesos(240));
        assert_eq!(totals.invoice_total(), Money::from_pesos(2_240));
    }

    proptest! {
        /// total == general + materials and invoice == total + vat, for any
        /// section contents.
        #[test]
        fn prop_totals_composition(
            general_rows in prop::collection::vec((0i64..500, 0i64..500_000), 0..8),
            material_rows in prop::collection::vec((0i64..500, 0i64..500_000), 0..8),
        ) {
            let build = |rows: &[(i64, i64)]| {
                let rows: Vec<(&str, i64, &str, Money)> = rows
                    .iter()
                    .map(|(qty, cost)| ("item", *qty, "pcs", Money::from_centavos(*cost)))
                    .collect();
                ItemSection::from_rows(&rows)
            };
            let general = build(&general_rows);
            let materials = build(&material_rows);

            let totals = compute_totals(&general, &materials);
            prop_assert_eq!(
                totals.total_centavos,
                totals.general_requirements_centavos + totals.materials_centavos
            );
            prop_assert_eq!(totals.labor_centavos, totals.general_requirements_centavos);
            prop_assert_eq!(
                totals.invoice_total_centavos,
                totals.total_centavos + totals.vat_centavos
            );
        }

        /// Reducing twice yields identical output (no hidden mutation).
        #[test]
        fn prop_totals_idempotent(
            rows in prop::collection::vec((0i64..100, 0i64..100_000), 0..6),
        ) {
            let rows: Vec<(&str, i64, &str, Money)> = rows
                .iter()
                .map(|(qty, cost)| ("item", *qty, "pcs", Money::from_centavos(*cost)))
                .collect();
            let section = ItemSection::from_rows(&rows);
            let empty = ItemSection::new();

            prop_assert_eq!(
                compute_totals(&section, &empty),
                compute_totals(&section, &empty)
            );
        }
    }
}
