//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, and the
//! `VatRate` type for the value-added tax rate.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a quotation, the VAT line is money the client reconciles:           │
//! │    ₱22,500.00 × 0.12 must be EXACTLY ₱2,700.00, not ₱2,699.9999        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    ₱1,500.00 is stored as 150000 centavos (i64)                        │
//! │    All arithmetic is integer arithmetic; rounding is explicit          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use jseven_core::money::{Money, VatRate};
//!
//! // Create from centavos or whole pesos (never from floats!)
//! let unit_cost = Money::from_pesos(1_500); // ₱1,500.00
//!
//! // Arithmetic operations
//! let line_total = unit_cost * 5i64;              // ₱7,500.00
//! let vat = line_total.calculate_vat(VatRate::standard());
//! assert_eq!(vat, Money::from_pesos(900));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::STANDARD_VAT_BPS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos, the smallest peso unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and credits
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// LineItem.unit_cost ──► LineItem.subtotal ──► ItemSection.subtotal
///                                                     │
///                                                     ▼
///                     Totals.total ──► Totals.vat ──► Totals.invoice_total
/// ```
/// Every monetary value in the system flows through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use jseven_core::money::Money;
    ///
    /// let price = Money::from_centavos(150_000); // ₱1,500.00
    /// assert_eq!(price.centavos(), 150_000);
    /// ```
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// Convenient because quotation amounts are typically whole-peso figures
    /// (₱5,000 mobilization, ₱1,500 wire boxes, and so on).
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Creates a Money value from peso and centavo parts.
    ///
    /// ## Example
    /// ```rust
    /// use jseven_core::money::Money;
    ///
    /// let price = Money::from_pesos_centavos(1_500, 50); // ₱1,500.50
    /// assert_eq!(price.centavos(), 150_050);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the peso part should be negative.
    /// `from_pesos_centavos(-5, 50)` = -₱5.50, not -₱4.50
    #[inline]
    pub const fn from_pesos_centavos(pesos: i64, centavos: i64) -> Self {
        // Handle sign: if the peso part is negative, centavos subtract
        if pesos < 0 {
            Money(pesos * 100 - centavos)
        } else {
            Money(pesos * 100 + centavos)
        }
    }

    /// Returns the value in centavos (smallest currency unit).
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates VAT on this amount.
    ///
    /// ## Implementation
    /// Integer math over i128: `(amount × bps + 5000) / 10000`
    /// The +5000 rounds half up on the centavo. For the fixed 12% rate on
    /// whole-peso amounts the division is exact and no rounding occurs.
    ///
    /// ## Example
    /// ```rust
    /// use jseven_core::money::{Money, VatRate};
    ///
    /// let total = Money::from_pesos(22_500);
    /// let vat = total.calculate_vat(VatRate::standard());
    /// assert_eq!(vat, Money::from_pesos(2_700)); // exactly 12%
    /// ```
    pub fn calculate_vat(&self, rate: VatRate) -> Money {
        // i128 prevents overflow on large amounts
        let vat_centavos = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_centavos(vat_centavos as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use jseven_core::money::Money;
    ///
    /// let unit_cost = Money::from_pesos(1_500);
    /// let line_total = unit_cost.multiply_quantity(5);
    /// assert_eq!(line_total, Money::from_pesos(7_500));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as `₱1,234.56`.
///
/// Matches the dashboard's display convention (peso sign, comma digit
/// grouping, two decimal places). Also used verbatim in export artifacts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}₱{}.{:02}",
            sign,
            group_digits(self.pesos().abs()),
            self.centavos_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Groups a non-negative integer with commas: 1234567 → "1,234,567".
fn group_digits(mut n: i64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % 1000) as u16);
        n /= 1000;
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(g) = groups.pop() {
        out.push_str(&format!(",{:03}", g));
    }
    out
}

// =============================================================================
// VAT Rate
// =============================================================================

/// VAT rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1200 bps = 12% (the fixed Philippine VAT rate used here)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VatRate(u32);

impl VatRate {
    /// Creates a VAT rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        VatRate(bps)
    }

    /// The standard 12% rate. This is a hard-coded domain rule, not a
    /// configuration default; see `STANDARD_VAT_BPS`.
    #[inline]
    pub const fn standard() -> Self {
        VatRate(STANDARD_VAT_BPS)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero VAT rate.
    #[inline]
    pub const fn zero() -> Self {
        VatRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for VatRate {
    fn default() -> Self {
        VatRate::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_centavos() {
        let money = Money::from_centavos(150_050);
        assert_eq!(money.centavos(), 150_050);
        assert_eq!(money.pesos(), 1_500);
        assert_eq!(money.centavos_part(), 50);
    }

    #[test]
    fn test_from_pesos_centavos() {
        let money = Money::from_pesos_centavos(10, 99);
        assert_eq!(money.centavos(), 1_099);

        let negative = Money::from_pesos_centavos(-5, 50);
        assert_eq!(negative.centavos(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_pesos(1_500)), "₱1,500.00");
        assert_eq!(format!("{}", Money::from_centavos(1_099)), "₱10.99");
        assert_eq!(format!("{}", Money::from_pesos(1_234_567)), "₱1,234,567.00");
        assert_eq!(format!("{}", Money::from_centavos(-550)), "-₱5.50");
        assert_eq!(format!("{}", Money::zero()), "₱0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_centavos(1_000);
        let b = Money::from_centavos(500);

        assert_eq!((a + b).centavos(), 1_500);
        assert_eq!((a - b).centavos(), 500);
        let result: Money = a * 3;
        assert_eq!(result.centavos(), 3_000);
    }

    #[test]
    fn test_vat_standard_rate_is_exact_on_whole_pesos() {
        // ₱22,500 × 12% = ₱2,700 with no rounding
        let total = Money::from_pesos(22_500);
        let vat = total.calculate_vat(VatRate::standard());
        assert_eq!(vat, Money::from_pesos(2_700));
    }

    #[test]
    fn test_vat_rounding_on_fractional_result() {
        // 1234 centavos × 12% = 148.08 centavos → 148
        let amount = Money::from_centavos(1_234);
        assert_eq!(amount.calculate_vat(VatRate::standard()).centavos(), 148);

        // 1_237 centavos × 12% = 148.44 → 148; half cases round up
        let amount = Money::from_centavos(1_237);
        assert_eq!(amount.calculate_vat(VatRate::standard()).centavos(), 148);
    }

    #[test]
    fn test_vat_zero_rate() {
        let amount = Money::from_pesos(10_000);
        assert!(amount.calculate_vat(VatRate::zero()).is_zero());
    }

    #[test]
    fn test_multiply_quantity_sign_consistency() {
        let unit_cost = Money::from_pesos(1_500);
        assert_eq!(unit_cost.multiply_quantity(0), Money::zero());
        assert_eq!(
            unit_cost.multiply_quantity(-2),
            Money::from_pesos(-3_000)
        );
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_centavos(100);
        assert!(positive.is_positive());

        let negative = Money::from_centavos(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().centavos(), 100);
    }

    #[test]
    fn test_vat_rate_accessors() {
        let rate = VatRate::standard();
        assert_eq!(rate.bps(), 1200);
        assert!((rate.percentage() - 12.0).abs() < 0.001);
        assert_eq!(VatRate::default(), VatRate::standard());
    }
}
