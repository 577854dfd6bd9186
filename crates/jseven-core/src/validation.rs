//! # Validation Module
//!
//! Boundary parsing and business rule validation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command boundary (Rust)                                      │
//! │  ├── THIS MODULE: parse-or-reject for numeric text                     │
//! │  └── THIS MODULE: required-field checks before save                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core types                                                   │
//! │  └── Already-typed values only; the reducer never sees raw text        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numeric coercion policy: quantity and unit-cost text is parsed strictly.
//! Empty strings, non-numeric text, and negative values are REJECTED with a
//! `ValidationError`; they are never silently clamped to zero.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::Recipient;
use crate::{MAX_DESCRIPTION_LEN, MAX_ITEM_QUANTITY};

// =============================================================================
// Numeric Boundary Parsers
// =============================================================================

/// Parses a quantity text input.
///
/// ## Rules
/// - Digits only, optional comma grouping ("1,500" is accepted)
/// - Must be between 0 and `MAX_ITEM_QUANTITY`
/// - Zero is allowed (a zero-quantity row prices at ₱0.00)
///
/// ## Example
/// ```rust
/// use jseven_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("5").unwrap(), 5);
/// assert_eq!(parse_quantity("1,500").unwrap(), 1_500);
/// assert!(parse_quantity("").is_err());
/// assert!(parse_quantity("abc").is_err());
/// assert!(parse_quantity("-3").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let raw = input.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    let quantity: i64 = digits.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "quantity".to_string(),
        value: raw.to_string(),
    })?;

    if !(0..=MAX_ITEM_QUANTITY).contains(&quantity) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(quantity)
}

/// Parses a unit-cost text input into Money without going through floats.
///
/// ## Rules
/// - Optional `₱` prefix and comma grouping ("₱1,500.50" is accepted)
/// - At most two decimal places
/// - Must be non-negative
///
/// ## Example
/// ```rust
/// use jseven_core::validation::parse_unit_cost;
/// use jseven_core::money::Money;
///
/// assert_eq!(parse_unit_cost("1500").unwrap(), Money::from_pesos(1_500));
/// assert_eq!(parse_unit_cost("1,500.50").unwrap(), Money::from_centavos(150_050));
/// assert!(parse_unit_cost("").is_err());
/// assert!(parse_unit_cost("1.234").is_err());
/// assert!(parse_unit_cost("-5").is_err());
/// ```
pub fn parse_unit_cost(input: &str) -> ValidationResult<Money> {
    let raw = input.trim();
    let raw = raw.strip_prefix('₱').unwrap_or(raw).trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "unitCost".to_string(),
        });
    }

    let invalid = || ValidationError::InvalidNumber {
        field: "unitCost".to_string(),
        value: input.trim().to_string(),
    };

    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let (whole, frac) = match cleaned.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (cleaned.as_str(), ""),
    };

    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let pesos: i64 = whole.parse().map_err(|_| invalid())?;
    // Right-pad the fraction: "5" means 50 centavos
    let centavos: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => frac.parse().map_err(|_| invalid())?,
    };

    Ok(Money::from_pesos_centavos(pesos, centavos))
}

// =============================================================================
// Text Validators
// =============================================================================

/// Validates a line-item description length. Empty descriptions are allowed;
/// draft documents carry blank rows while they are being filled in.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates the recipient block before a save.
///
/// ## Rules
/// - Company name and project are required
/// - Everything else on the block stays free-form
pub fn validate_recipient_for_save(recipient: &Recipient) -> ValidationResult<()> {
    if recipient.to_company.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "toCompany".to_string(),
        });
    }

    if recipient.for_project.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "forProject".to_string(),
        });
    }

    Ok(())
}

/// Validates the required contact fields of a client or supplier record.
///
/// ## Rules
/// - Business name, email, and phone are required
/// - Email needs a local part and a domain around a single `@`
///
/// Save is aborted on the first violation; nothing is partially stored.
pub fn validate_contact(business_name: &str, email: &str, phone: &str) -> ValidationResult<()> {
    if business_name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "businessName".to_string(),
        });
    }

    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
        _ => {
            return Err(ValidationError::InvalidFormat {
                field: "email".to_string(),
                reason: "expected name@domain".to_string(),
            })
        }
    }

    if phone.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5").unwrap(), 5);
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("1,500").unwrap(), 1_500);

        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("   ").is_err());
        assert!(parse_quantity("abc").is_err());
        assert!(parse_quantity("1.5").is_err());
        assert!(parse_quantity("-3").is_err());
        assert!(parse_quantity("10000").is_err());
    }

    #[test]
    fn test_parse_unit_cost() {
        assert_eq!(parse_unit_cost("1500").unwrap(), Money::from_pesos(1_500));
        assert_eq!(parse_unit_cost("1,500").unwrap(), Money::from_pesos(1_500));
        assert_eq!(
            parse_unit_cost("1,500.50").unwrap(),
            Money::from_centavos(150_050)
        );
        assert_eq!(parse_unit_cost("0.5").unwrap(), Money::from_centavos(50));
        assert_eq!(parse_unit_cost("₱250").unwrap(), Money::from_pesos(250));
        assert_eq!(parse_unit_cost("0").unwrap(), Money::zero());

        assert!(parse_unit_cost("").is_err());
        assert!(parse_unit_cost("abc").is_err());
        assert!(parse_unit_cost("1.234").is_err());
        assert!(parse_unit_cost("-5").is_err());
        assert!(parse_unit_cost(".50").is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description("Ming Philflex THHN Wire").is_ok());
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_recipient_for_save() {
        let mut recipient = Recipient {
            to_company: "Mega Supplies".to_string(),
            for_project: "Electrical Works @ Laguna".to_string(),
            ..Recipient::default()
        };
        assert!(validate_recipient_for_save(&recipient).is_ok());

        recipient.to_company.clear();
        assert!(validate_recipient_for_save(&recipient).is_err());

        recipient.to_company = "Mega Supplies".to_string();
        recipient.for_project = "   ".to_string();
        assert!(validate_recipient_for_save(&recipient).is_err());
    }

    #[test]
    fn test_validate_contact() {
        assert!(validate_contact("BuildFast", "ops@buildfast.ph", "0917 555 0000").is_ok());

        assert!(validate_contact("", "ops@buildfast.ph", "0917").is_err());
        assert!(validate_contact("BuildFast", "", "0917").is_err());
        assert!(validate_contact("BuildFast", "not-an-email", "0917").is_err());
        assert!(validate_contact("BuildFast", "a@b", "0917").is_err());
        assert!(validate_contact("BuildFast", "ops@buildfast.ph", "").is_err());
    }
}
