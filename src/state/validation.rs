//! Custom field validators for catalog entries.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Lowest accepted price, inclusive.
pub const MIN_PRICE: Decimal = Decimal::ONE;
/// Highest accepted price, inclusive.
pub const MAX_PRICE: Decimal = Decimal::ONE_HUNDRED;

/// Validates that a price lies within `[MIN_PRICE, MAX_PRICE]`.
///
/// # Examples
///
/// ```ignore
/// validate_price(&Decimal::new(999, 2))  // Ok
/// validate_price(&Decimal::ONE_HUNDRED)  // Ok - bounds are inclusive
/// validate_price(&Decimal::ZERO)         // Err
/// ```
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < MIN_PRICE || *price > MAX_PRICE {
        let mut err = ValidationError::new("price_range");
        err.message = Some(
            format!("price must be between {MIN_PRICE} and {MAX_PRICE} (got {price})").into(),
        );
        return Err(err);
    }

    Ok(())
}

/// Validates that a text field holds something other than whitespace.
///
/// Attach a field-specific `message` at the use site; this one is the fallback.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("value is required".into());
        return Err(err);
    }

    Ok(())
}
