//! Money calculation helpers using rust_decimal for precision
//!
//! Model types carry prices as `f64`; all arithmetic goes through `Decimal`
//! and is rounded to 2 decimal places (half away from zero) on the way out.

use rust_decimal::prelude::*;

/// Rounding precision for monetary values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total with precise decimal arithmetic: `price * quantity`
#[inline]
pub fn line_total(price: f64, quantity: i32) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}
