//! # Return Estimator
//!
//! Projects the estimated annual return for a stake amount at a pool's
//! yield rate.
//!
//! - Pure and deterministic: identical inputs, identical output
//! - Degrade-to-zero policy: text that does not parse as a non-negative
//!   amount estimates to `0.00` rather than failing — an incomplete entry
//!   must show a harmless zero, never block rendering
//! - Rounding is half-up to [`RETURN_SCALE`] decimal places

use crate::amount::parse_amount;
use crate::primitives::RETURN_SCALE;
use rust_decimal::{Decimal, RoundingStrategy};

/// The zero estimate, pinned to [`RETURN_SCALE`] fractional digits.
#[must_use]
pub fn zero_estimate() -> Decimal {
    Decimal::new(0, RETURN_SCALE)
}

/// Compute the estimated annual return.
///
/// `raw_amount` is the member's text exactly as typed;
/// `annual_percentage_yield` is the selected pool's decimal rate
/// (0.085 = 8.5%). Returns `parsed * apy` rounded half-up to two decimal
/// places, or `0.00` when the text is malformed, negative, or the product
/// is unrepresentable.
#[must_use]
pub fn estimate_annual_return(raw_amount: &str, annual_percentage_yield: Decimal) -> Decimal {
    let Some(amount) = parse_amount(raw_amount) else {
        return zero_estimate();
    };
    if amount < Decimal::ZERO {
        return zero_estimate();
    }

    amount
        .checked_mul(annual_percentage_yield)
        .map_or_else(zero_estimate, round_to_return_scale)
}

/// Round half-up to the return scale and pin the scale so the read model
/// always carries exactly two fractional digits.
fn round_to_return_scale(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(RETURN_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(RETURN_SCALE);
    rounded
}

// =============================================================================
// TESTS
// =============================================================================
