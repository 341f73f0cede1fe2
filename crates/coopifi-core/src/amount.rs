//! # Amount Parsing
//!
//! The single parsing policy for raw amount text, shared by the return
//! estimator and the submission gate.
//!
//! - Raw text is NEVER normalized in place; the selection state keeps the
//!   member's keystrokes verbatim
//! - Parsing trims surrounding whitespace, nothing else
//! - Grammar is `rust_decimal`'s plain decimal grammar (no scientific
//!   notation, no thousands separators)

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse raw amount text into a decimal.
///
/// Returns `None` for empty, partially-typed, or otherwise malformed text.
/// Callers decide what a failed parse means: the estimator degrades to a
/// zero estimate, the gate reports an invalid-format reason.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Parse raw amount text into a strictly positive decimal.
///
/// Returns `None` when the text does not parse or the parsed value is
/// zero or negative. A stake of zero is never submittable.
#[must_use]
pub fn parse_positive_amount(raw: &str) -> Option<Decimal> {
    parse_amount(raw).filter(|amount| amount > &Decimal::ZERO)
}

// =============================================================================
// TESTS
// =============================================================================
