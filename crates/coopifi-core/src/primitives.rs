//! # Innate Primitives
//!
//! Hardcoded runtime constants for the CoopiFi CORE.
//!
//! The flow engine starts with zero state but fixed policy.
//! These primitives are compiled into the binary and are immutable at runtime.

/// Number of decimal places in a derived annual-return estimate.
///
/// - Estimates are rounded half-up to this scale.
/// - The read model always carries exactly this many fractional digits.
///
/// Presentation (currency symbols, separators) is a display-layer concern.
pub const RETURN_SCALE: u32 = 2;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length for raw amount text.
///
/// The CORE stores whatever text it is handed verbatim; this bound is
/// enforced at the API boundary before input reaches the session.
/// This prevents memory exhaustion from malicious or malformed input.
pub const MAX_AMOUNT_TEXT_LENGTH: usize = 64;

/// Maximum length for pool symbol strings.
///
/// Symbols longer than this will be rejected at the API boundary.
pub const MAX_SYMBOL_LENGTH: usize = 32;

/// Maximum number of pools in a single catalog.
///
/// Catalogs larger than this are rejected at construction.
/// Keeps every lookup and listing computationally bounded.
pub const MAX_CATALOG_POOLS: usize = 256;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_scale_is_two() {
        // Estimates are money-like: two fractional digits
        assert_eq!(RETURN_SCALE, 2);
    }

    #[test]
    fn limits_are_nonzero() {
        assert!(MAX_AMOUNT_TEXT_LENGTH > 0);
        assert!(MAX_SYMBOL_LENGTH > 0);
        assert!(MAX_CATALOG_POOLS > 0);
    }
}
