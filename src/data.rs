//! The canonical conversion tier table for Beanmax.
//!
//! This module holds the single source of truth for the bean-to-diamond
//! rate tiers, plus the resolver that maps a bean amount to its tier.
//! Every other module reads from this table; nothing else hardcodes rates
//! or boundaries.

use crate::models::ConversionTier;

/// The six conversion tiers, ordered ascending by `min_beans`.
///
/// The boundaries, rates, and exact-at-max payouts are calibration data
/// taken from the live exchange, not derived values. In particular the
/// last tier's rate (0.2767) sits slightly below the fifth tier's
/// (0.2768); that dip is part of the published table and must stay as-is.
///
/// Tiers are contiguous: each bounded tier's `max_beans + 1` equals the
/// next tier's `min_beans`, and the last tier is unbounded, so every
/// positive amount matches exactly one tier.
pub static CONVERSION_TIERS: [ConversionTier; 6] = [
    ConversionTier {
        min_beans: 1,
        max_beans: Some(8),
        rate: 0.25,
        efficiency: 25.00,
        exact_at_max: Some(2),
    },
    ConversionTier {
        min_beans: 9,
        max_beans: Some(109),
        rate: 0.2661,
        efficiency: 26.61,
        exact_at_max: Some(29),
    },
    ConversionTier {
        min_beans: 110,
        max_beans: Some(999),
        rate: 0.2753,
        efficiency: 27.53,
        exact_at_max: Some(275),
    },
    ConversionTier {
        min_beans: 1000,
        max_beans: Some(3999),
        rate: 0.2763,
        efficiency: 27.63,
        exact_at_max: Some(1105),
    },
    ConversionTier {
        min_beans: 4000,
        max_beans: Some(10999),
        rate: 0.2768,
        efficiency: 27.68,
        exact_at_max: Some(3045),
    },
    ConversionTier {
        min_beans: 11000,
        max_beans: None,
        rate: 0.2767,
        efficiency: 27.67,
        exact_at_max: None,
    },
];

/// Finds the conversion tier for a given bean amount.
///
/// Scans the table in ascending order and returns the first tier whose
/// range contains `beans`, together with its 0-based table position.
///
/// # Returns
///
/// `None` when `beans` is zero (the first tier starts at 1) or when no
/// tier covers the amount; with [`CONVERSION_TIERS`] the latter cannot
/// happen for any positive amount.
///
/// # Example
///
/// ```
/// use beanmax::data::find_tier;
///
/// let (index, tier) = find_tier(500).unwrap();
/// assert_eq!(index, 2);
/// assert_eq!(tier.rate, 0.2753);
///
/// assert!(find_tier(0).is_none());
/// ```
pub fn find_tier(beans: u64) -> Option<(usize, &'static ConversionTier)> {
    CONVERSION_TIERS
        .iter()
        .enumerate()
        .find(|(_, tier)| tier.contains(beans))
}
