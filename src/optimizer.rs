//! Conversion and optimization algorithms for Beanmax.
//!
//! This module contains the core logic that turns a bean amount into a
//! diamond payout: the single-tier conversion used for a straight quote,
//! and the greedy allocator that distributes an amount across the tier
//! table.

use crate::data::{find_tier, CONVERSION_TIERS};
use crate::models::{
    ConversionError, ConversionResult, ConversionTier, OptimizedConversion, TierAllocation,
};

/// Diamond payout for `beans` processed entirely within `tier`.
///
/// The floor formula applies everywhere except the tier's calibrated
/// breakpoint: when the amount lands exactly on `max_beans` and the tier
/// carries an `exact_at_max` payout, that literal value wins.
fn tier_output(tier: &ConversionTier, beans: u64) -> u64 {
    match (tier.exact_at_max, tier.max_beans) {
        (Some(exact), Some(max)) if beans == max => exact,
        _ => (beans as f64 * tier.rate).floor() as u64,
    }
}

/// Smallest bean count that yields one whole diamond in `tier`.
fn bean_granularity(tier: &ConversionTier) -> u64 {
    (1.0 / tier.rate).ceil() as u64
}

/// Converts a bean amount to diamonds using its single matching tier.
///
/// The amount is matched against the tier table, the payout is computed
/// with the tier's rate (or its calibrated breakpoint value, see
/// [`crate::models::ConversionTier::exact_at_max`]), and the leftover
/// beans below the tier's granularity are reported as the remainder.
///
/// The remainder is computed unconditionally, including at calibrated
/// breakpoints (e.g. 109 beans reports a remainder of 1 alongside the
/// exact payout of 29).
///
/// # Arguments
///
/// * `beans` - Amount to convert; must be positive.
///
/// # Errors
///
/// * [`ConversionError::InvalidAmount`] when `beans` is zero or negative.
/// * [`ConversionError::NoTierMatch`] when no tier covers the amount;
///   cannot happen with the canonical table, which ends in an unbounded
///   tier.
///
/// # Example
///
/// ```
/// use beanmax::optimizer::calculate_diamonds;
///
/// let result = calculate_diamonds(10803).unwrap();
/// assert_eq!(result.diamonds, 2990);
/// assert_eq!(result.tier, 5);
///
/// assert!(calculate_diamonds(0).is_err());
/// ```
pub fn calculate_diamonds(beans: i64) -> Result<ConversionResult, ConversionError> {
    if beans <= 0 {
        return Err(ConversionError::InvalidAmount);
    }
    let beans = beans as u64;

    let (index, tier) = find_tier(beans).ok_or(ConversionError::NoTierMatch)?;

    Ok(ConversionResult {
        diamonds: tier_output(tier, beans),
        remainder: beans % bean_granularity(tier),
        rate: tier.rate,
        efficiency: tier.efficiency,
        tier: index + 1,
    })
}

/// Distributes a bean amount across the tier table to maximize diamonds.
///
/// Tiers are filled from the highest minimum threshold down, not by rate:
/// the table's last tier pays marginally less per bean than the fifth yet
/// still takes precedence for amounts that reach it. Sorting by rate
/// instead would silently change the payout at the 10999/11000 boundary,
/// so the iteration order is the table order, reversed.
///
/// At each tier the allocation is capped by the tier's upper bound (the
/// unbounded top tier takes everything that remains), and the calibrated
/// breakpoint payout applies when an allocation lands exactly on a tier's
/// `max_beans`. Any beans left after the base tier was considered fall
/// back to the base tier at its floor rate.
///
/// # Arguments
///
/// * `beans` - Amount to distribute. Non-positive amounts produce an
///   empty breakdown with a zero total.
///
/// # Returns
///
/// An [`OptimizedConversion`] whose allocations are sorted ascending by
/// tier position and together account for every input bean.
///
/// # Example
///
/// ```
/// use beanmax::optimizer::optimize_beans;
///
/// let optimized = optimize_beans(10803);
/// assert_eq!(optimized.total_diamonds, 2990);
/// assert_eq!(optimized.allocations[0].tier, 5);
/// ```
pub fn optimize_beans(beans: i64) -> OptimizedConversion {
    if beans <= 0 {
        return OptimizedConversion::default();
    }

    let mut remaining = beans as u64;
    let mut allocations = Vec::new();
    let mut total_diamonds = 0;

    for (index, tier) in CONVERSION_TIERS.iter().enumerate().rev() {
        if remaining < tier.min_beans {
            continue;
        }

        let usable = match tier.max_beans {
            Some(max) => remaining.min(max),
            None => remaining,
        };
        let diamonds = tier_output(tier, usable);

        allocations.push(TierAllocation {
            tier: index + 1,
            beans: usable,
            diamonds,
            rate: tier.rate,
            efficiency: tier.efficiency,
        });
        total_diamonds += diamonds;
        remaining -= usable;
    }

    // Boundary leftovers drop into the base tier at its floor rate. The
    // canonical table starts at 1 bean, so this only fires if the table
    // is ever reconfigured with a gap at the bottom.
    if remaining > 0 {
        let tier = &CONVERSION_TIERS[0];
        let diamonds = (remaining as f64 * tier.rate).floor() as u64;
        allocations.push(TierAllocation {
            tier: 1,
            beans: remaining,
            diamonds,
            rate: tier.rate,
            efficiency: tier.efficiency,
        });
        total_diamonds += diamonds;
    }

    allocations.sort_by_key(|allocation| allocation.tier);

    OptimizedConversion {
        allocations,
        total_diamonds,
    }
}
