//! Data models and structures for Beanmax.
//!
//! This module contains all the core data structures used throughout the
//! application: conversion tiers, conversion results, and optimization
//! breakdowns.

use thiserror::Error;

/// A single conversion tier: a contiguous range of bean amounts that share
/// one diamonds-per-bean rate.
///
/// Tiers form a fixed ordered table (see [`crate::data::CONVERSION_TIERS`]),
/// sorted ascending by `min_beans`. The last tier is open-ended, expressed
/// as `max_beans: None`.
///
/// # Example
///
/// ```
/// use beanmax::models::ConversionTier;
///
/// let tier = ConversionTier {
///     min_beans: 4000,
///     max_beans: Some(10999),
///     rate: 0.2768,
///     efficiency: 27.68,
///     exact_at_max: Some(3045),
/// };
///
/// assert!(tier.contains(10803));
/// assert!(!tier.contains(11000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionTier {
    /// Inclusive lower bound of the tier's bean range.
    pub min_beans: u64,
    /// Inclusive upper bound; `None` means the tier is unbounded.
    pub max_beans: Option<u64>,
    /// Diamonds earned per bean within this tier.
    pub rate: f64,
    /// The rate expressed as a percentage, kept for display.
    pub efficiency: f64,
    /// Calibrated diamond payout when the input lands exactly on `max_beans`.
    /// Overrides the floor formula at that single point.
    pub exact_at_max: Option<u64>,
}

impl ConversionTier {
    /// Returns `true` if `beans` falls within this tier's range.
    pub fn contains(&self, beans: u64) -> bool {
        beans >= self.min_beans && self.max_beans.map_or(true, |max| beans <= max)
    }
}

/// Result of converting a bean amount within its single matching tier.
///
/// Produced fresh by [`crate::optimizer::calculate_diamonds`]; nothing is
/// cached or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// Diamonds earned for the full amount.
    pub diamonds: u64,
    /// Beans that contribute no additional diamond at the tier's granularity.
    pub remainder: u64,
    /// The applied tier's diamonds-per-bean rate.
    pub rate: f64,
    /// The applied tier's efficiency percentage.
    pub efficiency: f64,
    /// 1-based position of the applied tier in the table.
    pub tier: usize,
}

/// One entry of an optimization breakdown: how many beans went into a tier
/// and what they earned there.
#[derive(Debug, Clone, PartialEq)]
pub struct TierAllocation {
    /// 1-based position of the tier in the table.
    pub tier: usize,
    /// Beans allocated to this tier.
    pub beans: u64,
    /// Diamonds earned from this tier's allocation.
    pub diamonds: u64,
    /// The tier's diamonds-per-bean rate.
    pub rate: f64,
    /// The tier's efficiency percentage.
    pub efficiency: f64,
}

/// Full result of distributing a bean amount across the tier table.
///
/// Allocations are ordered ascending by tier position regardless of the
/// order in which the optimizer filled them. An invalid (non-positive)
/// input yields an empty breakdown with a zero total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptimizedConversion {
    /// Per-tier allocations, one entry per tier that received beans.
    pub allocations: Vec<TierAllocation>,
    /// Diamonds earned across all allocations.
    pub total_diamonds: u64,
}

/// One formatted row of the tier reference table, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TierRow {
    /// Bean range, e.g. `"1,000 - 3,999"` or `"11,000 - ∞"`.
    pub range: String,
    /// Rate with four decimals, e.g. `"0.2763"`.
    pub rate: String,
    /// Efficiency percentage, e.g. `"27.63%"`.
    pub efficiency: String,
    /// Worked example at the tier's calibrated breakpoint, or the
    /// efficiency again for tiers without one.
    pub example: String,
}

/// Errors produced by the conversion operations.
///
/// Both variants are input-validation failures; no operation here is
/// retryable or partially succeeds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The bean amount was zero or negative.
    #[error("invalid amount: beans must be a positive whole number")]
    InvalidAmount,
    /// No tier covers the amount. Unreachable with the canonical table,
    /// which ends in an unbounded tier, but the resolver contract allows it.
    #[error("no conversion tier matches the given amount")]
    NoTierMatch,
}
