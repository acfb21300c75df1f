//! Display and formatting utilities for Beanmax.
//!
//! This module provides functions for formatting amounts, building the
//! tier reference table, and rendering conversion results to the user in
//! a readable format. It also writes the optimized breakdown as CSV for
//! use in spreadsheets.

use csv::Writer;
use std::error::Error;
use std::path::Path;

use crate::data::CONVERSION_TIERS;
use crate::models::{ConversionResult, OptimizedConversion, TierRow};

/// Formats an amount with thousands separators.
///
/// # Example
///
/// ```
/// use beanmax::display::format_count;
///
/// assert_eq!(format_count(8), "8");
/// assert_eq!(format_count(10999), "10,999");
/// assert_eq!(format_count(1000000), "1,000,000");
/// ```
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Builds the display rows of the tier reference table.
///
/// One row per tier, in table order. Bounded tiers with a calibrated
/// breakpoint show a worked example (`"10,999 beans = 3,045 diamonds"`);
/// the unbounded tier shows its efficiency instead and renders its upper
/// bound as `∞`.
pub fn tier_table() -> Vec<TierRow> {
    CONVERSION_TIERS
        .iter()
        .map(|tier| {
            let range = match tier.max_beans {
                Some(max) => format!("{} - {}", format_count(tier.min_beans), format_count(max)),
                None => format!("{} - ∞", format_count(tier.min_beans)),
            };
            let rate = format!("{:.4}", tier.rate);
            let efficiency = format!("{:.2}%", tier.efficiency);
            let example = match (tier.exact_at_max, tier.max_beans) {
                (Some(exact), Some(max)) => {
                    format!("{} beans = {} diamonds", format_count(max), format_count(exact))
                }
                _ => efficiency.clone(),
            };
            TierRow {
                range,
                rate,
                efficiency,
                example,
            }
        })
        .collect()
}

/// Returns a short guidance message for the given bean amount.
///
/// The thresholds mirror the tier table: efficiency steps up noticeably
/// past 109 beans and tops out from 4000 beans onward.
pub fn efficiency_tip(beans: i64) -> &'static str {
    if beans <= 0 {
        "Tip: enter a positive number of beans."
    } else if beans < 109 {
        "Tip: efficiency increases significantly after 109 beans!"
    } else if beans < 4000 {
        "Tip: maximum efficiency is reached at 4000+ beans!"
    } else {
        "Great! You're at the maximum efficiency tier!"
    }
}

/// Displays a conversion result and its optimized breakdown to stdout.
///
/// This function prints:
/// - The straight conversion metrics (diamonds, efficiency, rate, tier)
/// - A remainder note when some beans fall below the tier's granularity
/// - The per-tier optimization breakdown with its total
///
/// # Arguments
///
/// * `result` - The single-tier conversion result
/// * `optimized` - The breakdown produced by the optimizer
pub fn display_results(result: &ConversionResult, optimized: &OptimizedConversion) {
    println!();
    println!("+================================================================+");
    println!("|              BEANS TO DIAMONDS CONVERSION RESULT               |");
    println!("+================================================================+");
    println!();

    println!("[CONVERSION]");
    println!("----------------------------------------------------------------");
    println!("  Diamonds:         {}", format_count(result.diamonds));
    println!("  Efficiency:       {:.2}%", result.efficiency);
    println!("  Rate:             {:.4} per bean", result.rate);
    if result.remainder > 0 {
        println!(
            "  Remainder:        {} beans (may not convert)",
            format_count(result.remainder)
        );
    }
    println!("  Tier:             {}", result.tier);

    println!();
    println!("[OPTIMIZED BREAKDOWN]");
    println!("----------------------------------------------------------------");
    println!(
        "{:<6} {:>12} {:>16} {:>8} {:>12}",
        "Tier", "Beans Used", "Diamonds Earned", "Rate", "Efficiency"
    );
    println!("----------------------------------------------------------------");

    for allocation in &optimized.allocations {
        println!(
            "{:<6} {:>12} {:>16} {:>8.4} {:>11.2}%",
            allocation.tier,
            format_count(allocation.beans),
            format_count(allocation.diamonds),
            allocation.rate,
            allocation.efficiency
        );
    }

    println!();
    println!(
        "  Total Diamonds (Optimized): {}",
        format_count(optimized.total_diamonds)
    );
    println!();
}

/// Displays the tier reference table to stdout.
pub fn display_tier_table() {
    println!("[CONVERSION TIER TABLE]");
    println!("----------------------------------------------------------------");
    println!(
        "{:<16} {:>8} {:>12}   {}",
        "Beans Range", "Rate", "Efficiency", "Example"
    );
    println!("----------------------------------------------------------------");

    for row in tier_table() {
        println!(
            "{:<16} {:>8} {:>12}   {}",
            row.range, row.rate, row.efficiency, row.example
        );
    }
    println!();
}

/// Writes an optimized breakdown to a CSV file.
///
/// One record per allocation plus a trailing total row, with the same
/// columns the on-screen breakdown shows.
///
/// # Arguments
///
/// * `optimized` - The breakdown to export
/// * `path` - Destination file; created or truncated
pub fn write_breakdown_csv(
    optimized: &OptimizedConversion,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(["tier", "beans_used", "diamonds_earned", "rate", "efficiency"])?;

    for allocation in &optimized.allocations {
        wtr.write_record([
            allocation.tier.to_string(),
            allocation.beans.to_string(),
            allocation.diamonds.to_string(),
            format!("{:.4}", allocation.rate),
            format!("{:.2}", allocation.efficiency),
        ])?;
    }

    wtr.write_record([
        "total".to_string(),
        String::new(),
        optimized.total_diamonds.to_string(),
        String::new(),
        String::new(),
    ])?;
    wtr.flush()?;
    Ok(())
}
