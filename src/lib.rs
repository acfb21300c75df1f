//! # Beanmax
//!
//! A command-line tool and library for converting beans to diamonds with
//! tier-based efficiency rates.
//!
//! This crate answers two questions about the bean-to-diamond exchange:
//!
//! - How many diamonds does a given amount of beans earn, at which rate
//!   tier, and how many beans are left below the tier's granularity?
//! - How should an amount be distributed across the rate tiers for the
//!   maximum total payout?
//!
//! Both answers come from a single hardcoded table of six calibrated rate
//! tiers; every operation is a pure function over that table.
//!
//! ## Modules
//!
//! - [`models`] - Core data structures for tiers, results, and breakdowns
//! - [`data`] - The canonical tier table and tier resolver
//! - [`optimizer`] - Conversion and tier-allocation algorithms
//! - [`display`] - Output formatting, tips, and CSV export
//!
//! ## Example Usage
//!
//! ```
//! use beanmax::optimizer::{calculate_diamonds, optimize_beans};
//! use beanmax::display::efficiency_tip;
//!
//! // Straight conversion: 10803 beans land in tier 5.
//! let result = calculate_diamonds(10803).unwrap();
//! assert_eq!(result.diamonds, 2990);
//! assert_eq!(result.tier, 5);
//!
//! // Optimized distribution across the tier table.
//! let optimized = optimize_beans(10803);
//! assert_eq!(optimized.total_diamonds, 2990);
//!
//! println!("{}", efficiency_tip(10803));
//! ```
//!
//! ## Calibration quirks
//!
//! The tier table reproduces the live exchange exactly, including two
//! deliberate oddities: each bounded tier pays a literal calibrated value
//! at its upper bound instead of the floor formula, and the unbounded top
//! tier's rate dips slightly below the tier beneath it. The optimizer
//! allocates by tier order, not by rate, so that dip carries through to
//! amounts at the 10999/11000 boundary just as it does on the exchange.

pub mod data;
pub mod display;
pub mod models;
pub mod optimizer;
pub mod wasm;
