//! WebAssembly bindings for Beanmax.
//!
//! This module provides JavaScript-accessible functions for the converter.
//! Inputs arrive as JS numbers and are validated here; results go back as
//! JSON strings with a success/error envelope.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::display::{efficiency_tip, tier_table};
use crate::models::{OptimizedConversion, TierAllocation, TierRow};
use crate::optimizer::{calculate_diamonds, optimize_beans};

/// JavaScript-friendly conversion result.
#[derive(Debug, Clone, Serialize)]
pub struct JsConversionResult {
    pub success: bool,
    pub error: Option<String>,
    pub diamonds: u64,
    pub remainder: u64,
    pub rate: f64,
    pub efficiency: f64,
    pub tier: usize,
    pub tip: String,
}

/// JavaScript-friendly breakdown entry.
#[derive(Debug, Clone, Serialize)]
pub struct JsTierAllocation {
    pub tier: usize,
    pub beans: u64,
    pub diamonds: u64,
    pub rate: f64,
    pub efficiency: f64,
}

/// JavaScript-friendly optimization result.
#[derive(Debug, Clone, Serialize)]
pub struct JsOptimizeResult {
    pub success: bool,
    pub error: Option<String>,
    pub allocations: Vec<JsTierAllocation>,
    pub total_diamonds: u64,
}

/// JavaScript-friendly tier reference row.
#[derive(Debug, Clone, Serialize)]
pub struct JsTierRow {
    pub range: String,
    pub rate: String,
    pub efficiency: String,
    pub example: String,
}

impl From<&TierAllocation> for JsTierAllocation {
    fn from(allocation: &TierAllocation) -> Self {
        JsTierAllocation {
            tier: allocation.tier,
            beans: allocation.beans,
            diamonds: allocation.diamonds,
            rate: allocation.rate,
            efficiency: allocation.efficiency,
        }
    }
}

impl From<&TierRow> for JsTierRow {
    fn from(row: &TierRow) -> Self {
        JsTierRow {
            range: row.range.clone(),
            rate: row.rate.clone(),
            efficiency: row.efficiency.clone(),
            example: row.example.clone(),
        }
    }
}

/// Validates a JS number as a whole bean amount.
///
/// JS callers pass `f64`; fractional, non-finite, or out-of-range values
/// are rejected here so the core only ever sees integers.
fn beans_from_input(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn failed_conversion(error: String) -> String {
    serde_json::to_string(&JsConversionResult {
        success: false,
        error: Some(error),
        diamonds: 0,
        remainder: 0,
        rate: 0.0,
        efficiency: 0.0,
        tier: 0,
        tip: String::new(),
    })
    .unwrap_or_default()
}

fn failed_optimization(error: String) -> String {
    serde_json::to_string(&JsOptimizeResult {
        success: false,
        error: Some(error),
        allocations: vec![],
        total_diamonds: 0,
    })
    .unwrap_or_default()
}

/// Convert a bean amount to diamonds.
///
/// Returns a JSON string with the conversion result and a tip, or an
/// error envelope for invalid input.
#[wasm_bindgen]
pub fn calculate(beans: f64) -> String {
    let beans = match beans_from_input(beans) {
        Some(b) => b,
        None => {
            web_sys::console::warn_1(&JsValue::from_str("beanmax: beans must be a whole number"));
            return failed_conversion("Beans must be a whole number.".to_string());
        }
    };

    match calculate_diamonds(beans) {
        Ok(result) => serde_json::to_string(&JsConversionResult {
            success: true,
            error: None,
            diamonds: result.diamonds,
            remainder: result.remainder,
            rate: result.rate,
            efficiency: result.efficiency,
            tier: result.tier,
            tip: efficiency_tip(beans).to_string(),
        })
        .unwrap_or_default(),
        Err(err) => failed_conversion(err.to_string()),
    }
}

/// Distribute a bean amount across the tiers for the maximum payout.
///
/// Returns a JSON string with the per-tier breakdown and total, or an
/// error envelope for invalid input.
#[wasm_bindgen]
pub fn optimize(beans: f64) -> String {
    let beans = match beans_from_input(beans) {
        Some(b) => b,
        None => {
            web_sys::console::warn_1(&JsValue::from_str("beanmax: beans must be a whole number"));
            return failed_optimization("Beans must be a whole number.".to_string());
        }
    };

    let optimized: OptimizedConversion = optimize_beans(beans);
    if optimized.allocations.is_empty() {
        return failed_optimization("Beans must be a positive amount.".to_string());
    }

    serde_json::to_string(&JsOptimizeResult {
        success: true,
        error: None,
        allocations: optimized.allocations.iter().map(JsTierAllocation::from).collect(),
        total_diamonds: optimized.total_diamonds,
    })
    .unwrap_or_default()
}

/// Get the tier reference table as a JSON array of display rows.
#[wasm_bindgen]
pub fn get_tier_table() -> String {
    let rows: Vec<JsTierRow> = tier_table().iter().map(JsTierRow::from).collect();
    serde_json::to_string(&rows).unwrap_or_default()
}

/// Get the version of the converter.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
