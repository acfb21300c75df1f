//! Tests for display and formatting utilities.

use std::fs;

use beanmax::display::{efficiency_tip, format_count, tier_table, write_breakdown_csv};
use beanmax::optimizer::optimize_beans;

#[test]
fn test_format_count_small_values() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(8), "8");
    assert_eq!(format_count(999), "999");
}

#[test]
fn test_format_count_thousands() {
    assert_eq!(format_count(1000), "1,000");
    assert_eq!(format_count(10999), "10,999");
    assert_eq!(format_count(123456), "123,456");
}

#[test]
fn test_format_count_millions() {
    assert_eq!(format_count(1000000), "1,000,000");
    assert_eq!(format_count(1234567890), "1,234,567,890");
}

#[test]
fn test_tier_table_has_six_rows() {
    let rows = tier_table();
    assert_eq!(rows.len(), 6);
}

#[test]
fn test_tier_table_ranges() {
    let rows = tier_table();
    assert_eq!(rows[0].range, "1 - 8");
    assert_eq!(rows[3].range, "1,000 - 3,999");
    assert_eq!(
        rows[5].range, "11,000 - ∞",
        "Unbounded tier should render an infinity bound"
    );
}

#[test]
fn test_tier_table_examples() {
    let rows = tier_table();
    assert_eq!(rows[0].example, "8 beans = 2 diamonds");
    assert_eq!(rows[3].example, "3,999 beans = 1,105 diamonds");
    assert_eq!(rows[4].example, "10,999 beans = 3,045 diamonds");

    // The unbounded tier has no calibrated breakpoint; it repeats its
    // efficiency instead.
    assert_eq!(rows[5].example, rows[5].efficiency);
    assert_eq!(rows[5].efficiency, "27.67%");
}

#[test]
fn test_tier_table_rates() {
    let rows = tier_table();
    assert_eq!(rows[0].rate, "0.2500");
    assert_eq!(rows[4].rate, "0.2768");
    assert_eq!(rows[5].rate, "0.2767");
}

#[test]
fn test_efficiency_tip_thresholds() {
    assert_eq!(efficiency_tip(0), "Tip: enter a positive number of beans.");
    assert_eq!(efficiency_tip(-5), "Tip: enter a positive number of beans.");

    assert_eq!(
        efficiency_tip(1),
        "Tip: efficiency increases significantly after 109 beans!"
    );
    assert_eq!(
        efficiency_tip(108),
        "Tip: efficiency increases significantly after 109 beans!"
    );

    assert_eq!(
        efficiency_tip(109),
        "Tip: maximum efficiency is reached at 4000+ beans!"
    );
    assert_eq!(
        efficiency_tip(3999),
        "Tip: maximum efficiency is reached at 4000+ beans!"
    );

    assert_eq!(
        efficiency_tip(4000),
        "Great! You're at the maximum efficiency tier!"
    );
    assert_eq!(
        efficiency_tip(50_000),
        "Great! You're at the maximum efficiency tier!"
    );
}

#[test]
fn test_write_breakdown_csv() {
    let optimized = optimize_beans(10803);
    let path = std::env::temp_dir().join(format!("beanmax_breakdown_{}.csv", std::process::id()));

    write_breakdown_csv(&optimized, &path).expect("Export should succeed");
    let contents = fs::read_to_string(&path).expect("Exported file should be readable");
    fs::remove_file(&path).ok();

    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("tier,beans_used,diamonds_earned,rate,efficiency")
    );
    assert_eq!(lines.next(), Some("5,10803,2990,0.2768,27.68"));
    assert_eq!(lines.next(), Some("total,,2990,,"));
    assert_eq!(lines.next(), None);
}
