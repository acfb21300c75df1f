//! Tests for the canonical tier table and tier resolver.

use beanmax::data::{find_tier, CONVERSION_TIERS};

#[test]
fn test_table_has_six_tiers() {
    assert_eq!(CONVERSION_TIERS.len(), 6);
    assert_eq!(CONVERSION_TIERS[0].min_beans, 1);
    assert!(
        CONVERSION_TIERS[5].max_beans.is_none(),
        "Last tier should be unbounded"
    );
}

#[test]
fn test_tiers_are_contiguous() {
    for pair in CONVERSION_TIERS.windows(2) {
        let max = pair[0]
            .max_beans
            .expect("Only the last tier may be unbounded");
        assert_eq!(
            max + 1,
            pair[1].min_beans,
            "Tier ranges should have no gaps or overlaps"
        );
    }
}

#[test]
fn test_rates_non_decreasing_until_last_tier() {
    for pair in CONVERSION_TIERS[..5].windows(2) {
        assert!(
            pair[1].rate >= pair[0].rate,
            "Rates should not decrease below the top tier"
        );
    }

    // The published table dips at the top: the unbounded tier pays
    // marginally less per bean than the tier beneath it.
    assert!(CONVERSION_TIERS[5].rate < CONVERSION_TIERS[4].rate);
}

#[test]
fn test_every_positive_amount_matches_exactly_one_tier() {
    for beans in 1..=12000u64 {
        let matches = CONVERSION_TIERS
            .iter()
            .filter(|tier| tier.contains(beans))
            .count();
        assert_eq!(matches, 1, "{} beans should match exactly one tier", beans);
    }
}

#[test]
fn test_find_tier_boundaries() {
    let cases = [
        (1u64, 0usize),
        (8, 0),
        (9, 1),
        (109, 1),
        (110, 2),
        (999, 2),
        (1000, 3),
        (3999, 3),
        (4000, 4),
        (10999, 4),
        (11000, 5),
        (5_000_000, 5),
    ];

    for (beans, expected_index) in cases {
        let (index, tier) = find_tier(beans).expect("Amount should match a tier");
        assert_eq!(index, expected_index, "{} beans", beans);
        assert!(tier.contains(beans));
    }
}

#[test]
fn test_find_tier_rejects_zero() {
    assert!(find_tier(0).is_none(), "The first tier starts at 1 bean");
}

#[test]
fn test_exact_payouts_sit_on_upper_bounds() {
    for tier in &CONVERSION_TIERS {
        if tier.exact_at_max.is_some() {
            assert!(
                tier.max_beans.is_some(),
                "Calibrated payouts only make sense on bounded tiers"
            );
        }
    }
}
