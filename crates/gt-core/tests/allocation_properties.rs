//! Property tests for the three-pillar splitter.
//!
//! These exercise the guarantees donors rely on while dragging sliders:
//! - The split always totals exactly 100.
//! - Re-applying the current value never drifts.
//! - Pinning a pillar to 100 empties the other two.

use gt_core::{rebalance, Allocation, PercentTriple, Pillar};
use proptest::prelude::*;

fn pillar() -> impl Strategy<Value = Pillar> {
    prop_oneof![
        Just(Pillar::Environment),
        Just(Pillar::HumanAid),
        Just(Pillar::Research),
    ]
}

/// Any valid starting split.
fn allocation() -> impl Strategy<Value = Allocation> {
    (0u8..=100)
        .prop_flat_map(|e| (Just(e), 0u8..=(100 - e)))
        .prop_map(|(e, h)| Allocation::new(e, h, 100 - e - h).unwrap())
}

fn total(a: Allocation) -> u32 {
    a.percents().iter().map(|p| u32::from(*p)).sum()
}

proptest! {
    #[test]
    fn prop_every_edit_sequence_totals_one_hundred(
        start in allocation(),
        edits in prop::collection::vec((pillar(), -50i64..200), 0..64),
    ) {
        let mut current = start;
        for (field, value) in edits {
            current = rebalance(current, field, value);
            prop_assert_eq!(total(current), 100);
        }
    }

    #[test]
    fn prop_text_edits_total_one_hundred(
        start in allocation(),
        edits in prop::collection::vec((pillar(), ".{0,6}"), 0..32),
    ) {
        let mut current = start;
        for (field, text) in edits {
            current = current.rebalance_text(field, &text);
            prop_assert_eq!(total(current), 100);
        }
    }

    #[test]
    fn prop_same_value_is_a_no_op(start in allocation(), field in pillar()) {
        let again = rebalance(start, field, i64::from(start.get(field)));
        prop_assert_eq!(again, start);
    }

    #[test]
    fn prop_one_hundred_zeroes_the_rest(start in allocation(), field in pillar()) {
        let next = rebalance(start, field, 100);
        let (a, b) = field.others();
        prop_assert_eq!(next.get(field), 100);
        prop_assert_eq!(next.get(a), 0);
        prop_assert_eq!(next.get(b), 0);
    }

    #[test]
    fn prop_edited_pillar_takes_clamped_value(start in allocation(), field in pillar(), value in -500i64..500) {
        let next = rebalance(start, field, value);
        prop_assert_eq!(i64::from(next.get(field)), value.clamp(0, 100));
    }

    #[test]
    fn prop_first_other_tracks_prior_ratio(start in allocation(), field in pillar(), value in 0i64..=100) {
        let next = rebalance(start, field, value);
        let (a, b) = field.others();
        let whole = f64::from(start.get(a)) + f64::from(start.get(b));
        let remaining = 100.0 - value as f64;
        let expected = if whole == 0.0 { remaining } else { remaining * f64::from(start.get(a)) / whole };
        prop_assert!((f64::from(next.get(a)) - expected).abs() <= 0.5 + 1e-9);
    }

    #[test]
    fn prop_serde_round_trip_preserves_split(start in allocation()) {
        let triple = PercentTriple::from(start);
        prop_assert!(triple.status().is_balanced());
        prop_assert_eq!(Allocation::try_from(triple).unwrap(), start);
    }
}

#[test]
fn degenerate_ratio_fallback() {
    let start = Allocation::new(0, 0, 100).unwrap();
    let next = rebalance(start, Pillar::Research, 0);
    assert_eq!(next.percents(), [100, 0, 0]);
}

#[test]
fn proportional_example() {
    let start = Allocation::new(40, 35, 25).unwrap();
    let next = rebalance(start, Pillar::Environment, 20);
    assert_eq!(
        (next.environment(), next.human_aid(), next.research()),
        (20, 47, 33)
    );
}

#[test]
fn slider_drag_sequence_stays_balanced() {
    // A drag from 40 down to 0 and back up, one tick at a time.
    let mut current = Allocation::default();
    for value in (0..=40).rev().chain(0..=100) {
        current = rebalance(current, Pillar::Environment, value);
        assert_eq!(total(current), 100);
    }
    assert_eq!(current, Allocation::all_to(Pillar::Environment));
}
