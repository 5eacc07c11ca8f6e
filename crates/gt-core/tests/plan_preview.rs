//! End-to-end checks of the preview shown beside the splitter.

use gt_core::money::{format_gbp, to_pennies};
use gt_core::{
    compute_fee_breakdown, DonationPlan, FeeSchedule, Pillar, PlanLimits, PlanPreview,
    INNOVATION_FUND_RATE, PLATFORM_FEE_RATE, PROCESSING_FEE_RATE,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

#[test]
fn thirty_pounds_forty_thirty_five_twenty_five() {
    let plan = DonationPlan::default();
    let preview = PlanPreview::compute(&plan, &FeeSchedule::default());

    let fees = preview.fees;
    assert_eq!(
        [
            format_gbp(fees.processing_fee),
            format_gbp(fees.platform_fee),
            format_gbp(fees.innovation_fee),
            format_gbp(fees.donation_pool),
        ],
        ["£0.87", "£1.05", "£0.18", "£27.90"].map(String::from)
    );

    let amounts = Pillar::ALL.map(|p| preview.share(p).amount);
    for (actual, expected) in amounts.iter().zip([11.16, 9.765, 6.975]) {
        assert!((actual - expected).abs() < EPSILON, "{actual} != {expected}");
    }
}

#[test]
fn displayed_shares_stay_within_a_penny_per_pillar() {
    let plan = DonationPlan::default()
        .with_amount(85.0)
        .set_percent(Pillar::Research, 33);
    let preview = PlanPreview::compute(&plan, &FeeSchedule::default());

    let rounded_sum: i64 = preview.shares.iter().map(|s| to_pennies(s.amount)).sum();
    let pool = to_pennies(preview.fees.donation_pool);
    assert!((rounded_sum - pool).abs() <= 3);
}

#[test]
fn default_rates_are_named_constants() {
    let schedule = FeeSchedule::default();
    assert_eq!(schedule.processing_rate, PROCESSING_FEE_RATE);
    assert_eq!(schedule.platform_rate, PLATFORM_FEE_RATE);
    assert_eq!(schedule.innovation_rate, INNOVATION_FUND_RATE);
}

#[test]
fn overridden_rates_flow_into_preview() {
    let schedule = FeeSchedule::new(0.0, 0.0, 0.0).unwrap();
    let preview = PlanPreview::compute(&DonationPlan::default(), &schedule);
    assert_eq!(preview.fees.donation_pool, 30.0);
    assert!((preview.share(Pillar::Environment).amount - 12.0).abs() < EPSILON);
}

proptest! {
    #[test]
    fn prop_fee_lines_sum_to_gross(gross in 0.0f64..10_000.0) {
        let fees = compute_fee_breakdown(gross);
        let sum = fees.processing_fee + fees.platform_fee + fees.innovation_fee + fees.donation_pool;
        prop_assert!((sum - gross).abs() < EPSILON);
        prop_assert!((fees.donation_pool - gross * 0.93).abs() < EPSILON);
    }

    #[test]
    fn prop_slider_amounts_preview_cleanly(raw in -50.0f64..500.0, value in 0i64..=100) {
        let limits = PlanLimits::default();
        let amount = limits.snap_amount(raw);
        prop_assert!(limits.contains(amount));

        let plan = DonationPlan::default().with_amount(amount).set_percent(Pillar::HumanAid, value);
        let preview = PlanPreview::compute(&plan, &FeeSchedule::default());
        prop_assert!((preview.shares_total() - preview.fees.donation_pool).abs() < EPSILON);
    }
}
