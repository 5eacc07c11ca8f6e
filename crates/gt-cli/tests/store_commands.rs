//! Commands against hand-built stores

use gt_cli::commands;
use gt_cli::CliConfig;
use gt_store::{PaymentRecord, PayoutBatch, PlanStore, Quarter, Repository, DEMO_USER_ID};
use gt_test_utils::{batch, date, demo_plan, empty_store, payment, plan, seeded_store};

#[test]
fn stats_over_custom_history() {
    let store = empty_store();
    let payments = Repository::<PaymentRecord>::new(&store);
    payments.add(&payment("pay-a", 1, 100.0)).unwrap();
    payments.add(&payment("pay-b", 2, 10.0)).unwrap();

    let batches = Repository::<PayoutBatch>::new(&store);
    batches
        .add(&batch(Quarter::Q1, 2024, [1000.0, 500.0, 250.5], Some(date(2024, 3, 31))))
        .unwrap();
    batches.add(&batch(Quarter::Q2, 2024, [1.0, 1.0, 1.0], None)).unwrap();

    let out = commands::stats(&store).unwrap();
    assert!(out.contains("Total donated:          £102.30"));
    assert!(out.contains("Total fees:             £7.70"));
    assert!(out.contains("Sent to partners:       £1,750.50"));
    assert!(out.ends_with("Quarters paid out:      1"));
}

#[test]
fn receipt_on_empty_store() {
    let err = commands::receipt(&empty_store(), &CliConfig::default(), None).unwrap_err();
    assert_eq!(err.to_string(), "no payments recorded");
}

#[test]
fn latest_receipt_tracks_new_payments() {
    let store = seeded_store();
    Repository::<PaymentRecord>::new(&store)
        .add(&PaymentRecord::from_breakdown(
            "pay-13",
            date(2025, 1, 1),
            &gt_core::compute_fee_breakdown(45.0),
        ))
        .unwrap();
    let config = CliConfig::default().with_user_name("Alex");
    let out = commands::receipt(&store, &config, None).unwrap();
    assert!(out.starts_with("# receipt-pay-13.pdf\n"));
    assert!(out.contains("Date: 1 January 2025"));
    assert!(out.contains("User: Alex"));
    assert!(out.contains("Gross Amount:        £45.00"));
}

#[test]
fn draft_report() {
    let out = commands::report(&seeded_store(), "Q1", 2025).unwrap();
    assert!(out.contains("Status: DRAFT"));
    assert!(out.contains("Feed the Future (Human Aid)\n  Amount: £4,884"));
}

#[test]
fn receipt_for_a_charge_of_the_saved_plan() {
    let store = seeded_store();
    let plans = PlanStore::new(&store);
    assert_eq!(plans.load_or_default(DEMO_USER_ID).unwrap(), demo_plan());

    plans.save(DEMO_USER_ID, &plan(50.0, 20, 50, 30)).unwrap();
    let saved = plans.load_or_default(DEMO_USER_ID).unwrap();
    assert_eq!(saved.allocation().percents(), [20, 50, 30]);

    Repository::<PaymentRecord>::new(&store)
        .add(&payment("pay-13", 12, saved.amount()))
        .unwrap();
    let out = commands::receipt(&store, &CliConfig::default(), Some("pay-13")).unwrap();
    assert!(out.contains("Gross Amount:        £50.00"));
    assert!(out.contains("Donation Pool:       £46.50"));
    assert!(out.contains("Plan: £50.00 monthly"));
}
