//! Testing utilities for the GiveTransparent workspace
//!
//! Shared fixtures: seeded stores, sample plans, payments and batches.

#![allow(missing_docs)]

use chrono::NaiveDate;
use gt_core::{Allocation, DonationPlan, FeeSchedule, Pillar};
use gt_store::{seed_demo_data, MemoryStore, PaymentRecord, Payout, PayoutBatch, Quarter};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Empty in-memory store
pub fn empty_store() -> MemoryStore {
    MemoryStore::new()
}

/// Store filled with the demo data
pub fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    assert!(seed_demo_data(&store).unwrap(), "fresh store should seed");
    store
}

/// The default 40/35/25 plan at £30
pub fn demo_plan() -> DonationPlan {
    DonationPlan::default()
}

pub fn plan(amount: f64, environment: u8, human_aid: u8, research: u8) -> DonationPlan {
    DonationPlan::new(amount, Allocation::new(environment, human_aid, research).unwrap())
}

/// Completed payment of `gross` on the first of `month` 2024
pub fn payment(id: &str, month: u32, gross: f64) -> PaymentRecord {
    PaymentRecord::from_breakdown(id, date(2024, month, 1), &FeeSchedule::default().split(gross))
}

/// Batch with one payout per pillar
pub fn batch(
    quarter: Quarter,
    year: i32,
    amounts: [f64; 3],
    sent_on: Option<NaiveDate>,
) -> PayoutBatch {
    let mut batch = PayoutBatch::draft(quarter, year);
    for (pillar, amount) in Pillar::ALL.into_iter().zip(amounts) {
        batch.push(Payout {
            partner_id: format!("partner-{}", pillar.slug()),
            partner_name: format!("{} Partner", pillar.info().name),
            pillar,
            amount,
            notes: None,
        });
    }
    if let Some(date) = sent_on {
        batch.mark_sent(date);
    }
    batch
}

/// Write `contents` to a fresh temp-style path under `dir`
pub fn write_file(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
