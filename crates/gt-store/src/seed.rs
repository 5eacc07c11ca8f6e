//! Demo data seeding
//!
//! A fresh store is filled once with demo partners, payment history, payout
//! batches, impact content and a donor plan. The `gt_data_initialized` flag
//! records that seeding happened so user edits survive later starts.

use crate::error::StoreResult;
use crate::plans::{PlanStore, PLANS_COLLECTION};
use crate::records::{
    AdminPartner, ImpactMetric, ImpactReport, PartnerStatus, PaymentRecord, PaymentStatus, Payout,
    PayoutBatch, PillarImpact, Quarter, ReportingCadence,
};
use crate::repository::{Record, Repository};
use crate::store::RecordStore;
use chrono::NaiveDate;
use gt_core::{DonationPlan, Pillar};

/// Flag marking a seeded store
pub const INITIALIZED_KEY: &str = "gt_data_initialized";

/// User whose plan is seeded
pub const DEMO_USER_ID: &str = "user-1";

/// Every collection the seed writes
pub const SEEDED_COLLECTIONS: [&str; 6] = [
    AdminPartner::COLLECTION,
    PaymentRecord::COLLECTION,
    PayoutBatch::COLLECTION,
    ImpactReport::COLLECTION,
    ImpactMetric::COLLECTION,
    PLANS_COLLECTION,
];

/// Seed the demo data unless the store was seeded before
///
/// Returns whether anything was written.
///
/// # Errors
/// Serialization or backend failures.
pub fn seed_demo_data(store: &dyn RecordStore) -> StoreResult<bool> {
    if store.flag(INITIALIZED_KEY)?.as_deref() == Some("true") {
        return Ok(false);
    }
    Repository::<AdminPartner>::new(store).replace_all(&demo_partners())?;
    Repository::<PaymentRecord>::new(store).replace_all(&demo_payments())?;
    Repository::<PayoutBatch>::new(store).replace_all(&demo_batches())?;
    Repository::<ImpactReport>::new(store).replace_all(&demo_impact_reports())?;
    Repository::<ImpactMetric>::new(store).replace_all(&demo_impact_metrics())?;
    PlanStore::new(store).save(DEMO_USER_ID, &DonationPlan::default())?;
    store.set_flag(INITIALIZED_KEY, "true")?;
    tracing::info!("seeded demo data");
    Ok(true)
}

/// Drop every seeded collection and seed again
///
/// # Errors
/// Serialization or backend failures.
pub fn reset_to_defaults(store: &dyn RecordStore) -> StoreResult<()> {
    store.remove_flag(INITIALIZED_KEY)?;
    for collection in SEEDED_COLLECTIONS {
        store.clear(collection)?;
    }
    tracing::info!("reset store to defaults");
    seed_demo_data(store).map(|_| ())
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn partner(
    n: u32,
    name: &str,
    pillar: Pillar,
    cadence: ReportingCadence,
    rates: &str,
    region: &str,
    created: NaiveDate,
    last_report: Option<NaiveDate>,
) -> AdminPartner {
    AdminPartner {
        id: format!("admin-partner-{n}"),
        name: name.into(),
        pillar,
        status: if last_report.is_some() {
            PartnerStatus::Verified
        } else {
            PartnerStatus::Placeholder
        },
        reporting_cadence: cadence,
        conversion_rates: rates.into(),
        region: region.into(),
        created_at: created,
        last_report_date: last_report,
    }
}

/// Demo partner organisations
#[must_use]
#[rustfmt::skip]
pub fn demo_partners() -> Vec<AdminPartner> {
    use Pillar::{Environment, HumanAid, Research};
    use ReportingCadence::{Monthly, Quarterly};
    vec![
        partner(1, "Global Forest Alliance", Environment, Quarterly,
            "5 trees per £1 | 0.1 hectares per £10", "Global", ymd(2023, 1, 15), Some(ymd(2024, 12, 1))),
        partner(2, "Ocean Clean Initiative", Environment, Monthly,
            "2 kg plastic per £1 | 1 cleanup per £50", "Global", ymd(2023, 3, 20), Some(ymd(2024, 12, 5))),
        partner(3, "Feed the Future", HumanAid, Quarterly,
            "3 meals per £1 | 1 child fed daily per £10/mo", "Africa, Asia", ymd(2023, 2, 10), Some(ymd(2024, 12, 3))),
        partner(4, "Mobile Health Network", HumanAid, Monthly,
            "1 patient per £5 | 2 vaccinations per £3", "Sub-Saharan Africa", ymd(2023, 4, 5), Some(ymd(2024, 12, 8))),
        partner(5, "OpenMed Research", Research, Quarterly,
            "10 research hours per £1 | 1 trial day per £100", "Global", ymd(2023, 5, 22), Some(ymd(2024, 11, 30))),
        partner(6, "Climate Tech Lab", Research, Quarterly,
            "1 project per £500 | 1 prototype per £2000", "Global", ymd(2023, 6, 18), Some(ymd(2024, 12, 1))),
        partner(7, "New Hope Foundation", HumanAid, Quarterly,
            "TBD - pending verification", "South America", ymd(2024, 11, 1), None),
        partner(8, "GreenTech Africa", Environment, Monthly,
            "TBD - pending verification", "East Africa", ymd(2024, 12, 1), None),
    ]
}

/// Demo monthly charges, newest first
#[must_use]
pub fn demo_payments() -> Vec<PaymentRecord> {
    [(12, 12), (11, 11), (10, 10)]
        .into_iter()
        .map(|(n, month)| PaymentRecord {
            id: format!("pay-{n}"),
            date: ymd(2024, month, 1),
            gross: 30.0,
            processing_fee: 0.87,
            platform_fee: 1.05,
            innovation_fund: 0.18,
            donation_pool: 27.9,
            status: PaymentStatus::Completed,
        })
        .collect()
}

fn batch(
    quarter: Quarter,
    year: i32,
    sent: Option<NaiveDate>,
    amounts: [f64; 6],
    notes: Option<&str>,
) -> PayoutBatch {
    let mut batch = PayoutBatch::draft(quarter, year);
    for (partner, amount) in demo_partners().into_iter().zip(amounts) {
        batch.push(Payout {
            partner_id: partner.id,
            partner_name: partner.name,
            pillar: partner.pillar,
            amount,
            notes: notes.map(str::to_owned),
        });
    }
    if let Some(date) = sent {
        batch.mark_sent(date);
        batch.proof_url = Some(format!("/proof/{}-{year}.pdf", quarter.to_string().to_lowercase()));
    }
    batch
}

/// Demo payout batches: two sent quarters and one draft
#[must_use]
#[rustfmt::skip]
pub fn demo_batches() -> Vec<PayoutBatch> {
    vec![
        batch(Quarter::Q4, 2024, Some(ymd(2024, 12, 31)),
            [20000.0, 18750.0, 25000.0, 21500.0, 16000.0, 15000.0], None),
        batch(Quarter::Q3, 2024, Some(ymd(2024, 9, 30)),
            [17000.0, 16480.0, 21000.0, 19176.0, 14000.0, 12784.0], None),
        batch(Quarter::Q1, 2025, None,
            [4650.0, 4650.0, 4884.0, 4883.0, 4416.0, 4417.0], Some("Partial - quarter in progress")),
    ]
}

fn impact(pillar: Pillar, amount: f64, text: &str) -> PillarImpact {
    PillarImpact {
        pillar,
        amount,
        impact: text.into(),
    }
}

/// Demo published impact reports, newest first
#[must_use]
#[rustfmt::skip]
pub fn demo_impact_reports() -> Vec<ImpactReport> {
    vec![
        ImpactReport {
            id: "impact-q4-2024".into(),
            quarter: Quarter::Q4,
            year: 2024,
            date_range: "Oct 1 - Dec 31, 2024".into(),
            published_date: ymd(2025, 1, 10),
            summary: "Our strongest quarter yet, with over £116,000 distributed to 6 verified partners across all three pillars.".into(),
            highlights: vec![
                "250,000 trees planted across 3 continents".into(),
                "15 tonnes of ocean plastic removed".into(),
                "75,000 children fed daily through school meal programs".into(),
                "12,000 patients treated via mobile health clinics".into(),
            ],
            total_donated: 116_250.0,
            total_partners: 6,
            pillar_breakdown: vec![
                impact(Pillar::Environment, 38_750.0,
                    "Environmental partners reported 250,000 trees planted and 15 tonnes of plastic removed."),
                impact(Pillar::HumanAid, 46_500.0,
                    "Human aid partners expanded programs to serve 75,000 children and 12,000 patients."),
                impact(Pillar::Research, 31_000.0,
                    "Research partners published 3 peer-reviewed papers and advanced 2 clinical trials."),
            ],
        },
        ImpactReport {
            id: "impact-q3-2024".into(),
            quarter: Quarter::Q3,
            year: 2024,
            date_range: "Jul 1 - Sep 30, 2024".into(),
            published_date: ymd(2024, 10, 10),
            summary: "Strong growth quarter with new partner onboarding and expanded reach in all pillars.".into(),
            highlights: vec![
                "210,000 trees planted through reforestation programs".into(),
                "12 tonnes of ocean plastic removed".into(),
                "60,000 children fed daily".into(),
                "10,000 patients treated".into(),
            ],
            total_donated: 100_440.0,
            total_partners: 6,
            pillar_breakdown: vec![
                impact(Pillar::Environment, 33_480.0,
                    "Reforestation and ocean cleanup programs exceeded targets by 15%."),
                impact(Pillar::HumanAid, 40_176.0, "School meal programs expanded to 5 new regions."),
                impact(Pillar::Research, 26_784.0, "OpenMed published breakthrough findings on malaria treatment."),
            ],
        },
    ]
}

/// Demo donor impact figures
#[must_use]
pub fn demo_impact_metrics() -> Vec<ImpactMetric> {
    [
        ("Trees Planted", 1250.0, "trees", Pillar::Environment),
        ("Ocean Plastic Removed", 840.0, "kg", Pillar::Environment),
        ("Meals Provided", 2790.0, "meals", Pillar::HumanAid),
        ("Patients Treated", 186.0, "people", Pillar::HumanAid),
        ("Research Hours Funded", 2790.0, "hours", Pillar::Research),
    ]
    .into_iter()
    .map(|(label, value, unit, pillar)| ImpactMetric {
        label: label.into(),
        value,
        unit: unit.into(),
        pillar,
        estimated: true,
    })
    .collect()
}
