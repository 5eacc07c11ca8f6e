//! Domain records kept in the store
//!
//! - [`PaymentRecord`]: one monthly charge with its fee lines
//! - [`PayoutBatch`]: a quarter's transfers to partners
//! - [`AdminPartner`]: partner organisations managed by admins
//! - [`ImpactReport`], [`ImpactMetric`]: published impact figures

use crate::repository::Record;
use chrono::NaiveDate;
use gt_core::money::round_currency;
use gt_core::{FeeBreakdown, FeeSchedule, Pillar};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use ulid::Ulid;

/// Fresh record id with a readable prefix, e.g. `pay-01j9...`
#[must_use]
pub fn new_record_id(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new().to_string().to_lowercase())
}

/// Outcome of a monthly charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Charged successfully
    Completed,
    /// Awaiting settlement
    Pending,
    /// Charge declined
    Failed,
}

/// One monthly charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// Record id
    pub id: String,
    /// Charge date
    pub date: NaiveDate,
    /// Amount charged
    pub gross: f64,
    /// Card processing fee
    pub processing_fee: f64,
    /// Platform operations fee
    pub platform_fee: f64,
    /// Innovation fund contribution
    pub innovation_fund: f64,
    /// Amount entering the donation pool
    pub donation_pool: f64,
    /// Charge outcome
    pub status: PaymentStatus,
}

impl PaymentRecord {
    /// Record a completed charge from its fee split
    ///
    /// Fee lines are stored rounded to the penny, as they appear on the
    /// donor's statement.
    #[must_use]
    pub fn from_breakdown(id: impl Into<String>, date: NaiveDate, fees: &FeeBreakdown) -> Self {
        Self {
            id: id.into(),
            date,
            gross: round_currency(fees.gross),
            processing_fee: round_currency(fees.processing_fee),
            platform_fee: round_currency(fees.platform_fee),
            innovation_fund: round_currency(fees.innovation_fee),
            donation_pool: round_currency(fees.donation_pool),
            status: PaymentStatus::Completed,
        }
    }

    /// Charge `gross` under `schedule` with a generated id
    #[must_use]
    pub fn charge(date: NaiveDate, gross: f64, schedule: &FeeSchedule) -> Self {
        Self::from_breakdown(new_record_id("pay"), date, &schedule.split(gross))
    }

    /// With a different status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sum of the three fee lines
    #[inline]
    #[must_use]
    pub fn total_fees(&self) -> f64 {
        self.processing_fee + self.platform_fee + self.innovation_fund
    }

    /// Download name of the rendered receipt
    #[inline]
    #[must_use]
    pub fn receipt_file_name(&self) -> String {
        format!("receipt-{}.pdf", self.id)
    }
}

impl Record for PaymentRecord {
    const COLLECTION: &'static str = "gt_payment_history";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Calendar quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    /// January to March
    Q1,
    /// April to June
    Q2,
    /// July to September
    Q3,
    /// October to December
    Q4,
}

impl Quarter {
    /// Quarter containing `date`
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        use chrono::Datelike;
        match date.month() {
            1..=3 => Self::Q1,
            4..=6 => Self::Q2,
            7..=9 => Self::Q3,
            _ => Self::Q4,
        }
    }
}

impl Display for Quarter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        };
        f.write_str(name)
    }
}

/// Whether a batch has left the building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    /// Still being assembled
    Draft,
    /// Transferred to partners
    Sent,
}

/// One partner's line in a payout batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    /// Receiving partner id
    pub partner_id: String,
    /// Receiving partner name
    pub partner_name: String,
    /// Pillar the money comes from
    pub pillar: Pillar,
    /// Amount transferred
    pub amount: f64,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A quarter's transfers to partners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutBatch {
    /// Record id
    pub id: String,
    /// Quarter covered
    pub quarter: Quarter,
    /// Year covered
    pub year: i32,
    /// Transfer date, once sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_sent: Option<NaiveDate>,
    /// Declared batch total
    pub total_amount: f64,
    /// Draft or sent
    pub status: BatchStatus,
    /// Link to transfer proof
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
    /// Partner lines
    pub payouts: Vec<Payout>,
}

impl PayoutBatch {
    /// Empty draft batch for a quarter
    #[must_use]
    pub fn draft(quarter: Quarter, year: i32) -> Self {
        Self {
            id: format!("batch-{}-{year}", quarter.to_string().to_lowercase()),
            quarter,
            year,
            date_sent: None,
            total_amount: 0.0,
            status: BatchStatus::Draft,
            proof_url: None,
            payouts: Vec::new(),
        }
    }

    /// Add a partner line and grow the declared total
    pub fn push(&mut self, payout: Payout) {
        self.total_amount += payout.amount;
        self.payouts.push(payout);
    }

    /// Whether the batch was sent
    #[inline]
    #[must_use]
    pub fn is_sent(&self) -> bool {
        self.status == BatchStatus::Sent
    }

    /// Mark as transferred on `date`
    pub fn mark_sent(&mut self, date: NaiveDate) {
        self.status = BatchStatus::Sent;
        self.date_sent = Some(date);
    }

    /// Sum of the partner lines
    #[must_use]
    pub fn payouts_total(&self) -> f64 {
        self.payouts.iter().map(|p| p.amount).sum()
    }

    /// Per-pillar sums of the partner lines, canonical order
    #[must_use]
    pub fn pillar_totals(&self) -> [f64; 3] {
        let mut totals = [0.0; 3];
        for payout in &self.payouts {
            totals[payout.pillar.index()] += payout.amount;
        }
        totals
    }

    /// Download name of the rendered report
    #[inline]
    #[must_use]
    pub fn report_file_name(&self) -> String {
        format!("payout-report-{}-{}.pdf", self.quarter, self.year)
    }
}

impl Record for PayoutBatch {
    const COLLECTION: &'static str = "gt_payout_batches";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Partner lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    /// Listed, not yet vetted
    Placeholder,
    /// Vetted and receiving payouts
    Verified,
    /// No longer active
    Archived,
}

/// How often a partner reports back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingCadence {
    /// Every month
    Monthly,
    /// Every quarter
    Quarterly,
}

/// Partner organisation as seen by admins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPartner {
    /// Record id
    pub id: String,
    /// Organisation name
    pub name: String,
    /// Pillar served
    pub pillar: Pillar,
    /// Lifecycle state
    pub status: PartnerStatus,
    /// Reporting frequency
    pub reporting_cadence: ReportingCadence,
    /// Human-readable conversion rates
    pub conversion_rates: String,
    /// Operating region
    pub region: String,
    /// Onboarding date
    pub created_at: NaiveDate,
    /// Most recent report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_report_date: Option<NaiveDate>,
}

impl AdminPartner {
    /// Whether payouts may be sent to this partner
    #[inline]
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status == PartnerStatus::Verified
    }
}

impl Record for AdminPartner {
    const COLLECTION: &'static str = "gt_admin_partners";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Pillar line of an impact report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarImpact {
    /// Pillar reported on
    pub pillar: Pillar,
    /// Amount distributed
    pub amount: f64,
    /// Narrative summary
    pub impact: String,
}

/// Published quarterly impact report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    /// Record id
    pub id: String,
    /// Quarter covered
    pub quarter: Quarter,
    /// Year covered
    pub year: i32,
    /// Readable date range
    pub date_range: String,
    /// Publication date
    pub published_date: NaiveDate,
    /// Headline summary
    pub summary: String,
    /// Bullet highlights
    pub highlights: Vec<String>,
    /// Total distributed
    pub total_donated: f64,
    /// Partners funded
    pub total_partners: u32,
    /// Per-pillar lines
    pub pillar_breakdown: Vec<PillarImpact>,
}

impl ImpactReport {
    /// Sum of the per-pillar lines
    #[must_use]
    pub fn breakdown_total(&self) -> f64 {
        self.pillar_breakdown.iter().map(|p| p.amount).sum()
    }
}

impl Record for ImpactReport {
    const COLLECTION: &'static str = "gt_impact_reports";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Donor-facing impact figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactMetric {
    /// Label, unique per donor
    pub label: String,
    /// Figure
    pub value: f64,
    /// Unit of `value`
    pub unit: String,
    /// Pillar the figure belongs to
    pub pillar: Pillar,
    /// Whether the figure is an estimate
    pub estimated: bool,
}

impl Record for ImpactMetric {
    const COLLECTION: &'static str = "gt_impact_metrics";

    fn id(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_core::compute_fee_breakdown;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn payment_from_breakdown_rounds_lines() {
        let fees = compute_fee_breakdown(30.0);
        let record = PaymentRecord::from_breakdown("pay-1", date(2024, 12, 1), &fees);
        assert_eq!(record.gross, 30.0);
        assert_eq!(record.processing_fee, 0.87);
        assert_eq!(record.platform_fee, 1.05);
        assert_eq!(record.innovation_fund, 0.18);
        assert_eq!(record.donation_pool, 27.9);
        assert_eq!(record.status, PaymentStatus::Completed);
        assert_eq!(record.receipt_file_name(), "receipt-pay-1.pdf");
    }

    #[test]
    fn charge_generates_prefixed_ids() {
        let a = PaymentRecord::charge(date(2025, 1, 1), 20.0, &FeeSchedule::default());
        let b = PaymentRecord::charge(date(2025, 1, 1), 20.0, &FeeSchedule::default());
        assert!(a.id.starts_with("pay-"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn payment_json_shape() {
        let fees = compute_fee_breakdown(10.0);
        let record = PaymentRecord::from_breakdown("pay-1", date(2024, 12, 1), &fees)
            .with_status(PaymentStatus::Pending);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-12-01");
        assert_eq!(json["status"], "pending");
        assert!(json.get("processingFee").is_some());
        assert!(json.get("innovationFund").is_some());
    }

    #[test]
    fn quarter_of_date() {
        assert_eq!(Quarter::of(date(2024, 2, 29)), Quarter::Q1);
        assert_eq!(Quarter::of(date(2024, 6, 30)), Quarter::Q2);
        assert_eq!(Quarter::of(date(2024, 7, 1)), Quarter::Q3);
        assert_eq!(Quarter::of(date(2024, 12, 31)), Quarter::Q4);
    }

    #[test]
    fn batch_lifecycle() {
        let mut batch = PayoutBatch::draft(Quarter::Q1, 2025);
        assert_eq!(batch.id, "batch-q1-2025");
        batch.push(Payout {
            partner_id: "p1".into(),
            partner_name: "One".into(),
            pillar: Pillar::Environment,
            amount: 100.0,
            notes: None,
        });
        batch.push(Payout {
            partner_id: "p2".into(),
            partner_name: "Two".into(),
            pillar: Pillar::Research,
            amount: 50.0,
            notes: Some("partial".into()),
        });
        assert_eq!(batch.total_amount, 150.0);
        assert_eq!(batch.pillar_totals(), [100.0, 0.0, 50.0]);
        assert!(!batch.is_sent());

        batch.mark_sent(date(2025, 3, 31));
        assert!(batch.is_sent());
        assert_eq!(batch.date_sent, Some(date(2025, 3, 31)));
        assert_eq!(batch.report_file_name(), "payout-report-Q1-2025.pdf");
    }
}
