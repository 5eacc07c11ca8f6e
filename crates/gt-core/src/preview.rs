//! Plan preview
//!
//! Combines the fee split of a plan's gross amount with its allocation to
//! produce the per-pillar amounts shown next to the splitter, on receipts and
//! in reports.

use crate::allocation::Allocation;
use crate::fees::{FeeBreakdown, FeeSchedule};
use crate::money::{format_gbp, round_currency};
use crate::pillar::Pillar;
use crate::plan::DonationPlan;

/// Amount of the donation pool routed to one pillar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillarShare {
    /// Pillar receiving the share
    pub pillar: Pillar,
    /// Percentage of the pool
    pub percent: u8,
    /// Unrounded amount in pounds
    pub amount: f64,
}

impl PillarShare {
    /// Amount rounded to the penny for display
    #[inline]
    #[must_use]
    pub fn display_amount(&self) -> f64 {
        round_currency(self.amount)
    }
}

/// `donation_pool * percent / 100`
#[inline]
#[must_use]
pub fn pillar_amount(donation_pool: f64, percent: u8) -> f64 {
    donation_pool * f64::from(percent) / 100.0
}

/// Fee lines and pillar shares for one plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanPreview {
    /// Fee split of the gross amount
    pub fees: FeeBreakdown,
    /// One share per pillar, canonical order
    pub shares: [PillarShare; 3],
}

impl PlanPreview {
    /// Preview `plan` under `schedule`
    #[must_use]
    pub fn compute(plan: &DonationPlan, schedule: &FeeSchedule) -> Self {
        Self::from_parts(schedule.split(plan.amount()), plan.allocation())
    }

    /// Preview from an existing fee split
    #[must_use]
    pub fn from_parts(fees: FeeBreakdown, allocation: Allocation) -> Self {
        let shares = Pillar::ALL.map(|pillar| {
            let percent = allocation.get(pillar);
            PillarShare {
                pillar,
                percent,
                amount: pillar_amount(fees.donation_pool, percent),
            }
        });
        Self { fees, shares }
    }

    /// Share for one pillar
    #[inline]
    #[must_use]
    pub fn share(&self, pillar: Pillar) -> &PillarShare {
        &self.shares[pillar.index()]
    }

    /// Sum of the unrounded shares; equals the pool up to float error
    #[must_use]
    pub fn shares_total(&self) -> f64 {
        self.shares.iter().map(|s| s.amount).sum()
    }

    /// Display lines: one per pillar, then the three fee lines
    #[must_use]
    pub fn lines(&self) -> Vec<(String, String)> {
        let mut lines: Vec<(String, String)> = self
            .shares
            .iter()
            .map(|s| {
                (
                    format!("{} ({}%)", s.pillar.info().name, s.percent),
                    format_gbp(s.amount),
                )
            })
            .collect();
        lines.push(("Processing fee".to_string(), format_gbp(self.fees.processing_fee)));
        lines.push(("Platform fee".to_string(), format_gbp(self.fees.platform_fee)));
        lines.push(("Innovation fund".to_string(), format_gbp(self.fees.innovation_fee)));
        lines
    }
}
