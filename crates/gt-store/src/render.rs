//! Plain-text documents: payment receipts and quarterly payout reports
//!
//! Both implement [`Display`]; callers write the text wherever they like and
//! use the `file_name` for downloads.

use crate::records::{PaymentRecord, PayoutBatch};
use gt_core::money::{format_gbp, format_gbp_grouped, format_rate};
use gt_core::FeeSchedule;
use std::fmt::{self, Display, Formatter};

const SITE_URL: &str = "https://givetransparent.org";

/// Receipt for one monthly charge
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    payment: &'a PaymentRecord,
    schedule: &'a FeeSchedule,
    user_name: &'a str,
    plan_name: &'a str,
}

impl<'a> Receipt<'a> {
    /// Receipt for `payment`, labelling fees with `schedule`'s rates
    #[must_use]
    pub fn new(payment: &'a PaymentRecord, schedule: &'a FeeSchedule) -> Self {
        Self {
            payment,
            schedule,
            user_name: "Donor",
            plan_name: "Monthly plan",
        }
    }

    /// With the donor's name
    #[inline]
    #[must_use]
    pub fn with_user_name(mut self, user_name: &'a str) -> Self {
        self.user_name = user_name;
        self
    }

    /// With the plan's display name
    #[inline]
    #[must_use]
    pub fn with_plan_name(mut self, plan_name: &'a str) -> Self {
        self.plan_name = plan_name;
        self
    }

    /// Download name
    #[must_use]
    pub fn file_name(&self) -> String {
        self.payment.receipt_file_name()
    }
}

impl Display for Receipt<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let p = self.payment;
        let s = self.schedule;
        writeln!(f, "GIVETRANSPARENT PAYMENT RECEIPT")?;
        writeln!(f, "================================")?;
        writeln!(f)?;
        writeln!(f, "Receipt ID: {}", p.id)?;
        writeln!(f, "Date: {}", p.date.format("%-d %B %Y"))?;
        writeln!(f, "User: {}", self.user_name)?;
        writeln!(f, "Plan: {}", self.plan_name)?;
        writeln!(f)?;
        writeln!(f, "PAYMENT BREAKDOWN")?;
        writeln!(f, "-----------------")?;
        writeln!(f, "Gross Amount:        {}", format_gbp(p.gross))?;
        writeln!(f)?;
        writeln!(f, "Fees:")?;
        for (label, rate, fee) in [
            ("Processing Fee", s.processing_rate, p.processing_fee),
            ("Platform Fee", s.platform_rate, p.platform_fee),
            ("Innovation Fund", s.innovation_rate, p.innovation_fund),
        ] {
            writeln!(f, "  {label} ({}): {}", format_rate(rate), format_gbp(fee))?;
        }
        writeln!(f, "  Total Fees:        {}", format_gbp(p.total_fees()))?;
        writeln!(f)?;
        writeln!(f, "Donation Pool:       {}", format_gbp(p.donation_pool))?;
        writeln!(f)?;
        writeln!(
            f,
            "This amount will be distributed to verified partners at the end of the quarter."
        )?;
        writeln!(f)?;
        writeln!(f, "Thank you for your transparent giving!")?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f, "GiveTransparent")?;
        writeln!(f, "{SITE_URL}")?;
        write!(f, "support@givetransparent.org")
    }
}

/// Quarterly payout report for one batch
#[derive(Debug, Clone, Copy)]
pub struct QuarterReport<'a> {
    batch: &'a PayoutBatch,
}

impl<'a> QuarterReport<'a> {
    /// Report on `batch`
    #[inline]
    #[must_use]
    pub fn new(batch: &'a PayoutBatch) -> Self {
        Self { batch }
    }

    /// Download name
    #[must_use]
    pub fn file_name(&self) -> String {
        self.batch.report_file_name()
    }
}

impl Display for QuarterReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let b = self.batch;
        let total = format_gbp_grouped(b.total_amount);
        writeln!(f, "GIVETRANSPARENT QUARTERLY PAYOUT REPORT")?;
        writeln!(f, "========================================")?;
        writeln!(f)?;
        writeln!(f, "Quarter: {} {}", b.quarter, b.year)?;
        writeln!(f, "Total Distributed: {total}")?;
        if !b.is_sent() {
            writeln!(f, "Status: DRAFT (not yet sent)")?;
        }
        writeln!(f)?;
        writeln!(f, "PARTNER ALLOCATIONS")?;
        writeln!(f, "-------------------")?;
        for (i, payout) in b.payouts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f)?;
            writeln!(f, "{} ({})", payout.partner_name, payout.pillar.info().name)?;
            write!(f, "  Amount: {}", format_gbp_grouped(payout.amount))?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "TOTAL: {total}")?;
        writeln!(f)?;
        writeln!(f, "PROOF & RECEIPTS")?;
        writeln!(f, "----------------")?;
        if let Some(date) = b.date_sent {
            writeln!(
                f,
                "All partner payouts were completed via bank transfer on {}.",
                date.format("%-d %B %Y")
            )?;
        } else {
            writeln!(f, "Partner payouts for this quarter have not been sent yet.")?;
        }
        if let Some(url) = &b.proof_url {
            writeln!(f, "Transfer proof: {url}")?;
        }
        writeln!(f, "For verification questions, contact: transparency@givetransparent.org")?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f, "This is an official GiveTransparent transparency report.")?;
        writeln!(f)?;
        writeln!(f, "GiveTransparent")?;
        write!(f, "{SITE_URL}")
    }
}
