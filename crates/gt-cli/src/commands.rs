//! Command implementations
//!
//! Each command takes typed arguments and returns the text to print, so the
//! binary only parses arguments and writes output.

use crate::config::CliConfig;
use anyhow::{bail, Context};
use gt_core::money::{format_gbp, format_gbp_grouped};
use gt_core::{Allocation, DonationPlan, PercentTriple, Pillar, PlanPreview};
use gt_store::{
    AllTimeStats, PaymentRecord, PayoutBatch, QuarterReport, Receipt, RecordStore, Repository,
};
use std::fmt::Write;

/// A percentage edit: pillar plus the raw text typed for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentEdit {
    /// Pillar being edited
    pub pillar: Pillar,
    /// Raw input, normalised like a text field
    pub text: String,
}

impl std::str::FromStr for PercentEdit {
    type Err = anyhow::Error;

    /// `environment=20`, `human=abc`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pillar, text) = s
            .split_once('=')
            .with_context(|| format!("expected <pillar>=<percent>, got {s:?}"))?;
        Ok(Self {
            pillar: pillar.trim().parse()?,
            text: text.to_owned(),
        })
    }
}

/// Fee lines and pillar amounts for a plan
///
/// Starts from the default plan at `amount`, applies `edits` in order and
/// renders the preview. With `snap`, the amount is first fitted to the
/// configured slider bounds.
///
/// # Errors
/// A negative or non-finite amount.
pub fn preview(
    config: &CliConfig,
    amount: f64,
    snap: bool,
    edits: &[PercentEdit],
) -> anyhow::Result<String> {
    let amount = if snap { config.limits.snap_amount(amount) } else { amount };
    config
        .fees
        .try_split(amount)
        .context("cannot preview this amount")?;

    let plan = edits
        .iter()
        .fold(DonationPlan::default().with_amount(amount), |plan, edit| {
            plan.set_percent_text(edit.pillar, &edit.text)
        });
    let preview = PlanPreview::compute(&plan, &config.fees);

    let mut out = String::new();
    writeln!(out, "Monthly amount: {}", format_gbp(plan.amount()))?;
    if !config.limits.contains(plan.amount()) {
        writeln!(
            out,
            "(outside the {}-{} slider range)",
            format_gbp(config.limits.min_amount),
            format_gbp(config.limits.max_amount)
        )?;
    }
    writeln!(out, "Donation pool: {}", format_gbp(preview.fees.donation_pool))?;
    for (label, value) in preview.lines() {
        writeln!(out, "  {label:<20} {value:>10}")?;
    }
    write!(out, "{}", PercentTriple::from(plan.allocation()).status().label())?;
    Ok(out)
}

/// Rebalance a triple after one pillar is edited
///
/// The starting triple must total 100. The edit text is normalised, never
/// rejected.
///
/// # Errors
/// A starting triple that is not a valid allocation.
pub fn rebalance(current: PercentTriple, edit: &PercentEdit) -> anyhow::Result<String> {
    let start = Allocation::try_from(current).context("starting split is not a valid allocation")?;
    let next = start.rebalance_text(edit.pillar, &edit.text);

    let mut out = String::new();
    for (pillar, percent) in next.iter() {
        writeln!(out, "{}={percent}", pillar.slug())?;
    }
    write!(out, "{}", PercentTriple::from(next).status().label())?;
    Ok(out)
}

/// Receipt text for a stored payment, newest when `id` is `None`
///
/// # Errors
/// Unknown payment id, or no payments at all.
pub fn receipt(
    store: &dyn RecordStore,
    config: &CliConfig,
    id: Option<&str>,
) -> anyhow::Result<String> {
    let payments = Repository::<PaymentRecord>::new(store);
    let payment = match id {
        Some(id) => payments.require(id)?,
        None => match payments.list()?.into_iter().max_by_key(|p| p.date) {
            Some(payment) => payment,
            None => bail!("no payments recorded"),
        },
    };
    let plan_name = format!("{} monthly", format_gbp(payment.gross));
    let receipt = Receipt::new(&payment, &config.fees)
        .with_user_name(&config.user_name)
        .with_plan_name(&plan_name);
    Ok(format!("# {}\n{receipt}", receipt.file_name()))
}

/// Payout report for a quarter, e.g. `("Q4", 2024)`
///
/// # Errors
/// No batch for that quarter.
pub fn report(store: &dyn RecordStore, quarter: &str, year: i32) -> anyhow::Result<String> {
    let id = format!("batch-{}-{year}", quarter.to_lowercase());
    let batch = Repository::<PayoutBatch>::new(store)
        .require(&id)
        .with_context(|| format!("no payout batch for {quarter} {year}"))?;
    let report = QuarterReport::new(&batch);
    Ok(format!("# {}\n{report}", report.file_name()))
}

/// All-time donation statistics
///
/// # Errors
/// Backend failures.
pub fn stats(store: &dyn RecordStore) -> anyhow::Result<String> {
    let stats = AllTimeStats::load(store)?;
    let mut out = String::new();
    writeln!(out, "Total donated:          {}", format_gbp_grouped(stats.total_donated))?;
    writeln!(out, "Total fees:             {}", format_gbp_grouped(stats.total_fees))?;
    writeln!(out, "Sent to partners:       {}", format_gbp_grouped(stats.total_sent_to_partners))?;
    write!(out, "Quarters paid out:      {}", stats.quarters_count)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edit(s: &str) -> PercentEdit {
        s.parse().unwrap()
    }

    #[test]
    fn parse_edit() {
        assert_eq!(
            edit("human=47"),
            PercentEdit {
                pillar: Pillar::HumanAid,
                text: "47".into()
            }
        );
        assert_eq!(edit("research=").text, "");
        assert!("research".parse::<PercentEdit>().is_err());
        assert!("oceans=5".parse::<PercentEdit>().is_err());
    }

    #[test]
    fn rebalance_output() {
        let out = rebalance(PercentTriple::new(40, 35, 25), &edit("environment=20")).unwrap();
        assert_eq!(out, "environment=20\nhuman-aid=47\nresearch=33\nTotal: 100% ✓");
    }

    #[test]
    fn rebalance_rejects_bad_start() {
        assert!(rebalance(PercentTriple::new(40, 40, 40), &edit("env=10")).is_err());
    }

    #[test]
    fn preview_default_plan() {
        let out = preview(&CliConfig::default(), 30.0, false, &[]).unwrap();
        assert!(out.contains("Donation pool: £27.90"));
        assert!(out.contains("Environment (40%)"));
        assert!(out.contains("£11.16"));
        assert!(out.ends_with("Total: 100% ✓"));
    }

    #[test]
    fn preview_snaps_and_flags_range() {
        let config = CliConfig::default();
        let snapped = preview(&config, 33.0, true, &[]).unwrap();
        assert!(snapped.starts_with("Monthly amount: £35.00\n"));
        let unsnapped = preview(&config, 250.0, false, &[]).unwrap();
        assert!(unsnapped.contains("outside the £10.00-£100.00 slider range"));
    }

    #[test]
    fn preview_rejects_negative_amount() {
        assert!(preview(&CliConfig::default(), -5.0, false, &[]).is_err());
    }
}
