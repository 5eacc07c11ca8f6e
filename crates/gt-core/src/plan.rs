//! Donor plans
//!
//! A [`DonationPlan`] is the monthly gross amount plus its [`Allocation`].
//! Plans are edited through explicit transitions that return the next plan.

use crate::allocation::Allocation;
use crate::error::LimitsError;
use crate::input::clamp_amount;
use crate::pillar::Pillar;
use serde::{Deserialize, Deserializer, Serialize};

/// Default monthly amount for new plans, in pounds
pub const DEFAULT_AMOUNT: f64 = 30.0;

/// Monthly donation plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonationPlan {
    /// Gross monthly amount in pounds, never negative
    #[serde(deserialize_with = "deserialize_amount")]
    amount: f64,
    /// Split of the donation pool
    #[serde(flatten)]
    allocation: Allocation,
}

impl DonationPlan {
    /// Create a plan; the amount is clamped to be non-negative
    #[must_use]
    pub fn new(amount: f64, allocation: Allocation) -> Self {
        Self {
            amount: clamp_amount(amount),
            allocation,
        }
    }

    /// Gross monthly amount
    #[inline]
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Current split
    #[inline]
    #[must_use]
    pub fn allocation(&self) -> Allocation {
        self.allocation
    }

    /// Percentage for one pillar
    #[inline]
    #[must_use]
    pub fn percent(&self, pillar: Pillar) -> u8 {
        self.allocation.get(pillar)
    }

    /// Replace the gross amount
    #[must_use]
    pub fn with_amount(self, amount: f64) -> Self {
        let clamped = clamp_amount(amount);
        if clamped.to_bits() != amount.to_bits() {
            tracing::debug!(requested = amount, clamped, "clamped plan amount");
        }
        Self {
            amount: clamped,
            ..self
        }
    }

    /// Replace the split wholesale
    #[inline]
    #[must_use]
    pub fn with_allocation(self, allocation: Allocation) -> Self {
        Self { allocation, ..self }
    }

    /// Slider edit on one pillar
    #[inline]
    #[must_use]
    pub fn set_percent(self, pillar: Pillar, value: i64) -> Self {
        self.with_allocation(self.allocation.rebalance(pillar, value))
    }

    /// Text-box edit on one pillar
    #[inline]
    #[must_use]
    pub fn set_percent_text(self, pillar: Pillar, text: &str) -> Self {
        self.with_allocation(self.allocation.rebalance_text(pillar, text))
    }
}

impl Default for DonationPlan {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            allocation: Allocation::default(),
        }
    }
}

fn deserialize_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_amount)
}

/// Bounds of the monthly amount slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanLimits {
    /// Smallest selectable amount
    pub min_amount: f64,
    /// Largest selectable amount
    pub max_amount: f64,
    /// Slider step
    pub amount_step: f64,
}

impl PlanLimits {
    /// Check the bounds, e.g. after deserializing from a config file
    ///
    /// # Errors
    /// [`LimitsError::InvalidValue`] for a negative or non-finite field and
    /// [`LimitsError::Inverted`] when `min_amount > max_amount`.
    pub fn validate(&self) -> Result<(), LimitsError> {
        for (name, value) in [
            ("min_amount", self.min_amount),
            ("max_amount", self.max_amount),
            ("amount_step", self.amount_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LimitsError::InvalidValue { name, value });
            }
        }
        if self.min_amount > self.max_amount {
            return Err(LimitsError::Inverted {
                min: self.min_amount,
                max: self.max_amount,
            });
        }
        Ok(())
    }

    /// Clamp into `[min_amount, max_amount]` and snap to the nearest step
    ///
    /// Steps are counted from `min_amount`. A non-positive or non-finite step
    /// disables snapping. Never panics, even on limits that fail
    /// [`PlanLimits::validate`]; `max_amount` wins when the bounds cross.
    #[must_use]
    pub fn snap_amount(&self, amount: f64) -> f64 {
        // f64::max/min skip NaN operands, unlike f64::clamp
        let clamped = clamp_amount(amount).max(self.min_amount).min(self.max_amount);
        if !self.amount_step.is_finite() || self.amount_step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min_amount) / self.amount_step).round();
        let snapped = (self.min_amount + steps * self.amount_step).min(self.max_amount);
        if snapped.is_finite() {
            snapped
        } else {
            clamped
        }
    }

    /// Whether `amount` is reachable with the slider
    #[must_use]
    pub fn contains(&self, amount: f64) -> bool {
        (self.snap_amount(amount) - amount).abs() < f64::EPSILON
    }
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self {
            min_amount: 10.0,
            max_amount: 100.0,
            amount_step: 5.0,
        }
    }
}
