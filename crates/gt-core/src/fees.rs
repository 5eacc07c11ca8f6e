//! Fee splitting
//!
//! Turns a gross monthly amount into the processing fee, platform fee,
//! innovation-fund contribution and the donation pool that is distributed to
//! partners. Splitting is pure and never rounds; rounding to pennies happens
//! only when amounts are rendered (see [`crate::money`]).

use crate::error::FeeError;
use serde::{Deserialize, Serialize};

/// Card processing fee rate (2.9%)
pub const PROCESSING_FEE_RATE: f64 = 0.029;

/// Platform operations fee rate (3.5%)
pub const PLATFORM_FEE_RATE: f64 = 0.035;

/// Innovation fund rate (0.6%)
pub const INNOVATION_FUND_RATE: f64 = 0.006;

/// Rates applied to every gross amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeeSchedule {
    /// Payment processing rate
    pub processing_rate: f64,
    /// Platform operations rate
    pub platform_rate: f64,
    /// Innovation fund rate
    pub innovation_rate: f64,
}

impl FeeSchedule {
    /// Create a validated schedule
    ///
    /// # Errors
    /// Returns [`FeeError::InvalidRate`] for a negative or non-finite rate and
    /// [`FeeError::RatesExceedGross`] when the rates sum past 1.0.
    pub fn new(
        processing_rate: f64,
        platform_rate: f64,
        innovation_rate: f64,
    ) -> Result<Self, FeeError> {
        let schedule = Self {
            processing_rate,
            platform_rate,
            innovation_rate,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Check every rate, e.g. after deserializing from a config file
    ///
    /// # Errors
    /// See [`FeeSchedule::new`].
    pub fn validate(&self) -> Result<(), FeeError> {
        for (name, rate) in [
            ("processing", self.processing_rate),
            ("platform", self.platform_rate),
            ("innovation", self.innovation_rate),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(FeeError::InvalidRate { name, rate });
            }
        }
        let total = self.total_rate();
        if total > 1.0 {
            return Err(FeeError::RatesExceedGross { total });
        }
        Ok(())
    }

    /// Sum of all three rates
    #[inline]
    #[must_use]
    pub fn total_rate(&self) -> f64 {
        self.processing_rate + self.platform_rate + self.innovation_rate
    }

    /// Share of the gross amount that reaches the donation pool
    #[inline]
    #[must_use]
    pub fn pool_rate(&self) -> f64 {
        1.0 - self.total_rate()
    }

    /// Split a gross amount
    ///
    /// No validation happens here: negative or non-finite input produces
    /// negative or NaN components. Use [`FeeSchedule::try_split`] at input
    /// boundaries.
    #[must_use]
    pub fn split(&self, gross: f64) -> FeeBreakdown {
        let processing_fee = gross * self.processing_rate;
        let platform_fee = gross * self.platform_rate;
        let innovation_fee = gross * self.innovation_rate;
        FeeBreakdown {
            gross,
            processing_fee,
            platform_fee,
            innovation_fee,
            donation_pool: gross - processing_fee - platform_fee - innovation_fee,
        }
    }

    /// Split a gross amount after checking it is finite and non-negative
    ///
    /// # Errors
    /// Returns [`FeeError::InvalidAmount`] otherwise.
    pub fn try_split(&self, gross: f64) -> Result<FeeBreakdown, FeeError> {
        if !gross.is_finite() || gross < 0.0 {
            return Err(FeeError::InvalidAmount(gross));
        }
        Ok(self.split(gross))
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            processing_rate: PROCESSING_FEE_RATE,
            platform_rate: PLATFORM_FEE_RATE,
            innovation_rate: INNOVATION_FUND_RATE,
        }
    }
}

/// Gross amount split into fee lines and the donation pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    /// Amount charged to the donor
    pub gross: f64,
    /// Card processing fee
    pub processing_fee: f64,
    /// Platform operations fee
    pub platform_fee: f64,
    /// Innovation fund contribution
    pub innovation_fee: f64,
    /// Remainder distributed to partners
    pub donation_pool: f64,
}

impl FeeBreakdown {
    /// Sum of the three fee lines
    #[inline]
    #[must_use]
    pub fn total_fees(&self) -> f64 {
        self.processing_fee + self.platform_fee + self.innovation_fee
    }
}

/// Split `gross` with the default rates
#[inline]
#[must_use]
pub fn compute_fee_breakdown(gross: f64) -> FeeBreakdown {
    FeeSchedule::default().split(gross)
}
