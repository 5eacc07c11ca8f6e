//! Error types for the donation core
//!
//! Edits coming from sliders and text boxes never fail; they are clamped or
//! normalised instead. The errors here are raised only at boundaries:
//! - Fee schedules built from configuration
//! - Gross amounts checked before display
//! - Allocations rebuilt from stored data
//! - Slider bounds read from configuration

use crate::pillar::Pillar;

/// Fee schedule and amount errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeeError {
    /// Gross amount is negative or not finite
    #[error("invalid gross amount: {0}")]
    InvalidAmount(f64),

    /// A single rate is negative or not finite
    #[error("invalid {name} rate: {rate}")]
    InvalidRate {
        /// Which rate was rejected
        name: &'static str,
        /// The offending value
        rate: f64,
    },

    /// Rates would consume more than the whole gross amount
    #[error("fee rates sum to {total}, which exceeds the gross amount")]
    RatesExceedGross {
        /// Sum of all three rates
        total: f64,
    },
}

/// Allocation construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    /// Percentages do not add up to exactly 100
    #[error("allocation must total 100%, got {total}%")]
    InvalidTotal {
        /// Actual sum of the three percentages
        total: u32,
    },

    /// A single percentage lies outside 0..=100
    #[error("{pillar} percentage out of range: {value}")]
    PercentOutOfRange {
        /// Pillar holding the bad value
        pillar: Pillar,
        /// The offending value
        value: u32,
    },
}

/// Unknown pillar name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pillar: {0} (expected environment, human-aid or research)")]
pub struct PillarParseError(pub String);

/// Amount slider bounds errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LimitsError {
    /// A bound or the step is negative or not finite
    #[error("invalid {name}: {value}")]
    InvalidValue {
        /// Which field was rejected
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Lower bound lies above the upper bound
    #[error("min_amount {min} exceeds max_amount {max}")]
    Inverted {
        /// Configured lower bound
        min: f64,
        /// Configured upper bound
        max: f64,
    },
}
