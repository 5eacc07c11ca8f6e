//! GiveTransparent donation core
//!
//! Pure computations behind the donation-split control.
//!
//! # Core Concepts
//!
//! - [`FeeSchedule`]: gross amount -> processing, platform and innovation fees
//!   plus the donation pool
//! - [`Allocation`]: three pillar percentages that always total 100
//! - [`DonationPlan`]: gross amount and allocation, edited by transitions
//! - [`PlanPreview`]: per-pillar amounts of the donation pool
//!
//! # Example
//!
//! ```rust
//! use gt_core::{DonationPlan, FeeSchedule, Pillar, PlanPreview};
//!
//! let plan = DonationPlan::default().set_percent(Pillar::Environment, 20);
//! assert_eq!(plan.allocation().percents(), [20, 47, 33]);
//!
//! let preview = PlanPreview::compute(&plan, &FeeSchedule::default());
//! assert!((preview.fees.donation_pool - 27.9).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod allocation;
pub mod error;
pub mod fees;
pub mod input;
pub mod money;
pub mod pillar;
pub mod plan;
pub mod preview;

// Re-exports
pub use allocation::{rebalance, Allocation, AllocationStatus, PercentTriple, DEFAULT_SPLIT};
pub use error::{AllocationError, FeeError, LimitsError, PillarParseError};
pub use fees::{
    compute_fee_breakdown, FeeBreakdown, FeeSchedule, INNOVATION_FUND_RATE, PLATFORM_FEE_RATE,
    PROCESSING_FEE_RATE,
};
pub use pillar::{Pillar, PillarColor, PillarIcon, PillarInfo};
pub use plan::{DonationPlan, PlanLimits, DEFAULT_AMOUNT};
pub use preview::{pillar_amount, PillarShare, PlanPreview};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
