//! GiveTransparent record store
//!
//! Everything that persists: the key-value [`RecordStore`], typed
//! [`Repository`] access, donation and payout records, derived statistics,
//! the admin session flag, demo seeding and plain-text documents.
//!
//! # Example
//!
//! ```rust
//! use gt_store::{seed_demo_data, AllTimeStats, MemoryStore};
//!
//! let store = MemoryStore::new();
//! seed_demo_data(&store).unwrap();
//!
//! let stats = AllTimeStats::load(&store).unwrap();
//! assert_eq!(stats.quarters_count, 2);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod plans;
pub mod records;
pub mod render;
pub mod repository;
pub mod seed;
pub mod session;
pub mod stats;
pub mod store;

// Re-exports
pub use error::{StoreError, StoreResult};
pub use plans::PlanStore;
pub use records::{
    AdminPartner, BatchStatus, ImpactMetric, ImpactReport, PartnerStatus, PaymentRecord,
    PaymentStatus, Payout, PayoutBatch, PillarImpact, Quarter, ReportingCadence,
};
pub use render::{QuarterReport, Receipt};
pub use repository::{Record, Repository};
pub use seed::{reset_to_defaults, seed_demo_data, DEMO_USER_ID};
pub use session::AdminSession;
pub use stats::AllTimeStats;
pub use store::{MemoryStore, RecordStore};
