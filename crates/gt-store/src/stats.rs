//! All-time statistics derived from stored records

use crate::error::StoreResult;
use crate::records::{PaymentRecord, PayoutBatch};
use crate::repository::Repository;
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};

/// Lifetime totals shown on the donor dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllTimeStats {
    /// Sum of donation pools across all payments
    pub total_donated: f64,
    /// Sum of the three fee lines across all payments
    pub total_fees: f64,
    /// Sum of sent payout batch totals
    pub total_sent_to_partners: f64,
    /// Number of sent payout batches
    pub quarters_count: usize,
}

impl AllTimeStats {
    /// Fold payments and batches into lifetime totals
    ///
    /// Draft batches are ignored; only money that left counts as sent.
    #[must_use]
    pub fn from_records(payments: &[PaymentRecord], batches: &[PayoutBatch]) -> Self {
        let sent = batches.iter().filter(|b| b.is_sent());
        Self {
            total_donated: payments.iter().map(|p| p.donation_pool).sum(),
            total_fees: payments.iter().map(PaymentRecord::total_fees).sum(),
            total_sent_to_partners: sent.clone().map(|b| b.total_amount).sum(),
            quarters_count: sent.count(),
        }
    }

    /// Compute from whatever the store holds
    ///
    /// # Errors
    /// Backend failures.
    pub fn load(store: &dyn RecordStore) -> StoreResult<Self> {
        let payments = Repository::<PaymentRecord>::new(store).list()?;
        let batches = Repository::<PayoutBatch>::new(store).list()?;
        Ok(Self::from_records(&payments, &batches))
    }
}
