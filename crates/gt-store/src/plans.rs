//! Donor plan persistence keyed by user id

use crate::error::{StoreError, StoreResult};
use crate::store::RecordStore;
use gt_core::{Allocation, DonationPlan, PercentTriple};
use serde::Deserialize;

/// Collection holding donor plans
pub const PLANS_COLLECTION: &str = "gt_plans";

/// Plan as found in storage, before the 100% check
#[derive(Debug, Deserialize)]
struct StoredPlan {
    amount: f64,
    #[serde(flatten)]
    percents: PercentTriple,
}

/// Saves and loads each donor's plan
#[derive(Debug, Clone, Copy)]
pub struct PlanStore<'s> {
    store: &'s dyn RecordStore,
}

impl<'s> PlanStore<'s> {
    /// Bind to a store
    #[inline]
    #[must_use]
    pub fn new(store: &'s dyn RecordStore) -> Self {
        Self { store }
    }

    /// Persist `plan` for `user_id`, replacing any previous plan
    ///
    /// # Errors
    /// Serialization or backend failures.
    pub fn save(&self, user_id: &str, plan: &DonationPlan) -> StoreResult<()> {
        let value = serde_json::to_value(plan)?;
        self.store.put(PLANS_COLLECTION, user_id, value)
    }

    /// Load the plan saved for `user_id`
    ///
    /// # Errors
    /// [`StoreError::InvalidPlan`] when the stored percentages do not form
    /// a valid allocation, [`StoreError::Serialization`] when the record is
    /// malformed.
    pub fn load(&self, user_id: &str) -> StoreResult<Option<DonationPlan>> {
        let Some(value) = self.store.get(PLANS_COLLECTION, user_id)? else {
            return Ok(None);
        };
        let stored: StoredPlan = serde_json::from_value(value)?;
        let allocation = Allocation::try_from(stored.percents)?;
        Ok(Some(DonationPlan::new(stored.amount, allocation)))
    }

    /// Load the saved plan, or the default plan when none exists
    ///
    /// # Errors
    /// As [`PlanStore::load`].
    pub fn load_or_default(&self, user_id: &str) -> StoreResult<DonationPlan> {
        Ok(self.load(user_id)?.unwrap_or_default())
    }

    /// Forget the plan saved for `user_id`
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when nothing was saved.
    pub fn remove(&self, user_id: &str) -> StoreResult<()> {
        if self.store.delete(PLANS_COLLECTION, user_id)? {
            Ok(())
        } else {
            Err(StoreError::not_found(PLANS_COLLECTION, user_id))
        }
    }
}
