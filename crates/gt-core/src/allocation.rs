//! Three-way percentage allocation
//!
//! [`Allocation`] holds the Environment / Human Aid / Research split of a
//! donation pool. Every value of the type sums to exactly 100; edits go
//! through [`Allocation::rebalance`], which moves one pillar and shares the
//! remainder between the other two in proportion to their previous values.

use crate::error::AllocationError;
use crate::input::{clamp_percent, normalize_percent_text, MAX_PERCENT};
use crate::pillar::Pillar;
use serde::{Deserialize, Serialize};

/// Default split for new plans (40 / 35 / 25)
pub const DEFAULT_SPLIT: [u8; 3] = [40, 35, 25];

/// Percentages per pillar, guaranteed to total 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PercentTriple", into = "PercentTriple")]
pub struct Allocation {
    percents: [u8; 3],
}

impl Allocation {
    /// Build from three percentages
    ///
    /// # Errors
    /// - [`AllocationError::PercentOutOfRange`] if any value exceeds 100
    /// - [`AllocationError::InvalidTotal`] if the values do not sum to 100
    pub fn new(environment: u8, human_aid: u8, research: u8) -> Result<Self, AllocationError> {
        PercentTriple::new(environment.into(), human_aid.into(), research.into()).try_into()
    }

    /// Everything assigned to one pillar
    #[inline]
    #[must_use]
    pub fn all_to(pillar: Pillar) -> Self {
        let mut percents = [0; 3];
        percents[pillar.index()] = MAX_PERCENT;
        Self { percents }
    }

    /// Percentage for `pillar`
    #[inline]
    #[must_use]
    pub fn get(&self, pillar: Pillar) -> u8 {
        self.percents[pillar.index()]
    }

    /// Environment percentage
    #[inline]
    #[must_use]
    pub fn environment(&self) -> u8 {
        self.get(Pillar::Environment)
    }

    /// Human aid percentage
    #[inline]
    #[must_use]
    pub fn human_aid(&self) -> u8 {
        self.get(Pillar::HumanAid)
    }

    /// Research percentage
    #[inline]
    #[must_use]
    pub fn research(&self) -> u8 {
        self.get(Pillar::Research)
    }

    /// Percentages in canonical pillar order
    #[inline]
    #[must_use]
    pub fn percents(&self) -> [u8; 3] {
        self.percents
    }

    /// Iterate `(pillar, percent)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, u8)> + '_ {
        Pillar::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Set one pillar and redistribute the rest
    ///
    /// `requested` is clamped to `0..=100`. The first of the two untouched
    /// pillars (see [`Pillar::others`]) receives the remainder scaled by its
    /// share of the untouched total, rounded half up; the second receives
    /// whatever is left so the sum stays exactly 100. When both untouched
    /// pillars are at 0 the first one receives the full remainder.
    #[must_use]
    pub fn rebalance(self, pillar: Pillar, requested: i64) -> Self {
        let value = clamp_percent(requested);
        let remaining = MAX_PERCENT - value;
        let (first, second) = pillar.others();
        let new_first = proportional_share(remaining, self.get(first), self.get(second));

        let mut percents = self.percents;
        percents[pillar.index()] = value;
        percents[first.index()] = new_first;
        percents[second.index()] = remaining - new_first;

        let next = Self { percents };
        tracing::debug!(
            %pillar,
            requested,
            value,
            from = ?self.percents,
            to = ?next.percents,
            "rebalanced allocation"
        );
        next
    }

    /// Apply a text-box edit: parse, clamp, then rebalance
    ///
    /// Unreadable text counts as 0.
    #[must_use]
    pub fn rebalance_text(self, pillar: Pillar, text: &str) -> Self {
        self.rebalance(pillar, i64::from(normalize_percent_text(text)))
    }
}

impl Default for Allocation {
    fn default() -> Self {
        Self {
            percents: DEFAULT_SPLIT,
        }
    }
}

impl TryFrom<PercentTriple> for Allocation {
    type Error = AllocationError;

    fn try_from(triple: PercentTriple) -> Result<Self, Self::Error> {
        let mut percents = [0u8; 3];
        for (pillar, value) in triple.iter() {
            percents[pillar.index()] = u8::try_from(value)
                .ok()
                .filter(|v| *v <= MAX_PERCENT)
                .ok_or(AllocationError::PercentOutOfRange { pillar, value })?;
        }
        match triple.status() {
            AllocationStatus::Balanced => Ok(Self { percents }),
            AllocationStatus::Unbalanced { total } => Err(AllocationError::InvalidTotal { total }),
        }
    }
}

impl From<Allocation> for PercentTriple {
    fn from(allocation: Allocation) -> Self {
        let [environment, human_aid, research] = allocation.percents;
        Self::new(environment.into(), human_aid.into(), research.into())
    }
}

/// Rebalance `current` after `changed` was set to `requested`
#[inline]
#[must_use]
pub fn rebalance(current: Allocation, changed: Pillar, requested: i64) -> Allocation {
    current.rebalance(changed, requested)
}

/// `round(remaining * first / (first + second))`, rounding half up
///
/// Computed on integers so ties resolve the same way on every platform.
/// A zero denominator is treated as a ratio of 1.
fn proportional_share(remaining: u8, first: u8, second: u8) -> u8 {
    let whole = u32::from(first) + u32::from(second);
    if whole == 0 {
        return remaining;
    }
    let scaled = 2 * u32::from(remaining) * u32::from(first) + whole;
    // first <= whole, so the quotient never exceeds remaining.
    u8::try_from(scaled / (2 * whole)).unwrap_or(remaining)
}

/// Unchecked percentages, e.g. straight from a form or a stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentTriple {
    /// Environment percentage
    #[serde(rename = "environmentPercent")]
    pub environment: u32,
    /// Human aid percentage
    #[serde(rename = "humanAidPercent")]
    pub human_aid: u32,
    /// Research percentage
    #[serde(rename = "researchPercent")]
    pub research: u32,
}

impl PercentTriple {
    /// Create from raw values
    #[inline]
    #[must_use]
    pub const fn new(environment: u32, human_aid: u32, research: u32) -> Self {
        Self {
            environment,
            human_aid,
            research,
        }
    }

    /// Iterate `(pillar, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, u32)> {
        [
            (Pillar::Environment, self.environment),
            (Pillar::HumanAid, self.human_aid),
            (Pillar::Research, self.research),
        ]
        .into_iter()
    }

    /// Sum of the three values
    #[inline]
    #[must_use]
    pub fn total(&self) -> u32 {
        self.environment
            .saturating_add(self.human_aid)
            .saturating_add(self.research)
    }

    /// Whether the values total 100
    #[inline]
    #[must_use]
    pub fn status(&self) -> AllocationStatus {
        AllocationStatus::from_total(self.total())
    }
}

/// Total indicator shown under the splitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationStatus {
    /// Exactly 100%
    Balanced,
    /// Anything else; must be flagged to the donor
    Unbalanced {
        /// Actual total
        total: u32,
    },
}

impl AllocationStatus {
    /// Classify a total
    #[inline]
    #[must_use]
    pub fn from_total(total: u32) -> Self {
        if total == u32::from(MAX_PERCENT) {
            Self::Balanced
        } else {
            Self::Unbalanced { total }
        }
    }

    /// Whether the total is exactly 100
    #[inline]
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }

    /// Indicator text
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Balanced => format!("Total: {MAX_PERCENT}% ✓"),
            Self::Unbalanced { total } => format!("Total: {total}% (must equal 100%)"),
        }
    }
}
