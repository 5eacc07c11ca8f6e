//! CLI configuration loaded from TOML

use anyhow::Context;
use gt_core::{FeeSchedule, PlanLimits};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name printed on receipts when none is configured
pub const DEFAULT_USER_NAME: &str = "Demo Donor";

/// Settings for the `givetransparent` binary
///
/// ```toml
/// user_name = "Sam Taylor"
///
/// [fees]
/// processing_rate = 0.029
/// platform_rate = 0.035
/// innovation_rate = 0.006
///
/// [limits]
/// min_amount = 10.0
/// max_amount = 100.0
/// amount_step = 5.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Fee rates applied to every charge
    pub fees: FeeSchedule,
    /// Amount slider bounds
    pub limits: PlanLimits,
    /// Donor name on receipts
    pub user_name: String,
}

impl CliConfig {
    /// Parse and validate TOML text
    ///
    /// # Errors
    /// Malformed TOML, unknown keys, fee rates that are negative, non-finite
    /// or sum to more than the gross amount, and slider bounds that are
    /// negative, non-finite or inverted.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text).context("invalid configuration")?;
        config.fees.validate().context("invalid fee schedule")?;
        config.limits.validate().context("invalid amount limits")?;
        Ok(config)
    }

    /// Read a config file
    ///
    /// # Errors
    /// Unreadable file or any [`CliConfig::from_toml`] failure.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text).with_context(|| format!("in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Read `path` if given, otherwise the defaults
    ///
    /// # Errors
    /// As [`CliConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// With a different donor name
    #[inline]
    #[must_use]
    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            fees: FeeSchedule::default(),
            limits: PlanLimits::default(),
            user_name: DEFAULT_USER_NAME.to_owned(),
        }
    }
}
