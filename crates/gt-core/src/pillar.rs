//! Donation pillars and their display metadata
//!
//! Provides [`Pillar`], the three categories a plan's donation pool is split
//! across, and [`PillarInfo`] for presentation layers.

use crate::error::PillarParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One of the three donation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pillar {
    /// Conservation, clean energy, sustainable practices
    Environment,
    /// Food security, healthcare, education
    HumanAid,
    /// Health, climate and technology research
    Research,
}

impl Pillar {
    /// All pillars in canonical order
    pub const ALL: [Pillar; 3] = [Pillar::Environment, Pillar::HumanAid, Pillar::Research];

    /// Position within [`Pillar::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Pillar::Environment => 0,
            Pillar::HumanAid => 1,
            Pillar::Research => 2,
        }
    }

    /// Stable identifier used in storage and URLs
    #[inline]
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Pillar::Environment => "environment",
            Pillar::HumanAid => "human-aid",
            Pillar::Research => "research",
        }
    }

    /// The two pillars that absorb a change to `self`, in canonical order
    ///
    /// The first entry receives the rounded share during rebalancing, the
    /// second absorbs the remainder.
    #[inline]
    #[must_use]
    pub const fn others(self) -> (Pillar, Pillar) {
        match self {
            Pillar::Environment => (Pillar::HumanAid, Pillar::Research),
            Pillar::HumanAid => (Pillar::Environment, Pillar::Research),
            Pillar::Research => (Pillar::Environment, Pillar::HumanAid),
        }
    }

    /// Display metadata for this pillar
    #[must_use]
    pub fn info(self) -> &'static PillarInfo {
        match self {
            Pillar::Environment => &ENVIRONMENT,
            Pillar::HumanAid => &HUMAN_AID,
            Pillar::Research => &RESEARCH,
        }
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Pillar {
    type Err = PillarParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "environment" | "env" => Ok(Pillar::Environment),
            "human-aid" | "human_aid" | "humanaid" | "human" => Ok(Pillar::HumanAid),
            "research" | "res" => Ok(Pillar::Research),
            _ => Err(PillarParseError(s.to_string())),
        }
    }
}

/// Icon token understood by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillarIcon {
    /// Leaf glyph
    Leaf,
    /// Heart glyph
    Heart,
    /// Flask glyph
    FlaskConical,
}

/// Accent colour token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillarColor {
    /// Green accent
    Green,
    /// Blue accent
    Blue,
    /// Purple accent
    Purple,
}

/// Static presentation metadata for a pillar
#[derive(Debug, PartialEq, Eq)]
pub struct PillarInfo {
    /// Pillar this entry describes
    pub pillar: Pillar,
    /// Human-readable name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Accent colour
    pub color: PillarColor,
    /// Icon
    pub icon: PillarIcon,
    /// Funding goals
    pub goals: &'static [&'static str],
    /// Representative projects
    pub example_projects: &'static [&'static str],
}

static ENVIRONMENT: PillarInfo = PillarInfo {
    pillar: Pillar::Environment,
    name: "Environment",
    description: "Protecting our planet through conservation, clean energy, and sustainable practices",
    color: PillarColor::Green,
    icon: PillarIcon::Leaf,
    goals: &[
        "Reduce carbon emissions and promote clean energy",
        "Protect forests, oceans, and wildlife habitats",
        "Support sustainable agriculture and waste reduction",
    ],
    example_projects: &[
        "Reforestation initiatives planting 1M+ trees",
        "Ocean plastic cleanup operations",
        "Renewable energy infrastructure in developing regions",
    ],
};

static HUMAN_AID: PillarInfo = PillarInfo {
    pillar: Pillar::HumanAid,
    name: "Human Aid",
    description: "Supporting communities with food security, healthcare, and education",
    color: PillarColor::Blue,
    icon: PillarIcon::Heart,
    goals: &[
        "Provide emergency food aid and long-term food security",
        "Deliver healthcare services and medical supplies",
        "Support education access for underserved communities",
    ],
    example_projects: &[
        "School meal programs feeding 50K+ children daily",
        "Mobile health clinics in rural areas",
        "Clean water well construction",
    ],
};

static RESEARCH: PillarInfo = PillarInfo {
    pillar: Pillar::Research,
    name: "Research",
    description: "Advancing science to solve tomorrow's challenges in health, climate, and technology",
    color: PillarColor::Purple,
    icon: PillarIcon::FlaskConical,
    goals: &[
        "Fund breakthrough medical and health research",
        "Support climate science and clean tech innovation",
        "Advance accessible technology for underserved populations",
    ],
    example_projects: &[
        "Open-source medical research for rare diseases",
        "Climate modeling and prediction systems",
        "Low-cost diagnostic tools for remote areas",
    ],
};
