//! Performance tiers.
//!
//! A tier is looked up from the monthly average net revenue against an
//! ordered table of bands.  Each band covers revenues strictly below
//! its `upper_bound`; the last band is open ended.

use crate::models::Tier;
use serde::{Deserialize, Serialize};

/// One row of the tier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBand {
    pub name: String,
    pub class_tag: String,
    /// Exclusive upper bound of monthly revenue.  `None` marks the top
    /// band.
    pub upper_bound: Option<f64>,
}

impl TierBand {
    fn new(name: &str, class_tag: &str, upper_bound: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            class_tag: class_tag.to_string(),
            upper_bound,
        }
    }

    fn to_tier(&self) -> Tier {
        Tier {
            name: self.name.clone(),
            class_tag: self.class_tag.clone(),
            next_threshold: self.upper_bound,
        }
    }
}

/// Ordered tier bands, lowest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierTable {
    bands: Vec<TierBand>,
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            bands: vec![
                TierBand::new("Beginner", "beginner", Some(500.0)),
                TierBand::new("Intermediate", "intermediate", Some(2_000.0)),
                TierBand::new("Advanced", "advanced", Some(5_000.0)),
                TierBand::new("Professional", "professional", Some(10_000.0)),
                TierBand::new("Elite", "elite", Some(20_000.0)),
                TierBand::new("Legendary", "legendary", None),
            ],
        }
    }
}

impl TierTable {
    pub fn new(bands: Vec<TierBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[TierBand] {
        &self.bands
    }

    /// Returns the tier for a monthly average revenue.
    ///
    /// A table without an open ended band places revenues above its
    /// last bound in the last band.  An empty table yields an unranked
    /// tier.
    pub fn classify(&self, monthly_average: f64) -> Tier {
        self.bands
            .iter()
            .find(|band| match band.upper_bound {
                Some(bound) => monthly_average < bound,
                None => true,
            })
            .or_else(|| self.bands.last())
            .map(TierBand::to_tier)
            .unwrap_or_else(|| Tier {
                name: "Unranked".to_string(),
                class_tag: "unranked".to_string(),
                next_threshold: None,
            })
    }
}
