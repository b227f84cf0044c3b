//! Engine configuration.
//!
//! All thresholds that drive tiers and advisory messages live in an
//! immutable [`EngineConfig`] that callers pass into the calculators.
//! The defaults reproduce the published calculator; a JSON file may
//! override any subset of them since every section is
//! `#[serde(default)]`.

use crate::depreciation::MechanicalCountPolicy;
use crate::error::Result;
use crate::tier::TierTable;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Advisory thresholds for the annual analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnualThresholds {
    /// Conversion rate (%) below which sales are considered weak.
    pub low_conversion: f64,
    pub good_conversion: f64,
    pub low_margin_per_photo: f64,
    pub good_margin_per_photo: f64,
    pub low_roi: f64,
    pub exceptional_roi: f64,
    /// Remaining shutter life (%) that calls for an immediate replacement plan.
    pub critical_shutter_life: f64,
    pub caution_shutter_life: f64,
}

impl Default for AnnualThresholds {
    fn default() -> Self {
        Self {
            low_conversion: 1.0,
            good_conversion: 1.5,
            low_margin_per_photo: 3.0,
            good_margin_per_photo: 6.0,
            low_roi: 30.0,
            exceptional_roi: 100.0,
            critical_shutter_life: 20.0,
            caution_shutter_life: 50.0,
        }
    }
}

/// Advisory thresholds for the event analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventThresholds {
    pub excellent_roi: f64,
    /// ROI (%) below which the event is reported as a loss.
    pub loss_roi: f64,
    pub low_conversion: f64,
    pub good_conversion: f64,
    /// Commission share (%) below which a platform is considered unfair.
    pub fair_commission: f64,
    /// Platform fee (%) above which a platform is considered unfair.
    pub fair_fee: f64,
    /// Positive margin per photo below which unit economics are thin.
    pub thin_margin_per_photo: f64,
}

impl Default for EventThresholds {
    fn default() -> Self {
        Self {
            excellent_roi: 50.0,
            loss_roi: 0.0,
            low_conversion: 1.0,
            good_conversion: 3.0,
            fair_commission: 60.0,
            fair_fee: 50.0,
            thin_margin_per_photo: 2.0,
        }
    }
}

/// Insight thresholds for the pricing recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingThresholds {
    pub low_price: f64,
    pub high_price: f64,
    pub low_margin: f64,
    pub high_margin: f64,
    pub easy_conversion: f64,
    pub hard_conversion: f64,
    /// Break-even sales as a share (%) of the estimated sales above which
    /// cost coverage is fragile.
    pub fragile_break_even: f64,
    pub low_roi: f64,
    pub exceptional_roi: f64,
}

impl Default for PricingThresholds {
    fn default() -> Self {
        Self {
            low_price: 8.0,
            high_price: 20.0,
            low_margin: 20.0,
            high_margin: 50.0,
            easy_conversion: 0.5,
            hard_conversion: 2.0,
            fragile_break_even: 80.0,
            low_roi: 30.0,
            exceptional_roi: 100.0,
        }
    }
}

/// Complete, immutable engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tiers: TierTable,
    pub annual: AnnualThresholds,
    pub event: EventThresholds,
    pub pricing: PricingThresholds,
    /// Annual figures only fall back to the total photo count when the
    /// mechanical count was not reported at all.
    pub annual_mechanical_policy: MechanicalCountPolicy,
    /// Event figures also fall back when the mechanical count is zero.
    pub event_mechanical_policy: MechanicalCountPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tiers: TierTable::default(),
            annual: AnnualThresholds::default(),
            event: EventThresholds::default(),
            pricing: PricingThresholds::default(),
            annual_mechanical_policy: MechanicalCountPolicy::FallbackWhenUnset,
            event_mechanical_policy: MechanicalCountPolicy::FallbackWhenZero,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Loads the configuration from a JSON file.
    ///
    /// A missing file is not an error: the defaults are returned and a
    /// warning is logged.  Unreadable or malformed files are errors.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Config file {:?} not found, using built-in thresholds",
                path
            );
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&data)?;
        info!(
            "Loaded config from {:?} ({} tier bands)",
            path,
            config.tiers.bands().len()
        );
        Ok(config)
    }
}
