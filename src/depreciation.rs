//! Equipment depreciation.
//!
//! The `depreciation` module turns an equipment list into a
//! [`DepreciationBreakdown`].  Individual models implement the
//! [`DepreciationModel`] trait and only decide what a single item is
//! worth of wear; bucketing and itemisation are shared by every model
//! through [`DepreciationModel::estimate`].
//!
//! Two models exist:
//!
//! * [`PeriodModel`] is used by the annual and event analyzers.  A
//!   camera wears out either by shutter actuations or by age, chosen by
//!   the global [`DepreciationMode`]; lenses and accessories always age.
//! * [`HybridModel`] is used by the pricing recommender.  It charges
//!   click wear and age wear on top of each other for a single
//!   prospective event.

use crate::metrics::ratio;
use crate::models::{DepreciationBreakdown, EquipmentCategory, EquipmentItem};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Which driver depreciates cameras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepreciationMode {
    /// Mechanical shutter: cost per actuation.
    Clicks,
    /// Electronic shutter / mirrorless: straight line over the lifetime.
    Time,
}

impl DepreciationMode {
    pub fn from_flag(use_time_depreciation: bool) -> Self {
        if use_time_depreciation {
            DepreciationMode::Time
        } else {
            DepreciationMode::Clicks
        }
    }
}

/// How a missing or zero mechanical photo count is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MechanicalCountPolicy {
    /// Only the reported mechanical count is used; absent means zero.
    Strict,
    /// An absent count falls back to the total photo count.  An explicit
    /// zero stays zero.
    FallbackWhenUnset,
    /// Both an absent count and an explicit zero fall back to the total
    /// photo count.
    FallbackWhenZero,
}

impl MechanicalCountPolicy {
    /// Resolves the number of actuations to charge click wear for.
    pub fn resolve(self, mechanical_photos: Option<u64>, total_photos: u64) -> u64 {
        match (self, mechanical_photos) {
            (MechanicalCountPolicy::Strict, count) => count.unwrap_or(0),
            (MechanicalCountPolicy::FallbackWhenUnset, Some(count)) => count,
            (MechanicalCountPolicy::FallbackWhenZero, Some(count)) if count > 0 => count,
            (_, _) => total_photos,
        }
    }
}

/// A depreciation model decides the wear cost of a single item.
///
/// Implementations must return `0.0` for an item that lacks the driver
/// the model reads (missing or non-positive lifetime) rather than
/// failing.
pub trait DepreciationModel {
    /// Wear cost of `item` for the period this model describes.
    fn item_depreciation(&self, item: &EquipmentItem) -> f64;

    /// Depreciation of a whole equipment list, bucketed by category and
    /// itemised in input order.
    fn estimate(&self, equipment: &[EquipmentItem]) -> DepreciationBreakdown {
        let mut breakdown = DepreciationBreakdown::default();
        for item in equipment {
            let amount = self.item_depreciation(item);
            breakdown.push(&item.name, item.category(), amount);
        }
        breakdown
    }
}

/// Depreciation over a period of real activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodModel {
    pub mode: DepreciationMode,
    /// Actuations charged to click depreciated cameras.
    pub mechanical_photos: f64,
    /// Length of the period in days.  `None` means a full year.
    pub elapsed_days: Option<f64>,
}

impl PeriodModel {
    /// A full year of activity.
    pub fn annual(mode: DepreciationMode, mechanical_photos: u64) -> Self {
        Self {
            mode,
            mechanical_photos: mechanical_photos as f64,
            elapsed_days: None,
        }
    }

    /// A single event lasting `days`.
    pub fn event(mode: DepreciationMode, mechanical_photos: u64, days: f64) -> Self {
        Self {
            mode,
            mechanical_photos: mechanical_photos as f64,
            elapsed_days: Some(days),
        }
    }

    fn time_based(&self, item: &EquipmentItem) -> f64 {
        match item.kind.lifetime_years() {
            Some(years) if years > 0.0 => {
                let yearly = item.value * f64::from(item.quantity) / years;
                match self.elapsed_days {
                    Some(days) => yearly * days / DAYS_PER_YEAR,
                    None => yearly,
                }
            }
            _ => 0.0,
        }
    }

    fn click_based(&self, item: &EquipmentItem) -> f64 {
        cost_per_click(item) * self.mechanical_photos
    }
}

impl DepreciationModel for PeriodModel {
    fn item_depreciation(&self, item: &EquipmentItem) -> f64 {
        match (item.category(), self.mode) {
            (EquipmentCategory::Camera, DepreciationMode::Clicks) => self.click_based(item),
            _ => self.time_based(item),
        }
    }
}

/// Prospective depreciation for one event, charging click wear for the
/// expected photos plus age wear spread over the events of a month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridModel {
    pub estimated_photos: f64,
    pub events_per_month: f64,
}

impl DepreciationModel for HybridModel {
    fn item_depreciation(&self, item: &EquipmentItem) -> f64 {
        let clicks = cost_per_click(item) * self.estimated_photos;
        let monthly = match item.kind.lifetime_years() {
            Some(years) if years > 0.0 => {
                item.value * f64::from(item.quantity) / (years * MONTHS_PER_YEAR)
            }
            _ => 0.0,
        };
        clicks + ratio(monthly, self.events_per_month)
    }
}

/// Wear cost of one actuation across all units of `item`.  Zero for
/// anything that is not a camera with a positive shutter life.
pub fn cost_per_click(item: &EquipmentItem) -> f64 {
    match item.kind.usage_life_clicks() {
        Some(life) if life > 0 => item.value / life as f64 * f64::from(item.quantity),
        _ => 0.0,
    }
}

/// Combined cost per actuation of every click depreciated camera.
/// Zero in time mode.
pub fn combined_cost_per_click(equipment: &[EquipmentItem], mode: DepreciationMode) -> f64 {
    match mode {
        DepreciationMode::Time => 0.0,
        DepreciationMode::Clicks => equipment.iter().map(cost_per_click).sum(),
    }
}
