//! Data models for the ClickFinance engine.
//!
//! The `models` module defines the serialisable records that flow in
//! and out of the calculators: equipment, the three scenario inputs
//! (annual, single event, pricing) and their results.  Every type
//! derives `Serialize` and `Deserialize` so the presentation layer can
//! post inputs as JSON and render results without an extra mapping
//! step.  Monetary amounts are plain `f64` values in the seller's
//! currency; locale formatting lives in [`crate::locale`].

use serde::{Deserialize, Serialize};

/// Broad equipment class used for depreciation buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentCategory {
    Camera,
    Lens,
    Other,
}

/// Category specific depreciation drivers.
///
/// A camera may wear out by shutter actuations (mechanical shutter) or
/// by age (electronic shutter / mirrorless), and the active calculation
/// mode decides which of the two is read.  Lenses and accessories only
/// ever age, so they carry a single lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum EquipmentKind {
    Camera {
        /// Rated shutter life in actuations.
        #[serde(default)]
        usage_life_clicks: Option<u64>,
        /// Expected useful life in years.
        #[serde(default)]
        lifetime_years: Option<f64>,
    },
    Lens {
        #[serde(default)]
        lifetime_years: Option<f64>,
    },
    Other {
        #[serde(default)]
        lifetime_years: Option<f64>,
    },
}

impl EquipmentKind {
    pub fn category(&self) -> EquipmentCategory {
        match self {
            EquipmentKind::Camera { .. } => EquipmentCategory::Camera,
            EquipmentKind::Lens { .. } => EquipmentCategory::Lens,
            EquipmentKind::Other { .. } => EquipmentCategory::Other,
        }
    }

    /// Lifetime in years, whatever the category.
    pub fn lifetime_years(&self) -> Option<f64> {
        match self {
            EquipmentKind::Camera { lifetime_years, .. }
            | EquipmentKind::Lens { lifetime_years }
            | EquipmentKind::Other { lifetime_years } => *lifetime_years,
        }
    }

    /// Shutter life in actuations.  Always `None` for non-camera items.
    pub fn usage_life_clicks(&self) -> Option<u64> {
        match self {
            EquipmentKind::Camera {
                usage_life_clicks, ..
            } => *usage_life_clicks,
            _ => None,
        }
    }
}

fn default_quantity() -> u32 {
    1
}

/// A piece of gear owned by the photographer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Identifier assigned by the caller.  Only used for display.
    pub id: String,
    pub name: String,
    /// Purchase value of a single unit.
    pub value: f64,
    /// Number of identical units.  Must be at least one.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(flatten)]
    pub kind: EquipmentKind,
}

impl EquipmentItem {
    /// Creates a single-unit item whose id mirrors its name.
    pub fn new(name: impl Into<String>, value: f64, kind: EquipmentKind) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            value,
            quantity: 1,
            kind,
        }
    }

    /// Mechanical-shutter camera depreciated by actuations.
    pub fn camera_by_clicks(name: impl Into<String>, value: f64, usage_life_clicks: u64) -> Self {
        Self::new(
            name,
            value,
            EquipmentKind::Camera {
                usage_life_clicks: Some(usage_life_clicks),
                lifetime_years: None,
            },
        )
    }

    /// Camera depreciated by age.
    pub fn camera_by_years(name: impl Into<String>, value: f64, lifetime_years: f64) -> Self {
        Self::new(
            name,
            value,
            EquipmentKind::Camera {
                usage_life_clicks: None,
                lifetime_years: Some(lifetime_years),
            },
        )
    }

    pub fn lens(name: impl Into<String>, value: f64, lifetime_years: f64) -> Self {
        Self::new(
            name,
            value,
            EquipmentKind::Lens {
                lifetime_years: Some(lifetime_years),
            },
        )
    }

    pub fn other(name: impl Into<String>, value: f64, lifetime_years: f64) -> Self {
        Self::new(
            name,
            value,
            EquipmentKind::Other {
                lifetime_years: Some(lifetime_years),
            },
        )
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn category(&self) -> EquipmentCategory {
        self.kind.category()
    }
}

/// Depreciation attributed to one equipment item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDepreciation {
    pub name: String,
    pub category: EquipmentCategory,
    pub amount: f64,
}

/// Depreciation for a whole equipment list, bucketed by category and
/// itemised for audit display.  `total` always equals the sum of the
/// buckets and the sum of `items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepreciationBreakdown {
    pub total: f64,
    pub cameras: f64,
    pub lenses: f64,
    pub other: f64,
    pub items: Vec<ItemDepreciation>,
}

impl DepreciationBreakdown {
    /// Records the depreciation of one item.
    pub fn push(&mut self, name: &str, category: EquipmentCategory, amount: f64) {
        match category {
            EquipmentCategory::Camera => self.cameras += amount,
            EquipmentCategory::Lens => self.lenses += amount,
            EquipmentCategory::Other => self.other += amount,
        }
        self.total += amount;
        self.items.push(ItemDepreciation {
            name: name.to_string(),
            category,
            amount,
        });
    }
}

/// Performance tier derived from monthly average revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    /// Stable lowercase tag used by the UI for styling.
    pub class_tag: String,
    /// Monthly revenue needed to reach the next tier.  `None` for the
    /// top tier.
    pub next_threshold: Option<f64>,
}

/// Input to the annual analyzer: one year (or period) of activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualInput {
    pub equipment: Vec<EquipmentItem>,
    /// Depreciate cameras by age instead of shutter actuations.
    #[serde(default)]
    pub use_time_depreciation: bool,
    /// Rated shutter life of the main body, in actuations.
    #[serde(default)]
    pub shutter_life_total: u64,
    /// Actuation counter currently shown by the main body.
    #[serde(default)]
    pub current_mechanical_clicks: u64,
    pub total_photos: u64,
    /// Photos of the period taken with the mechanical shutter.  `None`
    /// when the photographer did not track it.
    #[serde(default)]
    pub total_mechanical_photos: Option<u64>,
    pub photos_sold: u64,
    pub event_count: u64,
    /// Revenue already net of platform fees.
    pub net_revenue: f64,
    pub cost_per_event: f64,
}

/// Remaining shutter life of the main body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShutterLife {
    /// Negative once the rated life has been exceeded.
    pub remaining_clicks: i64,
    pub remaining_percent: f64,
}

/// Output of [`crate::annual::analyze_annual`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualResult {
    pub cost_per_click: f64,
    pub depreciation: DepreciationBreakdown,
    /// Only tracked for click based depreciation with a known rated
    /// shutter life.
    pub shutter_life: Option<ShutterLife>,
    pub operating_cost: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    pub roi_percent: f64,
    pub average_price_per_photo: f64,
    pub real_cost_per_photo: f64,
    pub margin_per_photo: f64,
    pub conversion_rate_percent: f64,
    pub revenue_per_event: f64,
    pub photos_per_event: f64,
    pub sales_per_event: f64,
    pub monthly_average: f64,
    pub tier: Tier,
}

/// Who runs the sales channel for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Photographer runs the sales. Receipts are not shared, but a
    /// forward priced event still pays whatever fee is supplied.
    Own,
    /// Sold through a commission based platform.
    Platform,
}

/// How the revenue of an event is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum EventPricingMode {
    /// Unit price and the platform fee are known; revenue is projected
    /// forwards from the number of sales.
    Forward { unit_price: f64, fee_percent: f64 },
    /// Only the net amount received and the photographer's commission
    /// share are known; gross revenue is derived backwards.
    Reverse {
        net_receipt: f64,
        commission_percent: f64,
    },
}

fn default_duration_days() -> f64 {
    1.0
}

/// Input to the event analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInput {
    pub equipment: Vec<EquipmentItem>,
    #[serde(default)]
    pub use_time_depreciation: bool,
    #[serde(default = "default_duration_days")]
    pub duration_days: f64,
    pub name: String,
    pub kind: EventKind,
    pub pricing: EventPricingMode,
    pub photos_taken: u64,
    #[serde(default)]
    pub mechanical_photos: Option<u64>,
    pub photos_sold: u64,
    #[serde(default)]
    pub operating_cost: f64,
}

/// Output of [`crate::event::analyze_event`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResult {
    pub name: String,
    pub gross_revenue: f64,
    pub fee_amount: f64,
    pub net_revenue: f64,
    /// Share of the gross revenue the photographer keeps.
    pub commission_percent: f64,
    pub depreciation: DepreciationBreakdown,
    pub total_cost: f64,
    pub net_profit: f64,
    pub roi_percent: f64,
    pub conversion_rate_percent: f64,
    pub average_sale_price: f64,
    pub revenue_per_photo: f64,
    pub real_cost_per_photo: f64,
    pub margin_per_photo: f64,
}

/// Equipment description accepted by the pricing recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PricingEquipment {
    /// A single body described by its value and both lifetimes.
    Single {
        value: f64,
        #[serde(default)]
        usage_life_clicks: Option<u64>,
        #[serde(default)]
        lifetime_years: Option<f64>,
    },
    /// The full equipment list.
    Inventory { items: Vec<EquipmentItem> },
}

impl PricingEquipment {
    /// Expands the description into equipment items.
    pub fn items(&self) -> Vec<EquipmentItem> {
        match self {
            PricingEquipment::Single {
                value,
                usage_life_clicks,
                lifetime_years,
            } => vec![EquipmentItem::new(
                "Equipment",
                *value,
                EquipmentKind::Camera {
                    usage_life_clicks: *usage_life_clicks,
                    lifetime_years: *lifetime_years,
                },
            )],
            PricingEquipment::Inventory { items } => items.clone(),
        }
    }
}

/// Input to the pricing recommender.  All volumes are per event
/// estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingInput {
    #[serde(default)]
    pub fixed_monthly_costs: f64,
    #[serde(default)]
    pub events_per_month: f64,
    pub equipment: PricingEquipment,
    #[serde(default)]
    pub operating_cost_per_event: f64,
    pub estimated_event_photos: f64,
    pub platform_fee_percent: f64,
    pub desired_margin_percent: f64,
    pub estimated_sales: f64,
}

/// One row of the what-if price sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub multiplier: f64,
    pub price: f64,
    pub gross_revenue: f64,
    pub net_revenue: f64,
    pub profit: f64,
    pub margin_percent: f64,
    pub roi_percent: f64,
    /// Set on the row closest to the suggested price.
    pub recommended: bool,
}

/// Output of [`crate::pricing::recommend_pricing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub fixed_cost_per_event: f64,
    pub depreciation: DepreciationBreakdown,
    pub total_event_cost: f64,
    pub cost_per_sold_photo: f64,
    pub break_even_price: f64,
    pub suggested_price: f64,
    pub gross_revenue: f64,
    pub fee_amount: f64,
    pub net_revenue: f64,
    pub projected_profit: f64,
    pub real_margin_percent: f64,
    pub roi_percent: f64,
    pub required_conversion_percent: f64,
    /// Photos that must sell at the suggested price to cover the event.
    pub break_even_photos: f64,
    pub scenarios: Vec<Scenario>,
}

/// Tone of an advisory message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceKind {
    Positive,
    Info,
    Warning,
    Critical,
}

/// Human readable guidance attached to a result.  Advice never changes
/// the numbers it comments on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub kind: AdviceKind,
    pub message: String,
}

impl Advice {
    pub fn new(kind: AdviceKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
