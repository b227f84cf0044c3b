//! Single event analysis.
//!
//! Revenue is resolved once from the event's [`EventPricingMode`]:
//! either projected forwards from the unit price, or derived backwards
//! from the net amount the platform paid out.  Everything after that is
//! shared by both directions.

use crate::config::{EngineConfig, EventThresholds};
use crate::depreciation::{DepreciationMode, DepreciationModel, PeriodModel};
use crate::locale::format_percent;
use crate::metrics::{percentage, ratio, roi};
use crate::models::{Advice, AdviceKind, EventInput, EventKind, EventPricingMode, EventResult};
use log::debug;

/// Gross to net split of an event's sales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueSplit {
    pub gross: f64,
    pub fee: f64,
    pub net: f64,
    /// Share of the gross the photographer keeps.
    pub commission_percent: f64,
}

impl RevenueSplit {
    /// Forward direction: `gross = sold × price`, fee taken off the top.
    pub fn forward(photos_sold: u64, unit_price: f64, fee_percent: f64) -> Self {
        let gross = photos_sold as f64 * unit_price;
        let fee = gross * fee_percent / 100.0;
        Self {
            gross,
            fee,
            net: gross - fee,
            commission_percent: 100.0 - fee_percent,
        }
    }

    /// Reverse direction: `gross = net / commission`.  Without a positive
    /// commission the gross cannot be recovered and is taken as the net.
    pub fn reverse(net_receipt: f64, commission_percent: f64) -> Self {
        let share = commission_percent / 100.0;
        let gross = if share > 0.0 {
            net_receipt / share
        } else {
            net_receipt
        };
        Self {
            gross,
            fee: gross - net_receipt,
            net: net_receipt,
            commission_percent,
        }
    }

    /// Resolves the split for an event.  Forward pricing always applies the
    /// supplied fee.  A receipt from an own event was never shared with a
    /// platform, so its commission is 100%.
    pub fn resolve(kind: EventKind, pricing: EventPricingMode, photos_sold: u64) -> Self {
        match pricing {
            EventPricingMode::Forward {
                unit_price,
                fee_percent,
            } => Self::forward(photos_sold, unit_price, fee_percent),
            EventPricingMode::Reverse { net_receipt, .. } if kind == EventKind::Own => {
                Self::reverse(net_receipt, 100.0)
            }
            EventPricingMode::Reverse {
                net_receipt,
                commission_percent,
            } => Self::reverse(net_receipt, commission_percent),
        }
    }
}

/// Analyses a single event.
pub fn analyze_event(input: &EventInput, config: &EngineConfig) -> EventResult {
    let mode = DepreciationMode::from_flag(input.use_time_depreciation);
    let mechanical = config
        .event_mechanical_policy
        .resolve(input.mechanical_photos, input.photos_taken);
    let depreciation =
        PeriodModel::event(mode, mechanical, input.duration_days).estimate(&input.equipment);

    let revenue = RevenueSplit::resolve(input.kind, input.pricing, input.photos_sold);
    let total_cost = depreciation.total + input.operating_cost;
    let net_profit = revenue.net - total_cost;

    let sold = input.photos_sold as f64;
    let revenue_per_photo = ratio(revenue.net, sold);
    let real_cost_per_photo = ratio(total_cost, sold);

    debug!(
        "event '{}': gross={:.2} net={:.2} depreciation={:.2} profit={:.2}",
        input.name, revenue.gross, revenue.net, depreciation.total, net_profit
    );

    EventResult {
        name: input.name.clone(),
        gross_revenue: revenue.gross,
        fee_amount: revenue.fee,
        net_revenue: revenue.net,
        commission_percent: revenue.commission_percent,
        depreciation,
        total_cost,
        net_profit,
        roi_percent: roi(net_profit, total_cost),
        conversion_rate_percent: percentage(sold, input.photos_taken as f64),
        average_sale_price: ratio(revenue.gross, sold),
        revenue_per_photo,
        real_cost_per_photo,
        margin_per_photo: revenue_per_photo - real_cost_per_photo,
    }
}

/// Advisory messages for an event.  The platform rule looks at the rate
/// the photographer actually supplied: the fee for forward priced
/// events, the commission share for receipt based ones.
pub fn event_analysis(
    input: &EventInput,
    result: &EventResult,
    thresholds: &EventThresholds,
) -> Vec<Advice> {
    let mut advice = Vec::new();

    if result.roi_percent > thresholds.excellent_roi {
        advice.push(Advice::new(
            AdviceKind::Positive,
            "Excellent ROI. This kind of event is well worth it.",
        ));
    } else if result.roi_percent < thresholds.loss_roi {
        advice.push(Advice::new(
            AdviceKind::Critical,
            "This event ran at a loss. Costs exceeded what it earned.",
        ));
    }

    if result.conversion_rate_percent < thresholds.low_conversion {
        advice.push(Advice::new(
            AdviceKind::Warning,
            format!(
                "Low conversion (<{}%). Review the audience and your editing.",
                thresholds.low_conversion
            ),
        ));
    } else if result.conversion_rate_percent > thresholds.good_conversion {
        advice.push(Advice::new(
            AdviceKind::Positive,
            "Great conversion. The audience was engaged.",
        ));
    }

    if input.kind == EventKind::Platform {
        match input.pricing {
            EventPricingMode::Reverse {
                commission_percent, ..
            } if commission_percent > 0.0 && commission_percent < thresholds.fair_commission => {
                advice.push(Advice::new(
                    AdviceKind::Warning,
                    format!(
                        "Commission of {}%. Official events usually pay {}% or more.",
                        format_percent(commission_percent, 0),
                        format_percent(thresholds.fair_commission, 0)
                    ),
                ));
            }
            EventPricingMode::Forward { fee_percent, .. } if fee_percent > thresholds.fair_fee => {
                advice.push(Advice::new(
                    AdviceKind::Warning,
                    format!(
                        "Platform fee is very high ({}%). Consider whether your own events would pay better.",
                        format_percent(fee_percent, 0)
                    ),
                ));
            }
            _ => {}
        }
    }

    // a non-positive margin is already covered by the loss message
    let margin = result.margin_per_photo;
    if margin > 0.0 && margin < thresholds.thin_margin_per_photo {
        advice.push(Advice::new(
            AdviceKind::Warning,
            "Thin margin per photo. Watch your costs or raise your price.",
        ));
    }

    advice
}
