//! Prospective pricing.
//!
//! Works forwards from the expected cost of an event to the unit price
//! that breaks even and the price that earns the desired margin, then
//! sweeps a range of prices around the suggestion so the photographer
//! can compare what-if outcomes.

use crate::config::PricingThresholds;
use crate::depreciation::{DepreciationModel, HybridModel};
use crate::metrics::{gross_up, percentage, ratio, roi};
use crate::models::{Advice, AdviceKind, PricingInput, PricingResult, Scenario};
use log::debug;

/// Price multipliers of the scenario sweep, in tenths: 0.7× to 1.5×.
const SWEEP_TENTHS: std::ops::RangeInclusive<u32> = 7..=15;

/// Recommends prices for a prospective event.
pub fn recommend_pricing(input: &PricingInput) -> PricingResult {
    let fixed_cost_per_event = ratio(input.fixed_monthly_costs, input.events_per_month);
    let model = HybridModel {
        estimated_photos: input.estimated_event_photos,
        events_per_month: input.events_per_month,
    };
    let depreciation = model.estimate(&input.equipment.items());
    let total_event_cost = fixed_cost_per_event + depreciation.total + input.operating_cost_per_event;

    let cost_per_sold_photo = ratio(total_event_cost, input.estimated_sales);
    let net_suggested = cost_per_sold_photo * (1.0 + input.desired_margin_percent / 100.0);
    let break_even_price = gross_up(cost_per_sold_photo, input.platform_fee_percent);
    let suggested_price = gross_up(net_suggested, input.platform_fee_percent);

    let projection = project(suggested_price, input, total_event_cost);
    let net_unit_price = suggested_price * (1.0 - input.platform_fee_percent / 100.0);
    let scenarios = sweep(suggested_price, input, total_event_cost);

    debug!(
        "pricing: event cost={:.2} break-even={:.2} suggested={:.2}",
        total_event_cost, break_even_price, suggested_price
    );

    PricingResult {
        fixed_cost_per_event,
        depreciation,
        total_event_cost,
        cost_per_sold_photo,
        break_even_price,
        suggested_price,
        gross_revenue: projection.gross,
        fee_amount: projection.gross - projection.net,
        net_revenue: projection.net,
        projected_profit: projection.profit,
        real_margin_percent: projection.margin_percent,
        roi_percent: projection.roi_percent,
        required_conversion_percent: percentage(input.estimated_sales, input.estimated_event_photos),
        break_even_photos: ratio(total_event_cost, net_unit_price),
        scenarios,
    }
}

struct Projection {
    gross: f64,
    net: f64,
    profit: f64,
    margin_percent: f64,
    roi_percent: f64,
}

/// Outcome of selling the estimated volume at `price` with costs fixed.
fn project(price: f64, input: &PricingInput, total_event_cost: f64) -> Projection {
    let gross = price * input.estimated_sales;
    let net = gross - gross * input.platform_fee_percent / 100.0;
    let profit = net - total_event_cost;
    Projection {
        gross,
        net,
        profit,
        margin_percent: roi(profit, total_event_cost),
        roi_percent: roi(profit, total_event_cost),
    }
}

fn sweep(base_price: f64, input: &PricingInput, total_event_cost: f64) -> Vec<Scenario> {
    let mut scenarios: Vec<Scenario> = SWEEP_TENTHS
        .map(|tenths| {
            let multiplier = f64::from(tenths) / 10.0;
            let price = base_price * multiplier;
            let outcome = project(price, input, total_event_cost);
            Scenario {
                multiplier,
                price,
                gross_revenue: outcome.gross,
                net_revenue: outcome.net,
                profit: outcome.profit,
                margin_percent: outcome.margin_percent,
                roi_percent: outcome.roi_percent,
                recommended: false,
            }
        })
        .collect();

    let nearest = scenarios
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let da = (a.price - base_price).abs();
            let db = (b.price - base_price).abs();
            da.total_cmp(&db)
        })
        .map(|(index, _)| index);
    if let Some(index) = nearest {
        scenarios[index].recommended = true;
    }
    scenarios
}

/// Insights on a pricing recommendation.  When nothing stands out a
/// single "balanced" message is returned.
pub fn pricing_insights(
    input: &PricingInput,
    result: &PricingResult,
    thresholds: &PricingThresholds,
) -> Vec<Advice> {
    let mut insights = Vec::new();

    if result.suggested_price < thresholds.low_price {
        insights.push(Advice::new(
            AdviceKind::Info,
            "Suggested price is very low. Consider charging more to value your work.",
        ));
    } else if result.suggested_price > thresholds.high_price {
        insights.push(Advice::new(
            AdviceKind::Warning,
            "High price. Make sure your audience can afford it.",
        ));
    }

    if result.real_margin_percent < thresholds.low_margin {
        insights.push(Advice::new(
            AdviceKind::Warning,
            format!(
                "Low profit margin (<{}%). Reduce costs or raise prices.",
                thresholds.low_margin
            ),
        ));
    } else if result.real_margin_percent > thresholds.high_margin {
        insights.push(Advice::new(
            AdviceKind::Positive,
            "Excellent profit margin. Your business is very well positioned.",
        ));
    }

    if result.required_conversion_percent < thresholds.easy_conversion {
        insights.push(Advice::new(
            AdviceKind::Positive,
            "Required conversion rate is very low. The goal is easily reachable.",
        ));
    } else if result.required_conversion_percent > thresholds.hard_conversion {
        insights.push(Advice::new(
            AdviceKind::Warning,
            format!(
                "Required conversion rate is high (>{}%). Raise the price or cut costs.",
                thresholds.hard_conversion
            ),
        ));
    }

    // break-even conversion relative to the required conversion
    let break_even_share = percentage(result.break_even_photos, input.estimated_sales);
    if break_even_share > thresholds.fragile_break_even {
        insights.push(Advice::new(
            AdviceKind::Critical,
            "Break-even point is very high. There is little room for error.",
        ));
    }

    if result.roi_percent < thresholds.low_roi {
        insights.push(Advice::new(
            AdviceKind::Warning,
            format!(
                "Low ROI (<{}%). Check whether this event is worth the investment.",
                thresholds.low_roi
            ),
        ));
    } else if result.roi_percent > thresholds.exceptional_roi {
        insights.push(Advice::new(
            AdviceKind::Positive,
            "Exceptional ROI. This event has great profit potential.",
        ));
    }

    if insights.is_empty() {
        insights.push(Advice::new(
            AdviceKind::Positive,
            "Balanced and healthy pricing for your business.",
        ));
    }
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EquipmentItem, PricingEquipment};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    /// Costs chosen so that each of the 50 expected sales costs exactly 12:
    /// 100 fixed + 200 click wear + 100 age wear + 200 operating.
    fn twelve_per_sale() -> PricingInput {
        PricingInput {
            fixed_monthly_costs: 400.0,
            events_per_month: 4.0,
            equipment: PricingEquipment::Single {
                value: 24_000.0,
                usage_life_clicks: Some(240_000),
                lifetime_years: Some(5.0),
            },
            operating_cost_per_event: 200.0,
            estimated_event_photos: 2_000.0,
            platform_fee_percent: 10.0,
            desired_margin_percent: 30.0,
            estimated_sales: 50.0,
        }
    }

    #[test]
    fn test_break_even_and_suggested_price() {
        let result = recommend_pricing(&twelve_per_sale());
        assert!(close(result.fixed_cost_per_event, 100.0));
        assert!(close(result.depreciation.total, 300.0));
        assert!(close(result.total_event_cost, 600.0));
        assert!(close(result.cost_per_sold_photo, 12.0));
        assert!(close(result.suggested_price, 12.0 * 1.3 / 0.9));
        assert!(close(result.break_even_price, 12.0 / 0.9));
        assert!((result.suggested_price - 17.33).abs() < 0.01);
        assert!((result.break_even_price - 13.33).abs() < 0.01);
    }

    #[test]
    fn test_projection_at_suggested_price() {
        let result = recommend_pricing(&twelve_per_sale());
        assert!(close(result.net_revenue, 600.0 * 1.3));
        assert!(close(result.gross_revenue - result.fee_amount, result.net_revenue));
        assert!(close(result.projected_profit, 180.0));
        assert!(close(result.real_margin_percent, 30.0));
        assert!(close(result.real_margin_percent, result.roi_percent));
        assert!(close(result.required_conversion_percent, 2.5));
        assert!(close(result.break_even_photos, 600.0 / 15.6));
    }

    #[test]
    fn test_sweep_shape() {
        let result = recommend_pricing(&twelve_per_sale());
        assert_eq!(result.scenarios.len(), 9);
        assert!(close(result.scenarios[0].multiplier, 0.7));
        assert!(close(result.scenarios[8].multiplier, 1.5));
        for pair in result.scenarios.windows(2) {
            assert!(pair[1].price > pair[0].price);
            assert!(pair[1].gross_revenue > pair[0].gross_revenue);
            assert!(pair[1].profit >= pair[0].profit);
        }
        let recommended: Vec<_> = result.scenarios.iter().filter(|s| s.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert!(close(recommended[0].multiplier, 1.0));
        assert!(close(recommended[0].price, result.suggested_price));
    }

    #[test]
    fn test_inventory_stacks_click_and_age_wear() {
        let input = PricingInput {
            fixed_monthly_costs: 0.0,
            events_per_month: 2.0,
            equipment: PricingEquipment::Inventory {
                items: vec![
                    EquipmentItem::camera_by_clicks("Body", 15_000.0, 150_000),
                    EquipmentItem::lens("Zoom", 12_000.0, 5.0),
                ],
            },
            operating_cost_per_event: 0.0,
            estimated_event_photos: 1_000.0,
            platform_fee_percent: 0.0,
            desired_margin_percent: 0.0,
            estimated_sales: 10.0,
        };
        let result = recommend_pricing(&input);
        assert!(close(result.depreciation.cameras, 100.0));
        assert!(close(result.depreciation.lenses, 100.0));
        assert!(close(result.suggested_price, 20.0));
        assert!(close(result.break_even_price, 20.0));
    }

    #[test]
    fn test_degenerate_input_reports_zero() {
        let input = PricingInput {
            fixed_monthly_costs: 300.0,
            events_per_month: 0.0,
            equipment: PricingEquipment::Inventory { items: Vec::new() },
            operating_cost_per_event: 50.0,
            estimated_event_photos: 0.0,
            platform_fee_percent: 100.0,
            desired_margin_percent: 30.0,
            estimated_sales: 0.0,
        };
        let result = recommend_pricing(&input);
        assert_eq!(result.fixed_cost_per_event, 0.0);
        assert_eq!(result.cost_per_sold_photo, 0.0);
        assert_eq!(result.break_even_price, 0.0);
        assert_eq!(result.suggested_price, 0.0);
        assert_eq!(result.required_conversion_percent, 0.0);
        assert_eq!(result.break_even_photos, 0.0);
        assert!(result.scenarios.iter().all(|s| s.price == 0.0 && s.profit.is_finite()));
    }

    #[test]
    fn test_insights() {
        let input = PricingInput {
            desired_margin_percent: 40.0,
            ..twelve_per_sale()
        };
        let result = recommend_pricing(&input);
        let insights = pricing_insights(&input, &result, &PricingThresholds::default());
        // price 18.67, 40% margin and ROI, 2.5% conversion, break-even at ~71% of sales
        let messages: Vec<&str> = insights.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Required conversion rate is high"));
    }

    #[test]
    fn test_fragile_break_even() {
        let input = PricingInput {
            desired_margin_percent: 10.0,
            ..twelve_per_sale()
        };
        let result = recommend_pricing(&input);
        let insights = pricing_insights(&input, &result, &PricingThresholds::default());
        assert!(insights.iter().any(|a| a.kind == AdviceKind::Critical));
        assert!(insights.iter().any(|a| a.message.starts_with("Low profit margin")));
        assert!(insights.iter().any(|a| a.message.starts_with("Low ROI")));
    }

    /// A recommendation sitting between every low and high threshold.
    fn quiet_result(input: &PricingInput) -> PricingResult {
        let mut result = recommend_pricing(input);
        result.suggested_price = 12.0;
        result.real_margin_percent = 35.0;
        result.roi_percent = 35.0;
        result.required_conversion_percent = 1.0;
        result.break_even_photos = 10.0;
        result
    }

    fn messages(insights: &[Advice]) -> Vec<&str> {
        insights.iter().map(|a| a.message.as_str()).collect()
    }

    #[test]
    fn test_balanced_when_nothing_fires() {
        let input = twelve_per_sale();
        let result = quiet_result(&input);
        let insights = pricing_insights(&input, &result, &PricingThresholds::default());
        assert_eq!(insights.len(), 1);
        assert!(insights[0].message.starts_with("Balanced"));
    }

    #[test]
    fn test_low_price_insight() {
        let input = twelve_per_sale();
        let mut result = quiet_result(&input);
        result.suggested_price = 6.5;
        let insights = pricing_insights(&input, &result, &PricingThresholds::default());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, AdviceKind::Info);
        assert!(insights[0].message.starts_with("Suggested price is very low"));
    }

    #[test]
    fn test_high_price_insight() {
        let input = twelve_per_sale();
        let mut result = quiet_result(&input);
        result.suggested_price = 24.0;
        let insights = pricing_insights(&input, &result, &PricingThresholds::default());
        assert_eq!(messages(&insights).len(), 1);
        assert!(insights[0].message.starts_with("High price"));
    }

    #[test]
    fn test_high_margin_and_roi_insights() {
        let input = twelve_per_sale();
        let mut result = quiet_result(&input);
        result.real_margin_percent = 60.0;
        result.roi_percent = 120.0;
        let insights = pricing_insights(&input, &result, &PricingThresholds::default());
        let messages = messages(&insights);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("Excellent profit margin"));
        assert!(messages[1].starts_with("Exceptional ROI"));
    }

    #[test]
    fn test_easy_conversion_insight() {
        let input = twelve_per_sale();
        let mut result = quiet_result(&input);
        result.required_conversion_percent = 0.3;
        let insights = pricing_insights(&input, &result, &PricingThresholds::default());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, AdviceKind::Positive);
        assert!(insights[0]
            .message
            .starts_with("Required conversion rate is very low"));
    }
}
