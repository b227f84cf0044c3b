//! Annual profitability analysis.
//!
//! Aggregates a year of activity into cost, profit and per-photo
//! figures and places the photographer in a performance tier.

use crate::config::{AnnualThresholds, EngineConfig};
use crate::depreciation::{
    combined_cost_per_click, DepreciationMode, DepreciationModel, PeriodModel, MONTHS_PER_YEAR,
};
use crate::locale::format_currency;
use crate::metrics::{percentage, ratio, roi};
use crate::models::{Advice, AdviceKind, AnnualInput, AnnualResult, ShutterLife};
use log::debug;

/// Analyses one year of activity.
pub fn analyze_annual(input: &AnnualInput, config: &EngineConfig) -> AnnualResult {
    let mode = DepreciationMode::from_flag(input.use_time_depreciation);
    let mechanical = config
        .annual_mechanical_policy
        .resolve(input.total_mechanical_photos, input.total_photos);
    let depreciation = PeriodModel::annual(mode, mechanical).estimate(&input.equipment);
    let cost_per_click = combined_cost_per_click(&input.equipment, mode);

    let shutter_life = match mode {
        DepreciationMode::Clicks if input.shutter_life_total > 0 => {
            let remaining = input.shutter_life_total as i64 - input.current_mechanical_clicks as i64;
            Some(ShutterLife {
                remaining_clicks: remaining,
                remaining_percent: percentage(remaining as f64, input.shutter_life_total as f64),
            })
        }
        _ => None,
    };

    let operating_cost = input.event_count as f64 * input.cost_per_event;
    let total_cost = depreciation.total + operating_cost;
    let net_profit = input.net_revenue - total_cost;

    let sold = input.photos_sold as f64;
    let events = input.event_count as f64;
    let average_price_per_photo = ratio(input.net_revenue, sold);
    let real_cost_per_photo = ratio(total_cost, sold);
    let monthly_average = input.net_revenue / MONTHS_PER_YEAR;

    let result = AnnualResult {
        cost_per_click,
        shutter_life,
        operating_cost,
        total_cost,
        net_profit,
        roi_percent: roi(net_profit, total_cost),
        average_price_per_photo,
        real_cost_per_photo,
        margin_per_photo: average_price_per_photo - real_cost_per_photo,
        conversion_rate_percent: percentage(sold, input.total_photos as f64),
        revenue_per_event: ratio(input.net_revenue, events),
        photos_per_event: ratio(input.total_photos as f64, events),
        sales_per_event: ratio(sold, events),
        monthly_average,
        tier: config.tiers.classify(monthly_average),
        depreciation,
    };
    debug!(
        "annual analysis: mode={:?} mechanical={} depreciation={:.2} profit={:.2} tier={}",
        mode, mechanical, result.depreciation.total, result.net_profit, result.tier.class_tag
    );
    result
}

/// Advisory messages for an annual result.  Each rule is evaluated on
/// its own; when nothing fires a single "healthy" message is returned.
pub fn annual_recommendations(result: &AnnualResult, thresholds: &AnnualThresholds) -> Vec<Advice> {
    let mut advice = Vec::new();

    if result.conversion_rate_percent < thresholds.low_conversion {
        advice.push(Advice::new(
            AdviceKind::Warning,
            format!(
                "Low conversion rate (<{}%). Work on framing, curation and delivery speed.",
                thresholds.low_conversion
            ),
        ));
    } else if result.conversion_rate_percent > thresholds.good_conversion {
        advice.push(Advice::new(
            AdviceKind::Positive,
            "Excellent conversion rate. You are capturing the moments buyers want.",
        ));
    }

    if result.margin_per_photo < thresholds.low_margin_per_photo {
        advice.push(Advice::new(
            AdviceKind::Warning,
            "Margin per photo is low. Cut operating costs or focus on more profitable events.",
        ));
    } else if result.margin_per_photo > thresholds.good_margin_per_photo {
        advice.push(Advice::new(
            AdviceKind::Positive,
            "Great margin per photo. Keep it up.",
        ));
    }

    if result.roi_percent < thresholds.low_roi {
        advice.push(Advice::new(
            AdviceKind::Warning,
            format!(
                "ROI below {}%. Review your events and prioritise the most profitable ones.",
                thresholds.low_roi
            ),
        ));
    } else if result.roi_percent > thresholds.exceptional_roi {
        advice.push(Advice::new(
            AdviceKind::Positive,
            "Exceptional ROI. Your operation is very well optimised.",
        ));
    }

    if let Some(life) = result.shutter_life {
        if life.remaining_percent < thresholds.critical_shutter_life {
            advice.push(Advice::new(
                AdviceKind::Critical,
                format!(
                    "Camera has less than {}% of its shutter life left. Plan a replacement within the next months.",
                    thresholds.critical_shutter_life
                ),
            ));
        } else if life.remaining_percent < thresholds.caution_shutter_life {
            advice.push(Advice::new(
                AdviceKind::Info,
                "Camera is past the middle of its shutter life. Start researching a replacement.",
            ));
        }
    }

    if let Some(next) = result.tier.next_threshold {
        let missing_per_year = (next - result.monthly_average) * MONTHS_PER_YEAR;
        advice.push(Advice::new(
            AdviceKind::Info,
            format!(
                "Earn {} more per year to reach the next tier.",
                format_currency(missing_per_year)
            ),
        ));
    }

    if advice.is_empty() {
        advice.push(Advice::new(
            AdviceKind::Positive,
            "Your operation is healthy. Keep monitoring your metrics.",
        ));
    }
    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EquipmentItem;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-2
    }

    fn reference_input() -> AnnualInput {
        AnnualInput {
            equipment: vec![EquipmentItem::camera_by_clicks("R6", 18_500.0, 300_000)],
            use_time_depreciation: false,
            shutter_life_total: 300_000,
            current_mechanical_clicks: 180_000,
            total_photos: 160_000,
            total_mechanical_photos: Some(150_000),
            photos_sold: 4_000,
            event_count: 100,
            net_revenue: 50_552.49,
            cost_per_event: 150.0,
        }
    }

    #[test]
    fn test_reference_year() {
        let result = analyze_annual(&reference_input(), &EngineConfig::default());
        assert!(close(result.depreciation.total, 9_250.0));
        assert!(close(result.operating_cost, 15_000.0));
        assert!(close(result.total_cost, 24_250.0));
        assert!(close(result.net_profit, 26_302.49));
        assert!(close(result.roi_percent, 26_302.49 / 24_250.0 * 100.0));
        assert!((result.roi_percent - 108.47).abs() < 0.01);
        assert!(close(result.cost_per_click, 18_500.0 / 300_000.0));
        assert!(close(result.conversion_rate_percent, 2.5));
        assert!(close(result.sales_per_event, 40.0));
        assert!(close(result.photos_per_event, 1_600.0));
        assert_eq!(result.tier.name, "Advanced");

        let life = result.shutter_life.unwrap();
        assert_eq!(life.remaining_clicks, 120_000);
        assert!(close(life.remaining_percent, 40.0));
    }

    #[test]
    fn test_explicit_zero_mechanical_count_is_strict() {
        let mut input = reference_input();
        input.total_mechanical_photos = Some(0);
        let result = analyze_annual(&input, &EngineConfig::default());
        assert_eq!(result.depreciation.total, 0.0);
    }

    #[test]
    fn test_unset_mechanical_count_falls_back_to_total() {
        let mut input = reference_input();
        input.total_mechanical_photos = None;
        let result = analyze_annual(&input, &EngineConfig::default());
        assert!(close(result.depreciation.total, 160_000.0 * 18_500.0 / 300_000.0));
    }

    #[test]
    fn test_time_mode_has_no_shutter_life() {
        let mut input = reference_input();
        input.use_time_depreciation = true;
        input.equipment = vec![
            EquipmentItem::camera_by_years("Z6", 15_000.0, 5.0),
            EquipmentItem::lens("50mm", 2_000.0, 4.0),
        ];
        let result = analyze_annual(&input, &EngineConfig::default());
        assert!(result.shutter_life.is_none());
        assert_eq!(result.cost_per_click, 0.0);
        assert!(close(result.depreciation.total, 3_500.0));
    }

    #[test]
    fn test_empty_activity_reports_zero_ratios() {
        let input = AnnualInput {
            equipment: Vec::new(),
            use_time_depreciation: false,
            shutter_life_total: 0,
            current_mechanical_clicks: 0,
            total_photos: 0,
            total_mechanical_photos: None,
            photos_sold: 0,
            event_count: 0,
            net_revenue: 0.0,
            cost_per_event: 0.0,
        };
        let result = analyze_annual(&input, &EngineConfig::default());
        for value in [
            result.roi_percent,
            result.average_price_per_photo,
            result.real_cost_per_photo,
            result.margin_per_photo,
            result.conversion_rate_percent,
            result.revenue_per_event,
            result.photos_per_event,
            result.sales_per_event,
        ] {
            assert_eq!(value, 0.0);
        }
        assert_eq!(result.tier.name, "Beginner");
    }

    #[test]
    fn test_recommendations_for_reference_year() {
        let config = EngineConfig::default();
        let result = analyze_annual(&reference_input(), &config);
        let advice = annual_recommendations(&result, &config.annual);
        let messages: Vec<&str> = advice.iter().map(|a| a.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.starts_with("Excellent conversion")));
        assert!(messages.iter().any(|m| m.starts_with("Exceptional ROI")));
        assert!(messages.iter().any(|m| m.contains("middle of its shutter life")));
        // monthly 4212.71, next tier at 5000
        assert!(messages
            .iter()
            .any(|m| m.contains("R$ 9.447,51") && m.contains("next tier")));
    }

    #[test]
    fn test_critical_shutter_life() {
        let config = EngineConfig::default();
        let mut input = reference_input();
        input.current_mechanical_clicks = 290_000;
        let result = analyze_annual(&input, &config);
        let advice = annual_recommendations(&result, &config.annual);
        assert!(advice.iter().any(|a| a.kind == AdviceKind::Critical));
    }

    /// A result sitting between every low and high threshold.
    fn quiet_result(config: &EngineConfig) -> AnnualResult {
        let mut result = analyze_annual(&reference_input(), config);
        result.conversion_rate_percent = 1.2;
        result.margin_per_photo = 4.0;
        result.roi_percent = 50.0;
        result.shutter_life = None;
        result.tier.next_threshold = None;
        result
    }

    #[test]
    fn test_healthy_when_nothing_fires() {
        let config = EngineConfig::default();
        let advice = annual_recommendations(&quiet_result(&config), &config.annual);
        assert_eq!(advice.len(), 1);
        assert!(advice[0].message.contains("healthy"));
    }

    #[test]
    fn test_low_conversion_warning() {
        let config = EngineConfig::default();
        let mut result = quiet_result(&config);
        result.conversion_rate_percent = 0.6;
        let advice = annual_recommendations(&result, &config.annual);
        assert_eq!(advice.len(), 1);
        assert_eq!(advice[0].kind, AdviceKind::Warning);
        assert!(advice[0].message.starts_with("Low conversion rate (<1%)"));
    }

    #[test]
    fn test_low_margin_per_photo_warning() {
        let config = EngineConfig::default();
        let mut result = quiet_result(&config);
        result.margin_per_photo = 1.75;
        let advice = annual_recommendations(&result, &config.annual);
        assert_eq!(advice.len(), 1);
        assert!(advice[0].message.starts_with("Margin per photo is low"));
    }

    #[test]
    fn test_low_roi_warning() {
        let config = EngineConfig::default();
        let mut result = quiet_result(&config);
        result.roi_percent = 7.2;
        let advice = annual_recommendations(&result, &config.annual);
        assert_eq!(advice.len(), 1);
        assert!(advice[0].message.starts_with("ROI below 30%"));
    }

    #[test]
    fn test_weak_year_collects_every_warning() {
        let config = EngineConfig::default();
        let mut input = reference_input();
        // 1000 of 160000 sold, 26000 against 24250 of cost
        input.photos_sold = 1_000;
        input.net_revenue = 26_000.0;
        let result = analyze_annual(&input, &config);
        let advice = annual_recommendations(&result, &config.annual);
        let warnings = advice
            .iter()
            .filter(|a| a.kind == AdviceKind::Warning)
            .count();
        assert_eq!(warnings, 3);
    }
}
