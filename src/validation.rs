//! Input preconditions.
//!
//! The calculators assume complete, sane input and never fail.  The
//! calling layer runs these checks first and shows the collected
//! problems to the user instead of calling the engine.

use crate::models::{
    AnnualInput, EquipmentItem, EventInput, EventPricingMode, PricingEquipment, PricingInput,
};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("at least one equipment item is required")]
    NoEquipment,
    #[error("equipment '{0}' must have a quantity of at least 1")]
    InvalidQuantity(String),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("{0} must be greater than zero")]
    Missing(&'static str),
    #[error("{0} must be between 0 and 100")]
    PercentOutOfRange(&'static str),
}

pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

#[derive(Default)]
struct Checks {
    errors: Vec<ValidationError>,
}

impl Checks {
    fn equipment(&mut self, items: &[EquipmentItem]) {
        if items.is_empty() {
            self.errors.push(ValidationError::NoEquipment);
        }
        for item in items {
            if item.quantity < 1 {
                self.errors
                    .push(ValidationError::InvalidQuantity(item.name.clone()));
            }
            self.non_negative("equipment value", item.value);
        }
    }

    fn non_negative(&mut self, field: &'static str, value: f64) {
        if value < 0.0 || value.is_nan() {
            self.errors.push(ValidationError::Negative(field));
        }
    }

    fn positive(&mut self, field: &'static str, value: f64) {
        if !(value > 0.0) {
            self.errors.push(ValidationError::Missing(field));
        }
    }

    fn percent(&mut self, field: &'static str, value: f64) {
        if !(0.0..=100.0).contains(&value) {
            self.errors.push(ValidationError::PercentOutOfRange(field));
        }
    }

    fn finish(self) -> ValidationResult {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

pub fn validate_annual(input: &AnnualInput) -> ValidationResult {
    let mut checks = Checks::default();
    checks.equipment(&input.equipment);
    checks.positive("photos sold", input.photos_sold as f64);
    checks.positive("net revenue", input.net_revenue);
    checks.non_negative("cost per event", input.cost_per_event);
    checks.finish()
}

pub fn validate_event(input: &EventInput) -> ValidationResult {
    let mut checks = Checks::default();
    checks.equipment(&input.equipment);
    checks.positive("photos sold", input.photos_sold as f64);
    checks.non_negative("operating cost", input.operating_cost);
    checks.non_negative("event duration", input.duration_days);
    match input.pricing {
        EventPricingMode::Forward {
            unit_price,
            fee_percent,
        } => {
            checks.positive("unit price", unit_price);
            checks.percent("platform fee", fee_percent);
        }
        EventPricingMode::Reverse {
            net_receipt,
            commission_percent,
        } => {
            checks.positive("net receipt", net_receipt);
            checks.percent("commission", commission_percent);
        }
    }
    checks.finish()
}

pub fn validate_pricing(input: &PricingInput) -> ValidationResult {
    let mut checks = Checks::default();
    match &input.equipment {
        PricingEquipment::Single { value, .. } => checks.non_negative("equipment value", *value),
        PricingEquipment::Inventory { items } => checks.equipment(items),
    }
    checks.positive("estimated photos per event", input.estimated_event_photos);
    checks.positive("estimated sales per event", input.estimated_sales);
    checks.non_negative("fixed monthly costs", input.fixed_monthly_costs);
    checks.non_negative("events per month", input.events_per_month);
    checks.non_negative("operating cost per event", input.operating_cost_per_event);
    checks.non_negative("desired margin", input.desired_margin_percent);
    checks.percent("platform fee", input.platform_fee_percent);
    checks.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;

    fn event(pricing: EventPricingMode) -> EventInput {
        EventInput {
            equipment: vec![EquipmentItem::camera_by_clicks("Body", 10_000.0, 200_000)],
            use_time_depreciation: false,
            duration_days: 1.0,
            name: "Marathon".into(),
            kind: EventKind::Platform,
            pricing,
            photos_taken: 3_000,
            mechanical_photos: None,
            photos_sold: 40,
            operating_cost: 120.0,
        }
    }

    #[test]
    fn test_annual_requires_sales_and_revenue() {
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
        let errors = validate_annual(&input).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::NoEquipment,
                ValidationError::Missing("photos sold"),
                ValidationError::Missing("net revenue"),
            ]
        );
    }

    #[test]
    fn test_event_checks_active_pricing_mode() {
        let ok = event(EventPricingMode::Reverse {
            net_receipt: 950.47,
            commission_percent: 65.0,
        });
        assert!(validate_event(&ok).is_ok());

        let bad = event(EventPricingMode::Forward {
            unit_price: 0.0,
            fee_percent: 130.0,
        });
        let errors = validate_event(&bad).unwrap_err();
        assert!(errors.contains(&ValidationError::Missing("unit price")));
        assert!(errors.contains(&ValidationError::PercentOutOfRange("platform fee")));
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let mut input = event(EventPricingMode::Forward {
            unit_price: 15.0,
            fee_percent: 20.0,
        });
        input.equipment[0].quantity = 0;
        let errors = validate_event(&input).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidQuantity("Body".into())]);
    }

    #[test]
    fn test_pricing_requires_estimates() {
        let input = PricingInput {
            fixed_monthly_costs: 200.0,
            events_per_month: 4.0,
            equipment: PricingEquipment::Single {
                value: 15_000.0,
                usage_life_clicks: Some(200_000),
                lifetime_years: None,
            },
            operating_cost_per_event: 100.0,
            estimated_event_photos: 0.0,
            platform_fee_percent: 10.0,
            desired_margin_percent: 30.0,
            estimated_sales: 0.0,
        };
        let errors = validate_pricing(&input).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
