//! Report orchestration.
//!
//! The `engine` module pairs each calculator with its precondition
//! check and its advisory generator, producing the reports served to
//! the presentation layer.  [`run_batch`] evaluates many independent
//! requests at once using the [`rayon`] crate; the calculators are pure
//! so no coordination between requests is needed.

use crate::annual::{analyze_annual, annual_recommendations};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::event::{analyze_event, event_analysis};
use crate::models::{
    Advice, AnnualInput, AnnualResult, EventInput, EventResult, PricingInput, PricingResult,
};
use crate::pricing::{pricing_insights, recommend_pricing};
use crate::validation::{validate_annual, validate_event, validate_pricing};
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualReport {
    pub result: AnnualResult,
    pub recommendations: Vec<Advice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventReport {
    pub result: EventResult,
    pub analysis: Vec<Advice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    pub result: PricingResult,
    pub insights: Vec<Advice>,
}

/// Validates and analyses a year of activity.
pub fn annual_report(input: &AnnualInput, config: &EngineConfig) -> Result<AnnualReport> {
    validate_annual(input)?;
    let result = analyze_annual(input, config);
    let recommendations = annual_recommendations(&result, &config.annual);
    Ok(AnnualReport {
        result,
        recommendations,
    })
}

/// Validates and analyses a single event.
pub fn event_report(input: &EventInput, config: &EngineConfig) -> Result<EventReport> {
    validate_event(input)?;
    let result = analyze_event(input, config);
    let analysis = event_analysis(input, &result, &config.event);
    Ok(EventReport { result, analysis })
}

/// Validates and prices a prospective event.
pub fn pricing_report(input: &PricingInput, config: &EngineConfig) -> Result<PricingReport> {
    validate_pricing(input)?;
    let result = recommend_pricing(input);
    let insights = pricing_insights(input, &result, &config.pricing);
    Ok(PricingReport { result, insights })
}

/// One calculation in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisRequest {
    Annual(AnnualInput),
    Event(EventInput),
    Pricing(PricingInput),
}

/// Outcome of one batch entry, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisReport {
    Annual(AnnualReport),
    Event(EventReport),
    Pricing(PricingReport),
    /// The request failed its preconditions and was not calculated.
    Rejected { errors: Vec<String> },
}

/// Aggregate result of [`run_batch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub reports: Vec<AnalysisReport>,
    pub rejected: usize,
}

/// Evaluates a single request, turning precondition failures into a
/// [`AnalysisReport::Rejected`] entry.
pub fn evaluate(request: &AnalysisRequest, config: &EngineConfig) -> AnalysisReport {
    let outcome = match request {
        AnalysisRequest::Annual(input) => annual_report(input, config).map(AnalysisReport::Annual),
        AnalysisRequest::Event(input) => event_report(input, config).map(AnalysisReport::Event),
        AnalysisRequest::Pricing(input) => {
            pricing_report(input, config).map(AnalysisReport::Pricing)
        }
    };
    match outcome {
        Ok(report) => report,
        Err(crate::error::EngineError::Invalid(errors)) => AnalysisReport::Rejected {
            errors: errors.iter().map(|e| e.to_string()).collect(),
        },
        Err(other) => AnalysisReport::Rejected {
            errors: vec![other.to_string()],
        },
    }
}

/// Evaluates every request in parallel.  Reports keep the order of the
/// requests.
pub fn run_batch(requests: Vec<AnalysisRequest>, config: &EngineConfig) -> BatchResult {
    let reports: Vec<AnalysisReport> = requests
        .into_par_iter()
        .map(|request| evaluate(&request, config))
        .collect();
    let rejected = reports
        .iter()
        .filter(|r| matches!(r, AnalysisReport::Rejected { .. }))
        .count();
    if rejected > 0 {
        warn!("batch: {} of {} requests rejected", rejected, reports.len());
    }
    info!("batch: evaluated {} requests", reports.len());
    BatchResult { reports, rejected }
}
