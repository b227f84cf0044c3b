//! ClickFinance engine library crate.
//!
//! Profitability calculators for freelance photographers who sell event
//! photos through commission based platforms.  Three independent, pure
//! calculators share a depreciation model and a set of ratio helpers:
//!
//! * [`annual::analyze_annual`] for a year of activity,
//! * [`event::analyze_event`] for a single event,
//! * [`pricing::recommend_pricing`] for prospective pricing.
//!
//! [`engine`] pairs them with input validation and advisory messages;
//! [`api`] serves them over HTTP.

pub mod models;
pub mod metrics;
pub mod depreciation;
pub mod tier;
pub mod config;
pub mod annual;
pub mod event;
pub mod pricing;
pub mod locale;
pub mod validation;
pub mod error;
pub mod engine;
pub mod api;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
