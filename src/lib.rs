//! Phone number validation and carrier intelligence.
//!
//! [`validate`] parses and formats a raw number. [`IntelligenceAggregator`]
//! builds on it: it looks the carrier up live, falls back to a static
//! per-country table when that fails, and attaches a heuristic risk score.

mod config;
mod errors;
pub mod i18n;
pub mod intelligence;
pub mod validation;

#[cfg(test)]
mod tests;

pub use config::LookupConfig;
pub use errors::{IntelligenceError, UnavailableReason};
pub use i18n::country_name_for_region;
pub use intelligence::{
    compute_risk_score, map_provider_line_type, CarrierInfo, CarrierLookup, CarrierSource,
    DataBreachInfo, DisabledLookup, ExposureSource, FallbackCarrierTable, FixedJitter,
    IntelligenceAggregator, IntelligenceReport, JitterSource, LookupOutcome, NoExposure,
    RandomJitter, RiskSignals, SocialMediaInfo, StaticExposure, VeriphoneClient,
};
pub use validation::{validate, LineType, PhoneValidationResult, PhoneValidator, PHONE_VALIDATOR};

/// Runs one request through an aggregator configured from the environment
/// (see [`LookupConfig::from_env`]).
///
/// Errors only if the lookup client cannot be set up; the report itself
/// always comes back, falling back to static data where needed.
pub async fn get_intelligence(raw: &str) -> Result<IntelligenceReport, IntelligenceError> {
    let aggregator = IntelligenceAggregator::from_env()?;
    Ok(aggregator.get_intelligence(raw).await)
}
