mod aggregator;
pub mod carrier;
pub mod exposure;
mod fallback;
mod report;
pub mod risk;
mod veriphone;

pub use aggregator::IntelligenceAggregator;
pub use carrier::{
    map_provider_line_type, CarrierInfo, CarrierLookup, CarrierSource, DisabledLookup,
    LookupOutcome,
};
pub use exposure::{
    BreachRecord, DataBreachInfo, Exposure, ExposureSource, NoExposure, SocialMediaInfo,
    SocialPlatform, StaticExposure,
};
pub use fallback::FallbackCarrierTable;
pub use report::IntelligenceReport;
pub use risk::{compute_risk_score, FixedJitter, JitterSource, RandomJitter, RiskSignals};
pub use veriphone::VeriphoneClient;
