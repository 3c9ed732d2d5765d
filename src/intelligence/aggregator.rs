// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::{debug, trace};

use super::{
    carrier::{CarrierInfo, CarrierLookup, CarrierSource, DisabledLookup, LookupOutcome},
    exposure::{ExposureSource, NoExposure},
    fallback::FallbackCarrierTable,
    report::IntelligenceReport,
    risk::{compute_risk_score, JitterSource, RandomJitter, RiskSignals},
    veriphone::VeriphoneClient,
};
use crate::{
    config::LookupConfig,
    errors::IntelligenceError,
    validation::{LineType, PhoneValidationResult, PhoneValidator, PHONE_VALIDATOR},
};

/// Turns a raw phone number into an [`IntelligenceReport`].
///
/// Every collaborator is a seam: the live lookup, the fallback table, the
/// exposure data and the jitter source can all be swapped, which is how the
/// tests pin the otherwise random risk score.
pub struct IntelligenceAggregator {
    validator: &'static PhoneValidator,
    lookup: Box<dyn CarrierLookup>,
    fallback: FallbackCarrierTable,
    exposure: Box<dyn ExposureSource>,
    jitter: Box<dyn JitterSource>,
}

impl Default for IntelligenceAggregator {
    /// An aggregator that never goes to the network.
    fn default() -> Self {
        Self::new(DisabledLookup)
    }
}

impl IntelligenceAggregator {
    pub fn new(lookup: impl CarrierLookup + 'static) -> Self {
        Self {
            validator: &PHONE_VALIDATOR,
            lookup: Box::new(lookup),
            fallback: FallbackCarrierTable::default(),
            exposure: Box::new(NoExposure),
            jitter: Box::new(RandomJitter::new()),
        }
    }

    /// Aggregator backed by the Veriphone service described by `config`.
    pub fn from_config(config: &LookupConfig) -> Result<Self, IntelligenceError> {
        Ok(Self::new(VeriphoneClient::new(config)?))
    }

    pub fn from_env() -> Result<Self, IntelligenceError> {
        Self::from_config(&LookupConfig::from_env())
    }

    pub fn with_fallback_table(mut self, fallback: FallbackCarrierTable) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_exposure(mut self, exposure: impl ExposureSource + 'static) -> Self {
        self.exposure = Box::new(exposure);
        self
    }

    pub fn with_jitter(mut self, jitter: impl JitterSource + 'static) -> Self {
        self.jitter = Box::new(jitter);
        self
    }

    /// Validates `raw`, resolves its carrier and scores it.
    ///
    /// Invalid numbers short-circuit: no lookup is attempted and the score
    /// is 0. For valid numbers exactly one live lookup is made; if it is
    /// unavailable for any reason the fallback table answers instead.
    pub async fn get_intelligence(&self, raw: &str) -> IntelligenceReport {
        let validation = self.validator.validate(raw);
        if !validation.is_valid {
            trace!("Skipping carrier lookup for invalid number {:?}", raw);
            return IntelligenceReport::invalid(validation);
        }

        let (carrier, carrier_source) = self.resolve_carrier(&validation).await;
        let exposure = self.exposure.exposure(&validation);

        let signals = RiskSignals {
            breached: exposure.breached(),
            voip: carrier.line_type == LineType::Voip,
            social_platforms: exposure.social_platform_count(),
        };
        let risk_score = compute_risk_score(&signals, self.jitter.as_ref());

        IntelligenceReport {
            validation,
            carrier: Some(carrier),
            carrier_source: Some(carrier_source),
            breaches: exposure.breaches,
            social_media: exposure.social_media,
            risk_score,
            last_updated: chrono::Utc::now(),
        }
    }

    async fn resolve_carrier(
        &self,
        validation: &PhoneValidationResult,
    ) -> (CarrierInfo, CarrierSource) {
        match self.lookup.lookup(&validation.formatted_international).await {
            LookupOutcome::Success(carrier) => (carrier, CarrierSource::Live),
            LookupOutcome::Unavailable(reason) => {
                debug!(
                    "Live carrier lookup unavailable for {}: {}",
                    validation.formatted_international, reason
                );
                self.fallback.resolve(validation)
            }
        }
    }
}
