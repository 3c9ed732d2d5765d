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

use std::{collections::HashMap, sync::LazyLock};

use log::trace;

use super::carrier::{CarrierInfo, CarrierSource, UNKNOWN_CARRIER, UNKNOWN_REGION};
use crate::validation::{LineType, PhoneValidationResult};

static SEEDED_CARRIERS: LazyLock<FallbackCarrierTable> = LazyLock::new(|| {
    let seed = |name: &str, country: &str, region: &str| {
        CarrierInfo::new(name, LineType::Mobile, country, Some(region.to_owned()))
    };
    FallbackCarrierTable::empty()
        .with_entry("US", seed("US Carrier", "United States", "North America"))
        .with_entry("CA", seed("Canadian Carrier", "Canada", "North America"))
        .with_entry("GB", seed("UK Carrier", "United Kingdom", "Europe"))
        .with_entry("SG", seed("Singapore Carrier", "Singapore", "Asia Pacific"))
        .with_entry("AU", seed("Australian Carrier", "Australia", "Asia Pacific"))
        .with_entry("DE", seed("German Carrier", "Germany", "Europe"))
        .with_entry("FR", seed("French Carrier", "France", "Europe"))
        .with_entry("JP", seed("Japanese Carrier", "Japan", "Asia Pacific"))
        .with_entry("IN", seed("Indian Carrier", "India", "Asia Pacific"))
        .with_entry("BR", seed("Brazilian Carrier", "Brazil", "South America"))
});

/// Static carrier records, keyed by region code, used when the live lookup
/// is unavailable.
///
/// [`Default`] gives the seeded table; build a custom one with
/// [`FallbackCarrierTable::empty`] and [`FallbackCarrierTable::with_entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackCarrierTable {
    entries: HashMap<String, CarrierInfo>,
}

impl Default for FallbackCarrierTable {
    fn default() -> Self {
        SEEDED_CARRIERS.clone()
    }
}

impl FallbackCarrierTable {
    pub fn empty() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Adds or replaces the record for `region_code`.
    pub fn with_entry(mut self, region_code: impl Into<String>, carrier: CarrierInfo) -> Self {
        self.entries.insert(region_code.into(), carrier);
        self
    }

    pub fn get(&self, region_code: &str) -> Option<&CarrierInfo> {
        self.entries.get(region_code)
    }

    pub fn region_codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Picks the carrier for a validated number: the table entry for its
    /// region, otherwise an "Unknown Carrier" record built from the
    /// validation itself.
    pub fn resolve(&self, validation: &PhoneValidationResult) -> (CarrierInfo, CarrierSource) {
        if let Some(carrier) = self.get(&validation.country_code) {
            trace!("Using fallback carrier for region {}", validation.country_code);
            return (carrier.clone(), CarrierSource::Fallback);
        }

        trace!(
            "No fallback carrier for region {:?}, synthesizing one",
            validation.country_code
        );
        let carrier = CarrierInfo::new(
            UNKNOWN_CARRIER,
            validation.line_type,
            validation.country_name.clone(),
            Some(UNKNOWN_REGION.to_owned()),
        );
        (carrier, CarrierSource::Synthesized)
    }
}
