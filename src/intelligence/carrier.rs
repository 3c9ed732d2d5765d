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

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{errors::UnavailableReason, validation::LineType};

pub const UNKNOWN_CARRIER: &'static str = "Unknown Carrier";
pub const UNKNOWN_COUNTRY: &'static str = "Unknown";
pub const UNKNOWN_REGION: &'static str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierInfo {
    pub name: String,
    pub line_type: LineType,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl CarrierInfo {
    pub fn new(
        name: impl Into<String>,
        line_type: LineType,
        country: impl Into<String>,
        region: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            line_type,
            country: country.into(),
            region,
        }
    }
}

/// Where the carrier attached to a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarrierSource {
    /// Answered by the live lookup service.
    Live,
    /// Seeded entry of the fallback table.
    Fallback,
    /// Neither the service nor the table knew the number.
    Synthesized,
}

/// Result of a single live lookup attempt.
#[derive(Debug)]
pub enum LookupOutcome {
    Success(CarrierInfo),
    Unavailable(UnavailableReason),
}

/// A source of live carrier metadata.
///
/// Implementations must not fail: anything that goes wrong is reported as
/// [`LookupOutcome::Unavailable`].
#[async_trait]
pub trait CarrierLookup: Send + Sync {
    /// Looks up the carrier of `e164_number`, an internationally formatted
    /// number. One attempt, no retries.
    async fn lookup(&self, e164_number: &str) -> LookupOutcome;
}

/// Lookup that never answers, for offline use and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledLookup;

#[async_trait]
impl CarrierLookup for DisabledLookup {
    async fn lookup(&self, _e164_number: &str) -> LookupOutcome {
        LookupOutcome::Unavailable(UnavailableReason::Disabled)
    }
}

/// Maps a provider's free-form phone type onto a [`LineType`].
///
/// Matching is case-insensitive on substrings. Anything unrecognised,
/// including a missing value, counts as mobile.
pub fn map_provider_line_type(provider_type: Option<&str>) -> LineType {
    let Some(provider_type) = provider_type else {
        return LineType::Mobile;
    };
    let provider_type = provider_type.to_lowercase();

    if provider_type.contains("mobile") || provider_type.contains("cell") {
        LineType::Mobile
    } else if provider_type.contains("landline") || provider_type.contains("fixed") {
        LineType::Landline
    } else if provider_type.contains("voip") || provider_type.contains("virtual") {
        LineType::Voip
    } else {
        LineType::Mobile
    }
}
