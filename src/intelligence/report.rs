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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    carrier::{CarrierInfo, CarrierSource},
    exposure::{DataBreachInfo, SocialMediaInfo},
};
use crate::validation::PhoneValidationResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligenceReport {
    pub validation: PhoneValidationResult,
    /// Absent only when validation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<CarrierInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_source: Option<CarrierSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breaches: Option<DataBreachInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMediaInfo>,
    /// In `0..=100`.
    pub risk_score: u8,
    pub last_updated: DateTime<Utc>,
}

impl IntelligenceReport {
    pub(crate) fn invalid(validation: PhoneValidationResult) -> Self {
        Self {
            validation,
            carrier: None,
            carrier_source: None,
            breaches: None,
            social_media: None,
            risk_score: 0,
            last_updated: Utc::now(),
        }
    }
}
