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

use serde::{Deserialize, Serialize};

use crate::validation::PhoneValidationResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreachRecord {
    pub name: String,
    pub date: String,
    pub description: String,
    pub data_classes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataBreachInfo {
    pub breached: bool,
    pub breaches: Vec<BreachRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPlatform {
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaInfo {
    pub platforms: Vec<SocialPlatform>,
}

/// Externally sourced exposure data for one number. Passed through to the
/// report untouched and only read for the breach flag and platform count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exposure {
    pub breaches: Option<DataBreachInfo>,
    pub social_media: Option<SocialMediaInfo>,
}

impl Exposure {
    pub fn breached(&self) -> bool {
        self.breaches.as_ref().is_some_and(|b| b.breached)
    }

    pub fn social_platform_count(&self) -> usize {
        self.social_media.as_ref().map_or(0, |s| s.platforms.len())
    }
}

/// Provides exposure data for validated numbers. Only consulted when the
/// number is valid.
pub trait ExposureSource: Send + Sync {
    fn exposure(&self, validation: &PhoneValidationResult) -> Exposure;
}

/// Attaches nothing, so only the carrier line type and jitter contribute to
/// the score.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExposure;

impl ExposureSource for NoExposure {
    fn exposure(&self, _validation: &PhoneValidationResult) -> Exposure {
        Exposure::default()
    }
}

/// Attaches the same fixtures to every valid number.
#[derive(Debug, Default, Clone)]
pub struct StaticExposure {
    exposure: Exposure,
}

impl StaticExposure {
    pub fn new(breaches: Option<DataBreachInfo>, social_media: Option<SocialMediaInfo>) -> Self {
        Self { exposure: Exposure { breaches, social_media } }
    }
}

impl ExposureSource for StaticExposure {
    fn exposure(&self, _validation: &PhoneValidationResult) -> Exposure {
        self.exposure.clone()
    }
}
