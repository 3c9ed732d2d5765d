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

use std::{env, time::Duration};

use log::warn;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &'static str = "https://api.veriphone.io/v2/verify";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub const API_KEY_VAR: &'static str = "VERIPHONE_API_KEY";
pub const ENDPOINT_VAR: &'static str = "VERIPHONE_ENDPOINT";
pub const TIMEOUT_MS_VAR: &'static str = "VERIPHONE_TIMEOUT_MS";

/// Settings for the live carrier lookup.
///
/// A missing `api_key` is not an error: the lookup is then reported as
/// unavailable without touching the network and the fallback table is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    #[serde(with = "timeout_millis")]
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl LookupConfig {
    /// Reads `VERIPHONE_API_KEY`, `VERIPHONE_ENDPOINT` and
    /// `VERIPHONE_TIMEOUT_MS`, keeping defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.api_key = lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty());
        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|e| !e.trim().is_empty()) {
            config.endpoint = endpoint;
        }
        if let Some(raw) = lookup(TIMEOUT_MS_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(millis) => config.timeout = Duration::from_millis(millis),
                Err(err) => warn!(
                    "Ignoring {}={:?} ({}), using {:?}",
                    TIMEOUT_MS_VAR, raw, err, DEFAULT_TIMEOUT
                ),
            }
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

mod timeout_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
