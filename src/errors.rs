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

use std::time::Duration;

use thiserror::Error;

/// Why a live carrier lookup produced no data. Never surfaced to callers of
/// the aggregator: every variant routes the request onto the fallback table.
#[derive(Debug, Error)]
pub enum UnavailableReason {
    #[error("No carrier lookup API key configured")]
    MissingApiKey,
    #[error("Carrier lookup is disabled")]
    Disabled,
    #[error("Carrier lookup timed out after {0:?}")]
    Timeout(Duration),
    #[error("Carrier lookup transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Carrier lookup returned HTTP {status}")]
    HttpStatus { status: u16 },
    #[error("Carrier lookup returned a malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("Carrier lookup reported an error: {message}")]
    Provider { message: String },
}

/// The only error this crate hands to its callers: the intelligence
/// pipeline could not even be started. Per-request failures are reported
/// in-band by [`crate::IntelligenceReport`] instead.
#[derive(Debug, Error)]
pub enum IntelligenceError {
    #[error("Failed to build carrier lookup HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Invalid carrier lookup endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
