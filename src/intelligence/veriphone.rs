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

use async_trait::async_trait;
use log::{debug, trace};
use reqwest::{header::ACCEPT, Url};
use serde::Deserialize;

use super::carrier::{
    map_provider_line_type, CarrierInfo, CarrierLookup, LookupOutcome, UNKNOWN_CARRIER,
    UNKNOWN_COUNTRY,
};
use crate::{
    config::LookupConfig,
    errors::{IntelligenceError, UnavailableReason},
    validation::PLUS_SIGN,
};

/// Client for the Veriphone `verify` endpoint.
pub struct VeriphoneClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
    timeout: Duration,
}

/// The subset of the verify payload we read. Every field is optional so
/// that a sparse answer still maps onto defaults instead of failing.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    status: Option<String>,
    message: Option<String>,
    carrier: Option<String>,
    phone_type: Option<String>,
    country: Option<String>,
    phone_region: Option<String>,
}

impl VeriphoneClient {
    /// Builds the client. Fails only if the endpoint is not a URL or the
    /// HTTP client itself cannot be constructed; a missing API key is
    /// accepted and makes every lookup unavailable.
    pub fn new(config: &LookupConfig) -> Result<Self, IntelligenceError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|err| {
            IntelligenceError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: err.to_string(),
            }
        })?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(IntelligenceError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            timeout: config.timeout,
        })
    }

    async fn verify(
        &self,
        api_key: &str,
        e164_number: &str,
    ) -> Result<CarrierInfo, UnavailableReason> {
        let number = if e164_number.starts_with(PLUS_SIGN) {
            e164_number.to_owned()
        } else {
            format!("{PLUS_SIGN}{e164_number}")
        };

        trace!("Requesting carrier for {} from {}", number, self.endpoint);
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .query(&[("key", api_key), ("phone", number.as_str())])
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UnavailableReason::HttpStatus { status: status.as_u16() });
        }

        let body = response.text().await.map_err(|err| self.transport_error(err))?;
        parse_verify_response(&body)
    }

    fn transport_error(&self, err: reqwest::Error) -> UnavailableReason {
        if err.is_timeout() {
            UnavailableReason::Timeout(self.timeout)
        } else {
            UnavailableReason::Transport(err)
        }
    }
}

#[async_trait]
impl CarrierLookup for VeriphoneClient {
    async fn lookup(&self, e164_number: &str) -> LookupOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("No carrier lookup API key configured");
            return LookupOutcome::Unavailable(UnavailableReason::MissingApiKey);
        };

        match self.verify(api_key, e164_number).await {
            Ok(carrier) => LookupOutcome::Success(carrier),
            Err(reason) => LookupOutcome::Unavailable(reason),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Interprets a verify payload. A missing or empty `status`, or a status
/// of `error`, means the provider could not answer.
pub(crate) fn parse_verify_response(body: &str) -> Result<CarrierInfo, UnavailableReason> {
    let response: VerifyResponse = serde_json::from_str(body)?;

    match response.status.as_deref() {
        None | Some("") | Some("error") => {
            return Err(UnavailableReason::Provider {
                message: non_empty(response.message).unwrap_or_else(|| "Unknown error".to_owned()),
            });
        }
        Some(_) => {}
    }

    Ok(CarrierInfo {
        name: non_empty(response.carrier).unwrap_or_else(|| UNKNOWN_CARRIER.to_owned()),
        line_type: map_provider_line_type(response.phone_type.as_deref()),
        country: non_empty(response.country).unwrap_or_else(|| UNKNOWN_COUNTRY.to_owned()),
        region: non_empty(response.phone_region),
    })
}
