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

use super::LineType;

/// Structured outcome of validating one raw phone number string.
///
/// An invalid number is a normal outcome, not an error: the formatted
/// fields then echo the caller's input untouched and every derived field
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneValidationResult {
    pub is_valid: bool,
    /// e.g. `+41 44 668 18 00`
    pub formatted_international: String,
    /// e.g. `044 668 18 00`
    pub formatted_national: String,
    /// ISO 3166-1 alpha-2 region code.
    pub country_code: String,
    pub country_name: String,
    pub line_type: LineType,
}

impl PhoneValidationResult {
    pub fn invalid(raw: &str) -> Self {
        Self {
            is_valid: false,
            formatted_international: raw.to_owned(),
            formatted_national: raw.to_owned(),
            country_code: String::new(),
            country_name: String::new(),
            line_type: LineType::Unknown,
        }
    }
}
