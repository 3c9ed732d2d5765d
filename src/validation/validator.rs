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

use std::panic::{self, AssertUnwindSafe};

use log::{error, trace};
use phonenumber::{metadata::DATABASE, Mode, PhoneNumber};
use regex::Regex;

use super::{
    helper_constants::{
        DIGITS, EXTENSION_CHARS, GROUP_SEPARATORS, MIN_VIABLE_DIGITS, PLUS_CHARS, VALID_ALPHA,
        VALID_PUNCTUATION,
    },
    regex_util::RegexFullMatch,
    LineType, PhoneValidationResult,
};
use crate::i18n::{country_name_for_region, RegionCode};

pub struct PhoneValidator {
    /// Cheap structural pre-check run before the parser: optional plus
    /// signs, at least `MIN_VIABLE_DIGITS` digits separated by valid
    /// punctuation, then anything that may trail a number (letters,
    /// extension separators).
    viable_phone_number: Regex,
    group_separators: Regex,
}

impl PhoneValidator {
    pub(super) fn new() -> Self {
        let pattern = format!(
            "^[{PLUS_CHARS}]*(?:[{VALID_PUNCTUATION}]*{DIGITS}){{{MIN_VIABLE_DIGITS},}}\
            [{VALID_PUNCTUATION}{VALID_ALPHA}{DIGITS}{EXTENSION_CHARS}]*$"
        );
        Self {
            viable_phone_number: Self::compile(&pattern, "viable number"),
            group_separators: Self::compile(GROUP_SEPARATORS, "group separator"),
        }
    }

    fn compile(pattern: &str, what: &str) -> Regex {
        match Regex::new(pattern) {
            Err(err) => {
                let err_message = format!("Could not compile {} pattern: {:?}", what, err);
                error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(regex) => regex,
        }
    }

    /// Checks whether `number` looks enough like a phone number to be worth
    /// parsing. Surrounding whitespace is ignored.
    pub fn is_viable_phone_number(&self, number: &str) -> bool {
        self.viable_phone_number.full_match(number.trim())
    }

    /// Validates `raw` and describes it. Never fails: anything the parser
    /// rejects, or chokes on, yields [`PhoneValidationResult::invalid`].
    ///
    /// Only internationally written numbers (leading `+`) can be valid, no
    /// default region is assumed.
    pub fn validate(&self, raw: &str) -> PhoneValidationResult {
        let candidate = raw.trim();
        if !self.is_viable_phone_number(candidate) {
            trace!("Not a viable phone number: {:?}", raw);
            return PhoneValidationResult::invalid(raw);
        }

        let normalized = dec_from_char::normalize_decimals(candidate);
        let described = panic::catch_unwind(AssertUnwindSafe(|| {
            self.parse_and_describe(raw, &*normalized)
        }));

        match described {
            Ok(Some(result)) => result,
            Ok(None) => PhoneValidationResult::invalid(raw),
            Err(_) => {
                error!("Phone number parser panicked on input {:?}", raw);
                PhoneValidationResult::invalid(raw)
            }
        }
    }

    fn parse_and_describe(&self, raw: &str, normalized: &str) -> Option<PhoneValidationResult> {
        let number = match phonenumber::parse(None, normalized) {
            Ok(number) => number,
            Err(err) => {
                trace!("Failed to parse {:?}: {:?}", raw, err);
                return None;
            }
        };

        if !phonenumber::is_valid(&number) {
            trace!("Parsed {:?} but it is not a valid number for its region", raw);
            return None;
        }
        Some(self.describe(&number))
    }

    fn describe(&self, number: &PhoneNumber) -> PhoneValidationResult {
        // Non-geographical numbers (+800 and friends) have no region.
        let country_code = number
            .country()
            .id()
            .map(|id| format!("{:?}", id))
            .filter(|code| RegionCode::is_known(code))
            .unwrap_or_default();

        PhoneValidationResult {
            is_valid: true,
            formatted_international: self.international_format(number),
            formatted_national: number.format().mode(Mode::National).to_string(),
            country_name: country_name_for_region(&country_code),
            country_code,
            line_type: LineType::from(number.number_type(&DATABASE)),
        }
    }

    /// International format with every digit group separated by a single
    /// space, e.g. `+1 650 253 0000` rather than `+1 650-253-0000`.
    fn international_format(&self, number: &PhoneNumber) -> String {
        let formatted = number.format().mode(Mode::International).to_string();
        self.group_separators
            .replace_all(formatted.trim(), " ")
            .into_owned()
    }
}
