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
use strum::{AsRefStr, Display, EnumIter};

/// Classification of the service behind a phone number.
///
/// This is deliberately coarser than the numbering-plan categories the
/// parser knows about: everything that is not clearly a mobile, a
/// landline or an internet-based line collapses into [`LineType::Unknown`].
#[derive(
    Debug, EnumIter, AsRefStr, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    /// **Mobile numbers.**
    /// Assigned to wireless devices like mobile phones.
    Mobile,
    /// **Landline numbers.**
    /// Traditional fixed-line numbers tied to a geographic location.
    Landline,
    /// **Voice over IP (VoIP) numbers.**
    /// Numbers used by services that carry voice calls over the internet.
    Voip,
    /// **Unknown type.**
    /// Invalid numbers, and valid numbers whose category is none of the
    /// above (toll free, premium rate, shared cost, pagers, and regions
    /// such as the USA where fixed-line and mobile ranges are shared).
    Unknown,
}

impl From<phonenumber::Type> for LineType {
    fn from(value: phonenumber::Type) -> Self {
        match value {
            phonenumber::Type::Mobile => LineType::Mobile,
            phonenumber::Type::FixedLine => LineType::Landline,
            phonenumber::Type::Voip => LineType::Voip,
            _ => LineType::Unknown,
        }
    }
}
