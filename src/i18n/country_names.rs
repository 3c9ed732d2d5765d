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

/// Display names for the regions the report knows how to label. Regions
/// missing from this table are displayed by their code.
static COUNTRY_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("US", "United States"),
        ("CA", "Canada"),
        ("GB", "United Kingdom"),
        ("AU", "Australia"),
        ("DE", "Germany"),
        ("FR", "France"),
        ("IT", "Italy"),
        ("ES", "Spain"),
        ("BR", "Brazil"),
        ("MX", "Mexico"),
        ("IN", "India"),
        ("CN", "China"),
        ("JP", "Japan"),
        ("KR", "South Korea"),
        ("RU", "Russia"),
        ("SG", "Singapore"),
        ("MY", "Malaysia"),
        ("TH", "Thailand"),
        ("VN", "Vietnam"),
        ("PH", "Philippines"),
        ("ID", "Indonesia"),
        ("HK", "Hong Kong"),
        ("TW", "Taiwan"),
        ("NZ", "New Zealand"),
        ("ZA", "South Africa"),
        ("NG", "Nigeria"),
        ("KE", "Kenya"),
        ("EG", "Egypt"),
        ("SA", "Saudi Arabia"),
        ("AE", "United Arab Emirates"),
        ("TR", "Turkey"),
        ("IL", "Israel"),
        ("GR", "Greece"),
        ("PT", "Portugal"),
        ("NL", "Netherlands"),
        ("BE", "Belgium"),
        ("CH", "Switzerland"),
        ("AT", "Austria"),
        ("SE", "Sweden"),
        ("NO", "Norway"),
        ("DK", "Denmark"),
        ("FI", "Finland"),
        ("PL", "Poland"),
    ])
});

/// Returns the display name for `region_code`, or the code itself when the
/// region has no entry. Empty input yields an empty name.
pub fn country_name_for_region(region_code: &str) -> String {
    COUNTRY_NAMES
        .get(region_code)
        .map(|name| name.to_string())
        .unwrap_or_else(|| region_code.to_string())
}

#[cfg(test)]
mod tests {
    use super::country_name_for_region;

    #[test]
    fn known_regions_have_names() {
        assert_eq!(country_name_for_region("US"), "United States");
        assert_eq!(country_name_for_region("CH"), "Switzerland");
        assert_eq!(country_name_for_region("AE"), "United Arab Emirates");
    }

    #[test]
    fn unknown_region_falls_back_to_code() {
        assert_eq!(country_name_for_region("AR"), "AR");
        assert_eq!(country_name_for_region(""), "");
    }
}
