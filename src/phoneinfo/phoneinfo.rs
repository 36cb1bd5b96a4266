// Copyright (C) 2009 The Libphonenumber Authors
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

use std::path::{Path, PathBuf};

use log::{error, trace};
use phonenumber::{Mode, PhoneNumber};

use super::{
    PhoneNumberType, PrefixData,
    helper_constants::{PREFIX_FILE_EXT, TIMEZONE_MAP_FILE, TIMEZONE_SEPARATOR, UNKNOWN_TIMEZONE},
    helper_functions::{
        check_premium_rate, check_validity_for_region, country_code_str, country_name,
        detect_formatting_errors, e164_digits, fetch_country_info, format_as, format_number,
        is_valid_number, national_number_length, number_type, suggest_correct_format,
    },
    report::{Comparison, NumberReport, RegionCheck},
};
use crate::{i18n::RegionCode, prefix_cache::PrefixCache};

/// Geocoding, carrier and timezone lookups over libphonenumber prefix data,
/// plus the report assembled from them.
pub struct PhoneInfo {
    /// Root holding `geocoding/`, `carrier/` and `timezones/`.
    data_dir: PathBuf,

    /// Language of geocoding and carrier descriptions, e.g. `en`.
    lang: String,

    cache: PrefixCache,
}

impl PhoneInfo {
    pub fn new(data_dir: impl Into<PathBuf>, lang: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            lang: lang.into(),
            cache: PrefixCache::with_capacity(8),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    fn prefix_file_path(&self, kind: PrefixData, country_code: &str) -> PathBuf {
        let mut path = self.data_dir.join(kind.dir_name());
        if kind.is_localized() {
            path.push(&self.lang);
            path.push(fast_cat::concat_str!(country_code, PREFIX_FILE_EXT));
        } else {
            path.push(TIMEZONE_MAP_FILE);
        }
        path
    }

    /// Description of the longest matching prefix of `number` in the data of
    /// the given kind. Unreadable data is logged and treated as absent.
    fn lookup(&self, kind: PrefixData, number: &PhoneNumber) -> Option<String> {
        let path = self.prefix_file_path(kind, &country_code_str(number));
        let map = match self.cache.get_map(&path) {
            Ok(Some(map)) => map,
            Ok(None) => return None,
            Err(err) => {
                error!("Could not load prefix data {}: {}", path.display(), err);
                return None;
            }
        };
        let digits = e164_digits(number);
        let found = map.lookup(&digits).map(str::to_owned);
        trace!("{:?} lookup for {}: {:?}", kind, digits, found);
        found
    }

    /// Timezones the number may belong to; `["Etc/Unknown"]` without data.
    pub fn time_zones_for_number(&self, number: &PhoneNumber) -> Vec<String> {
        match self.lookup(PrefixData::Timezones, number) {
            Some(zones) => zones
                .split(TIMEZONE_SEPARATOR)
                .map(str::trim)
                .filter(|zone| !zone.is_empty())
                .map(str::to_owned)
                .collect(),
            None => vec![UNKNOWN_TIMEZONE.to_owned()],
        }
    }

    /// Geographic description (city or area) of a valid number.
    ///
    /// Without a matching prefix this is the English name of the number's
    /// country. Invalid and non-geographic numbers give an empty string.
    pub fn description_for_number(&self, number: &PhoneNumber) -> String {
        if !is_valid_number(number) {
            return String::new();
        }
        match self.lookup(PrefixData::Geocoding, number) {
            Some(description) => description,
            None => country_name(&RegionCode::of(number)).to_owned(),
        }
    }

    /// Name of the carrier the number was originally allocated to.
    ///
    /// Only numbers that may be mobile are looked up, anything else yields
    /// an empty string.
    pub fn name_for_number(&self, number: &PhoneNumber) -> String {
        self.carrier_for_type(number, number_type(number))
    }

    fn carrier_for_type(&self, number: &PhoneNumber, kind: PhoneNumberType) -> String {
        if !kind.may_have_carrier() {
            return String::new();
        }
        self.lookup(PrefixData::Carrier, number)
            .unwrap_or_default()
    }

    pub fn report(&self, number: &PhoneNumber) -> NumberReport {
        let (international, national) = format_number(number);
        let kind = number_type(number);
        let formatting_issues = detect_formatting_errors(number);
        let suggested_format = if formatting_issues.is_empty() {
            None
        } else {
            Some(suggest_correct_format(number))
        };
        let region = RegionCode::of(number);

        NumberReport {
            e164: format_as(number, Mode::E164),
            international,
            national,
            number_type: kind,
            number_type_label: kind.label(),
            number_length: national_number_length(number),
            premium_rate: check_premium_rate(number),
            formatting_issues,
            suggested_format,
            country_code: country_code_str(number),
            country_info: fetch_country_info(&region),
            region,
            time_zones: self.time_zones_for_number(number),
            location: self.description_for_number(number),
            carrier: self.carrier_for_type(number, kind),
        }
    }

    pub fn check_region(&self, number: &str, region_code: &str) -> RegionCheck {
        RegionCheck {
            region: region_code.to_owned(),
            valid: check_validity_for_region(number, region_code),
        }
    }

    pub fn compare(&self, first: &PhoneNumber, second: &PhoneNumber) -> Comparison {
        Comparison {
            same_region: RegionCode::of(first) == RegionCode::of(second),
            same_carrier: self.name_for_number(first) == self.name_for_number(second),
        }
    }
}
