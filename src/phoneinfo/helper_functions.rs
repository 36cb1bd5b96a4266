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

//! Thin glue over the `phonenumber` crate. Everything that depends on
//! numbering plan metadata is delegated; the functions here only combine
//! and label the library's answers.

use log::{debug, trace};
use phonenumber::{Metadata, Mode, PhoneNumber, Type, country, metadata::DATABASE};

use crate::i18n::RegionCode;

use super::{
    PhoneNumberType,
    helper_constants::{
        COUNTRY_INFO, COUNTRY_INFO_NOT_AVAILABLE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
        NOT_POSSIBLE_MESSAGE, NOT_VALID_MESSAGE, PLUS_SIGN,
    },
};

/// Trims the input, folds any Unicode decimal digits to ASCII and hands the
/// result to the library parser.
pub fn parse_number(
    number: &str,
    default_region: Option<country::Id>,
) -> Result<PhoneNumber, phonenumber::ParseError> {
    let normalized = dec_from_char::normalize_decimals(number.trim());
    trace!("Parsing {:?} (default region {:?})", normalized, default_region);
    phonenumber::parse(default_region, normalized)
}

/// Returns the E.164 form of `number`, or `None` when it can't be parsed.
///
/// Without a default region the input must carry its country calling code
/// (a leading `+`).
pub fn normalize_number(number: &str) -> Option<String> {
    normalize_number_in(number, None)
}

/// Like [`normalize_number`], but national-format input is accepted when a
/// default region is given.
pub fn normalize_number_in(number: &str, default_region: Option<country::Id>) -> Option<String> {
    match parse_number(number, default_region) {
        Ok(parsed) => Some(format_as(&parsed, Mode::E164)),
        Err(err) => {
            debug!("Could not normalize {:?}: {}", number, err);
            None
        }
    }
}

pub fn format_as(number: &PhoneNumber, mode: Mode) -> String {
    phonenumber::format(number).mode(mode).to_string()
}

/// Returns `(international, national)` renderings of the number.
pub fn format_number(number: &PhoneNumber) -> (String, String) {
    (
        format_as(number, Mode::International),
        format_as(number, Mode::National),
    )
}

/// Types checked before fixed line and mobile, most specific first.
const TYPE_PRECEDENCE: [Type; 8] = [
    Type::PremiumRate,
    Type::TollFree,
    Type::SharedCost,
    Type::Voip,
    Type::PersonalNumber,
    Type::Pager,
    Type::Uan,
    Type::Voicemail,
];

pub fn number_type(number: &PhoneNumber) -> PhoneNumberType {
    match number.number_type(&DATABASE) {
        Type::Unknown => region_metadata(number)
            .map_or(Type::Unknown, |meta| {
                classify(meta, &number.national().to_string())
            })
            .into(),
        kind => kind.into(),
    }
}

/// Type of a national significant number under the given region metadata.
fn classify(meta: &Metadata, national: &str) -> Type {
    let descriptors = meta.descriptors();
    if !descriptors.general().is_match(national) {
        return Type::Unknown;
    }
    let matches = |kind: Type| {
        descriptors
            .get(kind)
            .is_some_and(|descriptor| descriptor.is_match(national))
    };
    if let Some(kind) = TYPE_PRECEDENCE.into_iter().find(|kind| matches(*kind)) {
        return kind;
    }
    match (matches(Type::FixedLine), matches(Type::Mobile)) {
        (true, true) => Type::FixedLineOrMobile,
        (true, false) => Type::FixedLine,
        (false, true) => Type::Mobile,
        (false, false) => Type::Unknown,
    }
}

/// Metadata of the region the number belongs to.
///
/// The library attributes a region from the national number without its
/// leading zeros, so e.g. Italian landlines come back unattributed. Those
/// are matched here against every region sharing the calling code, falling
/// back to the main region of that code.
pub fn region_metadata(number: &PhoneNumber) -> Option<&'static Metadata> {
    if let Some(meta) = number.metadata(&DATABASE) {
        return Some(meta);
    }
    let regions = DATABASE.by_code(&number.country().code())?;
    let national = number.national().to_string();
    let found = regions
        .iter()
        .copied()
        .find(|meta| classify(meta, &national) != Type::Unknown)
        .or_else(|| regions.first().copied());
    trace!(
        "Region for +{} {} resolved from calling code: {:?}",
        number.country().code(),
        national,
        found.map(Metadata::id)
    );
    found
}

pub fn check_premium_rate(number: &PhoneNumber) -> bool {
    number_type(number) == PhoneNumberType::PremiumRate
}

/// Parses `number` with `region_code` as the default region and checks that
/// the result is a valid number of that region.
///
/// Never fails: unparseable numbers and unknown region codes give `false`.
pub fn check_validity_for_region(number: &str, region_code: &str) -> bool {
    let Some(region) = RegionCode::parse(region_code) else {
        debug!("Unknown region code {:?}", region_code);
        return false;
    };
    match parse_number(number, Some(region)) {
        Ok(parsed) => is_valid_number_for_region(&parsed, region),
        Err(err) => {
            debug!("Could not parse {:?} for region {:?}: {}", number, region, err);
            false
        }
    }
}

pub fn is_valid_number_for_region(number: &PhoneNumber, region: country::Id) -> bool {
    let code: &str = region.as_ref();
    number.is_valid() && region_metadata(number).is_some_and(|meta| meta.id() == code)
}

/// Digits of the number as dialed internationally, without the plus sign.
/// This is the key prefix data files are indexed by.
pub fn e164_digits(number: &PhoneNumber) -> String {
    let e164 = format_as(number, Mode::E164);
    match e164.strip_prefix(PLUS_SIGN) {
        Some(digits) => digits.to_owned(),
        None => e164,
    }
}

pub fn country_code_str(number: &PhoneNumber) -> String {
    let mut buf = itoa::Buffer::new();
    buf.format(number.country().code()).to_owned()
}

/// National significant number, including any leading zeros.
pub fn national_significant_number(number: &PhoneNumber) -> String {
    let digits = e164_digits(number);
    let country_code = country_code_str(number);
    match digits.strip_prefix(country_code.as_str()) {
        Some(nsn) => nsn.to_owned(),
        None => digits,
    }
}

/// Digit count of the national number read as an integer, so leading zeros
/// are not counted.
pub fn national_number_length(number: &PhoneNumber) -> usize {
    let mut buf = itoa::Buffer::new();
    buf.format(number.national().value()).len()
}

/// Coarse possibility check: the calling code must be assigned, to a region
/// or to a non-geographic entity, and the national significant number must
/// fit the global length bounds.
pub fn is_possible_number(number: &PhoneNumber) -> bool {
    let nsn_len = national_significant_number(number).len();
    let assigned = DATABASE.by_code(&number.country().code()).is_some();
    trace!("Possibility check: nsn length {}, assigned code {}", nsn_len, assigned);
    assigned && (MIN_LENGTH_FOR_NSN..=MAX_LENGTH_FOR_NSN).contains(&nsn_len)
}

pub fn is_valid_number(number: &PhoneNumber) -> bool {
    number.is_valid()
}

pub fn detect_formatting_errors(number: &PhoneNumber) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if !is_possible_number(number) {
        errors.push(NOT_POSSIBLE_MESSAGE);
    }
    if !is_valid_number(number) {
        errors.push(NOT_VALID_MESSAGE);
    }
    errors
}

pub fn suggest_correct_format(number: &PhoneNumber) -> String {
    format_as(number, Mode::International)
}

/// English short name of the country with the given region code, empty for
/// codes that name no country ("001", "ZZ").
pub fn country_name(region_code: &str) -> &'static str {
    match isocountry::CountryCode::for_alpha2(region_code) {
        Ok(country) => country.name(),
        Err(err) => {
            debug!("No country name for {:?}: {:?}", region_code, err);
            ""
        }
    }
}

/// Short description of a handful of regions, keyed by region code.
pub fn fetch_country_info(region_code: &str) -> &'static str {
    COUNTRY_INFO
        .iter()
        .find(|(code, _)| *code == region_code)
        .map(|(_, info)| *info)
        .unwrap_or(COUNTRY_INFO_NOT_AVAILABLE)
}
