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

use serde::Serialize;
use strum::{EnumIter, IntoStaticStr};

/// Categorizes phone numbers based on their primary use.
///
/// Mirrors the classification of the underlying metadata library, reduced to
/// the categories this tool reports on. Library categories without a
/// counterpart here (emergency, short codes, ...) collapse into `Unknown`.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhoneNumberType {
    /// **Fixed-line numbers.**
    /// Traditional landline numbers tied to a specific geographic location.
    FixedLine,
    /// **Mobile numbers.**
    Mobile,
    /// **Fixed-line or mobile.**
    /// Used in regions (e.g., the USA) where it's impossible to distinguish between
    /// fixed-line and mobile numbers by looking at the phone number itself.
    FixedLineOrMobile,
    /// **Toll-free numbers.**
    /// Calls to these numbers are free for the caller, with the cost being paid by the recipient.
    TollFree,
    /// **Premium-rate numbers.**
    /// These numbers charge a higher rate than normal calls.
    PremiumRate,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// **Voice over IP (VoIP) numbers.**
    VoIP,
    /// **Personal numbers.**
    /// A number associated with a person, routed to whatever destination they configure.
    PersonalNumber,
    /// **Pagers.**
    Pager,
    /// **Universal Access Numbers (UAN).**
    /// A single number that a company can use to route calls to different offices or departments.
    UAN,
    /// **Voicemail access numbers.**
    VoiceMail,
    /// **Unknown type.**
    /// The number does not match any of the known patterns for its region.
    Unknown,
}

impl PhoneNumberType {
    /// Human readable name printed by the CLI.
    pub fn label(self) -> &'static str {
        match self {
            PhoneNumberType::Mobile => "Mobile",
            PhoneNumberType::FixedLine => "Fixed Line",
            PhoneNumberType::FixedLineOrMobile => "Fixed Line or Mobile",
            PhoneNumberType::TollFree => "Toll-Free",
            PhoneNumberType::PremiumRate => "Premium Rate",
            PhoneNumberType::SharedCost => "Shared Cost",
            PhoneNumberType::VoIP => "VoIP",
            PhoneNumberType::PersonalNumber => "Personal Number",
            PhoneNumberType::Pager => "Pager",
            PhoneNumberType::UAN => "UAN",
            PhoneNumberType::VoiceMail | PhoneNumberType::Unknown => "Unknown",
        }
    }

    /// Carrier data is only meaningful for numbers that may be mobile.
    pub fn may_have_carrier(self) -> bool {
        matches!(
            self,
            PhoneNumberType::Mobile | PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Pager
        )
    }
}

impl From<phonenumber::Type> for PhoneNumberType {
    fn from(value: phonenumber::Type) -> Self {
        use phonenumber::Type;

        match value {
            Type::FixedLine => PhoneNumberType::FixedLine,
            Type::Mobile => PhoneNumberType::Mobile,
            Type::FixedLineOrMobile => PhoneNumberType::FixedLineOrMobile,
            Type::TollFree => PhoneNumberType::TollFree,
            Type::PremiumRate => PhoneNumberType::PremiumRate,
            Type::SharedCost => PhoneNumberType::SharedCost,
            Type::Voip => PhoneNumberType::VoIP,
            Type::PersonalNumber => PhoneNumberType::PersonalNumber,
            Type::Pager => PhoneNumberType::Pager,
            Type::Uan => PhoneNumberType::UAN,
            Type::Voicemail => PhoneNumberType::VoiceMail,
            _ => PhoneNumberType::Unknown,
        }
    }
}

/// Kinds of `prefix|description` data shipped alongside libphonenumber.
///
/// The static string of each variant is the name of its directory under the
/// data root.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum PrefixData {
    /// `geocoding/<lang>/<country code>.txt`
    Geocoding,
    /// `carrier/<lang>/<country code>.txt`
    Carrier,
    /// `timezones/map_data.txt`
    Timezones,
}

impl PrefixData {
    pub fn dir_name(self) -> &'static str {
        self.into()
    }

    /// Whether files of this kind are split by language and country code.
    pub fn is_localized(self) -> bool {
        !matches!(self, PrefixData::Timezones)
    }
}
