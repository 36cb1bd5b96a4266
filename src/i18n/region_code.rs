use std::sync::LazyLock;

use phonenumber::{PhoneNumber, country};
use regex::Regex;

use crate::helper_functions::region_metadata;

static REGION_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2}$").expect("region code pattern is a valid regex")
});

pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Parses a two letter region code in any case, e.g. `"gb"` or `"US"`.
    pub fn parse(region_code: &str) -> Option<country::Id> {
        let trimmed = region_code.trim();
        if !REGION_CODE_PATTERN.is_match(trimmed) {
            return None;
        }
        trimmed.to_ascii_uppercase().parse().ok()
    }

    /// Region the number belongs to, "001" for non-geographic calling codes,
    /// or "ZZ" when the calling code is not assigned.
    pub fn of(number: &PhoneNumber) -> String {
        match region_metadata(number) {
            Some(meta) => meta.id().to_owned(),
            None => Self::get_unknown().to_owned(),
        }
    }
}
