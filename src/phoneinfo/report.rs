use serde::Serialize;

use super::PhoneNumberType;

/// Everything the tool prints about a single number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberReport {
    pub e164: String,
    pub international: String,
    pub national: String,
    pub number_type: PhoneNumberType,
    pub number_type_label: &'static str,
    pub number_length: usize,
    pub premium_rate: bool,
    /// Empty when the number is both possible and valid.
    pub formatting_issues: Vec<&'static str>,
    /// Only set alongside formatting issues.
    pub suggested_format: Option<String>,
    pub country_code: String,
    pub region: String,
    pub country_info: &'static str,
    pub time_zones: Vec<String>,
    pub location: String,
    pub carrier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCheck {
    pub region: String,
    pub valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub same_region: bool,
    pub same_carrier: bool,
}
