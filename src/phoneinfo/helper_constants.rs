// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;

pub const PLUS_SIGN: &str = "+";

pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_DATA_DIR: &str = "resources";

/// Returned by timezone lookup when no prefix matched.
pub const UNKNOWN_TIMEZONE: &str = "Etc/Unknown";
/// Separator between several zones in `timezones/map_data.txt`.
pub const TIMEZONE_SEPARATOR: char = '&';
pub const TIMEZONE_MAP_FILE: &str = "map_data.txt";
pub const PREFIX_FILE_EXT: &str = ".txt";

pub const MAX_PREFIX_LINE_LENGTH: usize = 2 * 1024;

pub const COUNTRY_INFO_NOT_AVAILABLE: &str = "Information not available";

pub const COUNTRY_INFO: [(&str, &str); 4] = [
    ("US", "United States of America - North America"),
    ("IN", "India - South Asia"),
    ("GB", "United Kingdom - Europe"),
    ("AU", "Australia - Oceania"),
];

pub const NOT_POSSIBLE_MESSAGE: &str = "Number is not possible.";
pub const NOT_VALID_MESSAGE: &str = "Number is not valid.";
