mod phoneinfo;
mod prefix_cache;
pub mod prefix_map;
pub mod i18n;
pub mod config;
pub mod session;

pub use phoneinfo::{
    Comparison, NumberReport, PhoneInfo, PhoneNumberType, PrefixData, RegionCheck, errors,
    helper_functions,
};
pub use prefix_cache::PrefixCache;

#[cfg(test)]
mod tests;
