pub(crate) mod helper_constants;
pub mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phoneinfo;
pub mod report;

pub use enums::{PhoneNumberType, PrefixData};
pub use phoneinfo::PhoneInfo;
pub use report::{Comparison, NumberReport, RegionCheck};
