mod region_code;
mod session_tests;

use std::path::PathBuf;

use crate::PhoneInfo;

static ONCE: std::sync::Once = std::sync::Once::new();

/// Prefix data checked in under `resources/`.
pub(crate) fn resources_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}

pub(crate) fn get_phone_info() -> PhoneInfo {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .init()
    });
    PhoneInfo::new(resources_dir(), "en")
}
