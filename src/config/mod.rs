pub mod cli;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use phonenumber::country;
use serde::{Deserialize, Serialize};

use crate::{
    i18n::RegionCode,
    phoneinfo::{
        errors::ConfigError,
        helper_constants::{DEFAULT_DATA_DIR, DEFAULT_LANG},
    },
};

pub use cli::Cli;

/// Optional TOML configuration file. Every key may be omitted.
///
/// ```toml
/// data_dir = "/usr/share/libphonenumber"
/// lang = "en"
/// default_region = "GB"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub lang: Option<String>,
    pub default_region: Option<String>,
}

impl FileConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml(&content)
    }
}

/// Effective settings: command line over config file over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub lang: String,
    pub default_region: Option<country::Id>,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    pub fn merge(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let default_region = match cli.default_region.clone().or(file.default_region) {
            Some(code) => Some(RegionCode::parse(&code).ok_or(ConfigError::InvalidRegion(code))?),
            None => None,
        };

        Ok(Self {
            data_dir: cli
                .data_dir
                .clone()
                .or(file.data_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            lang: cli
                .lang
                .clone()
                .or(file.lang)
                .unwrap_or_else(|| DEFAULT_LANG.to_owned()),
            default_region,
        })
    }
}
