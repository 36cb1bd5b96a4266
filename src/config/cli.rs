use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::session::Answers;

#[derive(Debug, Clone, Parser)]
#[command(name = "rphoneinfo")]
#[command(version, about = "Inspect a phone number: formats, type, region, timezone, location and carrier")]
pub struct Cli {
    /// Phone number to inspect, prompted for when omitted
    #[arg(short, long)]
    pub number: Option<String>,

    /// Region code to check the number against (e.g. US, IN)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Second phone number to compare with
    #[arg(short, long)]
    pub compare: Option<String>,

    /// Region assumed for numbers written without a leading '+'
    #[arg(long)]
    pub default_region: Option<String>,

    /// Directory holding geocoding/, carrier/ and timezones/ prefix data
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Language of location and carrier names
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Path to TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a single JSON document instead of prompting
    #[arg(long, requires = "number")]
    pub json: bool,

    /// Raise log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn answers(&self) -> Answers {
        Answers {
            number: self.number.clone(),
            region: self.region.clone(),
            compare: self.compare.clone(),
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
