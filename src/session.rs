//! The interactive question/answer flow of the command line tool.

use std::io::{BufRead, Write};

use log::{debug, info, warn};
use phonenumber::{PhoneNumber, country};
use serde::Serialize;

use crate::phoneinfo::{
    Comparison, NumberReport, PhoneInfo, RegionCheck,
    errors::SessionError,
    helper_functions::{is_possible_number, is_valid_number, normalize_number_in, parse_number},
};

pub const NUMBER_PROMPT: &str = "Enter phone number with country code: ";
pub const REGION_PROMPT: &str = "Enter region code to check number validity (e.g., US, IN): ";
pub const COMPARE_PROMPT: &str = "Enter another phone number with country code for comparison: ";

pub const INVALID_FORMAT: &str = "Invalid phone number format.";
pub const INVALID_NUMBER: &str = "Invalid phone number.";
pub const NOT_POSSIBLE: &str = "Possible number, but not valid.";
pub const INVALID_COMPARISON_FORMAT: &str = "Invalid phone number format for comparison.";

/// Answers known before the session starts. Each one that is set replaces
/// its prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub number: Option<String>,
    pub region: Option<String>,
    pub compare: Option<String>,
}

/// Document printed in JSON mode.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub number: NumberReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_check: Option<RegionCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_error: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct Rejection<'a> {
    input: &'a str,
    error: String,
}

pub struct Session<'a, R, W> {
    info: &'a PhoneInfo,
    default_region: Option<country::Id>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(info: &'a PhoneInfo, input: R, output: W) -> Self {
        Self {
            info,
            default_region: None,
            input,
            output,
        }
    }

    pub fn with_default_region(mut self, region: Option<country::Id>) -> Self {
        self.default_region = region;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Returns the preset answer, or prompts and reads one line. End of
    /// input reads as an empty answer.
    fn ask(&mut self, prompt: &str, preset: Option<String>) -> Result<String, SessionError> {
        if let Some(answer) = preset {
            debug!("{}{} (preset)", prompt, answer);
            return Ok(answer);
        }
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    /// Normalizes and re-parses the input, the same two steps for both
    /// numbers of a session.
    fn resolve(&self, input: &str) -> Option<Result<PhoneNumber, phonenumber::ParseError>> {
        let normalized = normalize_number_in(input, self.default_region)?;
        Some(parse_number(&normalized, None))
    }

    pub fn run(&mut self, answers: Answers) -> Result<(), SessionError> {
        let input = self.ask(NUMBER_PROMPT, answers.number)?;
        let number = match self.resolve(&input) {
            None => {
                writeln!(self.output, "{}", INVALID_FORMAT)?;
                return Ok(());
            }
            Some(Err(err)) => {
                writeln!(self.output, "Error parsing phone number: {}", err)?;
                return Ok(());
            }
            Some(Ok(number)) => number,
        };

        if !is_valid_number(&number) {
            writeln!(self.output, "{}", INVALID_NUMBER)?;
            return Ok(());
        }
        if !is_possible_number(&number) {
            writeln!(self.output, "{}", NOT_POSSIBLE)?;
            return Ok(());
        }

        let report = self.info.report(&number);
        info!("Inspecting {}", report.e164);

        writeln!(self.output, "International Format: {}", report.international)?;
        writeln!(self.output, "National Format: {}", report.national)?;
        writeln!(self.output, "Number Type: {}", report.number_type_label)?;
        writeln!(self.output, "Number Length: {}", report.number_length)?;
        writeln!(self.output, "Premium Rate Number: {}", report.premium_rate)?;

        let region = self.ask(REGION_PROMPT, answers.region)?;
        let check = self.info.check_region(&report.e164, &region);
        writeln!(
            self.output,
            "Number valid for region '{}': {}",
            check.region, check.valid
        )?;

        match &report.suggested_format {
            Some(suggested) => {
                writeln!(
                    self.output,
                    "Formatting Issues: {}",
                    report.formatting_issues.join(", ")
                )?;
                writeln!(self.output, "Suggested Format: {}", suggested)?;
            }
            None => writeln!(self.output, "Number appears to be correctly formatted.")?,
        }

        writeln!(
            self.output,
            "Country Information for code {} ({}): {}",
            report.country_code, report.region, report.country_info
        )?;
        writeln!(self.output, "Timezone: {}", report.time_zones.join(", "))?;
        writeln!(self.output, "Location: {}", report.location)?;
        writeln!(self.output, "Service Provider: {}", report.carrier)?;

        let other_input = self.ask(COMPARE_PROMPT, answers.compare)?;
        let other = match self.resolve(&other_input) {
            None => {
                writeln!(self.output, "{}", INVALID_COMPARISON_FORMAT)?;
                return Ok(());
            }
            Some(Err(err)) => {
                writeln!(self.output, "Error parsing phone number: {}", err)?;
                return Ok(());
            }
            Some(Ok(other)) => other,
        };

        let comparison = self.info.compare(&number, &other);
        writeln!(
            self.output,
            "Both numbers are from the same region: {}",
            comparison.same_region
        )?;
        writeln!(
            self.output,
            "Both numbers have the same service provider: {}",
            comparison.same_carrier
        )?;
        Ok(())
    }

    /// Non-interactive variant: builds the whole summary from `answers` and
    /// prints it as one JSON document.
    pub fn run_json(&mut self, answers: Answers) -> Result<(), SessionError> {
        let input = answers.number.unwrap_or_default();
        let number = match self.resolve(&input) {
            None => return self.reject(&input, INVALID_FORMAT.to_owned()),
            Some(Err(err)) => return self.reject(&input, err.to_string()),
            Some(Ok(number)) => number,
        };
        if !is_valid_number(&number) {
            return self.reject(&input, INVALID_NUMBER.to_owned());
        }
        if !is_possible_number(&number) {
            return self.reject(&input, NOT_POSSIBLE.to_owned());
        }

        let report = self.info.report(&number);
        let region_check = answers
            .region
            .map(|region| self.info.check_region(&report.e164, &region));

        let mut comparison = None;
        let mut comparison_error = None;
        if let Some(other_input) = answers.compare {
            match self.resolve(&other_input) {
                Some(Ok(other)) => comparison = Some(self.info.compare(&number, &other)),
                _ => {
                    warn!("Could not parse comparison number {:?}", other_input);
                    comparison_error = Some(INVALID_COMPARISON_FORMAT);
                }
            }
        }

        let summary = Summary {
            number: report,
            region_check,
            comparison,
            comparison_error,
        };
        serde_json::to_writer_pretty(&mut self.output, &summary)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn reject(&mut self, input: &str, error: String) -> Result<(), SessionError> {
        debug!("Rejected {:?}: {}", input, error);
        serde_json::to_writer_pretty(&mut self.output, &Rejection { input, error })?;
        writeln!(self.output)?;
        Ok(())
    }
}
