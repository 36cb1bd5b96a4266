use std::io::Cursor;

use phonenumber::country::Id;

use crate::session::{
    Answers, COMPARE_PROMPT, INVALID_COMPARISON_FORMAT, INVALID_FORMAT, INVALID_NUMBER,
    NOT_POSSIBLE, NUMBER_PROMPT, REGION_PROMPT, Session,
};

use super::get_phone_info;

fn run(input: &str, answers: Answers) -> String {
    let info = get_phone_info();
    let mut session = Session::new(&info, Cursor::new(input.to_owned()), Vec::new());
    session.run(answers).unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

fn run_json(answers: Answers) -> serde_json::Value {
    let info = get_phone_info();
    let mut session = Session::new(&info, Cursor::new(String::new()), Vec::new());
    session.run_json(answers).unwrap();
    serde_json::from_slice(&session.into_output()).unwrap()
}

fn preset(number: &str, region: &str, compare: &str) -> Answers {
    Answers {
        number: Some(number.to_owned()),
        region: Some(region.to_owned()),
        compare: Some(compare.to_owned()),
    }
}

#[test]
fn full_session_with_preset_answers() {
    let output = run("", preset("+44 20 8765 4321", "GB", "+44 7400 123456"));
    let expected = [
        "International Format: +44 20 8765 4321",
        "National Format: 020 8765 4321",
        "Number Type: Fixed Line",
        "Number Length: 10",
        "Premium Rate Number: false",
        "Number valid for region 'GB': true",
        "Number appears to be correctly formatted.",
        "Country Information for code 44 (GB): United Kingdom - Europe",
        "Timezone: Europe/London",
        "Location: London",
        "Service Provider: ",
        "Both numbers are from the same region: true",
        "Both numbers have the same service provider: false",
    ]
    .map(|line| format!("{}\n", line))
    .concat();
    assert_eq!(output, expected);
}

#[test]
fn prompts_are_written_when_reading_answers() {
    let output = run(
        "+1 650 253 0000\nGB\n+44 7400 123456\n",
        Answers::default(),
    );
    assert!(output.starts_with(NUMBER_PROMPT));
    assert!(output.contains(&format!("{}Number valid for region 'GB': false", REGION_PROMPT)));
    assert!(output.contains(COMPARE_PROMPT));
    assert!(output.contains("Number Type: Fixed Line or Mobile\n"));
    assert!(output.contains("Country Information for code 1 (US): United States of America - North America\n"));
    assert!(output.contains("Timezone: America/Los_Angeles\n"));
    assert!(output.contains("Location: Mountain View, CA\n"));
    assert!(output.ends_with("Both numbers are from the same region: false\nBoth numbers have the same service provider: false\n"));
}

#[test]
fn unparseable_number_stops_session() {
    let output = run("", preset("hello", "GB", "+44 7400 123456"));
    assert_eq!(output, format!("{}\n", INVALID_FORMAT));
}

#[test]
fn end_of_input_reads_as_empty_number() {
    let output = run("", Answers::default());
    assert_eq!(output, format!("{}{}\n", NUMBER_PROMPT, INVALID_FORMAT));
}

#[test]
fn invalid_number_stops_session() {
    let output = run("", preset("+44 1234", "GB", "+44 7400 123456"));
    assert_eq!(output, format!("{}\n", INVALID_NUMBER));
}

#[test]
fn leading_zero_number_gets_full_report() {
    let output = run("", preset("+39 06 1234 5678", "IT", "+800 1234 5678"));
    assert!(!output.contains(NOT_POSSIBLE));
    assert!(output.contains("Number Type: Fixed Line\n"));
    assert!(output.contains("Number valid for region 'IT': true\n"));
    assert!(output.contains("Number appears to be correctly formatted.\n"));
    assert!(output.contains("Country Information for code 39 (IT): Information not available\n"));
    assert!(output.contains("Location: Italy\n"));
    assert!(output.ends_with("Both numbers are from the same region: false\nBoth numbers have the same service provider: true\n"));
}

#[test]
fn non_geographic_number_gets_full_report() {
    let output = run("", preset("+800 1234 5678", "US", "+800 8765 4321"));
    assert!(!output.contains(NOT_POSSIBLE));
    assert!(output.contains("Number Type: Toll-Free\n"));
    assert!(output.contains("Number valid for region 'US': false\n"));
    assert!(output.contains("Country Information for code 800 (001): Information not available\n"));
    assert!(output.contains("Location: \n"));
    assert!(output.contains("Both numbers are from the same region: true\n"));
}

#[test]
fn unparseable_comparison_number() {
    let output = run("", preset("+44 7400 123456", "GB", "nope"));
    assert!(output.contains("Number Type: Mobile\n"));
    assert!(output.contains("Service Provider: Three\n"));
    assert!(output.ends_with(&format!("{}\n", INVALID_COMPARISON_FORMAT)));
}

#[test]
fn comparison_of_same_carrier() {
    let output = run("", preset("+44 7400 123456", "gb", "+44 7400 654321"));
    assert!(output.contains("Number valid for region 'gb': true\n"));
    assert!(output.contains("Both numbers have the same service provider: true\n"));
}

#[test]
fn premium_rate_session() {
    let output = run("", preset("+44 909 876 5432", "GB", "+44 20 8765 4321"));
    assert!(output.contains("Number Type: Premium Rate\n"));
    assert!(output.contains("Premium Rate Number: true\n"));
}

#[test]
fn default_region_accepts_national_format() {
    let info = get_phone_info();
    let mut session = Session::new(&info, Cursor::new(String::new()), Vec::new())
        .with_default_region(Some(Id::GB));
    session
        .run(preset("020 8765 4321", "GB", "07400 123456"))
        .unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.starts_with("International Format: +44 20 8765 4321\n"));
    assert!(output.contains("Both numbers are from the same region: true\n"));
}

#[test]
fn json_summary() {
    let value = run_json(preset("+44 7400 123456", "GB", "+44 7800 123456"));
    assert_eq!(value["number"]["e164"], "+447400123456");
    assert_eq!(value["number"]["number_type"], "Mobile");
    assert_eq!(value["number"]["number_type_label"], "Mobile");
    assert_eq!(value["number"]["carrier"], "Three");
    assert_eq!(value["number"]["time_zones"][0], "Europe/London");
    assert_eq!(value["region_check"]["valid"], true);
    assert_eq!(value["comparison"]["same_region"], true);
    assert_eq!(value["comparison"]["same_carrier"], false);
    assert!(value.get("comparison_error").is_none());
}

#[test]
fn json_without_optional_answers() {
    let value = run_json(Answers {
        number: Some("+61 2 1234 5678".to_owned()),
        ..Answers::default()
    });
    assert_eq!(value["number"]["region"], "AU");
    assert_eq!(value["number"]["location"], "Sydney");
    assert!(value.get("region_check").is_none());
    assert!(value.get("comparison").is_none());
}

#[test]
fn json_location_falls_back_to_country() {
    let value = run_json(Answers {
        number: Some("+1 800 253 0000".to_owned()),
        ..Answers::default()
    });
    assert_eq!(value["number"]["region"], "US");
    assert_eq!(value["number"]["number_type"], "TollFree");
    assert!(value["number"]["location"]
        .as_str()
        .is_some_and(|location| location.starts_with("United States")));
}

#[test]
fn json_rejection() {
    let value = run_json(preset("hello", "GB", "+44 7400 123456"));
    assert_eq!(value["input"], "hello");
    assert_eq!(value["error"], INVALID_FORMAT);
    assert!(value.get("number").is_none());

    let value = run_json(preset("+44 7400 123456", "GB", "nope"));
    assert_eq!(value["comparison_error"], INVALID_COMPARISON_FORMAT);
}
