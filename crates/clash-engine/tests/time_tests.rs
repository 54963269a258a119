//! Tests for time parsing, formatting, and day-name conversion.

use clash_engine::{
    day_name, day_name_to_number, day_number_to_name, format_time_slot, time_to_minutes, DayValue,
};

#[test]
fn parses_padded_and_unpadded_hours() {
    assert_eq!(time_to_minutes("08:30"), Some(510));
    assert_eq!(time_to_minutes("8:30"), Some(510));
    assert_eq!(time_to_minutes("00:00"), Some(0));
    assert_eq!(time_to_minutes("23:59"), Some(1439));
}

#[test]
fn empty_input_is_midnight() {
    assert_eq!(time_to_minutes(""), Some(0));
    assert_eq!(time_to_minutes("   "), Some(0));
}

#[test]
fn missing_or_bad_minutes_default_to_zero() {
    assert_eq!(time_to_minutes("9"), Some(540));
    assert_eq!(time_to_minutes("9:"), Some(540));
    assert_eq!(time_to_minutes("9:xx"), Some(540));
}

#[test]
fn seconds_are_ignored() {
    assert_eq!(time_to_minutes("14:15:00"), Some(855));
}

#[test]
fn bad_hour_fails_closed() {
    assert_eq!(time_to_minutes("abc"), None);
    assert_eq!(time_to_minutes("ab:30"), None);
}

#[test]
fn blank_hour_fails_closed() {
    assert_eq!(time_to_minutes(":30"), None);
    assert_eq!(time_to_minutes(" :00"), None);
}

#[test]
fn ranges_are_not_validated() {
    assert_eq!(time_to_minutes("25:99"), Some(25 * 60 + 99));
}

#[test]
fn format_is_verbatim() {
    assert_eq!(format_time_slot("08:00", "09:00"), "08:00 - 09:00");
    assert_eq!(format_time_slot("8:00:00", "9"), "8:00:00 - 9");
}

#[test]
fn ordinals_map_monday_first() {
    assert_eq!(day_name(0), "Monday");
    assert_eq!(day_name(3), "Thursday");
    assert_eq!(day_name(6), "Sunday");
    assert_eq!(day_name(7), "");
}

#[test]
fn day_value_names_pass_through() {
    assert_eq!(day_number_to_name(&DayValue::from("Friday")), "Friday");
    assert_eq!(day_number_to_name(&DayValue::from("someday")), "someday");
    assert_eq!(day_number_to_name(&DayValue::from(4)), "Friday");
    assert_eq!(day_number_to_name(&DayValue::Number(-1)), "");
    assert_eq!(day_number_to_name(&DayValue::Number(300)), "");
}

#[test]
fn name_to_number_is_exact() {
    assert_eq!(day_name_to_number("Monday"), Some(0));
    assert_eq!(day_name_to_number("Sunday"), Some(6));
    assert_eq!(day_name_to_number("monday"), None);
    assert_eq!(day_name_to_number("Mon"), None);
}

#[test]
fn every_day_round_trips() {
    for day in 0u8..7 {
        assert_eq!(day_name_to_number(day_name(day)), Some(day));
    }
}
