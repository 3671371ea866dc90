//! Tests for the telemetry line parser

use super::*;
use proptest::prelude::*;

#[test]
fn test_parse_well_formed_line() {
    let record = parse_line("Temp: 55 C | ADC: 2252 | PWM: 2200");
    assert_eq!(record, Some(Record::new(55, 2252, 2200)));
}

#[test]
fn test_parse_firmware_line_with_fan_suffix() {
    let record = parse_line("Temp: 25 C | ADC: 300 | PWM: 1000 | Fan: 25%\r");
    assert_eq!(record, Some(Record::new(25, 300, 1000)));
}

#[test]
fn test_parse_tolerates_whitespace_variations() {
    assert_eq!(
        parse_line("   Temp:70C|ADC:840   |  PWM:  2800   "),
        Some(Record::new(70, 840, 2800))
    );
}

#[test]
fn test_parse_with_prefix_noise() {
    assert_eq!(
        parse_line("[00:01.500] uart1: Temp: 30 C | ADC: 360 | PWM: 1200"),
        Some(Record::new(30, 360, 1200))
    );
}

#[test]
fn test_first_match_wins() {
    let line = "Temp: 30 C | ADC: 360 | PWM: 1200 Temp: 90 C | ADC: 1080 | PWM: 3600";
    assert_eq!(parse_line(line), Some(Record::new(30, 360, 1200)));
}

#[test]
fn test_banner_lines_are_skipped() {
    assert_eq!(parse_line("========================================"), None);
    assert_eq!(parse_line("STM32 Fan Control Simulation"), None);
    assert_eq!(parse_line(""), None);
}

#[test]
fn test_incomplete_reading_is_skipped() {
    assert_eq!(parse_line("Temp: 30 C | ADC: 360"), None);
    assert_eq!(parse_line("Temp: 30 C | ADC: -1 | PWM: 10"), None);
    assert_eq!(parse_line("Temp: thirty C | ADC: 360 | PWM: 1200"), None);
}

#[test]
fn test_out_of_range_values_still_parse() {
    assert_eq!(
        parse_line("Temp: 300 C | ADC: 9999 | PWM: 9999"),
        Some(Record::new(300, 9999, 9999))
    );
}

#[test]
fn test_overflowing_number_is_skipped() {
    assert_eq!(parse_line("Temp: 99999999999 C | ADC: 1 | PWM: 1"), None);
}

// For any three values, the firmware's own formatting parses back to the same triple.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_firmware_format_parses_exactly(temp in 0u32..=150, adc in 0u32..=4095, pwm in 0u32..=4000) {
        let line = format!("Temp: {} C | ADC: {} | PWM: {} | Fan: {}%", temp, adc, pwm, pwm * 100 / 4000);
        prop_assert_eq!(parse_line(&line), Some(Record::new(temp, adc, pwm)));
    }

    #[test]
    fn prop_non_matching_lines_never_parse(line in "[a-zA-Z ,.=!-]{0,60}") {
        prop_assert_eq!(parse_line(&line), None);
        prop_assert_eq!(parse_line(&line), None);
    }
}
