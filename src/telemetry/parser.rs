use std::sync::LazyLock;

use regex::Regex;

use super::record::Record;

// Firmware format: "Temp: 55 C | ADC: 660 | PWM: 2200 | Fan: 55%"
static READING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Temp:\s*(\d+)\s*C\s*\|\s*ADC:\s*(\d+)\s*\|\s*PWM:\s*(\d+)")
        .expect("telemetry pattern is valid")
});

/// Extract a record from one line of UART output.
///
/// Returns `None` for anything that is not a reading, including readings
/// whose numbers do not fit in a `u32`. Values are not range checked here.
pub fn parse_line(line: &str) -> Option<Record> {
    let caps = READING.captures(line.trim())?;
    let field = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();

    Some(Record::new(field(1)?, field(2)?, field(3)?))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
