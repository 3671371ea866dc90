// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::telemetry::Limits;

const DEFAULT_TITLE: &str = "STM32F103C8 FAN CONTROL SYSTEM - SIMULATION REPORT";
const DEFAULT_PROJECT: &str = "Real-Time Fan Control using LM35 Temperature Sensor";

const DEFAULT_SYSTEM_SPEC: &[&str] = &[
    "Microcontroller: STM32F103C8T6 (BluePill)",
    "Clock Speed:     72 MHz",
    "RAM:             20 KB",
    "Flash:           64 KB",
    "",
    "Temperature Sensor: LM35 (10mV/°C)",
    "ADC:                12-bit, PA0 (ADC1_IN0)",
    "PWM Output:         TIM3_CH1, PA6, 8kHz",
    "Motor Driver:       2N2222 NPN Transistor",
    "UART Debug:         115200 baud, PA9/PA10",
];

const DEFAULT_INTERPRETATION: &[&str] = &[
    "The fan control system uses proportional control:",
    "  - PWM Duty Cycle is proportional to ADC reading",
    "  - Formula: PWM = (ADC_Value / 4095) * 4000",
    "  - Linear relationship between temperature and fan speed",
    "",
    "Expected Behavior:",
    "  - At 25°C:  Fan runs at ~30% speed (low cooling)",
    "  - At 50°C:  Fan runs at ~60% speed (medium cooling)",
    "  - At 75°C:  Fan runs at ~90% speed (high cooling)",
    "  - At 100°C: Fan runs at 100% speed (maximum cooling)",
];

fn lines(src: &[&str]) -> Vec<String> {
    src.iter().map(|s| s.to_string()).collect()
}

/// Static report text. None of it is derived from telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub project: String,
    pub system_spec: Vec<String>,
    pub interpretation: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            title: DEFAULT_TITLE.to_string(),
            project: DEFAULT_PROJECT.to_string(),
            system_spec: lines(DEFAULT_SYSTEM_SPEC),
            interpretation: lines(DEFAULT_INTERPRETATION),
        }
    }
}

/// Default file locations, overridable from the command line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub input: PathBuf,
    pub report: PathBuf,
    pub csv: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            input: PathBuf::from("uart_output.txt"),
            report: PathBuf::from("PROJECT_REPORT.txt"),
            csv: PathBuf::from("simulation_data.csv"),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.limits.converter_max, 4095);
        assert_eq!(config.limits.actuator_max, 4000);
        assert_eq!(config.output.report, PathBuf::from("PROJECT_REPORT.txt"));
    }

    #[test]
    fn test_default_report_text_is_populated() {
        let report = ReportConfig::default();
        assert!(report.title.contains("FAN CONTROL"));
        assert!(report.system_spec.iter().any(|l| l.contains("LM35")));
        assert!(report.interpretation.iter().any(|l| l.contains("Expected Behavior")));
    }

    #[test]
    fn test_partial_report_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[report]
title = "BENCH RUN"
"#,
        )
        .unwrap();
        assert_eq!(config.report.title, "BENCH RUN");
        assert_eq!(config.report.project, DEFAULT_PROJECT);
        assert_eq!(config.report.system_spec.len(), DEFAULT_SYSTEM_SPEC.len());
    }

    // For any limits written to the [limits] table, parsing keeps exactly
    // those values and leaves the other sections at their defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_limits_round_trip(converter_max in 1u32..100_000, actuator_max in 1u32..100_000) {
            let toml_content = format!(
                "[limits]\nconverter_max = {}\nactuator_max = {}\n",
                converter_max, actuator_max
            );

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse limits");

            let config = config.unwrap();
            prop_assert_eq!(config.limits.converter_max, converter_max);
            prop_assert_eq!(config.limits.actuator_max, actuator_max);
            prop_assert_eq!(config.output, OutputConfig::default());
        }
    }
}
