use serde::{Deserialize, Serialize};

/// One telemetry sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Temperature in whole °C
    pub sensed_value: u32,
    /// Raw 12-bit ADC reading
    pub converter_value: u32,
    /// PWM duty level
    pub actuator_value: u32,
}

impl Record {
    pub fn new(sensed_value: u32, converter_value: u32, actuator_value: u32) -> Self {
        Self {
            sensed_value,
            converter_value,
            actuator_value,
        }
    }

    /// Whether the converter and actuator values fit the hardware ranges
    pub fn within(&self, limits: &Limits) -> bool {
        self.converter_value <= limits.converter_max && self.actuator_value <= limits.actuator_max
    }
}

/// Full-scale values of the ADC and the PWM timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub converter_max: u32,
    pub actuator_max: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            converter_max: 4095,
            actuator_max: 4000,
        }
    }
}
