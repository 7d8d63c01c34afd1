//! Temperature is affine, not linear, so it cannot share a factor table:
//! every pair of scales gets its own formula.
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver, Quantity};
use crate::UnitConversion::display_format::format_converted;
use crate::errors::{CalcError, ensure_finite};
use crate::settings::DisplaySettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = CalcError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "°c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(CalcError::UnknownUnit {
                unit: s.trim().to_string(),
                dimension: "temperature".to_string(),
            }),
        }
    }
}

/// converts a temperature between scales using the pairwise affine formulas
pub fn convert_temperature(
    value: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Result<f64, CalcError> {
    use TemperatureUnit::*;
    let converted = match (from, to) {
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
    };
    ensure_finite(converted)
}

pub fn to_kelvin(value: f64, from: TemperatureUnit) -> Result<f64, CalcError> {
    convert_temperature(value, from, TemperatureUnit::Kelvin)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureConversion {
    pub value: f64,
    pub from: TemperatureUnit,
    pub to: TemperatureUnit,
    pub settings: DisplaySettings,
}

impl TemperatureConversion {
    pub fn new(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> Self {
        Self {
            value,
            from,
            to,
            settings: DisplaySettings::default(),
        }
    }
}

impl FormulaSolver for TemperatureConversion {
    fn name(&self) -> &'static str {
        "Temperature conversion"
    }

    fn mode(&self) -> &'static str {
        "convert"
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let converted = convert_temperature(self.value, self.from, self.to)?;
        // temperatures are never shown in scientific notation
        let settings = DisplaySettings {
            sci_threshold: 0.0,
            ..self.settings.clone()
        };
        let text = format_converted(converted, settings.general_decimals, &settings);
        Ok(CalcOutput::new(self.name(), self.mode()).push(Quantity::new(
            "value",
            converted,
            self.to.symbol(),
            &text,
        )))
    }
}
