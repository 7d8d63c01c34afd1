//! Error types shared by the converters, the calculators and the settings layer.
//!
//! Every failure of a calculation is returned as a [`CalcError`]; nothing in the
//! library panics on bad user input. The `Display` text of each variant is what the
//! front end shows in place of the result.
use thiserror::Error;

/// errors produced while parsing inputs or evaluating a formula
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// input is outside of the domain of the formula
    #[error("{0}")]
    Validation(String),
    #[error("Please enter a valid number for {field} (got '{input}')")]
    InvalidNumber { field: String, input: String },
    #[error("{0} is required")]
    MissingField(String),
    #[error("Unknown {dimension} unit: {unit}")]
    UnknownUnit { unit: String, dimension: String },
    #[error("Unknown mode '{mode}' for {calculator}")]
    UnknownMode { calculator: String, mode: String },
    #[error("Unknown calculator: {0}")]
    UnknownCalculator(String),
    /// result is not a finite number
    #[error("Calculation error")]
    Arithmetic,
}

impl CalcError {
    pub fn validation(msg: impl Into<String>) -> Self {
        CalcError::Validation(msg.into())
    }
}

/// errors of the configuration file layer
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// returns the value if it is finite, otherwise an arithmetic error
pub fn ensure_finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Arithmetic)
    }
}
