//! Turning raw text fields into numbers.
//!
//! Every numeric field goes through [`parse_number`]: empty text is a missing field and
//! non-numeric text is an invalid number. Nothing is silently replaced by zero.
use crate::errors::CalcError;
use log::warn;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
/// a number optionally followed by a unit: "10", "2.5 mL", "1e-3M", ".5 atm"
static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*(.*?)\s*$").unwrap()
});

/// parses a required numeric field
pub fn parse_number(field: &str, input: &str) -> Result<f64, CalcError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CalcError::MissingField(field.to_string()));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            warn!("rejected non-numeric input '{}' for {}", trimmed, field);
            Err(CalcError::InvalidNumber {
                field: field.to_string(),
                input: trimmed.to_string(),
            })
        }
    }
}

/// splits "2.5 mL" into (2.5, Some("mL")); a bare number gives no unit
pub fn parse_quantity(field: &str, input: &str) -> Result<(f64, Option<String>), CalcError> {
    if input.trim().is_empty() {
        return Err(CalcError::MissingField(field.to_string()));
    }
    let caps = QUANTITY
        .captures(input)
        .ok_or_else(|| CalcError::InvalidNumber {
            field: field.to_string(),
            input: input.trim().to_string(),
        })?;
    let value = parse_number(field, &caps[1])?;
    let unit = caps
        .get(2)
        .map(|m| m.as_str())
        .filter(|unit| !unit.is_empty())
        .map(str::to_string);
    Ok((value, unit))
}

/// removes all whitespace, including inner line breaks of pasted sequences
pub fn strip_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, "").into_owned()
}

/// Read access to the named text fields of one calculation request.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    fields: &'a BTreeMap<String, String>,
}

impl<'a> FieldReader<'a> {
    pub fn new(fields: &'a BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// trimmed field text, `None` when absent or blank
    pub fn raw(&self, name: &str) -> Option<&'a str> {
        self.fields
            .get(name)
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
    }

    pub fn text(&self, name: &str) -> Result<&'a str, CalcError> {
        self.raw(name)
            .ok_or_else(|| CalcError::MissingField(name.to_string()))
    }

    /// optional selector field with a default
    pub fn text_or(&self, name: &str, default: &'a str) -> &'a str {
        self.raw(name).unwrap_or(default)
    }

    pub fn number(&self, name: &str) -> Result<f64, CalcError> {
        parse_number(name, self.text(name)?)
    }

    /// Numeric field that may carry its own unit, e.g. "250 mL". A unit typed next to
    /// the number wins over the selector field `unit_field`, which in turn falls back
    /// to `default_unit`.
    pub fn quantity(
        &self,
        name: &str,
        unit_field: &str,
        default_unit: &str,
    ) -> Result<(f64, String), CalcError> {
        let (value, unit) = parse_quantity(name, self.text(name)?)?;
        let unit = match unit {
            Some(unit) => unit,
            None => self.raw(unit_field).unwrap_or(default_unit).to_string(),
        };
        Ok((value, unit))
    }

    /// optional numeric field: blank means `default`, garbage is still an error
    pub fn number_or(&self, name: &str, default: f64) -> Result<f64, CalcError> {
        match self.raw(name) {
            Some(text) => parse_number(name, text),
            None => Ok(default),
        }
    }
}
