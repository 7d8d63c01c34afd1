//! The in-process boundary: a request names a calculator, a mode and raw text fields,
//! and evaluates to either a [`CalcOutput`] or a [`CalcError`].
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver};
use crate::Calculators::registry::CalculatorKind;
use crate::Utils::parse_input::FieldReader;
use crate::errors::CalcError;
use crate::settings::DisplaySettings;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type CalculationResult = Result<CalcOutput, CalcError>;

/// text shown in place of a result: the formatted quantities or the error message
pub fn display_result(result: &CalculationResult) -> String {
    match result {
        Ok(output) => output.summary(),
        Err(err) => format!("Error: {}", err),
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub calculator: String,
    /// `None` selects the calculator's first mode
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl CalculationRequest {
    pub fn new(calculator: &str) -> Self {
        Self {
            calculator: calculator.to_string(),
            ..Default::default()
        }
    }

    pub fn mode(mut self, mode: &str) -> Self {
        self.mode = Some(mode.to_string());
        self
    }

    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }
}

/// evaluates with the default display settings
pub fn evaluate(request: &CalculationRequest) -> CalculationResult {
    evaluate_with(request, &DisplaySettings::default())
}

pub fn evaluate_with(
    request: &CalculationRequest,
    settings: &DisplaySettings,
) -> CalculationResult {
    let kind: CalculatorKind = request.calculator.parse()?;
    let mode = request.mode.as_deref().unwrap_or(kind.default_mode());
    evaluate_kind(kind, mode, &request.fields, settings)
}

pub fn evaluate_kind(
    kind: CalculatorKind,
    mode: &str,
    fields: &BTreeMap<String, String>,
    settings: &DisplaySettings,
) -> CalculationResult {
    let reader = FieldReader::new(fields);
    let result = kind
        .build(mode, &reader, settings)
        .and_then(|formula| formula.solve());
    match &result {
        Ok(output) => debug!("{} [{}]: {}", kind, mode, output.summary()),
        Err(err) => debug!("{} [{}] failed: {}", kind, mode, err),
    }
    result
}
