//! Per-calculator view state: the raw text of every field, the selected mode and the
//! last result. Every edit or mode change recomputes immediately, and a failed
//! evaluation replaces the previous output, so a stale result is never shown.
use crate::Calculators::formula_api::CalcOutput;
use crate::Calculators::registry::CalculatorKind;
use crate::Calculators::request::{
    CalculationRequest, CalculationResult, display_result, evaluate_kind,
};
use crate::errors::CalcError;
use crate::settings::DisplaySettings;
use log::info;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct CalculatorSession {
    kind: CalculatorKind,
    mode: &'static str,
    fields: BTreeMap<String, String>,
    settings: DisplaySettings,
    result: Option<CalculationResult>,
}

impl CalculatorSession {
    pub fn new(kind: CalculatorKind, settings: DisplaySettings) -> Self {
        Self {
            kind,
            mode: kind.default_mode(),
            fields: BTreeMap::new(),
            settings,
            result: None,
        }
    }

    pub fn kind(&self) -> CalculatorKind {
        self.kind
    }

    pub fn mode(&self) -> &'static str {
        self.mode
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// fields read in the current mode
    pub fn input_fields(&self) -> Vec<&'static str> {
        self.kind.input_fields(self.mode).unwrap_or_default()
    }

    /// false for fields the current mode solves for (or never reads)
    pub fn is_enabled(&self, field: &str) -> bool {
        self.input_fields().contains(&field)
    }

    /// Stores the text of a field and recomputes.
    pub fn set_field(&mut self, name: &str, text: &str) -> &CalculationResult {
        self.fields.insert(name.to_string(), text.to_string());
        self.recompute()
    }

    /// Switches the mode and recomputes with the held fields. Field texts are kept;
    /// an unknown mode leaves the session untouched.
    pub fn set_mode(&mut self, mode: &str) -> Result<&CalculationResult, CalcError> {
        let mode = self.kind.check_mode(mode)?;
        if mode != self.mode {
            info!("{}: mode {} -> {}", self.kind, self.mode, mode);
        }
        self.mode = mode;
        Ok(self.recompute())
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.result = None;
    }

    pub fn recompute(&mut self) -> &CalculationResult {
        let result = evaluate_kind(self.kind, self.mode, &self.fields, &self.settings);
        self.result.insert(result)
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn output(&self) -> Option<&CalcOutput> {
        self.result.as_ref().and_then(|result| result.as_ref().ok())
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.result.as_ref().and_then(|result| result.as_ref().err())
    }

    /// what a front end shows under the form; empty before the first edit
    pub fn display(&self) -> String {
        self.result.as_ref().map(display_result).unwrap_or_default()
    }

    /// the current state as a standalone request
    pub fn request(&self) -> CalculationRequest {
        CalculationRequest {
            calculator: self.kind.name().to_string(),
            mode: Some(self.mode.to_string()),
            fields: self.fields.clone(),
        }
    }
}
