//! Common interface of all formulas and the registry enum that dispatches to them.
//!
//! Each calculator is a plain struct (or enum) that already knows which variable it
//! solves for. [`FormulaSolver::solve`] validates the inputs and returns a
//! [`CalcOutput`]; every failure is a [`CalcError`], never a panic.
use crate::Calculators::cell_culture::{CellDilution, DoublingTime};
use crate::Calculators::centrifuge::Centrifuge;
use crate::Calculators::dilution::Dilution;
use crate::Calculators::gas_laws::{CombinedGasLaw, IdealGasLaw};
use crate::Calculators::molarity::Molarity;
use crate::Calculators::pcr::DnaQuantification;
use crate::Calculators::ph::PhCalculation;
use crate::Calculators::protein::{BradfordAssay, ProteinMolecularWeight};
use crate::UnitConversion::concentration::ConcentrationConversion;
use crate::UnitConversion::conversion_table::LinearConversion;
use crate::UnitConversion::display_format::{format_fixed, format_trimmed, with_unit};
use crate::UnitConversion::temperature::TemperatureConversion;
use crate::errors::CalcError;
use enum_dispatch::enum_dispatch;
use prettytable::{Cell, Row, Table, row};
use serde::Serialize;

/// one derived value: raw number, its unit and the text shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub text: String,
}

impl Quantity {
    pub fn new(name: &str, value: f64, unit: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            text: text.to_string(),
        }
    }

    /// exactly `decimals` places: "16.00 hours"
    pub fn fixed(name: &str, value: f64, decimals: usize, unit: &str) -> Self {
        let text = with_unit(&format_fixed(value, decimals), unit);
        Self::new(name, value, unit, &text)
    }

    /// at most `decimals` places, trailing zeros stripped: "100 mL"
    pub fn trimmed(name: &str, value: f64, decimals: usize, unit: &str) -> Self {
        let text = with_unit(&format_trimmed(value, decimals), unit);
        Self::new(name, value, unit, &text)
    }
}

/// result of a successful evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcOutput {
    pub formula: String,
    pub mode: String,
    pub quantities: Vec<Quantity>,
    /// non-fatal remarks, e.g. unrecognised residues of a protein sequence
    pub warnings: Vec<String>,
}

impl CalcOutput {
    pub fn new(formula: &str, mode: &str) -> Self {
        Self {
            formula: formula.to_string(),
            mode: mode.to_string(),
            quantities: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn push(mut self, quantity: Quantity) -> Self {
        self.quantities.push(quantity);
        self
    }

    pub fn with_warning(mut self, warning: String) -> Self {
        self.warnings.push(warning);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Quantity> {
        self.quantities.iter().find(|q| q.name == name)
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).map(|q| q.value)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).map(|q| q.text.as_str())
    }

    /// single-line form: "V2 = 100 mL; ..."
    pub fn summary(&self) -> String {
        self.quantities
            .iter()
            .map(|q| format!("{} = {}", q.name, q.text))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Result"]);
        for q in &self.quantities {
            table.add_row(Row::new(vec![Cell::new(&q.name), Cell::new(&q.text)]));
        }
        for warning in &self.warnings {
            table.add_row(Row::new(vec![Cell::new("warning"), Cell::new(warning)]));
        }
        table
    }
}

/// interface shared by every calculator and converter
#[enum_dispatch]
pub trait FormulaSolver {
    /// human-readable name of the formula
    fn name(&self) -> &'static str;
    /// the selected calculation mode, i.e. which variable is solved for
    fn mode(&self) -> &'static str;
    fn solve(&self) -> Result<CalcOutput, CalcError>;
}

/// every formula of the crate, one variant per calculator
#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch(FormulaSolver)]
pub enum Formula {
    LinearConversion(LinearConversion),
    TemperatureConversion(TemperatureConversion),
    ConcentrationConversion(ConcentrationConversion),
    Dilution(Dilution),
    PhCalculation(PhCalculation),
    IdealGasLaw(IdealGasLaw),
    CombinedGasLaw(CombinedGasLaw),
    Molarity(Molarity),
    Centrifuge(Centrifuge),
    CellDilution(CellDilution),
    DoublingTime(DoublingTime),
    BradfordAssay(BradfordAssay),
    ProteinMolecularWeight(ProteinMolecularWeight),
    DnaQuantification(DnaQuantification),
}
