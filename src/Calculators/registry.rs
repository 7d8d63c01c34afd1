//! The catalogue of calculators: names, modes, input fields of each mode, and the
//! construction of a [`Formula`] from raw text fields.
use crate::Calculators::cell_culture::{CellDilution, DoublingTime};
use crate::Calculators::centrifuge::{CENTRIFUGE_MODES, Centrifuge};
use crate::Calculators::dilution::{DILUTION_MODES, Dilution};
use crate::Calculators::formula_api::Formula;
use crate::Calculators::gas_laws::{
    COMBINED_GAS_MODES, CombinedGasLaw, IDEAL_GAS_MODES, IdealGasLaw,
};
use crate::Calculators::molarity::{MOLARITY_MODES, Molarity};
use crate::Calculators::pcr::DnaQuantification;
use crate::Calculators::ph::{PH_MODES, PhCalculation};
use crate::Calculators::protein::{BradfordAssay, ProteinMolecularWeight};
use crate::UnitConversion::concentration::{CONCENTRATION_MODES, ConcentrationConversion};
use crate::UnitConversion::conversion_table::{Dimension, LinearConversion};
use crate::UnitConversion::temperature::TemperatureConversion;
use crate::Utils::parse_input::FieldReader;
use crate::errors::CalcError;
use crate::settings::DisplaySettings;
use std::fmt;
use std::str::FromStr;

const CONVERT_MODES: &[&str] = &["convert"];
const CONVERT_FIELDS: &[&str] = &["value", "from", "to"];

/// menu group a calculator belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Converter,
    Chemistry,
    Biology,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorKind {
    Mass,
    Volume,
    Pressure,
    FlowRate,
    MassConcentration,
    Temperature,
    Concentration,
    Dilution,
    Ph,
    IdealGas,
    CombinedGas,
    Molarity,
    Centrifuge,
    CellDilution,
    DoublingTime,
    Bradford,
    ProteinMw,
    Pcr,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 18] = [
        CalculatorKind::Mass,
        CalculatorKind::Volume,
        CalculatorKind::Pressure,
        CalculatorKind::FlowRate,
        CalculatorKind::MassConcentration,
        CalculatorKind::Temperature,
        CalculatorKind::Concentration,
        CalculatorKind::Dilution,
        CalculatorKind::Ph,
        CalculatorKind::IdealGas,
        CalculatorKind::CombinedGas,
        CalculatorKind::Molarity,
        CalculatorKind::Centrifuge,
        CalculatorKind::CellDilution,
        CalculatorKind::DoublingTime,
        CalculatorKind::Bradford,
        CalculatorKind::ProteinMw,
        CalculatorKind::Pcr,
    ];

    /// identifier used in requests and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CalculatorKind::Mass => "mass",
            CalculatorKind::Volume => "volume",
            CalculatorKind::Pressure => "pressure",
            CalculatorKind::FlowRate => "flow-rate",
            CalculatorKind::MassConcentration => "mass-concentration",
            CalculatorKind::Temperature => "temperature",
            CalculatorKind::Concentration => "concentration",
            CalculatorKind::Dilution => "dilution",
            CalculatorKind::Ph => "ph",
            CalculatorKind::IdealGas => "ideal-gas",
            CalculatorKind::CombinedGas => "combined-gas",
            CalculatorKind::Molarity => "molarity",
            CalculatorKind::Centrifuge => "centrifuge",
            CalculatorKind::CellDilution => "cell-dilution",
            CalculatorKind::DoublingTime => "doubling-time",
            CalculatorKind::Bradford => "bradford",
            CalculatorKind::ProteinMw => "protein-mw",
            CalculatorKind::Pcr => "pcr",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::Mass => "Mass converter",
            CalculatorKind::Volume => "Volume converter",
            CalculatorKind::Pressure => "Pressure converter",
            CalculatorKind::FlowRate => "Flow rate converter",
            CalculatorKind::MassConcentration => "Mass concentration converter",
            CalculatorKind::Temperature => "Temperature converter",
            CalculatorKind::Concentration => "Concentration (moles, molarity, % w/w)",
            CalculatorKind::Dilution => "Dilution C1V1 = C2V2",
            CalculatorKind::Ph => "pH / pOH",
            CalculatorKind::IdealGas => "Ideal gas law PV = nRT",
            CalculatorKind::CombinedGas => "Combined gas law",
            CalculatorKind::Molarity => "Molarity",
            CalculatorKind::Centrifuge => "Centrifuge RPM / RCF",
            CalculatorKind::CellDilution => "Cell culture dilution",
            CalculatorKind::DoublingTime => "Cell doubling time",
            CalculatorKind::Bradford => "Protein concentration (Bradford)",
            CalculatorKind::ProteinMw => "Protein molecular weight",
            CalculatorKind::Pcr => "PCR / DNA quantification",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            CalculatorKind::Mass
            | CalculatorKind::Volume
            | CalculatorKind::Pressure
            | CalculatorKind::FlowRate
            | CalculatorKind::MassConcentration
            | CalculatorKind::Temperature
            | CalculatorKind::Concentration
            | CalculatorKind::Centrifuge => Category::Converter,
            CalculatorKind::Dilution
            | CalculatorKind::Ph
            | CalculatorKind::IdealGas
            | CalculatorKind::CombinedGas
            | CalculatorKind::Molarity => Category::Chemistry,
            CalculatorKind::CellDilution
            | CalculatorKind::DoublingTime
            | CalculatorKind::Bradford
            | CalculatorKind::ProteinMw
            | CalculatorKind::Pcr => Category::Biology,
        }
    }

    /// the linear table behind a converter, `None` for everything else
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            CalculatorKind::Mass => Some(Dimension::Mass),
            CalculatorKind::Volume => Some(Dimension::Volume),
            CalculatorKind::Pressure => Some(Dimension::Pressure),
            CalculatorKind::FlowRate => Some(Dimension::FlowRate),
            CalculatorKind::MassConcentration => Some(Dimension::MassConcentration),
            _ => None,
        }
    }

    pub fn modes(&self) -> &'static [&'static str] {
        match self {
            CalculatorKind::Mass
            | CalculatorKind::Volume
            | CalculatorKind::Pressure
            | CalculatorKind::FlowRate
            | CalculatorKind::MassConcentration
            | CalculatorKind::Temperature => CONVERT_MODES,
            CalculatorKind::Concentration => CONCENTRATION_MODES,
            CalculatorKind::Dilution => DILUTION_MODES,
            CalculatorKind::Ph => PH_MODES,
            CalculatorKind::IdealGas => IDEAL_GAS_MODES,
            CalculatorKind::CombinedGas => COMBINED_GAS_MODES,
            CalculatorKind::Molarity => MOLARITY_MODES,
            CalculatorKind::Centrifuge => CENTRIFUGE_MODES,
            CalculatorKind::CellDilution => &["dilution"],
            CalculatorKind::DoublingTime => &["doubling-time"],
            CalculatorKind::Bradford => &["bradford"],
            CalculatorKind::ProteinMw => &["molecular-weight"],
            CalculatorKind::Pcr => &["quantify"],
        }
    }

    /// first mode of the list; every calculator has at least one
    pub fn default_mode(&self) -> &'static str {
        self.modes().first().copied().unwrap_or("convert")
    }

    /// the mode as a static str, or `UnknownMode`
    pub fn check_mode(&self, mode: &str) -> Result<&'static str, CalcError> {
        self.modes()
            .iter()
            .copied()
            .find(|m| *m == mode)
            .ok_or_else(|| CalcError::UnknownMode {
                calculator: self.name().to_string(),
                mode: mode.to_string(),
            })
    }

    /// Fields read in `mode`. A field that the mode solves for is not listed, so a
    /// front end shows it as disabled.
    pub fn input_fields(&self, mode: &str) -> Result<Vec<&'static str>, CalcError> {
        let mode = self.check_mode(mode)?;
        let fields: Vec<&'static str> = match self {
            CalculatorKind::Mass
            | CalculatorKind::Volume
            | CalculatorKind::Pressure
            | CalculatorKind::FlowRate
            | CalculatorKind::MassConcentration
            | CalculatorKind::Temperature => CONVERT_FIELDS.to_vec(),
            CalculatorKind::Concentration => match mode {
                "grams-to-moles" => vec!["grams", "molecular_weight"],
                "moles-to-grams" => vec!["moles", "molecular_weight"],
                "molarity" => vec!["moles", "volume"],
                _ => vec!["solute_mass", "solution_mass"],
            },
            CalculatorKind::Dilution => match mode {
                "find-v2" => vec!["c1", "v1", "c2"],
                _ => vec!["c1", "v1", "v2"],
            },
            CalculatorKind::Ph => vec!["value"],
            CalculatorKind::IdealGas => {
                const GROUPS: [(&str, &[&str]); 4] = [
                    ("pressure", &["pressure", "pressure_unit"]),
                    ("volume", &["volume", "volume_unit"]),
                    ("moles", &["moles"]),
                    ("temperature", &["temperature", "temperature_unit"]),
                ];
                GROUPS
                    .iter()
                    .filter(|(unknown, _)| *unknown != mode)
                    .flat_map(|(_, fields)| fields.iter().copied())
                    .collect()
            }
            CalculatorKind::CombinedGas => COMBINED_GAS_MODES
                .iter()
                .copied()
                .filter(|field| *field != mode)
                .collect(),
            CalculatorKind::Molarity => match mode {
                "molarity" => vec!["mass", "molar_mass", "volume", "volume_unit"],
                _ => vec!["molarity", "molar_mass", "volume", "volume_unit"],
            },
            CalculatorKind::Centrifuge => match mode {
                "rpm-to-rcf" => vec!["radius", "rpm"],
                _ => vec!["radius", "rcf"],
            },
            CalculatorKind::CellDilution => {
                vec!["current_density", "target_density", "final_volume"]
            }
            CalculatorKind::DoublingTime => {
                vec!["initial_count", "final_count", "elapsed", "time_unit"]
            }
            CalculatorKind::Bradford => {
                vec!["absorbance", "slope", "intercept", "dilution_factor"]
            }
            CalculatorKind::ProteinMw => vec!["sequence"],
            CalculatorKind::Pcr => {
                vec!["concentration", "concentration_unit", "length_bp", "target_mass"]
            }
        };
        Ok(fields)
    }

    /// Parses the fields of `mode` into a ready-to-solve formula.
    pub fn build(
        &self,
        mode: &str,
        reader: &FieldReader,
        settings: &DisplaySettings,
    ) -> Result<Formula, CalcError> {
        let mode = self.check_mode(mode)?;
        let formula: Formula = match self {
            CalculatorKind::Mass
            | CalculatorKind::Volume
            | CalculatorKind::Pressure
            | CalculatorKind::FlowRate
            | CalculatorKind::MassConcentration => {
                let dimension = self
                    .dimension()
                    .ok_or_else(|| CalcError::UnknownCalculator(self.name().to_string()))?;
                let mut conversion = LinearConversion::new(
                    dimension,
                    reader.number("value")?,
                    reader.text("from")?,
                    reader.text("to")?,
                );
                conversion.settings = settings.clone();
                conversion.into()
            }
            CalculatorKind::Temperature => {
                let mut conversion = TemperatureConversion::new(
                    reader.number("value")?,
                    reader.text("from")?.parse()?,
                    reader.text("to")?.parse()?,
                );
                conversion.settings = settings.clone();
                conversion.into()
            }
            CalculatorKind::Concentration => {
                ConcentrationConversion::from_fields(mode, reader)?.into()
            }
            CalculatorKind::Dilution => Dilution::from_fields(mode, reader)?.into(),
            CalculatorKind::Ph => PhCalculation::from_fields(mode, reader)?.into(),
            CalculatorKind::IdealGas => IdealGasLaw::from_fields(mode, reader)?.into(),
            CalculatorKind::CombinedGas => CombinedGasLaw::from_fields(mode, reader)?.into(),
            CalculatorKind::Molarity => Molarity::from_fields(mode, reader)?.into(),
            CalculatorKind::Centrifuge => Centrifuge::from_fields(mode, reader)?.into(),
            CalculatorKind::CellDilution => CellDilution::from_fields(reader)?.into(),
            CalculatorKind::DoublingTime => DoublingTime::from_fields(reader)?.into(),
            CalculatorKind::Bradford => BradfordAssay::from_fields(reader)?.into(),
            CalculatorKind::ProteinMw => ProteinMolecularWeight::from_fields(reader)?.into(),
            CalculatorKind::Pcr => DnaQuantification::from_fields(reader)?.into(),
        };
        Ok(formula)
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CalculatorKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        CalculatorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| CalcError::UnknownCalculator(s.trim().to_string()))
    }
}
