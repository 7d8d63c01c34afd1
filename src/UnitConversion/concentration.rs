//! Amount-of-substance conversions: grams ↔ moles, molarity from moles and volume,
//! and percent weight/weight.
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver, Quantity};
use crate::Utils::parse_input::{FieldReader, parse_number};
use crate::errors::{CalcError, ensure_finite};

/// compound with a well-known molar mass, offered as a shortcut for the molecular weight field
pub struct CommonCompound {
    pub formula: &'static str,
    pub name: &'static str,
    /// g/mol
    pub molar_mass: f64,
}

pub const COMMON_COMPOUNDS: &[CommonCompound] = &[
    CommonCompound {
        formula: "NaCl",
        name: "sodium chloride",
        molar_mass: 58.44,
    },
    CommonCompound {
        formula: "H2O",
        name: "water",
        molar_mass: 18.02,
    },
    CommonCompound {
        formula: "C6H12O6",
        name: "glucose",
        molar_mass: 180.16,
    },
    CommonCompound {
        formula: "NaOH",
        name: "sodium hydroxide",
        molar_mass: 40.00,
    },
    CommonCompound {
        formula: "HCl",
        name: "hydrochloric acid",
        molar_mass: 36.46,
    },
    CommonCompound {
        formula: "H2SO4",
        name: "sulfuric acid",
        molar_mass: 98.08,
    },
];

/// looks a compound up by formula or by name, ignoring case
pub fn common_molar_mass(name: &str) -> Option<f64> {
    let name = name.trim();
    COMMON_COMPOUNDS
        .iter()
        .find(|c| c.formula.eq_ignore_ascii_case(name) || c.name.eq_ignore_ascii_case(name))
        .map(|c| c.molar_mass)
}

/// Reads a molar mass field that holds either a number in g/mol or the name of a
/// common compound ("NaCl", "glucose").
pub fn read_molar_mass(reader: &FieldReader, field: &str) -> Result<f64, CalcError> {
    let text = reader.text(field)?;
    match parse_number(field, text) {
        Ok(value) => Ok(value),
        Err(err @ CalcError::InvalidNumber { .. }) => common_molar_mass(text).ok_or(err),
        Err(err) => Err(err),
    }
}

pub const CONCENTRATION_MODES: &[&str] =
    &["grams-to-moles", "moles-to-grams", "molarity", "percent-ww"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConcentrationConversion {
    GramsToMoles { grams: f64, molecular_weight: f64 },
    MolesToGrams { moles: f64, molecular_weight: f64 },
    /// volume in liters
    Molarity { moles: f64, volume: f64 },
    PercentWw { solute_mass: f64, solution_mass: f64 },
}

impl ConcentrationConversion {
    pub fn from_fields(mode: &str, reader: &FieldReader) -> Result<Self, CalcError> {
        match mode {
            "grams-to-moles" => Ok(Self::GramsToMoles {
                grams: reader.number("grams")?,
                molecular_weight: read_molar_mass(reader, "molecular_weight")?,
            }),
            "moles-to-grams" => Ok(Self::MolesToGrams {
                moles: reader.number("moles")?,
                molecular_weight: read_molar_mass(reader, "molecular_weight")?,
            }),
            "molarity" => Ok(Self::Molarity {
                moles: reader.number("moles")?,
                volume: reader.number("volume")?,
            }),
            "percent-ww" => Ok(Self::PercentWw {
                solute_mass: reader.number("solute_mass")?,
                solution_mass: reader.number("solution_mass")?,
            }),
            other => Err(CalcError::UnknownMode {
                calculator: "concentration".to_string(),
                mode: other.to_string(),
            }),
        }
    }
}

fn check_molecular_weight(molecular_weight: f64) -> Result<(), CalcError> {
    if molecular_weight <= 0.0 {
        return Err(CalcError::validation("Molecular weight must be positive"));
    }
    Ok(())
}

fn check_amount(value: f64, what: &str) -> Result<(), CalcError> {
    if value < 0.0 {
        return Err(CalcError::validation(format!("{} cannot be negative", what)));
    }
    Ok(())
}

impl FormulaSolver for ConcentrationConversion {
    fn name(&self) -> &'static str {
        "Concentration conversion"
    }

    fn mode(&self) -> &'static str {
        match self {
            Self::GramsToMoles { .. } => "grams-to-moles",
            Self::MolesToGrams { .. } => "moles-to-grams",
            Self::Molarity { .. } => "molarity",
            Self::PercentWw { .. } => "percent-ww",
        }
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let output = CalcOutput::new(self.name(), self.mode());
        match *self {
            Self::GramsToMoles {
                grams,
                molecular_weight,
            } => {
                check_amount(grams, "Mass")?;
                check_molecular_weight(molecular_weight)?;
                let moles = ensure_finite(grams / molecular_weight)?;
                Ok(output.push(Quantity::trimmed("moles", moles, 6, "mol")))
            }
            Self::MolesToGrams {
                moles,
                molecular_weight,
            } => {
                check_amount(moles, "Amount")?;
                check_molecular_weight(molecular_weight)?;
                let grams = ensure_finite(moles * molecular_weight)?;
                Ok(output.push(Quantity::trimmed("grams", grams, 6, "g")))
            }
            Self::Molarity { moles, volume } => {
                check_amount(moles, "Amount")?;
                if volume <= 0.0 {
                    return Err(CalcError::validation("Volume must be positive"));
                }
                let molarity = ensure_finite(moles / volume)?;
                Ok(output.push(Quantity::trimmed("molarity", molarity, 6, "M")))
            }
            Self::PercentWw {
                solute_mass,
                solution_mass,
            } => {
                check_amount(solute_mass, "Mass of solute")?;
                if solution_mass <= 0.0 {
                    return Err(CalcError::validation("Mass of solution must be positive"));
                }
                if solute_mass > solution_mass {
                    return Err(CalcError::validation(
                        "Mass of solute cannot exceed mass of solution",
                    ));
                }
                let percent = ensure_finite(solute_mass / solution_mass * 100.0)?;
                Ok(output.push(Quantity::trimmed("percent", percent, 4, "% w/w")))
            }
        }
    }
}
