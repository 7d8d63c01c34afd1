//! Molarity of a solution and the mass of solute needed to prepare one.
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver, Quantity};
use crate::UnitConversion::concentration::read_molar_mass;
use crate::UnitConversion::conversion_table::VOLUME_TABLE;
use crate::Utils::parse_input::FieldReader;
use crate::errors::{CalcError, ensure_finite};

pub const MOLARITY_MODES: &[&str] = &["molarity", "mass"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MolarityTarget {
    /// solve M from the dissolved mass in g
    Molarity { mass: f64 },
    /// solve the mass in g needed for a target molarity in mol/L
    Mass { molarity: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Molarity {
    /// g/mol
    pub molar_mass: f64,
    /// L
    pub volume: f64,
    pub target: MolarityTarget,
}

impl Molarity {
    pub fn from_fields(mode: &str, reader: &FieldReader) -> Result<Self, CalcError> {
        let target = match mode {
            "molarity" => MolarityTarget::Molarity {
                mass: reader.number("mass")?,
            },
            "mass" => MolarityTarget::Mass {
                molarity: reader.number("molarity")?,
            },
            other => {
                return Err(CalcError::UnknownMode {
                    calculator: "molarity".to_string(),
                    mode: other.to_string(),
                });
            }
        };
        let molar_mass = read_molar_mass(reader, "molar_mass")?;
        let (volume, volume_unit) = reader.quantity("volume", "volume_unit", "L")?;
        let volume = VOLUME_TABLE.convert(volume, &volume_unit, "L")?;
        Ok(Self {
            molar_mass,
            volume,
            target,
        })
    }
}

/// M = mass / (molar mass · volume)
pub fn molarity(mass: f64, molar_mass: f64, volume: f64) -> Result<f64, CalcError> {
    check_solution(molar_mass, volume)?;
    if mass < 0.0 {
        return Err(CalcError::validation("Mass cannot be negative"));
    }
    ensure_finite(mass / (molar_mass * volume))
}

/// mass = M · molar mass · volume
pub fn required_mass(molarity: f64, molar_mass: f64, volume: f64) -> Result<f64, CalcError> {
    check_solution(molar_mass, volume)?;
    if molarity < 0.0 {
        return Err(CalcError::validation("Molarity cannot be negative"));
    }
    ensure_finite(molarity * molar_mass * volume)
}

fn check_solution(molar_mass: f64, volume: f64) -> Result<(), CalcError> {
    if molar_mass <= 0.0 {
        return Err(CalcError::validation("Molar mass must be positive"));
    }
    if volume <= 0.0 {
        return Err(CalcError::validation("Volume must be positive"));
    }
    Ok(())
}

impl FormulaSolver for Molarity {
    fn name(&self) -> &'static str {
        "Molarity"
    }

    fn mode(&self) -> &'static str {
        match self.target {
            MolarityTarget::Molarity { .. } => "molarity",
            MolarityTarget::Mass { .. } => "mass",
        }
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let output = CalcOutput::new(self.name(), self.mode());
        match self.target {
            MolarityTarget::Molarity { mass } => {
                let m = molarity(mass, self.molar_mass, self.volume)?;
                Ok(output.push(Quantity::trimmed("molarity", m, 6, "M")))
            }
            MolarityTarget::Mass { molarity } => {
                let mass = required_mass(molarity, self.molar_mass, self.volume)?;
                Ok(output.push(Quantity::trimmed("mass", mass, 4, "g")))
            }
        }
    }
}
