//! Dilution equation C1·V1 = C2·V2.
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver, Quantity};
use crate::Utils::parse_input::FieldReader;
use crate::errors::{CalcError, ensure_finite};

pub const DILUTION_MODES: &[&str] = &["find-v2", "find-c2"];

/// which side of the equation is unknown, carrying the known final quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DilutionTarget {
    FindV2 { c2: f64 },
    FindC2 { v2: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dilution {
    pub c1: f64,
    pub v1: f64,
    pub target: DilutionTarget,
}

impl Dilution {
    pub fn find_v2(c1: f64, v1: f64, c2: f64) -> Self {
        Self {
            c1,
            v1,
            target: DilutionTarget::FindV2 { c2 },
        }
    }

    pub fn find_c2(c1: f64, v1: f64, v2: f64) -> Self {
        Self {
            c1,
            v1,
            target: DilutionTarget::FindC2 { v2 },
        }
    }

    pub fn from_fields(mode: &str, reader: &FieldReader) -> Result<Self, CalcError> {
        let c1 = reader.number("c1")?;
        let v1 = reader.number("v1")?;
        match mode {
            "find-v2" => Ok(Self::find_v2(c1, v1, reader.number("c2")?)),
            "find-c2" => Ok(Self::find_c2(c1, v1, reader.number("v2")?)),
            other => Err(CalcError::UnknownMode {
                calculator: "dilution".to_string(),
                mode: other.to_string(),
            }),
        }
    }
}

fn check_initial(c1: f64, v1: f64) -> Result<(), CalcError> {
    if c1 <= 0.0 || v1 <= 0.0 {
        return Err(CalcError::validation(
            "Initial concentration and volume must be positive",
        ));
    }
    Ok(())
}

/// V2 = C1·V1 / C2; a dilution needs 0 < C2 < C1
pub fn final_volume(c1: f64, v1: f64, c2: f64) -> Result<f64, CalcError> {
    check_initial(c1, v1)?;
    if c2 <= 0.0 {
        return Err(CalcError::validation("Final concentration must be positive"));
    }
    if c2 >= c1 {
        return Err(CalcError::validation(
            "Final concentration must be less than initial concentration for dilution",
        ));
    }
    ensure_finite(c1 * v1 / c2)
}

/// C2 = C1·V1 / V2; a dilution needs V2 > V1
pub fn final_concentration(c1: f64, v1: f64, v2: f64) -> Result<f64, CalcError> {
    check_initial(c1, v1)?;
    if v2 <= 0.0 {
        return Err(CalcError::validation("Final volume must be positive"));
    }
    if v2 <= v1 {
        return Err(CalcError::validation(
            "Final volume must be greater than initial volume for dilution",
        ));
    }
    ensure_finite(c1 * v1 / v2)
}

impl FormulaSolver for Dilution {
    fn name(&self) -> &'static str {
        "Dilution (C1V1 = C2V2)"
    }

    fn mode(&self) -> &'static str {
        match self.target {
            DilutionTarget::FindV2 { .. } => "find-v2",
            DilutionTarget::FindC2 { .. } => "find-c2",
        }
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let output = CalcOutput::new(self.name(), self.mode());
        match self.target {
            DilutionTarget::FindV2 { c2 } => {
                let v2 = final_volume(self.c1, self.v1, c2)?;
                Ok(output.push(Quantity::trimmed("V2", v2, 4, "")))
            }
            DilutionTarget::FindC2 { v2 } => {
                let c2 = final_concentration(self.c1, self.v1, v2)?;
                Ok(output.push(Quantity::trimmed("C2", c2, 6, "")))
            }
        }
    }
}
