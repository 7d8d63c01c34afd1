//! Ideal gas law PV = nRT and combined gas law P1V1/T1 = P2V2/T2.
//!
//! Inputs are normalised to atm, L and K through the shared unit tables before the
//! equations are applied; results are reported in atm, L, mol and K.
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver, Quantity};
use crate::UnitConversion::conversion_table::{PRESSURE_TABLE, VOLUME_TABLE};
use crate::UnitConversion::display_format::format_fixed;
use crate::UnitConversion::temperature::{KELVIN_OFFSET, TemperatureUnit, to_kelvin};
use crate::Utils::parse_input::FieldReader;
use crate::errors::{CalcError, ensure_finite};

/// gas constant in L·atm/(mol·K)
pub const R_L_ATM: f64 = 0.08206;

pub const IDEAL_GAS_MODES: &[&str] = &["pressure", "volume", "moles", "temperature"];
pub const COMBINED_GAS_MODES: &[&str] = &["p1", "v1", "t1", "p2", "v2", "t2"];

/// temperature result in K with the Celsius value alongside
fn temperature_quantity(name: &str, kelvin: f64) -> Quantity {
    let text = format!(
        "{} K ({} °C)",
        format_fixed(kelvin, 6),
        format_fixed(kelvin - KELVIN_OFFSET, 2)
    );
    Quantity::new(name, kelvin, "K", &text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdealGasUnknown {
    Pressure,
    Volume,
    Moles,
    Temperature,
}

/// PV = nRT. The value held for the unknown variable is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealGasLaw {
    pub unknown: IdealGasUnknown,
    pub pressure: f64,
    pub pressure_unit: String,
    pub volume: f64,
    pub volume_unit: String,
    pub moles: f64,
    pub temperature: f64,
    pub temperature_unit: TemperatureUnit,
}

impl IdealGasLaw {
    /// 1 atm, 1 L, 1 mol, 273.15 K
    pub fn new(unknown: IdealGasUnknown) -> Self {
        Self {
            unknown,
            pressure: 1.0,
            pressure_unit: "atm".to_string(),
            volume: 1.0,
            volume_unit: "L".to_string(),
            moles: 1.0,
            temperature: KELVIN_OFFSET,
            temperature_unit: TemperatureUnit::Kelvin,
        }
    }

    pub fn from_fields(mode: &str, reader: &FieldReader) -> Result<Self, CalcError> {
        let unknown = match mode {
            "pressure" => IdealGasUnknown::Pressure,
            "volume" => IdealGasUnknown::Volume,
            "moles" => IdealGasUnknown::Moles,
            "temperature" => IdealGasUnknown::Temperature,
            other => {
                return Err(CalcError::UnknownMode {
                    calculator: "ideal-gas".to_string(),
                    mode: other.to_string(),
                });
            }
        };
        let mut law = Self::new(unknown);
        if unknown != IdealGasUnknown::Pressure {
            (law.pressure, law.pressure_unit) =
                reader.quantity("pressure", "pressure_unit", "atm")?;
        }
        if unknown != IdealGasUnknown::Volume {
            (law.volume, law.volume_unit) = reader.quantity("volume", "volume_unit", "L")?;
        }
        if unknown != IdealGasUnknown::Moles {
            law.moles = reader.number("moles")?;
        }
        if unknown != IdealGasUnknown::Temperature {
            let (temperature, unit) = reader.quantity("temperature", "temperature_unit", "K")?;
            law.temperature = temperature;
            law.temperature_unit = unit.parse()?;
        }
        Ok(law)
    }

    /// known values converted to atm, L, mol and K; the unknown slot is `None`
    fn normalized(&self) -> Result<[Option<f64>; 4], CalcError> {
        let known = |which: IdealGasUnknown| self.unknown != which;
        let p = if known(IdealGasUnknown::Pressure) {
            Some(PRESSURE_TABLE.convert(self.pressure, &self.pressure_unit, "atm")?)
        } else {
            None
        };
        let v = if known(IdealGasUnknown::Volume) {
            Some(VOLUME_TABLE.convert(self.volume, &self.volume_unit, "L")?)
        } else {
            None
        };
        let n = known(IdealGasUnknown::Moles).then_some(self.moles);
        let t = if known(IdealGasUnknown::Temperature) {
            Some(to_kelvin(self.temperature, self.temperature_unit)?)
        } else {
            None
        };
        let values = [p, v, n, t];
        if values.iter().flatten().any(|value| *value <= 0.0) {
            return Err(CalcError::validation("All values must be positive"));
        }
        Ok(values)
    }
}

impl FormulaSolver for IdealGasLaw {
    fn name(&self) -> &'static str {
        "Ideal gas law (PV = nRT)"
    }

    fn mode(&self) -> &'static str {
        match self.unknown {
            IdealGasUnknown::Pressure => "pressure",
            IdealGasUnknown::Volume => "volume",
            IdealGasUnknown::Moles => "moles",
            IdealGasUnknown::Temperature => "temperature",
        }
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let [p, v, n, t] = self.normalized()?;
        let (p, v, n, t) = (
            p.unwrap_or_default(),
            v.unwrap_or_default(),
            n.unwrap_or_default(),
            t.unwrap_or_default(),
        );
        let output = CalcOutput::new(self.name(), self.mode());
        let quantity = match self.unknown {
            IdealGasUnknown::Pressure => {
                Quantity::fixed("P", ensure_finite(n * R_L_ATM * t / v)?, 6, "atm")
            }
            IdealGasUnknown::Volume => {
                Quantity::fixed("V", ensure_finite(n * R_L_ATM * t / p)?, 6, "L")
            }
            IdealGasUnknown::Moles => {
                Quantity::fixed("n", ensure_finite(p * v / (R_L_ATM * t))?, 6, "mol")
            }
            IdealGasUnknown::Temperature => {
                temperature_quantity("T", ensure_finite(p * v / (n * R_L_ATM))?)
            }
        };
        Ok(output.push(quantity))
    }
}

/// state variables of the combined gas law
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinedUnknown {
    P1,
    V1,
    T1,
    P2,
    V2,
    T2,
}

/// P1V1/T1 = P2V2/T2 with pressures in atm, volumes in L and temperatures in K.
/// The value held for the unknown variable is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedGasLaw {
    pub unknown: CombinedUnknown,
    pub p1: f64,
    pub v1: f64,
    pub t1: f64,
    pub p2: f64,
    pub v2: f64,
    pub t2: f64,
}

impl CombinedGasLaw {
    pub fn new(unknown: CombinedUnknown) -> Self {
        Self {
            unknown,
            p1: 1.0,
            v1: 1.0,
            t1: KELVIN_OFFSET,
            p2: 2.0,
            v2: 0.5,
            t2: 293.15,
        }
    }

    pub fn from_fields(mode: &str, reader: &FieldReader) -> Result<Self, CalcError> {
        let unknown = match mode {
            "p1" => CombinedUnknown::P1,
            "v1" => CombinedUnknown::V1,
            "t1" => CombinedUnknown::T1,
            "p2" => CombinedUnknown::P2,
            "v2" => CombinedUnknown::V2,
            "t2" => CombinedUnknown::T2,
            other => {
                return Err(CalcError::UnknownMode {
                    calculator: "combined-gas".to_string(),
                    mode: other.to_string(),
                });
            }
        };
        let read = |field: &str, which: CombinedUnknown| -> Result<f64, CalcError> {
            if unknown == which {
                Ok(0.0)
            } else {
                reader.number(field)
            }
        };
        Ok(Self {
            unknown,
            p1: read("p1", CombinedUnknown::P1)?,
            v1: read("v1", CombinedUnknown::V1)?,
            t1: read("t1", CombinedUnknown::T1)?,
            p2: read("p2", CombinedUnknown::P2)?,
            v2: read("v2", CombinedUnknown::V2)?,
            t2: read("t2", CombinedUnknown::T2)?,
        })
    }

    fn check_known(&self) -> Result<(), CalcError> {
        use CombinedUnknown::*;
        let initial = [(P1, self.p1), (V1, self.v1), (T1, self.t1)];
        let last = [(P2, self.p2), (V2, self.v2), (T2, self.t2)];
        let positive = |state: &[(CombinedUnknown, f64)]| {
            state
                .iter()
                .filter(|(which, _)| *which != self.unknown)
                .all(|(_, value)| *value > 0.0)
        };
        if !positive(&initial) {
            return Err(CalcError::validation("Initial values must be positive"));
        }
        if !positive(&last) {
            return Err(CalcError::validation("Final values must be positive"));
        }
        Ok(())
    }
}

impl FormulaSolver for CombinedGasLaw {
    fn name(&self) -> &'static str {
        "Combined gas law (P1V1/T1 = P2V2/T2)"
    }

    fn mode(&self) -> &'static str {
        match self.unknown {
            CombinedUnknown::P1 => "p1",
            CombinedUnknown::V1 => "v1",
            CombinedUnknown::T1 => "t1",
            CombinedUnknown::P2 => "p2",
            CombinedUnknown::V2 => "v2",
            CombinedUnknown::T2 => "t2",
        }
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        self.check_known()?;
        let Self {
            p1, v1, t1, p2, v2, t2, ..
        } = *self;
        let quantity = match self.unknown {
            CombinedUnknown::P2 => {
                Quantity::fixed("P2", ensure_finite(p1 * v1 * t2 / (v2 * t1))?, 6, "atm")
            }
            CombinedUnknown::V2 => {
                Quantity::fixed("V2", ensure_finite(p1 * v1 * t2 / (p2 * t1))?, 6, "L")
            }
            CombinedUnknown::T2 => {
                temperature_quantity("T2", ensure_finite(p2 * v2 * t1 / (p1 * v1))?)
            }
            CombinedUnknown::P1 => {
                Quantity::fixed("P1", ensure_finite(p2 * v2 * t1 / (v1 * t2))?, 6, "atm")
            }
            CombinedUnknown::V1 => {
                Quantity::fixed("V1", ensure_finite(p2 * v2 * t1 / (p1 * t2))?, 6, "L")
            }
            CombinedUnknown::T1 => {
                temperature_quantity("T1", ensure_finite(p1 * v1 * t2 / (p2 * v2))?)
            }
        };
        Ok(CalcOutput::new(self.name(), self.mode()).push(quantity))
    }
}
