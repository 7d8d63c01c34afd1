//! Centrifuge speed: RCF = 1.118e-5 · r(cm) · RPM².
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver, Quantity};
use crate::Utils::parse_input::FieldReader;
use crate::errors::{CalcError, ensure_finite};

pub const RCF_COEFFICIENT: f64 = 1.118e-5;

pub const CENTRIFUGE_MODES: &[&str] = &["rpm-to-rcf", "rcf-to-rpm"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CentrifugeTarget {
    Rcf { rpm: f64 },
    Rpm { rcf: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centrifuge {
    /// rotor radius in cm
    pub radius: f64,
    pub target: CentrifugeTarget,
}

impl Centrifuge {
    pub fn rcf(radius: f64, rpm: f64) -> Self {
        Self {
            radius,
            target: CentrifugeTarget::Rcf { rpm },
        }
    }

    pub fn rpm(radius: f64, rcf: f64) -> Self {
        Self {
            radius,
            target: CentrifugeTarget::Rpm { rcf },
        }
    }

    pub fn from_fields(mode: &str, reader: &FieldReader) -> Result<Self, CalcError> {
        let radius = reader.number("radius")?;
        match mode {
            "rpm-to-rcf" => Ok(Self::rcf(radius, reader.number("rpm")?)),
            "rcf-to-rpm" => Ok(Self::rpm(radius, reader.number("rcf")?)),
            other => Err(CalcError::UnknownMode {
                calculator: "centrifuge".to_string(),
                mode: other.to_string(),
            }),
        }
    }
}

fn check_radius(radius: f64) -> Result<(), CalcError> {
    if radius <= 0.0 {
        return Err(CalcError::validation("Rotor radius must be positive"));
    }
    Ok(())
}

pub fn rcf_from_rpm(radius: f64, rpm: f64) -> Result<f64, CalcError> {
    check_radius(radius)?;
    if rpm < 0.0 {
        return Err(CalcError::validation("RPM cannot be negative"));
    }
    ensure_finite(RCF_COEFFICIENT * radius * rpm * rpm)
}

pub fn rpm_from_rcf(radius: f64, rcf: f64) -> Result<f64, CalcError> {
    check_radius(radius)?;
    if rcf < 0.0 {
        return Err(CalcError::validation("RCF cannot be negative"));
    }
    ensure_finite((rcf / (RCF_COEFFICIENT * radius)).sqrt())
}

impl FormulaSolver for Centrifuge {
    fn name(&self) -> &'static str {
        "Centrifuge RPM/RCF"
    }

    fn mode(&self) -> &'static str {
        match self.target {
            CentrifugeTarget::Rcf { .. } => "rpm-to-rcf",
            CentrifugeTarget::Rpm { .. } => "rcf-to-rpm",
        }
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let output = CalcOutput::new(self.name(), self.mode());
        match self.target {
            CentrifugeTarget::Rcf { rpm } => {
                let rcf = rcf_from_rpm(self.radius, rpm)?;
                Ok(output.push(Quantity::fixed("RCF", rcf, 2, "× g")))
            }
            CentrifugeTarget::Rpm { rcf } => {
                let rpm = rpm_from_rcf(self.radius, rcf)?;
                Ok(output.push(Quantity::fixed("RPM", rpm, 0, "rpm")))
            }
        }
    }
}
