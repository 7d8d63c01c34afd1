//! DNA quantification for PCR set-up: volume of template to pipette for a target
//! mass, and the molarity of a double-stranded DNA stock.
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver, Quantity};
use crate::UnitConversion::conversion_table::MASS_CONCENTRATION_TABLE;
use crate::UnitConversion::display_format::{format_fixed, with_unit};
use crate::Utils::parse_input::FieldReader;
use crate::errors::{CalcError, ensure_finite};

/// average molar mass of one dsDNA base pair, g/mol
pub const BP_MOLAR_MASS: f64 = 650.0;

/// stock concentration units offered for DNA
pub const DNA_CONCENTRATION_UNITS: &[&str] = &["ng/μL", "μg/mL", "μg/μL"];

#[derive(Debug, Clone, PartialEq)]
pub struct DnaQuantification {
    pub concentration: f64,
    pub concentration_unit: String,
    /// base pairs
    pub length: f64,
    /// ng
    pub target_mass: f64,
}

impl DnaQuantification {
    pub fn new(
        concentration: f64,
        concentration_unit: &str,
        length: f64,
        target_mass: f64,
    ) -> Self {
        Self {
            concentration,
            concentration_unit: concentration_unit.to_string(),
            length,
            target_mass,
        }
    }

    pub fn from_fields(reader: &FieldReader) -> Result<Self, CalcError> {
        let (concentration, unit) =
            reader.quantity("concentration", "concentration_unit", "ng/μL")?;
        Ok(Self::new(
            concentration,
            &unit,
            reader.number("length_bp")?,
            reader.number("target_mass")?,
        ))
    }

    /// validated stock concentration in ng/μL
    fn ng_per_ul(&self) -> Result<f64, CalcError> {
        if self.concentration <= 0.0 || self.length <= 0.0 || self.target_mass <= 0.0 {
            return Err(CalcError::validation("All values must be positive"));
        }
        MASS_CONCENTRATION_TABLE.convert(self.concentration, &self.concentration_unit, "ng/μL")
    }

    /// μL of stock holding `target_mass` ng
    pub fn volume_needed(&self) -> Result<f64, CalcError> {
        let ng_per_ul = self.ng_per_ul()?;
        ensure_finite(self.target_mass / ng_per_ul)
    }

    /// stock molarity in mol/L
    pub fn molarity(&self) -> Result<f64, CalcError> {
        let grams_per_liter =
            MASS_CONCENTRATION_TABLE.convert(self.ng_per_ul()?, "ng/μL", "g/L")?;
        ensure_finite(grams_per_liter / (self.length * BP_MOLAR_MASS))
    }
}

/// picks pM, nM, μM or mM so the number stays readable
pub fn scale_molarity(molar: f64) -> (f64, &'static str) {
    if molar < 1e-9 {
        (molar * 1e12, "pM")
    } else if molar < 1e-6 {
        (molar * 1e9, "nM")
    } else if molar < 1e-3 {
        (molar * 1e6, "μM")
    } else {
        (molar * 1e3, "mM")
    }
}

impl FormulaSolver for DnaQuantification {
    fn name(&self) -> &'static str {
        "PCR / DNA quantification"
    }

    fn mode(&self) -> &'static str {
        "quantify"
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let volume = self.volume_needed()?;
        let molarity = self.molarity()?;
        let (scaled, unit) = scale_molarity(molarity);
        let text = with_unit(&format_fixed(scaled, 2), unit);
        Ok(CalcOutput::new(self.name(), self.mode())
            .push(Quantity::fixed("volume", volume, 2, "μL"))
            .push(Quantity::new("molarity", molarity, "M", &text)))
    }
}
