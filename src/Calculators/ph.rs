//! pH / pOH from one of [H+], [OH-], pH or pOH (aqueous solution at 25 °C).
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver, Quantity};
use crate::UnitConversion::display_format::format_fixed;
use crate::Utils::parse_input::FieldReader;
use crate::errors::{CalcError, ensure_finite};

/// pH + pOH = pKw at 25 °C
pub const PKW: f64 = 14.0;

pub const PH_MODES: &[&str] = &["ph-from-h", "poh-from-oh", "h-from-ph", "oh-from-poh"];

/// the known quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhInput {
    /// [H+] in mol/L
    Hydrogen(f64),
    /// [OH-] in mol/L
    Hydroxide(f64),
    Ph(f64),
    Poh(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhState {
    pub ph: f64,
    pub poh: f64,
    pub hydrogen: f64,
    pub hydroxide: f64,
}

/// -log10(c) of a concentration; zero maps to +∞
fn p_value(concentration: f64) -> f64 {
    if concentration == 0.0 {
        f64::INFINITY
    } else {
        -concentration.log10()
    }
}

fn check_p_scale(value: f64, what: &str) -> Result<(), CalcError> {
    if !(0.0..=PKW).contains(&value) {
        return Err(CalcError::validation(format!(
            "{} must be between 0 and {}",
            what, PKW
        )));
    }
    Ok(())
}

/// Solves the three unknown quantities. A zero concentration is the degenerate
/// limit: pH = ∞ and pOH = 0 (or the symmetric case for [OH-]).
pub fn solve_ph(input: PhInput) -> Result<PhState, CalcError> {
    match input {
        PhInput::Hydrogen(h) | PhInput::Hydroxide(h) if h < 0.0 => {
            Err(CalcError::validation("Concentration cannot be negative"))
        }
        PhInput::Hydrogen(h) => {
            let ph = p_value(h);
            let poh = if ph.is_infinite() { 0.0 } else { PKW - ph };
            Ok(PhState {
                ph,
                poh,
                hydrogen: h,
                hydroxide: ensure_finite(10f64.powf(-poh))?,
            })
        }
        PhInput::Hydroxide(oh) => {
            let poh = p_value(oh);
            let ph = if poh.is_infinite() { PKW } else { PKW - poh };
            Ok(PhState {
                ph,
                poh,
                hydrogen: ensure_finite(10f64.powf(-ph))?,
                hydroxide: oh,
            })
        }
        PhInput::Ph(ph) => {
            check_p_scale(ph, "pH")?;
            let poh = PKW - ph;
            Ok(PhState {
                ph,
                poh,
                hydrogen: 10f64.powf(-ph),
                hydroxide: 10f64.powf(-poh),
            })
        }
        PhInput::Poh(poh) => {
            check_p_scale(poh, "pOH")?;
            let ph = PKW - poh;
            Ok(PhState {
                ph,
                poh,
                hydrogen: 10f64.powf(-ph),
                hydroxide: 10f64.powf(-poh),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhCalculation {
    pub input: PhInput,
}

impl PhCalculation {
    pub fn new(input: PhInput) -> Self {
        Self { input }
    }

    pub fn from_fields(mode: &str, reader: &FieldReader) -> Result<Self, CalcError> {
        let value = reader.number("value")?;
        let input = match mode {
            "ph-from-h" => PhInput::Hydrogen(value),
            "poh-from-oh" => PhInput::Hydroxide(value),
            "h-from-ph" => PhInput::Ph(value),
            "oh-from-poh" => PhInput::Poh(value),
            other => {
                return Err(CalcError::UnknownMode {
                    calculator: "ph".to_string(),
                    mode: other.to_string(),
                });
            }
        };
        Ok(Self::new(input))
    }
}

fn p_quantity(name: &str, value: f64) -> Quantity {
    Quantity::new(name, value, "", &format_p_value(value))
}

fn concentration_quantity(name: &str, value: f64) -> Quantity {
    let text = if value == 0.0 {
        "0 M".to_string()
    } else {
        format!("{:.4e} M", value)
    };
    Quantity::new(name, value, "M", &text)
}

impl FormulaSolver for PhCalculation {
    fn name(&self) -> &'static str {
        "pH / pOH"
    }

    fn mode(&self) -> &'static str {
        match self.input {
            PhInput::Hydrogen(_) => "ph-from-h",
            PhInput::Hydroxide(_) => "poh-from-oh",
            PhInput::Ph(_) => "h-from-ph",
            PhInput::Poh(_) => "oh-from-poh",
        }
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let state = solve_ph(self.input)?;
        Ok(CalcOutput::new(self.name(), self.mode())
            .push(p_quantity("pH", state.ph))
            .push(p_quantity("pOH", state.poh))
            .push(concentration_quantity("[H+]", state.hydrogen))
            .push(concentration_quantity("[OH-]", state.hydroxide)))
    }
}

/// formats a p-value for display, "∞" for the degenerate case
pub fn format_p_value(value: f64) -> String {
    if value.is_infinite() {
        "∞".to_string()
    } else {
        format_fixed(value, 4)
    }
}
