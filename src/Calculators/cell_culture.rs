//! Cell culture helpers: seeding dilution and population doubling time.
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver, Quantity};
use crate::Utils::parse_input::FieldReader;
use crate::errors::{CalcError, ensure_finite};
use std::fmt;
use std::str::FromStr;

/// Volume of cell suspension and fresh medium needed to reach a target density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDilution {
    /// cells/mL of the suspension at hand
    pub current_density: f64,
    /// cells/mL wanted in the final culture
    pub target_density: f64,
    /// mL
    pub final_volume: f64,
}

impl CellDilution {
    pub fn new(current_density: f64, target_density: f64, final_volume: f64) -> Self {
        Self {
            current_density,
            target_density,
            final_volume,
        }
    }

    pub fn from_fields(reader: &FieldReader) -> Result<Self, CalcError> {
        Ok(Self::new(
            reader.number("current_density")?,
            reader.number("target_density")?,
            reader.number("final_volume")?,
        ))
    }

    /// (cell suspension volume, medium volume) in mL
    pub fn volumes(&self) -> Result<(f64, f64), CalcError> {
        if self.current_density <= 0.0 || self.target_density <= 0.0 || self.final_volume <= 0.0
        {
            return Err(CalcError::validation("All values must be positive"));
        }
        if self.target_density > self.current_density {
            return Err(CalcError::validation(
                "Target density cannot be higher than current density for dilution",
            ));
        }
        let cell_volume =
            ensure_finite(self.target_density * self.final_volume / self.current_density)?;
        Ok((cell_volume, self.final_volume - cell_volume))
    }
}

impl FormulaSolver for CellDilution {
    fn name(&self) -> &'static str {
        "Cell culture dilution"
    }

    fn mode(&self) -> &'static str {
        "dilution"
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let (cells, medium) = self.volumes()?;
        Ok(CalcOutput::new(self.name(), self.mode())
            .push(Quantity::fixed("cell_volume", cells, 2, "mL"))
            .push(Quantity::fixed("medium_volume", medium, 2, "mL")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Minutes, TimeUnit::Hours, TimeUnit::Days];

    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "min" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hr" | "hour" | "hours" => Ok(TimeUnit::Hours),
            "d" | "day" | "days" => Ok(TimeUnit::Days),
            _ => Err(CalcError::UnknownUnit {
                unit: s.to_string(),
                dimension: "time".to_string(),
            }),
        }
    }
}

/// Moves a duration into a more readable unit when it is very small or very large
/// for the unit it was measured in.
pub fn rescale_time(time: f64, unit: TimeUnit) -> (f64, TimeUnit) {
    match unit {
        TimeUnit::Hours if time < 1.0 => (time * 60.0, TimeUnit::Minutes),
        TimeUnit::Hours if time > 48.0 => (time / 24.0, TimeUnit::Days),
        TimeUnit::Minutes if time > 120.0 => (time / 60.0, TimeUnit::Hours),
        TimeUnit::Days if time < 0.5 => (time * 24.0, TimeUnit::Hours),
        _ => (time, unit),
    }
}

/// Doubling time of an exponentially growing population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoublingTime {
    pub initial_count: f64,
    pub final_count: f64,
    pub elapsed: f64,
    pub unit: TimeUnit,
}

impl DoublingTime {
    pub fn new(initial_count: f64, final_count: f64, elapsed: f64, unit: TimeUnit) -> Self {
        Self {
            initial_count,
            final_count,
            elapsed,
            unit,
        }
    }

    pub fn from_fields(reader: &FieldReader) -> Result<Self, CalcError> {
        Ok(Self::new(
            reader.number("initial_count")?,
            reader.number("final_count")?,
            reader.number("elapsed")?,
            reader.text_or("time_unit", "hours").parse()?,
        ))
    }

    /// number of doublings log2(final/initial)
    pub fn doublings(&self) -> Result<f64, CalcError> {
        if self.initial_count <= 0.0 || self.final_count <= 0.0 || self.elapsed <= 0.0 {
            return Err(CalcError::validation("All values must be positive"));
        }
        if self.final_count <= self.initial_count {
            return Err(CalcError::validation(
                "Final count must be greater than initial count",
            ));
        }
        ensure_finite((self.final_count / self.initial_count).log2())
    }

    /// doubling time in a readable unit
    pub fn doubling_time(&self) -> Result<(f64, TimeUnit), CalcError> {
        let time = ensure_finite(self.elapsed / self.doublings()?)?;
        Ok(rescale_time(time, self.unit))
    }
}

impl FormulaSolver for DoublingTime {
    fn name(&self) -> &'static str {
        "Cell doubling time"
    }

    fn mode(&self) -> &'static str {
        "doubling-time"
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let doublings = self.doublings()?;
        let (time, unit) = self.doubling_time()?;
        Ok(CalcOutput::new(self.name(), self.mode())
            .push(Quantity::fixed("doublings", doublings, 2, ""))
            .push(Quantity::fixed("doubling_time", time, 2, unit.name())))
    }
}
