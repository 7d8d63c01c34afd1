//! Linear unit tables and the generic table converter.
//!
//! Each physical dimension has one static table of units. Every unit stores the factor
//! that expresses it in the base unit of its table ("1 unit = factor × base"), so a
//! conversion is `value * factor(from) / factor(to)`.
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver, Quantity};
use crate::UnitConversion::display_format::format_converted;
use crate::errors::{CalcError, ensure_finite};
use crate::settings::DisplaySettings;
use prettytable::{Cell, Row, Table, row};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// unit of a linear conversion table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// symbol shown to the user
    pub name: &'static str,
    /// alternative spellings accepted on lookup (ASCII "u" for "μ", "m3" for "m³", ...)
    pub aliases: &'static [&'static str],
    /// 1 unit = factor × base unit
    pub factor: f64,
    pub description: &'static str,
}

impl Unit {
    fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}

/// linear-scale physical dimensions with a conversion table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Mass,
    Volume,
    Pressure,
    FlowRate,
    MassConcentration,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Mass,
        Dimension::Volume,
        Dimension::Pressure,
        Dimension::FlowRate,
        Dimension::MassConcentration,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Mass => "mass",
            Dimension::Volume => "volume",
            Dimension::Pressure => "pressure",
            Dimension::FlowRate => "flow rate",
            Dimension::MassConcentration => "mass concentration",
        }
    }

    pub fn table(&self) -> &'static ConversionTable {
        match self {
            Dimension::Mass => &MASS_TABLE,
            Dimension::Volume => &VOLUME_TABLE,
            Dimension::Pressure => &PRESSURE_TABLE,
            Dimension::FlowRate => &FLOW_RATE_TABLE,
            Dimension::MassConcentration => &MASS_CONCENTRATION_TABLE,
        }
    }

    /// Mass and volume tables reach down to pg and nL, so they keep more decimals.
    pub fn display_decimals(&self, settings: &DisplaySettings) -> usize {
        match self {
            Dimension::Mass | Dimension::Volume => settings.fine_decimals,
            _ => settings.general_decimals,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dimension {
    type Err = CalcError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mass" => Ok(Dimension::Mass),
            "volume" => Ok(Dimension::Volume),
            "pressure" => Ok(Dimension::Pressure),
            "flow-rate" | "flow_rate" | "flow rate" | "flowrate" => Ok(Dimension::FlowRate),
            "mass-concentration" | "mass_concentration" | "mass concentration" => {
                Ok(Dimension::MassConcentration)
            }
            _ => Err(CalcError::validation(format!("Unknown dimension: {}", s))),
        }
    }
}

/// table of units of one dimension
#[derive(Debug, Clone, Copy)]
pub struct ConversionTable {
    pub dimension: Dimension,
    /// name of the unit with factor 1
    pub base: &'static str,
    pub units: &'static [Unit],
}

impl ConversionTable {
    /// finds a unit by name or alias
    pub fn get(&self, name: &str) -> Option<&'static Unit> {
        let name = name.trim();
        self.units.iter().find(|unit| unit.matches(name))
    }

    pub fn unit(&self, name: &str) -> Result<&'static Unit, CalcError> {
        self.get(name).ok_or_else(|| CalcError::UnknownUnit {
            unit: name.to_string(),
            dimension: self.dimension.name().to_string(),
        })
    }

    pub fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|unit| unit.name).collect()
    }

    pub fn to_base(&self, value: f64, from: &str) -> Result<f64, CalcError> {
        let unit = self.unit(from)?;
        ensure_finite(value * unit.factor)
    }

    pub fn from_base(&self, value: f64, to: &str) -> Result<f64, CalcError> {
        let unit = self.unit(to)?;
        ensure_finite(value / unit.factor)
    }

    /// Converts `value` from one unit of the table to another.
    /// Both units must belong to the table; zero converts to zero.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, CalcError> {
        self.unit(from)?;
        self.unit(to)?;
        if value == 0.0 {
            return Ok(0.0);
        }
        self.from_base(self.to_base(value, from)?, to)
    }

    /// converts and formats with the display conventions of the dimension
    pub fn convert_display(
        &self,
        value: f64,
        from: &str,
        to: &str,
        settings: &DisplaySettings,
    ) -> Result<String, CalcError> {
        let converted = self.convert(value, from, to)?;
        Ok(format_converted(
            converted,
            self.dimension.display_decimals(settings),
            settings,
        ))
    }

    /// Checks the table invariants: positive finite factors, unique names and aliases,
    /// and a base unit with factor exactly 1.
    pub fn validate(&self) -> Result<(), CalcError> {
        let mut seen = HashSet::new();
        for unit in self.units {
            if !(unit.factor.is_finite() && unit.factor > 0.0) {
                return Err(CalcError::validation(format!(
                    "unit {} of {} table has a non-positive factor",
                    unit.name, self.dimension
                )));
            }
            for name in std::iter::once(&unit.name).chain(unit.aliases.iter()) {
                if !seen.insert(*name) {
                    return Err(CalcError::validation(format!(
                        "duplicate unit name {} in {} table",
                        name, self.dimension
                    )));
                }
            }
        }
        let bases: Vec<&Unit> = self
            .units
            .iter()
            .filter(|unit| unit.name == self.base)
            .collect();
        match bases.as_slice() {
            [base] if base.factor == 1.0 => Ok(()),
            _ => Err(CalcError::validation(format!(
                "{} table must contain exactly one base unit {} with factor 1",
                self.dimension, self.base
            ))),
        }
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row![
            "Unit",
            "Aliases",
            &format!("Factor to {}", self.base),
            "Description"
        ]);
        for unit in self.units {
            table.add_row(Row::new(vec![
                Cell::new(unit.name),
                Cell::new(&unit.aliases.join(", ")),
                Cell::new(&format!("{}", unit.factor)),
                Cell::new(unit.description),
            ]));
        }
        table
    }
}

/// converts between two units of the table of `dimension`
pub fn convert(
    dimension: Dimension,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, CalcError> {
    dimension.table().convert(value, from, to)
}

/// A single linear conversion request, solvable through the formula registry.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConversion {
    pub dimension: Dimension,
    pub value: f64,
    pub from: String,
    pub to: String,
    pub settings: DisplaySettings,
}

impl LinearConversion {
    pub fn new(dimension: Dimension, value: f64, from: &str, to: &str) -> Self {
        Self {
            dimension,
            value,
            from: from.to_string(),
            to: to.to_string(),
            settings: DisplaySettings::default(),
        }
    }
}

impl FormulaSolver for LinearConversion {
    fn name(&self) -> &'static str {
        match self.dimension {
            Dimension::Mass => "Mass conversion",
            Dimension::Volume => "Volume conversion",
            Dimension::Pressure => "Pressure conversion",
            Dimension::FlowRate => "Flow rate conversion",
            Dimension::MassConcentration => "Mass concentration conversion",
        }
    }

    fn mode(&self) -> &'static str {
        "convert"
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let table = self.dimension.table();
        let converted = table.convert(self.value, &self.from, &self.to)?;
        let to_unit = table.unit(&self.to)?;
        let text = format_converted(
            converted,
            self.dimension.display_decimals(&self.settings),
            &self.settings,
        );
        Ok(CalcOutput::new(self.name(), self.mode())
            .push(Quantity::new("value", converted, to_unit.name, &text)))
    }
}

pub const MASS_TABLE: ConversionTable = ConversionTable {
    dimension: Dimension::Mass,
    base: "g",
    units: &[
        Unit {
            name: "kg",
            aliases: &[],
            factor: 1000.0,
            description: "kilogram",
        },
        Unit {
            name: "g",
            aliases: &[],
            factor: 1.0,
            description: "gram",
        },
        Unit {
            name: "mg",
            aliases: &[],
            factor: 1e-3,
            description: "milligram",
        },
        Unit {
            name: "μg",
            aliases: &["µg", "ug", "mcg"],
            factor: 1e-6,
            description: "microgram",
        },
        Unit {
            name: "ng",
            aliases: &[],
            factor: 1e-9,
            description: "nanogram",
        },
        Unit {
            name: "pg",
            aliases: &[],
            factor: 1e-12,
            description: "picogram",
        },
        Unit {
            name: "lb",
            aliases: &["lbs"],
            factor: 453.59237,
            description: "pound",
        },
        Unit {
            name: "oz",
            aliases: &[],
            factor: 28.3495231,
            description: "ounce",
        },
    ],
};

pub const VOLUME_TABLE: ConversionTable = ConversionTable {
    dimension: Dimension::Volume,
    base: "L",
    units: &[
        Unit {
            name: "L",
            aliases: &["l"],
            factor: 1.0,
            description: "liter",
        },
        Unit {
            name: "mL",
            aliases: &["ml"],
            factor: 1e-3,
            description: "milliliter",
        },
        Unit {
            name: "μL",
            aliases: &["µL", "uL", "ul"],
            factor: 1e-6,
            description: "microliter",
        },
        Unit {
            name: "nL",
            aliases: &["nl"],
            factor: 1e-9,
            description: "nanoliter",
        },
        Unit {
            name: "gal",
            aliases: &[],
            factor: 3.78541,
            description: "gallon (US)",
        },
        Unit {
            name: "qt",
            aliases: &[],
            factor: 0.946353,
            description: "quart (US)",
        },
        Unit {
            name: "pt",
            aliases: &[],
            factor: 0.473176,
            description: "pint (US)",
        },
        Unit {
            name: "fl oz",
            aliases: &["floz", "fl_oz"],
            factor: 0.0295735,
            description: "fluid ounce (US)",
        },
        Unit {
            name: "m³",
            aliases: &["m3"],
            factor: 1000.0,
            description: "cubic meter",
        },
        Unit {
            name: "cm³",
            aliases: &["cm3", "cc"],
            factor: 1e-3,
            description: "cubic centimeter",
        },
    ],
};

pub const PRESSURE_TABLE: ConversionTable = ConversionTable {
    dimension: Dimension::Pressure,
    base: "Pa",
    units: &[
        Unit {
            name: "Pa",
            aliases: &[],
            factor: 1.0,
            description: "pascal",
        },
        Unit {
            name: "kPa",
            aliases: &[],
            factor: 1e3,
            description: "kilopascal",
        },
        Unit {
            name: "MPa",
            aliases: &[],
            factor: 1e6,
            description: "megapascal",
        },
        Unit {
            name: "bar",
            aliases: &[],
            factor: 1e5,
            description: "bar",
        },
        Unit {
            name: "mbar",
            aliases: &[],
            factor: 100.0,
            description: "millibar",
        },
        Unit {
            name: "atm",
            aliases: &[],
            factor: 101325.0,
            description: "standard atmosphere",
        },
        Unit {
            name: "psi",
            aliases: &[],
            factor: 6894.76,
            description: "pounds per square inch",
        },
        Unit {
            name: "Torr",
            aliases: &["torr"],
            factor: 133.322,
            description: "torr",
        },
        Unit {
            name: "mmHg",
            aliases: &[],
            factor: 133.322,
            description: "millimeters of mercury",
        },
        Unit {
            name: "inHg",
            aliases: &[],
            factor: 3386.39,
            description: "inches of mercury",
        },
        Unit {
            name: "cmH2O",
            aliases: &["cmH₂O"],
            factor: 98.0665,
            description: "centimeters of water",
        },
        Unit {
            name: "inH2O",
            aliases: &["inH₂O"],
            factor: 249.089,
            description: "inches of water",
        },
    ],
};

pub const FLOW_RATE_TABLE: ConversionTable = ConversionTable {
    dimension: Dimension::FlowRate,
    base: "m³/s",
    units: &[
        Unit {
            name: "m³/s",
            aliases: &["m3/s"],
            factor: 1.0,
            description: "cubic meter per second",
        },
        Unit {
            name: "m³/min",
            aliases: &["m3/min"],
            factor: 1.0 / 60.0,
            description: "cubic meter per minute",
        },
        Unit {
            name: "m³/h",
            aliases: &["m3/h"],
            factor: 1.0 / 3600.0,
            description: "cubic meter per hour",
        },
        Unit {
            name: "L/s",
            aliases: &["l/s"],
            factor: 1e-3,
            description: "liter per second",
        },
        Unit {
            name: "L/min",
            aliases: &["l/min", "lpm"],
            factor: 1e-3 / 60.0,
            description: "liter per minute",
        },
        Unit {
            name: "L/h",
            aliases: &["l/h"],
            factor: 1e-3 / 3600.0,
            description: "liter per hour",
        },
        Unit {
            name: "cfm",
            aliases: &[],
            factor: 0.000471947,
            description: "cubic feet per minute",
        },
        Unit {
            name: "cfh",
            aliases: &[],
            factor: 0.000471947 / 60.0,
            description: "cubic feet per hour",
        },
        Unit {
            name: "gpm",
            aliases: &[],
            factor: 0.00006309,
            description: "US gallons per minute",
        },
        Unit {
            name: "gph",
            aliases: &[],
            factor: 0.00006309 / 60.0,
            description: "US gallons per hour",
        },
    ],
};

/// Mass per volume. g/L, mg/mL and μg/μL are the same size; g/L is the base.
pub const MASS_CONCENTRATION_TABLE: ConversionTable = ConversionTable {
    dimension: Dimension::MassConcentration,
    base: "g/L",
    units: &[
        Unit {
            name: "g/L",
            aliases: &["g/l"],
            factor: 1.0,
            description: "gram per liter",
        },
        Unit {
            name: "mg/mL",
            aliases: &["mg/ml"],
            factor: 1.0,
            description: "milligram per milliliter",
        },
        Unit {
            name: "μg/μL",
            aliases: &["µg/µL", "ug/uL", "ug/ul"],
            factor: 1.0,
            description: "microgram per microliter",
        },
        Unit {
            name: "mg/L",
            aliases: &["mg/l"],
            factor: 1e-3,
            description: "milligram per liter",
        },
        Unit {
            name: "μg/mL",
            aliases: &["µg/mL", "ug/mL", "ug/ml"],
            factor: 1e-3,
            description: "microgram per milliliter",
        },
        Unit {
            name: "ng/μL",
            aliases: &["ng/µL", "ng/uL", "ng/ul"],
            factor: 1e-3,
            description: "nanogram per microliter",
        },
        Unit {
            name: "μg/L",
            aliases: &["µg/L", "ug/L", "ug/l"],
            factor: 1e-6,
            description: "microgram per liter",
        },
        Unit {
            name: "ng/mL",
            aliases: &["ng/ml"],
            factor: 1e-6,
            description: "nanogram per milliliter",
        },
        Unit {
            name: "% w/v",
            aliases: &["%w/v", "percent w/v"],
            factor: 10.0,
            description: "gram per 100 mL",
        },
    ],
};
