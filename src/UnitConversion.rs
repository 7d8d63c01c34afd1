//! # Unit conversion
//!
//! Linear unit tables (mass, volume, pressure, flow rate, mass concentration) share one
//! generic converter; temperature has its own affine formulas; amount-of-substance
//! conversions (grams ↔ moles, molarity, % w/w) live in `concentration`.
//!
//! # Examples
//! ```
//! use LabAssist::UnitConversion::conversion_table::{Dimension, convert};
//! use LabAssist::UnitConversion::temperature::{TemperatureUnit, convert_temperature};
//!
//! let mg = convert(Dimension::Mass, 1.0, "g", "mg").unwrap();
//! assert!((mg - 1000.0).abs() < 1e-9);
//! let f = convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit)
//!     .unwrap();
//! assert!((f - 212.0).abs() < 1e-9);
//! ```
/// grams ↔ moles, molarity and percent w/w
pub mod concentration;
/// generic factor tables and the linear converter
pub mod conversion_table;
pub mod display_format;
/// affine temperature scales
pub mod temperature;

mod conversion_tests;
