//! # LabAssist
//!
//! Unit converters and bench calculators for the chemistry and biology lab.
//!
//! * `UnitConversion` - linear unit tables, temperature scales, grams/moles conversions
//! * `Calculators` - formulas behind the `FormulaSolver` trait, the calculator registry
//!   and the request boundary (`evaluate`)
//! * `session` - per-calculator form state that recomputes on every edit
//! * `cli` - interactive terminal menu of the `labassist` binary
//! * `settings` - optional JSON display settings
#[allow(non_snake_case)]
pub mod Calculators;
#[allow(non_snake_case)]
pub mod UnitConversion;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod errors;
pub mod session;
pub mod settings;
