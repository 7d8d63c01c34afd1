/// Calculators of the laboratory assistant.
/// Every calculator is a struct implementing the `FormulaSolver` trait; all of them are
/// collected into the `Formula` enum and reached through `registry::CalculatorKind`,
/// which knows their modes and input fields.
/// ```
/// use LabAssist::Calculators::request::{CalculationRequest, evaluate};
///
/// let request = CalculationRequest::new("dilution")
///     .mode("find-v2")
///     .field("c1", "1")
///     .field("v1", "10")
///     .field("c2", "0.1");
/// let output = evaluate(&request).unwrap();
/// assert_eq!(output.text("V2"), Some("100"));
/// ```
pub mod formula_api;
/// parsing of requests into formulas
pub mod registry;
pub mod request;
/// C1V1 = C2V2
pub mod dilution;
pub mod ph;
/// ideal and combined gas laws
pub mod gas_laws;
pub mod molarity;
/// RPM <-> RCF
pub mod centrifuge;
/// seeding dilution and doubling time
pub mod cell_culture;
/// Bradford assay and peptide molecular weight
pub mod protein;
/// DNA template volume and molarity
pub mod pcr;

mod calculators_tests;
