#[cfg(test)]
mod tests {
    use crate::Calculators::cell_culture::{CellDilution, DoublingTime, TimeUnit, rescale_time};
    use crate::Calculators::centrifuge::{Centrifuge, rcf_from_rpm, rpm_from_rcf};
    use crate::Calculators::dilution::{Dilution, final_concentration, final_volume};
    use crate::Calculators::formula_api::{Formula, FormulaSolver};
    use crate::Calculators::gas_laws::{
        CombinedGasLaw, CombinedUnknown, IdealGasLaw, IdealGasUnknown,
    };
    use crate::Calculators::molarity::{molarity, required_mass};
    use crate::Calculators::pcr::{DnaQuantification, scale_molarity};
    use crate::Calculators::ph::{PhCalculation, PhInput, solve_ph};
    use crate::Calculators::protein::{BradfordAssay, ProteinMolecularWeight, molecular_weight};
    use crate::Calculators::registry::{CalculatorKind, Category};
    use crate::Calculators::request::{CalculationRequest, display_result, evaluate};
    use crate::UnitConversion::temperature::TemperatureUnit;
    use crate::errors::CalcError;
    use approx::assert_relative_eq;

    fn validation_message(result: Result<f64, CalcError>) -> String {
        match result {
            Err(CalcError::Validation(msg)) => msg,
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_dilution_find_v2() {
        let v2 = final_volume(1.0, 10.0, 0.1).unwrap();
        assert_relative_eq!(v2, 100.0, epsilon = 1e-9);
        let output = Dilution::find_v2(1.0, 10.0, 0.1).solve().unwrap();
        assert_eq!(output.text("V2"), Some("100"));
        assert_eq!(output.mode, "find-v2");
    }

    #[test]
    fn test_dilution_find_c2() {
        let c2 = final_concentration(2.0, 5.0, 20.0).unwrap();
        assert_relative_eq!(c2, 0.5, epsilon = 1e-12);
        let output = Dilution::find_c2(2.0, 5.0, 20.0).solve().unwrap();
        assert_eq!(output.text("C2"), Some("0.5"));
    }

    #[test]
    fn test_dilution_rejects_concentration() {
        let msg = validation_message(final_volume(1.0, 10.0, 1.0));
        assert_eq!(
            msg,
            "Final concentration must be less than initial concentration for dilution"
        );
        assert!(final_volume(1.0, 10.0, 2.0).is_err());
        assert!(final_volume(1.0, 10.0, 0.0).is_err());
        assert!(final_volume(0.0, 10.0, 0.1).is_err());
        let msg = validation_message(final_concentration(1.0, 10.0, 5.0));
        assert_eq!(
            msg,
            "Final volume must be greater than initial volume for dilution"
        );
        assert!(Dilution::find_v2(1.0, 10.0, 1.5).solve().is_err());
    }

    #[test]
    fn test_ph_from_hydrogen() {
        let state = solve_ph(PhInput::Hydrogen(1e-4)).unwrap();
        assert_relative_eq!(state.ph, 4.0, epsilon = 1e-12);
        assert_relative_eq!(state.poh, 10.0, epsilon = 1e-12);
        assert_relative_eq!(state.hydroxide, 1e-10, max_relative = 1e-9);
        let output = PhCalculation::new(PhInput::Hydrogen(1e-4)).solve().unwrap();
        assert_eq!(output.text("pH"), Some("4.0000"));
        assert_eq!(output.text("pOH"), Some("10.0000"));
        assert_eq!(output.text("[H+]"), Some("1.0000e-4 M"));
        assert_eq!(output.text("[OH-]"), Some("1.0000e-10 M"));
    }

    #[test]
    fn test_ph_from_p_values() {
        let state = solve_ph(PhInput::Ph(7.0)).unwrap();
        assert_relative_eq!(state.hydrogen, 1e-7, max_relative = 1e-9);
        assert_relative_eq!(state.hydroxide, 1e-7, max_relative = 1e-9);
        let state = solve_ph(PhInput::Poh(3.0)).unwrap();
        assert_relative_eq!(state.ph, 11.0);
        assert_relative_eq!(state.hydroxide, 1e-3, max_relative = 1e-9);
        let state = solve_ph(PhInput::Hydroxide(1e-2)).unwrap();
        assert_relative_eq!(state.poh, 2.0, epsilon = 1e-12);
        assert_relative_eq!(state.ph, 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ph_degenerate_and_invalid() {
        let state = solve_ph(PhInput::Hydrogen(0.0)).unwrap();
        assert!(state.ph.is_infinite());
        assert_eq!(state.poh, 0.0);
        assert_relative_eq!(state.hydroxide, 1.0);
        let output = PhCalculation::new(PhInput::Hydrogen(0.0)).solve().unwrap();
        assert_eq!(output.text("pH"), Some("∞"));
        assert_eq!(output.text("pOH"), Some("0.0000"));

        let state = solve_ph(PhInput::Hydroxide(0.0)).unwrap();
        assert!(state.poh.is_infinite());
        assert_eq!(state.ph, 14.0);

        assert!(solve_ph(PhInput::Hydrogen(-1.0)).is_err());
        assert!(solve_ph(PhInput::Ph(14.5)).is_err());
        assert!(solve_ph(PhInput::Poh(-0.1)).is_err());
        assert!(solve_ph(PhInput::Ph(14.0)).is_ok());
    }

    #[test]
    fn test_ideal_gas_standard_molar_volume() {
        let mut law = IdealGasLaw::new(IdealGasUnknown::Pressure);
        law.moles = 1.0;
        law.temperature = 273.15;
        law.volume = 22.414;
        let output = law.solve().unwrap();
        let p = output.value("P").unwrap();
        assert_relative_eq!(p, 1.0, epsilon = 1e-4);
        assert_eq!(output.get("P").unwrap().unit, "atm");
    }

    #[test]
    fn test_ideal_gas_unit_normalization() {
        let mut law = IdealGasLaw::new(IdealGasUnknown::Moles);
        law.pressure = 101.325;
        law.pressure_unit = "kPa".to_string();
        law.volume = 22414.0;
        law.volume_unit = "mL".to_string();
        law.temperature = 0.0;
        law.temperature_unit = TemperatureUnit::Celsius;
        let n = law.solve().unwrap().value("n").unwrap();
        assert_relative_eq!(n, 1.0, epsilon = 1e-4);

        let mut law = IdealGasLaw::new(IdealGasUnknown::Temperature);
        law.pressure = 1.0;
        law.volume = 22.414;
        law.moles = 1.0;
        let output = law.solve().unwrap();
        assert_relative_eq!(output.value("T").unwrap(), 273.14, epsilon = 0.05);
        assert!(output.text("T").unwrap().contains("°C"));
    }

    #[test]
    fn test_ideal_gas_rejects_non_positive() {
        let mut law = IdealGasLaw::new(IdealGasUnknown::Volume);
        law.temperature = -300.0;
        law.temperature_unit = TemperatureUnit::Celsius;
        assert_eq!(
            law.solve(),
            Err(CalcError::validation("All values must be positive"))
        );
        let mut law = IdealGasLaw::new(IdealGasUnknown::Volume);
        law.pressure_unit = "furlong".to_string();
        assert!(matches!(law.solve(), Err(CalcError::UnknownUnit { .. })));
        // the unknown's own value is never checked
        let mut law = IdealGasLaw::new(IdealGasUnknown::Volume);
        law.volume = -5.0;
        let output = law.solve().unwrap();
        assert_relative_eq!(output.value("V").unwrap(), 22.414689, epsilon = 1e-9);
        assert_eq!(output.text("V"), Some("22.414689 L"));
    }

    #[test]
    fn test_ideal_gas_inline_units() {
        let request = CalculationRequest::new("ideal-gas")
            .mode("moles")
            .field("pressure", "101.325 kPa")
            .field("volume", "22414 mL")
            .field("temperature", "0 °C");
        let n = evaluate(&request).unwrap().value("n").unwrap();
        assert_relative_eq!(n, 1.0, epsilon = 1e-4);

        // a unit typed with the number wins over the selector
        let request = CalculationRequest::new("ideal-gas")
            .mode("volume")
            .field("pressure", "1 atm")
            .field("pressure_unit", "psi")
            .field("moles", "1")
            .field("temperature", "273.15");
        let v = evaluate(&request).unwrap().value("V").unwrap();
        assert_relative_eq!(v, 22.414689, epsilon = 1e-9);

        let request = CalculationRequest::new("ideal-gas")
            .mode("volume")
            .field("pressure", "1 furlong")
            .field("moles", "1")
            .field("temperature", "273.15");
        assert!(matches!(evaluate(&request), Err(CalcError::UnknownUnit { .. })));
    }

    #[test]
    fn test_combined_gas_law() {
        let mut law = CombinedGasLaw::new(CombinedUnknown::P2);
        law.t2 = 273.15;
        let p2 = law.solve().unwrap().value("P2").unwrap();
        assert_relative_eq!(p2, 2.0, epsilon = 1e-12);

        let mut law = CombinedGasLaw::new(CombinedUnknown::T2);
        law.p2 = 2.0;
        law.v2 = 0.5;
        let output = law.solve().unwrap();
        assert_relative_eq!(output.value("T2").unwrap(), 273.15, epsilon = 1e-9);
        assert_eq!(output.text("T2"), Some("273.150000 K (0.00 °C)"));

        let mut law = CombinedGasLaw::new(CombinedUnknown::V1);
        law.p1 = 2.0;
        law.p2 = 1.0;
        law.v2 = 4.0;
        law.t2 = law.t1;
        assert_relative_eq!(law.solve().unwrap().value("V1").unwrap(), 2.0, epsilon = 1e-12);

        let law = CombinedGasLaw::new(CombinedUnknown::P1);
        let p1 = law.solve().unwrap().value("P1").unwrap();
        assert_relative_eq!(p1, 273.15 / 293.15, epsilon = 1e-12);

        let mut law = CombinedGasLaw::new(CombinedUnknown::V2);
        law.t2 = 273.15;
        let v2 = law.solve().unwrap().value("V2").unwrap();
        assert_relative_eq!(v2, 0.5, epsilon = 1e-12);

        let output = CombinedGasLaw::new(CombinedUnknown::T1).solve().unwrap();
        assert_relative_eq!(output.value("T1").unwrap(), 293.15, epsilon = 1e-9);
        assert_eq!(output.text("T1"), Some("293.150000 K (20.00 °C)"));
    }

    #[test]
    fn test_combined_gas_law_validation() {
        let mut law = CombinedGasLaw::new(CombinedUnknown::V2);
        law.p1 = -1.0;
        assert_eq!(
            law.solve(),
            Err(CalcError::validation("Initial values must be positive"))
        );
        let mut law = CombinedGasLaw::new(CombinedUnknown::V2);
        law.t2 = 0.0;
        assert_eq!(
            law.solve(),
            Err(CalcError::validation("Final values must be positive"))
        );
        let mut law = CombinedGasLaw::new(CombinedUnknown::P1);
        law.p1 = 0.0;
        assert!(law.solve().is_ok());
    }

    #[test]
    fn test_molarity() {
        assert_relative_eq!(molarity(5.844, 58.44, 1.0).unwrap(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(required_mass(0.5, 40.0, 0.25).unwrap(), 5.0, epsilon = 1e-12);
        assert!(molarity(1.0, 0.0, 1.0).is_err());
        assert!(molarity(1.0, 58.44, 0.0).is_err());
        assert!(molarity(-1.0, 58.44, 1.0).is_err());
        assert!(required_mass(-0.1, 58.44, 1.0).is_err());
    }

    #[test]
    fn test_centrifuge() {
        let rcf = rcf_from_rpm(10.0, 1000.0).unwrap();
        assert_relative_eq!(rcf, 111.8, epsilon = 1e-9);
        let rpm = rpm_from_rcf(10.0, rcf).unwrap();
        assert_relative_eq!(rpm, 1000.0, epsilon = 1e-6);

        let output = Centrifuge::rcf(10.0, 1000.0).solve().unwrap();
        assert_eq!(output.text("RCF"), Some("111.80 × g"));
        let output = Centrifuge::rpm(10.0, 111.8).solve().unwrap();
        assert_eq!(output.text("RPM"), Some("1000 rpm"));

        assert!(rcf_from_rpm(0.0, 1000.0).is_err());
        assert!(rpm_from_rcf(10.0, -1.0).is_err());
    }

    #[test]
    fn test_cell_dilution() {
        let output = CellDilution::new(1e6, 2e5, 10.0).solve().unwrap();
        assert_eq!(output.text("cell_volume"), Some("2.00 mL"));
        assert_eq!(output.text("medium_volume"), Some("8.00 mL"));

        assert_eq!(
            CellDilution::new(1e5, 2e5, 10.0).solve(),
            Err(CalcError::validation(
                "Target density cannot be higher than current density for dilution"
            ))
        );
        assert!(CellDilution::new(1e6, 2e5, 0.0).solve().is_err());
        // equal densities take the whole volume from the suspension
        let (cells, medium) = CellDilution::new(1e6, 1e6, 5.0).volumes().unwrap();
        assert_relative_eq!(cells, 5.0);
        assert_relative_eq!(medium, 0.0);
    }

    #[test]
    fn test_doubling_time() {
        let culture = DoublingTime::new(100000.0, 800000.0, 48.0, TimeUnit::Hours);
        assert_relative_eq!(culture.doublings().unwrap(), 3.0, epsilon = 1e-12);
        let output = culture.solve().unwrap();
        assert_eq!(output.text("doublings"), Some("3.00"));
        assert_eq!(output.text("doubling_time"), Some("16.00 hours"));

        assert_eq!(
            DoublingTime::new(8e5, 1e5, 48.0, TimeUnit::Hours).solve(),
            Err(CalcError::validation(
                "Final count must be greater than initial count"
            ))
        );
        assert!(DoublingTime::new(1e5, 8e5, 0.0, TimeUnit::Hours).solve().is_err());
    }

    #[test]
    fn test_doubling_time_rescaling() {
        assert_eq!(rescale_time(0.5, TimeUnit::Hours), (30.0, TimeUnit::Minutes));
        assert_eq!(rescale_time(96.0, TimeUnit::Hours), (4.0, TimeUnit::Days));
        assert_eq!(rescale_time(180.0, TimeUnit::Minutes), (3.0, TimeUnit::Hours));
        assert_eq!(rescale_time(0.25, TimeUnit::Days), (6.0, TimeUnit::Hours));
        assert_eq!(rescale_time(30.0, TimeUnit::Hours), (30.0, TimeUnit::Hours));

        let output = DoublingTime::new(1e5, 2e5, 100.0, TimeUnit::Hours)
            .solve()
            .unwrap();
        assert_eq!(output.text("doubling_time"), Some("4.17 days"));
        assert_eq!("h".parse::<TimeUnit>(), Ok(TimeUnit::Hours));
        assert!("weeks".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn test_bradford() {
        let assay = BradfordAssay::new(0.5, 0.05, 0.0, 2.0);
        assert_relative_eq!(assay.concentration().unwrap(), 20.0, epsilon = 1e-9);
        assert_eq!(assay.solve().unwrap().text("concentration"), Some("20.00 μg/mL"));

        assert_eq!(
            BradfordAssay::new(0.5, 0.0, 0.0, 1.0).concentration(),
            Err(CalcError::validation("Standard curve slope cannot be zero"))
        );
        assert!(BradfordAssay::new(0.1, 0.05, 0.2, 1.0).concentration().is_err());
        assert!(BradfordAssay::new(0.5, 0.05, 0.0, 0.0).concentration().is_err());
    }

    #[test]
    fn test_protein_molecular_weight() {
        let result = molecular_weight("GG");
        assert_relative_eq!(result.weight, 96.08, epsilon = 1e-9);
        assert_eq!(result.residues, 2);
        assert!(result.unknown.is_empty());

        let output = ProteinMolecularWeight::new("g g").solve().unwrap();
        assert_eq!(output.text("molecular_weight"), Some("96.08 Da (0.10 kDa)"));
        assert!(output.warnings.is_empty());

        let single = molecular_weight("W");
        assert_relative_eq!(single.weight, 186.21, epsilon = 1e-9);
    }

    #[test]
    fn test_protein_unknown_letters() {
        let result = molecular_weight("GXG ZX");
        assert_eq!(result.unknown, vec!['X', 'Z']);
        assert_relative_eq!(result.weight, 96.08, epsilon = 1e-9);

        let output = ProteinMolecularWeight::new("GXGZ").solve().unwrap();
        assert_eq!(output.warnings.len(), 1);
        assert!(output.warnings[0].contains("X, Z"));
        assert_relative_eq!(output.value("molecular_weight").unwrap(), 96.08, epsilon = 1e-9);

        let empty = ProteinMolecularWeight::new("  ").solve().unwrap();
        assert!(empty.quantities.is_empty());
        assert!(empty.warnings.is_empty());
    }

    #[test]
    fn test_protein_non_ascii_letters() {
        // 'ß' uppercases to "SS" in Unicode; it must not count as two serines
        let result = molecular_weight("ß");
        assert_eq!(result.residues, 0);
        assert_eq!(result.unknown, vec!['ß']);
        assert_eq!(result.weight, 0.0);

        let result = molecular_weight("gßgx");
        assert_eq!(result.residues, 2);
        assert_eq!(result.unknown, vec!['ß', 'X']);
        assert_relative_eq!(result.weight, 96.08, epsilon = 1e-9);

        let output = ProteinMolecularWeight::new("ß").solve().unwrap();
        assert!(output.quantities.is_empty());
        assert_eq!(output.warnings.len(), 1);
        assert!(output.warnings[0].contains('ß'));
    }

    #[test]
    fn test_pcr_quantification() {
        let dna = DnaQuantification::new(50.0, "ng/μL", 1000.0, 100.0);
        assert_relative_eq!(dna.volume_needed().unwrap(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(dna.molarity().unwrap(), 0.05 / 650000.0, max_relative = 1e-9);
        let output = dna.solve().unwrap();
        assert_eq!(output.text("volume"), Some("2.00 μL"));
        assert_eq!(output.text("molarity"), Some("76.92 nM"));

        let same = DnaQuantification::new(0.05, "μg/μL", 1000.0, 100.0);
        assert_relative_eq!(same.volume_needed().unwrap(), 2.0, epsilon = 1e-9);
        let same = DnaQuantification::new(50.0, "ug/mL", 1000.0, 100.0);
        assert_relative_eq!(same.volume_needed().unwrap(), 2.0, epsilon = 1e-9);

        assert!(DnaQuantification::new(0.0, "ng/μL", 1000.0, 100.0).solve().is_err());
        assert!(DnaQuantification::new(50.0, "mol", 1000.0, 100.0).solve().is_err());
    }

    #[test]
    fn test_scale_molarity() {
        assert_eq!(scale_molarity(5e-10).1, "pM");
        assert_eq!(scale_molarity(5e-8).1, "nM");
        assert_eq!(scale_molarity(5e-5).1, "μM");
        assert_eq!(scale_molarity(5e-2).1, "mM");
        assert_relative_eq!(scale_molarity(5e-8).0, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_formula_dispatch() {
        let formulas: Vec<Formula> = vec![
            Dilution::find_v2(1.0, 10.0, 0.1).into(),
            Centrifuge::rcf(10.0, 1000.0).into(),
            ProteinMolecularWeight::new("GG").into(),
        ];
        let names: Vec<&str> = formulas.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["Dilution (C1V1 = C2V2)", "Centrifuge RPM/RCF", "Protein molecular weight"]
        );
        assert!(formulas.iter().all(|f| f.solve().is_ok()));
    }

    #[test]
    fn test_registry_modes_and_fields() {
        for kind in CalculatorKind::ALL {
            assert_eq!(kind.name().parse::<CalculatorKind>(), Ok(kind));
            assert!(!kind.modes().is_empty());
            for mode in kind.modes() {
                let fields = kind.input_fields(mode).unwrap();
                assert!(!fields.is_empty(), "{} {}", kind, mode);
            }
        }
        let fields = CalculatorKind::IdealGas.input_fields("pressure").unwrap();
        assert!(!fields.contains(&"pressure"));
        assert!(!fields.contains(&"pressure_unit"));
        assert!(fields.contains(&"temperature_unit"));
        let fields = CalculatorKind::CombinedGas.input_fields("t1").unwrap();
        assert_eq!(fields, vec!["p1", "v1", "p2", "v2", "t2"]);
        assert!(CalculatorKind::Dilution.input_fields("find-x").is_err());
        assert_eq!(CalculatorKind::Pcr.category(), Category::Biology);
        assert_eq!("flow_rate".parse::<CalculatorKind>(), Ok(CalculatorKind::FlowRate));
    }

    #[test]
    fn test_evaluate_requests() {
        let request = CalculationRequest::new("dilution")
            .mode("find-v2")
            .field("c1", "1")
            .field("v1", "10")
            .field("c2", "0.1");
        let output = evaluate(&request).unwrap();
        assert_relative_eq!(output.value("V2").unwrap(), 100.0, epsilon = 1e-9);

        let request = CalculationRequest::new("ideal-gas")
            .mode("pressure")
            .field("volume", "22.414")
            .field("moles", "1")
            .field("temperature", "0")
            .field("temperature_unit", "°C");
        let p = evaluate(&request).unwrap().value("P").unwrap();
        assert_relative_eq!(p, 1.0, epsilon = 1e-4);

        let request = CalculationRequest::new("molarity")
            .mode("molarity")
            .field("mass", "5.844")
            .field("molar_mass", "NaCl")
            .field("volume", "1000")
            .field("volume_unit", "mL");
        assert_eq!(evaluate(&request).unwrap().text("molarity"), Some("0.1 M"));

        let request = CalculationRequest::new("molarity")
            .mode("molarity")
            .field("mass", "5.844")
            .field("molar_mass", "58.44")
            .field("volume", "1000 mL");
        assert_eq!(evaluate(&request).unwrap().text("molarity"), Some("0.1 M"));

        let request = CalculationRequest::new("doubling-time")
            .field("initial_count", "100000")
            .field("final_count", "800000")
            .field("elapsed", "48");
        assert_eq!(
            evaluate(&request).unwrap().text("doubling_time"),
            Some("16.00 hours")
        );

        let request = CalculationRequest::new("mass")
            .field("value", "1")
            .field("from", "kg")
            .field("to", "g");
        assert_eq!(evaluate(&request).unwrap().text("value"), Some("1000"));

        let request = CalculationRequest::new("pressure")
            .field("value", "1")
            .field("from", "atm")
            .field("to", "kPa");
        assert_eq!(evaluate(&request).unwrap().text("value"), Some("101.325"));

        let request = CalculationRequest::new("flow-rate")
            .field("value", "60")
            .field("from", "L/min")
            .field("to", "L/s");
        assert_eq!(evaluate(&request).unwrap().text("value"), Some("1"));

        let request = CalculationRequest::new("mass-concentration")
            .field("value", "1")
            .field("from", "mg/mL")
            .field("to", "μg/mL");
        assert_eq!(evaluate(&request).unwrap().text("value"), Some("1000"));

        let request = CalculationRequest::new("temperature")
            .field("value", "0")
            .field("from", "C")
            .field("to", "F");
        assert_eq!(evaluate(&request).unwrap().text("value"), Some("32"));
    }

    #[test]
    fn test_evaluate_errors() {
        let request = CalculationRequest::new("spectrometer");
        assert_eq!(
            evaluate(&request),
            Err(CalcError::UnknownCalculator("spectrometer".to_string()))
        );

        let request = CalculationRequest::new("dilution").mode("find-v3");
        assert!(matches!(evaluate(&request), Err(CalcError::UnknownMode { .. })));

        let request = CalculationRequest::new("dilution")
            .field("c1", "abc")
            .field("v1", "10")
            .field("c2", "0.1");
        assert!(matches!(
            evaluate(&request),
            Err(CalcError::InvalidNumber { .. })
        ));

        let request = CalculationRequest::new("dilution").field("c1", "1");
        assert_eq!(
            evaluate(&request),
            Err(CalcError::MissingField("v1".to_string()))
        );

        let request = CalculationRequest::new("dilution")
            .field("c1", "1")
            .field("v1", "10")
            .field("c2", "1");
        assert_eq!(
            display_result(&evaluate(&request)),
            "Error: Final concentration must be less than initial concentration for dilution"
        );
    }

    #[test]
    fn test_request_json() {
        let json = r#"{"calculator": "centrifuge", "mode": "rpm-to-rcf",
                       "fields": {"radius": "10", "rpm": "1000"}}"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let output = evaluate(&request).unwrap();
        assert_eq!(output.text("RCF"), Some("111.80 × g"));

        let request: CalculationRequest =
            serde_json::from_str(r#"{"calculator": "protein-mw"}"#).unwrap();
        assert!(request.fields.is_empty());
        assert!(evaluate(&request).unwrap().quantities.is_empty());
    }
}
