#[cfg(test)]
mod tests {
    use crate::Calculators::formula_api::FormulaSolver;
    use crate::UnitConversion::concentration::{ConcentrationConversion, common_molar_mass};
    use crate::UnitConversion::conversion_table::{
        Dimension, LinearConversion, MASS_TABLE, PRESSURE_TABLE, VOLUME_TABLE, convert,
    };
    use crate::UnitConversion::temperature::{
        TemperatureConversion, TemperatureUnit, convert_temperature,
    };
    use crate::errors::CalcError;
    use crate::settings::DisplaySettings;
    use approx::assert_relative_eq;

    #[test]
    fn test_tables_are_valid() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.table().validate(), Ok(()), "{}", dimension);
            assert_eq!(dimension.table().dimension, dimension);
        }
    }

    #[test]
    fn test_round_trip_all_pairs() {
        let samples = [1.0, 0.001, 123.456, 7.5e5];
        for dimension in Dimension::ALL {
            let table = dimension.table();
            for a in table.units {
                for b in table.units {
                    for x in samples {
                        let there = table.convert(x, a.name, b.name).unwrap();
                        let back = table.convert(there, b.name, a.name).unwrap();
                        assert_relative_eq!(back, x, max_relative = 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_converts_to_zero() {
        for dimension in Dimension::ALL {
            let table = dimension.table();
            for a in table.units {
                for b in table.units {
                    assert_eq!(table.convert(0.0, a.name, b.name), Ok(0.0));
                }
            }
        }
    }

    #[test]
    fn test_known_factors() {
        assert_relative_eq!(convert(Dimension::Mass, 1.0, "lb", "g").unwrap(), 453.59237);
        assert_relative_eq!(
            convert(Dimension::Mass, 1.0, "kg", "lb").unwrap(),
            2.20462262,
            epsilon = 1e-8
        );
        assert_relative_eq!(
            convert(Dimension::Volume, 1.0, "gal", "mL").unwrap(),
            3785.41,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            convert(Dimension::Pressure, 1.0, "atm", "kPa").unwrap(),
            101.325,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            convert(Dimension::Pressure, 760.0, "mmHg", "atm").unwrap(),
            1.0,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            convert(Dimension::FlowRate, 60.0, "L/min", "L/s").unwrap(),
            1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            convert(Dimension::MassConcentration, 1.0, "% w/v", "mg/mL").unwrap(),
            10.0
        );
        // ASCII spellings resolve to the same units
        assert_eq!(
            VOLUME_TABLE.convert(5.0, "uL", "mL"),
            VOLUME_TABLE.convert(5.0, "μL", "mL")
        );
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            MASS_TABLE.convert(1.0, "stone", "g"),
            Err(CalcError::UnknownUnit {
                unit: "stone".to_string(),
                dimension: "mass".to_string(),
            })
        );
        // zero still needs valid units
        assert!(PRESSURE_TABLE.convert(0.0, "atm", "parsec").is_err());
        assert!("Length".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_display_policy() {
        let settings = DisplaySettings::default();
        assert_eq!(
            MASS_TABLE.convert_display(1.0, "ng", "kg", &settings).unwrap(),
            "1.000000e-12"
        );
        assert_eq!(
            MASS_TABLE.convert_display(1.0, "mg", "g", &settings).unwrap(),
            "0.001"
        );
        assert_eq!(
            MASS_TABLE.convert_display(0.0, "mg", "g", &settings).unwrap(),
            "0"
        );
        let output = LinearConversion::new(Dimension::Volume, 250.0, "mL", "L")
            .solve()
            .unwrap();
        assert_eq!(output.text("value"), Some("0.25"));
        assert_eq!(output.get("value").unwrap().unit, "L");
    }

    #[test]
    fn test_temperature_reference_points() {
        use TemperatureUnit::*;
        assert_relative_eq!(convert_temperature(0.0, Celsius, Fahrenheit).unwrap(), 32.0);
        assert_relative_eq!(
            convert_temperature(32.0, Fahrenheit, Kelvin).unwrap(),
            273.15,
            epsilon = 1e-12
        );
        assert_relative_eq!(convert_temperature(0.0, Celsius, Kelvin).unwrap(), 273.15);
        assert_relative_eq!(convert_temperature(-40.0, Celsius, Fahrenheit).unwrap(), -40.0);
        assert_relative_eq!(
            convert_temperature(373.15, Kelvin, Fahrenheit).unwrap(),
            212.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_temperature_round_trips() {
        use TemperatureUnit::*;
        for x in [-273.15, -40.0, 0.0, 36.6, 100.0, 1234.5] {
            for via in TemperatureUnit::ALL {
                let there = convert_temperature(x, Celsius, via).unwrap();
                let back = convert_temperature(there, via, Celsius).unwrap();
                assert_relative_eq!(back, x, epsilon = 1e-9);
            }
        }
        assert!(convert_temperature(f64::MAX, Celsius, Fahrenheit).is_err());
    }

    #[test]
    fn test_temperature_display() {
        let output =
            TemperatureConversion::new(0.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin)
                .solve()
                .unwrap();
        assert_eq!(output.text("value"), Some("273.15"));
        // no scientific notation for temperatures close to zero
        let output = TemperatureConversion::new(
            273.1500001,
            TemperatureUnit::Kelvin,
            TemperatureUnit::Celsius,
        )
        .solve()
        .unwrap();
        assert_eq!(output.text("value"), Some("0"));
    }

    #[test]
    fn test_temperature_unit_names_ignore_case() {
        assert_eq!("°F".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!("°c".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!(" CELSIUS ".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!("KELVIN".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Kelvin));
        assert_eq!("Fahrenheit".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!(
            " Rankine ".parse::<TemperatureUnit>(),
            Err(CalcError::UnknownUnit {
                unit: "Rankine".to_string(),
                dimension: "temperature".to_string(),
            })
        );
    }

    #[test]
    fn test_conversion_through_base_unit() {
        assert_relative_eq!(VOLUME_TABLE.to_base(250.0, "mL").unwrap(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(VOLUME_TABLE.from_base(0.25, "μL").unwrap(), 250_000.0, epsilon = 1e-6);
        assert_relative_eq!(PRESSURE_TABLE.to_base(1.0, "atm").unwrap(), 101_325.0);
        assert_relative_eq!(
            PRESSURE_TABLE.from_base(PRESSURE_TABLE.to_base(1.0, "atm").unwrap(), "kPa").unwrap(),
            PRESSURE_TABLE.convert(1.0, "atm", "kPa").unwrap()
        );
        assert!(matches!(
            MASS_TABLE.to_base(1.0, "stone"),
            Err(CalcError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn test_concentration_conversions() {
        let output = ConcentrationConversion::GramsToMoles {
            grams: 58.44,
            molecular_weight: 58.44,
        }
        .solve()
        .unwrap();
        assert_relative_eq!(output.value("moles").unwrap(), 1.0);

        let output = ConcentrationConversion::MolesToGrams {
            moles: 0.5,
            molecular_weight: 180.16,
        }
        .solve()
        .unwrap();
        assert_relative_eq!(output.value("grams").unwrap(), 90.08, epsilon = 1e-9);

        let output = ConcentrationConversion::PercentWw {
            solute_mass: 5.0,
            solution_mass: 100.0,
        }
        .solve()
        .unwrap();
        assert_relative_eq!(output.value("percent").unwrap(), 5.0);

        assert!(
            ConcentrationConversion::PercentWw {
                solute_mass: 150.0,
                solution_mass: 100.0,
            }
            .solve()
            .is_err()
        );
        assert!(
            ConcentrationConversion::Molarity {
                moles: 1.0,
                volume: 0.0,
            }
            .solve()
            .is_err()
        );
        assert_eq!(common_molar_mass("glucose"), Some(180.16));
        assert_eq!(common_molar_mass("nacl"), Some(58.44));
        assert_eq!(common_molar_mass("caffeine"), None);
    }
}
