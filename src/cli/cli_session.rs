use super::cli_main::Console;
use crate::Calculators::cell_culture::TimeUnit;
use crate::Calculators::pcr::DNA_CONCENTRATION_UNITS;
use crate::Calculators::registry::CalculatorKind;
use crate::UnitConversion::concentration::COMMON_COMPOUNDS;
use crate::UnitConversion::conversion_table::{PRESSURE_TABLE, VOLUME_TABLE};
use crate::UnitConversion::temperature::TemperatureUnit;
use crate::session::CalculatorSession;
use crate::settings::DisplaySettings;
use std::io::{self, BufRead, Write};

/// accepted values of a selector field, shown next to its name
fn field_hint(kind: CalculatorKind, field: &str) -> Option<String> {
    let temperature_units = || {
        TemperatureUnit::ALL
            .iter()
            .map(|u| u.symbol())
            .collect::<Vec<_>>()
            .join(", ")
    };
    match field {
        "from" | "to" => match kind.dimension() {
            Some(dimension) => Some(dimension.table().unit_names().join(", ")),
            None => Some(temperature_units()),
        },
        "pressure_unit" => Some(PRESSURE_TABLE.unit_names().join(", ")),
        "volume_unit" => Some(VOLUME_TABLE.unit_names().join(", ")),
        "temperature_unit" => Some(temperature_units()),
        "time_unit" => Some(
            TimeUnit::ALL
                .iter()
                .map(|u| u.name())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        "concentration_unit" => Some(DNA_CONCENTRATION_UNITS.join(", ")),
        "molar_mass" | "molecular_weight" => {
            let names: Vec<&str> = COMMON_COMPOUNDS.iter().map(|c| c.formula).collect();
            Some(format!("g/mol or one of {}", names.join(", ")))
        }
        _ => None,
    }
}

fn print_form<W: Write>(out: &mut W, session: &CalculatorSession) -> io::Result<()> {
    let kind = session.kind();
    if kind.modes().len() > 1 {
        writeln!(
            out,
            "mode: {} (available: {})",
            session.mode(),
            kind.modes().join(", ")
        )?;
    }
    for field in session.input_fields() {
        let value = session.field(field).unwrap_or("");
        match field_hint(kind, field) {
            Some(hint) => writeln!(out, "  {} = {}   [{}]", field, value, hint)?,
            None => writeln!(out, "  {} = {}", field, value)?,
        }
    }
    Ok(())
}

fn print_result<W: Write>(out: &mut W, session: &CalculatorSession) -> io::Result<()> {
    match session.result() {
        Some(Ok(output)) => {
            output.to_table().print(out)?;
        }
        Some(Err(err)) => writeln!(out, "\x1b[31mError: {}\x1b[0m", err)?,
        None => {}
    }
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "  <field>=<value>  set a field and recompute")?;
    writeln!(out, "  mode <name>      solve for another variable")?;
    writeln!(out, "  show             print the form and the result")?;
    writeln!(out, "  clear            empty all fields")?;
    writeln!(out, "  0                back")
}

/// Edits one calculator until the user goes back or input ends.
pub fn session_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    kind: CalculatorKind,
    settings: &DisplaySettings,
) -> io::Result<()> {
    let mut session = CalculatorSession::new(kind, settings.clone());
    writeln!(console.out, "\n=== {} ===", kind.title())?;
    print_help(&mut console.out)?;
    print_form(&mut console.out, &session)?;
    loop {
        let Some(line) = console.ask("> ")? else {
            break;
        };
        match line.as_str() {
            "" => continue,
            "0" | "back" => break,
            "help" | "?" => print_help(&mut console.out)?,
            "show" => {
                print_form(&mut console.out, &session)?;
                print_result(&mut console.out, &session)?;
            }
            "clear" => {
                session.clear();
                print_form(&mut console.out, &session)?;
            }
            command => {
                if let Some(mode) = command.strip_prefix("mode ") {
                    match session.set_mode(mode.trim()) {
                        Ok(_) => {
                            print_form(&mut console.out, &session)?;
                            print_result(&mut console.out, &session)?;
                        }
                        Err(err) => writeln!(console.out, "\x1b[31mError: {}\x1b[0m", err)?,
                    }
                } else if let Some((name, text)) = command.split_once('=') {
                    let name = name.trim();
                    if session.is_enabled(name) {
                        session.set_field(name, text.trim());
                        print_result(&mut console.out, &session)?;
                    } else {
                        writeln!(
                            console.out,
                            "{} is not an input in mode {}",
                            name,
                            session.mode()
                        )?;
                    }
                } else {
                    writeln!(console.out, "Unknown command, type help")?;
                }
            }
        }
    }
    Ok(())
}
