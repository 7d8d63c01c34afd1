use crate::UnitConversion::conversion_table::Dimension;
use crate::UnitConversion::temperature::{TemperatureUnit, convert_temperature};
use prettytable::{Table, row};
use std::io::{self, Write};

/// prints every linear table and the temperature scales
pub fn print_unit_tables<W: Write>(out: &mut W) -> io::Result<()> {
    for dimension in Dimension::ALL {
        writeln!(out, "\n=== {} (base: {}) ===", dimension, dimension.table().base)?;
        dimension.table().to_table().print(out)?;
    }
    writeln!(out, "\n=== temperature ===")?;
    let mut table = Table::new();
    table.add_row(row!["Scale", "Symbol", "0 °C in this scale"]);
    for unit in TemperatureUnit::ALL {
        let zero = convert_temperature(0.0, TemperatureUnit::Celsius, unit)
            .map(|v| v.to_string())
            .unwrap_or_default();
        table.add_row(row![format!("{:?}", unit), unit.symbol(), zero]);
    }
    table.print(out)?;
    Ok(())
}
