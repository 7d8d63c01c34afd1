//! Number-to-text helpers shared by the converters and the calculators.
use crate::settings::DisplaySettings;

/// rounds to `decimals` places and strips trailing zeros: 0.5000 -> "0.5", 2.000 -> "2"
pub fn format_trimmed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    // rounding can produce "-0" for tiny negative values
    if text == "-0" { "0".to_string() } else { text }
}

/// rounds to exactly `decimals` places: 16 -> "16.00"
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// scientific notation with `digits` fractional digits of the mantissa: "1.234560e-7"
pub fn format_scientific(value: f64, digits: usize) -> String {
    format!("{:.*e}", digits, value)
}

/// Formats a converted value: zero stays "0", magnitudes below the threshold go
/// scientific, everything else is rounded and trimmed.
pub fn format_converted(value: f64, decimals: usize, settings: &DisplaySettings) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() < settings.sci_threshold {
        format_scientific(value, settings.sci_digits)
    } else {
        format_trimmed(value, decimals)
    }
}

/// joins a formatted number and a unit, omitting the space for unitless values
pub fn with_unit(number: &str, unit: &str) -> String {
    if unit.is_empty() {
        number.to_string()
    } else {
        format!("{} {}", number, unit)
    }
}
