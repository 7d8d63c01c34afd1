/// parsing of text fields into numbers and quantities
pub mod parse_input;
