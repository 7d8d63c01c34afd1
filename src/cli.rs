/// main menu and the shared console
pub mod cli_main;
/// editing one calculator form
pub mod cli_session;
/// printing the unit tables
pub mod cli_units;
