use LabAssist::cli::cli_main::run_interactive_menu;
use LabAssist::settings::{DEFAULT_CONFIG_FILE, DisplaySettings};
use log::{error, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::Path;

pub fn main() {
    // the logger needs the level from the config, so a load error is reported after init
    let (settings, load_error) = if Path::new(DEFAULT_CONFIG_FILE).exists() {
        match DisplaySettings::load(DEFAULT_CONFIG_FILE) {
            Ok(settings) => (settings, None),
            Err(e) => (DisplaySettings::default(), Some(e)),
        }
    } else {
        (DisplaySettings::default(), None)
    };
    let _ = TermLogger::init(
        settings.level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    if let Some(e) = load_error {
        warn!("{}; using default display settings", e);
    }
    if let Err(e) = run_interactive_menu(&settings) {
        error!("terminal error: {}", e);
        std::process::exit(1);
    }
}
