use KiRate::cli::cli_main::run_interactive_menu;
use KiRate::settings::{ConfigManager, LoggerKind, init_logger};
use log::{LevelFilter, error, warn};

fn main() {
    let manager = match ConfigManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Failed to read configuration: {}", e);
            std::process::exit(1);
        }
    };
    let (level, level_warning) = match manager.config().level_filter() {
        Ok(level) => (level, None),
        Err(message) => (LevelFilter::Info, Some(message)),
    };
    match init_logger(level) {
        Ok(LoggerKind::Terminal) => {}
        Ok(LoggerKind::Plain) => warn!("terminal logger unavailable, using plain logger"),
        Err(e) => eprintln!("Failed to initialize logger: {}", e),
    }
    if let Some(message) = level_warning {
        warn!("{}", message);
    }
    if let Err(e) = run_interactive_menu(manager) {
        error!("{}", e);
        std::process::exit(1);
    }
}
