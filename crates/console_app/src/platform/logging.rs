//! Platform logging initialization for the console login app.
//!
//! Writes logs to `./console_login.log` in the current working directory.

use std::fs::File;
use std::path::PathBuf;

use console_engine::Deployment;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./console_login.log";

/// Destination for log output.
pub enum LogDestination {
    /// Write to ./console_login.log in current directory.
    File,
    /// Write to both file and terminal.
    Both,
}

impl From<Deployment> for LogDestination {
    fn from(deployment: Deployment) -> Self {
        match deployment {
            Deployment::Production => LogDestination::File,
            Deployment::Development => LogDestination::Both,
        }
    }
}

/// Initialize the logger with the specified destination.
pub fn initialize(destination: LogDestination) {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => match create_file_logger(level, config) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        // GUI backends are chatty at debug level.
        .add_filter_ignore_str("eframe")
        .add_filter_ignore_str("egui_glow")
        .add_filter_ignore_str("winit")
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from(LOG_FILENAME);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
