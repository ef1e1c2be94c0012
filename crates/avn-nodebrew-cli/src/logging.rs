use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use avn_platform::AppPaths;

/// Console level for the given `-v` count. Warnings and errors always show.
pub fn console_level(verbosity: u8, debug_logging: bool) -> LevelFilter {
    match verbosity {
        0 if debug_logging => LevelFilter::Debug,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn trim_log_file_if_oversized(log_path: &Path, max_log_size: u64) {
    if let Ok(metadata) = std::fs::metadata(log_path)
        && metadata.len() > max_log_size
        && let Ok(contents) = std::fs::read(log_path)
    {
        let half = contents.len() / 2;
        let keep_from = contents[half..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(half, |pos| half + pos + 1);
        let _ = std::fs::write(log_path, &contents[keep_from..]);
    }
}

fn prepare_log_file(paths: &AppPaths, max_log_size: u64) -> PathBuf {
    if let Err(e) = paths.ensure_dirs() {
        eprintln!("avn-nodebrew: cannot create application directories: {e}");
    }
    let log_path = paths.log_file();
    trim_log_file_if_oversized(&log_path, max_log_size);
    log_path
}

/// Install the global logger.
///
/// The console logger writes to stderr because stdout carries the activation
/// command. With `debug_logging` and known `paths`, a debug-level file logger
/// appends to the application log file as well.
pub fn init_logging(
    verbosity: u8,
    debug_logging: bool,
    paths: Option<&AppPaths>,
    max_log_size: u64,
) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("avn")
        .build();

    let console = console_level(verbosity, debug_logging);
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        console,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let log_file = paths
        .filter(|_| debug_logging)
        .map(|paths| prepare_log_file(paths, max_log_size));

    if let Some(log_path) = &log_file {
        match OpenOptions::new().create(true).append(true).open(log_path) {
            Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Debug, config, file)),
            Err(e) => eprintln!("avn-nodebrew: cannot open log file {}: {e}", log_path.display()),
        }
    }

    let _ = CombinedLogger::init(loggers);

    if let Some(log_path) = &log_file {
        log::info!("Debug logging initialized, log file: {}", log_path.display());
    }
}
