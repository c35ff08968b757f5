// engine_core/src/logging/logging.rs
use std::io::*;
use std::sync::Mutex;
use flexi_logger::*;
use log::Record;
use once_cell::sync::Lazy;
use crate::storage::engine_config::{app_dir, engine_config};

// Global mutable buffer that stores the most recent message.
pub static LAST_LOG: Lazy<Mutex<String>> = Lazy::new(|| Mutex::new(String::new()));

/// Helper macro that allow logs to be displayed by
/// the program and printed to the console.
#[macro_export]
macro_rules! onscreen_log {
    ($lvl:expr, $($arg:tt)*) => {{
        println!($($arg)*);
        log::log!($lvl, $($arg)*);
        if let Ok(mut buf) = $crate::logging::logging::LAST_LOG.lock() {
            *buf = format!($($arg)*);
        }
    }};
}

/// Helper macro that allow logs to be displayed by the program.
#[macro_export]
macro_rules! onscreen_info  { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Info,  $($arg)*) }; }

/// Helper macro that allow logs to be displayed by the program.
#[macro_export]
macro_rules! onscreen_warn  { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Warn,  $($arg)*) }; }

/// Helper macro that allow logs to be displayed by the program.
#[macro_export]
macro_rules! onscreen_error { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Error, $($arg)*) }; }

/// The most recent on-screen message.
pub fn last_log() -> String {
    LAST_LOG.lock().map(|buf| buf.clone()).unwrap_or_default()
}

/// Initializes the file logger. `basename` names the log file.
pub fn init_file_logger(basename: &str) -> std::result::Result<LoggerHandle, FlexiLoggerError> {
    let log_dir = app_dir().join("logs");
    let level = engine_config().log_level;

    let file_spec = FileSpec::default()
        .directory(&log_dir)
        .basename(basename)
        .suffix("log");

    let handle = Logger::try_with_str(&level)?
        .log_to_file(file_spec)
        .format(my_formatter)
        .rotate(
            Criterion::Size(5_000_000),
            Naming::Numbers,
            Cleanup::KeepLogFiles(5),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;

    onscreen_info!("Log dir: {}.", &log_dir.display());
    Ok(handle)
}

fn my_formatter(
    write: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record
) -> Result<()> {
    write!(
        write,
        "{} {:5} [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unknown>"),
        &record.args()
    )
}
