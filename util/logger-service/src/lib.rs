//! Epoch explorer logger and logging service.
//!
//! Records are formatted and written on the calling thread. The command line runs are short, so
//! there is no writer thread to join before exit; [`flush`] only flushes the log file.

use backtrace::Backtrace;
use chrono::prelude::{DateTime, Local};
use env_logger::filter::{Builder, Filter};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use regex::Regex;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{env, fs, panic, thread};
use yansi::Paint;

use explorer_logger_config::Config;


/// The environment variable which overrides the configured filter.
pub const LOG_ENV: &str = "EXPLORER_LOG";

static RE: OnceCell<Regex> = OnceCell::new();

/// Errors when the logger starts.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("cannot write to log file {}: {source}", .path.display())]
    OpenFile { path: PathBuf, source: io::Error },
    #[error(transparent)]
    SetLogger(#[from] SetLoggerError),
}

/// The epoch explorer logger which implements [log::Log].
///
/// [log::Log]: https://docs.rs/log/*/log/trait.Log.html
#[derive(Debug)]
pub struct Logger {
    filter: Filter,
    output: Mutex<Output>,
}

#[derive(Debug)]
struct Output {
    file: Option<fs::File>,
    to_stderr: bool,
    color: bool,
}

// Parse crate name leniently in logger filter: convert "-" to "_".
fn convert_compatible_crate_name(filter: &str) -> String {
    let mut parts = filter.splitn(2, '/');
    let mut mods = Vec::new();
    if let Some(mods_part) = parts.next() {
        for m in mods_part.split(',') {
            mods.push(m.to_owned());
            if m.contains('-') {
                mods.push(m.replace('-', "_"));
            }
        }
    }
    match parts.next() {
        Some(regex) => [&mods.join(","), regex].join("/"),
        None => mods.join(","),
    }
}

fn sanitize_color(s: &str) -> String {
    let re = RE.get_or_init(|| Regex::new("\x1b\\[[^m]+m").expect("Regex compile success"));
    re.replace_all(s, "").to_string()
}

fn open_log_file(path: &Path) -> Result<fs::File, InitError> {
    fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| InitError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(target_os = "windows")]
fn enable_ansi_support() {
    if !Paint::enable_windows_ascii() {
        Paint::disable();
    }
}

#[cfg(not(target_os = "windows"))]
fn enable_ansi_support() {}

fn paint_level(level: Level) -> Paint<&'static str> {
    match level {
        Level::Error => Paint::red(level.as_str()).bold(),
        Level::Warn => Paint::yellow(level.as_str()).bold(),
        Level::Info => Paint::green(level.as_str()),
        Level::Debug | Level::Trace => Paint::white(level.as_str()),
    }
}

impl Logger {
    /// Creates a logger from the configuration, the file is opened when `log_to_file` is set.
    ///
    /// [`LOG_ENV`] is not consulted here, see [`init`].
    pub fn new(config: &Config) -> Result<Logger, InitError> {
        let file = if config.log_to_file {
            Some(open_log_file(&config.file)?)
        } else {
            None
        };
        Ok(Logger {
            filter: Self::build_filter(config.filter.as_deref().unwrap_or_default()),
            output: Mutex::new(Output {
                file,
                to_stderr: config.log_to_stderr,
                color: config.color,
            }),
        })
    }

    fn build_filter(filter_str: &str) -> Filter {
        Builder::new()
            .parse(&convert_compatible_crate_name(filter_str))
            .build()
    }

    /// The most verbose level which passes the filter.
    pub fn filter(&self) -> LevelFilter {
        self.filter.filter()
    }

    fn format(record: &Record) -> String {
        let thread = thread::current();
        let thread_name = thread.name().unwrap_or("*unnamed*");
        let dt: DateTime<Local> = Local::now();
        let timestamp = dt.format("%Y-%m-%d %H:%M:%S%.3f %Z").to_string();
        format!(
            "{} {} {} {}  {}",
            Paint::black(timestamp).bold(),
            Paint::blue(thread_name).bold(),
            paint_level(record.level()),
            record.target(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.filter.matches(record) {
            return;
        }
        let with_color = Self::format(record);
        let output = self.output.lock();
        let plain = if !output.color || output.file.is_some() {
            sanitize_color(&with_color)
        } else {
            String::new()
        };
        if output.to_stderr {
            let line = if output.color { &with_color } else { &plain };
            let _ = writeln!(io::stderr().lock(), "{line}");
        }
        if let Some(mut file) = output.file.as_ref() {
            let _ = writeln!(file, "{plain}");
        }
    }

    fn flush(&self) {
        let output = self.output.lock();
        if let Some(mut file) = output.file.as_ref() {
            let _ = file.flush();
        }
        let _ = io::stderr().flush();
    }
}

/// Flushes the logger when dropped.
#[must_use]
pub struct LoggerInitGuard;

impl Drop for LoggerInitGuard {
    fn drop(&mut self) {
        flush();
    }
}

/// Initializes the [Logger](struct.Logger.html) as the global logger.
///
/// The filter is taken from the environment variable [`LOG_ENV`] when it is set, otherwise from
/// `config.filter`. Only one logger can be installed per process.
pub fn init(mut config: Config) -> Result<LoggerInitGuard, InitError> {
    if let Ok(env_filter) = env::var(LOG_ENV) {
        config.filter = Some(env_filter);
    }
    if !config.color || !config.log_to_stderr {
        Paint::disable();
    }
    if config.color {
        enable_ansi_support();
    }

    let logger = Logger::new(&config)?;
    let filter = logger.filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(filter);
    setup_panic_logger();
    Ok(LoggerInitGuard)
}

/// Flushes any buffered records.
pub fn flush() {
    log::logger().flush()
}

// Replace the default panic hook with logger hook, which prints panic info into the log.
// This function will replace all hooks that was previously registered.
fn setup_panic_logger() {
    let panic_logger = |info: &panic::PanicHookInfo| {
        let backtrace = Backtrace::new();
        let thread = thread::current();
        let name = thread.name().unwrap_or("unnamed");
        let location = info
            .location()
            .map(|location| format!("{}:{}", location.file(), location.line()))
            .unwrap_or_default();
        let msg = match info.payload().downcast_ref::<&'static str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => s.as_str(),
                None => "Box<Any>",
            },
        };
        log::error!(
            target: "panic", "thread '{}' panicked at '{}': {}{:?}",
            name,
            msg,
            location,
            backtrace,
        );
        flush();
    };
    panic::set_hook(Box::new(panic_logger));
}
