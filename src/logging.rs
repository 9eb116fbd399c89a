//! Structured logging for the groundwater service.
//!
//! Provides context-rich logging with component tags, an optional route or
//! table identifier, timestamps, and severity levels. Supports both console
//! output and file-based logging for daemon operation.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// Part of the service a log line originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Http,
    Stats,
    Data,
    Config,
    System,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Http => write!(f, "HTTP"),
            Component::Stats => write!(f, "STATS"),
            Component::Data => write!(f, "DATA"),
            Component::Config => write!(f, "CONFIG"),
            Component::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Request outcome classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// 1xx-3xx
    Success,
    /// 4xx: bad body, unknown path, wrong method. Terminal for the request,
    /// nothing to escalate.
    ClientError,
    /// 5xx: should not happen on static data.
    ServerError,
}

impl RequestOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            500..=599 => RequestOutcome::ServerError,
            400..=499 => RequestOutcome::ClientError,
            _ => RequestOutcome::Success,
        }
    }

    /// Only server errors are worth more than a debug line.
    pub fn log_level(&self) -> LogLevel {
        match self {
            RequestOutcome::Success | RequestOutcome::ClientError => LogLevel::Debug,
            RequestOutcome::ServerError => LogLevel::Error,
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    pub fn new(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) -> Self {
        Self {
            min_level,
            log_file,
            console_timestamps,
        }
    }

    /// Formats the line written to the log file (always timestamped).
    fn format_entry(level: LogLevel, component: Component, context: Option<&str>, message: &str) -> String {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let context_part = context.map(|c| format!(" [{}]", c)).unwrap_or_default();
        format!("{} {} {}{}: {}", timestamp, level, component, context_part, message)
    }

    fn log(&self, level: LogLevel, component: Component, context: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let log_entry = Self::format_entry(level, component, context, message);
        let context_part = context.map(|c| format!(" [{}]", c)).unwrap_or_default();

        // Console output
        if self.console_timestamps {
            match level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{}", log_entry),
                LogLevel::Info | LogLevel::Debug => println!("{}", log_entry),
            }
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗ {}{}: {}", component, context_part, message),
                LogLevel::Warning => eprintln!("   ⚠ {}{}: {}", component, context_part, message),
                LogLevel::Info => println!("   {}", message),
                LogLevel::Debug => println!("   [DEBUG] {}{}: {}", component, context_part, message),
            }
        }

        // File output
        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize (or replace) the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    let logger = Logger::new(min_level, log_file.map(String::from), console_timestamps);
    match LOGGER.lock() {
        Ok(mut guard) => *guard = Some(logger),
        Err(poisoned) => *poisoned.into_inner() = Some(logger),
    }
}

fn log(level: LogLevel, component: Component, context: Option<&str>, message: &str) {
    // Logging must never take the service down; a poisoned lock just drops
    // the line.
    if let Ok(guard) = LOGGER.lock() {
        if let Some(logger) = guard.as_ref() {
            logger.log(level, component, context, message);
        }
    }
}

/// Log a general informational message
pub fn info(component: Component, context: Option<&str>, message: &str) {
    log(LogLevel::Info, component, context, message);
}

/// Log a warning message
pub fn warn(component: Component, context: Option<&str>, message: &str) {
    log(LogLevel::Warning, component, context, message);
}

/// Log an error message
pub fn error(component: Component, context: Option<&str>, message: &str) {
    log(LogLevel::Error, component, context, message);
}

/// Log a debug message
pub fn debug(component: Component, context: Option<&str>, message: &str) {
    log(LogLevel::Debug, component, context, message);
}

// ---------------------------------------------------------------------------
// Request and startup logging
// ---------------------------------------------------------------------------

/// Formats one access-log line.
pub fn format_request(method: &str, status: u16, elapsed: Duration) -> String {
    format!("{} -> {} ({:.1} ms)", method, status, elapsed.as_secs_f64() * 1000.0)
}

/// Log a completed request at the level its outcome warrants.
pub fn log_request(method: &str, path: &str, status: u16, elapsed: Duration) {
    let outcome = RequestOutcome::from_status(status);
    log(
        outcome.log_level(),
        Component::Http,
        Some(path),
        &format_request(method, status, elapsed),
    );
}

/// Log what was loaded at startup.
pub fn log_dataset_summary(historical: usize, recent: usize, districts: usize) {
    let message = format!(
        "Loaded {} historical, {} recent and {} district records",
        historical, recent, districts
    );

    if historical == 0 || recent == 0 {
        warn(Component::Data, None, &message);
    } else {
        info(Component::Data, None, &message);
    }
}
