use {
    anyhow::Result,
    std::{
        fs::{File, OpenOptions, create_dir_all},
        io::Write,
        path::{Path, PathBuf},
        sync::{
            Arc,
            Mutex,
            atomic::{AtomicU8, Ordering},
        },
        time::{SystemTime, UNIX_EPOCH},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warn,
            3 => Level::Error,
            _ => Level::Fatal,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
            Level::Fatal => write!(f, "FATAL"),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

pub trait Logger: Send + Sync {
    fn log(&self, level: Level, file: &str, line: usize, message: &str);
}

pub static LOGGER: Mutex<Option<Box<dyn Logger>>> = Mutex::new(None);

static MAX_LEVEL: AtomicU8 = AtomicU8::new(if cfg!(debug_assertions) { 0 } else { 1 });

/// Messages below `level` are dropped before reaching the installed logger.
pub fn set_max_level(level: Level) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn max_level() -> Level {
    Level::from_u8(MAX_LEVEL.load(Ordering::Relaxed))
}

pub fn enabled(level: Level) -> bool {
    level >= max_level()
}

/// Entry point for the `log_*!` macros.
pub fn emit(level: Level, file: &str, line: usize, message: &str) {
    if !enabled(level) {
        return;
    }
    if let Some(logger) = LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
        logger.log(level, file, line, message);
    }
}

/// Whole days since the epoch and seconds into the current UTC day.
fn utc_now() -> (i64, u64) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    ((secs / 86_400) as i64, secs % 86_400)
}

pub fn format_timestamp() -> String {
    let (days, seconds) = utc_now();
    let (year, month, day) = civil_from_days(days);
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}",
        seconds / 3600,
        seconds / 60 % 60,
        seconds % 60
    )
}

pub fn format_today() -> String {
    let (year, month, day) = civil_from_days(utc_now().0);
    format!("{year:04}-{month:02}-{day:02}")
}

/// Proleptic Gregorian date of a day number counted from 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let shifted = days + 719_468;
    let era = shifted.div_euclid(146_097);
    let day_of_era = shifted.rem_euclid(146_097) as u32;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    // months counted from March
    let march_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * march_month + 2) / 5 + 1;
    let month = if march_month < 10 {
        march_month + 3
    } else {
        march_month - 9
    };
    let year = year_of_era as i64 + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

fn format_line(level: Level, file: &str, line: usize, message: &str) -> String {
    format!(
        "[{:?}:{}:{} - {}:{}] {}",
        std::thread::current().id(),
        level,
        format_timestamp(),
        file,
        line,
        message
    )
}

pub struct StdoutLogger;

impl Logger for StdoutLogger {
    fn log(&self, level: Level, file: &str, line: usize, message: &str) {
        println!("{}", format_line(level, file, line, message));
    }
}

pub fn init_stdout_logger() {
    LOGGER
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .replace(Box::new(StdoutLogger));
}

struct DatedFile {
    dir: PathBuf,
    date: String,
    file: File,
}

fn open_dated(dir: &Path, date: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{date}.log")))
}

impl DatedFile {
    /// Moves to today's file if the date changed. On failure the old file
    /// stays in use.
    fn roll_over(&mut self) {
        let today = format_today();
        if today == self.date {
            return;
        }
        match open_dated(&self.dir, &today) {
            Ok(file) => {
                self.file = file;
                self.date = today;
            }
            Err(err) => eprintln!("cannot open log file for {today} in {:?}: {err}", self.dir),
        }
    }
}

/// Appends to `<dir>/<YYYY-MM-DD>.log`, switching files when the UTC date changes.
pub struct FileLogger {
    current: Mutex<DatedFile>,
}

impl FileLogger {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        create_dir_all(&dir)?;
        let date = format_today();
        let file = open_dated(&dir, &date)?;
        Ok(Self {
            current: Mutex::new(DatedFile { dir, date, file }),
        })
    }
}

impl Logger for FileLogger {
    fn log(&self, level: Level, file: &str, line: usize, message: &str) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        current.roll_over();
        let entry = format_line(level, file, line, message);
        if let Err(err) = writeln!(current.file, "{entry}") {
            eprintln!("log write failed ({err}): {entry}");
        }
    }
}

pub fn init_file_logger(dir: impl Into<PathBuf>) -> Result<()> {
    let logger = FileLogger::new(dir)?;
    LOGGER
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .replace(Box::new(logger));
    Ok(())
}

/// Keeps every record in memory. Clones share the same record list, so a
/// clone can be installed globally while the original is inspected.
#[derive(Clone, Default)]
pub struct MemoryLogger {
    records: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|(_, message)| message.contains(needle))
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: Level, _file: &str, _line: usize, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((level, message.to_string()));
    }
}

/// Installs a clone of `logger` as the global logger and returns the original.
pub fn init_memory_logger(logger: MemoryLogger) -> MemoryLogger {
    LOGGER
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .replace(Box::new(logger.clone()));
    logger
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ if base::log::enabled(base::log::Level::Debug) { base::log::emit(base::log::Level::Debug, file!(), line!() as usize, &format!($($arg)*)); } }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{ if base::log::enabled(base::log::Level::Info) { base::log::emit(base::log::Level::Info, file!(), line!() as usize, &format!($($arg)*)); } }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ if base::log::enabled(base::log::Level::Warn) { base::log::emit(base::log::Level::Warn, file!(), line!() as usize, &format!($($arg)*)); } }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{ if base::log::enabled(base::log::Level::Error) { base::log::emit(base::log::Level::Error, file!(), line!() as usize, &format!($($arg)*)); } }};
}

#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{ let message = format!($($arg)*); base::log::emit(base::log::Level::Fatal, file!(), line!() as usize, &message); println!("FATAL ERROR: {}", message); std::process::exit(1); }};
}
