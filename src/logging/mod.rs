// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// One service log record, stored as a JSON line in the current log file.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub component: String,
    pub message: String,
    pub error_details: Option<String>,
}

/// Query filter for reading logs back. `level` is a minimum severity.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LogFilter {
    pub level: Option<LogLevel>,
    pub component: Option<String>,
    pub search_term: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub struct Logger {
    log_dir: PathBuf,
    current_log_file: PathBuf,
    max_log_size: u64,
    max_log_files: usize,
}

impl Logger {
    pub fn new(log_dir: PathBuf) -> Result<Self> {
        if !log_dir.exists() {
            fs::create_dir_all(&log_dir)?;
        }

        let current_log_file = log_dir.join("passgen.log");

        if !current_log_file.exists() {
            File::create(&current_log_file)?;
        }

        Ok(Self {
            log_dir,
            current_log_file,
            max_log_size: 10 * 1024 * 1024,
            max_log_files: 5,
        })
    }

    /// Logger writing to the service's default `logs/` directory.
    pub fn default_location() -> Result<Self> {
        Self::new(PathBuf::from("logs"))
    }

    pub fn log(&self, level: LogLevel, component: &str, message: &str) -> Result<()> {
        self.log_with_details(level, component, message, None)
    }

    pub fn log_with_details(
        &self,
        level: LogLevel,
        component: &str,
        message: &str,
        error_details: Option<&str>,
    ) -> Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            component: component.to_string(),
            message: message.to_string(),
            error_details: error_details.map(String::from),
        };

        self.check_rotation()?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.current_log_file)?;

        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');
        file.write_all(line.as_bytes())?;

        Ok(())
    }

    /// Read back entries from the current log file, oldest first. Lines that
    /// fail to parse are skipped rather than failing the whole read.
    pub fn get_logs(&self, filter: &LogFilter) -> Result<Vec<LogEntry>> {
        let content = fs::read_to_string(&self.current_log_file)?;

        let entries: Vec<LogEntry> = content
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .filter(|entry| Self::entry_matches_filter(entry, filter))
            .collect();

        let offset = filter.offset.unwrap_or(0);
        let limit = filter.limit.unwrap_or(usize::MAX);

        let start = offset.min(entries.len());
        let end = offset.saturating_add(limit).min(entries.len());

        Ok(entries[start..end].to_vec())
    }

    fn check_rotation(&self) -> Result<()> {
        let metadata = fs::metadata(&self.current_log_file)?;

        if metadata.len() > self.max_log_size {
            self.rotate_logs()?;
        }

        Ok(())
    }

    fn rotate_logs(&self) -> Result<()> {
        let timestamp = Utc::now().format("%Y%m%d%H%M%S");
        let rotated_log_file = self.log_dir.join(format!("passgen-{}.log", timestamp));

        fs::rename(&self.current_log_file, &rotated_log_file)?;
        File::create(&self.current_log_file)?;

        self.cleanup_old_logs()?;

        Ok(())
    }

    // Keep only the newest rotated files, plus the current one.
    fn cleanup_old_logs(&self) -> Result<()> {
        let mut log_files = Vec::new();

        for entry in fs::read_dir(&self.log_dir)? {
            let path = entry?.path();
            if path.is_file()
                && path.extension().map_or(false, |ext| ext == "log")
                && path != self.current_log_file
            {
                log_files.push(path);
            }
        }

        log_files.sort_by(|a, b| {
            let modified = |p: &PathBuf| {
                fs::metadata(p)
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            };
            modified(b).cmp(&modified(a))
        });

        if log_files.len() + 1 > self.max_log_files {
            for file in log_files.iter().skip(self.max_log_files - 1) {
                fs::remove_file(file)?;
            }
        }

        Ok(())
    }

    fn entry_matches_filter(entry: &LogEntry, filter: &LogFilter) -> bool {
        if let Some(min_level) = filter.level {
            if entry.level < min_level {
                return false;
            }
        }

        if let Some(component) = &filter.component {
            if !entry.component.contains(component.as_str()) {
                return false;
            }
        }

        if let Some(term) = &filter.search_term {
            let matches = entry.message.contains(term.as_str())
                || entry.component.contains(term.as_str())
                || entry
                    .error_details
                    .as_ref()
                    .map_or(false, |err| err.contains(term.as_str()));
            if !matches {
                return false;
            }
        }

        true
    }
}
