//! Logger utility for application-wide logging
//!
//! A small file logger that also plugs into the standard `log` crate
//! facade, so library code can use the usual macros while the CLI keeps
//! a persistent log file next to its diagnostic stdout output.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Writes one line to the log file
    pub fn log(&self, message: &str) -> io::Result<()> {
        if let Some(file) = &mut *self.file.lock().unwrap() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Installs a logger instance as the `log` crate's global logger
    pub fn init_global_logger(log_file: &str) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?;

        // Only set once at startup; a second call just warns
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);
            // Mirror to stderr so the raster-ordered stdout dump stays clean
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn facade_records_reach_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slidekit.log");
        let logger = Logger::new(path.to_str().unwrap()).unwrap();

        Log::log(
            &logger,
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("wrote 4 tiles"))
                .build(),
        );

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[INFO] wrote 4 tiles"));
    }
}
