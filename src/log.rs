// src/log.rs
use std::sync::OnceLock;

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_DIR, LOG_FILE};

static INIT: OnceLock<()> = OnceLock::new();

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    /// `.store/debug.log`, appended (GUI: there is no console on Windows).
    File,
    /// stderr, so stdout stays clean for piping (CLI).
    Stderr,
}

fn filter_from(level: &str) -> EnvFilter {
    match level.parse::<EnvFilter>() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: log filter '{level}' is invalid ({e}); using 'info'");
            EnvFilter::new("info")
        }
    }
}

/// Append-only log file under `dir`; `None` (with a warning) when it can't be opened.
fn file_writer(dir: &Path, file: &str) -> Option<RollingFileAppender> {
    match RollingFileAppender::builder().rotation(Rotation::NEVER).filename_prefix(file).build(dir) {
        Ok(appender) => Some(appender),
        Err(e) => {
            eprintln!("Warning: cannot open {}/{file} ({e}); logging to stderr", dir.display());
            None
        }
    }
}

/// Install the global tracing subscriber. Safe to call more than once;
/// only the first call has an effect.
pub fn init(level: &str, sink: Sink) {
    INIT.get_or_init(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter_from(level))
            .with_target(false);

        let res = match sink {
            Sink::File => match file_writer(Path::new(LOG_DIR), LOG_FILE) {
                Some(appender) => builder.with_ansi(false).with_writer(appender).try_init(),
                None => builder.with_writer(std::io::stderr).try_init(),
            },
            Sink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        };
        if let Err(e) = res {
            eprintln!("Warning: logging not initialized: {e}");
        }
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_log_dir_falls_back_instead_of_panicking() {
        let tmp = tempfile::tempdir().unwrap();
        let blocked = tmp.path().join(LOG_DIR);
        std::fs::write(&blocked, b"not a directory").unwrap();

        assert!(file_writer(&blocked, LOG_FILE).is_none());
    }

    #[test]
    fn log_file_is_created_in_a_fresh_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(LOG_DIR);

        assert!(file_writer(&dir, LOG_FILE).is_some());
        assert!(dir.join(LOG_FILE).exists());
    }
}
