// src/log.rs
//
// Logging goes through `tracing`. The short macros below keep call sites terse:
// logf! (info), logd! (debug), loge! (error).
//
// The CLI logs to stderr. The GUI has no console on every platform, so it
// appends to a file in the working directory instead.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_ENV, LOG_FILE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn default_file() -> Self {
        LogTarget::File(PathBuf::from(LOG_FILE))
    }
}

/// Pick the filter: a forced `level` wins, then the env value `env`,
/// then `fallback`. A blank or unparsable env value counts as unset.
pub fn select_filter(level: Option<&str>, env: Option<&str>, fallback: &str) -> EnvFilter {
    if let Some(l) = level {
        return EnvFilter::new(l);
    }
    env.filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Install the global subscriber. `level` overrides the env filter when set
/// (e.g. from `--verbose`). Calling this more than once is a no-op.
pub fn init(target: LogTarget, level: Option<&str>) {
    let filter = select_filter(level, std::env::var(LOG_ENV).ok().as_deref(), DEFAULT_LOG_FILTER);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // Already initialised (tests, second front end): keep the first one.
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init(),
                // Can't open the log file; fall back to stderr rather than go silent.
                Err(_) => builder.with_writer(std::io::stderr).try_init(),
            }
        }
    };
}

#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

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
    fn forced_level_beats_env() {
        let f = select_filter(Some("debug"), Some("trace"), "info");
        assert_eq!(f.to_string(), "debug");
    }

    #[test]
    fn env_used_when_valid() {
        let f = select_filter(None, Some("wiki_scrape=trace"), "info");
        assert_eq!(f.to_string(), "wiki_scrape=trace");
    }

    #[test]
    fn bad_or_blank_env_falls_back() {
        assert_eq!(select_filter(None, Some("wiki_scrape=loud"), "info").to_string(), "info");
        assert_eq!(select_filter(None, Some("  "), "warn").to_string(), "warn");
        assert_eq!(select_filter(None, None, "info").to_string(), "info");
    }

    #[test]
    fn second_init_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        init(LogTarget::File(path.clone()), Some("debug"));
        init(LogTarget::File(path.clone()), Some("debug"));
        init(LogTarget::Stderr, None);
        logf!("after init");

        assert!(path.exists());
    }
}
