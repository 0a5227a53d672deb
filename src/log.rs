//! Diagnostics callback.
//!
//! The library never prints. Non-fatal conditions it cannot surface as a
//! `Result` (a failed repaint inside event translation, an ignored resize
//! hiccup) go through a process-wide callback the embedding application
//! registers once.

use std::sync::{Mutex, OnceLock};

/// Severity of a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn registry() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Register the global diagnostics callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = registry().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Emit a diagnostic to the registered callback, if any.
pub(crate) fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = registry().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}
