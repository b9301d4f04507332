//! Change and log callback system.
//!
//! The buffer owns no rendering context; display and stat refresh live with
//! the caller. Observers register a change callback here and receive one
//! notification per applied mutation. Deferral or throttling of the visual
//! reflection is the observer's business; the notifications themselves are
//! emitted synchronously, one per mutation, in order.

use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type ChangeCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn change_callback() -> &'static Mutex<Option<ChangeCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<ChangeCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global change callback.
///
/// The callback receives the mutation kind (`"edit"`, `"clear"`, `"load"`,
/// `"save"`, ...) and a short stats payload.
pub fn set_change_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    let mut guard = change_callback().lock().expect("change callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a change notification to the registered callback.
pub fn emit_change(kind: &str, data: &str) {
    if let Ok(guard) = change_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(kind, data);
        }
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback().lock().expect("log callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Other tests in this binary emit events too, so the callbacks filter on
    // a kind/message nothing else uses instead of asserting on every call.

    #[test]
    fn test_change_callback() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let called = Arc::new(AtomicBool::new(false));
        let called_clone = Arc::clone(&called);
        set_change_callback(move |kind, data| {
            if kind == "probe" {
                assert_eq!(data, "chars=1 lines=1");
                called_clone.store(true, Ordering::SeqCst);
            }
        });
        emit_change("probe", "chars=1 lines=1");
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_log_callback() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let called = Arc::new(AtomicBool::new(false));
        let called_clone = Arc::clone(&called);
        set_log_callback(move |level, msg| {
            if msg == "callback probe" {
                assert_eq!(level, LogLevel::Info);
                called_clone.store(true, Ordering::SeqCst);
            }
        });
        emit_log(LogLevel::Info, "callback probe");
        assert!(called.load(Ordering::SeqCst));
    }
}
