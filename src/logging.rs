//! Debug logging utilities
//!
//! Simple stderr logging for tracing an injection run.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::InjectorConfig;

/// Global debug flag (set from config or `--debug`)
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialize debug logging from config
pub fn init_debug(config: &InjectorConfig) {
    set_debug(config.debug);
}

/// Enable or disable debug output
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if debug logging is enabled
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Log debug message
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            eprintln!("[DEBUG] {}", format_args!($($arg)*));
        }
    };
}

/// Log debug message with context
#[macro_export]
macro_rules! debug_context {
    ($context:expr, $($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            eprintln!("[DEBUG] [{}] {}", $context, format_args!($($arg)*));
        }
    };
}

/// Log a warning; always printed
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        eprintln!("[WARN] {}", format_args!($($arg)*));
    };
}
