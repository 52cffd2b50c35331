//! Console logging
//!
//! - wasm32: `web_sys::console` (shows up in browser devtools)
//! - native: stderr, so tests and tools still see engine messages
//!
//! Usage:
//! ```rust
//! use clack_engine::console_log;
//!
//! let collisions = 31;
//! console_log!("collisions: {}", collisions);
//! ```

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(msg: &str) {
    eprintln!("[clack] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("[clack] WARN {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(msg: &str) {
    eprintln!("[clack] ERROR {}", msg);
}

/// Info-level message
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::utils::log::log(&format!($($arg)*))
    };
}

/// Warning (clamped input, ignored command)
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::utils::log::warn(&format!($($arg)*))
    };
}

/// Fault-level message
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::utils::log::error(&format!($($arg)*))
    };
}
