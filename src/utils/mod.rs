//! Shared utilities
//!
//! Macros are exported first so every other module can log.

#[macro_use]
pub mod log;
