//! Domain - configuration and error types shared by every system

pub mod config;
pub mod error;
