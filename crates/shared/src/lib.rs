//! Shared errors, configuration, and money helpers for Rentroll.
//!
//! This crate provides common pieces used across all other crates:
//! - Minor-unit rounding helpers for monetary amounts
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
