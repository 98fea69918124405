//! Common types used across the application.

pub mod money;

pub use money::{MINOR_UNIT_DP, has_minor_unit_precision, round_minor};
