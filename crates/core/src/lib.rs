//! Core lease logic for Rentroll.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! Contract terms go in, payment schedules come out.
//!
//! # Modules
//!
//! - `lease` - Lease contracts and payment schedule generation

pub mod lease;
