//! Lease payment schedules.

pub mod calendar;
pub mod error;
pub mod frequency;
pub mod schedule;
pub mod types;

#[cfg(test)]
mod schedule_props;

pub use error::ScheduleError;
pub use frequency::Frequency;
pub use schedule::{MAX_TOTAL_AMOUNT, ScheduleGenerator, SchedulePolicy};
pub use types::{LeaseContract, PaymentSchedule, PaymentScheduleEntry};
