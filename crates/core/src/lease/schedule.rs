//! Payment schedule generation.
//!
//! A schedule is derived once, at contract creation, from the contract terms
//! alone. The first installment is prorated over the part of its frequency
//! block the lease actually covers, the rest are level, and the last one
//! absorbs rounding so the schedule sums to the contract total to the cent.

use chrono::NaiveDate;
use rentroll_shared::config::ScheduleConfig;
use rentroll_shared::types::{has_minor_unit_precision, round_minor};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use super::calendar::{
    add_months, first_of_month, fractional_months, inclusive_days, last_of_block, on_day,
};
use super::error::ScheduleError;
use super::types::{LeaseContract, PaymentSchedule, PaymentScheduleEntry};

/// Largest accepted contract total, 1,000,000,000,000,000.00.
///
/// Keeps every intermediate amount and the sum of the entries well inside
/// `Decimal`'s range at cent precision.
pub const MAX_TOTAL_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Tunable parts of schedule generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulePolicy {
    due_day: u32,
}

impl SchedulePolicy {
    /// Day of month installments after the first fall due on by default.
    pub const DEFAULT_DUE_DAY: u32 = 5;

    /// Creates a policy with installments due on `due_day`.
    ///
    /// `due_day` must exist in every month, so it is limited to `1..=28`.
    pub fn new(due_day: u32) -> Result<Self, ScheduleError> {
        if !(1..=28).contains(&due_day) {
            return Err(ScheduleError::InvalidDueDay(due_day));
        }
        Ok(Self { due_day })
    }

    /// Day of month installments after the first fall due on.
    #[must_use]
    pub const fn due_day(&self) -> u32 {
        self.due_day
    }
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            due_day: Self::DEFAULT_DUE_DAY,
        }
    }
}

impl TryFrom<&ScheduleConfig> for SchedulePolicy {
    type Error = ScheduleError;

    fn try_from(config: &ScheduleConfig) -> Result<Self, Self::Error> {
        Self::new(config.due_day)
    }
}

/// Builds payment schedules from lease contracts.
///
/// Pure and deterministic: no clock, no I/O, no shared state.
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use rentroll_core::lease::{Frequency, LeaseContract, ScheduleGenerator};
///
/// let contract = LeaseContract::new(
///     dec!(10000),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 10, 31).unwrap(),
///     Frequency::Quarterly,
/// );
/// let schedule = ScheduleGenerator::default().generate(&contract).unwrap();
/// assert_eq!(schedule.len(), 4);
/// assert_eq!(schedule.total(), dec!(10000));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleGenerator {
    policy: SchedulePolicy,
}

impl ScheduleGenerator {
    /// Creates a generator with the given policy.
    #[must_use]
    pub const fn new(policy: SchedulePolicy) -> Self {
        Self { policy }
    }

    /// The policy in use.
    #[must_use]
    pub const fn policy(&self) -> SchedulePolicy {
        self.policy
    }

    /// Generates the payment schedule for a contract.
    ///
    /// The amount is validated before the duration, and both before any
    /// entry is built.
    pub fn generate(&self, contract: &LeaseContract) -> Result<PaymentSchedule, ScheduleError> {
        validate_amount(contract.total_amount)?;
        let months = lease_months(contract)?;

        match contract.frequency.months() {
            None => Ok(one_time(contract)),
            Some(period) => self.periodic(contract, months, period),
        }
    }

    fn periodic(
        &self,
        contract: &LeaseContract,
        months: Decimal,
        period: u32,
    ) -> Result<PaymentSchedule, ScheduleError> {
        let total = contract.total_amount;
        let period_months = Decimal::from(period);

        // Positive here, and chrono's calendar spans ~6.3 million months, far
        // below u32::MAX. A count that does not fit would need dates outside it.
        let total_periods = (months / period_months)
            .ceil()
            .to_u32()
            .ok_or(ScheduleError::DateOutOfRange)?;
        // One block leaves nothing to spread the balance over
        if total_periods < 2 {
            return Err(ScheduleError::SinglePeriod(contract.frequency));
        }

        let monthly_rate = total / months;

        let block_start = first_of_month(contract.start_date);
        let block_end = last_of_block(contract.start_date, period)?;
        let days_used = Decimal::from(inclusive_days(contract.start_date, block_end));
        let block_days = Decimal::from(inclusive_days(block_start, block_end));
        let first_payment = round_minor(days_used / block_days * (monthly_rate * period_months));

        let remaining_periods = total_periods - 1;
        let regular_payment =
            round_minor((total - first_payment) / Decimal::from(remaining_periods));
        let final_payment = round_minor(
            total - first_payment - regular_payment * Decimal::from(remaining_periods - 1),
        );

        let mut entries = Vec::with_capacity(usize::try_from(total_periods).unwrap_or_default());
        entries.push(entry(1, contract.start_date, first_payment));
        for i in 1..total_periods {
            let due_date = self.due_date(block_start, i * period)?;
            let amount = if i == remaining_periods {
                final_payment
            } else {
                regular_payment
            };
            entries.push(entry(i + 1, due_date, amount));
        }

        debug!(
            frequency = %contract.frequency,
            months = %months,
            total_periods,
            first_payment = %first_payment,
            regular_payment = %regular_payment,
            final_payment = %final_payment,
            "Generated periodic payment schedule"
        );

        Ok(PaymentSchedule::new(
            entries,
            round_minor(total / Decimal::from(total_periods)),
        ))
    }

    fn due_date(&self, block_start: NaiveDate, offset: u32) -> Result<NaiveDate, ScheduleError> {
        on_day(add_months(block_start, offset)?, self.policy.due_day)
    }
}

fn validate_amount(total: Decimal) -> Result<(), ScheduleError> {
    if total <= Decimal::ZERO {
        return Err(ScheduleError::NonPositiveAmount);
    }
    if total > MAX_TOTAL_AMOUNT {
        return Err(ScheduleError::AmountTooLarge(MAX_TOTAL_AMOUNT));
    }
    if !has_minor_unit_precision(total) {
        return Err(ScheduleError::ExcessPrecision);
    }
    Ok(())
}

fn lease_months(contract: &LeaseContract) -> Result<Decimal, ScheduleError> {
    let months = fractional_months(contract.start_date, contract.end_date);
    if months <= Decimal::ZERO || contract.end_date < contract.start_date {
        return Err(ScheduleError::NonPositiveDuration);
    }
    Ok(months)
}

fn one_time(contract: &LeaseContract) -> PaymentSchedule {
    let total = round_minor(contract.total_amount);
    debug!(total = %total, "Generated one-time payment schedule");
    PaymentSchedule::new(vec![entry(1, contract.start_date, total)], total)
}

fn entry(payment_number: u32, due_date: NaiveDate, amount: Decimal) -> PaymentScheduleEntry {
    PaymentScheduleEntry {
        payment_number,
        due_date,
        window_start: due_date,
        window_end: due_date,
        amount,
    }
}
