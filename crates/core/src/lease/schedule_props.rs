//! Property-based tests for payment schedule generation.
//!
//! - Sum invariant: installments add up to the contract total to the cent
//! - Count invariant: `ceil(M / F)` entries for periodic leases, one for one-time
//! - Sequencing invariant: numbers run `1..=N` and due dates ascend with them

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rentroll_shared::types::has_minor_unit_precision;

use super::calendar::fractional_months;
use super::error::ScheduleError;
use super::frequency::Frequency;
use super::schedule::ScheduleGenerator;
use super::types::LeaseContract;

/// Contract totals from 100.00 to 1,000,000.00.
fn total_amount() -> impl Strategy<Value = Decimal> {
    (10_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn start_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2040, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .or_else(|| NaiveDate::from_ymd_opt(y, m, 28))
            .unwrap()
    })
}

/// Lease lengths from one day to ten years.
fn lease_days() -> impl Strategy<Value = u64> {
    0u64..3650
}

fn periodic_frequency() -> impl Strategy<Value = Frequency> {
    prop::sample::select(Frequency::ALL[..6].to_vec())
}

fn contract(
    total: Decimal,
    start: NaiveDate,
    days: u64,
    frequency: Frequency,
) -> LeaseContract {
    LeaseContract::new(total, start, start + Days::new(days), frequency)
}

fn expected_periods(contract: &LeaseContract) -> usize {
    let months = fractional_months(contract.start_date, contract.end_date);
    let period = Decimal::from(contract.frequency.months().unwrap());
    (months / period).ceil().to_usize().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Periodic schedules sum to the contract total exactly.
    #[test]
    fn prop_periodic_sum_equals_total(
        total in total_amount(),
        start in start_date(),
        days in lease_days(),
        frequency in periodic_frequency(),
    ) {
        let contract = contract(total, start, days, frequency);
        match ScheduleGenerator::default().generate(&contract) {
            Ok(schedule) => prop_assert_eq!(schedule.total(), total),
            Err(err) => prop_assert_eq!(err, ScheduleError::SinglePeriod(frequency)),
        }
    }

    /// Periodic schedules have `ceil(M / F)` entries, or are rejected when that is one.
    #[test]
    fn prop_periodic_entry_count(
        total in total_amount(),
        start in start_date(),
        days in lease_days(),
        frequency in periodic_frequency(),
    ) {
        let contract = contract(total, start, days, frequency);
        let expected = expected_periods(&contract);
        let result = ScheduleGenerator::default().generate(&contract);
        if expected < 2 {
            prop_assert_eq!(result, Err(ScheduleError::SinglePeriod(frequency)));
        } else {
            prop_assert_eq!(result.unwrap().len(), expected);
        }
    }

    /// Payment numbers run 1..=N, dates ascend, and the first payment is due at the start.
    #[test]
    fn prop_entries_sequenced(
        total in total_amount(),
        start in start_date(),
        days in 62u64..3650,
        frequency in periodic_frequency(),
    ) {
        let contract = contract(total, start, days, frequency);
        let Ok(schedule) = ScheduleGenerator::default().generate(&contract) else {
            return Ok(());
        };

        prop_assert_eq!(schedule.first().unwrap().due_date, start);
        for (i, entry) in schedule.entries().iter().enumerate() {
            prop_assert_eq!(entry.payment_number as usize, i + 1);
            prop_assert!(has_minor_unit_precision(entry.amount));
        }
        for pair in schedule.entries().windows(2) {
            prop_assert!(pair[0].due_date < pair[1].due_date);
        }
    }

    /// One-time leases produce a single entry for the whole amount.
    #[test]
    fn prop_one_time_single_entry(
        total in total_amount(),
        start in start_date(),
        days in lease_days(),
    ) {
        let contract = contract(total, start, days, Frequency::OneTime);
        let schedule = ScheduleGenerator::default().generate(&contract).unwrap();

        prop_assert_eq!(schedule.len(), 1);
        prop_assert_eq!(schedule.first().unwrap().due_date, start);
        prop_assert_eq!(schedule.total(), total);
        prop_assert_eq!(schedule.display_amount, total);
    }

    /// Non-positive totals are rejected whatever the dates.
    #[test]
    fn prop_non_positive_amount_rejected(
        cents in -100_000_000i64..=0,
        start in start_date(),
        days in lease_days(),
        frequency in prop::sample::select(Frequency::ALL.to_vec()),
    ) {
        let contract = contract(Decimal::new(cents, 2), start, days, frequency);
        prop_assert_eq!(
            ScheduleGenerator::default().generate(&contract),
            Err(ScheduleError::NonPositiveAmount)
        );
    }
}
