//! Plain-text rendering of schedules.

use std::fmt;

use chrono::NaiveDate;
use rentroll_core::lease::{Frequency, PaymentSchedule};
use rust_decimal::Decimal;

/// Aligned table of every installment, followed by the totals.
pub struct ScheduleTable<'a>(pub &'a PaymentSchedule);

impl fmt::Display for ScheduleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.0;
        let total = schedule.total();
        let width = schedule
            .entries()
            .iter()
            .map(|e| e.amount.to_string().len())
            .chain([total.to_string().len(), "amount".len()])
            .max()
            .unwrap_or_default();

        writeln!(f, "{:>4}  {:<10}  {:>width$}", "#", "due date", "amount")?;
        for entry in schedule {
            writeln!(
                f,
                "{:>4}  {}  {:>width$}",
                entry.payment_number, entry.due_date, entry.amount
            )?;
        }
        writeln!(f, "{:>4}  {:<10}  {:>width$}", "", "total", total)?;
        writeln!(f, "average per period: {}", schedule.display_amount)
    }
}

/// What is due, paid, and overdue at `as_of`, plus the next installment.
pub struct StatusReport<'a> {
    pub schedule: &'a PaymentSchedule,
    pub as_of: NaiveDate,
    pub paid: Decimal,
}

impl fmt::Display for StatusReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            schedule,
            as_of,
            paid,
        } = *self;

        writeln!(f, "as of:        {as_of}")?;
        writeln!(f, "due to date:  {}", schedule.due_through(as_of))?;
        writeln!(f, "paid:         {paid}")?;
        writeln!(f, "arrears:      {}", schedule.arrears(as_of, paid))?;
        match schedule.next_due(as_of) {
            Some(next) => writeln!(
                f,
                "next payment: #{} on {} for {}",
                next.payment_number, next.due_date, next.amount
            ),
            None => writeln!(f, "next payment: none"),
        }
    }
}

/// One line per frequency: canonical token, then accepted aliases.
pub struct FrequencyList<'a>(pub &'a [Frequency]);

impl fmt::Display for FrequencyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for freq in self.0 {
            let months = freq
                .months()
                .map_or_else(|| "whole lease".to_string(), |m| format!("{m} month(s)"));
            write!(f, "{:<12} {:<12}", freq.as_str(), months)?;
            if !freq.aliases().is_empty() {
                write!(f, " also: {}", freq.aliases().join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentroll_core::lease::{LeaseContract, ScheduleGenerator};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn quarterly() -> PaymentSchedule {
        let contract = LeaseContract::new(
            dec!(10000),
            date(2024, 1, 1),
            date(2024, 10, 31),
            Frequency::Quarterly,
        );
        ScheduleGenerator::default().generate(&contract).unwrap()
    }

    #[test]
    fn test_schedule_table_layout() {
        let table = ScheduleTable(&quarterly()).to_string();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "   #  due date      amount");
        assert_eq!(lines[1], "   1  2024-01-01   2994.49");
        assert_eq!(lines[4], "   4  2024-10-05   2335.17");
        assert_eq!(lines[5], "      total       10000.00");
        assert_eq!(lines[6], "average per period: 2500.00");
        assert!(table.ends_with('\n'));
    }

    #[test]
    fn test_status_after_last_payment() {
        let report = StatusReport {
            schedule: &quarterly(),
            as_of: date(2025, 1, 1),
            paid: dec!(10000),
        }
        .to_string();
        assert!(report.contains("arrears:      0.00"));
        assert!(report.contains("next payment: none"));
    }

    #[test]
    fn test_status_with_payment_outstanding() {
        let report = StatusReport {
            schedule: &quarterly(),
            as_of: date(2024, 5, 1),
            paid: dec!(2994.49),
        }
        .to_string();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[1], "due to date:  5329.66");
        assert_eq!(lines[3], "arrears:      2335.17");
        assert_eq!(lines[4], "next payment: #3 on 2024-07-05 for 2335.17");
    }

    #[test]
    fn test_frequency_list() {
        let list = FrequencyList(&[Frequency::Quarterly, Frequency::OneTime]).to_string();
        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].trim_end(), "quarterly    3 month(s)");
        assert!(lines[1].starts_with("onetime      whole lease"));
        assert!(lines[1].ends_with("also: one-time, once"));
    }
}
