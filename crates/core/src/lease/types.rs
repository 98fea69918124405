//! Lease contract and payment schedule types.

use chrono::NaiveDate;
use rentroll_shared::types::round_minor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;
use super::frequency::Frequency;

/// Contract terms a schedule is generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseContract {
    /// Total amount payable over the lease, at cent precision.
    pub total_amount: Decimal,
    /// First day of the lease.
    pub start_date: NaiveDate,
    /// Last day of the lease (inclusive).
    pub end_date: NaiveDate,
    /// Payment frequency.
    pub frequency: Frequency,
}

impl LeaseContract {
    /// Creates a new contract. Terms are validated by the generator.
    #[must_use]
    pub const fn new(
        total_amount: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
        frequency: Frequency,
    ) -> Self {
        Self {
            total_amount,
            start_date,
            end_date,
            frequency,
        }
    }

    /// Creates a contract from a human-facing frequency token.
    pub fn parse(
        total_amount: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
        frequency: &str,
    ) -> Result<Self, ScheduleError> {
        Ok(Self::new(
            total_amount,
            start_date,
            end_date,
            frequency.parse()?,
        ))
    }
}

/// A single payment obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentScheduleEntry {
    /// 1-based position in the schedule.
    pub payment_number: u32,
    /// Date the payment falls due.
    pub due_date: NaiveDate,
    /// Start of the payment window. Currently the due date.
    pub window_start: NaiveDate,
    /// End of the payment window. Currently the due date.
    pub window_end: NaiveDate,
    /// Amount due, at cent precision.
    pub amount: Decimal,
}

/// Ordered payment obligations for one lease.
///
/// Immutable once generated: the sum of all amounts equals the contract
/// total, payment numbers run `1..=N` and due dates ascend with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    entries: Vec<PaymentScheduleEntry>,
    /// Average amount per period, informational only.
    pub display_amount: Decimal,
}

impl PaymentSchedule {
    pub(crate) fn new(entries: Vec<PaymentScheduleEntry>, display_amount: Decimal) -> Self {
        Self {
            entries,
            display_amount,
        }
    }

    /// All entries, ordered by payment number.
    #[must_use]
    pub fn entries(&self) -> &[PaymentScheduleEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the schedule has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every entry's amount.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// The first entry.
    #[must_use]
    pub fn first(&self) -> Option<&PaymentScheduleEntry> {
        self.entries.first()
    }

    /// The last entry.
    #[must_use]
    pub fn last(&self) -> Option<&PaymentScheduleEntry> {
        self.entries.last()
    }

    /// First entry due on or after `on`.
    #[must_use]
    pub fn next_due(&self, on: NaiveDate) -> Option<&PaymentScheduleEntry> {
        self.entries.iter().find(|e| e.due_date >= on)
    }

    /// Total amount due on or before `as_of`.
    #[must_use]
    pub fn due_through(&self, as_of: NaiveDate) -> Decimal {
        round_minor(
            self.entries
                .iter()
                .take_while(|e| e.due_date <= as_of)
                .map(|e| e.amount)
                .sum(),
        )
    }

    /// Amount due by `as_of` that `paid` does not cover. Never negative.
    #[must_use]
    pub fn arrears(&self, as_of: NaiveDate, paid: Decimal) -> Decimal {
        round_minor((self.due_through(as_of) - paid).max(Decimal::ZERO))
    }
}

impl<'a> IntoIterator for &'a PaymentSchedule {
    type Item = &'a PaymentScheduleEntry;
    type IntoIter = std::slice::Iter<'a, PaymentScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
