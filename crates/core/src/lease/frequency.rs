//! Payment frequency enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ScheduleError;

/// How often a lease is paid.
///
/// Periodic variants carry a period length in whole months; `OneTime` is a
/// single payment for the whole contract, not a period length.
///
/// ```
/// use rentroll_core::lease::Frequency;
///
/// let freq: Frequency = "Semi-Annual".parse().unwrap();
/// assert_eq!(freq, Frequency::Semiannual);
/// assert_eq!(freq.months(), Some(6));
/// assert_eq!(Frequency::OneTime.months(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every month.
    Monthly,
    /// Every two months.
    Bimonthly,
    /// Every three months.
    Quarterly,
    /// Every four months.
    FourMonthly,
    /// Every six months.
    Semiannual,
    /// Every twelve months.
    Annual,
    /// A single payment covering the whole lease.
    OneTime,
}

impl Frequency {
    /// Every variant, periodic ones in ascending period order, `OneTime` last.
    pub const ALL: [Self; 7] = [
        Self::Monthly,
        Self::Bimonthly,
        Self::Quarterly,
        Self::FourMonthly,
        Self::Semiannual,
        Self::Annual,
        Self::OneTime,
    ];

    /// Period length in months, `None` for `OneTime`.
    #[must_use]
    pub const fn months(self) -> Option<u32> {
        match self {
            Self::Monthly => Some(1),
            Self::Bimonthly => Some(2),
            Self::Quarterly => Some(3),
            Self::FourMonthly => Some(4),
            Self::Semiannual => Some(6),
            Self::Annual => Some(12),
            Self::OneTime => None,
        }
    }

    /// Canonical token, as written by `Display` and serde.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Bimonthly => "bimonthly",
            Self::Quarterly => "quarterly",
            Self::FourMonthly => "fourmonthly",
            Self::Semiannual => "semiannual",
            Self::Annual => "annual",
            Self::OneTime => "onetime",
        }
    }

    /// Alternative spellings accepted by `FromStr`, besides the canonical token.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Monthly => &[],
            Self::Bimonthly => &["bi-monthly"],
            Self::Quarterly => &[],
            Self::FourMonthly => &["four-monthly", "4-monthly"],
            Self::Semiannual => &["semi-annual", "half-yearly"],
            Self::Annual => &["yearly"],
            Self::OneTime => &["one-time", "once"],
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str() == token || freq.aliases().contains(&token.as_str()))
            .ok_or_else(|| ScheduleError::UnknownFrequency(s.to_string()))
    }
}
