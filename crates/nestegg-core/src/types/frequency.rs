//! Compounding frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NestEggError;

/// Interest compounding convention for a savings plan.
///
/// Contributions always arrive monthly, so a frequency is only meaningful if
/// its period is a whole number of months. Daily compounding is the single
/// exception and is handled with a 30-day month approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum CompoundingFrequency {
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Compounding every four months (3x per year)
    TriAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Compounding every two months (6x per year)
    BiMonthly,
    /// Monthly compounding (12x per year)
    #[default]
    Monthly,
    /// Daily compounding (365x per year)
    Daily,
}

impl CompoundingFrequency {
    /// Frequencies that have a named token, in token order.
    pub const NAMED: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annual,
        CompoundingFrequency::SemiAnnual,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    /// Every accepted compounding count, as plain integers.
    pub const SUPPORTED_COUNTS: [u32; 7] = [1, 2, 3, 4, 6, 12, 365];

    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annual => 1,
            CompoundingFrequency::SemiAnnual => 2,
            CompoundingFrequency::TriAnnual => 3,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::BiMonthly => 6,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    /// Returns the number of months per compounding period.
    ///
    /// `None` for daily compounding, which has no whole-month period.
    #[must_use]
    pub fn months_per_period(&self) -> Option<u32> {
        match self {
            CompoundingFrequency::Daily => None,
            other => Some(12 / other.periods_per_year()),
        }
    }

    /// Returns true if this is daily compounding.
    #[must_use]
    pub fn is_daily(&self) -> bool {
        matches!(self, CompoundingFrequency::Daily)
    }

    /// The query-string token for this frequency, if it has one.
    #[must_use]
    pub fn token(&self) -> Option<&'static str> {
        match self {
            CompoundingFrequency::Annual => Some("annually"),
            CompoundingFrequency::SemiAnnual => Some("semiannually"),
            CompoundingFrequency::Quarterly => Some("quarterly"),
            CompoundingFrequency::Monthly => Some("monthly"),
            CompoundingFrequency::Daily => Some("daily"),
            CompoundingFrequency::TriAnnual | CompoundingFrequency::BiMonthly => None,
        }
    }
}

impl TryFrom<u32> for CompoundingFrequency {
    type Error = NestEggError;

    fn try_from(periods: u32) -> Result<Self, Self::Error> {
        match periods {
            1 => Ok(CompoundingFrequency::Annual),
            2 => Ok(CompoundingFrequency::SemiAnnual),
            3 => Ok(CompoundingFrequency::TriAnnual),
            4 => Ok(CompoundingFrequency::Quarterly),
            6 => Ok(CompoundingFrequency::BiMonthly),
            12 => Ok(CompoundingFrequency::Monthly),
            365 => Ok(CompoundingFrequency::Daily),
            other => Err(NestEggError::unsupported_frequency(other.to_string())),
        }
    }
}

impl From<CompoundingFrequency> for u32 {
    fn from(freq: CompoundingFrequency) -> Self {
        freq.periods_per_year()
    }
}

impl FromStr for CompoundingFrequency {
    type Err = NestEggError;

    /// Parses a named token (case-insensitive) or a plain period count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_ascii_lowercase();

        if let Some(named) = Self::NAMED
            .iter()
            .find(|freq| freq.token() == Some(lowered.as_str()))
        {
            return Ok(*named);
        }

        trimmed
            .parse::<u32>()
            .map_err(|_| NestEggError::unsupported_frequency(s))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Annual => "Annual",
            CompoundingFrequency::SemiAnnual => "Semi-Annual",
            CompoundingFrequency::TriAnnual => "Tri-Annual",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::BiMonthly => "Bi-Monthly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
        };
        write!(f, "{name}")
    }
}
