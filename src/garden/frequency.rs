use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Interval applied by [`Frequency::parse_lenient`] when a stored code is unreadable
pub const LEGACY_FALLBACK: Frequency = Frequency {
    kind: FrequencyKind::Days,
    magnitude: 7,
};

/// Unit of a frequency interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyKind {
    /// Interval counted in calendar days
    Days,
    /// Interval counted in calendar months (day-of-month clamped)
    Months,
}

impl FrequencyKind {
    fn suffix(self) -> char {
        match self {
            FrequencyKind::Days => 'd',
            FrequencyKind::Months => 'm',
        }
    }
}

/// Validated repeat interval of a task, written externally as `7d` or `3m`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frequency {
    kind: FrequencyKind,
    magnitude: u32,
}

impl Frequency {
    /// Every `n` days; `None` when `n` is zero
    pub fn days(n: u32) -> Option<Self> {
        (n > 0).then_some(Self {
            kind: FrequencyKind::Days,
            magnitude: n,
        })
    }

    /// Every `n` months; `None` when `n` is zero
    pub fn months(n: u32) -> Option<Self> {
        (n > 0).then_some(Self {
            kind: FrequencyKind::Months,
            magnitude: n,
        })
    }

    pub fn kind(&self) -> FrequencyKind {
        self.kind
    }

    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    /// Parse a frequency code such as `7d` or `3m`
    ///
    /// Surrounding whitespace is ignored and the unit letter is
    /// case-insensitive.
    ///
    /// # Errors
    /// `InvalidFrequencyFormat` when the prefix is not a positive integer or
    /// the suffix is not `d`/`m`
    pub fn parse(code: &str) -> Result<Self, ScheduleError> {
        let invalid = || ScheduleError::InvalidFrequencyFormat {
            code: code.to_string(),
        };

        let trimmed = code.trim();
        let mut chars = trimmed.chars();
        let unit = chars.next_back().ok_or_else(invalid)?;
        let digits = chars.as_str();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let magnitude: u32 = digits.parse().map_err(|_| invalid())?;

        let built = match unit.to_ascii_lowercase() {
            'd' => Self::days(magnitude),
            'm' => Self::months(magnitude),
            _ => None,
        };
        built.ok_or_else(invalid)
    }

    /// Parse a code, falling back to every 7 days when it is unreadable
    ///
    /// Compatibility path for data written by older versions that stored
    /// free-form codes. New input should go through [`Frequency::parse`].
    pub fn parse_lenient(code: &str) -> Self {
        Self::parse(code).unwrap_or_else(|e| {
            tracing::warn!(code, error = %e, "unreadable frequency, using legacy 7 day fallback");
            LEGACY_FALLBACK
        })
    }
}

impl FromStr for Frequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.kind.suffix())
    }
}
