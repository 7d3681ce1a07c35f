//! Period identifiers.
//!
//! The provider identifies periods either by number (1, 2, 3, and 4+ for
//! numbered playoff overtimes) or by the labels "OT" and "SO". Both shapes
//! are folded into [`Period`] at deserialization time so the rest of the
//! workspace matches exhaustively instead of comparing strings.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Number of regulation periods in a game.
pub const REGULATION_PERIODS: u8 = 3;

/// Length of a regulation or playoff overtime period, in minutes.
const FULL_PERIOD_MINUTES: u8 = 20;

/// Length of the regular-season overtime, in minutes.
const OVERTIME_MINUTES: u8 = 5;

/// A period of a hockey game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodRepr", into = "PeriodRepr")]
pub enum Period {
    /// One of the three 20-minute regulation periods (1 through 3).
    Regulation(u8),
    /// The single 5-minute regular-season overtime ("OT").
    Overtime,
    /// A numbered 20-minute playoff overtime (period 4 and beyond).
    PlayoffOvertime(u8),
    /// The shootout ("SO"). Shootouts have no game clock.
    Shootout,
}

impl Period {
    /// The first period of every game.
    pub const FIRST: Self = Self::Regulation(1);

    /// The last regulation period.
    pub const LAST_REGULATION: Self = Self::Regulation(REGULATION_PERIODS);

    /// Build a period from its number, rejecting zero.
    ///
    /// Numbers above [`REGULATION_PERIODS`] are playoff overtimes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownPeriod`] for period 0.
    pub fn from_number(number: u8) -> Result<Self, ParseError> {
        if number == 0 {
            return Err(ParseError::UnknownPeriod(number.to_string()));
        }
        Ok(Self::numbered(number))
    }

    /// Map a positive period number onto its variant without validation.
    pub const fn numbered(number: u8) -> Self {
        if number > REGULATION_PERIODS {
            Self::PlayoffOvertime(number)
        } else {
            Self::Regulation(number)
        }
    }

    /// Position of the period in the total period order.
    ///
    /// Regulation periods and numbered playoff overtimes rank by number,
    /// the regular-season overtime ranks as period 4, and the shootout
    /// ranks above everything.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Regulation(number) | Self::PlayoffOvertime(number) => number,
            Self::Overtime => REGULATION_PERIODS.saturating_add(1),
            Self::Shootout => u8::MAX,
        }
    }

    /// Nominal length of the period in minutes.
    pub const fn length_minutes(self) -> u8 {
        match self {
            Self::Overtime => OVERTIME_MINUTES,
            Self::Regulation(_) | Self::PlayoffOvertime(_) | Self::Shootout => {
                FULL_PERIOD_MINUTES
            }
        }
    }

    /// Nominal length of the period in seconds.
    pub const fn length_seconds(self) -> u16 {
        (self.length_minutes() as u16).saturating_mul(60)
    }

    /// Whether the period runs a game clock (everything but the shootout).
    pub const fn is_clocked(self) -> bool {
        !matches!(self, Self::Shootout)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regulation(number) | Self::PlayoffOvertime(number) => write!(f, "{number}"),
            Self::Overtime => f.write_str("OT"),
            Self::Shootout => f.write_str("SO"),
        }
    }
}

impl FromStr for Period {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        match label {
            "OT" => Ok(Self::Overtime),
            "SO" => Ok(Self::Shootout),
            _ => label
                .parse::<u8>()
                .map_err(|_err| ParseError::UnknownPeriod(s.to_owned()))
                .and_then(|number| {
                    Self::from_number(number).map_err(|_err| ParseError::UnknownPeriod(s.to_owned()))
                }),
        }
    }
}

/// Wire representation: a bare number or a string label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum PeriodRepr {
    Number(u8),
    Label(String),
}

impl TryFrom<PeriodRepr> for Period {
    type Error = ParseError;

    fn try_from(repr: PeriodRepr) -> Result<Self, Self::Error> {
        match repr {
            PeriodRepr::Number(number) => Self::from_number(number),
            PeriodRepr::Label(label) => label.parse(),
        }
    }
}

impl From<Period> for PeriodRepr {
    fn from(period: Period) -> Self {
        match period {
            Period::Regulation(number) | Period::PlayoffOvertime(number) => Self::Number(number),
            Period::Overtime | Period::Shootout => Self::Label(period.to_string()),
        }
    }
}
