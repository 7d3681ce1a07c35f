//! Minute/second pairs on the game clock.
//!
//! A [`GameTime`] carries no direction of its own: the same pair is used for
//! time elapsed since a period started (goals) and time remaining until it
//! ends (clock states, live progress). Which one applies is decided by the
//! field that holds it.

use core::fmt;

use serde::Serialize;

use crate::error::ParseError;

/// Seconds in one minute.
const SECONDS_PER_MINUTE: u16 = 60;

/// A minute/second pair with `second` in `0..60`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GameTime {
    minute: u8,
    second: u8,
}

impl GameTime {
    /// Zero minutes, zero seconds.
    pub const ZERO: Self = Self {
        minute: 0,
        second: 0,
    };

    /// Create a time, rejecting seconds of 60 or more.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::SecondOutOfRange`] if `second >= 60`.
    pub const fn new(minute: u8, second: u8) -> Result<Self, ParseError> {
        if second >= 60 {
            return Err(ParseError::SecondOutOfRange(second));
        }
        Ok(Self { minute, second })
    }

    /// Whole minutes and no seconds.
    pub const fn minutes(minute: u8) -> Self {
        Self { minute, second: 0 }
    }

    /// Split a second count into minutes and seconds.
    ///
    /// Returns `None` if the minute count does not fit in a `u8`.
    pub fn from_seconds(total: u16) -> Option<Self> {
        let minute = u8::try_from(total.checked_div(SECONDS_PER_MINUTE)?).ok()?;
        let second = u8::try_from(total.checked_rem(SECONDS_PER_MINUTE)?).ok()?;
        Some(Self { minute, second })
    }

    /// The minute component.
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// The second component.
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Total number of seconds represented.
    pub const fn total_seconds(self) -> u16 {
        (self.minute as u16)
            .saturating_mul(SECONDS_PER_MINUTE)
            .saturating_add(self.second as u16)
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minute, self.second)
    }
}
