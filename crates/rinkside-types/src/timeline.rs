//! Clock states, the playback horizon, and timeline entries.
//!
//! A timeline is a flat sequence of [`TimelineEntry`] values that the
//! animation driver steps through at a fixed cadence. Entries serialize into
//! the marker objects the renderer understands:
//!
//! | Entry                  | JSON                                              |
//! |------------------------|---------------------------------------------------|
//! | `Start`                | `{"start":true}`                                  |
//! | `Clock`                | `{"period":3,"minute":0,"second":53,"tenthOfSecond":0}` |
//! | `Shootout`             | `{"period":"SO"}`                                 |
//! | `PeriodEnd`            | `{"period":2,"end":true}`                         |
//! | `End`                  | `{"end":true}` or `{"end":true,"inProgress":true}` |

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::ParseError;
use crate::period::Period;
use crate::time::GameTime;

/// Highest tenth-of-a-second value within a second.
pub const LAST_TENTH: u8 = 9;

/// One tick of the playback clock.
///
/// `remaining` is the time left in `period`. `tenth_of_second` is only set
/// during the final minute of the last regulation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockState {
    period: Period,
    remaining: GameTime,
    tenth_of_second: Option<u8>,
}

impl ClockState {
    /// A whole-second clock state.
    pub const fn new(period: Period, remaining: GameTime) -> Self {
        Self {
            period,
            remaining,
            tenth_of_second: None,
        }
    }

    /// The same state refined to a tenth of a second.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TenthOutOfRange`] if `tenth >= 10`.
    pub const fn with_tenth(self, tenth: u8) -> Result<Self, ParseError> {
        if tenth > LAST_TENTH {
            return Err(ParseError::TenthOutOfRange(tenth));
        }
        Ok(Self {
            tenth_of_second: Some(tenth),
            ..self
        })
    }

    /// The period the clock is in.
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Time remaining in the period.
    pub const fn remaining(&self) -> GameTime {
        self.remaining
    }

    /// Minutes remaining.
    pub const fn minute(&self) -> u8 {
        self.remaining.minute()
    }

    /// Seconds remaining within the minute.
    pub const fn second(&self) -> u8 {
        self.remaining.second()
    }

    /// Tenth of a second, when the clock runs at sub-second resolution.
    pub const fn tenth_of_second(&self) -> Option<u8> {
        self.tenth_of_second
    }
}

impl Serialize for ClockState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.tenth_of_second.is_some() { 4 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("period", &self.period)?;
        map.serialize_entry("minute", &self.remaining.minute())?;
        map.serialize_entry("second", &self.remaining.second())?;
        if let Some(tenth) = self.tenth_of_second {
            map.serialize_entry("tenthOfSecond", &tenth)?;
        }
        map.end()
    }
}

/// The furthest point in game time reached by any game.
///
/// The horizon bounds the timeline: every game is replayed up to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    /// Period the horizon falls in.
    pub period: Period,
    /// Time remaining in `period`; `None` when the period has fully elapsed.
    pub remaining: Option<GameTime>,
    /// Whether the horizon comes from a game that is still live.
    pub in_progress: bool,
}

/// One entry of a playback timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelineEntry {
    /// Playback has not started yet; all scores are blank.
    Start,
    /// The clock is running.
    Clock(ClockState),
    /// The shootout, shown as a single clockless tick.
    Shootout,
    /// The given period has ended.
    PeriodEnd(Period),
    /// Playback is over. `in_progress` marks that at least one game is
    /// still live beyond the point replayed.
    End {
        /// Whether the horizon came from a live game.
        in_progress: bool,
    },
}

impl TimelineEntry {
    /// The period this entry belongs to, if any.
    pub const fn period(&self) -> Option<Period> {
        match self {
            Self::Clock(clock) => Some(clock.period()),
            Self::Shootout => Some(Period::Shootout),
            Self::PeriodEnd(period) => Some(*period),
            Self::Start | Self::End { .. } => None,
        }
    }

    /// The clock state, for running-clock entries.
    pub const fn clock(&self) -> Option<&ClockState> {
        match self {
            Self::Clock(clock) => Some(clock),
            Self::Start | Self::Shootout | Self::PeriodEnd(_) | Self::End { .. } => None,
        }
    }

    /// Whether this is any end marker (period end or final end).
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::PeriodEnd(_) | Self::End { .. })
    }
}

impl From<ClockState> for TimelineEntry {
    fn from(clock: ClockState) -> Self {
        Self::Clock(clock)
    }
}

impl Serialize for TimelineEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Clock(clock) => clock.serialize(serializer),
            Self::Start => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("start", &true)?;
                map.end()
            }
            Self::Shootout => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("period", &Period::Shootout)?;
                map.end()
            }
            Self::PeriodEnd(period) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("period", period)?;
                map.serialize_entry("end", &true)?;
                map.end()
            }
            Self::End { in_progress } => {
                let mut map = serializer.serialize_map(Some(if *in_progress { 2 } else { 1 }))?;
                map.serialize_entry("end", &true)?;
                if *in_progress {
                    map.serialize_entry("inProgress", &true)?;
                }
                map.end()
            }
        }
    }
}
