//! Game clock arithmetic: remaining/elapsed conversion and the event order.
//!
//! Goals are reported as time *elapsed* in a period, while the playback
//! clock counts time *remaining*. This module converts between the two and
//! defines the single order used to decide whether the clock has reached an
//! event.
//!
//! # Design Principles
//!
//! - Period length comes from [`Period::length_seconds`]: 5 minutes for the
//!   regular-season overtime, 20 for everything else.
//! - Conversions use checked arithmetic and reject times outside their
//!   period instead of wrapping.
//! - Comparison is by period rank first, then by elapsed time.

use core::cmp::Ordering;

use rinkside_types::{ClockState, GameTime, Goal, Period, TimelineEntry};

/// Errors that can occur during clock conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The time does not fit inside its period.
    #[error("{time} does not fit in period {period} ({length} minutes)")]
    OutOfPeriod {
        /// The period the time was reported in.
        period: Period,
        /// The offending time.
        time: GameTime,
        /// Length of the period in minutes.
        length: u8,
    },
}

/// Convert time remaining in a period to time elapsed since it started.
///
/// Valid for every time from `00:00` up to the full period length.
///
/// # Errors
///
/// Returns [`ClockError::OutOfPeriod`] if `remaining` exceeds the period
/// length.
pub fn remaining_to_elapsed(period: Period, remaining: GameTime) -> Result<GameTime, ClockError> {
    period
        .length_seconds()
        .checked_sub(remaining.total_seconds())
        .and_then(GameTime::from_seconds)
        .ok_or_else(|| ClockError::OutOfPeriod {
            period,
            time: remaining,
            length: period.length_minutes(),
        })
}

/// Convert time elapsed in a period to time remaining until it ends.
///
/// Both directions subtract from the period length, so this is the exact
/// inverse of [`remaining_to_elapsed`].
///
/// # Errors
///
/// Returns [`ClockError::OutOfPeriod`] if `elapsed` exceeds the period
/// length.
pub fn elapsed_to_remaining(period: Period, elapsed: GameTime) -> Result<GameTime, ClockError> {
    remaining_to_elapsed(period, elapsed)
}

/// A point in game time expressed as elapsed time within a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTime {
    /// Period of the event.
    pub period: Period,
    /// Time elapsed in the period.
    pub elapsed: GameTime,
}

impl EventTime {
    /// Create an event time.
    pub const fn new(period: Period, elapsed: GameTime) -> Self {
        Self { period, elapsed }
    }

    /// The time a goal was scored.
    pub const fn of_goal(goal: &Goal) -> Self {
        Self {
            period: goal.period,
            elapsed: goal.time,
        }
    }
}

/// Total order over event times: period rank, then elapsed time.
pub fn compare_events(a: &EventTime, b: &EventTime) -> Ordering {
    a.period
        .rank()
        .cmp(&b.period.rank())
        .then_with(|| a.elapsed.cmp(&b.elapsed))
}

/// Seconds elapsed in the clock's period, saturating at the period start.
const fn clock_elapsed_seconds(clock: ClockState) -> u16 {
    clock
        .period()
        .length_seconds()
        .saturating_sub(clock.remaining().total_seconds())
}

/// Whether the clock has reached an event.
///
/// True if the event's period precedes the clock's period, or both share
/// a period and the event's elapsed time is at or before the clock's.
/// Tenths of a second are ignored.
pub fn has_passed(clock: &ClockState, event: &EventTime) -> bool {
    let clock_rank = clock.period().rank();
    let event_rank = event.period.rank();
    event_rank < clock_rank
        || (event_rank == clock_rank
            && event.elapsed.total_seconds() <= clock_elapsed_seconds(*clock))
}

/// Whether a timeline entry has reached an event.
///
/// `Start` has reached nothing. A period-end marker has reached everything
/// up to and including its period. `Shootout` and `End` have reached
/// everything.
pub fn entry_has_passed(entry: &TimelineEntry, event: &EventTime) -> bool {
    match entry {
        TimelineEntry::Start => false,
        TimelineEntry::Clock(clock) => has_passed(clock, event),
        TimelineEntry::PeriodEnd(period) => event.period.rank() <= period.rank(),
        TimelineEntry::Shootout | TimelineEntry::End { .. } => true,
    }
}
