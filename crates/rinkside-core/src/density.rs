//! Goal-density expansion: slow playback down around goals.
//!
//! Each tick is compared with the sorted goal list. The number of goals the
//! clock reaches between the previous tick and this one decides how many
//! times this tick is repeated: `1 + goals * multiplier`. The driver steps
//! through repeated ticks at the same cadence as any other, so the clock
//! visibly dwells on every goal.
//!
//! Goal counts are taken with a binary search over the pre-sorted goal
//! list, so expansion is `O(ticks * log goals)` with no rescans.

use std::iter;

use rinkside_types::ClockState;

use crate::clock::{self, EventTime};

/// Errors that can occur during goal-density expansion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DensityError {
    /// A tick reached fewer goals than the tick before it, so the ticks or
    /// the goal list are out of order.
    #[error("tick {tick:?} reached {current} goals after a tick that reached {previous}")]
    OutOfOrder {
        /// The offending tick.
        tick: ClockState,
        /// Goals reached by the previous tick.
        previous: usize,
        /// Goals reached by this tick.
        current: usize,
    },
}

/// Number of goals in `goals` the clock has reached.
///
/// `goals` must be sorted with [`clock::compare_events`].
pub fn goals_reached(goals: &[EventTime], clock: &ClockState) -> usize {
    goals.partition_point(|goal| clock::has_passed(clock, goal))
}

/// Stateful expander that carries the goal count from one batch of ticks
/// to the next.
///
/// Feeding the ticks of consecutive periods through one expander is
/// equivalent to expanding their concatenation: a goal scored after the
/// last tick of a period is counted at the first tick of the next.
#[derive(Debug, Clone)]
pub struct GoalDensity<'a> {
    goals: &'a [EventTime],
    multiplier: usize,
    reached: Option<usize>,
}

impl<'a> GoalDensity<'a> {
    /// Create an expander over a sorted goal list.
    pub const fn new(goals: &'a [EventTime], multiplier: usize) -> Self {
        Self {
            goals,
            multiplier,
            reached: None,
        }
    }

    /// Expand the next batch of ticks.
    ///
    /// The very first tick seen by the expander is emitted once.
    ///
    /// # Errors
    ///
    /// Returns [`DensityError::OutOfOrder`] if a tick reaches fewer goals
    /// than its predecessor.
    pub fn expand(&mut self, ticks: &[ClockState]) -> Result<Vec<ClockState>, DensityError> {
        let mut expanded = Vec::with_capacity(ticks.len());
        for tick in ticks {
            let current = goals_reached(self.goals, tick);
            let repeats = match self.reached {
                None => 1,
                Some(previous) => {
                    let scored = current.checked_sub(previous).ok_or(DensityError::OutOfOrder {
                        tick: *tick,
                        previous,
                        current,
                    })?;
                    scored.saturating_mul(self.multiplier).saturating_add(1)
                }
            };
            expanded.extend(iter::repeat_n(*tick, repeats));
            self.reached = Some(current);
        }
        Ok(expanded)
    }
}

/// Expand a complete tick sequence in one go.
///
/// # Errors
///
/// Returns [`DensityError::OutOfOrder`] if the ticks are not in clock
/// order.
pub fn expand_goal_density(
    ticks: &[ClockState],
    goals: &[EventTime],
    multiplier: usize,
) -> Result<Vec<ClockState>, DensityError> {
    GoalDensity::new(goals, multiplier).expand(ticks)
}
