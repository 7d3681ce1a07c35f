//! Timeline composition: the full playback sequence for a set of games.
//!
//! The composer plans which periods the horizon covers, sequences each of
//! them, paces the ticks around goals, and frames the result with start,
//! period-end and end markers:
//!
//! ```text
//! Start x start  |  period 1 ticks  PeriodEnd(1) x period_end  |  ...
//!                |  horizon period ticks  [PeriodEnd x period_end]  |  End
//! ```
//!
//! The horizon's own period gets no period-end marker while a game is
//! still being played in it.

use std::iter;

use rinkside_types::{
    ClockState, Game, GameTime, Horizon, ParseError, Period, REGULATION_PERIODS, TimelineEntry,
};
use tracing::{debug, info};

use crate::clock::EventTime;
use crate::config::{ConfigError, PacingConfig};
use crate::density::{DensityError, GoalDensity};
use crate::horizon::{self, HorizonError};
use crate::period;

/// Errors that can occur while generating a timeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimelineError {
    /// A game's progress or goals could not be placed in game time.
    #[error(transparent)]
    Horizon {
        /// The underlying horizon error.
        #[from]
        source: HorizonError,
    },

    /// A period produced a tick outside the clock's range.
    #[error("invalid clock tick: {source}")]
    Sequence {
        /// The underlying parse error.
        #[from]
        source: ParseError,
    },

    /// Goal pacing found ticks out of order.
    #[error(transparent)]
    Density {
        /// The underlying density error.
        #[from]
        source: DensityError,
    },
}

/// A fully materialized playback timeline.
///
/// The first entry is always [`TimelineEntry::Start`] and the last is
/// always [`TimelineEntry::End`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    horizon: Option<Horizon>,
}

impl Timeline {
    /// All entries in playback order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// The horizon the timeline was built up to, if any game had one.
    pub const fn horizon(&self) -> Option<Horizon> {
        self.horizon
    }

    /// Whether playback ends before a live game does.
    pub fn in_progress(&self) -> bool {
        self.horizon.is_some_and(|horizon| horizon.in_progress)
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a timeline holds at least its start and end markers.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`, if within bounds.
    pub fn get(&self, index: usize) -> Option<&TimelineEntry> {
        self.entries.get(index)
    }

    /// Iterate over entries in playback order.
    pub fn iter(&self) -> core::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    /// The last running-clock entry.
    pub fn last_clock(&self) -> Option<&ClockState> {
        self.entries.iter().rev().find_map(TimelineEntry::clock)
    }

    /// Consume the timeline, returning its entries.
    pub fn into_entries(self) -> Vec<TimelineEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = core::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A period the timeline covers and where playback stops inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlannedPeriod {
    period: Period,
    cutoff: Option<GameTime>,
}

impl PlannedPeriod {
    const fn full(period: Period) -> Self {
        Self {
            period,
            cutoff: None,
        }
    }
}

/// The periods covered by `horizon`, in playback order.
///
/// Only the horizon's own period carries a cutoff. Reaching overtime
/// implies a full regulation; reaching the shootout implies a full
/// overtime as well.
fn period_plan(horizon: Horizon) -> Vec<PlannedPeriod> {
    let regulation = || {
        (1..=REGULATION_PERIODS).map(|number| PlannedPeriod::full(Period::Regulation(number)))
    };
    let last = PlannedPeriod {
        period: horizon.period,
        cutoff: horizon.remaining,
    };
    match horizon.period {
        Period::Regulation(number) | Period::PlayoffOvertime(number) => (1..number)
            .map(|earlier| PlannedPeriod::full(Period::numbered(earlier)))
            .chain(iter::once(last))
            .collect(),
        Period::Overtime => regulation().chain(iter::once(last)).collect(),
        Period::Shootout => regulation()
            .chain(iter::once(PlannedPeriod::full(Period::Overtime)))
            .chain(iter::once(PlannedPeriod::full(Period::Shootout)))
            .collect(),
    }
}

/// Builds playback timelines with a fixed, validated pacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineGenerator {
    pacing: PacingConfig,
}

impl TimelineGenerator {
    /// Create a generator with the given pacing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the pacing would drop the start
    /// marker or the period-end markers.
    pub fn new(pacing: PacingConfig) -> Result<Self, ConfigError> {
        pacing.validate()?;
        Ok(Self { pacing })
    }

    /// Generate the timeline that replays `games` in lockstep.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::Horizon`] if a game's progress or goals are
    /// malformed, or any error [`Self::compose`] returns.
    pub fn generate(&self, games: &[Game]) -> Result<Timeline, TimelineError> {
        let horizon = horizon::resolve_horizon(games)?;
        let goals = horizon::sequencing_goals(games);
        let timeline = self.compose(horizon, &goals)?;
        info!(
            games = games.len(),
            goals = goals.len(),
            entries = timeline.len(),
            in_progress = timeline.in_progress(),
            "Timeline generated"
        );
        Ok(timeline)
    }

    /// Compose a timeline up to `horizon`, pacing ticks around `goals`.
    ///
    /// `goals` must be sorted in event order, as returned by
    /// [`horizon::sequencing_goals`]. Without a horizon the timeline is
    /// just its start and end markers.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::Sequence`] if a period produces an invalid
    /// tick, or [`TimelineError::Density`] if a tick reaches fewer goals
    /// than the tick before it.
    pub fn compose(
        &self,
        horizon: Option<Horizon>,
        goals: &[EventTime],
    ) -> Result<Timeline, TimelineError> {
        let mut entries: Vec<TimelineEntry> =
            iter::repeat_n(TimelineEntry::Start, self.pacing.start_multiplier).collect();

        let Some(horizon) = horizon else {
            entries.push(TimelineEntry::End { in_progress: false });
            return Ok(Timeline {
                entries,
                horizon: None,
            });
        };

        let plan = period_plan(horizon);
        let mut density = GoalDensity::new(goals, self.pacing.goal_multiplier);
        for (index, planned) in plan.iter().enumerate() {
            if planned.period.is_clocked() {
                let ticks = period::sequence_period(
                    planned.period,
                    planned.period.length_minutes(),
                    planned.cutoff,
                )?;
                let paced = density.expand(&ticks)?;
                debug!(
                    period = %planned.period,
                    cutoff = ?planned.cutoff,
                    ticks = ticks.len(),
                    paced = paced.len(),
                    "Period sequenced"
                );
                entries.extend(paced.into_iter().map(TimelineEntry::Clock));
            } else {
                entries.push(TimelineEntry::Shootout);
            }

            let is_last = index.saturating_add(1) == plan.len();
            if !(is_last && horizon.in_progress) {
                entries.extend(iter::repeat_n(
                    TimelineEntry::PeriodEnd(planned.period),
                    self.pacing.period_end_multiplier,
                ));
            }
        }

        entries.push(TimelineEntry::End {
            in_progress: horizon.in_progress,
        });
        Ok(Timeline {
            entries,
            horizon: Some(horizon),
        })
    }
}
