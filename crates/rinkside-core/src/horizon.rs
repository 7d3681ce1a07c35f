//! Horizon resolution: how far into game time the timeline must run.
//!
//! Every game proposes a horizon. Live games derive it from their reported
//! progress, other games from their latest goal. The timeline is bounded by
//! the most advanced of these, so all games are replayed in lockstep up to
//! the point the furthest one has reached.
//!
//! This module also builds the sorted goal list the sequencer compares
//! clock ticks against.

use core::cmp::{Ordering, Reverse};

use rinkside_types::{Game, GameStatus, GameTime, Goal, Horizon, ParseError, Period, Progress};
use tracing::{debug, warn};

use crate::clock::{self, ClockError, EventTime};
use crate::scoreboard;

/// Errors that can occur while resolving a horizon.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HorizonError {
    /// Live progress named a period that does not exist.
    #[error("invalid live progress: {source}")]
    Progress {
        /// The underlying parse error.
        #[from]
        source: ParseError,
    },

    /// A goal time does not fit in its period.
    #[error("invalid goal time: {source}")]
    GoalTime {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },
}

/// Derive the horizon proposed by a single game.
///
/// Returns `Ok(None)` for games that contribute nothing: games without
/// goals that are not live, and live games that did not report progress.
///
/// # Errors
///
/// Returns [`HorizonError`] if the game's progress or last goal is
/// malformed.
pub fn game_horizon(game: &Game) -> Result<Option<Horizon>, HorizonError> {
    match &game.status {
        GameStatus::Live(Some(progress)) => {
            horizon_from_progress(progress, game.is_playoff_game()).map(Some)
        }
        GameStatus::Live(None) => {
            warn!(
                away = game.teams.away,
                home = game.teams.home,
                "Live game has no progress, skipping for horizon"
            );
            Ok(None)
        }
        GameStatus::NotStarted | GameStatus::Finished => horizon_from_goals(&game.goals),
    }
}

/// Horizon of a live game: its current period and remaining time.
///
/// A period with no time left (or reported as "END") has fully elapsed.
fn horizon_from_progress(progress: &Progress, is_playoff_game: bool) -> Result<Horizon, HorizonError> {
    Ok(Horizon {
        period: progress.period(is_playoff_game)?,
        remaining: progress.current_period_time_remaining.remaining(),
        in_progress: true,
    })
}

/// Horizon of a non-live game, from its latest goal.
///
/// Overtime goals end the game on the spot, so the horizon is the goal's
/// time converted to remaining time. A shootout has no clock. Any other
/// game ran to the end of regulation.
fn horizon_from_goals(goals: &[Goal]) -> Result<Option<Horizon>, HorizonError> {
    let Some(last) = goals
        .iter()
        .max_by(|a, b| clock::compare_events(&EventTime::of_goal(a), &EventTime::of_goal(b)))
    else {
        return Ok(None);
    };

    let horizon = match last.period {
        Period::Overtime | Period::PlayoffOvertime(_) => Horizon {
            period: last.period,
            remaining: Some(clock::elapsed_to_remaining(last.period, last.time)?),
            in_progress: false,
        },
        Period::Shootout => Horizon {
            period: Period::Shootout,
            remaining: None,
            in_progress: false,
        },
        Period::Regulation(_) => Horizon {
            period: Period::LAST_REGULATION,
            remaining: None,
            in_progress: false,
        },
    };
    Ok(Some(horizon))
}

/// Order horizons by how far into the game they reach.
///
/// Period rank decides first. Within a period, less remaining time is
/// later, and a fully elapsed period is the latest of all.
pub fn compare_horizons(a: &Horizon, b: &Horizon) -> Ordering {
    horizon_key(*a).cmp(&horizon_key(*b))
}

fn horizon_key(horizon: Horizon) -> (u8, Reverse<u16>) {
    let remaining = horizon.remaining.map_or(0, GameTime::total_seconds);
    (horizon.period.rank(), Reverse(remaining))
}

/// Resolve the single horizon that bounds the timeline for all games.
///
/// Returns `Ok(None)` when no game contributes a horizon. On ties the
/// game listed last wins.
///
/// # Errors
///
/// Returns the first [`HorizonError`] raised by any game.
pub fn resolve_horizon(games: &[Game]) -> Result<Option<Horizon>, HorizonError> {
    let mut furthest: Option<Horizon> = None;
    for game in games {
        if let Some(horizon) = game_horizon(game)?
            && furthest.is_none_or(|current| compare_horizons(&horizon, &current).is_ge())
        {
            furthest = Some(horizon);
        }
    }
    debug!(?furthest, game_count = games.len(), "Horizon resolved");
    Ok(furthest)
}

/// All goals the timeline is paced around, sorted by game time.
///
/// Shootout attempts are collapsed: each game contributes at most its
/// decisive shootout goal.
pub fn sequencing_goals(games: &[Game]) -> Vec<EventTime> {
    let mut goals: Vec<EventTime> = games
        .iter()
        .flat_map(|game| {
            game.goals
                .iter()
                .filter(|goal| !goal.is_shootout())
                .chain(scoreboard::decisive_shootout_goal(game))
                .map(EventTime::of_goal)
        })
        .collect();
    goals.sort_by(clock::compare_events);
    goals
}
