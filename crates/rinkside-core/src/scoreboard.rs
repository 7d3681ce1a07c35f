//! Clock-aware score queries for a single game.
//!
//! The animation driver hands each timeline entry to the renderer, which
//! needs to know which goals have been scored "so far" and whether playback
//! has caught up with a live game. These queries answer that from the same
//! event order the timeline is built with.

use rinkside_types::{Game, Goal, TimelineEntry};

use crate::clock::{self, EventTime};
use crate::horizon::HorizonError;

/// Goal counts of both teams at some point of playback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Goals of the visiting team.
    pub away: usize,
    /// Goals of the home team.
    pub home: usize,
}

/// The shootout goal that decided the game, if any.
///
/// The side with more shootout goals wins; its last shootout goal is the
/// decisive one. A level shootout has no decisive goal yet.
pub fn decisive_shootout_goal(game: &Game) -> Option<&Goal> {
    let attempts = || game.goals.iter().filter(|goal| goal.is_shootout());
    let away = attempts().filter(|goal| goal.team == game.teams.away).count();
    let home = attempts().filter(|goal| goal.team == game.teams.home).count();
    let winner = match away.cmp(&home) {
        core::cmp::Ordering::Greater => &game.teams.away,
        core::cmp::Ordering::Less => &game.teams.home,
        core::cmp::Ordering::Equal => return None,
    };
    game.goals
        .iter()
        .rev()
        .find(|goal| goal.is_shootout() && &goal.team == winner)
}

/// Goals of `game` that have been scored at the given timeline entry.
///
/// Once playback reaches the shootout or the end, individual shootout
/// attempts are replaced by the decisive shootout goal.
pub fn goals_at<'a>(game: &'a Game, entry: &TimelineEntry) -> Vec<&'a Goal> {
    match entry {
        TimelineEntry::Start => Vec::new(),
        TimelineEntry::Shootout
        | TimelineEntry::PeriodEnd(rinkside_types::Period::Shootout)
        | TimelineEntry::End { .. } => game
            .goals
            .iter()
            .filter(|goal| !goal.is_shootout())
            .chain(decisive_shootout_goal(game))
            .collect(),
        TimelineEntry::Clock(_) | TimelineEntry::PeriodEnd(_) => game
            .goals
            .iter()
            .filter(|goal| clock::entry_has_passed(entry, &EventTime::of_goal(goal)))
            .collect(),
    }
}

/// The score of `game` at the given timeline entry.
pub fn score_at(game: &Game, entry: &TimelineEntry) -> Score {
    goals_at(game, entry)
        .into_iter()
        .fold(Score::default(), |mut score, goal| {
            if goal.team == game.teams.away {
                score.away = score.away.saturating_add(1);
            } else if goal.team == game.teams.home {
                score.home = score.home.saturating_add(1);
            }
            score
        })
}

/// Whether playback has reached the reported progress of a live game.
///
/// Games that are not live, or did not report progress, are never
/// reached.
///
/// # Errors
///
/// Returns [`HorizonError`] if the progress names an unknown period or a
/// remaining time longer than the period.
pub fn has_clock_passed_progress(entry: &TimelineEntry, game: &Game) -> Result<bool, HorizonError> {
    let Some(progress) = game.progress() else {
        return Ok(false);
    };
    let period = progress.period(game.is_playoff_game())?;
    let remaining = progress
        .current_period_time_remaining
        .remaining()
        .unwrap_or_default();
    let elapsed = clock::remaining_to_elapsed(period, remaining)?;
    Ok(clock::entry_has_passed(entry, &EventTime::new(period, elapsed)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rinkside_types::{ClockState, GameStatus, GameTime, Period, Progress, Teams, TimeRemaining};

    use super::*;

    fn goal(team: &str, period: Period, minute: u8, second: u8) -> Goal {
        Goal::new(team, period, minute, second).unwrap()
    }

    fn game(status: GameStatus, goals: Vec<Goal>) -> Game {
        Game {
            teams: Teams {
                away: "CHI".to_owned(),
                home: "STL".to_owned(),
            },
            goals,
            status,
            pre_game_stats: None,
        }
    }

    fn clock(period: Period, minute: u8, second: u8) -> TimelineEntry {
        TimelineEntry::Clock(ClockState::new(period, GameTime::new(minute, second).unwrap()))
    }

    fn regulation_game() -> Game {
        game(
            GameStatus::Finished,
            vec![
                goal("CHI", Period::Regulation(1), 11, 16),
                goal("STL", Period::Regulation(1), 15, 2),
                goal("STL", Period::Regulation(2), 3, 40),
                goal("CHI", Period::Regulation(3), 18, 1),
            ],
        )
    }

    #[test]
    fn nothing_scored_at_start() {
        assert_eq!(score_at(&regulation_game(), &TimelineEntry::Start), Score::default());
    }

    #[test]
    fn goal_counts_when_clock_reaches_it() {
        let game = regulation_game();
        let before = score_at(&game, &clock(Period::Regulation(1), 8, 45));
        assert_eq!(before, Score { away: 0, home: 0 });
        let at = score_at(&game, &clock(Period::Regulation(1), 8, 44));
        assert_eq!(at, Score { away: 1, home: 0 });
    }

    #[test]
    fn period_end_includes_whole_period() {
        let game = regulation_game();
        let score = score_at(&game, &TimelineEntry::PeriodEnd(Period::Regulation(1)));
        assert_eq!(score, Score { away: 1, home: 1 });
    }

    #[test]
    fn later_period_includes_earlier_goals() {
        let game = regulation_game();
        let score = score_at(&game, &clock(Period::Regulation(2), 10, 0));
        assert_eq!(score, Score { away: 1, home: 2 });
    }

    #[test]
    fn end_shows_every_goal() {
        let game = regulation_game();
        let score = score_at(&game, &TimelineEntry::End { in_progress: false });
        assert_eq!(score, Score { away: 2, home: 2 });
    }

    #[test]
    fn shootout_counts_only_the_winner() {
        let game = game(
            GameStatus::Finished,
            vec![
                goal("CHI", Period::Regulation(1), 5, 0),
                goal("STL", Period::Regulation(2), 5, 0),
                goal("CHI", Period::Shootout, 0, 0),
                goal("STL", Period::Shootout, 0, 0),
                goal("STL", Period::Shootout, 0, 0),
            ],
        );
        assert_eq!(
            score_at(&game, &TimelineEntry::Shootout),
            Score { away: 1, home: 2 }
        );
        let decisive = decisive_shootout_goal(&game).unwrap();
        assert_eq!(decisive.team, "STL");
    }

    #[test]
    fn level_shootout_has_no_decisive_goal() {
        let game = game(
            GameStatus::Finished,
            vec![
                goal("CHI", Period::Shootout, 0, 0),
                goal("STL", Period::Shootout, 0, 0),
            ],
        );
        assert!(decisive_shootout_goal(&game).is_none());
    }

    #[test]
    fn overtime_goal_is_shown_once_reached() {
        let game = game(
            GameStatus::Finished,
            vec![goal("CHI", Period::Overtime, 2, 55)],
        );
        assert_eq!(
            score_at(&game, &clock(Period::Overtime, 2, 5)),
            Score { away: 1, home: 0 }
        );
        assert_eq!(
            score_at(&game, &clock(Period::Overtime, 2, 8)),
            Score { away: 0, home: 0 }
        );
    }

    #[test]
    fn progress_is_reached_by_later_clock() {
        let live = game(
            GameStatus::Live(Some(Progress {
                current_period: 2,
                current_period_ordinal: "2nd".to_owned(),
                current_period_time_remaining: TimeRemaining::Clock(GameTime::new(12, 0).unwrap()),
            })),
            vec![],
        );
        assert!(!has_clock_passed_progress(&clock(Period::Regulation(2), 12, 1), &live).unwrap());
        assert!(has_clock_passed_progress(&clock(Period::Regulation(2), 12, 0), &live).unwrap());
        assert!(has_clock_passed_progress(&TimelineEntry::End { in_progress: true }, &live).unwrap());
        assert!(!has_clock_passed_progress(&TimelineEntry::Start, &live).unwrap());
    }

    #[test]
    fn finished_game_has_no_progress_to_reach() {
        let entry = TimelineEntry::End { in_progress: false };
        assert!(!has_clock_passed_progress(&entry, &regulation_game()).unwrap());
    }
}
