//! Games as delivered by the score provider.
//!
//! The provider's records are loosely shaped: periods arrive as numbers or
//! labels, remaining time as a structured object or a "MM:SS"/"END" string,
//! and the game state as a free-form string. Everything is normalized here
//! during deserialization so that malformed data fails fast with a
//! [`ParseError`] instead of surfacing later as a wrong timeline.

use core::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ParseError;
use crate::period::Period;
use crate::time::GameTime;

/// The two teams of a game, by abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Teams {
    /// Visiting team.
    pub away: String,
    /// Home team.
    pub home: String,
}

/// A goal scored in a game.
///
/// `time` is the time *elapsed* in `period` when the goal was scored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "GoalRepr")]
pub struct Goal {
    /// Team that scored.
    pub team: String,
    /// Period the goal was scored in.
    pub period: Period,
    /// Elapsed time within the period.
    pub time: GameTime,
    /// Scorer's name, if reported.
    pub scorer: Option<String>,
    /// Assisting players, if reported.
    pub assists: Vec<String>,
    /// Strength label such as "PPG" or "SHG".
    pub strength: Option<String>,
    /// Whether the goal went into an empty net.
    pub empty_net: bool,
}

impl Goal {
    /// Create a goal with no scorer metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::SecondOutOfRange`] if `second >= 60`.
    pub fn new(team: &str, period: Period, minute: u8, second: u8) -> Result<Self, ParseError> {
        Ok(Self {
            team: team.to_owned(),
            period,
            time: GameTime::new(minute, second)?,
            scorer: None,
            assists: Vec::new(),
            strength: None,
            empty_net: false,
        })
    }

    /// Whether the goal is a shootout attempt rather than a game goal.
    pub const fn is_shootout(&self) -> bool {
        matches!(self.period, Period::Shootout)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoalRepr {
    team: String,
    period: Period,
    #[serde(default)]
    min: u8,
    #[serde(default)]
    sec: u8,
    #[serde(default)]
    scorer: Option<String>,
    #[serde(default)]
    assists: Vec<String>,
    #[serde(default)]
    strength: Option<String>,
    #[serde(default)]
    empty_net: bool,
}

impl TryFrom<GoalRepr> for Goal {
    type Error = ParseError;

    fn try_from(repr: GoalRepr) -> Result<Self, Self::Error> {
        Ok(Self {
            team: repr.team,
            period: repr.period,
            time: GameTime::new(repr.min, repr.sec)?,
            scorer: repr.scorer,
            assists: repr.assists,
            strength: repr.strength,
            empty_net: repr.empty_net,
        })
    }
}

/// Time remaining in the current period of a live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "TimeRemainingRepr")]
pub enum TimeRemaining {
    /// The clock is running with this much time left.
    Clock(GameTime),
    /// The period has ended (intermission or awaiting the next period).
    End,
}

impl TimeRemaining {
    /// Remaining time, `None` once the period is over.
    pub fn remaining(self) -> Option<GameTime> {
        match self {
            Self::Clock(time) if time != GameTime::ZERO => Some(time),
            Self::Clock(_) | Self::End => None,
        }
    }
}

impl FromStr for TimeRemaining {
    type Err = ParseError;

    /// Parse "MM:SS", ":SS" or "END".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("END") {
            return Ok(Self::End);
        }
        let malformed = || ParseError::MalformedTime(s.to_owned());
        let (minute, second) = text.split_once(':').ok_or_else(malformed)?;
        let minute = if minute.is_empty() {
            0
        } else {
            minute.parse::<u8>().map_err(|_err| malformed())?
        };
        let second = second.parse::<u8>().map_err(|_err| malformed())?;
        Ok(Self::Clock(GameTime::new(minute, second)?))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimeRemainingRepr {
    Text(String),
    Structured {
        #[serde(default)]
        min: Option<u8>,
        #[serde(default)]
        sec: Option<u8>,
        #[serde(default)]
        pretty: Option<String>,
    },
}

impl TryFrom<TimeRemainingRepr> for TimeRemaining {
    type Error = ParseError;

    fn try_from(repr: TimeRemainingRepr) -> Result<Self, Self::Error> {
        match repr {
            TimeRemainingRepr::Text(text) => text.parse(),
            TimeRemainingRepr::Structured { pretty, .. }
                if pretty.as_deref().is_some_and(|p| p.trim().eq_ignore_ascii_case("END")) =>
            {
                Ok(Self::End)
            }
            TimeRemainingRepr::Structured {
                min: Some(minute),
                sec: Some(second),
                ..
            } => Ok(Self::Clock(GameTime::new(minute, second)?)),
            TimeRemainingRepr::Structured {
                pretty: Some(pretty),
                ..
            } => pretty.parse(),
            TimeRemainingRepr::Structured { .. } => {
                Err(ParseError::MalformedTime("{}".to_owned()))
            }
        }
    }
}

/// Live progress of a game in play.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Current period number as reported by the provider (4 for the
    /// regular-season overtime, 5 for its shootout).
    pub current_period: u8,
    /// Display label of the current period ("1st", "OT", "SO", ...).
    #[serde(default)]
    pub current_period_ordinal: String,
    /// Time left in the current period.
    pub current_period_time_remaining: TimeRemaining,
}

impl Progress {
    /// Resolve the current period.
    ///
    /// Regular-season games in overtime or a shootout report those by
    /// label; playoff overtimes are numbered and stay numeric.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownPeriod`] if the period number is 0.
    pub fn period(&self, is_playoff_game: bool) -> Result<Period, ParseError> {
        match self.current_period_ordinal.trim() {
            "OT" if !is_playoff_game => Ok(Period::Overtime),
            "SO" if !is_playoff_game => Ok(Period::Shootout),
            _ => Period::from_number(self.current_period),
        }
    }
}

/// State of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "StatusRepr")]
pub enum GameStatus {
    /// Scheduled, postponed, or otherwise not under way.
    #[default]
    NotStarted,
    /// In play. Progress may be missing from the provider's record.
    Live(Option<Progress>),
    /// Final.
    Finished,
}

#[derive(Deserialize)]
struct StatusRepr {
    state: String,
    #[serde(default)]
    progress: Option<Progress>,
}

impl TryFrom<StatusRepr> for GameStatus {
    type Error = ParseError;

    fn try_from(repr: StatusRepr) -> Result<Self, Self::Error> {
        match repr.state.to_ascii_uppercase().as_str() {
            "PREVIEW" | "POSTPONED" | "SCHEDULED" => Ok(Self::NotStarted),
            "LIVE" => Ok(Self::Live(repr.progress)),
            "FINAL" => Ok(Self::Finished),
            _ => Err(ParseError::UnknownGameState(repr.state)),
        }
    }
}

/// Playoff series block of a game.
///
/// Only its presence matters here: it marks a playoff game, which numbers
/// its overtimes and never goes to a shootout. The series standing itself
/// is left to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlayoffSeries {}

/// Pre-game metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreGameStats {
    /// Present only for playoff games.
    #[serde(default)]
    pub playoff_series: Option<PlayoffSeries>,
}

/// One game of the score snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// The two teams.
    pub teams: Teams,
    /// Goals in the order the provider listed them.
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Game state and live progress.
    #[serde(default)]
    pub status: GameStatus,
    /// Pre-game metadata.
    #[serde(default)]
    pub pre_game_stats: Option<PreGameStats>,
}

impl Game {
    /// The playoff series this game belongs to, if any.
    pub fn playoff_series(&self) -> Option<&PlayoffSeries> {
        self.pre_game_stats
            .as_ref()
            .and_then(|stats| stats.playoff_series.as_ref())
    }

    /// Whether this is a playoff game (numbered overtimes, no shootout).
    pub fn is_playoff_game(&self) -> bool {
        self.playoff_series().is_some()
    }

    /// Live progress, if the game is in play and reported it.
    pub const fn progress(&self) -> Option<&Progress> {
        match &self.status {
            GameStatus::Live(progress) => progress.as_ref(),
            GameStatus::NotStarted | GameStatus::Finished => None,
        }
    }
}

/// Date of a score snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnapshotDate {
    /// Calendar date of the games.
    pub raw: NaiveDate,
    /// Human-readable date supplied by the provider.
    #[serde(default)]
    pub pretty: Option<String>,
}

/// A full response from the score provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScoreSnapshot {
    /// Date of the games, if reported.
    #[serde(default)]
    pub date: Option<SnapshotDate>,
    /// All games of the day.
    #[serde(default)]
    pub games: Vec<Game>,
}

impl ScoreSnapshot {
    /// Parse a snapshot from the provider's JSON.
    ///
    /// # Errors
    ///
    /// Returns the JSON error, which wraps any [`ParseError`] raised while
    /// normalizing periods, times or states.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
