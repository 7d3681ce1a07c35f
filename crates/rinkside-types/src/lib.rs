//! Shared type definitions for the Rinkside playback generator.
//!
//! This crate is the single source of truth for the data that flows between
//! the score provider, the timeline generator, and the animation driver.
//! Input types deserialize from the provider's JSON shape; timeline types
//! serialize into the marker objects the renderer steps through.
//!
//! # Modules
//!
//! - [`period`] -- Period identifiers (regulation, overtime, shootout)
//! - [`time`] -- Minute/second pairs within a period
//! - [`game`] -- Games, goals, status and live progress from the provider
//! - [`timeline`] -- Clock states, the playback horizon and timeline entries
//! - [`error`] -- Parse failures for malformed provider data

pub mod error;
pub mod game;
pub mod period;
pub mod time;
pub mod timeline;

// Re-export all public types at crate root for convenience.
pub use error::ParseError;
pub use game::{
    Game, GameStatus, Goal, PlayoffSeries, PreGameStats, Progress, ScoreSnapshot, SnapshotDate,
    Teams, TimeRemaining,
};
pub use period::{Period, REGULATION_PERIODS};
pub use time::GameTime;
pub use timeline::{ClockState, Horizon, LAST_TENTH, TimelineEntry};
