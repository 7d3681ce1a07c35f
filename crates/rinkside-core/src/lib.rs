//! Playback timeline generation for replaying concurrent hockey games.
//!
//! This crate turns a score snapshot into the flat sequence of clock states
//! an animation driver steps through, replaying every game in lockstep up
//! to the furthest point any of them has reached.
//!
//! # Modules
//!
//! - [`clock`] -- Remaining/elapsed time conversion and the event order
//!   used to decide whether the clock has passed a goal.
//! - [`horizon`] -- Per-game and global horizon resolution, plus the
//!   sorted goal list the timeline is paced around.
//! - [`period`] -- Clock ticks of a single period.
//! - [`density`] -- Goal-density expansion that dwells on goals.
//! - [`timeline`] -- [`TimelineGenerator`] and the [`Timeline`] it builds.
//! - [`config`] -- Pacing multipliers loaded from YAML.
//! - [`scoreboard`] -- Goals and scores visible at a timeline entry.
//!
//! [`TimelineGenerator`]: timeline::TimelineGenerator
//! [`Timeline`]: timeline::Timeline

pub mod clock;
pub mod config;
pub mod density;
pub mod horizon;
pub mod period;
pub mod scoreboard;
pub mod timeline;
