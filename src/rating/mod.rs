//! Rating replay over exported games
//!
//! Feeds pairwise rows through the Elo implementation of the skillratings
//! crate. This is a consumer of the export formats, used to sanity check an
//! export end to end.

pub mod elo;

pub use elo::{replay_elo, PlayerStanding};
