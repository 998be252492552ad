//! Projections of the canonical games table for rating libraries
//!
//! Every exporter is a pure function of the stored games. Games without a
//! resolved date are left out of the time-ordered formats.

pub mod points;
pub mod relabel;
pub mod riix;
pub mod ttt;
pub mod whr;
pub mod write;

pub use points::points_games;
pub use relabel::{relabel, Labeled, LOSS, WIN};
pub use riix::riix_rows;
pub use ttt::ttt_games;
pub use whr::whr_lines;

use crate::types::{CanonicalGame, PlayerId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Seed used when none is given, so repeated exports agree
pub const DEFAULT_SEED: u64 = 42;

/// Options shared by the pairwise exporters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Keep only the most recent N games; 0 keeps all
    pub sample_games: usize,
    /// Swap players and record a loss for a random half of the games
    pub scramble: bool,
    /// Seed for the relabeling draw
    pub seed: u64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sample_games: 0,
            scramble: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl ExportOptions {
    /// Every game as recorded, player 1 winning
    pub fn unscrambled() -> Self {
        Self {
            scramble: false,
            ..Self::default()
        }
    }
}

/// A dated game reduced to what the pairwise formats need
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedGame {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub day: i64,
    pub date: NaiveDate,
}

/// Dated games sorted by day (stable), truncated to the last `sample_games`
pub fn timeline(games: &[CanonicalGame], sample_games: usize) -> Vec<TimedGame> {
    let mut timed: Vec<TimedGame> = games
        .iter()
        .filter_map(|g| {
            Some(TimedGame {
                winner: g.player1,
                loser: g.player2,
                day: g.day?,
                date: g.date?,
            })
        })
        .collect();

    timed.sort_by_key(|g| g.day);

    if sample_games != 0 && timed.len() > sample_games {
        let excess = timed.len() - sample_games;
        timed = timed.split_off(excess);
    }

    timed
}
