//! Cleaning pipeline from raw matches to canonical games
//!
//! Each stage is a plain function from one record sequence to the next:
//!
//! 1. [`stage_matches`] renames raw columns into [`StagedGame`]
//! 2. [`surface::join_surfaces`] attaches the normalized surface
//! 3. [`surface::join_tournament_dates`] attaches the fallback start date
//! 4. [`dates::reconcile_dates`] resolves dates and day offsets
//! 5. [`filter::filter_kind`] applies the singles/doubles selection
//! 6. [`project`] produces [`CanonicalGame`] rows
//!
//! [`build_games`] runs them in that order.

pub mod dates;
pub mod filter;
pub mod surface;

pub use dates::{reconcile_dates, DatedGame, SOURCE_DATE_FORMAT};
pub use filter::{filter_kind, PlayerDirectory, PAIRING_SEPARATOR};
pub use surface::{join_surfaces, join_tournament_dates, TournamentIndex};

use crate::types::{CanonicalGame, MatchKind, PlayerId, RawMatch, Surface, TournamentId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A raw match under canonical names, before dates are resolved
#[derive(Debug, Clone, PartialEq)]
pub struct StagedGame {
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub tournament: TournamentId,
    pub round: Option<i64>,
    /// Match date as stored in the source
    pub date: Option<String>,
    pub surface: Option<Surface>,
    /// Tournament start date as stored in the source
    pub tournament_date: Option<String>,
}

/// Options for a cleaning pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Which matches to keep
    pub kind: MatchKind,
    /// Fall back to tournament start plus round offset for undated matches
    pub guess_dates: bool,
    /// Attach the tournament surface
    pub add_surfaces: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            kind: MatchKind::Singles,
            guess_dates: true,
            add_surfaces: true,
        }
    }
}

/// Output of a cleaning pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedGames {
    pub games: Vec<CanonicalGame>,
    /// Earliest resolved timestamp; day offsets count from here
    pub min_date: Option<NaiveDateTime>,
}

/// Rename raw match columns to canonical names
pub fn stage_matches(raw: &[RawMatch]) -> Vec<StagedGame> {
    raw.iter()
        .map(|m| StagedGame {
            player1: m.player1,
            player2: m.player2,
            tournament: m.tournament,
            round: m.round,
            date: m.date.clone(),
            surface: None,
            tournament_date: None,
        })
        .collect()
}

/// Project dated games onto the canonical column set
pub fn project(games: Vec<DatedGame>) -> Vec<CanonicalGame> {
    games
        .into_iter()
        .map(|g| CanonicalGame {
            player1: g.game.player1,
            player2: g.game.player2,
            tournament: g.game.tournament,
            surface: g.game.surface,
            day: g.day,
            date: g.resolved.map(|d| d.date()),
        })
        .collect()
}

/// Run the whole pipeline. The date anchor is taken over every raw match,
/// before the singles/doubles filter.
pub fn build_games(
    raw: &[RawMatch],
    tournaments: &TournamentIndex,
    players: &PlayerDirectory,
    options: CleanOptions,
) -> CleanedGames {
    let mut staged = stage_matches(raw);

    if options.add_surfaces {
        staged = join_surfaces(staged, tournaments);
    }
    if options.guess_dates {
        staged = join_tournament_dates(staged, tournaments);
    }

    let (dated, min_date) = reconcile_dates(staged);
    let undated = dated.iter().filter(|g| g.day.is_none()).count();
    debug!(
        "Resolved dates for {} of {} matches",
        dated.len() - undated,
        dated.len()
    );

    let filtered = filter_kind(dated, players, options.kind);

    CleanedGames {
        games: project(filtered),
        min_date,
    }
}
