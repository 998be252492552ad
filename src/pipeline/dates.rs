//! Date reconciliation
//!
//! Every game gets a resolved timestamp when possible: the match date if it
//! parses, otherwise the tournament start plus the usual day of its round.
//! Day offsets count whole days from the earliest resolved timestamp.

use crate::lookups::round_days;
use crate::pipeline::StagedGame;
use chrono::{Duration, NaiveDateTime};

/// Format of every date column in the archive, e.g. `01/31/24 00:00:00`
pub const SOURCE_DATE_FORMAT: &str = "%m/%d/%y %H:%M:%S";

/// A staged game with its resolved timestamp and day offset
#[derive(Debug, Clone, PartialEq)]
pub struct DatedGame {
    pub game: StagedGame,
    pub resolved: Option<NaiveDateTime>,
    pub day: Option<i64>,
}

/// Parse a source date string; empty or malformed strings give `None`
pub fn parse_source_date(raw: Option<&str>) -> Option<NaiveDateTime> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, SOURCE_DATE_FORMAT).ok()
}

/// Resolved timestamp of one game
pub fn resolve_date(game: &StagedGame) -> Option<NaiveDateTime> {
    parse_source_date(game.date.as_deref()).or_else(|| {
        let start = parse_source_date(game.tournament_date.as_deref())?;
        let offset = round_days(game.round?)?;
        start.checked_add_signed(Duration::days(offset))
    })
}

/// Resolve dates for every game and anchor day offsets at the earliest one.
/// Returns the games and the anchor, `None` when nothing resolved.
pub fn reconcile_dates(games: Vec<StagedGame>) -> (Vec<DatedGame>, Option<NaiveDateTime>) {
    let resolved: Vec<Option<NaiveDateTime>> = games.iter().map(resolve_date).collect();
    let min_date = resolved.iter().flatten().min().copied();

    let dated = games
        .into_iter()
        .zip(resolved)
        .map(|(game, resolved)| {
            let day = match (resolved, min_date) {
                (Some(date), Some(min)) => Some((date - min).num_days()),
                _ => None,
            };
            DatedGame {
                game,
                resolved,
                day,
            }
        })
        .collect();

    (dated, min_date)
}
