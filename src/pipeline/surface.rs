//! Tournament joins: surface and start date

use crate::lookups::surface_for_court;
use crate::pipeline::StagedGame;
use crate::types::{TournamentId, TournamentRecord};
use std::collections::HashMap;

/// Tournaments keyed by id
#[derive(Debug, Clone, Default)]
pub struct TournamentIndex {
    by_id: HashMap<TournamentId, TournamentRecord>,
}

impl TournamentIndex {
    pub fn new(records: Vec<TournamentRecord>) -> Self {
        Self {
            by_id: records.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    pub fn get(&self, id: TournamentId) -> Option<&TournamentRecord> {
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Attach the normalized surface of each game's tournament.
/// Unknown tournaments and unmapped court codes give no surface.
pub fn join_surfaces(games: Vec<StagedGame>, tournaments: &TournamentIndex) -> Vec<StagedGame> {
    games
        .into_iter()
        .map(|mut game| {
            game.surface = tournaments
                .get(game.tournament)
                .and_then(|t| t.court)
                .and_then(surface_for_court);
            game
        })
        .collect()
}

/// Attach the tournament start date used as the fallback match date
pub fn join_tournament_dates(
    games: Vec<StagedGame>,
    tournaments: &TournamentIndex,
) -> Vec<StagedGame> {
    games
        .into_iter()
        .map(|mut game| {
            game.tournament_date = tournaments
                .get(game.tournament)
                .and_then(|t| t.start_date.clone());
            game
        })
        .collect()
}
