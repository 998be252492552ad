//! Elo replay of pairwise rows

use crate::config::RatingConfig;
use crate::export::WIN;
use crate::types::{PlayerId, RiixRow};
use serde::Serialize;
use skillratings::elo::{elo, EloConfig, EloRating};
use skillratings::Outcomes;
use std::collections::HashMap;

/// Final rating of one player after a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStanding {
    pub player: PlayerId,
    pub rating: f64,
    pub games: u64,
}

/// Replay rows in order and return standings, best first
pub fn replay_elo(rows: &[RiixRow], config: &RatingConfig) -> Vec<PlayerStanding> {
    let elo_config = EloConfig { k: config.k_factor };
    let initial = EloRating {
        rating: config.initial_rating,
    };
    let mut table: HashMap<PlayerId, (EloRating, u64)> = HashMap::new();

    for row in rows {
        let (one, _) = *table.entry(row.player1).or_insert((initial, 0));
        let (two, _) = *table.entry(row.player2).or_insert((initial, 0));

        let outcome = if row.result == WIN {
            Outcomes::WIN
        } else {
            Outcomes::LOSS
        };
        let (new_one, new_two) = elo(&one, &two, &outcome, &elo_config);

        if let Some(entry) = table.get_mut(&row.player1) {
            *entry = (new_one, entry.1 + 1);
        }
        if let Some(entry) = table.get_mut(&row.player2) {
            *entry = (new_two, entry.1 + 1);
        }
    }

    let mut standings: Vec<PlayerStanding> = table
        .into_iter()
        .map(|(player, (rating, games))| PlayerStanding {
            player,
            rating: rating.rating,
            games,
        })
        .collect();

    standings.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.player.cmp(&b.player))
    });

    standings
}
