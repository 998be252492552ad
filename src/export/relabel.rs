//! Random relabeling of winner/loser ordered games
//!
//! Source games always list the winner first. For a random half of the games
//! the players are swapped and the outcome becomes a loss for the new first
//! player, so models do not learn a "player 1 wins" bias.

use crate::export::TimedGame;
use crate::types::PlayerId;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Outcome value when player 1 won
pub const WIN: f64 = 1.0;
/// Outcome value when player 1 lost
pub const LOSS: f64 = 0.0;

/// A game with its players in output order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Labeled {
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub result: f64,
    pub day: i64,
    pub date: NaiveDate,
    pub swapped: bool,
}

impl Labeled {
    fn from_timed(game: &TimedGame, swapped: bool) -> Self {
        let (player1, player2, result) = if swapped {
            (game.loser, game.winner, LOSS)
        } else {
            (game.winner, game.loser, WIN)
        };
        Self {
            player1,
            player2,
            result,
            day: game.day,
            date: game.date,
            swapped,
        }
    }
}

/// Label games in order. With `scramble`, each game is swapped with
/// probability one half, drawn from an RNG seeded with `seed`.
pub fn relabel(games: &[TimedGame], scramble: bool, seed: u64) -> Vec<Labeled> {
    if !scramble {
        return games.iter().map(|g| Labeled::from_timed(g, false)).collect();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    games
        .iter()
        .map(|g| Labeled::from_timed(g, rng.gen_bool(0.5)))
        .collect()
}
