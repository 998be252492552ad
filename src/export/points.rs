//! Point-level synthetic games
//!
//! Each point won becomes its own game with the point winner as player 1.
//! Synthetic games carry no surface or date.

use crate::types::{MatchStats, PointGame};

/// Expand match point totals into one game per point.
/// Matches with a missing or negative total are skipped.
pub fn points_games(stats: &[MatchStats]) -> Vec<PointGame> {
    let mut games = Vec::new();

    for row in stats {
        let (Some(won1), Some(won2)) = (row.points_won1, row.points_won2) else {
            continue;
        };
        if won1 < 0 || won2 < 0 {
            continue;
        }

        let point = |winner, loser| PointGame {
            player1: winner,
            player2: loser,
            surface: None,
            day: None,
            date: None,
        };
        games.extend((0..won1).map(|_| point(row.player1, row.player2)));
        games.extend((0..won2).map(|_| point(row.player2, row.player1)));
    }

    games
}
