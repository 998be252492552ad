//! Whole-History Rating input lines

use crate::types::CanonicalGame;

/// Result marker meaning the first player won
const BLACK_WINS: &str = "B";

/// One `"<p1> <p2> B <day>"` line per dated game, ordered by day
pub fn whr_lines(games: &[CanonicalGame]) -> Vec<String> {
    let mut dated: Vec<(&CanonicalGame, i64)> = games
        .iter()
        .filter_map(|g| g.day.map(|day| (g, day)))
        .collect();
    dated.sort_by_key(|(_, day)| *day);

    dated
        .into_iter()
        .map(|(g, day)| format!("{} {} {} {}", g.player1, g.player2, BLACK_WINS, day))
        .collect()
}
