//! Team-roster shaped games for TrueSkill Through Time

use crate::export::{relabel, timeline, ExportOptions};
use crate::types::{CanonicalGame, TttGames};

/// Games as `[[p1], [p2]]` with a parallel list of day offsets, in day order
pub fn ttt_games(games: &[CanonicalGame], options: &ExportOptions) -> TttGames {
    let timed = timeline(games, options.sample_games);
    let labeled = relabel(&timed, options.scramble, options.seed);

    let mut out = TttGames::default();
    for g in labeled {
        out.games.push([vec![g.player1], vec![g.player2]]);
        out.days.push(g.day);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::{game, season};
    use crate::export::riix_rows;

    #[test]
    fn test_ttt_shape() {
        let games = vec![game(1, 2, Some(7)), game(3, 4, Some(2)), game(5, 6, None)];
        let ttt = ttt_games(&games, &ExportOptions::unscrambled());

        assert_eq!(ttt.len(), 2);
        assert_eq!(ttt.games[0], [vec![3], vec![4]]);
        assert_eq!(ttt.games[1], [vec![1], vec![2]]);
        assert_eq!(ttt.days, vec![2, 7]);

        let json = serde_json::to_string(&ttt).unwrap();
        assert_eq!(json, r#"{"games":[[[3],[4]],[[1],[2]]],"days":[2,7]}"#);
    }

    #[test]
    fn test_ttt_matches_riix_relabeling() {
        let games = season(100);
        let options = ExportOptions {
            sample_games: 40,
            scramble: true,
            seed: 11,
        };
        let ttt = ttt_games(&games, &options);
        let rows = riix_rows(&games, &options);

        assert_eq!(ttt.len(), 40);
        assert!(ttt.days.windows(2).all(|w| w[0] <= w[1]));
        for (pair, row) in ttt.games.iter().zip(&rows) {
            assert_eq!(pair[0], vec![row.player1]);
            assert_eq!(pair[1], vec![row.player2]);
        }
    }
}
