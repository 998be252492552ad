//! Singles/doubles classification
//!
//! The archive has no explicit doubles flag. Doubles teams are stored as
//! players whose display name joins both partners with `/`, so a match is
//! classified by looking at the names of its participants.

use crate::pipeline::dates::DatedGame;
use crate::types::{MatchKind, PlayerId, PlayerRecord};
use std::collections::HashMap;

/// Separator between partner names in a doubles team name
pub const PAIRING_SEPARATOR: char = '/';

/// Player id to display name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDirectory {
    names: HashMap<PlayerId, String>,
}

impl PlayerDirectory {
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        Self {
            names: records
                .into_iter()
                .filter_map(|p| p.name.map(|name| (p.id, name)))
                .collect(),
        }
    }

    pub fn name(&self, id: PlayerId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// True when the player's name denotes a doubles pairing.
    /// Players without a name are treated as singles players.
    pub fn is_pairing(&self, id: PlayerId) -> bool {
        self.name(id)
            .is_some_and(|name| name.contains(PAIRING_SEPARATOR))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Keep the games matching `kind`. Singles drops games whose first player is
/// a pairing; doubles keeps games whose second player is a pairing.
pub fn filter_kind(
    games: Vec<DatedGame>,
    players: &PlayerDirectory,
    kind: MatchKind,
) -> Vec<DatedGame> {
    match kind {
        MatchKind::Singles => games
            .into_iter()
            .filter(|g| !players.is_pairing(g.game.player1))
            .collect(),
        MatchKind::Doubles => games
            .into_iter()
            .filter(|g| players.is_pairing(g.game.player2))
            .collect(),
        MatchKind::All => games,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::StagedGame;

    fn create_test_directory() -> PlayerDirectory {
        PlayerDirectory::new(vec![
            PlayerRecord { id: 1, name: Some("Federer R.".to_string()) },
            PlayerRecord { id: 2, name: Some("Nadal R.".to_string()) },
            PlayerRecord { id: 3, name: Some("Bryan B./Bryan M.".to_string()) },
            PlayerRecord { id: 4, name: Some("Mahut N./Herbert P.".to_string()) },
            PlayerRecord { id: 5, name: None },
        ])
    }

    fn dated(player1: PlayerId, player2: PlayerId) -> DatedGame {
        DatedGame {
            game: StagedGame {
                player1,
                player2,
                tournament: 1,
                round: None,
                date: None,
                surface: None,
                tournament_date: None,
            },
            resolved: None,
            day: None,
        }
    }

    fn pairs(games: &[DatedGame]) -> Vec<(PlayerId, PlayerId)> {
        games.iter().map(|g| (g.game.player1, g.game.player2)).collect()
    }

    #[test]
    fn test_directory_lookup() {
        let directory = create_test_directory();
        assert_eq!(directory.len(), 4);
        assert_eq!(directory.name(1), Some("Federer R."));
        assert!(directory.is_pairing(3));
        assert!(!directory.is_pairing(1));
        assert!(!directory.is_pairing(5));
        assert!(!directory.is_pairing(99));
    }

    #[test]
    fn test_singles_filter_checks_first_player() {
        let games = vec![dated(1, 2), dated(3, 4), dated(5, 99), dated(2, 3)];
        let kept = filter_kind(games, &create_test_directory(), MatchKind::Singles);
        assert_eq!(pairs(&kept), vec![(1, 2), (5, 99), (2, 3)]);
    }

    #[test]
    fn test_doubles_filter_checks_second_player() {
        let games = vec![dated(1, 2), dated(3, 4), dated(4, 1), dated(2, 3)];
        let kept = filter_kind(games, &create_test_directory(), MatchKind::Doubles);
        assert_eq!(pairs(&kept), vec![(3, 4), (2, 3)]);
    }

    #[test]
    fn test_all_is_unfiltered() {
        let games = vec![dated(1, 2), dated(3, 4)];
        let kept = filter_kind(games, &create_test_directory(), MatchKind::All);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_empty_directory_keeps_singles_drops_doubles() {
        let directory = PlayerDirectory::default();
        let singles = filter_kind(vec![dated(3, 4)], &directory, MatchKind::Singles);
        let doubles = filter_kind(vec![dated(3, 4)], &directory, MatchKind::Doubles);
        assert_eq!(singles.len(), 1);
        assert!(doubles.is_empty());
    }
}
