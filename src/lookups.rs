//! Fixed mapping tables used while cleaning

use crate::types::Surface;

/// Days after the tournament start on which a round is usually played.
/// Indexed by round code.
const ROUND_DAYS: [i64; 21] = [
    0, 0, 0, 0, 1, 3, 5, 7, 7, 9, 10, 7, 11, 1, 2, 3, 4, 5, 6, 7, 0,
];

/// Day offset from the tournament start for a round code
pub fn round_days(round: i64) -> Option<i64> {
    usize::try_from(round)
        .ok()
        .and_then(|idx| ROUND_DAYS.get(idx))
        .copied()
}

/// Reduced surface for a court code from the `courts` table
pub fn surface_for_court(court: i64) -> Option<Surface> {
    match court {
        1 | 3 | 6 => Some(Surface::Hard),
        2 => Some(Surface::Clay),
        4 | 5 => Some(Surface::Grass),
        _ => None,
    }
}
