//! Common types used throughout the loader

use crate::table::lenient_int;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Player identifier as stored in the source tables
pub type PlayerId = i64;

/// Tournament identifier as stored in the source tables
pub type TournamentId = i64;

/// Which half of the archive to read; every data table exists once per tour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tour {
    #[default]
    Atp,
    Wta,
}

impl Tour {
    /// Name of the per-tour table with the given prefix, e.g. `games_atp`
    pub fn table(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tour::Atp => write!(f, "atp"),
            Tour::Wta => write!(f, "wta"),
        }
    }
}

impl FromStr for Tour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "atp" => Ok(Tour::Atp),
            "wta" => Ok(Tour::Wta),
            other => Err(format!("unknown tour: {}", other)),
        }
    }
}

/// Singles/doubles selection applied while cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    #[default]
    Singles,
    Doubles,
    All,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Singles => write!(f, "singles"),
            MatchKind::Doubles => write!(f, "doubles"),
            MatchKind::All => write!(f, "all"),
        }
    }
}

impl FromStr for MatchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "singles" => Ok(MatchKind::Singles),
            "doubles" => Ok(MatchKind::Doubles),
            "all" => Ok(MatchKind::All),
            other => Err(format!("unknown match kind: {}", other)),
        }
    }
}

/// Reduced playing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Hard,
    Clay,
    Grass,
}

impl Surface {
    /// Small integer code used by the exported tables (0=hard, 1=clay, 2=grass)
    pub fn code(&self) -> u8 {
        match self {
            Surface::Hard => 0,
            Surface::Clay => 1,
            Surface::Grass => 2,
        }
    }
}

impl Serialize for Surface {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// One row of `games_<tour>`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMatch {
    #[serde(rename = "ID1_G")]
    pub player1: PlayerId,
    #[serde(rename = "ID2_G")]
    pub player2: PlayerId,
    #[serde(rename = "ID_T_G")]
    pub tournament: TournamentId,
    #[serde(rename = "ID_R_G", default, deserialize_with = "lenient_int")]
    pub round: Option<i64>,
    #[serde(rename = "RESULT_G")]
    pub result: Option<String>,
    #[serde(rename = "DATE_G")]
    pub date: Option<String>,
}

/// One row of `tours_<tour>`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TournamentRecord {
    #[serde(rename = "ID_T")]
    pub id: TournamentId,
    #[serde(rename = "DATE_T")]
    pub start_date: Option<String>,
    #[serde(rename = "ID_C_T", default, deserialize_with = "lenient_int")]
    pub court: Option<i64>,
}

/// One row of `players_<tour>`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "ID_P")]
    pub id: PlayerId,
    #[serde(rename = "NAME_P")]
    pub name: Option<String>,
}

/// One row of `stat_<tour>`; only the point totals are read
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchStats {
    #[serde(rename = "ID1")]
    pub player1: PlayerId,
    #[serde(rename = "ID2")]
    pub player2: PlayerId,
    #[serde(rename = "TPW_1", default, deserialize_with = "lenient_int")]
    pub points_won1: Option<i64>,
    #[serde(rename = "TPW_2", default, deserialize_with = "lenient_int")]
    pub points_won2: Option<i64>,
}

/// A cleaned game. `player1` is the winner as recorded in the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalGame {
    #[serde(rename = "P1")]
    pub player1: PlayerId,
    #[serde(rename = "P2")]
    pub player2: PlayerId,
    #[serde(rename = "Tour")]
    pub tournament: TournamentId,
    #[serde(rename = "Surface")]
    pub surface: Option<Surface>,
    /// Whole days since the earliest resolvable date in the source table
    #[serde(rename = "Day")]
    pub day: Option<i64>,
    #[serde(rename = "Date")]
    pub date: Option<NaiveDate>,
}

/// Row shape for pairwise rating libraries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiixRow {
    #[serde(rename = "P1")]
    pub player1: PlayerId,
    #[serde(rename = "P2")]
    pub player2: PlayerId,
    /// 1.0 when `player1` won, 0.0 when `player2` won
    #[serde(rename = "Result")]
    pub result: f64,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
}

/// Team-roster shaped games with a parallel list of day offsets
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TttGames {
    pub games: Vec<[Vec<PlayerId>; 2]>,
    pub days: Vec<i64>,
}

impl TttGames {
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// A single point expanded into a game; the point winner is `player1`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointGame {
    #[serde(rename = "P1")]
    pub player1: PlayerId,
    #[serde(rename = "P2")]
    pub player2: PlayerId,
    #[serde(rename = "Surface")]
    pub surface: Option<Surface>,
    #[serde(rename = "Day")]
    pub day: Option<i64>,
    #[serde(rename = "Date")]
    pub date: Option<NaiveDate>,
}
