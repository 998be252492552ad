//! The games loader
//!
//! [`TennisLoader`] owns the table cache, the player directory and the current
//! canonical games table. Building the table and projecting it are separate
//! steps: [`TennisLoader::clean_games`] replaces the stored games, and the
//! `to_*_format` exporters read whatever is stored.

use crate::cache::TableCache;
use crate::error::{LoaderError, Result};
use crate::export::{self, ExportOptions};
use crate::pipeline::{self, CleanOptions, PlayerDirectory, TournamentIndex};
use crate::source::{MdbToolsSource, TableSource};
use crate::table::Table;
use crate::types::{
    CanonicalGame, MatchKind, MatchStats, PlayerRecord, PointGame, RawMatch, RiixRow, Tour,
    TournamentRecord, TttGames,
};
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::{info, warn};

/// Tables loaded when a loader is created
pub const DEFAULT_TABLES: [&str; 8] = [
    "players_atp",
    "games_atp",
    "tours_atp",
    "players_wta",
    "games_wta",
    "tours_wta",
    "courts",
    "rounds",
];

/// Loads an archive, builds the canonical games table and exports it
#[derive(Debug)]
pub struct TennisLoader<S: TableSource = MdbToolsSource> {
    cache: TableCache<S>,
    tour: Tour,
    players: Option<PlayerDirectory>,
    games: Option<Vec<CanonicalGame>>,
    min_date: Option<NaiveDateTime>,
}

impl TennisLoader<MdbToolsSource> {
    /// Open an ATP archive with `mdbtools`. Fails if the file does not exist.
    pub fn new(path: impl AsRef<Path>, password: &str) -> Result<Self> {
        Self::open(path, password, Tour::Atp)
    }

    /// Open an archive for the given tour
    pub fn open(path: impl AsRef<Path>, password: &str, tour: Tour) -> Result<Self> {
        let source = MdbToolsSource::new(path, password)?;
        Ok(Self::with_source(source, tour))
    }
}

impl<S: TableSource> TennisLoader<S> {
    /// Create a loader over any source, warming [`DEFAULT_TABLES`]
    pub fn with_source(source: S, tour: Tour) -> Self {
        Self::with_tables(source, tour, &DEFAULT_TABLES)
    }

    /// Create a loader over any source, warming the given tables.
    /// A missing player table is logged, not fatal.
    pub fn with_tables<N: AsRef<str>>(source: S, tour: Tour, tables: &[N]) -> Self {
        let mut loader = Self {
            cache: TableCache::new(source),
            tour,
            players: None,
            games: None,
            min_date: None,
        };

        loader.load_tables(tables);
        if let Err(e) = loader.load_players() {
            warn!("Player directory unavailable: {}", e);
        }

        loader
    }

    pub fn tour(&self) -> Tour {
        self.tour
    }

    /// Table names available at the source
    pub fn list_tables(&self) -> Vec<String> {
        self.cache.list_tables()
    }

    /// Eagerly load tables; failures are logged and skipped
    pub fn load_tables<N: AsRef<str>>(&mut self, names: &[N]) {
        self.cache.load_tables(names);
    }

    /// Get a table, loading it on first request
    pub fn get_table(&mut self, name: &str) -> Option<&Table> {
        self.cache.get_table(name)
    }

    /// Names of the tables currently cached
    pub fn loaded_tables(&self) -> Vec<&str> {
        self.cache.loaded_tables()
    }

    /// Decode a table that must exist
    fn required<T: serde::de::DeserializeOwned>(&mut self, name: &str) -> Result<Vec<T>> {
        match self.cache.get_table(name) {
            Some(table) => Ok(table.records()),
            None => Err(LoaderError::TableNotLoaded {
                table: name.to_string(),
            }
            .into()),
        }
    }

    /// (Re)build the player directory from `players_<tour>`
    pub fn load_players(&mut self) -> Result<&PlayerDirectory> {
        let records: Vec<PlayerRecord> = self.required(&self.tour.table("players"))?;
        let directory = PlayerDirectory::new(records);
        info!("Loaded {} player names", directory.len());
        Ok(&*self.players.insert(directory))
    }

    /// The player directory; fails if the player table never loaded
    pub fn players(&self) -> Result<&PlayerDirectory> {
        self.players.as_ref().ok_or_else(|| {
            LoaderError::TableNotLoaded {
                table: self.tour.table("players"),
            }
            .into()
        })
    }

    /// Build the canonical games table and store it, replacing the previous one
    pub fn clean_games(&mut self, options: CleanOptions) -> Result<&[CanonicalGame]> {
        let raw: Vec<RawMatch> = self.required(&self.tour.table("games"))?;

        let tours_name = self.tour.table("tours");
        let tournaments = if options.add_surfaces || options.guess_dates {
            match self.cache.get_table(&tours_name) {
                Some(table) => TournamentIndex::new(table.records::<TournamentRecord>()),
                None => {
                    warn!(
                        "Table {} unavailable; surfaces and fallback dates will be empty",
                        tours_name
                    );
                    TournamentIndex::default()
                }
            }
        } else {
            TournamentIndex::default()
        };

        if self.players.is_none() && options.kind != MatchKind::All {
            self.load_players()?;
        }
        let empty = PlayerDirectory::default();
        let players = self.players.as_ref().unwrap_or(&empty);

        let cleaned = pipeline::build_games(&raw, &tournaments, players, options);
        info!(
            "Built {} {} games from {} matches",
            cleaned.games.len(),
            options.kind,
            raw.len()
        );

        self.min_date = cleaned.min_date;
        Ok(self.games.insert(cleaned.games).as_slice())
    }

    /// The stored games; fails before [`Self::clean_games`] has run
    pub fn games(&self) -> Result<&[CanonicalGame]> {
        self.games
            .as_deref()
            .ok_or_else(|| LoaderError::GamesNotBuilt.into())
    }

    /// Anchor date of the stored games' day offsets
    pub fn min_date(&self) -> Option<NaiveDateTime> {
        self.min_date
    }

    /// Whole-History Rating lines `"<p1> <p2> B <day>"`
    pub fn to_whr_format(&self) -> Result<Vec<String>> {
        Ok(export::whr_lines(self.games()?))
    }

    /// `(P1, P2, Result, Date)` rows for pairwise rating libraries
    pub fn to_riix_format(&self, options: &ExportOptions) -> Result<Vec<RiixRow>> {
        Ok(export::riix_rows(self.games()?, options))
    }

    /// `[[p1], [p2]]` games and day offsets for TrueSkill Through Time
    pub fn to_ttt_format(&self, options: &ExportOptions) -> Result<TttGames> {
        Ok(export::ttt_games(self.games()?, options))
    }

    /// One synthetic game per point from `stat_<tour>`
    pub fn create_points_games(&mut self) -> Result<Vec<PointGame>> {
        let stats: Vec<MatchStats> = self.required(&self.tour.table("stat"))?;
        let games = export::points_games(&stats);
        info!(
            "Expanded {} matches into {} point games",
            stats.len(),
            games.len()
        );
        Ok(games)
    }
}
