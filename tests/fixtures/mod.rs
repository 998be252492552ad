//! Test fixtures and sources for integration testing

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tennis_games::error::Result;
use tennis_games::source::{InMemorySource, TableSource};
use tennis_games::types::Tour;
use tennis_games::TennisLoader;

pub const PLAYERS_ATP: &str = "\
ID_P,NAME_P,DATE_P,COUNTRY_P
10,Murray A.,05/15/87 00:00:00,GBR
20,Djokovic N.,05/22/87 00:00:00,SRB
30,Federer R.,08/08/81 00:00:00,SUI
40,Bryan B./Bryan M.,,USA
50,Lopez F./Lopez M.,,ESP
";

/// Tournament 5 starts 2024-01-01 on grass; tournament 6 has no start date
pub const TOURS_ATP: &str = "\
ID_T,NAME_T,ID_C_T,DATE_T,RANK_T
5,Queen's Club,4,01/01/24 00:00:00,2
6,Monte Carlo,2,,3
";

/// Round 4 of tournament 5 falls back to 2024-01-02
pub const GAMES_ATP: &str = "\
ID1_G,ID2_G,ID_T_G,ID_R_G,RESULT_G,DATE_G
10,20,5,4,6-4 6-4,
30,10,5,12,7-6 6-3,01/12/24 00:00:00
20,30,6,7,6-2 6-1,01/20/24 00:00:00
40,50,5,4,6-4 6-4,
10,30,6,5,6-3 6-3,
";

/// Two matches with point totals, one with a missing count
pub const STAT_ATP: &str = "\
ID1,ID2,FS_1,FS_2,TPW_1,TPW_2
1,2,30,28,3,1
3,4,25,20,,2
";

pub const GAMES_WTA: &str = "\
ID1_G,ID2_G,ID_T_G,ID_R_G,RESULT_G,DATE_G
100,200,7,4,6-1 6-1,03/03/24 00:00:00
";

pub const PLAYERS_WTA: &str = "\
ID_P,NAME_P
100,Swiatek I.
200,Sabalenka A.
";

/// An in-memory archive with both tours
pub fn create_test_source() -> InMemorySource {
    InMemorySource::new()
        .with_table("players_atp", PLAYERS_ATP)
        .with_table("games_atp", GAMES_ATP)
        .with_table("tours_atp", TOURS_ATP)
        .with_table("stat_atp", STAT_ATP)
        .with_table("players_wta", PLAYERS_WTA)
        .with_table("games_wta", GAMES_WTA)
}

pub fn create_test_loader(tour: Tour) -> TennisLoader<InMemorySource> {
    TennisLoader::with_source(create_test_source(), tour)
}

/// Source that records how many times each table was exported
#[derive(Debug, Default, Clone)]
pub struct CountingSource {
    inner: InMemorySource,
    exports: Arc<Mutex<HashMap<String, usize>>>,
}

impl CountingSource {
    pub fn new(inner: InMemorySource) -> Self {
        Self {
            inner,
            exports: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of exports of one table so far
    pub fn export_count(&self, table: &str) -> usize {
        self.exports
            .lock()
            .map(|exports| exports.get(table).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl TableSource for CountingSource {
    fn list_tables(&self) -> Result<Vec<String>> {
        self.inner.list_tables()
    }

    fn export_table(&self, name: &str) -> Result<String> {
        if let Ok(mut exports) = self.exports.lock() {
            *exports.entry(name.to_string()).or_insert(0) += 1;
        }
        self.inner.export_table(name)
    }
}
