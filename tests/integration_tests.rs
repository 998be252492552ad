//! Integration tests for the tennis games loader
//!
//! These tests drive the loader end to end over an in-memory archive:
//! - Table warming and memoization
//! - Canonical games building (dates, surfaces, singles/doubles)
//! - Every export format
//! - Precondition errors

mod fixtures;

use chrono::NaiveDate;
use tennis_games::export::write::{write_csv, write_json, write_lines};
use tennis_games::export::{ExportOptions, LOSS, WIN};
use tennis_games::rating::replay_elo;
use tennis_games::{
    CleanOptions, LoaderError, MatchKind, Surface, TennisLoader, Tour, DEFAULT_TABLES,
};

use fixtures::{create_test_loader, create_test_source, CountingSource};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn assert_precondition(err: &anyhow::Error) {
    let loader_err = err
        .downcast_ref::<LoaderError>()
        .unwrap_or_else(|| panic!("not a loader error: {}", err));
    assert!(loader_err.is_precondition(), "{}", loader_err);
}

#[test]
fn test_singles_games_from_archive() {
    let mut loader = create_test_loader(Tour::Atp);
    let games = loader.clean_games(CleanOptions::default()).unwrap().to_vec();

    // The doubles match is dropped, the undated one kept without a day
    assert_eq!(games.len(), 4);
    assert!(games.iter().all(|g| g.player1 != 40));

    // Round 4 with no match date falls back to the tournament start plus one day
    let fallback = &games[0];
    assert_eq!((fallback.player1, fallback.player2), (10, 20));
    assert_eq!(fallback.date, Some(ymd(2024, 1, 2)));
    assert_eq!(fallback.day, Some(0));
    assert_eq!(fallback.surface, Some(Surface::Grass));

    assert_eq!(games[1].day, Some(10));
    assert_eq!(games[2].day, Some(18));
    assert_eq!(games[2].surface, Some(Surface::Clay));

    // Tournament 6 has no start date, so its undated match stays unresolved
    assert_eq!(games[3].date, None);
    assert_eq!(games[3].day, None);

    assert_eq!(
        loader.min_date(),
        ymd(2024, 1, 2).and_hms_opt(0, 0, 0)
    );
}

#[test]
fn test_doubles_and_all_kinds() {
    let mut loader = create_test_loader(Tour::Atp);

    let doubles = CleanOptions {
        kind: MatchKind::Doubles,
        ..CleanOptions::default()
    };
    let games = loader.clean_games(doubles).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!((games[0].player1, games[0].player2), (40, 50));
    assert_eq!(games[0].day, Some(0));

    let all = CleanOptions {
        kind: MatchKind::All,
        ..CleanOptions::default()
    };
    assert_eq!(loader.clean_games(all).unwrap().len(), 5);
}

#[test]
fn test_cleaning_without_joins() {
    let mut loader = create_test_loader(Tour::Atp);
    let options = CleanOptions {
        kind: MatchKind::Singles,
        guess_dates: false,
        add_surfaces: false,
    };
    let games = loader.clean_games(options).unwrap();

    assert!(games.iter().all(|g| g.surface.is_none()));
    let days: Vec<Option<i64>> = games.iter().map(|g| g.day).collect();
    // Anchor is now the earliest direct date, 2024-01-12
    assert_eq!(days, vec![None, Some(0), Some(8), None]);
}

#[test]
fn test_whr_export() {
    let mut loader = create_test_loader(Tour::Atp);
    loader.clean_games(CleanOptions::default()).unwrap();

    let lines = loader.to_whr_format().unwrap();
    assert_eq!(lines, vec!["10 20 B 0", "30 10 B 10", "20 30 B 18"]);

    let mut buf = Vec::new();
    write_lines(&mut buf, &lines).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "10 20 B 0\n30 10 B 10\n20 30 B 18\n"
    );
}

#[test]
fn test_riix_export_unscrambled() {
    let mut loader = create_test_loader(Tour::Atp);
    loader.clean_games(CleanOptions::default()).unwrap();

    let rows = loader.to_riix_format(&ExportOptions::unscrambled()).unwrap();
    let pairs: Vec<(i64, i64)> = rows.iter().map(|r| (r.player1, r.player2)).collect();
    assert_eq!(pairs, vec![(10, 20), (30, 10), (20, 30)]);
    assert!(rows.iter().all(|r| r.result == WIN));
    assert_eq!(rows[0].date, ymd(2024, 1, 2));

    let mut buf = Vec::new();
    write_csv(&mut buf, &rows).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("P1,P2,Result,Date\n10,20,1.0,2024-01-02\n"));
}

#[test]
fn test_riix_export_scrambled_keeps_outcomes() {
    let mut loader = create_test_loader(Tour::Atp);
    loader.clean_games(CleanOptions::default()).unwrap();

    let plain = loader.to_riix_format(&ExportOptions::unscrambled()).unwrap();
    let options = ExportOptions::default();
    let scrambled = loader.to_riix_format(&options).unwrap();
    assert_eq!(scrambled, loader.to_riix_format(&options).unwrap());

    for (before, after) in plain.iter().zip(&scrambled) {
        assert_eq!(before.date, after.date);
        if after.result == WIN {
            assert_eq!((after.player1, after.player2), (before.player1, before.player2));
        } else {
            assert_eq!(after.result, LOSS);
            assert_eq!((after.player1, after.player2), (before.player2, before.player1));
        }
    }
}

#[test]
fn test_sampling_keeps_most_recent() {
    let mut loader = create_test_loader(Tour::Atp);
    loader.clean_games(CleanOptions::default()).unwrap();

    let options = ExportOptions {
        sample_games: 2,
        ..ExportOptions::unscrambled()
    };
    let rows = loader.to_riix_format(&options).unwrap();
    let pairs: Vec<(i64, i64)> = rows.iter().map(|r| (r.player1, r.player2)).collect();
    assert_eq!(pairs, vec![(30, 10), (20, 30)]);
}

#[test]
fn test_ttt_export() {
    let mut loader = create_test_loader(Tour::Atp);
    loader.clean_games(CleanOptions::default()).unwrap();

    let ttt = loader.to_ttt_format(&ExportOptions::unscrambled()).unwrap();
    assert_eq!(ttt.len(), 3);
    assert_eq!(ttt.games[0], [vec![10], vec![20]]);
    assert_eq!(ttt.days, vec![0, 10, 18]);

    let mut buf = Vec::new();
    write_json(&mut buf, &ttt).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["games"][1][0][0], 30);
    assert_eq!(value["days"][2], 18);
}

#[test]
fn test_points_games() {
    let mut loader = create_test_loader(Tour::Atp);
    let points = loader.create_points_games().unwrap();

    // 3 + 1 points from the first match; the second has a missing total
    assert_eq!(points.len(), 4);
    let ones = points
        .iter()
        .filter(|p| (p.player1, p.player2) == (1, 2))
        .count();
    let twos = points
        .iter()
        .filter(|p| (p.player1, p.player2) == (2, 1))
        .count();
    assert_eq!((ones, twos), (3, 1));
    assert!(points
        .iter()
        .all(|p| p.surface.is_none() && p.day.is_none() && p.date.is_none()));
}

#[test]
fn test_wta_tour_without_tournaments() {
    let mut loader = create_test_loader(Tour::Wta);
    assert_eq!(loader.players().unwrap().name(100), Some("Swiatek I."));

    let games = loader.clean_games(CleanOptions::default()).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].surface, None);
    assert_eq!(games[0].day, Some(0));

    // No stat_wta table in the archive
    assert_precondition(&loader.create_points_games().unwrap_err());
}

#[test]
fn test_preconditions() {
    let loader = create_test_loader(Tour::Atp);
    assert_precondition(&loader.games().unwrap_err());
    assert_precondition(&loader.to_whr_format().unwrap_err());
    assert_precondition(&loader.to_riix_format(&ExportOptions::default()).unwrap_err());
    assert_precondition(&loader.to_ttt_format(&ExportOptions::default()).unwrap_err());

    let source = tennis_games::InMemorySource::new().with_table("players_atp", "ID_P,NAME_P\n");
    let mut empty = TennisLoader::with_source(source, Tour::Atp);
    assert_precondition(&empty.clean_games(CleanOptions::default()).unwrap_err());
}

#[test]
fn test_tables_are_memoized() {
    let source = CountingSource::new(create_test_source());
    let mut loader = TennisLoader::with_tables(source.clone(), Tour::Atp, &["games_atp"]);
    assert_eq!(source.export_count("games_atp"), 1);
    assert_eq!(source.export_count("players_atp"), 1);

    loader.clean_games(CleanOptions::default()).unwrap();
    loader.clean_games(CleanOptions::default()).unwrap();
    assert_eq!(source.export_count("games_atp"), 1);
    assert_eq!(source.export_count("tours_atp"), 1);

    assert!(loader.get_table("stat_atp").is_some());
    assert!(loader.get_table("stat_atp").is_some());
    assert_eq!(source.export_count("stat_atp"), 1);
}

#[test]
fn test_default_tables_warm_what_exists() {
    let loader = create_test_loader(Tour::Atp);
    let loaded = loader.loaded_tables();

    // stat_atp is not part of the warm set
    assert!(!loaded.contains(&"stat_atp"));
    for table in loaded {
        assert!(DEFAULT_TABLES.contains(&table), "{}", table);
    }
}

#[test]
fn test_elo_replay_from_export() {
    let mut loader = create_test_loader(Tour::Atp);
    loader.clean_games(CleanOptions::default()).unwrap();

    let rows = loader.to_riix_format(&ExportOptions::unscrambled()).unwrap();
    let standings = replay_elo(&rows, &Default::default());

    assert_eq!(standings.len(), 3);
    let total: u64 = standings.iter().map(|s| s.games).sum();
    assert_eq!(total, 6);
    let sum: f64 = standings.iter().map(|s| s.rating).sum();
    assert!((sum - 3000.0).abs() < 1e-6);
}
