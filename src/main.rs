//! Main entry point for the tennis games exporter
//!
//! Opens an archive (or a directory of exported CSV tables), builds the
//! canonical games table and writes it in one of the supported formats.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tennis_games::config::AppConfig;
use tennis_games::export::write::{write_csv, write_json, write_lines};
use tennis_games::rating::replay_elo;
use tennis_games::source::{InMemorySource, MdbToolsSource, TableSource};
use tennis_games::{MatchKind, TennisLoader, Tour};
use tracing::{error, info};

/// Output format of the export
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `<p1> <p2> B <day>` lines for Whole-History Rating
    Whr,
    /// `P1,P2,Result,Date` CSV for pairwise rating libraries
    Riix,
    /// JSON games and days for TrueSkill Through Time
    Ttt,
    /// One CSV row per point won
    Points,
    /// Final Elo ratings after replaying the riix rows
    Elo,
}

/// Tennis Games Exporter - clean a results archive and export rating inputs
#[derive(Parser)]
#[command(
    name = "tennis-export",
    version,
    about = "Clean a tennis results archive and export it for rating libraries",
    long_about = "Reads the players, games and tournaments tables of a tennis results archive \
                 through mdbtools, reconciles match dates and surfaces into one canonical games \
                 table, and writes it as WHR lines, pairwise CSV, TrueSkill Through Time JSON, \
                 point-level games or replayed Elo ratings."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Archive override
    #[arg(long, value_name = "FILE", help = "Override the .mdb archive path")]
    mdb_file: Option<PathBuf>,

    /// Read CSV tables from a directory instead of an archive
    #[arg(
        long,
        value_name = "DIR",
        conflicts_with = "mdb_file",
        help = "Read <table>.csv files from a directory instead of an archive"
    )]
    tables_dir: Option<PathBuf>,

    /// Tour override
    #[arg(short, long, value_name = "TOUR", help = "Override the tour (atp, wta)")]
    tour: Option<Tour>,

    /// Match kind override
    #[arg(
        short,
        long,
        value_name = "KIND",
        help = "Override the match kind (singles, doubles, all)"
    )]
    kind: Option<MatchKind>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Whr)]
    format: Format,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE", help = "Write to a file instead of stdout")]
    output: Option<PathBuf>,

    /// Sample size override
    #[arg(
        long,
        value_name = "N",
        help = "Keep only the N most recent dated games (0 keeps all)"
    )]
    sample: Option<usize>,

    /// Keep player order as stored
    #[arg(long, help = "Do not randomize which player is listed first")]
    no_scramble: bool,

    /// Seed override
    #[arg(long, value_name = "SEED", help = "Override the relabeling seed")]
    seed: Option<u64>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// List the tables of the source and exit
    #[arg(long, help = "List the tables available at the source and exit")]
    list_tables: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without reading the source")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level.
/// Logs go to stderr so stdout stays clean for the export.
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_line_number(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Display startup banner with export settings
fn display_startup_banner(config: &AppConfig, args: &Args) {
    info!("🎾 Tennis Games Exporter v{}", tennis_games::VERSION);
    match (&args.tables_dir, &config.source.mdb_file) {
        (Some(dir), _) => info!("   Tables dir: {}", dir.display()),
        (None, Some(path)) => info!("   Archive: {}", path.display()),
        (None, None) => info!("   Archive: <not set>"),
    }
    info!("   Tour: {}", config.source.tour);
    info!("   Match kind: {}", config.cleaning.kind);
    info!("   Format: {:?}", args.format);
    info!(
        "   Sample: {}",
        match config.export.sample_games {
            0 => "all".to_string(),
            n => n.to_string(),
        }
    );
    info!(
        "   Scramble: {} (seed {})",
        config.export.scramble, config.export.seed
    );
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(path) = &args.mdb_file {
        config.source.mdb_file = Some(path.clone());
    }
    if let Some(tour) = args.tour {
        config.source.tour = tour;
    }
    if let Some(kind) = args.kind {
        config.cleaning.kind = kind;
    }
    if let Some(sample) = args.sample {
        config.export.sample_games = sample;
    }
    if args.no_scramble {
        config.export.scramble = false;
    }
    if let Some(seed) = args.seed {
        config.export.seed = seed;
    }
    if let Some(log_level) = &args.log_level {
        config.logging.level = log_level.clone();
    }

    tennis_games::config::validate_config(&config)?;
    Ok(config)
}

/// Open the output sink
fn open_output(args: &Args) -> Result<Box<dyn Write>> {
    Ok(match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

/// Build the games table and write the requested format
fn run<S: TableSource>(source: S, config: &AppConfig, args: &Args) -> Result<()> {
    let mut loader = TennisLoader::with_tables(source, config.source.tour, &config.source.tables);

    if args.list_tables {
        let mut out = open_output(args)?;
        return write_lines(&mut out, &loader.list_tables());
    }

    // Point games come straight from the stats table
    if args.format != Format::Points && loader.clean_games(config.cleaning)?.is_empty() {
        info!("No games left after cleaning");
    }

    let out = open_output(args)?;
    match args.format {
        Format::Points => write_csv(out, &loader.create_points_games()?),
        Format::Whr => write_lines(out, &loader.to_whr_format()?),
        Format::Riix => write_csv(out, &loader.to_riix_format(&config.export)?),
        Format::Ttt => write_json(out, &loader.to_ttt_format(&config.export)?),
        Format::Elo => {
            let rows = loader.to_riix_format(&config.export)?;
            let standings = replay_elo(&rows, &config.rating);
            info!(
                "Replayed {} games across {} players",
                rows.len(),
                standings.len()
            );
            write_csv(out, &standings)
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.logging.level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        display_startup_banner(&config, &args);
        info!("Dry run completed - exiting without reading the source");
        return Ok(());
    }

    display_startup_banner(&config, &args);

    let result = if let Some(dir) = &args.tables_dir {
        InMemorySource::from_dir(dir).and_then(|source| run(source, &config, &args))
    } else {
        let path = config
            .source
            .mdb_file
            .as_ref()
            .ok_or_else(|| anyhow!("No archive given; use --mdb-file or MDB_FILE"))?;
        MdbToolsSource::new(path, &config.source.password)
            .and_then(|source| run(source, &config, &args))
    };

    if let Err(e) = result {
        error!("Export failed: {:#}", e);
        std::process::exit(1);
    }

    info!("✅ Export completed");
    Ok(())
}
