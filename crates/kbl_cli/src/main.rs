//! KBL Guess CLI
//!
//! 로스터 CSV 점검, 터미널 플레이, 선수 조회, 정답 확인

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use kbl_core::{AnswerMode, DisplayRecord, GameConfig, GameState, RosterStore};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "kbl", version = kbl_core::VERSION)]
#[command(about = "Guess the KBL player from color hints", long_about = None)]
struct Cli {
    /// Roster CSV (defaults to $KBL_PLAYERS_CSV, then data/kbl_players_2025.csv)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Load the roster and print parse statistics
    Check,

    /// Play one round in the terminal
    Play {
        /// Team scope (blank / 전체 for the whole league)
        #[arg(long)]
        team: Option<String>,

        /// Guess limit (defaults to $KBL_MAX_GUESSES or 9)
        #[arg(long)]
        max_guesses: Option<u32>,

        /// Fixed RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Use today's answer instead of a random one
        #[arg(long, default_value = "false")]
        daily: bool,
    },

    /// Show one player's record
    Lookup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        team: Option<String>,

        /// Print as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the answer of a scope
    Answer {
        #[arg(long)]
        team: Option<String>,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value = "false")]
        daily: bool,
    },
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = GameConfig::from_env();
    if let Some(csv) = cli.csv {
        config.data_csv = csv;
    }

    match cli.command {
        Commands::Check => {
            println!("🔍 Checking roster...");
            println!("   CSV: {}", config.data_csv.display());

            let roster = load_roster(&config)?;
            print_stats(&roster);
        }

        Commands::Play {
            team,
            max_guesses,
            seed,
            daily,
        } => {
            apply_round_args(&mut config, seed, daily);
            if let Some(n) = max_guesses.filter(|n| *n > 0) {
                config.max_guesses = n;
            }

            let state = load_state(&config)?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            kbl_cli::play_round(
                &state,
                team.as_deref(),
                config.max_guesses,
                stdin.lock(),
                &mut stdout,
            )?;
        }

        Commands::Lookup { name, team, json } => {
            let state = load_state(&config)?;
            let info = state
                .player_info(&name, team.as_deref())
                .with_context(|| format!("Lookup failed for {}", name))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
                return Ok(());
            }
            let record = DisplayRecord::from(&info.record);
            println!("{}", kbl_cli::format_player(&record));
            if let Some(age) = info.age {
                println!("   나이: {}", age);
            }
        }

        Commands::Answer { team, seed, daily } => {
            apply_round_args(&mut config, seed, daily);
            let state = load_state(&config)?;
            let answer = state.get_answer_display(team.as_deref())?;
            println!("{}", kbl_cli::format_player(&answer));
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn apply_round_args(config: &mut GameConfig, seed: Option<u64>, daily: bool) {
    if seed.is_some() {
        config.seed = seed;
    }
    if daily {
        config.answer_mode = AnswerMode::Daily;
    }
}

#[cfg(feature = "cli")]
fn load_roster(config: &GameConfig) -> Result<RosterStore> {
    RosterStore::load_path(&config.data_csv)
        .with_context(|| format!("Failed to load roster CSV: {}", config.data_csv.display()))
}

#[cfg(feature = "cli")]
fn load_state(config: &GameConfig) -> Result<GameState> {
    GameState::load(&config.data_csv, config)
        .with_context(|| format!("Failed to load roster CSV: {}", config.data_csv.display()))
}

#[cfg(feature = "cli")]
fn print_stats(roster: &RosterStore) {
    let stats = roster.stats();
    println!("\n✅ Roster loaded");
    println!("   Rows:    {}", stats.total_rows);
    println!("   Parsed:  {}", stats.parsed);
    println!("   Failed:  {}", stats.failed);
    if !stats.missing_columns.is_empty() {
        println!("   Missing columns: {}", stats.missing_columns.join(", "));
    }
    println!("   Teams:   {}", roster.team_names().len());
    for (team, players) in roster.roster_by_team() {
        println!("     {:<20} {}", team, players.len());
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("kbl CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
