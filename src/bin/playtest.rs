//! Play-test driver.
//!
//! Runs games between `LowestPlayer` (seat 1) and `RandomPlayer` (seat 2)
//! and writes one log file per game. Without `--settings` it sweeps the
//! default settings and their one-step variations.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use handshake_cards::core::{GameRng, GameSettings};
use handshake_cards::players::{LowestPlayer, RandomPlayer};
use handshake_cards::sim::{game_id, run_game, PlaytestConfig};

#[derive(Debug, Parser)]
#[command(name = "playtest", about = "Run logged play-test games")]
struct Args {
    /// Master seed; each game forks its own streams from it.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Stop a game once the turn counter reaches this value.
    #[arg(long, default_value_t = 100)]
    turn_limit: u32,

    /// Directory for game logs.
    #[arg(long, default_value = "temp_files")]
    out_dir: PathBuf,

    /// JSON settings file. Runs a single game with these settings.
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sweep = match &args.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading settings from {}", path.display()))?;
            vec![GameSettings::from_json_str(&text)
                .with_context(|| format!("parsing settings in {}", path.display()))?]
        }
        None => GameSettings::default().variations(),
    };

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let mut master = GameRng::new(args.seed);
    for settings in sweep {
        let deal_seed = master.fork().seed();
        let id = game_id(&settings, deal_seed);
        let path = args.out_dir.join(format!("{id}_game_log.txt"));
        let mut out = BufWriter::new(
            File::create(&path).with_context(|| format!("creating {}", path.display()))?,
        );

        let mut player_1 = LowestPlayer::new();
        let mut player_2 = RandomPlayer::new(master.fork());
        let config = PlaytestConfig::new()
            .with_seed(deal_seed)
            .with_turn_limit(args.turn_limit);

        let summary = run_game(&id, settings, &mut player_1, &mut player_2, &config, &mut out)
            .with_context(|| format!("running {id}"))?;

        println!("{}", serde_json::to_string(&summary)?);
        info!("game log saved to {}", path.display());
    }

    Ok(())
}
