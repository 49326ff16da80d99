//! Tournament CLI
//!
//! Run matches between difficulty tiers and track Elo ratings.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pente_ai::Difficulty;
use tournament::{ArenaConfig, EloTracker, MatchRunner, TournamentError, TournamentResults};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const ELO_FILE: &str = "tournament_elo.json";
const RESULTS_FILE: &str = "tournament_results.json";

fn print_usage() {
    println!("Pente Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <tier1> <tier2> [--games N] [--config FILE] [--seed S]");
    println!("  tournament gauntlet <challenger> [--games N] [--config FILE] [--seed S]");
    println!("  tournament leaderboard");
    println!();
    println!("Tiers:");
    println!("  random   (easy, 1)    - Any empty cell");
    println!("  tactical (medium, 2)  - One-ply win / block / capture");
    println!("  minimax  (hard, 3)    - Alpha-beta search");
    println!();
    println!("Examples:");
    println!("  tournament match tactical minimax --games 20");
    println!("  tournament gauntlet minimax --config arena.toml");
}

/// Options shared by `match` and `gauntlet`
struct RunOptions {
    tiers: Vec<Difficulty>,
    config: ArenaConfig,
}

fn parse_options(args: &[String]) -> Result<RunOptions, TournamentError> {
    let mut tiers = Vec::new();
    let mut config_path: Option<PathBuf> = None;
    let mut games: Option<u32> = None;
    let mut seed: Option<u64> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--games" | "-g" => games = Some(parse_value(arg, iter.next())?),
            "--seed" | "-s" => seed = Some(parse_value(arg, iter.next())?),
            "--config" | "-c" => {
                let value = iter
                    .next()
                    .ok_or_else(|| TournamentError::Usage(format!("{arg} needs a value")))?;
                config_path = Some(PathBuf::from(value));
            }
            tier => {
                let tier = tier
                    .parse::<Difficulty>()
                    .map_err(|e| TournamentError::Usage(e.to_string()))?;
                tiers.push(tier);
            }
        }
    }

    let mut config = match config_path {
        Some(path) => ArenaConfig::load(&path)?,
        None => ArenaConfig::default(),
    };
    if let Some(games) = games {
        config.num_games = games;
    }
    if let Some(seed) = seed {
        config.seed = Some(seed);
        config.ai.seed = Some(seed);
    }
    config.validate()?;

    Ok(RunOptions { tiers, config })
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, TournamentError> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| TournamentError::Usage(format!("{flag} needs a numeric value")))
}

fn load_tracker(path: &Path) -> EloTracker {
    if !path.exists() {
        return EloTracker::default();
    }
    EloTracker::load(path).unwrap_or_else(|e| {
        warn!("starting a fresh rating table: {e}");
        EloTracker::default()
    })
}

/// Plays every pairing in order, updating ratings and collecting results.
fn play_pairings(
    name: &str,
    pairings: &[(Difficulty, Difficulty)],
    config: &ArenaConfig,
) -> Result<(), TournamentError> {
    let mut participants: Vec<String> = Vec::new();
    for (a, b) in pairings {
        for tier in [a, b] {
            if !participants.contains(&tier.to_string()) {
                participants.push(tier.to_string());
            }
        }
    }

    let elo_path = Path::new(ELO_FILE);
    let mut tracker = load_tracker(elo_path);
    let mut results = TournamentResults::new(name, participants, config.clone());
    let runner = MatchRunner::new(config.clone());

    for &(tier1, tier2) in pairings {
        info!(%tier1, %tier2, games = config.num_games, "starting match");

        let mut engine1 = tier1.engine(&config.ai);
        let mut engine2 = tier2.engine(&config.ai);
        let outcome = runner.run_match(engine1.as_mut(), engine2.as_mut())?;
        let result = outcome.result;

        println!(
            "{} vs {}: {}-{}-{} (Score: {:.1}%)",
            tier1,
            tier2,
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        tracker.update_ratings(&tier1.to_string(), &tier2.to_string(), &result);
        results.add_match(&tier1.to_string(), &tier2.to_string(), outcome);
    }

    println!();
    println!("{}", tracker.leaderboard_table());
    println!("{}", results.generate_report(false));

    if let Err(e) = tracker.save(elo_path) {
        warn!("failed to save Elo tracker: {e}");
    }
    results.save(Path::new(RESULTS_FILE))?;
    info!(path = RESULTS_FILE, "results saved");
    Ok(())
}

fn run_match(args: &[String]) -> Result<(), TournamentError> {
    let options = parse_options(args)?;
    let &[tier1, tier2] = options.tiers.as_slice() else {
        return Err(TournamentError::Usage(
            "match requires exactly two tiers".into(),
        ));
    };
    play_pairings(
        &format!("Match: {tier1} vs {tier2}"),
        &[(tier1, tier2)],
        &options.config,
    )
}

fn run_gauntlet(args: &[String]) -> Result<(), TournamentError> {
    let options = parse_options(args)?;
    let &[challenger] = options.tiers.as_slice() else {
        return Err(TournamentError::Usage(
            "gauntlet requires one challenger tier".into(),
        ));
    };
    let pairings: Vec<_> = Difficulty::ALL
        .into_iter()
        .filter(|&opponent| opponent != challenger)
        .map(|opponent| (challenger, opponent))
        .collect();
    play_pairings(
        &format!("Gauntlet: {challenger}"),
        &pairings,
        &options.config,
    )
}

fn show_leaderboard() -> Result<(), TournamentError> {
    let path = Path::new(ELO_FILE);
    if !path.exists() {
        println!("No tournament data found. Run some matches first!");
        return Ok(());
    }
    let tracker = EloTracker::load(path)?;
    println!("{}", tracker.leaderboard_table());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let outcome = match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(TournamentError::Usage(format!("unknown command: {other}"))),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            if matches!(e, TournamentError::Usage(_)) {
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
