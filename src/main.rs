//! Skirmish runner
//!
//! Builds a cast (the default one or a TOML roster), drains one match and
//! prints the narration.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use skirmish::{GameRng, Match, MatchConfig, MatchEvent, Roster, TeamRegistry};
use tracing_subscriber::EnvFilter;

/// Skirmish - run a turn-based match and narrate it
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Run a turn-based match between fighters and monsters")]
struct Args {
    /// TOML roster describing teams and combatants (default cast if omitted)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Seed for turn order (overrides the roster's [match] seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Seed for generated team labels
    #[arg(long)]
    registry_seed: Option<u64>,

    /// Print narration without ANSI styling
    #[arg(long)]
    plain: bool,

    /// Print every contestant's status before the first turn
    #[arg(long)]
    summary: bool,

    /// Log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Log filter: `RUST_LOG` when set, otherwise the `-v` level.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }),
    }
}

fn init_tracing(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .init();
}

fn print_events(events: Vec<MatchEvent>, plain: bool) {
    for event in events {
        if plain {
            println!("{}", event.plain());
        } else {
            println!("{event}");
        }
    }
}

fn run(args: &Args) -> skirmish::Result<()> {
    let roster = match &args.roster {
        Some(path) => Roster::load(path)?,
        None => Roster::default_cast(),
    };

    let config = MatchConfig {
        seed: args.seed.or(roster.match_config.seed),
    };

    // Without its own seed, the registry forks off the match seed so one
    // seed reproduces the whole run.
    let mut teams = match (args.registry_seed, config.seed) {
        (Some(seed), _) => TeamRegistry::new(seed),
        (None, Some(seed)) => TeamRegistry::with_rng(GameRng::new(seed).fork()),
        (None, None) => TeamRegistry::with_rng(GameRng::from_entropy()),
    };
    let cast = roster.build(&mut teams)?;
    tracing::info!(contestants = cast.len(), seed = ?config.seed, "starting match");

    let mut game = Match::new(cast, &teams, &config);
    if args.summary {
        println!("{}", game.describe(&teams));
    }
    print_events(game.drain_events(), args.plain);

    while !game.is_finished() {
        game.next_turn(&teams);
        print_events(game.drain_events(), args.plain);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("skirmish: {err}");
            ExitCode::FAILURE
        }
    }
}
