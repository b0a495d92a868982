use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(Debug, Parser)]
#[command(name = "scorer", about = "Scores tournament rounds from tab separated exports")]
struct Args {
    /// Log debug output of the scoring to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score all rounds of a tournament file
    Score {
        tournament: PathBuf,
        /// Print the standings as JSON instead of a text report
        #[arg(long)]
        json: bool,
        /// Include the per round breakdown in the text report
        #[arg(long)]
        rounds: bool,
    },
    /// Print the share string for the config of a round
    Export {
        tournament: PathBuf,
        #[arg(long)]
        round: u32,
    },
    /// Decode a share string and print the config it contains
    Decode { share: String },
}

fn run(command: Command) -> Result<(), cli::Error> {
    match command {
        Command::Score {
            tournament,
            json,
            rounds,
        } => {
            let tournament = cli::tournament_file::load(&tournament)?;
            let result = analysis::compute(tournament.mode, &tournament.rounds);
            let standings = cli::standings::from_result(&tournament, &result);

            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                print!("{}", cli::report::generate(&standings, rounds));
            }
        }
        Command::Export { tournament, round } => {
            let tournament = cli::tournament_file::load(&tournament)?;
            let config = tournament.round(round)?;
            println!("{}", analysis::exchange::export(config, tournament.mode)?);
        }
        Command::Decode { share } => {
            let shared = analysis::exchange::SharedConfig::decode(&share)?;
            println!("{}", serde_json::to_string_pretty(&shared)?);
        }
    };

    Ok(())
}

fn main() -> std::process::ExitCode {
    let args = Args::parse();

    let max_level = if args.verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::WARN
    };
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::filter_fn(move |meta| {
            let target = meta.target();
            (target.starts_with("analysis") || target.starts_with("cli") || target.starts_with("scorer"))
                && max_level >= *meta.level()
        }));
    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        eprintln!("Setting up logging: {}", e);
    }

    match run(args.command) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
