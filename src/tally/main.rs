use std::path::PathBuf;

use clap::Parser;
use rps_history::{logging, RoundLog, Tally, DEFAULT_LOG_PATH};

type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Summarize a rock-paper-scissors game log")]
struct Args {
    /// Game log: one round per line, "player computer", 0=rock 1=paper 2=scissors.
    #[arg(default_value = DEFAULT_LOG_PATH)]
    path: PathBuf,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut tally = Tally::new();
    for round in RoundLog::open(&args.path)? {
        let round = round?;
        tracing::debug!(
            "{} vs {}: {:?}",
            round.player,
            round.computer,
            round.outcome()
        );
        tally.add(&round);
    }

    tracing::info!("read {} rounds from {}", tally.total(), args.path.display());
    print!("{}", tally);

    Ok(())
}
