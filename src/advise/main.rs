use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rps_history::{logging, read_all, Advisor, Choice, Outcome, Tally, DEFAULT_LOG_PATH};

type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Parser, Debug)]
#[command(name = "advise")]
#[command(about = "Suggest moves from a rock-paper-scissors history, one round at a time")]
struct Args {
    /// Past games used as the prior.
    #[arg(default_value = DEFAULT_LOG_PATH)]
    path: PathBuf,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You won.",
        Outcome::Loss => "You lost.",
        Outcome::Tie => "Tie.",
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let rounds = read_all(&args.path)?;
    let tally = Tally::from_rounds(&rounds);
    tracing::info!(
        "prior from {} rounds: {} wins, {} losses, {} ties",
        tally.total(),
        tally.wins,
        tally.losses,
        tally.ties
    );

    let mut advisor = Advisor::from_tally(&tally);
    let mut my_move = advisor.suggest();
    println!("You should play {}", my_move);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut games_left = rounds.len();

    while games_left > 0 {
        print!("What did the computer play? 0 = rock, 1 = paper, 2 = scissors: ");
        std::io::stdout().flush().context("flushing prompt")?;

        let line = match lines.next() {
            Some(line) => line.context("reading computer move")?,
            None => {
                println!();
                break;
            }
        };
        let their_move: Choice = match line.parse() {
            Ok(choice) => choice,
            Err(problem) => {
                println!("Not a move: {}", problem);
                continue;
            }
        };

        let outcome = advisor.observe(my_move, their_move);
        games_left -= 1;
        my_move = advisor.suggest();
        println!(
            "{} {} games left. alphas={:?}. You should play {}",
            describe(outcome),
            games_left,
            advisor.alphas(),
            my_move
        );
    }

    tracing::debug!("posterior history: {:?}", advisor.history());

    Ok(())
}
