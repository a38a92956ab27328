use std::fmt;

use crate::round::{Choice, Outcome, Round};

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Tally {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
    /// How often each move won a round, indexed by `Choice::index`.
    pub winning_moves: [u64; 3],
}

impl Tally {
    pub fn new() -> Tally {
        Tally::default()
    }

    pub fn from_rounds<'a, I: IntoIterator<Item = &'a Round>>(rounds: I) -> Tally {
        let mut tally = Tally::new();
        for round in rounds {
            tally.add(round);
        }
        tally
    }

    pub fn add(&mut self, round: &Round) {
        match round.outcome() {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
        if let Some(choice) = round.winning_choice() {
            self.winning_moves[choice.index()] += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.wins + self.losses + self.ties
    }

    pub fn times_won(&self, choice: Choice) -> u64 {
        self.winning_moves[choice.index()]
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rounds: {}", self.total())?;
        writeln!(f, "Wins: {}", self.wins)?;
        writeln!(f, "Losses: {}", self.losses)?;
        writeln!(f, "Ties: {}", self.ties)?;
        for choice in Choice::ALL {
            writeln!(f, "Won with {}: {}", choice, self.times_won(choice))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::*;

    #[test]
    fn counts_outcomes_and_winning_moves() {
        let rounds = vec![
            Round::new(Paper, Scissors),
            Round::new(Scissors, Rock),
            Round::new(Scissors, Paper),
            Round::new(Rock, Rock),
        ];
        let tally = Tally::from_rounds(&rounds);

        assert_eq!(tally.wins, 1);
        assert_eq!(tally.losses, 2);
        assert_eq!(tally.ties, 1);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.times_won(Rock), 1);
        assert_eq!(tally.times_won(Paper), 0);
        assert_eq!(tally.times_won(Scissors), 2);
    }

    #[test]
    fn empty_tally_report() {
        let report = Tally::new().to_string();
        assert!(report.starts_with("Rounds: 0\nWins: 0\nLosses: 0\nTies: 0\n"));
    }
}
