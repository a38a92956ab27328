use std::fmt;
use std::str::FromStr;

use crate::error::FormatProblem;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Outcome {
    Loss,
    Tie,
    Win,
}

/// One recorded play. The player is always the first column of the log.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Round {
    pub player: Choice,
    pub computer: Choice,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    pub fn code(self) -> u8 {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Choice> {
        match code {
            0 => Some(Choice::Rock),
            1 => Some(Choice::Paper),
            2 => Some(Choice::Scissors),
            _ => None,
        }
    }

    /// Decodes one on-disk token. Any run of digits that is not 0, 1 or 2 is
    /// out of range, even when it does not fit in an integer.
    pub fn from_code_str(token: &str) -> Result<Choice, FormatProblem> {
        let out_of_range = || FormatProblem::OutOfRange(token.to_string());
        match token.parse::<i64>() {
            Ok(code) => Choice::from_code(code).ok_or_else(out_of_range),
            Err(_) => {
                let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                    Err(out_of_range())
                } else {
                    Err(FormatProblem::NotAnInteger(token.to_string()))
                }
            }
        }
    }

    pub fn index(self) -> usize {
        self.code() as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    pub fn wins_against(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    pub fn loses_against(self) -> Choice {
        match self {
            Choice::Rock => Choice::Paper,
            Choice::Paper => Choice::Scissors,
            Choice::Scissors => Choice::Rock,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the on-disk integer code or the lowercase name.
impl FromStr for Choice {
    type Err = FormatProblem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "rock" => return Ok(Choice::Rock),
            "paper" => return Ok(Choice::Paper),
            "scissors" => return Ok(Choice::Scissors),
            _ => {}
        }
        Choice::from_code_str(s)
    }
}

impl Round {
    pub fn new(player: Choice, computer: Choice) -> Round {
        Round { player, computer }
    }

    pub fn outcome(&self) -> Outcome {
        if self.player.wins_against() == self.computer {
            Outcome::Win
        } else if self.player.loses_against() == self.computer {
            Outcome::Loss
        } else {
            assert!(self.player == self.computer);
            Outcome::Tie
        }
    }

    /// The choice that won this round, whichever side played it.
    pub fn winning_choice(&self) -> Option<Choice> {
        match self.outcome() {
            Outcome::Win => Some(self.player),
            Outcome::Loss => Some(self.computer),
            Outcome::Tie => None,
        }
    }
}

/// Encodes back into the log format, e.g. `1 2`.
impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.player.code(), self.computer.code())
    }
}
