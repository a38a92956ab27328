use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::iter::FusedIterator;
use std::path::Path;

use itertools::Itertools;

use crate::error::{FormatProblem, LogError, Result};
use crate::round::{Choice, Round};

/// Lazy reader over a game log.
///
/// Every non-blank line holds whitespace-separated move codes. Codes are taken
/// two at a time as (player, computer), so `2 1 0 1` is two rounds and `2 1 0`
/// is rejected. Blank lines are skipped, as is a UTF-8 byte order mark at the
/// start of the first line. The first bad line ends the sequence with an
/// error; nothing after it is yielded.
pub struct RoundLog<R> {
    lines: Lines<R>,
    line_number: usize,
    pending: VecDeque<Round>,
    done: bool,
}

impl RoundLog<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LogError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        if file.metadata().map(|m| m.is_dir()).unwrap_or(false) {
            return Err(LogError::NotFound {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "is a directory"),
            });
        }
        tracing::debug!("opened game log {}", path.display());
        Ok(RoundLog::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> RoundLog<R> {
    pub fn from_reader(reader: R) -> Self {
        RoundLog {
            lines: reader.lines(),
            line_number: 0,
            pending: VecDeque::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for RoundLog<R> {
    type Item = Result<Round>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(round) = self.pending.pop_front() {
                return Some(Ok(round));
            }
            if self.done {
                return None;
            }

            let mut line = match self.lines.next() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                Some(Ok(line)) => line,
            };
            self.line_number += 1;
            if self.line_number == 1 && line.starts_with('\u{feff}') {
                line.remove(0);
            }

            match parse_line(&line) {
                Ok(rounds) => {
                    if rounds.len() > 1 {
                        tracing::debug!(
                            "line {} packs {} rounds",
                            self.line_number,
                            rounds.len()
                        );
                    }
                    self.pending.extend(rounds);
                }
                Err(problem) => {
                    self.done = true;
                    return Some(Err(LogError::Format {
                        line: self.line_number,
                        content: line.trim_end().to_string(),
                        problem,
                    }));
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for RoundLog<R> {}

/// Decodes one line. A blank line is zero rounds.
pub fn parse_line(line: &str) -> std::result::Result<Vec<Round>, FormatProblem> {
    let choices = line
        .split_whitespace()
        .map(Choice::from_code_str)
        .collect::<std::result::Result<Vec<Choice>, _>>()?;

    if choices.len() % 2 != 0 {
        return Err(FormatProblem::OddCount(choices.len()));
    }

    Ok(choices
        .into_iter()
        .tuples()
        .map(|(player, computer)| Round::new(player, computer))
        .collect())
}

/// Reads the whole log, stopping at the first error.
pub fn read_all<P: AsRef<Path>>(path: P) -> Result<Vec<Round>> {
    RoundLog::open(path)?.collect()
}
