use std::fs;

use rps_history::{read_all, Choice, FormatProblem, LogError, Outcome, Round, RoundLog, Tally};
use tempfile::TempDir;

fn write_log(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("games.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_rounds_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "1 2\n2 0\n2 1\n\n");

    let rounds = read_all(&path).unwrap();
    assert_eq!(
        rounds,
        vec![
            Round::new(Choice::Paper, Choice::Scissors),
            Round::new(Choice::Scissors, Choice::Rock),
            Round::new(Choice::Scissors, Choice::Paper),
        ]
    );

    let outcomes: Vec<Outcome> = rounds.iter().map(Round::outcome).collect();
    assert_eq!(outcomes, vec![Outcome::Loss, Outcome::Loss, Outcome::Win]);

    let tally = Tally::from_rounds(&rounds);
    assert_eq!((tally.wins, tally.losses, tally.ties), (1, 2, 0));
}

#[test]
fn parsing_twice_gives_the_same_rounds() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "0 0\n0 1 2 2\n1 0\n");

    let first: Vec<Round> = RoundLog::open(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    let second = read_all(&path).unwrap();
    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[test]
fn encoded_rounds_read_back_identically() {
    let rounds: Vec<Round> = Choice::ALL
        .iter()
        .flat_map(|&p| Choice::ALL.iter().map(move |&c| Round::new(p, c)))
        .collect();
    let text: String = rounds.iter().map(|r| format!("{}\n", r)).collect();

    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, &text);
    assert_eq!(read_all(&path).unwrap(), rounds);
}

#[test]
fn empty_file_is_an_empty_log() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "");
    assert!(read_all(&path).unwrap().is_empty());
}

#[test]
fn out_of_range_move_is_a_format_error() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "3 0\n");

    match read_all(&path) {
        Err(LogError::Format { line, problem, .. }) => {
            assert_eq!(line, 1);
            assert_eq!(problem, FormatProblem::OutOfRange("3".to_string()));
        }
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn three_codes_on_a_line_is_a_format_error() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "0 1\n2 1 0\n");

    let err = read_all(&path).unwrap_err();
    assert!(matches!(
        err,
        LogError::Format {
            line: 2,
            problem: FormatProblem::OddCount(3),
            ..
        }
    ));
    assert!(err.to_string().contains("2 1 0"));
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.txt");

    let err = read_all(&path).unwrap_err();
    assert!(matches!(err, LogError::NotFound { .. }));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn directory_is_not_found() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        read_all(dir.path()),
        Err(LogError::NotFound { .. })
    ));
}
