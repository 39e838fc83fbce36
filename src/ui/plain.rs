//! Line-oriented front-end for terminals without raw mode (and for piping
//! moves in from a file). One command per line: `1`-`7` drops into that
//! column, `n` starts a new game, `q` quits.

use std::io::{self, BufRead, Write};

use super::messages;
use crate::game::{Board, DropOutcome, GameEngine, GameStatus, IgnoredReason, Player, COLS};

enum Command {
    Drop(usize),
    NewGame,
    Quit,
    Unknown,
}

fn parse(line: &str) -> Command {
    match line.trim() {
        "q" | "quit" => Command::Quit,
        "n" | "new" => Command::NewGame,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=COLS).contains(&n) => Command::Drop(n - 1),
            _ => Command::Unknown,
        },
    }
}

/// Play until `q` or end of input.
pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    mut out: W,
) -> io::Result<()> {
    write_state(&mut out, engine.board(), engine.status(), engine.current_player())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (status, current_player) = match parse(&line) {
            Command::Quit => break,
            Command::NewGame => {
                engine.reset();
                writeln!(out, "{}", messages::NEW_GAME)?;
                (engine.status(), engine.current_player())
            }
            Command::Drop(column) => match engine.drop_piece(column) {
                Ok(outcome) => {
                    if let Some(msg) = announcement(&outcome) {
                        writeln!(out, "{msg}")?;
                    }
                    (outcome.status(), outcome.current_player())
                }
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            },
            Command::Unknown => {
                writeln!(out, "Enter a column 1-{COLS}, 'n' for a new game or 'q' to quit.")?;
                continue;
            }
        };

        write_state(&mut out, engine.board(), status, current_player)?;
    }

    out.flush()
}

fn announcement(outcome: &DropOutcome) -> Option<String> {
    match outcome {
        DropOutcome::Placed(placement) => messages::outcome(placement.status),
        DropOutcome::Ignored {
            reason: IgnoredReason::GameOver,
            ..
        } => Some(messages::GAME_OVER.to_string()),
        DropOutcome::Ignored {
            reason: IgnoredReason::ColumnFull,
            ..
        } => Some(messages::COLUMN_FULL.to_string()),
    }
}

fn write_state<W: Write>(
    out: &mut W,
    board: &Board,
    status: GameStatus,
    current_player: Player,
) -> io::Result<()> {
    write!(out, "{board}")?;
    let labels: String = (1..=COLS).map(|c| char::from(b'0' + c as u8)).collect();
    writeln!(out, "{labels}")?;
    if status == GameStatus::InProgress {
        writeln!(out, "{}", messages::turn(current_player))?;
    }
    Ok(())
}
