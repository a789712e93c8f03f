//! Scripted, non-interactive play.
//!
//! Feeds a list of cells to a fresh session and writes one line per move,
//! followed by the final board.

use crate::config::GameConfig;
use crate::presenter::MessagePresenter;
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::io::Write;
use tictactoe_core::{
    MoveOutcome, Notification, Position, PresentationPort, Session, rules,
};
use tracing::{debug, info, instrument};

/// One line of JSON output.
#[derive(Debug, Serialize)]
struct MoveRecord {
    index: usize,
    position: Position,
    outcome: MoveOutcome,
    notification: Option<Notification>,
}

/// Parses each move as an index or label.
#[instrument]
pub fn parse_moves(moves: &[String]) -> Result<Vec<Position>> {
    moves
        .iter()
        .map(|m| {
            Position::from_label_or_number(m).ok_or_else(|| {
                anyhow!("Invalid move {:?}: expected 0-8 or a label such as \"center\"", m)
            })
        })
        .collect()
}

/// Plays `moves` on a new session and writes the results to `out`.
#[instrument(skip(config, out))]
pub fn run(config: &GameConfig, moves: &[String], json: bool, out: &mut impl Write) -> Result<()> {
    let positions = parse_moves(moves)?;
    let mut session = Session::new();
    let mut presenter = MessagePresenter::new(config.clone());

    info!(moves = positions.len(), "Starting scripted game");

    for position in positions {
        let mut emitted: Vec<Notification> = Vec::new();
        let outcome = session
            .play_move(position.to_index(), &mut emitted)
            .with_context(|| format!("Failed to play {}", position))?;
        for notification in &emitted {
            presenter.notify(*notification);
        }
        debug!(%position, ?outcome, "Move processed");

        if json {
            let record = MoveRecord {
                index: position.to_index(),
                position,
                outcome,
                notification: emitted.first().copied(),
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
            continue;
        }

        let text = match outcome {
            MoveOutcome::Rejected(reason) => format!("ignored ({})", reason),
            MoveOutcome::Continue(_) => presenter.status().to_string(),
            MoveOutcome::Won(_) | MoveOutcome::Draw => {
                presenter.banner().unwrap_or_default().to_string()
            }
        };
        writeln!(out, "{} ({}): {}", position, position.to_index(), text)?;
    }

    if !json {
        let board = session.board().render_with(|mark| presenter.label(mark).to_string());
        writeln!(out)?;
        writeln!(out, "{}", board)?;
        if let Some(line) = rules::winning_line(session.board()) {
            writeln!(out, "Winning line: {:?}", line)?;
        }
    }

    Ok(())
}
