//! Static evaluation of positions at the search horizon

use serde::{Deserialize, Serialize};

use crate::{
    board::{windows, Board, Player},
    CONNECT, WIDTH,
};

/// The score magnitude of a proven win, before adjusting for the number of
/// pieces placed
pub const WIN_SCORE: i32 = 1_000_000;

/// The column pieces are scored relative to
pub const CENTRE_COLUMN: usize = WIDTH / 2;

/// Tunable weights of the positional evaluation
///
/// `threat[n]` scores a window holding `n` pieces of a single player and
/// `CONNECT - n` empty cells. `centre_bonus[d]` scores every piece `d` columns
/// away from the centre column; columns past the end of the schedule score 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub threat: Vec<i32>,
    pub centre_bonus: Vec<i32>,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            threat: vec![0, 3, 20, 100],
            centre_bonus: vec![5, 4, 2],
        }
    }
}

impl Weights {
    fn threat(&self, pieces: usize) -> i32 {
        self.threat.get(pieces).copied().unwrap_or(0)
    }

    fn centre_bonus(&self, column: usize) -> i32 {
        self.centre_bonus
            .get(distance_from_centre(column))
            .copied()
            .unwrap_or(0)
    }
}

/// How many columns `column` lies away from the centre column
pub fn distance_from_centre(column: usize) -> usize {
    if column > CENTRE_COLUMN {
        column - CENTRE_COLUMN
    } else {
        CENTRE_COLUMN - column
    }
}

/// Scores `board` from the point of view of `agent`
///
/// Terminal positions score `±WIN_SCORE`, pulled towards zero by the number
/// of pieces on the board so that quicker wins (and slower losses) are
/// preferred. A full board without a winner scores 0. Any other position gets
/// a heuristic score well inside that band.
pub fn evaluate<B: Board>(board: &B, agent: Player, weights: &Weights) -> i32 {
    if board.is_terminal() {
        let pieces = board.piece_count() as i32;
        return match board.winner() {
            Some(player) if player == agent => WIN_SCORE - pieces,
            Some(_) => -WIN_SCORE + pieces,
            None => 0,
        };
    }

    window_score(board, agent, weights) + centre_score(board, agent, weights)
}

fn window_score<B: Board>(board: &B, agent: Player, weights: &Weights) -> i32 {
    let grid = board.grid();
    let agent_cell = agent.cell();
    let opponent_cell = agent.other().cell();

    windows()
        .map(|window| {
            let (mut own, mut opponent) = (0, 0);
            for &(row, column) in window.iter() {
                let cell = grid[row][column];
                if cell == agent_cell {
                    own += 1;
                } else if cell == opponent_cell {
                    opponent += 1;
                }
            }

            // a window holding both colours can never be completed
            match (own, opponent) {
                (0, 0) => 0,
                (n, 0) if n < CONNECT => weights.threat(n),
                (0, n) if n < CONNECT => -weights.threat(n),
                _ => 0,
            }
        })
        .sum()
}

fn centre_score<B: Board>(board: &B, agent: Player, weights: &Weights) -> i32 {
    board
        .grid()
        .iter()
        .flat_map(|row| row.iter().enumerate())
        .filter_map(|(column, cell)| {
            cell.player().map(|player| {
                let bonus = weights.centre_bonus(column);
                if player == agent {
                    bonus
                } else {
                    -bonus
                }
            })
        })
        .sum()
}
