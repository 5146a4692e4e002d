//! The board abstraction the search is written against

use crate::{error::BoardError, CONNECT, HEIGHT, WIDTH};

/// One of the two players
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell value this player's pieces occupy
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning a piece in this cell, if any
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

/// Rows of cells, bottom row first
pub type Grid = [[Cell; WIDTH]; HEIGHT];

/// (row, column) steps of the four line directions: horizontal, vertical, and
/// the two diagonals
pub static DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Every run of `CONNECT` cells that lies fully on the board, as (row, column)
/// coordinates
pub fn windows() -> impl Iterator<Item = [(usize, usize); CONNECT]> {
    DIRECTIONS.iter().flat_map(|&(d_row, d_column)| {
        (0..HEIGHT).flat_map(move |row| {
            (0..WIDTH).filter_map(move |column| window_from(row, column, d_row, d_column))
        })
    })
}

fn window_from(
    row: usize,
    column: usize,
    d_row: isize,
    d_column: isize,
) -> Option<[(usize, usize); CONNECT]> {
    let reach = CONNECT as isize - 1;
    let end_row = row as isize + d_row * reach;
    let end_column = column as isize + d_column * reach;
    if end_row < 0 || end_row >= HEIGHT as isize || end_column < 0 || end_column >= WIDTH as isize
    {
        return None;
    }

    let mut window = [(0, 0); CONNECT];
    for (i, position) in window.iter_mut().enumerate() {
        *position = (
            (row as isize + d_row * i as isize) as usize,
            (column as isize + d_column * i as isize) as usize,
        );
    }
    Some(window)
}

/// A Connect 4 position as seen by the search
///
/// Implementors own the rules: legality of drops, gravity, and win/draw
/// detection. The search only queries a board and mutates clones of it, so
/// `clone` must produce a fully independent copy.
pub trait Board: Clone {
    /// Columns that can still accept a piece, in ascending order
    fn legal_columns(&self) -> Vec<usize>;

    /// Drops a piece for `player` into `column`
    fn drop_piece(&mut self, player: Player, column: usize) -> Result<(), BoardError>;

    /// Whether the game has been won or the board is full
    fn is_terminal(&self) -> bool;

    /// The winning player, only meaningful once the board is terminal
    fn winner(&self) -> Option<Player>;

    fn grid(&self) -> &Grid;

    /// The number of pieces placed on the board so far
    fn piece_count(&self) -> usize {
        self.grid()
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }
}
