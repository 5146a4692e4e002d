//! An array-backed `Board` used by the command line game and the tests

use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::{
    board::{windows, Board, Cell, Grid, Player},
    error::BoardError,
    HEIGHT, WIDTH,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

#[derive(Clone, Debug)]
pub struct ArrayBoard {
    cells: Grid, // rows are stored bottom-to-top
    heights: [usize; WIDTH],
    num_moves: usize,
    pub state: GameState,
}

impl ArrayBoard {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
            heights: [0; WIDTH],
            num_moves: 0,
            state: GameState::Playing,
        }
    }

    /// Builds a board from a string of 1-indexed column digits, alternating
    /// players starting with player one
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) => {
                    board.play_checked(column)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Builds a board from rows drawn top row first, using `.` for an empty
    /// cell, `X` for player one and `O` for player two
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        if rows.len() != HEIGHT {
            return Err(anyhow!("expected {} rows, got {}", HEIGHT, rows.len()));
        }

        let mut board = Self::new();
        for (i, line) in rows.iter().enumerate() {
            let row = HEIGHT - 1 - i;
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != WIDTH {
                return Err(anyhow!("row '{}' must be {} cells wide", line, WIDTH));
            }
            for (column, c) in chars.into_iter().enumerate() {
                board.cells[row][column] = match c {
                    '.' => Cell::Empty,
                    'X' => Cell::PlayerOne,
                    'O' => Cell::PlayerTwo,
                    _ => return Err(anyhow!("unknown cell '{}' in row '{}'", c, line)),
                };
            }
        }

        for column in 0..WIDTH {
            let height = (0..HEIGHT)
                .take_while(|&row| !board.cells[row][column].is_empty())
                .count();
            if (height..HEIGHT).any(|row| !board.cells[row][column].is_empty()) {
                return Err(anyhow!("column {} has a floating piece", column + 1));
            }
            board.heights[column] = height;
            board.num_moves += height;
        }

        board.state = board.derive_state()?;
        Ok(board)
    }

    /// Plays a move for the player whose turn it is, returning the new game state
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        match self.drop_piece(self.next_player(), column) {
            Ok(()) => Ok(self.state),
            Err(BoardError::ColumnFull(_)) => {
                Err(anyhow!("Invalid move, column {} full", column_one_indexed))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// The player to move, assuming player one moved first
    pub fn next_player(&self) -> Player {
        if self.num_moves % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Returns the same position with the two players' pieces exchanged
    pub fn swap_players(&self) -> Self {
        let mut swapped = self.clone();
        for cell in swapped.cells.iter_mut().flat_map(|row| row.iter_mut()) {
            if let Some(player) = cell.player() {
                *cell = player.other().cell();
            }
        }
        if let GameState::Won(player) = self.state {
            swapped.state = GameState::Won(player.other());
        }
        swapped
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);

                stdout
                    .queue(MoveTo(pos_x, pos_y))?
                    .queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match cell {
                                Cell::PlayerOne => Color::Red,
                                Cell::PlayerTwo => Color::Yellow,
                                Cell::Empty => Color::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }

    fn playable(&self, column: usize) -> bool {
        self.heights[column] < HEIGHT
    }

    // scan every window for a completed line, for boards not built move by move
    fn derive_state(&self) -> Result<GameState> {
        let mut winner = None;
        for window in windows() {
            let first = self.cells[window[0].0][window[0].1];
            if let Some(player) = first.player() {
                if window.iter().all(|&(row, column)| self.cells[row][column] == first) {
                    if winner.map_or(false, |w| w != player) {
                        return Err(anyhow!("Invalid position, both players have connected"));
                    }
                    winner = Some(player);
                }
            }
        }

        Ok(match winner {
            Some(player) => GameState::Won(player),
            None if self.num_moves == WIDTH * HEIGHT => GameState::Draw,
            None => GameState::Playing,
        })
    }

    fn check_winning_move(&self, player: Player, column: usize) -> bool {
        let piece = player.cell();
        let height = self.heights[column];
        // check vertical alignment
        if height >= 3
            && self.cells[height - 1][column] == piece
            && self.cells[height - 2][column] == piece
            && self.cells[height - 3][column] == piece
        {
            return true;
        }

        // check horizontal and diagonal alignment
        for dy_dx in -1i32..=1 {
            let mut run = 0;
            for dx in [-1i32, 1].iter() {
                let mut x = column as i32 + dx;
                let mut y = height as i32 + dx * dy_dx;
                loop {
                    if x < 0
                        || x >= WIDTH as i32
                        || y < 0
                        || y >= HEIGHT as i32
                        || self.cells[y as usize][x as usize] != piece
                    {
                        break;
                    }
                    x += dx;
                    y += dx * dy_dx;
                    run += 1;
                }
            }
            if run >= 3 {
                return true;
            }
        }

        false
    }
}

impl Board for ArrayBoard {
    fn legal_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    fn drop_piece(&mut self, player: Player, column: usize) -> Result<(), BoardError> {
        if column >= WIDTH {
            return Err(BoardError::ColumnOutOfRange(column));
        }
        if self.state != GameState::Playing {
            return Err(BoardError::GameOver);
        }
        if !self.playable(column) {
            return Err(BoardError::ColumnFull(column));
        }

        let won = self.check_winning_move(player, column);
        self.cells[self.heights[column]][column] = player.cell();
        self.heights[column] += 1;
        self.num_moves += 1;

        self.state = if won {
            GameState::Won(player)
        } else if self.num_moves == WIDTH * HEIGHT {
            GameState::Draw
        } else {
            GameState::Playing
        };
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.state != GameState::Playing
    }

    fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::Won(player) => Some(player),
            _ => None,
        }
    }

    fn grid(&self) -> &Grid {
        &self.cells
    }

    fn piece_count(&self) -> usize {
        self.num_moves
    }
}

impl Default for ArrayBoard {
    fn default() -> Self {
        Self::new()
    }
}
