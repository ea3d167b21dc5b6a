use std::convert::TryFrom;
use std::fmt;

use crate::error::{EngineError, Result};
use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The wire value of this cell: 0 for empty, otherwise the player id
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerOne => 1,
            Cell::PlayerTwo => 2,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::PlayerOne),
            2 => Ok(Cell::PlayerTwo),
            _ => Err(EngineError::malformed(format!(
                "unknown cell value {}, expected 0, 1 or 2",
                value
            ))),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    pub fn id(self) -> u8 {
        self.to_cell().value()
    }
}

impl TryFrom<u8> for Player {
    type Error = EngineError;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(EngineError::config(format!(
                "player id must be 1 or 2, got {}",
                id
            ))),
        }
    }
}

/// A Connect 4 board of arbitrary (non-zero) dimensions
///
/// Cells are addressed by `(column, row)` with column 0 on the left and row 0
/// at the bottom. The board never changes once built: playing a move returns
/// a new board, so every branch of a search owns its own copy.
///
/// Discs are expected to sit contiguously from the bottom of each column.
/// This is a precondition of the caller and is not checked.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: Vec<Cell>, // cells are stored column by column, bottom-to-top
    columns: usize,
    rows: usize,
}

impl Board {
    /// Creates an empty board with the given dimensions
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(EngineError::malformed(format!(
                "board dimensions must be non-zero, got {}x{}",
                columns, rows
            )));
        }
        Ok(Self {
            cells: vec![Cell::Empty; columns * rows],
            columns,
            rows,
        })
    }

    /// Creates an empty board of the standard 7x6 size
    pub fn standard() -> Self {
        Self {
            cells: vec![Cell::Empty; WIDTH * HEIGHT],
            columns: WIDTH,
            rows: HEIGHT,
        }
    }

    /// Builds a board from a column-major rack
    ///
    /// Each inner sequence is one column listed from the bottom up, holding
    /// `0` for an empty cell or the id of the player owning the disc.
    pub fn from_rack(rack: &[Vec<u8>]) -> Result<Self> {
        let columns = rack.len();
        if columns == 0 {
            return Err(EngineError::malformed("board has no columns"));
        }
        let rows = rack[0].len();
        if rows == 0 {
            return Err(EngineError::malformed("board has no rows"));
        }

        let mut cells = Vec::with_capacity(columns * rows);
        for (column, values) in rack.iter().enumerate() {
            if values.len() != rows {
                return Err(EngineError::malformed(format!(
                    "column {} has {} rows, expected {}",
                    column,
                    values.len(),
                    rows
                )));
            }
            for &value in values.iter() {
                cells.push(Cell::try_from(value)?);
            }
        }

        Ok(Self {
            cells,
            columns,
            rows,
        })
    }

    /// Builds a standard 7x6 board by playing a string of 1-indexed column
    /// digits, alternating players starting with player one
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        Self::from_moves_sized(moves, WIDTH, HEIGHT)
    }

    /// Like [`from_moves`](Board::from_moves) on a board of the given size
    pub fn from_moves_sized<S: AsRef<str>>(moves: S, columns: usize, rows: usize) -> Result<Self> {
        let mut board = Self::new(columns, rows)?;
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 && column <= columns => {
                    board = board.play(column - 1, player)?;
                    player = player.opponent();
                }
                _ => {
                    return Err(EngineError::ParseMove {
                        character: column_char,
                    })
                }
            }
        }
        Ok(board)
    }

    /// Converts the board back into a column-major rack of wire values
    pub fn to_rack(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.rows)
            .map(|column| column.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The cell at `(column, row)`
    ///
    /// # Panics
    /// Panics if `column` or `row` lies outside the board.
    pub fn get(&self, column: usize, row: usize) -> Cell {
        assert!(
            column < self.columns && row < self.rows,
            "cell ({}, {}) is outside a {}x{} board",
            column,
            row,
            self.columns,
            self.rows
        );
        self.cells[column * self.rows + row]
    }

    fn column(&self, column: usize) -> &[Cell] {
        &self.cells[column * self.rows..(column + 1) * self.rows]
    }

    /// Whether `column` exists and still has an empty cell
    pub fn is_playable(&self, column: usize) -> bool {
        column < self.columns && self.column(column).iter().any(Cell::is_empty)
    }

    /// All playable columns, left to right
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.columns).filter(|&c| self.is_playable(c)).collect()
    }

    /// The number of discs in `column`
    ///
    /// # Panics
    /// Panics if `column` lies outside the board.
    pub fn occupied_in_column(&self, column: usize) -> usize {
        self.column(column).iter().filter(|c| !c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Returns a copy of this board with `player`'s disc dropped into the
    /// lowest empty cell of `column`
    pub fn play(&self, column: usize, player: Player) -> Result<Board> {
        if column >= self.columns {
            return Err(EngineError::InvalidMove { column });
        }
        let row = self
            .column(column)
            .iter()
            .position(Cell::is_empty)
            .ok_or(EngineError::InvalidMove { column })?;

        let mut next = self.clone();
        next.cells[column * self.rows + row] = player.to_cell();
        Ok(next)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for column in 0..self.columns {
                let symbol = match self.get(column, row) {
                    Cell::Empty => '.',
                    Cell::PlayerOne => 'X',
                    Cell::PlayerTwo => 'O',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        // column labels are 1-indexed, matching move strings
        for column in 1..=self.columns {
            write!(f, "{}", column % 10)?;
        }
        Ok(())
    }
}
