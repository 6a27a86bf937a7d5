use super::types::{Cell, PlayerId};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 3x3 board, cells indexed 0-8 in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "crate::core::serialization")]
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// Builds a board from exactly nine cells.
    pub fn from_cells(cells: &[Cell]) -> Result<Self> {
        let cells: [Cell; CELL_COUNT] = cells.try_into().map_err(|_| Error::InvalidBoardLength {
            expected: CELL_COUNT,
            got: cells.len(),
        })?;
        Ok(Board { cells })
    }

    /// Builds a board from the numeric encoding (0 = empty, 1 = X, 2 = O).
    pub fn from_codes(codes: &[u8]) -> Result<Self> {
        if codes.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: codes.len(),
            });
        }
        let mut board = Board::new();
        for (position, &value) in codes.iter().enumerate() {
            board.cells[position] =
                Cell::from_code(value).ok_or(Error::InvalidCellValue { value, position })?;
        }
        Ok(board)
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn codes(&self) -> [u8; CELL_COUNT] {
        self.cells.map(Cell::code)
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Cell::Empty)
    }

    /// Places a mark on an empty cell.
    pub fn place(&mut self, index: usize, player: PlayerId) -> Result<()> {
        match self.get(index) {
            None => Err(Error::CellOutOfRange { cell: index }),
            Some(Cell::Empty) => {
                self.cells[index] = player.into();
                Ok(())
            }
            Some(_) => Err(Error::CellOccupied { cell: index }),
        }
    }

    /// Copy of this board with `player` on `index`. The caller guarantees the cell is empty.
    pub(crate) fn with_mark(&self, index: usize, player: PlayerId) -> Board {
        let mut next = *self;
        next.cells[index] = player.into();
        next
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, player: PlayerId) -> usize {
        let target = Cell::from(player);
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Side to move assuming Player1 opened and turns alternated.
    pub fn inferred_turn(&self) -> PlayerId {
        if self.count(PlayerId::Player1) > self.count(PlayerId::Player2) {
            PlayerId::Player2
        } else {
            PlayerId::Player1
        }
    }

    /// Nine-character form, e.g. `XX.OO....`
    pub fn to_compact_string(&self) -> String {
        self.cells.iter().map(|cell| cell.symbol()).collect()
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Accepts `X`, `O` and `.`/`-`/`_`/space, case-insensitive. `/`, `|`,
    /// newlines and carriage returns are treated as row separators.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for (position, character) in s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | '\n' | '\r'))
            .enumerate()
        {
            let cell = Cell::from_symbol(character)
                .ok_or(Error::InvalidCellCharacter { character, position })?;
            cells.push(cell);
        }
        Board::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        let err = Board::from_cells(&[Cell::Empty; 8]).unwrap_err();
        assert!(matches!(err, Error::InvalidBoardLength { expected: 9, got: 8 }));

        let err = Board::from_cells(&[Cell::Empty; 10]).unwrap_err();
        assert!(matches!(err, Error::InvalidBoardLength { got: 10, .. }));
    }

    #[test]
    fn test_from_codes_rejects_unknown_values() {
        let err = Board::from_codes(&[0, 1, 2, 0, 3, 0, 0, 0, 0]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCellValue {
                value: 3,
                position: 4
            }
        ));

        let board = Board::from_codes(&[1, 1, 0, 2, 2, 0, 0, 0, 0]).unwrap();
        assert_eq!(board.to_compact_string(), "XX.OO....");
        assert_eq!(board.codes(), [1, 1, 0, 2, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "xo./.x./..o".parse().unwrap();
        assert_eq!(board[0], Cell::Player1);
        assert_eq!(board[1], Cell::Player2);
        assert_eq!(board[4], Cell::Player1);
        assert_eq!(board[8], Cell::Player2);
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");

        let err = "XO?......".parse::<Board>().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCellCharacter {
                character: '?',
                position: 2
            }
        ));
        assert!("XO".parse::<Board>().is_err());
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut board = Board::new();
        board.place(4, PlayerId::Player1).unwrap();
        assert!(matches!(
            board.place(4, PlayerId::Player2),
            Err(Error::CellOccupied { cell: 4 })
        ));
        assert!(matches!(
            board.place(9, PlayerId::Player2),
            Err(Error::CellOutOfRange { cell: 9 })
        ));
        assert_eq!(board.inferred_turn(), PlayerId::Player2);
    }

    #[test]
    fn test_serde_uses_compact_string() {
        let board: Board = "X...O...X".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"cells":"X...O...X"}"#);
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        assert!(serde_json::from_str::<Board>(r#"{"cells":"X..."}"#).is_err());
    }
}
